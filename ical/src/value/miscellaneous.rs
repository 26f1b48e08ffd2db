// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Grammar pieces shared by the value parsers.

use std::borrow::Cow;

use chumsky::Parser;
use chumsky::error::RichPattern;
use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::error::{FormatError, FormatReason, ValueKind};

/// Failure reasons when a specific value type was expected but not found.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueExpected {
    /// A 32-bit unsigned integer value was expected
    U32,
    /// A rule part name was expected
    RulePartName,
}

impl From<ValueExpected> for RichPattern<'_, char> {
    fn from(expected: ValueExpected) -> Self {
        match expected {
            ValueExpected::U32 => Self::Label(Cow::Borrowed("u32 out of range")),
            ValueExpected::RulePartName => Self::Label(Cow::Borrowed("rule part name")),
        }
    }
}

/// Run a value parser over the whole of `src`, keeping the first diagnostic.
pub(crate) fn parse_all<'src, T>(
    parser: impl Parser<'src, &'src str, T, extra::Err<Rich<'src, char>>>,
    src: &'src str,
    kind: ValueKind,
) -> Result<T, FormatError> {
    parser
        .then_ignore(end())
        .parse(src)
        .into_result()
        .map_err(|errs| {
            let reason = errs
                .first()
                .map_or_else(|| String::from("invalid syntax"), ToString::to_string);
            FormatError::new(kind, src, FormatReason::Syntax(reason))
        })
}

/// Exactly `width` decimal digits.
pub(crate) fn fixed_digits<'src, I, E>(width: usize) -> impl Parser<'src, I, u32, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .exactly(width)
        .collect::<String>()
        .try_map_with(|str, e| match lexical::parse_partial::<u32, _>(&str) {
            Ok((v, n)) if n == str.len() => Ok(v),
            _ => Err(E::Error::expected_found([ValueExpected::U32], None, e.span())),
        })
}

/// One or more decimal digits fitting in a `u32`.
pub(crate) fn uint<'src, I, E>() -> impl Parser<'src, I, u32, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10) // u32 max is 10 digits: 4_294_967_295
        .collect::<String>()
        .try_map_with(|str, e| match lexical::parse_partial::<u32, _>(&str) {
            Ok((v, n)) if n == str.len() => Ok(v),
            _ => Err(E::Error::expected_found([ValueExpected::U32], None, e.span())),
        })
}

/// Optional `+` / `-` sign, `true` when positive.
pub(crate) fn is_positive<'src, I, E>() -> impl Parser<'src, I, bool, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|c| !matches!(c, Some('-')))
}

/// Signed integer, `[plus / minus] 1*DIGIT`.
pub(crate) fn signed_int<'src, I, E>() -> impl Parser<'src, I, i64, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    is_positive()
        .then(uint())
        .map(|(positive, n)| if positive { i64::from(n) } else { -i64::from(n) })
}
