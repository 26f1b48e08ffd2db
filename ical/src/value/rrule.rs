// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule value as defined in RFC 5545 Section 3.3.10.

use std::fmt::{self, Display};
use std::str::FromStr;

use chumsky::extra::ParserExtra;
use chumsky::input::ValueInput;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::calendar::Weekday;
use crate::error::{FormatError, FormatReason, RuleValidationError, ValueError, ValueKind};
use crate::formatter::write_rrule;
use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE, KW_RRULE_BYDAY,
    KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY, KW_RRULE_BYSECOND,
    KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO, KW_RRULE_BYYEARDAY, KW_RRULE_COUNT, KW_RRULE_FREQ,
    KW_RRULE_FREQ_DAILY, KW_RRULE_FREQ_HOURLY, KW_RRULE_FREQ_MINUTELY, KW_RRULE_FREQ_MONTHLY,
    KW_RRULE_FREQ_SECONDLY, KW_RRULE_FREQ_WEEKLY, KW_RRULE_FREQ_YEARLY, KW_RRULE_INTERVAL,
    KW_RRULE_UNTIL, KW_RRULE_WKST,
};
use crate::value::datetime::{DateTimePoint, RawDateTime, value_date_or_date_time};
use crate::value::miscellaneous::{ValueExpected, is_positive, parse_all, signed_int, uint};

/// Recurrence frequency
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter, strum::FromRepr,
)]
#[repr(u8)]
#[expect(missing_docs)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Whether the frequency steps by a unit shorter than a day.
    #[must_use]
    pub const fn is_sub_daily(self) -> bool {
        matches!(
            self,
            Frequency::Secondly | Frequency::Minutely | Frequency::Hourly
        )
    }

    /// The `FREQ` keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Frequency::Secondly => KW_RRULE_FREQ_SECONDLY,
            Frequency::Minutely => KW_RRULE_FREQ_MINUTELY,
            Frequency::Hourly => KW_RRULE_FREQ_HOURLY,
            Frequency::Daily => KW_RRULE_FREQ_DAILY,
            Frequency::Weekly => KW_RRULE_FREQ_WEEKLY,
            Frequency::Monthly => KW_RRULE_FREQ_MONTHLY,
            Frequency::Yearly => KW_RRULE_FREQ_YEARLY,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Day of week with optional signed ordinal, such as `2FR` or `-1SU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayNum {
    /// Day of the week
    pub weekday: Weekday,
    /// Occurrence within the month or year, counted from the end when
    /// negative
    pub ordinal: Option<i8>,
}

impl WeekdayNum {
    /// Every `weekday` of the period.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            weekday,
            ordinal: None,
        }
    }

    /// The `ordinal`-th `weekday` of the period.
    #[must_use]
    pub const fn nth(ordinal: i8, weekday: Weekday) -> Self {
        Self {
            weekday,
            ordinal: Some(ordinal),
        }
    }
}

impl From<Weekday> for WeekdayNum {
    fn from(weekday: Weekday) -> Self {
        WeekdayNum::every(weekday)
    }
}

impl Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ordinal) = self.ordinal {
            write!(f, "{ordinal}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

/// How a rule ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RecurBound {
    /// No `COUNT` or `UNTIL`; expansion stops at the caller's horizon.
    #[default]
    Forever,

    /// `COUNT`: total number of instances, the anchor included.
    Count(u32),

    /// `UNTIL`: inclusive last instant.
    Until(DateTimePoint),
}

/// Validated recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecurRule {
    freq: Frequency,
    interval: u32,
    bound: RecurBound,
    by_second: Vec<u8>,
    by_minute: Vec<u8>,
    by_hour: Vec<u8>,
    by_day: Vec<WeekdayNum>,
    by_month_day: Vec<i8>,
    by_year_day: Vec<i16>,
    by_week_no: Vec<i8>,
    by_month: Vec<u8>,
    by_set_pos: Vec<i16>,
    week_start: Weekday,
}

impl RecurRule {
    /// Start building a rule with the given frequency.
    #[must_use]
    pub fn builder(freq: Frequency) -> RecurRuleBuilder {
        RecurRuleBuilder {
            rule: RecurRule {
                freq,
                interval: 1,
                bound: RecurBound::Forever,
                by_second: Vec::new(),
                by_minute: Vec::new(),
                by_hour: Vec::new(),
                by_day: Vec::new(),
                by_month_day: Vec::new(),
                by_year_day: Vec::new(),
                by_week_no: Vec::new(),
                by_month: Vec::new(),
                by_set_pos: Vec::new(),
                week_start: Weekday::Monday,
            },
            count: None,
            until: None,
        }
    }

    /// Frequency of recurrence
    #[must_use]
    pub const fn freq(&self) -> Frequency {
        self.freq
    }

    /// Interval between periods, at least 1
    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// How the rule ends
    #[must_use]
    pub const fn bound(&self) -> &RecurBound {
        &self.bound
    }

    /// Second specifier, 0-60
    #[must_use]
    pub fn by_second(&self) -> &[u8] {
        &self.by_second
    }

    /// Minute specifier, 0-59
    #[must_use]
    pub fn by_minute(&self) -> &[u8] {
        &self.by_minute
    }

    /// Hour specifier, 0-23
    #[must_use]
    pub fn by_hour(&self) -> &[u8] {
        &self.by_hour
    }

    /// Day of week specifier
    #[must_use]
    pub fn by_day(&self) -> &[WeekdayNum] {
        &self.by_day
    }

    /// Day of month specifier, signed 1-31
    #[must_use]
    pub fn by_month_day(&self) -> &[i8] {
        &self.by_month_day
    }

    /// Day of year specifier, signed 1-366
    #[must_use]
    pub fn by_year_day(&self) -> &[i16] {
        &self.by_year_day
    }

    /// Week number specifier, signed 1-53
    #[must_use]
    pub fn by_week_no(&self) -> &[i8] {
        &self.by_week_no
    }

    /// Month specifier, 1-12
    #[must_use]
    pub fn by_month(&self) -> &[u8] {
        &self.by_month
    }

    /// Position in the period's set, signed 1-366
    #[must_use]
    pub fn by_set_pos(&self) -> &[i16] {
        &self.by_set_pos
    }

    /// Start day of week
    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Whether any BYxxx part other than `BYSETPOS` is present.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !(self.by_second.is_empty()
            && self.by_minute.is_empty()
            && self.by_hour.is_empty()
            && self.by_day.is_empty()
            && self.by_month_day.is_empty()
            && self.by_year_day.is_empty()
            && self.by_week_no.is_empty()
            && self.by_month.is_empty())
    }
}

impl Display for RecurRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rrule(f, self)
    }
}

impl FromStr for RecurRule {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_recur(s)
    }
}

/// Builder for [`RecurRule`]; nothing is checked until [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RecurRuleBuilder {
    rule: RecurRule,
    count: Option<u32>,
    until: Option<DateTimePoint>,
}

impl RecurRuleBuilder {
    /// Interval between periods.
    #[must_use]
    pub fn interval(mut self, interval: u32) -> Self {
        self.rule.interval = interval;
        self
    }

    /// Total number of instances, the anchor included.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Inclusive end of the recurrence.
    #[must_use]
    pub fn until(mut self, until: DateTimePoint) -> Self {
        self.until = Some(until);
        self
    }

    /// `BYSECOND` members.
    #[must_use]
    pub fn by_second(mut self, values: impl IntoIterator<Item = u8>) -> Self {
        self.rule.by_second = values.into_iter().collect();
        self
    }

    /// `BYMINUTE` members.
    #[must_use]
    pub fn by_minute(mut self, values: impl IntoIterator<Item = u8>) -> Self {
        self.rule.by_minute = values.into_iter().collect();
        self
    }

    /// `BYHOUR` members.
    #[must_use]
    pub fn by_hour(mut self, values: impl IntoIterator<Item = u8>) -> Self {
        self.rule.by_hour = values.into_iter().collect();
        self
    }

    /// `BYDAY` members.
    #[must_use]
    pub fn by_day(mut self, values: impl IntoIterator<Item = WeekdayNum>) -> Self {
        self.rule.by_day = values.into_iter().collect();
        self
    }

    /// `BYMONTHDAY` members.
    #[must_use]
    pub fn by_month_day(mut self, values: impl IntoIterator<Item = i8>) -> Self {
        self.rule.by_month_day = values.into_iter().collect();
        self
    }

    /// `BYYEARDAY` members.
    #[must_use]
    pub fn by_year_day(mut self, values: impl IntoIterator<Item = i16>) -> Self {
        self.rule.by_year_day = values.into_iter().collect();
        self
    }

    /// `BYWEEKNO` members.
    #[must_use]
    pub fn by_week_no(mut self, values: impl IntoIterator<Item = i8>) -> Self {
        self.rule.by_week_no = values.into_iter().collect();
        self
    }

    /// `BYMONTH` members.
    #[must_use]
    pub fn by_month(mut self, values: impl IntoIterator<Item = u8>) -> Self {
        self.rule.by_month = values.into_iter().collect();
        self
    }

    /// `BYSETPOS` members.
    #[must_use]
    pub fn by_set_pos(mut self, values: impl IntoIterator<Item = i16>) -> Self {
        self.rule.by_set_pos = values.into_iter().collect();
        self
    }

    /// `WKST`, Monday unless set.
    #[must_use]
    pub fn week_start(mut self, weekday: Weekday) -> Self {
        self.rule.week_start = weekday;
        self
    }

    /// Check the RFC 5545 constraints and produce the rule.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn build(self) -> Result<RecurRule, RuleValidationError> {
        let Self {
            mut rule,
            count,
            until,
        } = self;

        if rule.interval == 0 {
            return Err(RuleValidationError::ZeroInterval);
        }
        rule.bound = match (count, until) {
            (Some(_), Some(_)) => return Err(RuleValidationError::CountWithUntil),
            (Some(0), None) => return Err(RuleValidationError::ZeroCount),
            (Some(count), None) => RecurBound::Count(count),
            (None, Some(until)) => RecurBound::Until(until),
            (None, None) => RecurBound::Forever,
        };

        check_members(KW_RRULE_BYSECOND, &rule.by_second, |v| v <= 60)?;
        check_members(KW_RRULE_BYMINUTE, &rule.by_minute, |v| v <= 59)?;
        check_members(KW_RRULE_BYHOUR, &rule.by_hour, |v| v <= 23)?;
        check_members(KW_RRULE_BYMONTH, &rule.by_month, |v| (1..=12).contains(&v))?;
        check_members(KW_RRULE_BYMONTHDAY, &rule.by_month_day, signed_within(31))?;
        check_members(KW_RRULE_BYYEARDAY, &rule.by_year_day, signed_within(366))?;
        check_members(KW_RRULE_BYWEEKNO, &rule.by_week_no, signed_within(53))?;
        check_members(KW_RRULE_BYSETPOS, &rule.by_set_pos, signed_within(366))?;
        let ordinals: Vec<i8> = rule.by_day.iter().filter_map(|d| d.ordinal).collect();
        check_members(KW_RRULE_BYDAY, &ordinals, signed_within(53))?;

        let freq = rule.freq;
        let not_allowed = |part| Err(RuleValidationError::PartNotAllowed { part, freq });
        if !rule.by_week_no.is_empty() && freq != Frequency::Yearly {
            return not_allowed(KW_RRULE_BYWEEKNO);
        }
        if !rule.by_year_day.is_empty()
            && matches!(
                freq,
                Frequency::Daily | Frequency::Weekly | Frequency::Monthly
            )
        {
            return not_allowed(KW_RRULE_BYYEARDAY);
        }
        if !rule.by_month_day.is_empty() && freq == Frequency::Weekly {
            return not_allowed(KW_RRULE_BYMONTHDAY);
        }
        // ordinals under other frequencies are kept but never consulted
        if !ordinals.is_empty() && !rule.by_week_no.is_empty() {
            return Err(RuleValidationError::OrdinalNotAllowed);
        }
        if !rule.by_set_pos.is_empty() && !rule.has_filters() {
            return Err(RuleValidationError::SetPosAlone);
        }

        Ok(rule)
    }
}

fn signed_within(max: i64) -> impl Fn(i64) -> bool {
    move |v| v != 0 && v.abs() <= max
}

fn check_members<T: Copy + Into<i64>>(
    part: &'static str,
    values: &[T],
    allowed: impl Fn(i64) -> bool,
) -> Result<(), RuleValidationError> {
    match values.iter().map(|&v| v.into()).find(|&v| !allowed(v)) {
        Some(value) => Err(RuleValidationError::OutOfRange { part, value }),
        None => Ok(()),
    }
}

/// Parse RRULE text and validate it.
pub(crate) fn parse_recur(src: &str) -> Result<RecurRule, ValueError> {
    let parts = parse_all(value_rrule(), src, ValueKind::Recur)?;
    build_from_parts(parts, src)
}

fn build_from_parts(parts: Vec<Part>, src: &str) -> Result<RecurRule, ValueError> {
    let mut seen: Vec<&'static str> = Vec::with_capacity(parts.len());
    for part in &parts {
        let name = match part {
            Part::Unknown(name) => {
                let reason = FormatReason::UnknownRulePart { name: name.clone() };
                return Err(FormatError::new(ValueKind::Recur, src, reason).into());
            }
            part => part.name(),
        };
        if seen.contains(&name) {
            return Err(RuleValidationError::DuplicatePart { part: name }.into());
        }
        seen.push(name);
    }

    let freq = parts
        .iter()
        .find_map(|part| match part {
            Part::Freq(freq) => Some(*freq),
            _ => None,
        })
        .ok_or(RuleValidationError::MissingFrequency)?;

    let mut builder = RecurRule::builder(freq);
    for part in parts {
        builder = match part {
            Part::Freq(_) | Part::Unknown(_) => builder,
            Part::Until(raw) => builder.until(raw.resolve(src, ValueKind::Recur, None)?),
            Part::Count(count) => builder.count(count),
            Part::Interval(interval) => builder.interval(interval),
            Part::BySecond(v) => builder.by_second(narrow(KW_RRULE_BYSECOND, v)?),
            Part::ByMinute(v) => builder.by_minute(narrow(KW_RRULE_BYMINUTE, v)?),
            Part::ByHour(v) => builder.by_hour(narrow(KW_RRULE_BYHOUR, v)?),
            Part::ByDay(v) => {
                let days = v
                    .into_iter()
                    .map(|(ordinal, weekday)| {
                        let ordinal = ordinal
                            .map(|n| narrow_one(KW_RRULE_BYDAY, n))
                            .transpose()?;
                        Ok(WeekdayNum { weekday, ordinal })
                    })
                    .collect::<Result<Vec<_>, RuleValidationError>>()?;
                builder.by_day(days)
            }
            Part::ByMonthDay(v) => builder.by_month_day(narrow(KW_RRULE_BYMONTHDAY, v)?),
            Part::ByYearDay(v) => builder.by_year_day(narrow(KW_RRULE_BYYEARDAY, v)?),
            Part::ByWeekNo(v) => builder.by_week_no(narrow(KW_RRULE_BYWEEKNO, v)?),
            Part::ByMonth(v) => builder.by_month(narrow(KW_RRULE_BYMONTH, v)?),
            Part::BySetPos(v) => builder.by_set_pos(narrow(KW_RRULE_BYSETPOS, v)?),
            Part::Wkst(weekday) => builder.week_start(weekday),
        };
    }
    Ok(builder.build()?)
}

fn narrow_one<T: TryFrom<i64>>(part: &'static str, value: i64) -> Result<T, RuleValidationError> {
    T::try_from(value).map_err(|_| RuleValidationError::OutOfRange { part, value })
}

fn narrow<T: TryFrom<i64>>(
    part: &'static str,
    values: Vec<i64>,
) -> Result<Vec<T>, RuleValidationError> {
    values.into_iter().map(|v| narrow_one(part, v)).collect()
}

#[derive(Debug, Clone)]
enum Part {
    Freq(Frequency),
    Until(RawDateTime),
    Count(u32),
    Interval(u32),
    BySecond(Vec<i64>),
    ByMinute(Vec<i64>),
    ByHour(Vec<i64>),
    ByDay(Vec<(Option<i64>, Weekday)>),
    ByMonthDay(Vec<i64>),
    ByYearDay(Vec<i64>),
    ByWeekNo(Vec<i64>),
    ByMonth(Vec<i64>),
    BySetPos(Vec<i64>),
    Wkst(Weekday),
    Unknown(String),
}

impl Part {
    const fn name(&self) -> &'static str {
        match self {
            Part::Freq(_) => KW_RRULE_FREQ,
            Part::Until(_) => KW_RRULE_UNTIL,
            Part::Count(_) => KW_RRULE_COUNT,
            Part::Interval(_) => KW_RRULE_INTERVAL,
            Part::BySecond(_) => KW_RRULE_BYSECOND,
            Part::ByMinute(_) => KW_RRULE_BYMINUTE,
            Part::ByHour(_) => KW_RRULE_BYHOUR,
            Part::ByDay(_) => KW_RRULE_BYDAY,
            Part::ByMonthDay(_) => KW_RRULE_BYMONTHDAY,
            Part::ByYearDay(_) => KW_RRULE_BYYEARDAY,
            Part::ByWeekNo(_) => KW_RRULE_BYWEEKNO,
            Part::ByMonth(_) => KW_RRULE_BYMONTH,
            Part::BySetPos(_) => KW_RRULE_BYSETPOS,
            Part::Wkst(_) => KW_RRULE_WKST,
            Part::Unknown(_) => "",
        }
    }
}

const KNOWN_PARTS: [&str; 14] = [
    KW_RRULE_FREQ,
    KW_RRULE_UNTIL,
    KW_RRULE_COUNT,
    KW_RRULE_INTERVAL,
    KW_RRULE_BYSECOND,
    KW_RRULE_BYMINUTE,
    KW_RRULE_BYHOUR,
    KW_RRULE_BYDAY,
    KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYYEARDAY,
    KW_RRULE_BYWEEKNO,
    KW_RRULE_BYMONTH,
    KW_RRULE_BYSETPOS,
    KW_RRULE_WKST,
];

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// recur           = recur-rule-part *( ";" recur-rule-part )
///                 ;
///                 ; The rule parts are not ordered in any
///                 ; particular sequence.
///                 ;
///                 ; The FREQ rule part is REQUIRED,
///                 ; but MUST NOT occur more than once.
///                 ;
///                 ; The UNTIL or COUNT rule parts are OPTIONAL,
///                 ; but they MUST NOT occur in the same 'recur'.
///                 ;
///                 ; The other rule parts are OPTIONAL,
///                 ; but MUST NOT occur more than once.
/// ```
///
/// Only the grammar is checked here; member ranges and part combinations
/// are checked by [`RecurRuleBuilder::build`].
fn value_rrule<'src, I, E>() -> impl Parser<'src, I, Vec<Part>, E>
where
    I: ValueInput<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    recur_rule_part()
        .separated_by(just(';'))
        .at_least(1)
        .collect()
}

/// ```txt
/// recur-rule-part = ( "FREQ" "=" freq )
///                 / ( "UNTIL" "=" enddate )
///                 / ( "COUNT" "=" 1*DIGIT )
///                 / ( "INTERVAL" "=" 1*DIGIT )
///                 / ( "BYSECOND" "=" byseclist )
///                 / ( "BYMINUTE" "=" byminlist )
///                 / ( "BYHOUR" "=" byhrlist )
///                 / ( "BYDAY" "=" bywdaylist )
///                 / ( "BYMONTHDAY" "=" bymodaylist )
///                 / ( "BYYEARDAY" "=" byyrdaylist )
///                 / ( "BYWEEKNO" "=" bywknolist )
///                 / ( "BYMONTH" "=" bymolist )
///                 / ( "BYSETPOS" "=" bysplist )
///                 / ( "WKST" "=" weekday )
/// ```
fn recur_rule_part<'src, I, E>() -> impl Parser<'src, I, Part, E>
where
    I: ValueInput<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let kw = |kw| just(kw).ignore_then(just('='));
    let int_list = || {
        signed_int()
            .separated_by(just(','))
            .at_least(1)
            .collect::<Vec<i64>>()
    };

    let known = choice((
        kw(KW_RRULE_FREQ).ignore_then(freq()).map(Part::Freq),
        kw(KW_RRULE_UNTIL)
            .ignore_then(value_date_or_date_time())
            .map(Part::Until),
        kw(KW_RRULE_COUNT).ignore_then(uint()).map(Part::Count),
        kw(KW_RRULE_INTERVAL).ignore_then(uint()).map(Part::Interval),
        kw(KW_RRULE_BYSECOND).ignore_then(int_list()).map(Part::BySecond),
        kw(KW_RRULE_BYMINUTE).ignore_then(int_list()).map(Part::ByMinute),
        kw(KW_RRULE_BYHOUR).ignore_then(int_list()).map(Part::ByHour),
        kw(KW_RRULE_BYDAY).ignore_then(bywdaylist()).map(Part::ByDay),
        kw(KW_RRULE_BYMONTHDAY)
            .ignore_then(int_list())
            .map(Part::ByMonthDay),
        kw(KW_RRULE_BYYEARDAY)
            .ignore_then(int_list())
            .map(Part::ByYearDay),
        kw(KW_RRULE_BYWEEKNO).ignore_then(int_list()).map(Part::ByWeekNo),
        kw(KW_RRULE_BYMONTH).ignore_then(int_list()).map(Part::ByMonth),
        kw(KW_RRULE_BYSETPOS).ignore_then(int_list()).map(Part::BySetPos),
        kw(KW_RRULE_WKST).ignore_then(weekday()).map(Part::Wkst),
    ));

    // x-name and other unrecognized parts, reported after parsing
    let unknown = select! { c @ ('A'..='Z' | 'a'..='z' | '0'..='9' | '-') => c }
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|name, span| {
            if KNOWN_PARTS.contains(&name.as_str()) {
                Err(E::Error::expected_found(
                    [ValueExpected::RulePartName],
                    None,
                    span,
                ))
            } else {
                Ok(name)
            }
        })
        .then_ignore(just('='))
        .then_ignore(none_of(";").repeated())
        .map(Part::Unknown);

    choice((known, unknown))
}

/// ```txt
/// freq        = "SECONDLY" / "MINUTELY" / "HOURLY" / "DAILY"
///             / "WEEKLY" / "MONTHLY" / "YEARLY"
/// ```
fn freq<'src, I, E>() -> impl Parser<'src, I, Frequency, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just(KW_RRULE_FREQ_SECONDLY).to(Frequency::Secondly),
        just(KW_RRULE_FREQ_MINUTELY).to(Frequency::Minutely),
        just(KW_RRULE_FREQ_HOURLY).to(Frequency::Hourly),
        just(KW_RRULE_FREQ_DAILY).to(Frequency::Daily),
        just(KW_RRULE_FREQ_WEEKLY).to(Frequency::Weekly),
        just(KW_RRULE_FREQ_MONTHLY).to(Frequency::Monthly),
        just(KW_RRULE_FREQ_YEARLY).to(Frequency::Yearly),
    ))
}

/// ```txt
/// bywdaylist  = ( weekdaynum *("," weekdaynum) )
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ```
fn bywdaylist<'src, I, E>() -> impl Parser<'src, I, Vec<(Option<i64>, Weekday)>, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let ordwk = is_positive()
        .then(uint())
        .map(|(positive, n)| if positive { i64::from(n) } else { -i64::from(n) });

    ordwk
        .or_not()
        .then(weekday())
        .separated_by(just(','))
        .at_least(1)
        .collect()
}

/// ```txt
/// weekday     = "SU" / "MO" / "TU" / "WE" / "TH" / "FR" / "SA"
/// ```
fn weekday<'src, I, E>() -> impl Parser<'src, I, Weekday, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just(KW_DAY_SU).to(Weekday::Sunday),
        just(KW_DAY_MO).to(Weekday::Monday),
        just(KW_DAY_TU).to(Weekday::Tuesday),
        just(KW_DAY_WE).to(Weekday::Wednesday),
        just(KW_DAY_TH).to(Weekday::Thursday),
        just(KW_DAY_FR).to(Weekday::Friday),
        just(KW_DAY_SA).to(Weekday::Saturday),
    ))
}
