// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Period of time value as defined in RFC 5545 Section 3.3.9.

use std::fmt::{self, Display};

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::error::{CalendarRangeError, FormatError, FormatReason, ValueError, ValueKind};
use crate::formatter::write_period;
use crate::value::datetime::{DateTimePoint, RawDateTime, value_date_time};
use crate::value::duration::{ValueDuration, value_duration};
use crate::value::miscellaneous::ValueExpected;

/// Period of time value defined in RFC 5545 Section 3.3.9.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValuePeriod {
    /// Start and end date-time
    Explicit {
        /// Start date-time
        start: DateTimePoint,
        /// End date-time
        end: DateTimePoint,
    },

    /// Start date-time and duration
    Duration {
        /// Start date-time
        start: DateTimePoint,
        /// Duration
        duration: ValueDuration,
    },
}

impl ValuePeriod {
    /// Build an explicit period.
    ///
    /// # Errors
    ///
    /// Fails when the zones differ or `end` precedes `start`.
    pub fn explicit(start: DateTimePoint, end: DateTimePoint) -> Result<Self, CalendarRangeError> {
        if start.zone() != end.zone() {
            return Err(CalendarRangeError::PeriodZone);
        }
        if end.wall_clock_seconds() < start.wall_clock_seconds() {
            return Err(CalendarRangeError::PeriodOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(ValuePeriod::Explicit { start, end })
    }

    /// The start of the period.
    #[must_use]
    pub const fn start(&self) -> &DateTimePoint {
        match self {
            ValuePeriod::Explicit { start, .. } | ValuePeriod::Duration { start, .. } => start,
        }
    }

    /// Canonical start/end form.
    ///
    /// The end of a duration period is computed on the start's wall clock.
    ///
    /// # Errors
    ///
    /// Fails when the end leaves years `0..=9999`.
    pub fn to_explicit(&self) -> Result<Self, CalendarRangeError> {
        match self {
            ValuePeriod::Explicit { .. } => Ok(self.clone()),
            ValuePeriod::Duration { start, duration } => {
                let end = start.checked_add_seconds(duration.as_seconds())?;
                Ok(ValuePeriod::Explicit {
                    start: start.clone(),
                    end,
                })
            }
        }
    }
}

impl Display for ValuePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_period(f, self)
    }
}

/// The end part of a period before validation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RawPeriodEnd {
    DateTime(RawDateTime),
    Duration(ValueDuration),
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// period     = period-explicit / period-start
///
/// period-explicit = date-time "/" date-time
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and end.  The start MUST
/// ; be before the end.
///
/// period-start = date-time "/" dur-value
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and positive duration
/// ; of time.
/// ```
pub(crate) fn value_period<'src, I, E>() -> impl Parser<'src, I, (RawDateTime, RawPeriodEnd), E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_date_time().then_ignore(just('/')).then(choice((
        value_date_time().map(RawPeriodEnd::DateTime),
        value_duration().map(RawPeriodEnd::Duration),
    )))
}

/// Validate the parsed parts of a period.
pub(crate) fn resolve_period(
    (start, end): (RawDateTime, RawPeriodEnd),
    src: &str,
    tzid: Option<&str>,
) -> Result<ValuePeriod, ValueError> {
    let start = start.resolve(src, ValueKind::Period, tzid)?;
    match end {
        RawPeriodEnd::DateTime(end) => {
            let end = end.resolve(src, ValueKind::Period, tzid)?;
            Ok(ValuePeriod::explicit(start, end)?)
        }
        RawPeriodEnd::Duration(duration) if duration.is_negative() => {
            let reason = FormatReason::NegativePeriodDuration;
            Err(FormatError::new(ValueKind::Period, src, reason).into())
        }
        RawPeriodEnd::Duration(duration) => Ok(ValuePeriod::Duration { start, duration }),
    }
}
