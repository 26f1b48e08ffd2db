// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property value data types defined in RFC 5545 Section 3.3.
//!
//! Each `parse_*` function reads one textual value. Text that breaks the
//! grammar fails with [`ValueError::Format`], well-formed text naming an
//! impossible date or time fails with [`ValueError::CalendarRange`], and a
//! rule breaking an RFC 5545 constraint fails with
//! [`ValueError::RuleValidation`].

mod datetime;
mod duration;
mod miscellaneous;
mod period;
mod rrule;

pub use crate::value::datetime::{DateTimePoint, SECONDS_PER_DAY, TimeZoneRef, ValueDate, ValueTime};
pub use crate::value::duration::ValueDuration;
pub use crate::value::period::ValuePeriod;
pub use crate::value::rrule::{Frequency, RecurBound, RecurRule, RecurRuleBuilder, WeekdayNum};

use crate::error::{FormatError, FormatReason, ValueError, ValueKind};
use crate::value::datetime::{value_date_only, value_date_or_date_time, value_date_time};
use crate::value::duration::{has_calendar_designator, value_duration};
use crate::value::miscellaneous::parse_all;
use crate::value::period::{resolve_period, value_period};

/// Parse a DATE value, `YYYYMMDD`.
///
/// # Errors
///
/// Fails on malformed text or an impossible date.
pub fn parse_date(src: &str) -> Result<DateTimePoint, ValueError> {
    let raw = parse_all(value_date_only(), src, ValueKind::Date)?;
    raw.resolve(src, ValueKind::Date, None)
}

/// Parse a DATE-TIME value, `YYYYMMDD"T"HHMMSS` with an optional `Z`.
///
/// A `tzid` taken from the property's `TZID` parameter makes the value
/// zoned; without it the value is floating, or UTC when suffixed with `Z`.
///
/// # Errors
///
/// Fails on malformed text, an impossible date or time, or a `Z` value
/// combined with a `tzid`.
pub fn parse_date_time(src: &str, tzid: Option<&str>) -> Result<DateTimePoint, ValueError> {
    let raw = parse_all(value_date_time(), src, ValueKind::DateTime)?;
    raw.resolve(src, ValueKind::DateTime, tzid)
}

/// Parse either a DATE or a DATE-TIME value.
///
/// # Errors
///
/// Same as [`parse_date_time`].
pub fn parse_date_or_date_time(src: &str, tzid: Option<&str>) -> Result<DateTimePoint, ValueError> {
    let raw = parse_all(value_date_or_date_time(), src, ValueKind::DateTime)?;
    raw.resolve(src, ValueKind::DateTime, tzid)
}

/// Parse a DURATION value such as `P15DT5H0M20S` or `-P2W`.
///
/// # Errors
///
/// Fails on malformed text; `Y` and month `M` designators get a dedicated
/// reason.
pub fn parse_duration(src: &str) -> Result<ValueDuration, ValueError> {
    parse_all(value_duration(), src, ValueKind::Duration).map_err(|err| {
        if has_calendar_designator(src) {
            FormatError::new(ValueKind::Duration, src, FormatReason::CalendarDesignator).into()
        } else {
            err.into()
        }
    })
}

/// Parse a PERIOD value, `start/end` or `start/duration`.
///
/// # Errors
///
/// Fails on malformed text, impossible dates, zones that differ between
/// start and end, an end before the start or a negative duration.
pub fn parse_period(src: &str, tzid: Option<&str>) -> Result<ValuePeriod, ValueError> {
    match parse_all(value_period(), src, ValueKind::Period) {
        Ok(raw) => resolve_period(raw, src, tzid),
        Err(_) if src.split_once('/').is_some_and(|(_, end)| has_calendar_designator(end)) => {
            let reason = FormatReason::CalendarDesignator;
            Err(FormatError::new(ValueKind::Period, src, reason).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Parse and validate an RRULE value such as `FREQ=MONTHLY;BYDAY=1FR`.
///
/// # Errors
///
/// Fails on malformed text or a rule that breaks RFC 5545 Section 3.3.10.
pub fn parse_rrule(src: &str) -> Result<RecurRule, ValueError> {
    rrule::parse_recur(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarRangeError;

    #[test]
    fn dispatches_date_forms() {
        assert!(parse_date("20190421").unwrap().is_date());
        assert!(parse_date("20190421T090000Z").is_err());
        assert!(parse_date_time("20190421", None).is_err());
        assert!(parse_date_or_date_time("20190421", None).unwrap().is_date());
        assert!(!parse_date_or_date_time("20190421T090000", None).unwrap().is_date());
    }

    #[test]
    fn reports_error_families() {
        assert!(matches!(parse_date("2019042"), Err(ValueError::Format(_))));
        assert!(matches!(
            parse_date("20190230"),
            Err(ValueError::CalendarRange(CalendarRangeError::Day { day: 30, .. }))
        ));
        assert!(matches!(
            parse_date_time("20190421T250000", None),
            Err(ValueError::CalendarRange(CalendarRangeError::Hour { hour: 25 }))
        ));
        assert!(matches!(
            parse_rrule("FREQ=DAILY;COUNT=0"),
            Err(ValueError::RuleValidation(_))
        ));
    }

    #[test]
    fn rejects_calendar_designators() {
        for src in ["P1Y", "P1M", "P1Y2M3DT4H", "-P2M"] {
            let err = parse_duration(src).unwrap_err();
            assert!(
                matches!(
                    err,
                    ValueError::Format(FormatError {
                        reason: FormatReason::CalendarDesignator,
                        ..
                    })
                ),
                "Parse {src} should fail with a calendar designator reason"
            );
        }
        assert!(matches!(
            parse_duration("PT1X"),
            Err(ValueError::Format(FormatError {
                reason: FormatReason::Syntax(_),
                ..
            }))
        ));

        let err = parse_period("19970101T180000Z/P1M", None).unwrap_err();
        assert!(matches!(
            err,
            ValueError::Format(FormatError {
                reason: FormatReason::CalendarDesignator,
                ..
            })
        ));
    }
}
