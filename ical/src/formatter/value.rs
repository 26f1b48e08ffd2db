// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatting for iCalendar values.
//!
//! This module provides functions to format the iCalendar value types
//! defined in RFC 5545 Section 3.3.

use std::fmt::{self, Display, Write};

use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO, KW_RRULE_BYYEARDAY, KW_RRULE_COUNT,
    KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL, KW_RRULE_WKST, KW_TZID,
};
use crate::calendar::Weekday;
use crate::value::{
    DateTimePoint, RecurBound, RecurRule, TimeZoneRef, ValueDate, ValueDuration, ValuePeriod,
    ValueTime,
};

/// Format a date value as `YYYYMMDD`.
///
/// # Errors
///
/// Propagates errors from the writer.
pub fn write_date<W: Write>(w: &mut W, date: ValueDate) -> fmt::Result {
    write!(w, "{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Format a time of day as `HHMMSS`.
///
/// # Errors
///
/// Propagates errors from the writer.
pub fn write_time<W: Write>(w: &mut W, time: ValueTime) -> fmt::Result {
    write!(
        w,
        "{:02}{:02}{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Format a DATE as `YYYYMMDD` or a DATE-TIME as `YYYYMMDDTHHMMSS[Z]`.
///
/// Zoned values are written without their zone, which travels in the
/// `TZID` parameter; see [`write_qualified_date_time`].
///
/// # Errors
///
/// Propagates errors from the writer.
pub fn write_date_time<W: Write>(w: &mut W, value: &DateTimePoint) -> fmt::Result {
    write_date(w, value.date_part())?;
    if let Some(time) = value.time() {
        w.write_char('T')?;
        write_time(w, time)?;
        if *value.zone() == TimeZoneRef::Utc {
            w.write_char('Z')?;
        }
    }
    Ok(())
}

/// Format a value with its zone as `TZID=<name>:<value>`.
///
/// UTC, floating and DATE values have no `TZID` and are written as by
/// [`write_date_time`].
///
/// # Errors
///
/// Propagates errors from the writer.
pub fn write_qualified_date_time<W: Write>(w: &mut W, value: &DateTimePoint) -> fmt::Result {
    if let Some(tzid) = value.zone().tzid().filter(|_| !value.is_date()) {
        write!(w, "{KW_TZID}={tzid}:")?;
    }
    write_date_time(w, value)
}

/// Format a duration value as `P[n]DT[n]H[n]M[n]S` or `P[n]W` (RFC 5545
/// Section 3.3.6).
///
/// Zero-valued parts are dropped, except that a minute part is kept between
/// hours and seconds, and the empty duration is written `PT0H0M0S`.
///
/// # Errors
///
/// Propagates errors from the writer.
pub fn write_duration<W: Write>(w: &mut W, duration: &ValueDuration) -> fmt::Result {
    if duration.is_zero() {
        return w.write_str("PT0H0M0S");
    }
    if duration.is_negative() {
        w.write_char('-')?;
    }
    w.write_char('P')?;

    match *duration {
        ValueDuration::Week { week, .. } => write!(w, "{week}W"),
        ValueDuration::DateTime {
            day,
            hour,
            minute,
            second,
            ..
        } => {
            if day > 0 {
                write!(w, "{day}D")?;
            }
            if hour > 0 || minute > 0 || second > 0 {
                w.write_char('T')?;
            }
            if hour > 0 {
                write!(w, "{hour}H")?;
            }
            // dur-hour only continues into dur-second through dur-minute
            if minute > 0 || (hour > 0 && second > 0) {
                write!(w, "{minute}M")?;
            }
            if second > 0 {
                write!(w, "{second}S")?;
            }
            Ok(())
        }
    }
}

/// Format a period value as `start/end` or `start/duration`.
///
/// # Errors
///
/// Propagates errors from the writer.
pub fn write_period<W: Write>(w: &mut W, period: &ValuePeriod) -> fmt::Result {
    match period {
        ValuePeriod::Explicit { start, end } => {
            write_date_time(w, start)?;
            w.write_char('/')?;
            write_date_time(w, end)
        }
        ValuePeriod::Duration { start, duration } => {
            write_date_time(w, start)?;
            w.write_char('/')?;
            write_duration(w, duration)
        }
    }
}

/// Format a recurrence rule value (RFC 5545 Section 3.3.10).
///
/// Parts are written in a fixed order: `FREQ`, the bound, `INTERVAL` when
/// not 1, the BYxxx parts in grammar order, then `WKST` when not Monday.
///
/// # Errors
///
/// Propagates errors from the writer.
pub fn write_rrule<W: Write>(w: &mut W, rule: &RecurRule) -> fmt::Result {
    write!(w, "{KW_RRULE_FREQ}={}", rule.freq())?;

    match rule.bound() {
        RecurBound::Forever => {}
        RecurBound::Count(count) => write!(w, ";{KW_RRULE_COUNT}={count}")?,
        RecurBound::Until(until) => {
            write!(w, ";{KW_RRULE_UNTIL}=")?;
            write_date_time(w, until)?;
        }
    }

    if rule.interval() != 1 {
        write!(w, ";{KW_RRULE_INTERVAL}={}", rule.interval())?;
    }

    write_list(w, KW_RRULE_BYSECOND, rule.by_second())?;
    write_list(w, KW_RRULE_BYMINUTE, rule.by_minute())?;
    write_list(w, KW_RRULE_BYHOUR, rule.by_hour())?;
    write_list(w, KW_RRULE_BYDAY, rule.by_day())?;
    write_list(w, KW_RRULE_BYMONTHDAY, rule.by_month_day())?;
    write_list(w, KW_RRULE_BYYEARDAY, rule.by_year_day())?;
    write_list(w, KW_RRULE_BYWEEKNO, rule.by_week_no())?;
    write_list(w, KW_RRULE_BYMONTH, rule.by_month())?;
    write_list(w, KW_RRULE_BYSETPOS, rule.by_set_pos())?;

    if rule.week_start() != Weekday::Monday {
        write!(w, ";{KW_RRULE_WKST}={}", rule.week_start())?;
    }
    Ok(())
}

fn write_list<W: Write, T: Display>(w: &mut W, name: &str, values: &[T]) -> fmt::Result {
    if values.is_empty() {
        return Ok(());
    }
    write!(w, ";{name}=")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            w.write_char(',')?;
        }
        write!(w, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{parse_date_or_date_time, parse_duration, parse_period};

    fn format_duration(src: &str) -> String {
        let mut out = String::new();
        write_duration(&mut out, &parse_duration(src).unwrap()).unwrap();
        out
    }

    #[test]
    fn formats_durations() {
        #[rustfmt::skip]
        let cases = [
            ("P1D", "P1D"),
            ("PT1H", "PT1H"),
            ("P1W", "P1W"),
            ("-P2W", "-P2W"),
            ("+P3D", "P3D"),
            ("P15DT5H0M20S", "P15DT5H0M20S"),
            ("PT1H0M5S", "PT1H0M5S"),
            ("PT1H5S", "PT1H0M5S"),
            ("P1DT2H3S", "P1DT2H0M3S"),
            ("PT0M30S", "PT30S"),
            ("P1DT0H", "P1D"),
            ("PT90M", "PT90M"),
            ("PT0S", "PT0H0M0S"),
            ("-PT0S", "PT0H0M0S"),
            ("P0W", "PT0H0M0S"),
            ("P0D", "PT0H0M0S"),
        ];
        for (src, expected) in cases {
            assert_eq!(format_duration(src), expected, "Format {src}");
            assert_eq!(format_duration(expected), expected, "Re-format {expected}");
        }
    }

    #[test]
    fn formats_date_times() {
        let mut out = String::new();
        let value = parse_date_or_date_time("19970714T133000", Some("Europe/Paris")).unwrap();
        write_date_time(&mut out, &value).unwrap();
        assert_eq!(out, "19970714T133000");

        out.clear();
        write_qualified_date_time(&mut out, &value).unwrap();
        assert_eq!(out, "TZID=Europe/Paris:19970714T133000");

        out.clear();
        let value = parse_date_or_date_time("19970714T173000Z", None).unwrap();
        write_qualified_date_time(&mut out, &value).unwrap();
        assert_eq!(out, "19970714T173000Z");

        out.clear();
        let value = parse_date_or_date_time("19970714", Some("Europe/Paris")).unwrap();
        write_qualified_date_time(&mut out, &value).unwrap();
        assert_eq!(out, "19970714");
    }

    #[test]
    fn formats_periods() {
        for src in ["19970101T180000Z/19970102T070000Z", "19970101T180000Z/PT5H30M"] {
            let period = parse_period(src, None).unwrap();
            assert_eq!(period.to_string(), src);
        }
    }
}
