// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Proleptic Gregorian calendar arithmetic.
//!
//! Dates are handled either as `(year, month, day)` triples or as epoch days,
//! where day `0` is 1970-01-01. All functions are pure; the only fallible one
//! is [`resolve_signed_index`].

use std::fmt::{self, Display};

use crate::error::CalendarRangeError;
use crate::keyword::{KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE};

/// Day of the week, Monday first as in ISO 8601.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter, strum::FromRepr,
)]
#[repr(u8)]
#[expect(missing_docs)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// Zero-based index counted from Monday.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Number of days from `start` forward to `self`, in `0..7`.
    #[must_use]
    pub const fn days_since(self, start: Weekday) -> u8 {
        (self.index() + 7 - start.index()) % 7
    }

    /// Parse a two-letter RFC 5545 weekday code such as `MO`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            KW_DAY_MO => Some(Weekday::Monday),
            KW_DAY_TU => Some(Weekday::Tuesday),
            KW_DAY_WE => Some(Weekday::Wednesday),
            KW_DAY_TH => Some(Weekday::Thursday),
            KW_DAY_FR => Some(Weekday::Friday),
            KW_DAY_SA => Some(Weekday::Saturday),
            KW_DAY_SU => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// The two-letter RFC 5545 weekday code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Weekday::Monday => KW_DAY_MO,
            Weekday::Tuesday => KW_DAY_TU,
            Weekday::Wednesday => KW_DAY_WE,
            Weekday::Thursday => KW_DAY_TH,
            Weekday::Friday => KW_DAY_FR,
            Weekday::Saturday => KW_DAY_SA,
            Weekday::Sunday => KW_DAY_SU,
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(feature = "jiff")]
impl From<Weekday> for jiff::civil::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => jiff::civil::Weekday::Monday,
            Weekday::Tuesday => jiff::civil::Weekday::Tuesday,
            Weekday::Wednesday => jiff::civil::Weekday::Wednesday,
            Weekday::Thursday => jiff::civil::Weekday::Thursday,
            Weekday::Friday => jiff::civil::Weekday::Friday,
            Weekday::Saturday => jiff::civil::Weekday::Saturday,
            Weekday::Sunday => jiff::civil::Weekday::Sunday,
        }
    }
}

/// Gregorian leap year rule: divisible by 4, except centuries not divisible
/// by 400.
#[must_use]
pub const fn is_leap_year(year: i16) -> bool {
    let year = year as i32;
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month, or `0` if `month` is not in `1..=12`.
#[must_use]
pub const fn days_in_month(year: i16, month: i8) -> i8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in the given year.
#[must_use]
pub const fn days_in_year(year: i16) -> i16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Ordinal day of the year, `1..=366`.
#[must_use]
pub fn day_of_year(year: i16, month: i8, day: i8) -> i16 {
    let days = days_from_civil(year, month, day) - days_from_civil(year, 1, 1);
    // fits: at most 365
    #[expect(clippy::cast_possible_truncation)]
    let days = days as i16;
    days + 1
}

/// Day of the week of a calendar date.
#[must_use]
pub fn weekday_of(year: i16, month: i8, day: i8) -> Weekday {
    weekday_from_days(days_from_civil(year, month, day))
}

/// Day of the week of an epoch day.
#[must_use]
pub fn weekday_from_days(days: i64) -> Weekday {
    // 1970-01-01 was a Thursday
    let index = (days + 3).rem_euclid(7);
    u8::try_from(index)
        .ok()
        .and_then(Weekday::from_repr)
        .unwrap_or(Weekday::Monday)
}

/// ISO 8601 week date: the ISO year and the week number `1..=53`.
///
/// Week 1 is the week containing the year's first Thursday, so the ISO
/// year differs from the calendar year for a few days around New Year.
#[must_use]
pub fn iso_week_number(year: i16, month: i8, day: i8) -> (i16, i8) {
    week_number(year, month, day, Weekday::Monday)
}

/// Week number following the RFC 5545 `WKST` convention.
///
/// Weeks begin on `week_start`, and week 1 is the first week holding at
/// least four days of the year. With `Weekday::Monday` this is ISO 8601.
#[must_use]
pub fn week_number(year: i16, month: i8, day: i8, week_start: Weekday) -> (i16, i8) {
    let days = days_from_civil(year, month, day);
    let first = week_one_start(year, week_start);
    if days < first {
        let prev = year - 1;
        return (prev, weeks_in_year(prev, week_start));
    }

    let week = (days - first) / 7 + 1;
    let total = i64::from(weeks_in_year(year, week_start));
    if week > total {
        (year + 1, 1)
    } else {
        // fits: at most 53
        #[expect(clippy::cast_possible_truncation)]
        let week = week as i8;
        (year, week)
    }
}

/// Epoch day on which week 1 of `year` begins.
#[must_use]
pub fn week_one_start(year: i16, week_start: Weekday) -> i64 {
    let jan1 = days_from_civil(year, 1, 1);
    let offset = i64::from(weekday_from_days(jan1).days_since(week_start));
    let start = jan1 - offset;
    // the week holding Jan 1 must keep at least four days in this year
    if 7 - offset < 4 { start + 7 } else { start }
}

/// Number of weeks, 52 or 53, in `year` under the given week start.
#[must_use]
pub fn weeks_in_year(year: i16, week_start: Weekday) -> i8 {
    let weeks = (week_one_start(year + 1, week_start) - week_one_start(year, week_start)) / 7;
    if weeks > 52 { 53 } else { 52 }
}

/// Resolve an RFC 5545 signed index against a sequence of `len` elements.
///
/// Positive indices are 1-based from the start, negative ones count from the
/// end (`-1` is the last element).
///
/// # Errors
///
/// Fails when `index` is zero or its magnitude exceeds `len`.
pub fn resolve_signed_index(index: i32, len: usize) -> Result<usize, CalendarRangeError> {
    let magnitude = usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX);
    if index == 0 || magnitude > len {
        return Err(CalendarRangeError::SignedIndex { index, len });
    }

    if index > 0 {
        Ok(magnitude - 1)
    } else {
        Ok(len - magnitude)
    }
}

/// The `n`-th `weekday` inside the inclusive epoch-day range
/// `first..=last`, counting from the end when `n` is negative.
#[must_use]
pub fn nth_weekday_in_range(first: i64, last: i64, weekday: Weekday, n: i8) -> Option<i64> {
    let steps = 7 * (i64::from(n.unsigned_abs()) - 1);
    let day = match n.signum() {
        1 => {
            let offset = weekday.days_since(weekday_from_days(first));
            first + i64::from(offset) + steps
        }
        -1 => {
            let offset = weekday_from_days(last).days_since(weekday);
            last - i64::from(offset) - steps
        }
        _ => return None,
    };
    (first..=last).contains(&day).then_some(day)
}

/// Days since 1970-01-01 of a proleptic Gregorian date.
///
/// The month and day are not validated; out-of-range values roll over.
#[must_use]
pub fn days_from_civil(year: i16, month: i8, day: i8) -> i64 {
    let (month, day) = (i64::from(month), i64::from(day));
    let year = i64::from(year) - i64::from(month <= 2);
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let yoe = year - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`], returning `(year, month, day)`.
#[must_use]
#[expect(clippy::cast_possible_truncation)] // month and day are bounded by construction
pub fn civil_from_days(days: i64) -> (i32, i8, i8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month as i8, day as i8)
}
