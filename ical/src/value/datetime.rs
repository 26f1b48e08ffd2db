// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! DATE and DATE-TIME values as defined in RFC 5545 Sections 3.3.4 and 3.3.5.

use std::fmt::{self, Display};
use std::sync::Arc;

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::calendar::{
    Weekday, civil_from_days, day_of_year, days_from_civil, days_in_month, iso_week_number,
    weekday_of,
};
use crate::error::{CalendarRangeError, FormatError, FormatReason, ValueError, ValueKind};
use crate::formatter::{write_date, write_date_time, write_time};
use crate::value::miscellaneous::{ValueExpected, fixed_digits};

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Date value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDate {
    year: i16,
    month: i8,
    day: i8,
}

impl ValueDate {
    /// Create a date, checking it exists in the proleptic Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Fails when the year is outside `0..=9999`, the month outside
    /// `1..=12` or the day does not exist in that month.
    pub fn new(year: i16, month: i8, day: i8) -> Result<Self, CalendarRangeError> {
        if !(0..=9999).contains(&year) {
            return Err(CalendarRangeError::Year {
                year: i64::from(year),
            });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarRangeError::Month {
                month: u32::from(month.unsigned_abs()),
            });
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(CalendarRangeError::Day {
                year,
                month,
                day: u32::from(day.unsigned_abs()),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Date for an epoch day, day `0` being 1970-01-01.
    ///
    /// # Errors
    ///
    /// Fails when the date falls outside years `0..=9999`.
    pub fn from_epoch_days(days: i64) -> Result<Self, CalendarRangeError> {
        let (year, month, day) = civil_from_days(days);
        match i16::try_from(year) {
            Ok(year) if (0..=9999).contains(&year) => Ok(Self { year, month, day }),
            _ => Err(CalendarRangeError::Year {
                year: i64::from(year),
            }),
        }
    }

    /// Year component, 0-9999.
    #[must_use]
    pub const fn year(self) -> i16 {
        self.year
    }

    /// Month component, 1-12.
    #[must_use]
    pub const fn month(self) -> i8 {
        self.month
    }

    /// Day component, 1-31.
    #[must_use]
    pub const fn day(self) -> i8 {
        self.day
    }

    /// Days since 1970-01-01.
    #[must_use]
    pub fn epoch_days(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Day of the week.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        weekday_of(self.year, self.month, self.day)
    }

    /// Day of the year, 1-366.
    #[must_use]
    pub fn ordinal(self) -> i16 {
        day_of_year(self.year, self.month, self.day)
    }

    /// ISO 8601 week-numbering year and week.
    #[must_use]
    pub fn iso_week(self) -> (i16, i8) {
        iso_week_number(self.year, self.month, self.day)
    }

    /// Convert to `jiff::civil::Date`.
    #[cfg(feature = "jiff")]
    #[must_use]
    pub fn civil_date(self) -> jiff::civil::Date {
        self.into()
    }
}

impl Display for ValueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, *self)
    }
}

#[cfg(feature = "jiff")]
impl From<ValueDate> for jiff::civil::Date {
    fn from(value: ValueDate) -> Self {
        jiff::civil::date(value.year, value.month, value.day)
    }
}

/// Time-of-day defined in the RFC 5545 Section 3.3.12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ValueTime {
    /// Midnight.
    pub const MIDNIGHT: ValueTime = ValueTime {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Last second of the day, 23:59:59.
    pub const END_OF_DAY: ValueTime = ValueTime {
        hour: 23,
        minute: 59,
        second: 59,
    };

    /// Create a time of day. A second of `60` is accepted as a leap second.
    ///
    /// # Errors
    ///
    /// Fails when a component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarRangeError> {
        if hour > 23 {
            return Err(CalendarRangeError::Hour {
                hour: u32::from(hour),
            });
        }
        if minute > 59 {
            return Err(CalendarRangeError::Minute {
                minute: u32::from(minute),
            });
        }
        if second > 60 {
            return Err(CalendarRangeError::Second {
                second: u32::from(second),
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Time for a second of the day, wrapping at midnight.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)] // all three fit in u8 after the modulo
    pub fn from_second_of_day(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
        }
    }

    /// Hour component, 0-23.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component, 0-59.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Second component, 0-60 (60 for leap second).
    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Seconds since midnight. A leap second counts as second 59.
    #[must_use]
    pub fn second_of_day(self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second.min(59))
    }

    /// Convert to `jiff::civil::Time`, contracting a leap second to 59.
    #[cfg(feature = "jiff")]
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn civil_time(self) -> jiff::civil::Time {
        jiff::civil::time(
            self.hour as i8,
            self.minute as i8,
            self.second.min(59) as i8,
            0,
        )
    }
}

impl Display for ValueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_time(f, *self)
    }
}

/// Time zone a date-time is anchored to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TimeZoneRef {
    /// No zone; the value reads the same wherever it is observed.
    #[default]
    Floating,

    /// Coordinated Universal Time, written with a trailing `Z`.
    Utc,

    /// A named zone given by a `TZID` parameter.
    Zoned(Arc<str>),
}

impl TimeZoneRef {
    /// Zone named by a `TZID` parameter.
    #[must_use]
    pub fn zoned(tzid: &str) -> Self {
        TimeZoneRef::Zoned(Arc::from(tzid))
    }

    /// The `TZID` name, if any.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match self {
            TimeZoneRef::Zoned(name) => Some(name),
            TimeZoneRef::Floating | TimeZoneRef::Utc => None,
        }
    }

    /// Look the zone up in the IANA database. Floating values have no zone.
    ///
    /// # Errors
    ///
    /// Fails when the `TZID` is not a known IANA name.
    #[cfg(feature = "jiff")]
    pub fn to_time_zone(&self) -> Result<Option<jiff::tz::TimeZone>, jiff::Error> {
        match self {
            TimeZoneRef::Floating => Ok(None),
            TimeZoneRef::Utc => Ok(Some(jiff::tz::TimeZone::UTC)),
            TimeZoneRef::Zoned(name) => jiff::tz::TimeZone::get(name).map(Some),
        }
    }
}

/// A DATE or DATE-TIME value.
///
/// The presence of a time of day tells the two apart. DATE values carry no
/// zone and are always [`TimeZoneRef::Floating`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTimePoint {
    date: ValueDate,
    time: Option<ValueTime>,
    zone: TimeZoneRef,
}

impl DateTimePoint {
    /// A DATE value.
    #[must_use]
    pub const fn date(date: ValueDate) -> Self {
        Self {
            date,
            time: None,
            zone: TimeZoneRef::Floating,
        }
    }

    /// A DATE-TIME value.
    #[must_use]
    pub const fn date_time(date: ValueDate, time: ValueTime, zone: TimeZoneRef) -> Self {
        Self {
            date,
            time: Some(time),
            zone,
        }
    }

    /// The calendar date.
    #[must_use]
    pub const fn date_part(&self) -> ValueDate {
        self.date
    }

    /// The time of day, `None` for DATE values.
    #[must_use]
    pub const fn time(&self) -> Option<ValueTime> {
        self.time
    }

    /// The zone reference.
    #[must_use]
    pub const fn zone(&self) -> &TimeZoneRef {
        &self.zone
    }

    /// Whether this is a DATE value.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        self.time.is_none()
    }

    /// Seconds since 1970-01-01T00:00:00 on this value's own wall clock.
    ///
    /// DATE values count from midnight. The zone is not consulted.
    #[must_use]
    pub fn wall_clock_seconds(&self) -> i64 {
        let seconds = self.time.map_or(0, ValueTime::second_of_day);
        self.date.epoch_days() * i64::from(SECONDS_PER_DAY) + i64::from(seconds)
    }

    /// Shift the wall clock by `seconds`, keeping the zone.
    ///
    /// A DATE value becomes a DATE-TIME unless the shift is a whole number
    /// of days.
    ///
    /// # Errors
    ///
    /// Fails when the result leaves years `0..=9999`.
    pub fn checked_add_seconds(&self, seconds: i64) -> Result<Self, CalendarRangeError> {
        let total = self.wall_clock_seconds() + seconds;
        let per_day = i64::from(SECONDS_PER_DAY);
        let date = ValueDate::from_epoch_days(total.div_euclid(per_day))?;
        let second_of_day = u32::try_from(total.rem_euclid(per_day)).unwrap_or_default();
        if self.is_date() && second_of_day == 0 {
            return Ok(Self::date(date));
        }
        let time = ValueTime::from_second_of_day(second_of_day);
        Ok(Self::date_time(date, time, self.zone.clone()))
    }

    /// Canonical text used to detect duplicates.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Build from a civil date-time in the given zone.
    ///
    /// # Errors
    ///
    /// Fails when the year is outside `0..=9999`.
    #[cfg(feature = "jiff")]
    pub fn from_civil(
        value: jiff::civil::DateTime,
        zone: TimeZoneRef,
    ) -> Result<Self, CalendarRangeError> {
        let date = ValueDate::new(value.year(), value.month(), value.day())?;
        // civil time components are non-negative
        #[expect(clippy::cast_sign_loss)]
        let time = ValueTime::new(value.hour() as u8, value.minute() as u8, value.second() as u8)?;
        Ok(Self::date_time(date, time, zone))
    }

    /// Convert to `jiff::civil::DateTime`; DATE values map to midnight.
    #[cfg(feature = "jiff")]
    #[must_use]
    pub fn civil_date_time(&self) -> jiff::civil::DateTime {
        let time = self.time.unwrap_or(ValueTime::MIDNIGHT);
        self.date.civil_date().to_datetime(time.civil_time())
    }

    /// Resolve the wall-clock value to an instant.
    ///
    /// Floating and DATE values are read in `floating`. Nonexistent local
    /// times (DST gaps) move forward by the gap length and ambiguous ones
    /// (folds) take the earlier offset, as RFC 5545 Section 3.3.5 asks.
    ///
    /// # Errors
    ///
    /// Fails when the `TZID` is unknown or the instant is out of range.
    #[cfg(feature = "jiff")]
    pub fn to_zoned(&self, floating: &jiff::tz::TimeZone) -> Result<jiff::Zoned, jiff::Error> {
        let tz = match (self.is_date(), self.zone.to_time_zone()?) {
            (false, Some(tz)) => tz,
            _ => floating.clone(),
        };
        self.civil_date_time().to_zoned(tz)
    }
}

impl Display for DateTimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date_time(f, self)
    }
}

/// Raw digit groups of a DATE or DATE-TIME before range checks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawDateTime {
    date: (u32, u32, u32),
    time: Option<(u32, u32, u32)>,
    utc: bool,
}

impl RawDateTime {
    /// Check the calendar ranges and attach the zone.
    pub(crate) fn resolve(
        self,
        src: &str,
        kind: ValueKind,
        tzid: Option<&str>,
    ) -> Result<DateTimePoint, ValueError> {
        let (year, month, day) = self.date;
        let date = validate_date(year, month, day)?;
        let Some((hour, minute, second)) = self.time else {
            return Ok(DateTimePoint::date(date));
        };
        let time = validate_time(hour, minute, second)?;

        let zone = match (self.utc, tzid) {
            (true, Some(tzid)) => {
                let reason = FormatReason::UtcWithTzid {
                    tzid: tzid.to_owned(),
                };
                return Err(FormatError::new(kind, src, reason).into());
            }
            (true, None) => TimeZoneRef::Utc,
            (false, Some(tzid)) => TimeZoneRef::zoned(tzid),
            (false, None) => TimeZoneRef::Floating,
        };
        Ok(DateTimePoint::date_time(date, time, zone))
    }
}

fn validate_date(year: u32, month: u32, day: u32) -> Result<ValueDate, CalendarRangeError> {
    // four digits always fit
    let year = i16::try_from(year).map_err(|_| CalendarRangeError::Year {
        year: i64::from(year),
    })?;
    let month = i8::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or(CalendarRangeError::Month { month })?;
    let day = i8::try_from(day)
        .ok()
        .filter(|d| (1..=days_in_month(year, month)).contains(d))
        .ok_or(CalendarRangeError::Day { year, month, day })?;
    ValueDate::new(year, month, day)
}

fn validate_time(hour: u32, minute: u32, second: u32) -> Result<ValueTime, CalendarRangeError> {
    let hour = u8::try_from(hour).map_err(|_| CalendarRangeError::Hour { hour })?;
    let minute = u8::try_from(minute).map_err(|_| CalendarRangeError::Minute { minute })?;
    let second = u8::try_from(second).map_err(|_| CalendarRangeError::Second { second })?;
    ValueTime::new(hour, minute, second)
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date               = date-value
///
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
///
/// Only the digit structure is checked here; ranges are checked by
/// [`RawDateTime::resolve`].
fn value_date<'src, I, E>() -> impl Parser<'src, I, (u32, u32, u32), E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    fixed_digits(4)
        .then(fixed_digits(2))
        .then(fixed_digits(2))
        .map(|((year, month), day)| (year, month, day))
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
///
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-60
/// ;The "60" value is used to account for positive "leap" seconds.
///
/// time-utc     = "Z"
/// ```
fn value_time<'src, I, E>() -> impl Parser<'src, I, ((u32, u32, u32), bool), E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    fixed_digits(2)
        .then(fixed_digits(2))
        .then(fixed_digits(2))
        .then(just('Z').or_not())
        .map(|(((hour, minute), second), utc)| ((hour, minute, second), utc.is_some()))
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date-time  = date "T" time ;As specified in the DATE and TIME
///                            ;value definitions
/// ```
pub(crate) fn value_date_time<'src, I, E>() -> impl Parser<'src, I, RawDateTime, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_date()
        .then_ignore(just('T'))
        .then(value_time())
        .map(|(date, (time, utc))| RawDateTime {
            date,
            time: Some(time),
            utc,
        })
}

/// A DATE only, as a [`RawDateTime`] without time.
pub(crate) fn value_date_only<'src, I, E>() -> impl Parser<'src, I, RawDateTime, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_date().map(|date| RawDateTime {
        date,
        time: None,
        utc: false,
    })
}

/// ```txt
/// enddate     = date / date-time
/// ```
pub(crate) fn value_date_or_date_time<'src, I, E>() -> impl Parser<'src, I, RawDateTime, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    choice((value_date_time(), value_date_only()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::miscellaneous::parse_all;

    fn parse(src: &str, tzid: Option<&str>) -> Result<DateTimePoint, ValueError> {
        let raw = parse_all(value_date_or_date_time(), src, ValueKind::DateTime)?;
        raw.resolve(src, ValueKind::DateTime, tzid)
    }

    #[test]
    fn parses_date_and_date_time() {
        let date = parse("19970714", None).unwrap();
        assert!(date.is_date());
        assert_eq!(date.date_part(), ValueDate::new(1997, 7, 14).unwrap());
        assert_eq!(date.zone(), &TimeZoneRef::Floating);

        let utc = parse("19980119T070000Z", None).unwrap();
        assert_eq!(utc.zone(), &TimeZoneRef::Utc);
        assert_eq!(utc.time(), Some(ValueTime::new(7, 0, 0).unwrap()));

        let floating = parse("19980118T230000", None).unwrap();
        assert_eq!(floating.zone(), &TimeZoneRef::Floating);

        let zoned = parse("19980119T020000", Some("America/New_York")).unwrap();
        assert_eq!(zoned.zone().tzid(), Some("America/New_York"));

        let leap = parse("19970630T235960Z", None).unwrap();
        assert_eq!(leap.time().unwrap().second(), 60);
        assert_eq!(leap.time().unwrap().second_of_day(), 86_399);
    }

    #[test]
    fn rejects_malformed_text() {
        let fail_cases = [
            "1997071",          // missing digit
            "199707144",        // extra digit
            "1997-07-14",       // separators
            "19970714T",        // missing time
            "19970714T0700",    // short time
            "19970714T070000z", // lowercase designator
            "19970714 070000",  // space separator
            "",
        ];
        for src in fail_cases {
            assert!(
                matches!(parse(src, None), Err(ValueError::Format(_))),
                "Parse {src} should fail"
            );
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        let fail_cases = [
            "19971314",        // month 13
            "19970014",        // month 0
            "19970732",        // day 32
            "19970230",        // Feb 30
            "19000229",        // not a leap year
            "19970700",        // day 0
            "19970714T240000", // hour 24
            "19970714T006000", // minute 60
            "19970714T000061", // second 61
        ];
        for src in fail_cases {
            assert!(
                matches!(parse(src, None), Err(ValueError::CalendarRange(_))),
                "Parse {src} should fail"
            );
        }
        assert!(parse("20000229", None).is_ok());
    }

    #[test]
    fn rejects_utc_with_tzid() {
        let err = parse("19980119T070000Z", Some("Europe/Paris")).unwrap_err();
        assert!(matches!(
            err,
            ValueError::Format(FormatError {
                reason: FormatReason::UtcWithTzid { .. },
                ..
            })
        ));
    }

    #[test]
    fn epoch_days() {
        let date = ValueDate::new(1997, 9, 2).unwrap();
        assert_eq!(ValueDate::from_epoch_days(date.epoch_days()).unwrap(), date);
        assert_eq!(date.weekday(), Weekday::Tuesday);
        assert!(ValueDate::from_epoch_days(days_from_civil(9999, 12, 31) + 1).is_err());
        assert!(ValueDate::from_epoch_days(days_from_civil(0, 1, 1) - 1).is_err());
    }

    #[test]
    fn resolves_dst_gap_forward() {
        // 2021-03-14 02:30 does not exist in New York
        let point = DateTimePoint::date_time(
            ValueDate::new(2021, 3, 14).unwrap(),
            ValueTime::new(2, 30, 0).unwrap(),
            TimeZoneRef::zoned("America/New_York"),
        );
        let zoned = point.to_zoned(&jiff::tz::TimeZone::UTC).unwrap();
        assert_eq!(zoned.time_zone().iana_name(), Some("America/New_York"));
        assert_eq!((zoned.hour(), zoned.minute()), (3, 30));
    }

    #[test]
    fn resolves_dst_fold_to_earlier_offset() {
        // 2021-11-07 01:30 happens twice in New York
        let point = DateTimePoint::date_time(
            ValueDate::new(2021, 11, 7).unwrap(),
            ValueTime::new(1, 30, 0).unwrap(),
            TimeZoneRef::zoned("America/New_York"),
        );
        let zoned = point.to_zoned(&jiff::tz::TimeZone::UTC).unwrap();
        assert_eq!(zoned.offset(), jiff::tz::offset(-4));
    }

    #[test]
    fn floating_values_use_given_zone() {
        let point = parse("20210101T120000", None).unwrap();
        let zoned = point.to_zoned(&jiff::tz::TimeZone::fixed(jiff::tz::offset(2))).unwrap();
        assert_eq!(zoned.offset(), jiff::tz::offset(2));
        assert_eq!(zoned.hour(), 12);
    }
}
