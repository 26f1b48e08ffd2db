// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type parser as defined in RFC 5545 Section 3.3.6.

use std::fmt::{self, Display};

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::calendar::days_in_month;
use crate::error::CalendarRangeError;
use crate::formatter::write_duration;
use crate::value::datetime::ValueDate;
use crate::value::miscellaneous::{ValueExpected, uint};

const SECONDS_PER_WEEK: i64 = 604_800;

/// Duration Value defined in RFC 5545 Section 3.3.6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDuration {
    /// Date and Time Duration
    DateTime {
        /// Whether the duration is positive
        positive: bool,
        /// Day Duration
        day: u32,
        /// Hour Duration
        hour: u32,
        /// Minute Duration
        minute: u32,
        /// Second Duration
        second: u32,
    },

    /// Week Duration
    Week {
        /// Whether the duration is positive
        positive: bool,
        /// Week Duration
        week: u32,
    },
}

impl ValueDuration {
    /// The empty duration.
    pub const ZERO: ValueDuration = ValueDuration::DateTime {
        positive: true,
        day: 0,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Whether the duration has no length.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_seconds() == 0
    }

    /// Whether the duration is written with a leading `-`.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        match self {
            ValueDuration::DateTime { positive, .. } | ValueDuration::Week { positive, .. } => {
                !*positive
            }
        }
    }

    /// Signed length in seconds, counting a day as 86 400 seconds.
    #[must_use]
    pub fn as_seconds(&self) -> i64 {
        let (positive, magnitude) = match *self {
            ValueDuration::DateTime {
                positive,
                day,
                hour,
                minute,
                second,
            } => (
                positive,
                i64::from(day) * 86_400
                    + i64::from(hour) * 3600
                    + i64::from(minute) * 60
                    + i64::from(second),
            ),
            ValueDuration::Week { positive, week } => (positive, i64::from(week) * SECONDS_PER_WEEK),
        };
        if positive { magnitude } else { -magnitude }
    }

    /// Express a calendar span as a day count measured from `anchor`.
    ///
    /// Years and months move the anchor's month first, clamping its day to
    /// the end of the target month, then `days` are added. RFC 5545
    /// durations cannot carry years or months, so this is how such spans
    /// become representable.
    ///
    /// # Errors
    ///
    /// Fails when the shifted date leaves years `0..=9999`.
    pub fn resolve_calendar_span(
        anchor: ValueDate,
        years: i32,
        months: i32,
        days: i32,
    ) -> Result<Self, CalendarRangeError> {
        let total_months = i64::from(anchor.year()) * 12
            + i64::from(anchor.month() - 1)
            + i64::from(years) * 12
            + i64::from(months);
        let year = total_months.div_euclid(12);
        let year = i16::try_from(year)
            .ok()
            .filter(|y| (0..=9999).contains(y))
            .ok_or(CalendarRangeError::Year { year })?;
        // in 1..=12 after the euclidean remainder
        #[expect(clippy::cast_possible_truncation)]
        let month = (total_months.rem_euclid(12) + 1) as i8;
        let day = anchor.day().min(days_in_month(year, month));
        let shifted = ValueDate::new(year, month, day)?;

        let target = shifted.epoch_days() + i64::from(days);
        ValueDate::from_epoch_days(target)?;
        let diff = target - anchor.epoch_days();
        Ok(ValueDuration::DateTime {
            positive: diff >= 0,
            day: u32::try_from(diff.unsigned_abs()).unwrap_or(u32::MAX),
            hour: 0,
            minute: 0,
            second: 0,
        })
    }
}

impl Display for ValueDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_duration(f, self)
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
///
/// The time part is read leniently: hours, minutes and seconds may each be
/// left out as long as their order holds, so `PT1H5S` is accepted.
pub(crate) fn value_duration<'src, I, E>() -> impl Parser<'src, I, ValueDuration, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    // case-sensitive
    let int = uint();

    let week = int.clone().then_ignore(just('W'));

    let hour = int.clone().then_ignore(just('H'));
    let minute = int.clone().then_ignore(just('M'));
    let second = int.clone().then_ignore(just('S'));

    // "T" then hours, minutes and seconds in order, each optional but not all
    let time = just('T')
        .ignore_then(hour.or_not().then(minute.or_not()).then(second.or_not()))
        .filter(|((h, m), s)| h.is_some() || m.is_some() || s.is_some())
        .map(|((h, m), s)| (h.unwrap_or(0), m.unwrap_or(0), s.unwrap_or(0)));

    let day = int.then_ignore(just('D'));
    let date = day.then(time.clone().or_not());

    let sign = select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|sign| !matches!(sign, Some('-')));

    sign.then_ignore(just('P')).then(choice((
        date.map(|(day, time)| {
            let (hour, minute, second) = time.unwrap_or((0, 0, 0));
            (day, hour, minute, second, None)
        }),
        time.map(|(hour, minute, second)| (0, hour, minute, second, None)),
        week.map(|week| (0, 0, 0, 0, Some(week))),
    )))
    .map(|(positive, (day, hour, minute, second, week))| match week {
        Some(week) => ValueDuration::Week { positive, week },
        None => ValueDuration::DateTime {
            positive,
            day,
            hour,
            minute,
            second,
        },
    })
}

/// Whether a rejected duration tried to use the `Y` or month `M` designator.
pub(crate) fn has_calendar_designator(src: &str) -> bool {
    let body = src.trim_start_matches(['+', '-']);
    let Some(body) = body.strip_prefix('P') else {
        return false;
    };
    let date_part = body.split('T').next().unwrap_or_default();
    date_part.contains(['Y', 'M'])
}
