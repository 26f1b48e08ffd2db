// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expansion inputs normalized to the anchor's wall clock.

use jiff::tz::TimeZone;
use recurcal_ical::calendar::{civil_from_days, days_from_civil, days_in_month};
use recurcal_ical::{
    DateTimePoint, Frequency, RecurBound, RecurRule, TimeZoneRef, ValueDate, ValueTime,
};

/// Seconds in a civil day.
pub(crate) const DAY: i64 = 86_400;

/// Last second a value can represent, 9999-12-31T23:59:59.
const MAX_WALL_CLOCK: i64 = 2_932_896 * DAY + DAY - 1;

/// A rule bound to an anchor and a limit, ready to be stepped through.
///
/// All instants are wall-clock seconds since 1970-01-01T00:00:00 in the
/// anchor's frame, so comparisons never consult a time zone database.
#[derive(Debug, Clone)]
pub struct Plan {
    rule: RecurRule,
    anchor: DateTimePoint,
    start: i64,
    limit: i64,
    remaining: Option<u32>,
    times: Vec<u32>,
}

impl Plan {
    /// Bind `rule` to `anchor`, stopping at the earlier of its UNTIL and
    /// `horizon`.
    #[must_use]
    pub fn new(rule: &RecurRule, anchor: &DateTimePoint, horizon: &DateTimePoint) -> Self {
        let frame = anchor.zone();
        let mut limit = align(horizon, frame).min(MAX_WALL_CLOCK);
        let mut remaining = None;
        match rule.bound() {
            RecurBound::Forever => {}
            RecurBound::Count(count) => remaining = Some(count.saturating_sub(1)),
            RecurBound::Until(until) => {
                let mut until_limit = align(until, frame);
                if until.is_date() && !anchor.is_date() {
                    until_limit += DAY - 1;
                }
                limit = limit.min(until_limit);
            }
        }

        Self {
            rule: rule.clone(),
            anchor: anchor.clone(),
            start: anchor.wall_clock_seconds(),
            limit,
            remaining,
            times: times_of_day(rule, anchor),
        }
    }

    /// The rule being expanded.
    #[must_use]
    pub fn rule(&self) -> &RecurRule {
        &self.rule
    }

    /// The anchor, DTSTART.
    #[must_use]
    pub fn anchor(&self) -> &DateTimePoint {
        &self.anchor
    }

    /// Wall-clock seconds of the anchor.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Latest wall-clock second an occurrence may fall on, inclusive.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Occurrences still allowed by COUNT after the anchor, if bounded.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Epoch day of the anchor.
    #[must_use]
    pub fn anchor_day(&self) -> i64 {
        self.anchor.date_part().epoch_days()
    }

    /// Sorted seconds of the day each candidate day expands into.
    ///
    /// Built from BYHOUR, BYMINUTE and BYSECOND, each defaulting to the
    /// anchor's own field. DATE anchors always use midnight.
    #[must_use]
    pub fn times(&self) -> &[u32] {
        &self.times
    }

    /// Whether occurrences are DATE values.
    #[must_use]
    pub fn is_date_only(&self) -> bool {
        self.anchor.is_date() && !self.rule.freq().is_sub_daily()
    }

    /// Epoch-day range of the period at `cursor` for daily and coarser
    /// frequencies, or `None` once the period starts past the limit.
    #[must_use]
    pub fn period_days(&self, cursor: u64) -> Option<(i64, i64)> {
        let cursor = i64::try_from(cursor).ok()?;
        let steps = cursor.checked_mul(i64::from(self.rule.interval()))?;
        let date = self.anchor.date_part();
        let (first, last) = match self.rule.freq() {
            Frequency::Daily => {
                let day = self.anchor_day().checked_add(steps)?;
                (day, day)
            }
            Frequency::Weekly => {
                let offset = date.weekday().days_since(self.rule.week_start());
                let first = self.anchor_day() - i64::from(offset) + steps.checked_mul(7)?;
                (first, first + 6)
            }
            Frequency::Monthly => {
                let months = i64::from(date.year()) * 12 + i64::from(date.month()) - 1;
                let months = months.checked_add(steps)?;
                let year = checked_year(months.div_euclid(12))?;
                let month = i8::try_from(months.rem_euclid(12) + 1).ok()?;
                let first = days_from_civil(year, month, 1);
                (first, first + i64::from(days_in_month(year, month)) - 1)
            }
            Frequency::Yearly => {
                let year = checked_year(i64::from(date.year()).checked_add(steps)?)?;
                (days_from_civil(year, 1, 1), days_from_civil(year, 12, 31))
            }
            Frequency::Hourly | Frequency::Minutely | Frequency::Secondly => return None,
        };
        (first.checked_mul(DAY)? <= self.limit).then_some((first, last))
    }

    /// The value at wall-clock second `seconds`, in the anchor's zone.
    #[must_use]
    pub fn point_at(&self, seconds: i64) -> Option<DateTimePoint> {
        let date = ValueDate::from_epoch_days(seconds.div_euclid(DAY)).ok()?;
        if self.is_date_only() {
            return Some(DateTimePoint::date(date));
        }
        let second_of_day = u32::try_from(seconds.rem_euclid(DAY)).ok()?;
        let time = ValueTime::from_second_of_day(second_of_day);
        Some(DateTimePoint::date_time(date, time, self.anchor.zone().clone()))
    }
}

/// Wall-clock seconds of `point` as read in the `frame` zone.
///
/// Values in a different, known zone are converted through the IANA
/// database. Floating and DATE values, and values whose zone is unknown,
/// are read as-is.
pub(crate) fn align(point: &DateTimePoint, frame: &TimeZoneRef) -> i64 {
    if point.is_date()
        || point.zone() == frame
        || *point.zone() == TimeZoneRef::Floating
        || *frame == TimeZoneRef::Floating
    {
        return point.wall_clock_seconds();
    }

    match convert(point, frame) {
        Ok(seconds) => seconds,
        Err(err) => {
            tracing::warn!(
                from = ?point.zone(),
                to = ?frame,
                %err,
                "unknown timezone, comparing wall clock as-is"
            );
            point.wall_clock_seconds()
        }
    }
}

fn convert(point: &DateTimePoint, frame: &TimeZoneRef) -> Result<i64, jiff::Error> {
    let Some(tz) = frame.to_time_zone()? else {
        return Ok(point.wall_clock_seconds());
    };
    let civil = point.to_zoned(&TimeZone::UTC)?.with_time_zone(tz).datetime();
    let days = days_from_civil(civil.year(), civil.month(), civil.day());
    let seconds =
        i64::from(civil.hour()) * 3600 + i64::from(civil.minute()) * 60 + i64::from(civil.second());
    Ok(days * DAY + seconds)
}

fn checked_year(year: i64) -> Option<i16> {
    i16::try_from(year)
        .ok()
        .filter(|year| (0..=9999).contains(year))
}

fn times_of_day(rule: &RecurRule, anchor: &DateTimePoint) -> Vec<u32> {
    let Some(time) = anchor.time() else {
        return vec![0];
    };

    let pick = |values: &[u8], default: u8| -> Vec<u32> {
        if values.is_empty() {
            vec![u32::from(default)]
        } else {
            values.iter().copied().map(u32::from).collect()
        }
    };
    let hours = pick(rule.by_hour(), time.hour());
    let minutes = pick(rule.by_minute(), time.minute());
    // a leap second is clamped to the last second of the minute
    let seconds: Vec<u32> = pick(rule.by_second(), time.second())
        .into_iter()
        .map(|second| second.min(59))
        .collect();

    let mut times = Vec::with_capacity(hours.len() * minutes.len() * seconds.len());
    for &hour in &hours {
        for &minute in &minutes {
            for &second in &seconds {
                times.push(hour * 3600 + minute * 60 + second);
            }
        }
    }
    times.sort_unstable();
    times.dedup();
    times
}

/// Year, month and day of an epoch day.
pub(crate) fn civil_parts(day: i64) -> (i16, i8, i8) {
    let (year, month, day) = civil_from_days(day);
    (i16::try_from(year).unwrap_or(i16::MAX), month, day)
}
