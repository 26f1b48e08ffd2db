// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use recurcal_core::{Occurrence, RecurrenceSet, occurrences};
use recurcal_ical::{
    DateTimePoint, RecurRule, TimeZoneRef, ValueDate, ValueTime, Weekday, parse_date_or_date_time,
    parse_rrule,
};

/// Zone used by the RFC 5545 examples.
pub const NEW_YORK: &str = "America/New_York";

/// A value in New York local time.
#[must_use]
pub fn ny(src: &str) -> DateTimePoint {
    parse_date_or_date_time(src, Some(NEW_YORK)).expect("valid date-time")
}

/// A floating value, or a UTC one when suffixed with `Z`.
#[must_use]
pub fn floating(src: &str) -> DateTimePoint {
    parse_date_or_date_time(src, None).expect("valid date-time")
}

/// A parsed and validated rule.
#[must_use]
pub fn rule(src: &str) -> RecurRule {
    parse_rrule(src).expect("valid rule")
}

/// A horizon past every bounded example.
#[must_use]
pub fn far_horizon() -> DateTimePoint {
    floating("21000101T000000")
}

/// Canonical texts of a list of occurrences.
#[must_use]
pub fn keys(instances: &[Occurrence]) -> Vec<String> {
    instances.iter().map(Occurrence::key).collect()
}

/// Every instance of a bounded rule anchored in New York, anchor included.
#[must_use]
pub fn instances(dtstart: &str, rrule: &str) -> Vec<String> {
    let set = RecurrenceSet::new(ny(dtstart)).with_rule(rule(rrule));
    keys(&set.instances(&far_horizon()))
}

/// The first `n` instances of a rule anchored in New York, anchor included.
#[must_use]
pub fn first(dtstart: &str, rrule: &str, n: usize) -> Vec<String> {
    let anchor = ny(dtstart);
    std::iter::once(anchor.key())
        .chain(occurrences(&rule(rrule), &anchor, &far_horizon()).map(|o| o.key()))
        .take(n)
        .collect()
}

/// Any weekday.
pub fn weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|index| Weekday::from_repr(index).unwrap())
}

/// Anchors between 1990 and 2029: floating, in New York, or DATE values.
pub fn anchor() -> impl Strategy<Value = DateTimePoint> {
    (
        1990i16..2030,
        1i8..=12,
        1i8..=31,
        prop::option::of((0u8..24, 0u8..60, 0u8..60)),
        any::<bool>(),
    )
        .prop_filter_map("day exists in month", |(year, month, day, time, zoned)| {
            let date = ValueDate::new(year, month, day).ok()?;
            Some(match time {
                Some((hour, minute, second)) => {
                    let zone = if zoned {
                        TimeZoneRef::zoned(NEW_YORK)
                    } else {
                        TimeZoneRef::Floating
                    };
                    DateTimePoint::date_time(date, ValueTime::new(hour, minute, second).ok()?, zone)
                }
                None => DateTimePoint::date(date),
            })
        })
}
