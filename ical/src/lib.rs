// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse, represent and format iCalendar (RFC 5545) DATE, DATE-TIME,
//! DURATION, PERIOD and RECUR values, with the calendar arithmetic they need.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

pub mod calendar;
pub mod error;
pub mod formatter;
pub mod keyword;
pub mod value;

pub use crate::calendar::Weekday;
pub use crate::error::{
    CalendarRangeError, FormatError, FormatReason, RuleValidationError, ValueError, ValueKind,
};
pub use crate::value::{
    DateTimePoint, Frequency, RecurBound, RecurRule, RecurRuleBuilder, TimeZoneRef, ValueDate,
    ValueDuration, ValuePeriod, ValueTime, WeekdayNum, parse_date, parse_date_or_date_time,
    parse_date_time, parse_duration, parse_period, parse_rrule,
};
