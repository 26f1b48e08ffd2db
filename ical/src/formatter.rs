// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatter.
//!
//! Writes values back to their RFC 5545 text form, to any `std::fmt::Write`
//! implementer. The `Display` impls of the value types go through here, so
//! output always re-parses to an equal value.
//!
//! # Example
//!
//! ```
//! use recurcal_ical::formatter::write_qualified_date_time;
//! use recurcal_ical::parse_date_time;
//!
//! let start = parse_date_time("19980119T020000", Some("America/New_York")).unwrap();
//! let mut out = String::new();
//! write_qualified_date_time(&mut out, &start).unwrap();
//! assert_eq!(out, "TZID=America/New_York:19980119T020000");
//! ```

mod value;

pub use crate::formatter::value::{
    write_date, write_date_time, write_duration, write_period, write_qualified_date_time,
    write_rrule, write_time,
};
