// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

// Section 3.2.19 - Time Zone Identifier
/// Time zone identifier parameter.
pub const KW_TZID: &str = "TZID";

// Section 3.3 - Property Value Data Types
/// DATE value type.
pub const KW_DATE: &str = "DATE";
/// DATE-TIME value type.
pub const KW_DATETIME: &str = "DATE-TIME";
/// DURATION value type.
pub const KW_DURATION: &str = "DURATION";
/// PERIOD value type.
pub const KW_PERIOD: &str = "PERIOD";
/// RECUR value type.
pub const KW_RECUR: &str = "RECUR";

// Section 3.3.10 - Recurrence Rule
/// Frequency rule part.
pub const KW_RRULE_FREQ: &str = "FREQ";
/// Inclusive end rule part.
pub const KW_RRULE_UNTIL: &str = "UNTIL";
/// Occurrence count rule part.
pub const KW_RRULE_COUNT: &str = "COUNT";
/// Period interval rule part.
pub const KW_RRULE_INTERVAL: &str = "INTERVAL";
/// Seconds filter.
pub const KW_RRULE_BYSECOND: &str = "BYSECOND";
/// Minutes filter.
pub const KW_RRULE_BYMINUTE: &str = "BYMINUTE";
/// Hours filter.
pub const KW_RRULE_BYHOUR: &str = "BYHOUR";
/// Weekday filter, optionally with ordinals.
pub const KW_RRULE_BYDAY: &str = "BYDAY";
/// Day-of-month filter.
pub const KW_RRULE_BYMONTHDAY: &str = "BYMONTHDAY";
/// Day-of-year filter.
pub const KW_RRULE_BYYEARDAY: &str = "BYYEARDAY";
/// Week-number filter.
pub const KW_RRULE_BYWEEKNO: &str = "BYWEEKNO";
/// Month filter.
pub const KW_RRULE_BYMONTH: &str = "BYMONTH";
/// Position selection within a period.
pub const KW_RRULE_BYSETPOS: &str = "BYSETPOS";
/// Week start rule part.
pub const KW_RRULE_WKST: &str = "WKST";

// Section 3.3.10 - Frequencies
/// `SECONDLY` frequency.
pub const KW_RRULE_FREQ_SECONDLY: &str = "SECONDLY";
/// `MINUTELY` frequency.
pub const KW_RRULE_FREQ_MINUTELY: &str = "MINUTELY";
/// `HOURLY` frequency.
pub const KW_RRULE_FREQ_HOURLY: &str = "HOURLY";
/// `DAILY` frequency.
pub const KW_RRULE_FREQ_DAILY: &str = "DAILY";
/// `WEEKLY` frequency.
pub const KW_RRULE_FREQ_WEEKLY: &str = "WEEKLY";
/// `MONTHLY` frequency.
pub const KW_RRULE_FREQ_MONTHLY: &str = "MONTHLY";
/// `YEARLY` frequency.
pub const KW_RRULE_FREQ_YEARLY: &str = "YEARLY";

// Section 3.3.10 - Weekdays
/// Sunday.
pub const KW_DAY_SU: &str = "SU";
/// Monday.
pub const KW_DAY_MO: &str = "MO";
/// Tuesday.
pub const KW_DAY_TU: &str = "TU";
/// Wednesday.
pub const KW_DAY_WE: &str = "WE";
/// Thursday.
pub const KW_DAY_TH: &str = "TH";
/// Friday.
pub const KW_DAY_FR: &str = "FR";
/// Saturday.
pub const KW_DAY_SA: &str = "SA";
