// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while parsing or constructing calendar values.

use std::fmt::{self, Display};

use crate::keyword::{KW_DATE, KW_DATETIME, KW_DURATION, KW_PERIOD, KW_RECUR};
use crate::value::Frequency;

/// Any failure reported by the value codec or the rule model.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The text does not follow the value grammar.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The text is well-formed but names an impossible calendar value.
    #[error(transparent)]
    CalendarRange(#[from] CalendarRangeError),

    /// The recurrence rule breaks an RFC 5545 constraint.
    #[error(transparent)]
    RuleValidation(#[from] RuleValidationError),
}

/// Value data type a piece of text was parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(missing_docs)]
pub enum ValueKind {
    Date,
    DateTime,
    Duration,
    Period,
    Recur,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = match self {
            ValueKind::Date => KW_DATE,
            ValueKind::DateTime => KW_DATETIME,
            ValueKind::Duration => KW_DURATION,
            ValueKind::Period => KW_PERIOD,
            ValueKind::Recur => KW_RECUR,
        };
        f.write_str(kw)
    }
}

/// Malformed value text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed {kind} value {input:?}: {reason}")]
pub struct FormatError {
    /// The data type being parsed.
    pub kind: ValueKind,

    /// The offending input.
    pub input: String,

    /// What was wrong with it.
    pub reason: FormatReason,
}

impl FormatError {
    pub(crate) fn new(kind: ValueKind, input: &str, reason: FormatReason) -> Self {
        Self {
            kind,
            input: input.to_owned(),
            reason,
        }
    }
}

/// Reason attached to a [`FormatError`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatReason {
    /// First diagnostic reported by the grammar.
    #[error("{0}")]
    Syntax(String),

    /// A duration used the `Y` or `M` (month) designator.
    #[error("durations cannot carry year or month designators")]
    CalendarDesignator,

    /// A `Z` suffixed value was combined with a `TZID`.
    #[error("UTC value cannot be qualified with TZID {tzid}")]
    UtcWithTzid {
        /// The conflicting zone identifier.
        tzid: String,
    },

    /// A period was given a negative duration.
    #[error("period duration must not be negative")]
    NegativePeriodDuration,

    /// An unrecognized `NAME=VALUE` part in a recurrence rule.
    #[error("unknown rule part {name}")]
    UnknownRulePart {
        /// The part name as written.
        name: String,
    },
}

/// Well-formed value outside the calendar's range.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarRangeError {
    /// Year outside `0..=9999`.
    #[error("year {year} is outside 0..=9999")]
    Year {
        /// The rejected year.
        year: i64,
    },

    /// Month outside `1..=12`.
    #[error("month {month} is outside 1..=12")]
    Month {
        /// The rejected month.
        month: u32,
    },

    /// Day that does not exist in the given month.
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    Day {
        /// Year of the date.
        year: i16,
        /// Month of the date.
        month: i8,
        /// The rejected day.
        day: u32,
    },

    /// Hour outside `0..=23`.
    #[error("hour {hour} is outside 0..=23")]
    Hour {
        /// The rejected hour.
        hour: u32,
    },

    /// Minute outside `0..=59`.
    #[error("minute {minute} is outside 0..=59")]
    Minute {
        /// The rejected minute.
        minute: u32,
    },

    /// Second outside `0..=60`.
    #[error("second {second} is outside 0..=60")]
    Second {
        /// The rejected second.
        second: u32,
    },

    /// Signed index that is zero or larger than the sequence.
    #[error("index {index} is out of range for {len} elements")]
    SignedIndex {
        /// The signed, 1-based index.
        index: i32,
        /// Length of the indexed sequence.
        len: usize,
    },

    /// Period whose end precedes its start.
    #[error("period ends at {end} before it starts at {start}")]
    PeriodOrder {
        /// Formatted start.
        start: String,
        /// Formatted end.
        end: String,
    },

    /// Period whose start and end use different zones.
    #[error("period start and end must share a time zone")]
    PeriodZone,
}

/// Recurrence rule that breaks an RFC 5545 Section 3.3.10 constraint.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleValidationError {
    /// No `FREQ` part.
    #[error("FREQ is required")]
    MissingFrequency,

    /// A part written twice.
    #[error("{part} must not occur more than once")]
    DuplicatePart {
        /// Part name.
        part: &'static str,
    },

    /// `INTERVAL=0`.
    #[error("INTERVAL must be at least 1")]
    ZeroInterval,

    /// `COUNT=0`.
    #[error("COUNT must be at least 1")]
    ZeroCount,

    /// Both `COUNT` and `UNTIL`.
    #[error("COUNT and UNTIL must not occur in the same rule")]
    CountWithUntil,

    /// A BYxxx member outside its range.
    #[error("{part} value {value} is out of range")]
    OutOfRange {
        /// Part name.
        part: &'static str,
        /// The rejected member.
        value: i64,
    },

    /// A BYxxx part combined with a frequency that forbids it.
    #[error("{part} is not allowed with FREQ={freq}")]
    PartNotAllowed {
        /// Part name.
        part: &'static str,
        /// The rule's frequency.
        freq: Frequency,
    },

    /// Ordinal BYDAY together with BYWEEKNO.
    ///
    /// Under DAILY, WEEKLY and the sub-daily frequencies an ordinal is
    /// accepted and ignored, so `FREQ=DAILY;BYDAY=1MO` means every Monday.
    #[error("BYDAY ordinals are not allowed with BYWEEKNO")]
    OrdinalNotAllowed,

    /// `BYSETPOS` without any other BYxxx part.
    #[error("BYSETPOS requires another BYxxx part")]
    SetPosAlone,
}
