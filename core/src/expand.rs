// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule expansion.
//!
//! A rule is stepped period by period (a year, a month, a week, a day, or
//! one hour, minute or second for the sub-daily frequencies) starting at
//! the period holding the anchor. Each period yields its sorted candidate
//! set; the bound stage then drops values up to and including the anchor
//! and stops at COUNT, UNTIL or the horizon, whichever comes first.
//!
//! COUNT includes the anchor, which the engine never emits: `COUNT=n`
//! yields at most `n - 1` occurrences. [`crate::RecurrenceSet`] puts the
//! anchor back.
//!
//! # Example
//!
//! ```
//! use recurcal_core::expand;
//! use recurcal_ical::{parse_date_time, parse_rrule};
//!
//! let rule = parse_rrule("FREQ=MONTHLY;COUNT=4;BYDAY=1FR").unwrap();
//! let anchor = parse_date_time("19970905T090000", Some("America/New_York")).unwrap();
//! let horizon = parse_date_time("20070905T090000", None).unwrap();
//!
//! let dates: Vec<String> = expand(&rule, &anchor, &horizon)
//!     .iter()
//!     .map(|occurrence| occurrence.key())
//!     .collect();
//! assert_eq!(dates, ["19971003T090000", "19971107T090000", "19971205T090000"]);
//! ```

mod bound;
mod fast;
mod general;
mod plan;

use std::fmt;

use recurcal_ical::{DateTimePoint, RecurRule};

pub use crate::expand::bound::Occurrences;
pub use crate::expand::fast::{DailyByDay, MonthlyByMonthDay, WeeklyByDay, YearlyFixedDate};
pub use crate::expand::general::General;
pub use crate::expand::plan::Plan;
use crate::occurrence::Occurrence;

pub(crate) use crate::expand::plan::align;

/// One way of enumerating the candidates of a rule's periods.
///
/// Every strategy claiming a rule shape through [`supports`] must produce
/// the same occurrences as [`General`] for that shape.
///
/// [`supports`]: RecurrenceStrategy::supports
pub trait RecurrenceStrategy: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether the strategy handles rules of this shape.
    fn supports(&self, rule: &RecurRule) -> bool;

    /// Candidates of the period at `cursor`, the 0-based period count
    /// from the anchor's period.
    ///
    /// Returns `None` once the period starts after the plan's limit.
    fn period(&self, plan: &Plan, cursor: u64) -> Option<Period>;
}

/// Output of one step through a rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Period {
    /// Sorted, distinct wall-clock seconds of the candidates.
    pub candidates: Vec<i64>,

    /// Cursor of the next period worth visiting; always past the current
    /// one.
    pub next: u64,
}

static STRATEGIES: [&dyn RecurrenceStrategy; 5] = [
    &DailyByDay,
    &WeeklyByDay,
    &MonthlyByMonthDay,
    &YearlyFixedDate,
    &General,
];

/// All strategies, most specific first. The last one supports every rule.
#[must_use]
pub fn strategies() -> &'static [&'static dyn RecurrenceStrategy] {
    &STRATEGIES
}

/// The first strategy supporting the rule's shape.
#[must_use]
pub fn select_strategy(rule: &RecurRule) -> &'static dyn RecurrenceStrategy {
    STRATEGIES
        .iter()
        .copied()
        .find(|strategy| strategy.supports(rule))
        .unwrap_or(&General)
}

/// Expand a rule after its anchor, up to `horizon`.
///
/// Occurrences are ordered, distinct, and never include the anchor itself.
/// With `COUNT=n` at most `n - 1` values are returned.
#[tracing::instrument(level = "debug", skip_all, fields(rule = %rule, anchor = %anchor))]
#[must_use]
pub fn expand(
    rule: &RecurRule,
    anchor: &DateTimePoint,
    horizon: &DateTimePoint,
) -> Vec<Occurrence> {
    occurrences(rule, anchor, horizon).collect()
}

/// Lazily expand a rule; see [`expand`].
#[must_use]
pub fn occurrences(
    rule: &RecurRule,
    anchor: &DateTimePoint,
    horizon: &DateTimePoint,
) -> Occurrences {
    let strategy = select_strategy(rule);
    tracing::debug!(strategy = strategy.name(), "selected recurrence strategy");
    Occurrences::new(strategy, Plan::new(rule, anchor, horizon))
}

/// Expand a rule with a specific strategy.
///
/// Returns `None` when the strategy does not support the rule's shape.
#[must_use]
pub fn expand_with(
    strategy: &'static dyn RecurrenceStrategy,
    rule: &RecurRule,
    anchor: &DateTimePoint,
    horizon: &DateTimePoint,
) -> Option<Vec<Occurrence>> {
    if !strategy.supports(rule) {
        return None;
    }
    Some(Occurrences::new(strategy, Plan::new(rule, anchor, horizon)).collect())
}
