// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::expand::{Plan, RecurrenceStrategy};
use crate::occurrence::Occurrence;

/// Lazy expansion of a rule, created by [`crate::occurrences`].
///
/// Each call to `next` steps through at most as many periods as it takes to
/// find the next occurrence, so callers can stop between items.
#[derive(Debug)]
pub struct Occurrences {
    strategy: &'static dyn RecurrenceStrategy,
    plan: Plan,
    cursor: Option<u64>,
    pending: VecDeque<i64>,
    last: i64,
    remaining: Option<u32>,
    emitted: usize,
}

impl Occurrences {
    pub(crate) fn new(strategy: &'static dyn RecurrenceStrategy, plan: Plan) -> Self {
        Self {
            strategy,
            cursor: Some(0),
            pending: VecDeque::new(),
            last: plan.start(),
            remaining: plan.remaining(),
            emitted: 0,
            plan,
        }
    }

    fn finish(&mut self, reason: &'static str) {
        tracing::debug!(
            strategy = self.strategy.name(),
            emitted = self.emitted,
            reason,
            "recurrence expansion finished"
        );
        self.cursor = None;
        self.pending.clear();
        self.remaining = Some(0);
    }
}

impl Iterator for Occurrences {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == Some(0) {
                if self.cursor.is_some() {
                    self.finish("count");
                }
                return None;
            }

            if let Some(candidate) = self.pending.pop_front() {
                // the anchor, anything before it, and repeats
                if candidate <= self.last {
                    continue;
                }
                if candidate > self.plan.limit() {
                    self.finish("limit");
                    return None;
                }
                let Some(point) = self.plan.point_at(candidate) else {
                    self.finish("range");
                    return None;
                };

                self.last = candidate;
                self.emitted += 1;
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some(Occurrence::new(self.emitted, point));
            }

            let cursor = self.cursor?;
            match self.strategy.period(&self.plan, cursor) {
                Some(period) => {
                    self.pending.extend(period.candidates);
                    self.cursor = Some(period.next.max(cursor + 1));
                }
                None => {
                    self.finish("limit");
                    return None;
                }
            }
        }
    }
}

impl FusedIterator for Occurrences {}

#[cfg(test)]
mod tests {
    use recurcal_ical::{parse_date_or_date_time, parse_rrule};

    use super::*;
    use crate::expand::{Period, select_strategy};

    #[derive(Debug)]
    struct Fixed;

    // periods of three candidates, overlapping and partly before the anchor
    impl RecurrenceStrategy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn supports(&self, _rule: &recurcal_ical::RecurRule) -> bool {
            true
        }

        fn period(&self, plan: &Plan, cursor: u64) -> Option<Period> {
            let base = plan.start() + i64::try_from(cursor).unwrap() * 10 - 10;
            (base <= plan.limit()).then(|| Period {
                candidates: vec![base, base + 5, base + 10],
                next: cursor + 1,
            })
        }
    }

    fn plan(rule: &str) -> Plan {
        let rule = parse_rrule(rule).unwrap();
        let anchor = parse_date_or_date_time("20190101T000000", None).unwrap();
        let horizon = parse_date_or_date_time("20190101T000100", None).unwrap();
        Plan::new(&rule, &anchor, &horizon)
    }

    #[test]
    fn drops_anchor_earlier_values_and_repeats() {
        let got: Vec<i64> = Occurrences::new(&Fixed, plan("FREQ=SECONDLY"))
            .map(|o| o.point().wall_clock_seconds() - plan("FREQ=SECONDLY").start())
            .collect();
        assert_eq!(got, [5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60]);
    }

    #[test]
    fn indexes_from_one() {
        let indexes: Vec<usize> = Occurrences::new(&Fixed, plan("FREQ=SECONDLY;COUNT=4"))
            .map(|o| o.index())
            .collect();
        assert_eq!(indexes, [1, 2, 3]);
    }

    #[test]
    fn count_of_one_yields_nothing() {
        let plan = plan("FREQ=SECONDLY;COUNT=1");
        let strategy = select_strategy(plan.rule());
        assert_eq!(Occurrences::new(strategy, plan).count(), 0);
    }

    #[test]
    fn stays_finished() {
        let mut occurrences = Occurrences::new(&Fixed, plan("FREQ=SECONDLY;COUNT=2"));
        assert!(occurrences.next().is_some());
        assert!(occurrences.next().is_none());
        assert!(occurrences.next().is_none());
    }
}
