// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use recurcal_ical::{DateTimePoint, RecurRule};

use crate::config::Config;
use crate::expand::{align, occurrences};
use crate::occurrence::Occurrence;

/// The instances of a recurring component: its anchor, the expansion of
/// each RRULE, and the RDATE values, minus the EXDATE values.
///
/// Unlike [`crate::expand`], the anchor is part of the result as index `0`.
#[derive(Debug, Clone)]
pub struct RecurrenceSet {
    anchor: DateTimePoint,
    rules: Vec<RecurRule>,
    rdates: Vec<DateTimePoint>,
    exdates: Vec<DateTimePoint>,
    config: Config,
}

impl RecurrenceSet {
    /// A set holding only its anchor, DTSTART.
    #[must_use]
    pub fn new(anchor: DateTimePoint) -> Self {
        Self {
            anchor,
            rules: Vec::new(),
            rdates: Vec::new(),
            exdates: Vec::new(),
            config: Config::default(),
        }
    }

    /// Use `config` for the default horizon and the instance cap.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Add an RRULE.
    #[must_use]
    pub fn with_rule(mut self, rule: RecurRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add RDATE values.
    #[must_use]
    pub fn with_rdates(mut self, rdates: impl IntoIterator<Item = DateTimePoint>) -> Self {
        self.rdates.extend(rdates);
        self
    }

    /// Add EXDATE values. A DATE value excludes every instance on that day.
    #[must_use]
    pub fn with_exdates(mut self, exdates: impl IntoIterator<Item = DateTimePoint>) -> Self {
        self.exdates.extend(exdates);
        self
    }

    /// The anchor.
    #[must_use]
    pub fn anchor(&self) -> &DateTimePoint {
        &self.anchor
    }

    /// The RRULEs.
    #[must_use]
    pub fn rules(&self) -> &[RecurRule] {
        &self.rules
    }

    /// The horizon the configuration implies for this anchor.
    #[must_use]
    pub fn default_horizon(&self) -> DateTimePoint {
        self.config.horizon_for(&self.anchor)
    }

    /// All instances up to `horizon`, in order and without duplicates.
    ///
    /// Values are compared on the anchor's wall clock. When the
    /// configuration caps the instance count, the earliest ones are kept.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(anchor = %self.anchor, rules = self.rules.len())
    )]
    #[must_use]
    pub fn instances(&self, horizon: &DateTimePoint) -> Vec<Occurrence> {
        let frame = self.anchor.zone();
        let limit = align(horizon, frame);

        let mut instances: BTreeMap<i64, DateTimePoint> = BTreeMap::new();
        let start = self.anchor.wall_clock_seconds();
        if start <= limit {
            instances.insert(start, self.anchor.clone());
        }
        for rule in &self.rules {
            for occurrence in occurrences(rule, &self.anchor, horizon) {
                let at = occurrence.point().wall_clock_seconds();
                instances.entry(at).or_insert_with(|| occurrence.into_point());
            }
        }
        for rdate in &self.rdates {
            let at = align(rdate, frame);
            if at <= limit {
                instances.entry(at).or_insert_with(|| rdate.clone());
            }
        }

        for exdate in &self.exdates {
            if exdate.is_date() {
                let day = exdate.date_part().epoch_days();
                instances.retain(|&at, _| at.div_euclid(86_400) != day);
            } else {
                instances.remove(&align(exdate, frame));
            }
        }

        let offset = usize::from(!instances.contains_key(&start));
        let cap = self.config.max_instances.unwrap_or(usize::MAX);
        if instances.len() > cap {
            tracing::debug!(total = instances.len(), cap, "truncating recurrence set");
        }
        instances
            .into_values()
            .take(cap)
            .enumerate()
            .map(|(position, point)| Occurrence::new(position + offset, point))
            .collect()
    }
}
