// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The general expansion algorithm, handling every rule shape.

use std::borrow::Cow;

use recurcal_ical::calendar::{
    days_from_civil, days_in_month, days_in_year, day_of_year, nth_weekday_in_range,
    resolve_signed_index, week_number, weeks_in_year, weekday_from_days,
};
use recurcal_ical::{Frequency, RecurRule, ValueTime, WeekdayNum};

use crate::expand::plan::{DAY, civil_parts};
use crate::expand::{Period, Plan, RecurrenceStrategy};

/// Day-by-day filtering over each period, then time expansion and
/// BYSETPOS selection.
#[derive(Debug, Clone, Copy)]
pub struct General;

impl RecurrenceStrategy for General {
    fn name(&self) -> &'static str {
        "general"
    }

    fn supports(&self, _rule: &RecurRule) -> bool {
        true
    }

    fn period(&self, plan: &Plan, cursor: u64) -> Option<Period> {
        if plan.rule().freq().is_sub_daily() {
            sub_daily_period(plan, cursor)
        } else {
            day_period(plan, cursor)
        }
    }
}

fn day_period(plan: &Plan, cursor: u64) -> Option<Period> {
    let (first, last) = plan.period_days(cursor)?;
    let filter = DayFilter::new(plan);

    let mut candidates = Vec::new();
    for day in (first..=last).filter(|&day| filter.matches(day)) {
        candidates.extend(plan.times().iter().map(|&time| day * DAY + i64::from(time)));
    }

    Some(Period {
        candidates: select_positions(candidates, plan.rule().by_set_pos()),
        next: cursor + 1,
    })
}

fn sub_daily_period(plan: &Plan, cursor: u64) -> Option<Period> {
    let rule = plan.rule();
    let unit = match rule.freq() {
        Frequency::Hourly => 3600,
        Frequency::Minutely => 60,
        _ => 1,
    };
    let step = unit * i64::from(rule.interval());
    let base = plan.start() - plan.start().rem_euclid(unit);
    let start = i64::try_from(cursor)
        .ok()?
        .checked_mul(step)?
        .checked_add(base)?;
    if start > plan.limit() {
        return None;
    }

    let day = start.div_euclid(DAY);
    if !DayFilter::new(plan).matches(day) {
        // first period starting on a later day
        let next_day = (day + 1) * DAY;
        let skip = (next_day - base + step - 1).div_euclid(step);
        let next = u64::try_from(skip).ok()?.max(cursor + 1);
        return Some(Period {
            candidates: Vec::new(),
            next,
        });
    }

    let second_of_day = start.rem_euclid(DAY);
    let (hour, minute, second) = (
        second_of_day / 3600,
        second_of_day / 60 % 60,
        second_of_day % 60,
    );
    let anchor_time = plan.anchor().time().unwrap_or(ValueTime::MIDNIGHT);
    let fixed = |values: &[u8], value: i64| {
        values.is_empty() || values.iter().any(|&v| i64::from(v) == value)
    };
    let expanded = |values: &[u8], default: u8| -> Vec<i64> {
        if values.is_empty() {
            vec![i64::from(default.min(59))]
        } else {
            values.iter().copied().map(i64::from).collect()
        }
    };

    let mut candidates = Vec::new();
    if fixed(rule.by_hour(), hour) {
        match rule.freq() {
            Frequency::Hourly => {
                for minute in expanded(rule.by_minute(), anchor_time.minute()) {
                    for second in expanded(rule.by_second(), anchor_time.second()) {
                        candidates.push(start + minute * 60 + second);
                    }
                }
            }
            Frequency::Minutely if fixed(rule.by_minute(), minute) => {
                for second in expanded(rule.by_second(), anchor_time.second()) {
                    candidates.push(start + second);
                }
            }
            Frequency::Secondly
                if fixed(rule.by_minute(), minute) && fixed(rule.by_second(), second) =>
            {
                candidates.push(start);
            }
            _ => {}
        }
    }
    candidates.sort_unstable();
    candidates.dedup();

    Some(Period {
        candidates: select_positions(candidates, rule.by_set_pos()),
        next: cursor + 1,
    })
}

/// Keep the BYSETPOS-selected members of a sorted candidate set.
fn select_positions(candidates: Vec<i64>, positions: &[i16]) -> Vec<i64> {
    if positions.is_empty() {
        return candidates;
    }

    let mut selected: Vec<i64> = positions
        .iter()
        .filter_map(|&pos| resolve_signed_index(i32::from(pos), candidates.len()).ok())
        .filter_map(|index| candidates.get(index).copied())
        .collect();
    selected.sort_unstable();
    selected.dedup();
    selected
}

/// The date-level BYxxx parts of a rule, with RFC 5545 defaults filled in
/// from the anchor.
struct DayFilter<'a> {
    rule: &'a RecurRule,
    by_month: Cow<'a, [u8]>,
    by_month_day: Cow<'a, [i8]>,
    by_day: Cow<'a, [WeekdayNum]>,
    ordinals_apply: bool,
    ordinals_in_month: bool,
}

impl<'a> DayFilter<'a> {
    fn new(plan: &'a Plan) -> Self {
        let rule = plan.rule();
        let mut filter = Self {
            rule,
            by_month: Cow::Borrowed(rule.by_month()),
            by_month_day: Cow::Borrowed(rule.by_month_day()),
            by_day: Cow::Borrowed(rule.by_day()),
            ordinals_apply: matches!(rule.freq(), Frequency::Monthly | Frequency::Yearly),
            ordinals_in_month: rule.freq() == Frequency::Monthly || !rule.by_month().is_empty(),
        };

        let date = plan.anchor().date_part();
        let unconstrained = rule.by_week_no().is_empty()
            && rule.by_year_day().is_empty()
            && rule.by_month_day().is_empty()
            && rule.by_day().is_empty();
        if unconstrained {
            match rule.freq() {
                Frequency::Yearly => {
                    if rule.by_month().is_empty() {
                        // months are 1..=12
                        #[expect(clippy::cast_sign_loss)]
                        let month = date.month() as u8;
                        filter.by_month = Cow::Owned(vec![month]);
                    }
                    filter.by_month_day = Cow::Owned(vec![date.day()]);
                }
                Frequency::Monthly => filter.by_month_day = Cow::Owned(vec![date.day()]),
                Frequency::Weekly => filter.by_day = Cow::Owned(vec![date.weekday().into()]),
                _ => {}
            }
        }
        filter
    }

    /// Whether the epoch day passes every date-level part.
    ///
    /// A BYWEEKNO week only counts the days inside its own numbering year,
    /// so early January days of the previous year's last week and late
    /// December days of next year's week 1 never match.
    fn matches(&self, day: i64) -> bool {
        let (year, month, month_day) = civil_parts(day);

        // months are 1..=12
        #[expect(clippy::cast_sign_loss)]
        let month_u8 = month as u8;
        if !self.by_month.is_empty() && !self.by_month.contains(&month_u8) {
            return false;
        }

        if !self.rule.by_week_no().is_empty() {
            let (week_year, week) = week_number(year, month, month_day, self.rule.week_start());
            if week_year != year {
                return false;
            }
            let weeks = usize::try_from(weeks_in_year(week_year, self.rule.week_start()))
                .unwrap_or_default();
            let hit = self.rule.by_week_no().iter().any(|&n| {
                signed_hits(i32::from(n), weeks, i64::from(week))
            });
            if !hit {
                return false;
            }
        }

        if !self.rule.by_year_day().is_empty() {
            let len = usize::try_from(days_in_year(year)).unwrap_or_default();
            let ordinal = i64::from(day_of_year(year, month, month_day));
            let hit = self
                .rule
                .by_year_day()
                .iter()
                .any(|&n| signed_hits(i32::from(n), len, ordinal));
            if !hit {
                return false;
            }
        }

        if !self.by_month_day.is_empty() {
            let len = usize::try_from(days_in_month(year, month)).unwrap_or_default();
            let hit = self
                .by_month_day
                .iter()
                .any(|&n| signed_hits(i32::from(n), len, i64::from(month_day)));
            if !hit {
                return false;
            }
        }

        self.by_day.is_empty()
            || self
                .by_day
                .iter()
                .any(|entry| self.weekday_hits(*entry, day, year, month))
    }

    fn weekday_hits(&self, entry: WeekdayNum, day: i64, year: i16, month: i8) -> bool {
        if weekday_from_days(day) != entry.weekday {
            return false;
        }
        let Some(n) = entry.ordinal.filter(|_| self.ordinals_apply) else {
            return true;
        };

        let (first, last) = if self.ordinals_in_month {
            let first = days_from_civil(year, month, 1);
            (first, first + i64::from(days_in_month(year, month)) - 1)
        } else {
            (days_from_civil(year, 1, 1), days_from_civil(year, 12, 31))
        };
        nth_weekday_in_range(first, last, entry.weekday, n) == Some(day)
    }
}

/// Whether the signed index `n` over `1..=len` designates `value`.
fn signed_hits(n: i32, len: usize, value: i64) -> bool {
    resolve_signed_index(n, len)
        .is_ok_and(|index| i64::try_from(index).is_ok_and(|index| index + 1 == value))
}
