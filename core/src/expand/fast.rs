// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Closed-form strategies for common rule shapes.
//!
//! None of them looks at individual days: each computes its period's
//! candidates directly from the rule and the anchor.

use recurcal_ical::calendar::{
    days_from_civil, days_in_month, resolve_signed_index, weekday_from_days,
};
use recurcal_ical::{Frequency, RecurRule, Weekday};

use crate::expand::plan::{DAY, civil_parts};
use crate::expand::{Period, Plan, RecurrenceStrategy};

/// `FREQ=DAILY`, optionally limited by weekday-only BYDAY.
///
/// Jumps straight from one matching day to the next.
#[derive(Debug, Clone, Copy)]
pub struct DailyByDay;

impl RecurrenceStrategy for DailyByDay {
    fn name(&self) -> &'static str {
        "daily-by-day"
    }

    fn supports(&self, rule: &RecurRule) -> bool {
        rule.freq() == Frequency::Daily
            && only_by_day(rule)
            && rule.by_day().iter().all(|entry| entry.ordinal.is_none())
    }

    fn period(&self, plan: &Plan, cursor: u64) -> Option<Period> {
        let (day, _) = plan.period_days(cursor)?;
        let weekdays: Vec<Weekday> = plan.rule().by_day().iter().map(|e| e.weekday).collect();
        let selected = |day: i64| weekdays.is_empty() || weekdays.contains(&weekday_from_days(day));

        let candidates = if selected(day) {
            at_times(plan, day).collect()
        } else {
            Vec::new()
        };

        // weekdays repeat after at most seven steps
        let interval = i64::from(plan.rule().interval());
        let skip = (1..=7u64)
            .find(|&steps| {
                i64::try_from(steps)
                    .ok()
                    .and_then(|steps| steps.checked_mul(interval))
                    .and_then(|offset| day.checked_add(offset))
                    .is_some_and(selected)
            })
            .unwrap_or(7);

        Some(Period {
            candidates,
            next: cursor + skip,
        })
    }
}

/// `FREQ=WEEKLY`, optionally with weekday-only BYDAY.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyByDay;

impl RecurrenceStrategy for WeeklyByDay {
    fn name(&self) -> &'static str {
        "weekly-by-day"
    }

    fn supports(&self, rule: &RecurRule) -> bool {
        rule.freq() == Frequency::Weekly
            && only_by_day(rule)
            && rule.by_day().iter().all(|entry| entry.ordinal.is_none())
    }

    fn period(&self, plan: &Plan, cursor: u64) -> Option<Period> {
        let (week_start, _) = plan.period_days(cursor)?;
        let week_start_day = plan.rule().week_start();

        let mut offsets: Vec<i64> = if plan.rule().by_day().is_empty() {
            let weekday = plan.anchor().date_part().weekday();
            vec![i64::from(weekday.days_since(week_start_day))]
        } else {
            plan.rule()
                .by_day()
                .iter()
                .map(|entry| i64::from(entry.weekday.days_since(week_start_day)))
                .collect()
        };
        offsets.sort_unstable();
        offsets.dedup();

        let candidates = offsets
            .into_iter()
            .flat_map(|offset| at_times(plan, week_start + offset))
            .collect();
        Some(Period {
            candidates,
            next: cursor + 1,
        })
    }
}

/// `FREQ=MONTHLY` on a single day of the month, given by one BYMONTHDAY or
/// taken from the anchor. Months without that day are skipped.
#[derive(Debug, Clone, Copy)]
pub struct MonthlyByMonthDay;

impl RecurrenceStrategy for MonthlyByMonthDay {
    fn name(&self) -> &'static str {
        "monthly-by-month-day"
    }

    fn supports(&self, rule: &RecurRule) -> bool {
        rule.freq() == Frequency::Monthly
            && rule.by_month_day().len() <= 1
            && rule.by_day().is_empty()
            && rule.by_month().is_empty()
            && no_other_parts(rule)
    }

    fn period(&self, plan: &Plan, cursor: u64) -> Option<Period> {
        let (first, _) = plan.period_days(cursor)?;
        let (year, month, _) = civil_parts(first);
        let day = match plan.rule().by_month_day().first() {
            Some(&n) => month_day(year, month, n),
            None => {
                Some(plan.anchor().date_part().day()).filter(|&d| d <= days_in_month(year, month))
            }
        };

        let candidates = match day {
            Some(day) => at_times(plan, days_from_civil(year, month, day)).collect(),
            None => Vec::new(),
        };
        Some(Period {
            candidates,
            next: cursor + 1,
        })
    }
}

/// `FREQ=YEARLY` on one fixed month and day, given by BYMONTH and
/// BYMONTHDAY or taken from the anchor. Years without that date, such as
/// February 29 outside leap years, are skipped.
#[derive(Debug, Clone, Copy)]
pub struct YearlyFixedDate;

impl RecurrenceStrategy for YearlyFixedDate {
    fn name(&self) -> &'static str {
        "yearly-fixed-date"
    }

    fn supports(&self, rule: &RecurRule) -> bool {
        rule.freq() == Frequency::Yearly
            && rule.by_month().len() <= 1
            && rule.by_month_day().len() <= 1
            && (rule.by_month_day().is_empty() || rule.by_month().len() == 1)
            && rule.by_day().is_empty()
            && no_other_parts(rule)
    }

    fn period(&self, plan: &Plan, cursor: u64) -> Option<Period> {
        let (first, _) = plan.period_days(cursor)?;
        let (year, _, _) = civil_parts(first);
        let anchor = plan.anchor().date_part();
        let month = match plan.rule().by_month().first() {
            Some(&month) => i8::try_from(month).ok()?,
            None => anchor.month(),
        };
        let day = match plan.rule().by_month_day().first() {
            Some(&n) => month_day(year, month, n),
            None => Some(anchor.day()).filter(|&d| d <= days_in_month(year, month)),
        };

        let candidates = match day {
            Some(day) => at_times(plan, days_from_civil(year, month, day)).collect(),
            None => Vec::new(),
        };
        Some(Period {
            candidates,
            next: cursor + 1,
        })
    }
}

fn only_by_day(rule: &RecurRule) -> bool {
    rule.by_month().is_empty() && rule.by_month_day().is_empty() && no_other_parts(rule)
}

/// No BYxxx parts beyond BYDAY, BYMONTH and BYMONTHDAY.
fn no_other_parts(rule: &RecurRule) -> bool {
    rule.by_second().is_empty()
        && rule.by_minute().is_empty()
        && rule.by_hour().is_empty()
        && rule.by_year_day().is_empty()
        && rule.by_week_no().is_empty()
        && rule.by_set_pos().is_empty()
}

/// Day of the month designated by a signed BYMONTHDAY member.
fn month_day(year: i16, month: i8, n: i8) -> Option<i8> {
    let len = usize::try_from(days_in_month(year, month)).ok()?;
    let index = resolve_signed_index(i32::from(n), len).ok()?;
    i8::try_from(index + 1).ok()
}

fn at_times(plan: &Plan, day: i64) -> impl Iterator<Item = i64> + '_ {
    plan.times()
        .iter()
        .map(move |&time| day * DAY + i64::from(time))
}

#[cfg(test)]
mod tests {
    use recurcal_ical::{parse_date_or_date_time, parse_rrule};

    use super::*;
    use crate::expand::expand_with;

    fn run(strategy: &'static dyn RecurrenceStrategy, rule: &str, anchor: &str) -> Vec<String> {
        let rule = parse_rrule(rule).unwrap();
        let anchor = parse_date_or_date_time(anchor, None).unwrap();
        let horizon = parse_date_or_date_time("20301231T235959", None).unwrap();
        expand_with(strategy, &rule, &anchor, &horizon)
            .unwrap()
            .iter()
            .map(|occurrence| occurrence.key())
            .collect()
    }

    #[test]
    fn daily_jumps_to_matching_weekdays() {
        let got = run(
            &DailyByDay,
            "FREQ=DAILY;INTERVAL=3;BYDAY=MO;COUNT=4",
            "20190101T080000",
        );
        // every third day from Tuesday, keeping Mondays only
        assert_eq!(got, ["20190107T080000", "20190128T080000", "20190218T080000"]);
    }

    #[test]
    fn daily_never_matching_weekday_ends_at_limit() {
        let got = run(&DailyByDay, "FREQ=DAILY;INTERVAL=7;BYDAY=MO", "20190101");
        assert!(got.is_empty());
    }

    #[test]
    fn weekly_orders_days_from_week_start() {
        let got = run(
            &WeeklyByDay,
            "FREQ=WEEKLY;INTERVAL=2;BYDAY=SU,TU;WKST=SU;COUNT=5",
            "19970805T090000",
        );
        assert_eq!(
            got,
            [
                "19970817T090000",
                "19970819T090000",
                "19970831T090000",
                "19970902T090000"
            ]
        );
    }

    #[test]
    fn monthly_skips_short_months() {
        let got = run(&MonthlyByMonthDay, "FREQ=MONTHLY;COUNT=4", "20190131");
        assert_eq!(got, ["20190331", "20190531", "20190731"]);

        let got = run(&MonthlyByMonthDay, "FREQ=MONTHLY;BYMONTHDAY=-3;COUNT=3", "20190101");
        assert_eq!(got, ["20190129", "20190226"]);
    }

    #[test]
    fn yearly_waits_for_leap_day() {
        let got = run(&YearlyFixedDate, "FREQ=YEARLY;COUNT=3", "20200229T120000");
        assert_eq!(got, ["20240229T120000", "20280229T120000"]);
    }
}
