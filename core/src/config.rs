// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use recurcal_ical::{CalendarRangeError, DateTimePoint, ValueDate, ValueDuration, ValueTime};
use serde::de;

/// Configuration for recurrence expansion.
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
pub struct Config {
    /// How far past the anchor unbounded rules are expanded.
    #[serde(default)]
    pub horizon: ConfigHorizon,

    /// Upper bound on the number of instances a recurrence set returns.
    #[serde(default)]
    pub max_instances: Option<usize>,
}

impl Config {
    /// The default horizon for a recurrence anchored at `anchor`.
    #[must_use]
    pub fn horizon_for(&self, anchor: &DateTimePoint) -> DateTimePoint {
        self.horizon.after(anchor)
    }
}

/// A calendar span added to the anchor to obtain the expansion horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigHorizon {
    /// A number of years.
    Years(u16),

    /// A number of months.
    Months(u32),

    /// A number of weeks.
    Weeks(u32),

    /// A number of days.
    Days(u32),
}

impl Default for ConfigHorizon {
    fn default() -> Self {
        ConfigHorizon::Years(10)
    }
}

impl ConfigHorizon {
    /// The point this span lies past `anchor`, on the same wall clock.
    ///
    /// Month-based spans clamp the day to the end of the target month.
    /// Spans reaching beyond year 9999 stop at its last second.
    #[must_use]
    pub fn after(&self, anchor: &DateTimePoint) -> DateTimePoint {
        let (years, months, days) = match *self {
            ConfigHorizon::Years(years) => (i32::from(years), 0, 0),
            ConfigHorizon::Months(months) => (0, i32::try_from(months).unwrap_or(i32::MAX), 0),
            ConfigHorizon::Weeks(weeks) => {
                (0, 0, i32::try_from(weeks).unwrap_or(i32::MAX).saturating_mul(7))
            }
            ConfigHorizon::Days(days) => (0, 0, i32::try_from(days).unwrap_or(i32::MAX)),
        };

        ValueDuration::resolve_calendar_span(anchor.date_part(), years, months, days)
            .and_then(|span| anchor.checked_add_seconds(span.as_seconds()))
            .or_else(|_| last_representable(anchor))
            .unwrap_or_else(|_| anchor.clone())
    }
}

fn last_representable(anchor: &DateTimePoint) -> Result<DateTimePoint, CalendarRangeError> {
    let date = ValueDate::new(9999, 12, 31)?;
    Ok(match anchor.time() {
        Some(_) => DateTimePoint::date_time(date, ValueTime::END_OF_DAY, anchor.zone().clone()),
        None => DateTimePoint::date(date),
    })
}

impl<'de> serde::Deserialize<'de> for ConfigHorizon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct HorizonVisitor;

        impl de::Visitor<'_> for HorizonVisitor {
            type Value = ConfigHorizon;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#"a span string like "10y", "18m", "4w", or "400d""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_horizon(value).map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(HorizonVisitor)
    }
}

/// Parse a span string in the format "10y" / "18m" / "4w" / "400d".
fn parse_horizon(s: &str) -> Result<ConfigHorizon, Box<dyn Error>> {
    let s = s.trim();
    if let Some(rest) = s.strip_suffix('y') {
        Ok(ConfigHorizon::Years(rest.trim().parse()?))
    } else if let Some(rest) = s.strip_suffix('m') {
        Ok(ConfigHorizon::Months(rest.trim().parse()?))
    } else if let Some(rest) = s.strip_suffix('w') {
        Ok(ConfigHorizon::Weeks(rest.trim().parse()?))
    } else if let Some(rest) = s.strip_suffix('d') {
        Ok(ConfigHorizon::Days(rest.trim().parse()?))
    } else {
        Err(format!("Invalid horizon format: {s}").into())
    }
}
