//! Settings a date picker carries between conversions.

use serde::{Deserialize, Serialize};

use crate::{LeapRule, WeekStart};

/// Calendar settings for month grids and conversions.
///
/// Missing fields deserialize to their defaults, so `{}` is a valid config.
///
/// # Example
///
/// ```
/// use jalaali_date::{CalendarConfig, LeapRule, WeekStart};
///
/// let config = CalendarConfig::new()
///     .with_leap_rule(LeapRule::ThirtyThreeYear)
///     .with_week_start(WeekStart::Sunday);
///
/// assert_eq!(config.week_start(), WeekStart::Sunday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Arithmetic used for Jalaali leap years.
    leap_rule: LeapRule,
    /// Weekday shown in the first grid column.
    week_start: WeekStart,
}

impl CalendarConfig {
    /// Grand-cycle leap years, weeks starting on Saturday.
    pub const fn new() -> Self {
        Self {
            leap_rule: LeapRule::GrandCycle,
            week_start: WeekStart::Saturday,
        }
    }

    #[must_use]
    pub const fn with_leap_rule(mut self, leap_rule: LeapRule) -> Self {
        self.leap_rule = leap_rule;
        self
    }

    #[must_use]
    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub const fn leap_rule(&self) -> LeapRule {
        self.leap_rule
    }

    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }
}
