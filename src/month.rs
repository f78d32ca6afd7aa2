use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{ESFAND, FIRST_MONTH, JALAALI_MONTH_NAMES, JALAALI_SEPARATOR, MIN_DAY};
use crate::jalaali::{next_year, prev_year};
use crate::types::{
    parse_digits, split_components, validate_jalaali_year, validate_month, write_year,
};
use crate::{CalendarConfig, GregorianDate, JalaaliDate, JulianDay, LeapRule, ParseError};

const DAYS_PER_WEEK: usize = 7;

/// A Jalaali month as shown by a date picker: one grid of day cells.
///
/// Displays and parses as `YYYY/MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaaliMonth {
    year: i32,
    month: u8,
}

/// Error type for month parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthError {
    /// Invalid month format.
    #[error("Invalid month format: {0}")]
    InvalidFormat(String),

    /// Error in a year or month component.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl JalaaliMonth {
    /// # Errors
    /// Returns `ParseError::InvalidYear` for year 0 and
    /// `ParseError::InvalidMonth` outside 1..=12.
    pub fn new(year: i32, month: u8) -> Result<Self, ParseError> {
        validate_jalaali_year(year)?;
        validate_month(month)?;
        Ok(Self { year, month })
    }

    /// The month a picker should open on for `date`.
    pub fn containing(date: GregorianDate, rule: LeapRule) -> Self {
        Self::of(date.to_jalaali_with(rule))
    }

    /// The month a picker opens on when it has no date yet.
    pub fn current(rule: LeapRule) -> Self {
        Self::containing(GregorianDate::today_utc(), rule)
    }

    pub const fn of(date: JalaaliDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn name(self) -> &'static str {
        JALAALI_MONTH_NAMES[(self.month - 1) as usize]
    }

    pub const fn first_day(self) -> JalaaliDate {
        JalaaliDate::from_parts(self.year, self.month, MIN_DAY)
    }

    fn first_julian_day(self, rule: LeapRule) -> JulianDay {
        rule.to_julian_day(self.year, i32::from(self.month), i32::from(MIN_DAY))
    }

    /// Number of days, measured as the distance to the next month's first day.
    pub fn day_count(self, rule: LeapRule) -> u8 {
        self.next()
            .and_then(|next| {
                u8::try_from(next.first_julian_day(rule) - self.first_julian_day(rule)).ok()
            })
            .unwrap_or_else(|| rule.days_in_month(self.year, self.month))
    }

    /// `None` after Esfand of the last representable year.
    pub const fn next(self) -> Option<Self> {
        if self.month < ESFAND {
            return Some(Self {
                year: self.year,
                month: self.month + 1,
            });
        }
        match next_year(self.year) {
            Some(year) => Some(Self {
                year,
                month: FIRST_MONTH,
            }),
            None => None,
        }
    }

    /// `None` before Farvardin of the first representable year.
    pub const fn prev(self) -> Option<Self> {
        if self.month > FIRST_MONTH {
            return Some(Self {
                year: self.year,
                month: self.month - 1,
            });
        }
        match prev_year(self.year) {
            Some(year) => Some(Self { year, month: ESFAND }),
            None => None,
        }
    }

    /// Empty cells before day 1 in the first grid row.
    pub fn leading_blanks(self, config: &CalendarConfig) -> u8 {
        let weekday = self.first_julian_day(config.leap_rule()).weekday();
        config.week_start().offset(weekday)
    }

    /// Day cells padded with `None` to whole weeks.
    pub fn cells(self, config: &CalendarConfig) -> Vec<Option<JalaaliDate>> {
        let blanks = usize::from(self.leading_blanks(config));
        let days = self.day_count(config.leap_rule());
        let total = (blanks + usize::from(days)).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

        let mut cells = Vec::with_capacity(total);
        cells.resize(blanks, None);
        cells.extend(
            (MIN_DAY..=days).map(|day| Some(JalaaliDate::from_parts(self.year, self.month, day))),
        );
        cells.resize(total, None);

        trace!(month = %self, blanks, days, rows = total / DAYS_PER_WEEK, "built month grid");
        cells
    }

    /// Gregorian date to store when `day` of this month is picked.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the month has no such day under `rule`.
    pub fn gregorian_of(self, day: u8, rule: LeapRule) -> Result<GregorianDate, ParseError> {
        let date = JalaaliDate::new_with_rule(self.year, self.month, day, rule)?;
        Ok(date.to_gregorian_with(rule))
    }
}

impl From<JalaaliDate> for JalaaliMonth {
    fn from(date: JalaaliDate) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for JalaaliMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year)?;
        write!(f, "{JALAALI_SEPARATOR}{:02}", self.month)
    }
}

impl FromStr for JalaaliMonth {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, rest) = split_components(s, JALAALI_SEPARATOR)?;
        let [month] = rest.as_slice() else {
            debug!(input = s, "wrong number of month components");
            return Err(MonthError::InvalidFormat(format!(
                "Expected YYYY{JALAALI_SEPARATOR}MM, found {} components: {}",
                rest.len() + 1,
                s.trim()
            )));
        };
        Ok(Self::new(year, parse_digits(month)?)?)
    }
}

impl Serialize for JalaaliMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JalaaliMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
