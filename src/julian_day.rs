//! Julian Day Numbers, the pivot every conversion goes through.

use std::ops::{Add, Sub};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::{UNIX_EPOCH, Weekday, prelude::*};

const SECONDS_PER_DAY: u64 = 86_400;
const DAYS_PER_WEEK: i64 = 7;

/// Bound on the day count in either direction. It lies past every date with an
/// `i32` year and keeps the conversion arithmetic far from `i64` overflow.
const MAX_DAY: i64 = 1 << 40;

/// A Julian Day Number: a continuous day count with no calendar structure.
///
/// Both calendars convert through this representation, so the difference of two
/// values is the number of days between the dates they came from. Values are
/// clamped to [`JulianDay::MIN`]..=[`JulianDay::MAX`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[display(fmt = "{_0}")]
#[serde(from = "i64", into = "i64")]
pub struct JulianDay(i64);

impl JulianDay {
    pub const MIN: Self = Self(-MAX_DAY);
    pub const MAX: Self = Self(MAX_DAY);

    /// Wraps a day count, clamping it to `MIN..=MAX`.
    pub const fn new(value: i64) -> Self {
        if value < -MAX_DAY {
            Self::MIN
        } else if value > MAX_DAY {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the day count as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Converts a count of days since 1970-01-01.
    pub const fn from_unix_days(days: i64) -> Self {
        Self::new(days.saturating_add(UNIX_EPOCH))
    }

    /// Days since 1970-01-01, negative before it.
    pub const fn to_unix_days(self) -> i64 {
        self.0 - UNIX_EPOCH
    }

    /// The current UTC day according to the system clock.
    pub fn today_utc() -> Self {
        let days = match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs() / SECONDS_PER_DAY).unwrap_or(i64::MAX),
            // clock set before 1970: round down to the day that contains it
            Err(before) => i64::try_from(before.duration().as_secs().div_ceil(SECONDS_PER_DAY))
                .map_or(i64::MIN, |days| -days),
        };
        Self::from_unix_days(days)
    }

    /// Day of the week. JDN 0 fell on a Monday.
    pub const fn weekday(self) -> Weekday {
        Weekday::from_days_from_sunday((self.0 + 1).rem_euclid(DAYS_PER_WEEK))
    }
}

impl From<i64> for JulianDay {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl Add<i64> for JulianDay {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        Self::new(self.0.saturating_add(days))
    }
}

impl Sub<i64> for JulianDay {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        Self::new(self.0.saturating_sub(days))
    }
}

impl Sub for JulianDay {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        self.0 - other.0
    }
}

/// A computed year that does not fit in `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum YearOverflow {
    BeforeMin,
    AfterMax,
}

/// Narrows a computed year to `i32`.
pub(crate) fn narrow_year(year: i64) -> Result<i32, YearOverflow> {
    i32::try_from(year).map_err(|_| {
        if year < 0 { YearOverflow::BeforeMin } else { YearOverflow::AfterMax }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_from_into() {
        let jd = JulianDay::new(2_451_545);
        assert_eq!(jd.get(), 2_451_545);

        let from: JulianDay = 2_451_545_i64.into();
        assert_eq!(from, jd);

        let raw: i64 = jd.into();
        assert_eq!(raw, 2_451_545);
    }

    #[test]
    fn test_display() {
        assert_eq!(JulianDay::new(2_460_390).to_string(), "2460390");
        assert_eq!(JulianDay::new(-12).to_string(), "-12");
    }

    #[test]
    fn test_arithmetic() {
        let jd = JulianDay::new(100);
        assert_eq!(jd + 5, JulianDay::new(105));
        assert_eq!(jd - 5, JulianDay::new(95));
        assert_eq!(JulianDay::new(130) - jd, 30);
        assert_eq!(jd - JulianDay::new(130), -30);
    }

    #[test]
    fn test_unix_days() {
        assert_eq!(JulianDay::from_unix_days(0).get(), 2_440_588);
        assert_eq!(JulianDay::from_unix_days(19_802).get(), 2_460_390);
        assert_eq!(JulianDay::from_unix_days(-1).to_unix_days(), -1);
    }

    #[test]
    fn test_weekday_cases() {
        struct TestCase {
            jd: i64,
            weekday: Weekday,
            description: &'static str,
        }

        let cases = [
            TestCase {
                jd: 0,
                weekday: Weekday::Monday,
                description: "JDN 0",
            },
            TestCase {
                jd: -1,
                weekday: Weekday::Sunday,
                description: "day before JDN 0",
            },
            TestCase {
                jd: 2_440_588,
                weekday: Weekday::Thursday,
                description: "1970-01-01",
            },
            TestCase {
                jd: 2_460_390,
                weekday: Weekday::Wednesday,
                description: "2024-03-20, Nowruz 1403",
            },
            TestCase {
                jd: 2_299_161,
                weekday: Weekday::Friday,
                description: "1582-10-15",
            },
        ];

        for case in &cases {
            assert_eq!(
                JulianDay::new(case.jd).weekday(),
                case.weekday,
                "JDN {} ({})",
                case.jd,
                case.description
            );
        }
    }

    #[test]
    fn test_today_is_after_2024() {
        assert!(JulianDay::today_utc() > JulianDay::new(2_460_390));
    }

    #[test]
    fn test_serde_as_integer() {
        let jd = JulianDay::new(2_460_390);
        let json = serde_json::to_string(&jd).unwrap();
        assert_eq!(json, "2460390");

        let parsed: JulianDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, jd);
    }

    #[test]
    fn test_narrow_year() {
        assert_eq!(narrow_year(1403), Ok(1403));
        assert_eq!(narrow_year(-5), Ok(-5));
        assert_eq!(narrow_year(i64::from(i32::MAX)), Ok(i32::MAX));
        assert_eq!(narrow_year(i64::from(i32::MAX) + 1), Err(YearOverflow::AfterMax));
        assert_eq!(narrow_year(i64::from(i32::MIN) - 1), Err(YearOverflow::BeforeMin));
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(JulianDay::new(i64::MAX), JulianDay::MAX);
        assert_eq!(JulianDay::new(i64::MIN), JulianDay::MIN);
        assert_eq!(JulianDay::new(i64::MAX / 2), JulianDay::MAX);
        assert_eq!(JulianDay::from(i64::MIN / 2), JulianDay::MIN);
        assert_eq!(JulianDay::new(2_460_390).get(), 2_460_390);
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(JulianDay::MAX + 1, JulianDay::MAX);
        assert_eq!(JulianDay::new(0) + i64::MAX, JulianDay::MAX);
        assert_eq!(JulianDay::MIN - 1, JulianDay::MIN);
        assert_eq!(JulianDay::new(0) - i64::MAX, JulianDay::MIN);
        assert_eq!(JulianDay::from_unix_days(i64::MAX), JulianDay::MAX);
        assert_eq!(JulianDay::MAX - JulianDay::MIN, 2 * (1_i64 << 40));
    }

    #[test]
    fn test_deserialize_clamps() {
        let parsed: JulianDay = serde_json::from_str(&i64::MAX.to_string()).unwrap();
        assert_eq!(parsed, JulianDay::MAX);
    }
}
