//! Jalaali (Persian solar hijri) and Gregorian date conversion.
//!
//! Every conversion goes through a [`JulianDay`]: a date is turned into a
//! continuous day count, and the count is turned into a date in the other
//! calendar.
//!
//! ```
//! let gregorian = jalaali_date::to_gregorian(1403, 1, 1);
//! assert_eq!(gregorian.to_string(), "2024-03-20");
//!
//! let jalaali = jalaali_date::to_jalaali(1979, 2, 11);
//! assert_eq!(jalaali.to_string(), "1357/11/22");
//! ```

mod config;
mod consts;
mod julian_day;
mod month;
mod prelude;
mod rule;
mod types;
mod weekday;

pub mod gregorian;
pub mod jalaali;
pub mod observed;

#[cfg(test)]
mod test_utils;

pub use config::CalendarConfig;
pub use consts::*;
pub use julian_day::JulianDay;
pub use month::{JalaaliMonth, MonthError};
pub use rule::LeapRule;
pub use types::{GregorianDate, JalaaliDate};
pub use weekday::{WeekStart, Weekday};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0} (there is no Jalaali year 0)")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Converts a Jalaali date to Gregorian using the 2820-year grand cycle.
///
/// Input is not validated: an out-of-range month or day rolls forward into
/// a later date instead of failing. Use [`JalaaliDate::new`] to check first.
pub fn to_gregorian(jy: i32, jm: i32, jd: i32) -> GregorianDate {
    gregorian::julian_day_to_gregorian(jalaali::jalaali_to_julian_day(jy, jm, jd))
}

/// Converts a Gregorian date to Jalaali using the 2820-year grand cycle.
///
/// Input is not validated, as with [`to_gregorian`].
pub fn to_jalaali(gy: i32, gm: i32, gd: i32) -> JalaaliDate {
    jalaali::julian_day_to_jalaali(gregorian::gregorian_to_julian_day(gy, gm, gd))
}
