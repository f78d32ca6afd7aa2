//! Proleptic Gregorian calendar arithmetic.
//!
//! Years use astronomical numbering: year 0 is 1 BCE and precedes year 1.

use crate::consts::{
    CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::julian_day::{YearOverflow, narrow_year};
use crate::{GregorianDate, JulianDay};

/// -1 for January and February, 0 for the other months.
///
/// Relies on `/` truncating toward zero: a floored quotient would put
/// March through July in the previous computational year as well.
#[inline]
const fn march_year_shift(month: i64) -> i64 {
    (month - 8) / 6
}

/// Julian Day Number of a Gregorian date.
///
/// Every other division floors, so years before the epoch stay consistent.
/// Calendar-invalid input is not rejected; the arithmetic runs regardless.
pub fn gregorian_to_julian_day(year: i32, month: i32, day: i32) -> JulianDay {
    let (gy, gm, gd) = (i64::from(year), i64::from(month), i64::from(day));
    let shifted_year = gy + march_year_shift(gm) + 100_100;

    let jd = (shifted_year * 1461).div_euclid(4)
        + (153 * (gm + 9).rem_euclid(12) + 2).div_euclid(5)
        + gd
        - 34_840_408;
    JulianDay::new(jd - (shifted_year.div_euclid(100) * 3).div_euclid(4) + 752)
}

/// Gregorian date of a Julian Day Number. Always calendar-valid.
///
/// Days whose year does not fit in `i32` clamp to [`GregorianDate::MIN`] or
/// [`GregorianDate::MAX`].
pub fn julian_day_to_gregorian(jd: JulianDay) -> GregorianDate {
    let jd = jd.get();

    let mut j = 4 * jd + 139_361_631;
    j += ((4 * jd + 183_187_720).div_euclid(146_097) * 3).div_euclid(4) * 4 - 3908;
    let i = j.rem_euclid(1461).div_euclid(4) * 5 + 308;

    let day = i.rem_euclid(153).div_euclid(5) + 1;
    let month = i.div_euclid(153).rem_euclid(12) + 1;
    let year = match narrow_year(j.div_euclid(1461) - 100_100 - march_year_shift(month)) {
        Ok(year) => year,
        Err(YearOverflow::BeforeMin) => return GregorianDate::MIN,
        Err(YearOverflow::AfterMax) => return GregorianDate::MAX,
    };

    // month is 1..=12 and day 1..=31 by construction
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (month, day) = (month as u8, day as u8);
    GregorianDate::from_parts(year, month, day)
}

pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
