//! Jalaali arithmetic on the 33-year rule, corrected to the observed calendar.
//!
//! The 2820-year grand cycle drifts from the calendar in civil use: its first
//! wrong day is 1403/12/30. The 33-year rule `(25y + 11) mod 33 < 8`, with the
//! correction table below, matches the astronomical calculation on the
//! 52.5°E meridian from 1178 AP through 3000 AP. Outside that window the
//! results are still consistent (contiguous, round-tripping) but only
//! approximate the sky.
//!
//! Year numbering is the same as in [`crate::jalaali`]: no year 0.

use crate::consts::{
    ESFAND, ESFAND_DAYS_LEAP, FIRST_MONTH, JALAALI_DAYS_IN_MONTH, MAX_MONTH, MIN_DAY, PERSIAN_EPOCH,
};
use crate::jalaali::{days_before_month, month_of_day_of_year};
use crate::julian_day::{YearOverflow, narrow_year};
use crate::{JalaaliDate, JulianDay};

/// Years the 33-year rule calls leap but the observed calendar does not.
/// The year after each of them is leap instead.
const NON_LEAP_CORRECTION: [i64; 78] = [
    1502, 1601, 1634, 1667, 1700, 1733, 1766, 1799, 1832, 1865, 1898, 1931, 1964, 1997, 2030, 2059,
    2063, 2096, 2129, 2158, 2162, 2191, 2195, 2224, 2228, 2257, 2261, 2290, 2294, 2323, 2327, 2356,
    2360, 2389, 2393, 2422, 2426, 2455, 2459, 2488, 2492, 2521, 2525, 2554, 2558, 2587, 2591, 2620,
    2624, 2653, 2657, 2686, 2690, 2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789, 2818, 2822, 2847,
    2851, 2855, 2880, 2884, 2888, 2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

fn is_corrected(year: i64) -> bool {
    year >= NON_LEAP_CORRECTION[0] && NON_LEAP_CORRECTION.binary_search(&year).is_ok()
}

/// Civil year to a gapless count where -1 AP becomes 0.
const fn to_gapless(year: i32) -> i64 {
    let year = year as i64;
    if year > 0 { year } else { year + 1 }
}

fn from_gapless(year: i64) -> Result<i32, YearOverflow> {
    narrow_year(if year > 0 { year } else { year - 1 })
}

/// Julian Day Number of 1 Farvardin of a gapless year.
fn nowruz(year: i64) -> i64 {
    let day = PERSIAN_EPOCH - 1 + 365 * (year - 1) + (8 * year + 21).div_euclid(33);
    if is_corrected(year - 1) { day - 1 } else { day }
}

/// Julian Day Number of a Jalaali date under the observed calendar.
///
/// Like [`crate::jalaali::jalaali_to_julian_day`], input is not validated.
pub fn jalaali_to_julian_day(year: i32, month: i32, day: i32) -> JulianDay {
    let day_of_year = days_before_month(i64::from(month)) + i64::from(day);
    JulianDay::new(nowruz(to_gapless(year)) + day_of_year - 1)
}

/// Jalaali date of a Julian Day Number under the observed calendar.
///
/// Clamps like [`crate::jalaali::julian_day_to_jalaali`] when the year does
/// not fit in `i32`.
pub fn julian_day_to_jalaali(jd: JulianDay) -> JalaaliDate {
    let days = jd.get();
    let mut year = 1 + (33 * (days - PERSIAN_EPOCH + 1) + 3).div_euclid(12_053);
    let mut day_of_year = days - nowruz(year) + 1;
    if day_of_year == 366 && is_corrected(year) {
        year += 1;
        day_of_year = 1;
    }

    let month = month_of_day_of_year(day_of_year);
    let day = day_of_year - days_before_month(month);

    // month is 1..=12 and day 1..=31 by construction
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (month, day) = (month as u8, day as u8);
    match from_gapless(year) {
        Ok(year) => JalaaliDate::from_parts(year, month, day),
        Err(YearOverflow::BeforeMin) => JalaaliDate::from_parts(i32::MIN, FIRST_MONTH, MIN_DAY),
        Err(YearOverflow::AfterMax) => {
            JalaaliDate::from_parts(i32::MAX, ESFAND, days_in_month(i32::MAX, ESFAND))
        }
    }
}

/// Whether Esfand has 30 days in `year` under the observed calendar.
pub fn is_leap_year(year: i32) -> bool {
    let year = to_gapless(year);
    if is_corrected(year) {
        false
    } else if is_corrected(year - 1) {
        true
    } else {
        (25 * year + 11).rem_euclid(33) < 8
    }
}

pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALAALI_DAYS_IN_MONTH[month as usize]
    }
}

pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
