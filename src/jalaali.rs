//! Jalaali calendar arithmetic on the 2820-year grand cycle.
//!
//! Leap years follow the grand cycle: 683 leap years per 2820, laid out in
//! near-33-year sub-cycles, expressed as day counts from an epoch instead of a
//! table. There is no year 0: year -1 is followed by year 1.

use crate::consts::{
    ESFAND, ESFAND_DAYS_LEAP, FIRST_HALF_DAYS, FIRST_MONTH, GRAND_CYCLE_DAYS, GRAND_CYCLE_YEARS,
    JALAALI_DAYS_IN_MONTH, MAX_MONTH, MIN_DAY, PERSIAN_EPOCH,
};
use crate::julian_day::{YearOverflow, narrow_year};
use crate::{JalaaliDate, JulianDay};

/// First year of the cycle the arithmetic is anchored on.
const CYCLE_BASE_YEAR: i64 = 474;

/// Days from 1 Farvardin to the first day of `month`.
#[inline]
pub(crate) const fn days_before_month(month: i64) -> i64 {
    if month <= 7 { (month - 1) * 31 } else { (month - 1) * 30 + 6 }
}

/// Month (1..=12) containing the 1-based `day_of_year`.
#[inline]
pub(crate) const fn month_of_day_of_year(day_of_year: i64) -> i64 {
    if day_of_year <= FIRST_HALF_DAYS {
        (day_of_year + 30).div_euclid(31)
    } else {
        6 + (day_of_year - FIRST_HALF_DAYS + 29).div_euclid(30)
    }
}

/// Offset of `year` from the cycle base, skipping year 0.
#[inline]
const fn epoch_base(year: i64) -> i64 {
    year - if year >= 0 { CYCLE_BASE_YEAR } else { CYCLE_BASE_YEAR - 1 }
}

/// Julian Day Number of a Jalaali date.
///
/// Calendar-invalid input is not rejected: month 13 or day 40 run through the
/// same arithmetic and land somewhere in a later month.
pub fn jalaali_to_julian_day(year: i32, month: i32, day: i32) -> JulianDay {
    let (jy, jm, jd) = (i64::from(year), i64::from(month), i64::from(day));
    let epbase = epoch_base(jy);
    let epyear = CYCLE_BASE_YEAR + epbase.rem_euclid(GRAND_CYCLE_YEARS);

    JulianDay::new(
        jd + days_before_month(jm)
            + (epyear * 682 - 110).div_euclid(2816)
            + (epyear - 1) * 365
            + epbase.div_euclid(GRAND_CYCLE_YEARS) * GRAND_CYCLE_DAYS
            + PERSIAN_EPOCH
            - 1,
    )
}

/// Jalaali date of a Julian Day Number. Always calendar-valid.
///
/// Days whose year does not fit in `i32` clamp to 1 Farvardin of `i32::MIN`
/// or the last day of `i32::MAX`.
pub fn julian_day_to_jalaali(jd: JulianDay) -> JalaaliDate {
    let days = jd.get();
    let since_cycle_base = days - jalaali_to_julian_day(475, 1, 1).get();
    let cycle = since_cycle_base.div_euclid(GRAND_CYCLE_DAYS);
    let day_in_cycle = since_cycle_base.rem_euclid(GRAND_CYCLE_DAYS);

    let year_in_cycle = if day_in_cycle == GRAND_CYCLE_DAYS - 1 {
        // last day of the cycle
        GRAND_CYCLE_YEARS
    } else {
        let aux1 = day_in_cycle.div_euclid(366);
        let aux2 = day_in_cycle.rem_euclid(366);
        (2134 * aux1 + 2816 * aux2 + 2815).div_euclid(1_028_522) + aux1 + 1
    };

    let mut year = year_in_cycle + GRAND_CYCLE_YEARS * cycle + CYCLE_BASE_YEAR;
    if year <= 0 {
        year -= 1;
    }
    let year = match narrow_year(year) {
        Ok(year) => year,
        Err(YearOverflow::BeforeMin) => {
            return JalaaliDate::from_parts(i32::MIN, FIRST_MONTH, MIN_DAY);
        }
        Err(YearOverflow::AfterMax) => {
            return JalaaliDate::from_parts(i32::MAX, ESFAND, days_in_month(i32::MAX, ESFAND));
        }
    };

    let day_of_year = days - jalaali_to_julian_day(year, 1, 1).get() + 1;
    // 1..=12 by construction
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month = month_of_day_of_year(day_of_year) as u8;
    let day = days - jalaali_to_julian_day(year, i32::from(month), 1).get() + 1;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = day as u8;
    JalaaliDate::from_parts(year, month, day)
}

/// Whether Esfand has 30 days in `year` under the grand cycle.
pub const fn is_leap_year(year: i32) -> bool {
    let epyear = CYCLE_BASE_YEAR + epoch_base(year as i64).rem_euclid(GRAND_CYCLE_YEARS);
    ((epyear + 38) * 31).rem_euclid(128) < 31
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALAALI_DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// The year after `year`, skipping 0. `None` past `i32::MAX`.
pub(crate) const fn next_year(year: i32) -> Option<i32> {
    if year == -1 { Some(1) } else { year.checked_add(1) }
}

/// The year before `year`, skipping 0. `None` past `i32::MIN`.
pub(crate) const fn prev_year(year: i32) -> Option<i32> {
    if year == 1 { Some(-1) } else { year.checked_sub(1) }
}
