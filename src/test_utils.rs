//! Constructors for known-valid values in tests.

use crate::{GregorianDate, JalaaliDate, JalaaliMonth};

pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}

/// Validated against the grand-cycle rule.
pub fn jalaali(year: i32, month: u8, day: u8) -> JalaaliDate {
    JalaaliDate::new(year, month, day).unwrap()
}

pub fn month(year: i32, month: u8) -> JalaaliMonth {
    JalaaliMonth::new(year, month).unwrap()
}
