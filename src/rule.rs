use serde::{Deserialize, Serialize};

use crate::gregorian::{gregorian_to_julian_day, julian_day_to_gregorian};
use crate::{GregorianDate, JalaaliDate, JulianDay, jalaali, observed, prelude::*};

/// Which arithmetic decides Jalaali leap years.
///
/// The two agree on every Nowruz from 1244 to 1403 AP and first differ at
/// 1403/12/30, which only [`LeapRule::ThirtyThreeYear`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapRule {
    /// 2820-year grand cycle, see [`crate::jalaali`]
    #[default]
    #[display(fmt = "2820-year grand cycle")]
    GrandCycle,
    /// Corrected 33-year rule, see [`crate::observed`]
    #[display(fmt = "33-year rule")]
    ThirtyThreeYear,
}

impl LeapRule {
    pub fn to_julian_day(self, year: i32, month: i32, day: i32) -> JulianDay {
        match self {
            Self::GrandCycle => jalaali::jalaali_to_julian_day(year, month, day),
            Self::ThirtyThreeYear => observed::jalaali_to_julian_day(year, month, day),
        }
    }

    pub fn from_julian_day(self, jd: JulianDay) -> JalaaliDate {
        match self {
            Self::GrandCycle => jalaali::julian_day_to_jalaali(jd),
            Self::ThirtyThreeYear => observed::julian_day_to_jalaali(jd),
        }
    }

    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::GrandCycle => jalaali::is_leap_year(year),
            Self::ThirtyThreeYear => observed::is_leap_year(year),
        }
    }

    pub fn days_in_month(self, year: i32, month: u8) -> u8 {
        match self {
            Self::GrandCycle => jalaali::days_in_month(year, month),
            Self::ThirtyThreeYear => observed::days_in_month(year, month),
        }
    }

    pub fn days_in_year(self, year: i32) -> u16 {
        match self {
            Self::GrandCycle => jalaali::days_in_year(year),
            Self::ThirtyThreeYear => observed::days_in_year(year),
        }
    }

    /// Jalaali to Gregorian under this rule. Input is not validated.
    pub fn to_gregorian(self, year: i32, month: i32, day: i32) -> GregorianDate {
        julian_day_to_gregorian(self.to_julian_day(year, month, day))
    }

    /// Gregorian to Jalaali under this rule. Input is not validated.
    pub fn to_jalaali(self, year: i32, month: i32, day: i32) -> JalaaliDate {
        self.from_julian_day(gregorian_to_julian_day(year, month, day))
    }
}
