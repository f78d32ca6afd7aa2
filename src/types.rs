use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    FIRST_MONTH, GREGORIAN_SEPARATOR, JALAALI_MONTH_NAMES, JALAALI_SEPARATOR, MAX_MONTH, MIN_DAY,
};
use crate::{JulianDay, LeapRule, ParseError, Weekday, gregorian, jalaali};

/// A proleptic Gregorian date.
///
/// Displays and serializes as `YYYY-MM-DD`, the form date pickers store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

/// A Jalaali (Persian solar hijri) date.
///
/// Displays and serializes as `YYYY/MM/DD`. A value does not remember which
/// [`LeapRule`] produced it; methods without a rule argument use the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaaliDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// 1 January of `i32::MIN`
    pub const MIN: Self = Self::from_parts(i32::MIN, FIRST_MONTH, MIN_DAY);
    /// 31 December of `i32::MAX`
    pub const MAX: Self = Self::from_parts(i32::MAX, MAX_MONTH, 31);

    /// Creates a new date, validating month and day for the year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` if the
    /// components do not name a calendar day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        validate_month(month)?;
        validate_day(year, month, day, gregorian::days_in_month(year, month))?;
        Ok(Self { year, month, day })
    }

    /// Components already known to be calendar-valid
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn to_tuple(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    pub fn to_julian_day(self) -> JulianDay {
        gregorian::gregorian_to_julian_day(self.year, i32::from(self.month), i32::from(self.day))
    }

    pub fn from_julian_day(jd: JulianDay) -> Self {
        gregorian::julian_day_to_gregorian(jd)
    }

    /// The current UTC date.
    pub fn today_utc() -> Self {
        Self::from_julian_day(JulianDay::today_utc())
    }

    pub fn to_jalaali(self) -> JalaaliDate {
        self.to_jalaali_with(LeapRule::default())
    }

    pub fn to_jalaali_with(self, rule: LeapRule) -> JalaaliDate {
        rule.from_julian_day(self.to_julian_day())
    }

    pub fn weekday(self) -> Weekday {
        self.to_julian_day().weekday()
    }
}

impl JalaaliDate {
    /// Creates a new date, validated against the grand-cycle leap rule.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for year 0, and `InvalidMonth` or
    /// `InvalidDay` if the components do not name a calendar day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Self::new_with_rule(year, month, day, LeapRule::default())
    }

    /// Creates a new date, validated against `rule`.
    ///
    /// # Errors
    /// Same as [`JalaaliDate::new`].
    pub fn new_with_rule(
        year: i32,
        month: u8,
        day: u8,
        rule: LeapRule,
    ) -> Result<Self, ParseError> {
        validate_jalaali_year(year)?;
        validate_month(month)?;
        validate_day(year, month, day, rule.days_in_month(year, month))?;
        Ok(Self { year, month, day })
    }

    /// Components already known to be calendar-valid
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn to_tuple(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// English transliteration of the month, e.g. "Farvardin"
    pub const fn month_name(self) -> &'static str {
        JALAALI_MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn to_julian_day(self) -> JulianDay {
        self.to_julian_day_with(LeapRule::default())
    }

    pub fn to_julian_day_with(self, rule: LeapRule) -> JulianDay {
        rule.to_julian_day(self.year, i32::from(self.month), i32::from(self.day))
    }

    pub fn from_julian_day(jd: JulianDay) -> Self {
        jalaali::julian_day_to_jalaali(jd)
    }

    /// The current UTC date.
    pub fn today_utc() -> Self {
        Self::from_julian_day(JulianDay::today_utc())
    }

    pub fn to_gregorian(self) -> GregorianDate {
        self.to_gregorian_with(LeapRule::default())
    }

    pub fn to_gregorian_with(self, rule: LeapRule) -> GregorianDate {
        gregorian::julian_day_to_gregorian(self.to_julian_day_with(rule))
    }

    /// Day of the week, with the date read under the grand-cycle rule.
    pub fn weekday(self) -> Weekday {
        self.weekday_with(LeapRule::default())
    }

    pub fn weekday_with(self, rule: LeapRule) -> Weekday {
        self.to_julian_day_with(rule).weekday()
    }
}

// --- validation ---

pub(crate) fn validate_jalaali_year(year: i32) -> Result<(), ParseError> {
    if year == 0 {
        debug!(year, "rejected Jalaali year 0");
        return Err(ParseError::InvalidYear(year));
    }
    Ok(())
}

pub(crate) fn validate_month(month: u8) -> Result<(), ParseError> {
    if month == 0 || month > MAX_MONTH {
        debug!(month, "rejected month");
        return Err(ParseError::InvalidMonth(month));
    }
    Ok(())
}

fn validate_day(year: i32, month: u8, day: u8, max_day: u8) -> Result<(), ParseError> {
    if day < MIN_DAY || day > max_day {
        debug!(year, month, day, max_day, "rejected day");
        return Err(ParseError::InvalidDay { year, month, day });
    }
    Ok(())
}

// --- parsing / formatting helpers ---

/// Writes a year zero-padded to four digits, with a leading `-` if negative.
pub(crate) fn write_year(f: &mut fmt::Formatter<'_>, year: i32) -> fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}")
    }
}

/// Splits `s` into a signed year and the remaining components.
///
/// A leading `-` belongs to the year, so `-0001-03-01` is year -1.
pub(crate) fn split_components(s: &str, separator: char) -> Result<(i32, Vec<&str>), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (negative, body) = trimmed.strip_prefix('-').map_or((false, trimmed), |rest| (true, rest));
    let mut parts = body.split(separator).map(str::trim);
    let year_part = parts.next().unwrap_or_default();

    let year = parse_digits::<i32>(year_part)?;
    let year = if negative {
        year.checked_neg().ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?
    } else {
        year
    };

    Ok((year, parts.collect()))
}

/// Parses an unsigned run of ASCII digits.
pub(crate) fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_date(s: &str, separator: char) -> Result<(i32, u8, u8), ParseError> {
    let (year, rest) = split_components(s, separator)?;
    match rest.as_slice() {
        [month, day] => Ok((year, parse_digits(month)?, parse_digits(day)?)),
        _ => {
            debug!(input = s, "wrong number of date components");
            Err(ParseError::InvalidFormat(format!(
                "Expected 3 components separated by '{separator}', found {}: {}",
                rest.len() + 1,
                s.trim()
            )))
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year)?;
        write!(f, "{GREGORIAN_SEPARATOR}{:02}{GREGORIAN_SEPARATOR}{:02}", self.month, self.day)
    }
}

impl fmt::Display for JalaaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year)?;
        write!(f, "{JALAALI_SEPARATOR}{:02}{JALAALI_SEPARATOR}{:02}", self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date(s, GREGORIAN_SEPARATOR)?;
        Self::new(year, month, day)
    }
}

impl FromStr for JalaaliDate {
    type Err = ParseError;

    /// Parses `YYYY/MM/DD`, validated against the grand-cycle rule.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date(s, JALAALI_SEPARATOR)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for JalaaliDate {
    type Error = ParseError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<GregorianDate> for (i32, u8, u8) {
    fn from(date: GregorianDate) -> Self {
        date.to_tuple()
    }
}

impl From<JalaaliDate> for (i32, u8, u8) {
    fn from(date: JalaaliDate) -> Self {
        date.to_tuple()
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for JalaaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JalaaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
