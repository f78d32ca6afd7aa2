/// Julian Day Number of 1 Farvardin 1 AP (Julian 622-03-19, proleptic Gregorian 622-03-22)
pub const PERSIAN_EPOCH: i64 = 1_948_321;

/// Julian Day Number of 1970-01-01
pub const UNIX_EPOCH: i64 = 2_440_588;

/// Length of the Jalaali leap-year grand cycle, in years
pub const GRAND_CYCLE_YEARS: i64 = 2820;
/// Length of the Jalaali leap-year grand cycle, in days
pub const GRAND_CYCLE_DAYS: i64 = 1_029_983;

/// Maximum valid month (Esfand / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin / January
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Gregorian month lengths (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Jalaali month lengths (index 0 is unused)
/// Esfand shows 29 days (common year default)
pub const JALAALI_DAYS_IN_MONTH: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Days before the first 30-day month (Mehr)
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// Jalaali month names, Farvardin first
pub const JALAALI_MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Gregorian date component separator (ISO 8601 format)
pub const GREGORIAN_SEPARATOR: char = '-';
/// Jalaali date component separator
pub const JALAALI_SEPARATOR: char = '/';
