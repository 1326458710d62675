/// First Persian year (inclusive) for which the leap-year corrections are tabulated
pub const SUPPORTED_FIRST_YEAR: i32 = 1178;
/// Last Persian year (inclusive) for which the leap-year corrections are tabulated
pub const SUPPORTED_LAST_YEAR: i32 = 3000;

/// Fixed date of Gregorian 0001-01-01
pub const GREGORIAN_EPOCH: i64 = 1;
/// Fixed date of the Persian epoch (Calendrical Calculations, 4th ed.)
pub const PERSIAN_EPOCH: i64 = 226_896;

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by gregorian_leap_year check)
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Last Persian month with 31 days (Shahrivar)
pub const PERSIAN_LAST_LONG_MONTH: u8 = 6;
/// Persian month number for Esfand, the month that carries the leap day
pub const ESFAND: u8 = 12;
/// Days in Persian months 1-6
pub const PERSIAN_LONG_MONTH_DAYS: u8 = 31;
/// Days in Persian months 7-11, and in Esfand of a leap year
pub const PERSIAN_SHORT_MONTH_DAYS: u8 = 30;
/// Days in Esfand of a common year
pub const ESFAND_DAYS_COMMON: u8 = 29;

/// Length of the arithmetic leap cycle, in years
pub(crate) const PERSIAN_CYCLE_YEARS: i32 = 33;
/// Leap years per 33-year cycle
pub(crate) const PERSIAN_CYCLE_LEAPS: i32 = 8;
/// Days per 33-year cycle (33 * 365 + 8)
pub(crate) const PERSIAN_CYCLE_DAYS: i64 = 12_053;
/// Day of year on which the first 30-day month (Mehr) starts, minus one
pub(crate) const PERSIAN_LONG_MONTHS_DAYS: i64 = 186;
