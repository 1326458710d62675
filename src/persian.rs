//! Persian (Solar Hijri) calendar arithmetic.
//!
//! Leap years follow the 33-year arithmetic cycle, overridden by the
//! correction table in [`crate::correction`]. The results match the
//! astronomical calendar only for years `SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR`.
//! Outside that range every function still returns a value, but it follows
//! the plain 33-year cycle and may be off by a day around leap years.

use crate::DateError;
use crate::consts::{
    ESFAND, ESFAND_DAYS_COMMON, MAX_MONTH, MIN_DAY, PERSIAN_CYCLE_DAYS, PERSIAN_CYCLE_LEAPS,
    PERSIAN_CYCLE_YEARS, PERSIAN_EPOCH, PERSIAN_LAST_LONG_MONTH, PERSIAN_LONG_MONTH_DAYS,
    PERSIAN_LONG_MONTHS_DAYS, PERSIAN_SHORT_MONTH_DAYS,
};
use crate::correction::{is_non_leap_correction, is_supported_year};
use crate::types::FixedDate;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Earliest fixed date whose Persian year fits in `i32` (Farvardin 1 of `i32::MIN`)
pub(crate) const MIN_FIXED: i64 = cycle_new_year(i32::MIN as i64);
/// Latest fixed date whose Persian year fits in `i32` (last day of `i32::MAX`)
pub(crate) const MAX_FIXED: i64 = cycle_new_year(i32::MAX as i64 + 1) - 1;

/// Farvardin 1 of year 1
const EPOCH_DATE: PersianDate = PersianDate {
    year:  1,
    month: 1,
    day:   1,
};

/// A date on the Persian calendar.
///
/// Fields are public and unchecked. Use [`PersianDate::try_new`] to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersianDate {
    pub year:  i32,
    pub month: u8,
    pub day:   u8,
}

impl PersianDate {
    /// Creates a new date, validating month and day against the month-length rule
    ///
    /// Any year is accepted. Years outside the supported range are logged at
    /// debug level because their leap status is uncorrected.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is outside 1-12, and
    /// `DateError::InvalidDay` if the day does not exist in that month.
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > persian_days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        if !is_supported_year(year) {
            debug!("persian year {year} is outside the corrected range; using the 33-year cycle");
        }
        Ok(Self { year, month, day })
    }

    /// Returns the fixed date of this day
    #[inline]
    pub fn to_fixed(self) -> FixedDate {
        fixed_from_persian_fast(self)
    }

    /// True if this date's year has 366 days
    #[inline]
    pub fn is_leap_year(self) -> bool {
        persian_fast_leap_year(self.year)
    }

    /// One-based ordinal of this day within its year
    pub fn day_of_year(self) -> u16 {
        let start = fixed_from_persian_fast(Self { month: 1, day: 1, ..self });
        to_u16(fixed_from_persian_fast(self) - start + 1)
    }
}

impl From<FixedDate> for PersianDate {
    fn from(date: FixedDate) -> Self {
        persian_fast_from_fixed(date)
    }
}

/// Days in `month` of Persian `year`. `month` must be in 1-12.
///
/// # Panics
/// Debug builds panic if `month` is outside 1-12.
pub fn persian_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month <= PERSIAN_LAST_LONG_MONTH {
        PERSIAN_LONG_MONTH_DAYS
    } else if month < ESFAND || persian_fast_leap_year(year) {
        PERSIAN_SHORT_MONTH_DAYS
    } else {
        ESFAND_DAYS_COMMON
    }
}

/// True if Persian `year` has 366 days.
///
/// A tabulated correction year is never leap, and the year after one always
/// is. Every other year follows the 33-year cycle.
pub fn persian_fast_leap_year(year: i32) -> bool {
    if is_non_leap_correction(year) {
        false
    } else if prior_year_corrected(year) {
        true
    } else {
        (25 * i64::from(year) + 11).rem_euclid(i64::from(PERSIAN_CYCLE_YEARS))
            < i64::from(PERSIAN_CYCLE_LEAPS)
    }
}

/// True if the year before `year` is a correction year. `i32::MIN` has no prior year.
fn prior_year_corrected(year: i32) -> bool {
    year.checked_sub(1).is_some_and(is_non_leap_correction)
}

/// Fixed date of Farvardin 1 of `year` under the plain 33-year cycle.
#[allow(clippy::cast_lossless)]
const fn cycle_new_year(year: i64) -> i64 {
    PERSIAN_EPOCH - 1
        + 365 * (year - 1)
        + (PERSIAN_CYCLE_LEAPS as i64 * year + 21).div_euclid(PERSIAN_CYCLE_YEARS as i64)
}

/// Fixed date of Farvardin 1 of `year`.
fn new_year(year: i32) -> i64 {
    let fixed = cycle_new_year(i64::from(year));
    // previous year lost its leap day to this one
    if prior_year_corrected(year) { fixed - 1 } else { fixed }
}

/// Fixed date equivalent to the Persian `date`.
///
/// Exact for years `SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR`. Other years
/// use the uncorrected 33-year cycle.
pub fn fixed_from_persian_fast(date: PersianDate) -> FixedDate {
    let month = i64::from(date.month);
    let long_months = i64::from(PERSIAN_LAST_LONG_MONTH);

    // Days in prior months this year; Mehr and later follow six 31-day months
    let prior_months = if month <= long_months + 1 {
        31 * (month - 1)
    } else {
        30 * (month - 1) + long_months
    };

    FixedDate::new(new_year(date.year) - 1 + prior_months + i64::from(date.day))
}

/// Persian date equivalent to the fixed `date`.
///
/// The year is estimated in closed form from the 33-year cycle and corrected
/// at most once, so no search is involved. Exact for years
/// `SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR`.
///
/// Fixed dates beyond the Persian years representable as `i32` saturate to
/// Farvardin 1 of `i32::MIN` or the last day of `i32::MAX`.
pub fn persian_fast_from_fixed(date: FixedDate) -> PersianDate {
    let clamped = date.get().clamp(MIN_FIXED, MAX_FIXED);
    if clamped != date.get() {
        debug!("fixed date {date} is outside the representable Persian years; saturating");
    }
    let date = FixedDate::new(clamped);

    let days_since_epoch = date - fixed_from_persian_fast(EPOCH_DATE);
    let estimate =
        1 + (i64::from(PERSIAN_CYCLE_YEARS) * days_since_epoch + 3).div_euclid(PERSIAN_CYCLE_DAYS);
    let mut year = to_year(estimate);

    let start_of_year = PersianDate { year, month: 1, day: 1 };
    let mut day_of_year = date - fixed_from_persian_fast(start_of_year) + 1;
    debug_assert!((1..=366).contains(&day_of_year));

    // Estimate landed on day 366 of a year the table says is common
    if day_of_year == 366 && is_non_leap_correction(year) {
        trace!("fixed date {date} falls on Farvardin 1 of {}", year + 1);
        year += 1;
        day_of_year = 1;
    }

    let month = if day_of_year <= PERSIAN_LONG_MONTHS_DAYS {
        div_ceil(day_of_year, i64::from(PERSIAN_LONG_MONTH_DAYS))
    } else {
        div_ceil(
            day_of_year - i64::from(PERSIAN_LAST_LONG_MONTH),
            i64::from(PERSIAN_SHORT_MONTH_DAYS),
        )
    };

    let mut result = PersianDate {
        year,
        month: to_u8(month),
        day: MIN_DAY,
    };
    result.day = to_u8(date - fixed_from_persian_fast(result) + 1);
    result
}

/// Ceiling of `a / b` for positive `b`, in integer arithmetic.
const fn div_ceil(a: i64, b: i64) -> i64 {
    (a + b - 1).div_euclid(b)
}

// Month, day and day-of-year are bounded by the calendar arithmetic above.

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn to_u8(value: i64) -> u8 {
    value as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn to_u16(value: i64) -> u16 {
    value as u16
}

// Only reached with dates clamped to MIN_FIXED..=MAX_FIXED
fn to_year(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
