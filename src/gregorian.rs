use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_EPOCH,
    LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};
use crate::types::FixedDate;
use serde::{Deserialize, Serialize};

/// A date on the proleptic Gregorian calendar.
///
/// Fields are public and unchecked. Use [`GregorianDate::try_new`] to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GregorianDate {
    pub year:  i32,
    pub month: u8,
    pub day:   u8,
}

impl GregorianDate {
    /// Creates a new date, validating year, month, and day
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the year is before 1,
    /// `DateError::InvalidMonth` if the month is outside 1-12, and
    /// `DateError::InvalidDay` if the day does not exist in that month.
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if year < 1 {
            return Err(DateError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > gregorian_days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the fixed date of this day
    #[inline]
    pub fn to_fixed(self) -> FixedDate {
        fixed_from_gregorian(self)
    }
}

/// True if `year` is a leap year on the Gregorian calendar.
pub const fn gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in `month` of `year`. `month` must be in 1-12.
///
/// # Panics
/// Panics if `month` is 0 or greater than 12.
pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    assert!(month != 0 && month <= MAX_MONTH, "month must be in 1-12");

    if month == FEBRUARY && gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Fixed date equivalent to the Gregorian `date`.
///
/// The date must be valid and `year >= 1`. Nothing is checked. An invalid
/// month or day gives a well-defined but meaningless result.
pub fn fixed_from_gregorian(date: GregorianDate) -> FixedDate {
    let prior_years = i64::from(date.year) - 1;
    let month = i64::from(date.month);

    // Correct for 28- or 29-day February
    let february = if date.month <= FEBRUARY {
        0
    } else if gregorian_leap_year(date.year) {
        -1
    } else {
        -2
    };

    FixedDate::new(
        GREGORIAN_EPOCH - 1 // days before start of calendar
            + 365 * prior_years
            + prior_years.div_euclid(4) // Julian leap days...
            - prior_years.div_euclid(100) // ...minus century years...
            + prior_years.div_euclid(400) // ...plus years divisible by 400
            + (367 * month - 362).div_euclid(12) // prior months, assuming 30-day February
            + february
            + i64::from(date.day),
    )
}
