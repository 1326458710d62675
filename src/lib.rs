//! Closed-form conversion between the proleptic Gregorian calendar and the
//! Persian (Solar Hijri) calendar.
//!
//! Both calendars map to and from a [`FixedDate`], a day count where day 1 is
//! Gregorian 0001-01-01. Persian leap years come from the 33-year arithmetic
//! cycle plus a compile-time table of corrections. Every conversion runs in
//! constant time without search.
//!
//! # Supported range
//!
//! Persian results are exact only for years
//! [`SUPPORTED_FIRST_YEAR`]`..=`[`SUPPORTED_LAST_YEAR`] (1178-3000). Outside
//! that range nothing fails. The functions fall back to the uncorrected
//! 33-year cycle, which can disagree with the astronomical calendar by one
//! day around leap years.
//!
//! ```
//! use persian_calendar_fast::{GregorianDate, PersianDate, persian_from_gregorian};
//!
//! let nowruz = persian_from_gregorian(GregorianDate { year: 2024, month: 3, day: 20 });
//! assert_eq!(nowruz, PersianDate { year: 1403, month: 1, day: 1 });
//! ```

mod consts;
mod correction;
mod gregorian;
mod persian;
mod prelude;
mod types;

pub use consts::{GREGORIAN_EPOCH, PERSIAN_EPOCH, SUPPORTED_FIRST_YEAR, SUPPORTED_LAST_YEAR};
pub use correction::{is_non_leap_correction, is_supported_year};
pub use gregorian::{GregorianDate, fixed_from_gregorian, gregorian_days_in_month, gregorian_leap_year};
pub use persian::{
    PersianDate, fixed_from_persian_fast, persian_days_in_month, persian_fast_from_fixed,
    persian_fast_leap_year,
};
pub use types::FixedDate;

use crate::prelude::*;

/// A date on either supported calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub enum CalendarDate {
    /// Proleptic Gregorian date
    Gregorian(GregorianDate),
    /// Persian (Solar Hijri) date
    Persian(PersianDate),
}

/// Error type for checked date construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the calendar's domain.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Month outside 1-12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day does not exist in the given month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl CalendarDate {
    /// Returns the fixed date of this day
    pub fn to_fixed(self) -> FixedDate {
        match self {
            Self::Gregorian(date) => fixed_from_gregorian(date),
            Self::Persian(date) => fixed_from_persian_fast(date),
        }
    }

    /// Returns the same day on the Persian calendar
    pub fn to_persian(self) -> PersianDate {
        match self {
            Self::Persian(date) => date,
            Self::Gregorian(date) => persian_from_gregorian(date),
        }
    }
}

impl From<GregorianDate> for FixedDate {
    fn from(date: GregorianDate) -> Self {
        fixed_from_gregorian(date)
    }
}

impl From<PersianDate> for FixedDate {
    fn from(date: PersianDate) -> Self {
        fixed_from_persian_fast(date)
    }
}

impl From<CalendarDate> for FixedDate {
    fn from(date: CalendarDate) -> Self {
        date.to_fixed()
    }
}

/// Persian date of the same day as the Gregorian `date`.
///
/// The Gregorian date must be valid. The Persian result is exact for years
/// `SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR`.
pub fn persian_from_gregorian(date: GregorianDate) -> PersianDate {
    persian_fast_from_fixed(fixed_from_gregorian(date))
}
