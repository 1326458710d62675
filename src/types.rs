use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// An absolute day count, with day 1 on Gregorian 0001-01-01.
///
/// Every conversion between calendars passes through this value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct FixedDate(i64);

impl FixedDate {
    /// Creates a fixed date from a raw day count
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the day count as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Add<i64> for FixedDate {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        Self(self.0 + days)
    }
}

impl Sub<i64> for FixedDate {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        Self(self.0 - days)
    }
}

/// Number of days from `rhs` to `self`
impl Sub for FixedDate {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}
