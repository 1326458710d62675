//! Tabulated corrections to the 33-year leap cycle.
//!
//! Each listed year is leap under the 33-year rule but is not leap
//! astronomically. The year after it is leap, although the rule says it is
//! not. The list matches the modified astronomical algorithm (52.5°E
//! meridian) from 1178 AP through 3000 AP.

use crate::consts::{SUPPORTED_FIRST_YEAR, SUPPORTED_LAST_YEAR};

/// Persian years whose cycle-predicted leap day moves to the following year.
const NON_LEAP_CORRECTION: [i32; 78] = [
    1502, 1601, 1634, 1667, //
    1700, 1733, 1766, 1799, //
    1832, 1865, 1898, 1931, //
    1964, 1997, 2030, 2059, 2063, //
    2096, 2129, 2158, 2162, 2191, //
    2195, 2224, 2228, 2257, 2261, //
    2290, 2294, 2323, 2327, 2356, //
    2360, 2389, 2393, 2422, 2426, //
    2455, 2459, 2488, 2492, 2521, //
    2525, 2554, 2558, 2587, 2591, //
    2620, 2624, 2653, 2657, 2686, //
    2690, 2719, 2723, 2748, 2752, //
    2756, 2781, 2785, 2789, 2818, //
    2822, 2847, 2851, 2855, 2880, //
    2884, 2888, 2913, 2917, 2921, //
    2946, 2950, 2954, 2979, 2983, 2987,
];

#[allow(clippy::cast_sign_loss)]
const SUPPORTED_YEARS: usize = (SUPPORTED_LAST_YEAR - SUPPORTED_FIRST_YEAR + 1) as usize;

/// Number of bytes in the packed table
pub(crate) const LOOKUP_LEN: usize = SUPPORTED_YEARS / 8 + 1;

/// Bit `offset % 8` of byte `offset / 8` is set when `SUPPORTED_FIRST_YEAR + offset`
/// is a correction year.
pub(crate) static NON_LEAP_LOOKUP: [u8; LOOKUP_LEN] = pack(&NON_LEAP_CORRECTION);

#[allow(clippy::cast_sign_loss)]
const fn pack(years: &[i32]) -> [u8; LOOKUP_LEN] {
    let mut packed = [0u8; LOOKUP_LEN];
    let mut i = 0;
    while i < years.len() {
        let year = years[i];
        if is_supported_year(year) {
            let offset = (year - SUPPORTED_FIRST_YEAR) as usize;
            packed[offset / 8] |= 1 << (offset % 8);
        }
        i += 1;
    }
    packed
}

/// Returns true if `year` lies in `SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR`.
#[inline]
pub const fn is_supported_year(year: i32) -> bool {
    year >= SUPPORTED_FIRST_YEAR && year <= SUPPORTED_LAST_YEAR
}

/// Returns true if the 33-year rule must be overridden to non-leap for `year`.
///
/// Years outside the supported range always report no correction. There the
/// plain 33-year cycle is assumed to be right, which is an approximation and
/// not an error.
#[allow(clippy::cast_sign_loss)]
pub fn is_non_leap_correction(year: i32) -> bool {
    if !is_supported_year(year) {
        return false;
    }
    let offset = (year - SUPPORTED_FIRST_YEAR) as usize;
    NON_LEAP_LOOKUP[offset / 8] & (1 << (offset % 8)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_len() {
        assert_eq!(LOOKUP_LEN, 228);
    }

    #[test]
    fn test_outside_range_is_never_corrected() {
        assert!(!is_non_leap_correction(SUPPORTED_FIRST_YEAR - 1));
        assert!(!is_non_leap_correction(SUPPORTED_LAST_YEAR + 1));
        assert!(!is_non_leap_correction(0));
        assert!(!is_non_leap_correction(-1));
        assert!(!is_non_leap_correction(i32::MIN));
        assert!(!is_non_leap_correction(i32::MAX));
    }

    #[test]
    fn test_known_correction_years() {
        for year in [1502, 1601, 2059, 2063, 2748, 2752, 2756, 2987] {
            assert!(is_non_leap_correction(year), "{year} should be corrected");
        }
        for year in [1178, 1403, 1501, 1503, 2060, 2988, 3000] {
            assert!(!is_non_leap_correction(year), "{year} should not be corrected");
        }
    }

    #[test]
    fn test_table_matches_year_list() {
        let flagged: Vec<i32> = (SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR)
            .filter(|&y| is_non_leap_correction(y))
            .collect();
        assert_eq!(flagged, NON_LEAP_CORRECTION.to_vec());
    }

    #[test]
    fn test_packed_bytes() {
        // 1502 - 1178 = 324 -> byte 40, bit 4
        assert_eq!(NON_LEAP_LOOKUP[40], 0x10);
        // 2059 and 2063 share byte 110 (bits 1 and 5)
        assert_eq!(NON_LEAP_LOOKUP[110], 0x22);
        assert_eq!(NON_LEAP_LOOKUP[0], 0x00);
        assert_eq!(NON_LEAP_LOOKUP[LOOKUP_LEN - 1], 0x00);
        assert_eq!(NON_LEAP_LOOKUP[LOOKUP_LEN - 3], 0x22);
    }

    #[test]
    fn test_is_supported_year() {
        assert!(is_supported_year(SUPPORTED_FIRST_YEAR));
        assert!(is_supported_year(SUPPORTED_LAST_YEAR));
        assert!(!is_supported_year(SUPPORTED_FIRST_YEAR - 1));
        assert!(!is_supported_year(SUPPORTED_LAST_YEAR + 1));
    }
}
