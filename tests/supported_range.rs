use persian_calendar_fast::{
    FixedDate, GregorianDate, PersianDate, SUPPORTED_FIRST_YEAR, SUPPORTED_LAST_YEAR,
    fixed_from_gregorian, fixed_from_persian_fast, gregorian_days_in_month,
    is_non_leap_correction, persian_days_in_month, persian_fast_from_fixed,
    persian_fast_leap_year, persian_from_gregorian,
};

fn new_year(year: i32) -> FixedDate {
    fixed_from_persian_fast(PersianDate { year, month: 1, day: 1 })
}

#[test]
fn every_persian_date_round_trips() {
    for year in SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR {
        for month in 1..=12 {
            for day in 1..=persian_days_in_month(year, month) {
                let date = PersianDate { year, month, day };
                let fixed = fixed_from_persian_fast(date);
                assert_eq!(persian_fast_from_fixed(fixed), date, "round trip of {date:?}");
            }
        }
    }
}

#[test]
fn every_fixed_date_round_trips() {
    let start = new_year(SUPPORTED_FIRST_YEAR);
    let end = new_year(SUPPORTED_LAST_YEAR + 1);

    for day in start.get()..end.get() {
        let fixed = FixedDate::new(day);
        let date = persian_fast_from_fixed(fixed);
        assert_eq!(fixed_from_persian_fast(date), fixed, "round trip of fixed {day}");
        assert!((1..=12).contains(&date.month), "month of {date:?}");
        assert!(date.day >= 1 && date.day <= persian_days_in_month(date.year, date.month), "day of {date:?}");
    }
}

#[test]
fn consecutive_fixed_dates_are_strictly_increasing() {
    let start = new_year(SUPPORTED_FIRST_YEAR);
    let end = new_year(SUPPORTED_LAST_YEAR + 1);

    let mut previous = persian_fast_from_fixed(start);
    assert_eq!(previous, PersianDate { year: SUPPORTED_FIRST_YEAR, month: 1, day: 1 });

    for day in start.get() + 1..end.get() {
        let current = persian_fast_from_fixed(FixedDate::new(day));
        assert!(previous < current, "{previous:?} should precede {current:?}");
        previous = current;
    }
    assert_eq!(previous.year, SUPPORTED_LAST_YEAR);
    assert_eq!(previous.month, 12);
}

#[test]
fn leap_day_exists_only_in_leap_years() {
    for year in SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR {
        let is_leap = persian_fast_leap_year(year);
        assert_eq!(PersianDate::try_new(year, 12, 30).is_ok(), is_leap, "Esfand 30 of {year}");
        assert_eq!(new_year(year + 1) - new_year(year), if is_leap { 366 } else { 365 }, "length of {year}");
    }
}

#[test]
fn every_correction_year_moves_its_leap_day_forward() {
    let corrected: Vec<i32> = (SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR)
        .filter(|&year| is_non_leap_correction(year))
        .collect();
    assert_eq!(corrected.len(), 78);

    for year in corrected {
        assert!(!persian_fast_leap_year(year), "{year} should be common");
        assert!(persian_fast_leap_year(year + 1), "{} should be leap", year + 1);

        // The day after Esfand 29 of a correction year starts the next year
        let esfand_29 = fixed_from_persian_fast(PersianDate { year, month: 12, day: 29 });
        assert_eq!(
            persian_fast_from_fixed(esfand_29 + 1),
            PersianDate { year: year + 1, month: 1, day: 1 }
        );
    }
}

#[test]
fn gregorian_days_map_to_consecutive_persian_days() {
    let mut previous: Option<PersianDate> = None;

    for year in 1800..=2200 {
        for month in 1..=12 {
            for day in 1..=gregorian_days_in_month(year, month) {
                let gregorian = GregorianDate { year, month, day };
                let persian = persian_from_gregorian(gregorian);
                assert_eq!(
                    fixed_from_persian_fast(persian),
                    fixed_from_gregorian(gregorian),
                    "{gregorian:?}"
                );
                if let Some(prev) = previous {
                    assert!(prev < persian, "{prev:?} should precede {persian:?}");
                }
                previous = Some(persian);
            }
        }
    }
}

#[test]
fn nowruz_matches_known_gregorian_dates() {
    let cases = [
        (1300, (1921, 3, 21)),
        (1354, (1975, 3, 21)),
        (1399, (2020, 3, 20)),
        (1403, (2024, 3, 20)),
        (1404, (2025, 3, 21)),
    ];

    for (persian_year, (year, month, day)) in cases {
        assert_eq!(
            new_year(persian_year),
            fixed_from_gregorian(GregorianDate { year, month, day }),
            "Nowruz {persian_year}"
        );
    }
}
