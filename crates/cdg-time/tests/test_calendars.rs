//! Holiday and business-day checks for the Brazil calendar.
//!
//! Reference holiday lists were derived from the published Easter tables
//! and the fixed national holidays.

use std::collections::HashSet;

use cdg_time::calendar::Calendar;
use cdg_time::holidays::{easter_sunday, national_holidays, Holiday};
use cdg_time::{is_weekend, Brazil, Date, WeekendsOnly};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect all non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_holiday(d) && !cal.is_weekend(d) {
            holidays.push(d);
        }
        d += 1;
    }
    holidays
}

/// Assert that every date in `expected` is a holiday, and every holiday in the
/// range is in `expected`.
fn check_holidays(cal: &dyn Calendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = holiday_list(cal, from, to);
    let calc_set: HashSet<_> = calculated.iter().copied().collect();
    let exp_set: HashSet<_> = expected.iter().copied().collect();

    for &d in &calculated {
        assert!(
            exp_set.contains(&d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for &d in expected {
        assert!(
            calc_set.contains(&d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── Easter ───────────────────────────────────────────────────────────────────

#[test]
fn test_easter_reference_table() {
    let table = [
        (1943, 4, 25),
        (1961, 4, 2),
        (2000, 4, 23),
        (2008, 3, 23),
        (2011, 4, 24),
        (2016, 3, 27),
        (2019, 4, 21),
        (2020, 4, 12),
        (2021, 4, 4),
        (2022, 4, 17),
        (2023, 4, 9),
        (2024, 3, 31),
        (2025, 4, 20),
        (2026, 4, 5),
        (2027, 3, 28),
        (2028, 4, 16),
        (2029, 4, 1),
        (2030, 4, 21),
        (2038, 4, 25),
    ];
    for (y, m, d) in table {
        let easter = easter_sunday(y).unwrap();
        assert_eq!(easter, date(y, m, d), "Easter {y}");
        assert_eq!(easter.weekday().to_string(), "Sunday");
    }
}

// ─── Brazil holidays ──────────────────────────────────────────────────────────

#[test]
fn test_brazil_holidays_2024_2026() {
    let expected: Vec<Date> = vec![
        // 2024
        date(2024, 1, 1),
        date(2024, 2, 13),
        date(2024, 2, 14),
        date(2024, 3, 29),
        date(2024, 5, 1),
        date(2024, 5, 30),
        date(2024, 11, 15),
        date(2024, 12, 25),
        // 2025
        date(2025, 1, 1),
        date(2025, 3, 4),
        date(2025, 3, 5),
        date(2025, 4, 18),
        date(2025, 4, 21),
        date(2025, 5, 1),
        date(2025, 6, 19),
        date(2025, 12, 25),
        // 2026
        date(2026, 1, 1),
        date(2026, 2, 17),
        date(2026, 2, 18),
        date(2026, 4, 3),
        date(2026, 4, 21),
        date(2026, 5, 1),
        date(2026, 6, 4),
        date(2026, 9, 7),
        date(2026, 10, 12),
        date(2026, 11, 2),
        date(2026, 12, 25),
    ];
    check_holidays(&Brazil, date(2024, 1, 1), date(2026, 12, 31), &expected);
}

#[test]
fn test_twelve_entries_every_year() {
    for year in 1900..=2199u16 {
        let set = national_holidays(year).unwrap();
        assert_eq!(set.len(), 12, "year {year}");
        assert_eq!(set.year(), year);
        for (d, _) in set.iter() {
            assert_eq!(d.year(), year, "{d} escaped year {year}");
        }
    }
}

#[test]
fn test_fixed_holidays_keep_month_and_day() {
    let fixed = [
        (1, 1, Holiday::NewYear),
        (4, 21, Holiday::Tiradentes),
        (5, 1, Holiday::LabourDay),
        (9, 7, Holiday::IndependenceDay),
        (10, 12, Holiday::OurLadyOfAparecida),
        (11, 2, Holiday::AllSoulsDay),
        (11, 15, Holiday::RepublicDay),
        (12, 25, Holiday::Christmas),
    ];
    for year in [1900u16, 2000, 2023, 2024, 2100, 2199] {
        let set = national_holidays(year).unwrap();
        for (m, d, h) in fixed {
            assert_eq!(set.date_of(h), date(year, m, d), "{h:?} in {year}");
            assert!(!h.is_movable());
        }
    }
}

#[test]
fn test_movable_offsets_from_easter() {
    for year in [2000u16, 2004, 2024, 2025, 2100] {
        let easter = easter_sunday(year).unwrap();
        let set = national_holidays(year).unwrap();
        assert_eq!(set.date_of(Holiday::CarnivalTuesday), easter - 47);
        assert_eq!(set.date_of(Holiday::AshWednesday), easter - 46);
        assert_eq!(set.date_of(Holiday::GoodFriday), easter - 2);
        assert_eq!(set.date_of(Holiday::CorpusChristi), easter + 60);
    }
}

#[test]
fn test_leap_year_movable_dates() {
    // Easter 2024 is March 31; the walk back to Carnival crosses Feb 29.
    let set = national_holidays(2024).unwrap();
    assert_eq!(set.date_of(Holiday::CarnivalTuesday), date(2024, 2, 13));
    assert_eq!(set.date_of(Holiday::CorpusChristi), date(2024, 5, 30));
}

// ─── Weekends ─────────────────────────────────────────────────────────────────

#[test]
fn test_weekends_over_a_full_year() {
    // 2024-01-06 is a Saturday; walk every day of 2024.
    let first_saturday = date(2024, 1, 6);
    let mut d = date(2024, 1, 1);
    while d <= date(2024, 12, 31) {
        let offset = (d - first_saturday).rem_euclid(7);
        let expected = offset == 0 || offset == 1;
        assert_eq!(is_weekend(d), expected, "{d}");
        assert_eq!(Brazil.is_weekend(d), expected, "{d}");
        assert_eq!(WeekendsOnly.is_weekend(d), expected, "{d}");
        d += 1;
    }
}

#[test]
fn test_business_days_between_holidays() {
    // Week of Carnival 2025: Mon 3 Mar … Fri 7 Mar, Tue and Wed are holidays.
    assert_eq!(Brazil.business_days_between(date(2025, 3, 2), date(2025, 3, 7)), 3);
    assert_eq!(
        WeekendsOnly.business_days_between(date(2025, 3, 2), date(2025, 3, 7)),
        5
    );
}
