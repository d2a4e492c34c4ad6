//! Brazil national calendar.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holidays::{national_holiday_on, Holiday};

/// Brazil calendar with the national holidays.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Carnival (Easter − 47)
/// * Ash Wednesday (Easter − 46)
/// * Good Friday (Easter − 2)
/// * Tiradentes Day (Apr 21)
/// * Labour Day (May 1)
/// * Corpus Christi (Easter + 60)
/// * Independence Day (Sep 7)
/// * Our Lady of Aparecida (Oct 12)
/// * All Souls' Day (Nov 2)
/// * Republic Day (Nov 15)
/// * Christmas (Dec 25)
///
/// The holidays of each year are computed when a date of that year is
/// looked up, so walks across Jan 1 pick up the next year's set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brazil;

impl Brazil {
    /// The holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: Date) -> Option<Holiday> {
        national_holiday_on(date)
    }
}

impl Calendar for Brazil {
    fn name(&self) -> &str {
        "Brazil (National)"
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_on(date).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_day() {
        assert!(Brazil.is_holiday(date(2026, 1, 1)));
        assert!(!Brazil.is_business_day(date(2026, 1, 1)));
    }

    #[test]
    fn carnival_2023() {
        // Easter 2023: April 9 → Easter − 47 = Feb 21, Easter − 46 = Feb 22
        assert_eq!(Brazil.holiday_on(date(2023, 2, 21)), Some(Holiday::CarnivalTuesday));
        assert_eq!(Brazil.holiday_on(date(2023, 2, 22)), Some(Holiday::AshWednesday));
        assert!(!Brazil.is_holiday(date(2023, 2, 20)));
    }

    #[test]
    fn good_friday_2023() {
        assert_eq!(Brazil.holiday_on(date(2023, 4, 7)), Some(Holiday::GoodFriday));
    }

    #[test]
    fn weekend_is_not_a_holiday() {
        // 2023-06-17 is a Saturday
        let sat = date(2023, 6, 17);
        assert!(!Brazil.is_holiday(sat));
        assert!(Brazil.is_weekend(sat));
        assert!(!Brazil.is_business_day(sat));
    }

    #[test]
    fn normal_business_day() {
        // 2023-06-15 is a Thursday
        assert!(Brazil.is_business_day(date(2023, 6, 15)));
    }
}
