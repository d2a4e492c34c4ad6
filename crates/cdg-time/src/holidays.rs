//! Brazilian national holidays.
//!
//! Twelve holidays per year: eight on fixed dates and four placed relative
//! to Easter Sunday.  The set is recomputed on every call; nothing is
//! cached between years or between calls.

use cdg_core::errors::Result;
use serde::{Deserialize, Serialize};

use crate::date::{check_year, Date};

/// A national holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// Jan 1.
    NewYear,
    /// Easter − 47.
    CarnivalTuesday,
    /// Easter − 46.
    AshWednesday,
    /// Easter − 2.
    GoodFriday,
    /// Apr 21.
    Tiradentes,
    /// May 1.
    LabourDay,
    /// Easter + 60.
    CorpusChristi,
    /// Sep 7.
    IndependenceDay,
    /// Oct 12.
    OurLadyOfAparecida,
    /// Nov 2.
    AllSoulsDay,
    /// Nov 15.
    RepublicDay,
    /// Dec 25.
    Christmas,
}

impl Holiday {
    /// Official Portuguese name.
    pub fn name_pt(&self) -> &'static str {
        match self {
            Holiday::NewYear => "Confraternização Universal",
            Holiday::CarnivalTuesday => "Carnaval",
            Holiday::AshWednesday => "Quarta-feira de Cinzas",
            Holiday::GoodFriday => "Sexta-feira Santa",
            Holiday::Tiradentes => "Tiradentes",
            Holiday::LabourDay => "Dia do Trabalho",
            Holiday::CorpusChristi => "Corpus Christi",
            Holiday::IndependenceDay => "Independência do Brasil",
            Holiday::OurLadyOfAparecida => "Nossa Senhora Aparecida",
            Holiday::AllSoulsDay => "Finados",
            Holiday::RepublicDay => "Proclamação da República",
            Holiday::Christmas => "Natal",
        }
    }

    /// Return `true` if the date depends on Easter.
    pub fn is_movable(&self) -> bool {
        matches!(
            self,
            Holiday::CarnivalTuesday
                | Holiday::AshWednesday
                | Holiday::GoodFriday
                | Holiday::CorpusChristi
        )
    }
}

/// Fixed-date holidays as `(month, day)`.
const FIXED: [(u8, u8, Holiday); 8] = [
    (1, 1, Holiday::NewYear),
    (4, 21, Holiday::Tiradentes),
    (5, 1, Holiday::LabourDay),
    (9, 7, Holiday::IndependenceDay),
    (10, 12, Holiday::OurLadyOfAparecida),
    (11, 2, Holiday::AllSoulsDay),
    (11, 15, Holiday::RepublicDay),
    (12, 25, Holiday::Christmas),
];

/// Movable holidays as an offset in days from Easter Sunday.
const MOVABLE: [(i32, Holiday); 4] = [
    (-47, Holiday::CarnivalTuesday),
    (-46, Holiday::AshWednesday),
    (-2, Holiday::GoodFriday),
    (60, Holiday::CorpusChristi),
];

/// Easter Sunday as `(month, day)`, by the anonymous Gregorian algorithm
/// (Meeus/Jones/Butcher).
pub fn easter_month_day(year: u16) -> (u8, u8) {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    (month as u8, day as u8)
}

/// Easter Sunday of `year`.
///
/// # Errors
/// Returns an error if `year` is outside the supported date range.
pub fn easter_sunday(year: u16) -> Result<Date> {
    check_year(year)?;
    Ok(easter_unchecked(year))
}

fn easter_unchecked(year: u16) -> Date {
    let (m, d) = easter_month_day(year);
    Date::from_ymd_unchecked(year, m, d)
}

/// The national holidays of one year.
///
/// Always holds twelve entries.  Two of them can fall on the same day (Good
/// Friday coincides with Tiradentes when Easter is April 23), so lookups go
/// through [`HolidaySet::holiday_on`], which reports the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: u16,
    entries: Vec<(Date, Holiday)>,
}

impl HolidaySet {
    /// Compute the holidays of `year`.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported date range.
    pub fn for_year(year: u16) -> Result<Self> {
        check_year(year)?;
        Ok(Self::for_year_unchecked(year))
    }

    /// Holidays of the year `date` falls in.
    pub fn for_date(date: Date) -> Self {
        Self::for_year_unchecked(date.year())
    }

    fn for_year_unchecked(year: u16) -> Self {
        let easter = easter_unchecked(year);
        let mut entries: Vec<(Date, Holiday)> = FIXED
            .iter()
            .map(|&(m, d, h)| (Date::from_ymd_unchecked(year, m, d), h))
            .collect();
        // Easter − 47 is no earlier than Feb 3 and Easter + 60 no later than
        // Jun 24, so the offsets stay inside the year.
        entries.extend(MOVABLE.iter().map(|&(off, h)| (easter + off, h)));
        Self { year, entries }
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Number of entries (always twelve).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return `true` if `date` is one of the holidays.
    pub fn contains(&self, date: Date) -> bool {
        self.holiday_on(date).is_some()
    }

    /// The holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: Date) -> Option<Holiday> {
        self.entries
            .iter()
            .find(|(d, _)| *d == date)
            .map(|&(_, h)| h)
    }

    /// The entry for a given holiday kind.
    pub fn date_of(&self, holiday: Holiday) -> Date {
        self.entries
            .iter()
            .find(|(_, h)| *h == holiday)
            .map(|&(d, _)| d)
            .expect("every holiday kind has an entry")
    }

    /// Iterate over `(date, holiday)` in declaration order (fixed first).
    pub fn iter(&self) -> impl Iterator<Item = (Date, Holiday)> + '_ {
        self.entries.iter().copied()
    }
}

/// The national holidays of `year`.
pub fn national_holidays(year: u16) -> Result<HolidaySet> {
    HolidaySet::for_year(year)
}

/// Return the holiday falling on `date`, if any.
pub fn national_holiday_on(date: Date) -> Option<Holiday> {
    HolidaySet::for_date(date).holiday_on(date)
}

/// Return `true` if `date` is a national holiday.
pub fn is_national_holiday(date: Date) -> bool {
    national_holiday_on(date).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_reference_dates() {
        assert_eq!(easter_sunday(2023).unwrap(), date(2023, 4, 9));
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026).unwrap(), date(2026, 4, 5));
    }

    #[test]
    fn easter_out_of_range_year() {
        assert!(easter_sunday(1899).is_err());
        assert!(HolidaySet::for_year(2200).is_err());
    }

    #[test]
    fn movable_holidays_2025() {
        let set = national_holidays(2025).unwrap();
        assert_eq!(set.date_of(Holiday::CarnivalTuesday), date(2025, 3, 4));
        assert_eq!(set.date_of(Holiday::AshWednesday), date(2025, 3, 5));
        assert_eq!(set.date_of(Holiday::GoodFriday), date(2025, 4, 18));
        assert_eq!(set.date_of(Holiday::CorpusChristi), date(2025, 6, 19));
    }

    #[test]
    fn good_friday_on_tiradentes_keeps_twelve_entries() {
        // Easter 2000 fell on April 23.
        let set = national_holidays(2000).unwrap();
        assert_eq!(set.len(), 12);
        assert_eq!(set.date_of(Holiday::GoodFriday), date(2000, 4, 21));
        assert_eq!(set.holiday_on(date(2000, 4, 21)), Some(Holiday::Tiradentes));
    }

    #[test]
    fn lookup_ignores_other_years() {
        assert!(is_national_holiday(date(2026, 1, 1)));
        assert_eq!(national_holiday_on(date(2024, 12, 25)), Some(Holiday::Christmas));
        assert!(!is_national_holiday(date(2024, 12, 24)));
    }

    #[test]
    fn movable_flag() {
        let movable = HolidaySet::for_date(date(2024, 1, 1))
            .iter()
            .filter(|(_, h)| h.is_movable())
            .count();
        assert_eq!(movable, 4);
    }
}
