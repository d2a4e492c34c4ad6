//! `Calendar` trait and the weekends-only calendar.
//!
//! A calendar knows which days are holidays; a business day is any day that
//! is neither a weekend nor a holiday.

use cdg_core::errors::Result;

use crate::date::Date;
use crate::weekday::Weekday;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Brazil (National)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday in this calendar.  Weekends are
    /// not holidays unless a holiday happens to fall on one.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// First business day on or after `date`.
    fn adjust_following(&self, mut date: Date) -> Result<Date> {
        while !self.is_business_day(date) {
            date = date.add_days(1)?;
        }
        Ok(date)
    }

    /// Advance `date` by `n` business days.  `date` itself is never counted.
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start + 1;
        while d <= end {
            if self.is_business_day(d) {
                count += 1;
            }
            if d == end {
                break;
            }
            d += 1;
        }
        sign * count
    }

    /// Business days on or after `start`, in ascending order.  The iterator
    /// ends at the last supported date.
    fn business_days_from(&self, start: Date) -> BusinessDays<'_, Self>
    where
        Self: Sized,
    {
        BusinessDays {
            calendar: self,
            next: Some(start),
        }
    }
}

/// Iterator over the business days of a calendar.
///
/// Returned by [`Calendar::business_days_from`].
#[derive(Debug)]
pub struct BusinessDays<'a, C: Calendar> {
    calendar: &'a C,
    next: Option<Date>,
}

impl<C: Calendar> Iterator for BusinessDays<'_, C> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        loop {
            let current = self.next?;
            self.next = current.add_days(1).ok();
            if self.calendar.is_business_day(current) {
                return Some(current);
            }
        }
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        let sat = date(2023, 9, 2);
        assert!(!cal.is_business_day(sat));
        assert!(cal.is_weekend(sat));
        assert!(!cal.is_holiday(sat));
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn adjust_following() {
        let cal = WeekendsOnly;
        // Saturday → Monday
        assert_eq!(cal.adjust_following(date(2023, 9, 2)).unwrap(), date(2023, 9, 4));
        // Already a business day
        assert_eq!(cal.adjust_following(date(2023, 9, 5)).unwrap(), date(2023, 9, 5));
    }

    #[test]
    fn advance_skips_start_day() {
        let cal = WeekendsOnly;
        // Friday + 1 business day = Monday
        assert_eq!(
            cal.advance_business_days(date(2023, 9, 1), 1).unwrap(),
            date(2023, 9, 4)
        );
        assert_eq!(
            cal.advance_business_days(date(2023, 9, 4), -1).unwrap(),
            date(2023, 9, 1)
        );
        assert_eq!(cal.advance_business_days(date(2023, 9, 2), 0).unwrap(), date(2023, 9, 2));
    }

    #[test]
    fn advance_past_range_is_error() {
        assert!(WeekendsOnly.advance_business_days(Date::MAX - 3, 10).is_err());
    }

    #[test]
    fn business_days_between() {
        let cal = WeekendsOnly;
        let d1 = date(2023, 9, 4); // Monday
        let d2 = date(2023, 9, 8); // Friday
        // Tue, Wed, Thu, Fri = 4 business days (d1 exclusive)
        assert_eq!(cal.business_days_between(d1, d2), 4);
        assert_eq!(cal.business_days_between(d2, d1), -4);
    }

    #[test]
    fn business_days_iterator() {
        let days: Vec<Date> = WeekendsOnly.business_days_from(date(2023, 9, 1)).take(3).collect();
        assert_eq!(days, vec![date(2023, 9, 1), date(2023, 9, 4), date(2023, 9, 5)]);
    }

    #[test]
    fn business_days_iterator_ends_at_max() {
        // 2199-12-31 is a Tuesday.
        let tail: Vec<Date> = WeekendsOnly.business_days_from(Date::MAX - 1).collect();
        assert_eq!(tail, vec![Date::MAX - 1, Date::MAX]);
    }
}
