//! # cdg-time
//!
//! Date, calendar, national-holiday, and delivery-date types.
//!
//! The delivery rules never read the clock: every operation takes `today`
//! as an argument.  Use [`Date::todays_date`] at the edge to obtain it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Minimum delivery date, validation, and suggestions.
pub mod delivery;

/// Easter and the Brazilian national holidays.
pub mod holidays;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{BusinessDays, Calendar, WeekendsOnly};
pub use calendars::brazil::Brazil;
pub use date::Date;
pub use delivery::{
    minimum_delivery_date, next_business_day, suggested_delivery_dates, validate_delivery_date,
    validate_delivery_date_str, DeliveryPlanner, DeliveryRejection, DeliveryValidation,
    SuggestedDate, ValidationReport,
};
pub use holidays::{
    easter_sunday, is_national_holiday, national_holiday_on, national_holidays, Holiday,
    HolidaySet,
};
pub use weekday::Weekday;

/// Return `true` if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: Date) -> bool {
    date.weekday().is_weekend()
}
