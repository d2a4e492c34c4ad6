//! Delivery-date rules for order intake.
//!
//! An order may only be scheduled for a business day at least
//! `lead_business_days` business days after today.  Every function takes
//! `today` explicitly and recomputes the minimum date on each call, so a
//! long-lived [`DeliveryPlanner`] stays correct as the date changes.

use cdg_core::errors::{self, Result};
use cdg_core::settings::DeliverySettings;
use serde::Serialize;
use thiserror::Error;

use crate::calendar::Calendar;
use crate::calendars::brazil::Brazil;
use crate::date::Date;
use crate::weekday::Weekday;

/// Why a candidate delivery date was refused.
///
/// The `Display` text is the message shown under the date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DeliveryRejection {
    /// No date was given, or it could not be read as `YYYY-MM-DD`.
    #[error("Data de entrega é obrigatória")]
    Required,

    /// The date is earlier than the minimum delivery date.
    #[error("A data de entrega deve ser pelo menos {lead_business_days} dias úteis após hoje")]
    TooSoon {
        /// Earliest acceptable date.
        minimum: Date,
        /// Lead time the minimum was computed with.
        lead_business_days: u32,
    },

    /// The date is a Saturday or Sunday.
    #[error("Não é possível agendar entregas para fins de semana")]
    Weekend,

    /// The date is a national holiday.
    #[error("Não é possível agendar entregas para feriados nacionais")]
    Holiday,
}

impl DeliveryRejection {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryRejection::Required => "required",
            DeliveryRejection::TooSoon { .. } => "too_soon",
            DeliveryRejection::Weekend => "weekend",
            DeliveryRejection::Holiday => "holiday",
        }
    }
}

/// Outcome of validating a delivery date: the accepted date, or the reason
/// it was refused.
pub type DeliveryValidation = std::result::Result<Date, DeliveryRejection>;

/// Render-ready form of a [`DeliveryValidation`]:
/// `{"valid": true, "message": ...}` or
/// `{"valid": false, "reason": "weekend", "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the date was accepted.
    pub valid: bool,
    /// Reason code when refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    /// User-facing message.
    pub message: String,
}

impl From<&DeliveryValidation> for ValidationReport {
    fn from(outcome: &DeliveryValidation) -> Self {
        match outcome {
            Ok(_) => ValidationReport {
                valid: true,
                reason: None,
                message: "Data de entrega válida".to_string(),
            },
            Err(rejection) => ValidationReport {
                valid: false,
                reason: Some(rejection.code()),
                message: rejection.to_string(),
            },
        }
    }
}

/// A suggested delivery date with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedDate {
    /// The date (serialized as `YYYY-MM-DD`).
    pub date: Date,
    /// Day of the week.
    pub weekday: Weekday,
    /// `DD/MM/YYYY - <weekday>`, e.g. `"07/01/2026 - Quarta"`.
    pub label: String,
}

impl SuggestedDate {
    fn new(date: Date) -> Self {
        let weekday = date.weekday();
        let label = format!("{} - {}", date.to_brazilian_string(), weekday.label_pt());
        Self {
            date,
            weekday,
            label,
        }
    }
}

/// Delivery-date rules bound to a calendar.
#[derive(Debug, Clone)]
pub struct DeliveryPlanner<C: Calendar = Brazil> {
    calendar: C,
    policy: DeliverySettings,
}

impl Default for DeliveryPlanner<Brazil> {
    fn default() -> Self {
        Self::new(Brazil, DeliverySettings::default())
    }
}

impl<C: Calendar> DeliveryPlanner<C> {
    /// Create a planner over `calendar` with the given rules.
    pub fn new(calendar: C, policy: DeliverySettings) -> Self {
        Self { calendar, policy }
    }

    /// The calendar in use.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The rules in use.
    pub fn policy(&self) -> &DeliverySettings {
        &self.policy
    }

    /// The earliest acceptable delivery date: the `lead_business_days`-th
    /// business day strictly after `today`.
    ///
    /// # Errors
    /// Returns an error if the lead time does not fit an `i32`, or if the
    /// walk runs past the last supported date.
    pub fn minimum_date(&self, today: Date) -> Result<Date> {
        let lead = i32::try_from(self.policy.lead_business_days).map_err(|_| {
            errors::Error::InvalidArgument(format!(
                "lead time of {} business days is out of range",
                self.policy.lead_business_days
            ))
        })?;
        self.calendar.advance_business_days(today, lead)
    }

    /// Validate `candidate` against `today`.
    ///
    /// Checks run in a fixed order and the first failure wins: missing, too
    /// soon, weekend, holiday.  A date that is both too soon and on a weekend
    /// is reported as too soon.
    pub fn validate(&self, candidate: Option<Date>, today: Date) -> DeliveryValidation {
        let Some(candidate) = candidate else {
            return Err(DeliveryRejection::Required);
        };
        match self.minimum_date(today) {
            Ok(minimum) if candidate < minimum => {
                log::debug!("delivery date {candidate} rejected: before {minimum}");
                return Err(DeliveryRejection::TooSoon {
                    minimum,
                    lead_business_days: self.policy.lead_business_days,
                });
            }
            Ok(_) => {}
            // Near the end of the supported range the minimum does not exist
            // and no representable date is late enough.
            Err(e) => {
                log::warn!("minimum delivery date after {today} unavailable: {e}");
                return Err(DeliveryRejection::TooSoon {
                    minimum: Date::MAX,
                    lead_business_days: self.policy.lead_business_days,
                });
            }
        }
        if self.calendar.is_weekend(candidate) {
            return Err(DeliveryRejection::Weekend);
        }
        if self.calendar.is_holiday(candidate) {
            return Err(DeliveryRejection::Holiday);
        }
        Ok(candidate)
    }

    /// Validate a `YYYY-MM-DD` string as submitted by the form.  Blank or
    /// unreadable input counts as missing.
    pub fn validate_str(&self, candidate: Option<&str>, today: Date) -> DeliveryValidation {
        let parsed = candidate
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| match s.parse::<Date>() {
                Ok(d) => Some(d),
                Err(e) => {
                    log::debug!("unreadable delivery date {s:?}: {e}");
                    None
                }
            });
        self.validate(parsed, today)
    }

    /// Up to `count` business days starting at the minimum delivery date, in
    /// ascending order.  Fewer are returned only at the end of the supported
    /// date range.
    pub fn suggestions(&self, today: Date, count: usize) -> Vec<SuggestedDate> {
        let Ok(start) = self.minimum_date(today) else {
            return Vec::new();
        };
        self.calendar
            .business_days_from(start)
            .take(count)
            .map(SuggestedDate::new)
            .collect()
    }

    /// [`suggestions`](Self::suggestions) with the configured count.
    pub fn default_suggestions(&self, today: Date) -> Vec<SuggestedDate> {
        self.suggestions(today, self.policy.suggestion_count)
    }
}

// ── Free functions over the default planner ───────────────────────────────────

/// Minimum delivery date under the default rules (7 business days, Brazil).
pub fn minimum_delivery_date(today: Date) -> Result<Date> {
    DeliveryPlanner::default().minimum_date(today)
}

/// Validate a delivery date under the default rules.
pub fn validate_delivery_date(candidate: Option<Date>, today: Date) -> DeliveryValidation {
    DeliveryPlanner::default().validate(candidate, today)
}

/// Validate a `YYYY-MM-DD` delivery date string under the default rules.
pub fn validate_delivery_date_str(candidate: Option<&str>, today: Date) -> DeliveryValidation {
    DeliveryPlanner::default().validate_str(candidate, today)
}

/// Suggested delivery dates under the default rules.
pub fn suggested_delivery_dates(today: Date, count: usize) -> Vec<SuggestedDate> {
    DeliveryPlanner::default().suggestions(today, count)
}

/// Next business day on or after `date` in the Brazil calendar.
pub fn next_business_day(date: Date) -> Result<Date> {
    Brazil.adjust_following(date)
}
