//! Vacation consumption model.
//!
//! This module defines the [`VacationTaken`] struct representing a single
//! vacation event charged against an employee's accrued entitlement.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single vacation consumption event.
///
/// The business-day cost is computed by the business-day counter once, at
/// entry time, and stored as the authoritative value; it is never recomputed
/// from the date range on later reads. The stored value may carry a
/// fractional `.5` for ranges covering a Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationTaken {
    /// The first day of the vacation (inclusive).
    pub from: NaiveDate,
    /// The last day of the vacation (inclusive); equals `from` for
    /// single-day entries.
    pub to: NaiveDate,
    /// The business-day cost, fixed at entry time.
    pub business_days: Decimal,
    /// Optional free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Optional free-text name of the person who authorized the vacation.
    #[serde(default)]
    pub authorized_by: Option<String>,
}

impl VacationTaken {
    /// Creates a single-day vacation entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::VacationTaken;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// // 2024-06-05 is a Wednesday
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
    /// let vacation = VacationTaken::single(day, Decimal::ONE);
    /// assert_eq!(vacation.from, vacation.to);
    /// ```
    pub fn single(date: NaiveDate, business_days: Decimal) -> Self {
        Self {
            from: date,
            to: date,
            business_days,
            reason: None,
            authorized_by: None,
        }
    }

    /// Returns true when the entry consumes no business days.
    ///
    /// Zero-day entries are permitted (e.g. a range covering only Sundays
    /// and holidays) but ambiguous when saved before the count populates,
    /// so callers log them.
    pub fn is_zero_days(&self) -> bool {
        self.business_days == Decimal::ZERO
    }

    /// Validates the record's internal consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the record is well-formed, or an
    /// [`EngineError::InvalidVacation`] if:
    /// - the end date is before the start date
    /// - the business-day cost is negative
    pub fn validate(&self) -> EngineResult<()> {
        if self.to < self.from {
            return Err(EngineError::InvalidVacation {
                message: format!("end date {} before start date {}", self.to, self.from),
            });
        }
        if self.business_days < Decimal::ZERO {
            return Err(EngineError::InvalidVacation {
                message: format!("negative business days: {}", self.business_days),
            });
        }
        Ok(())
    }
}
