//! Accrual period model.
//!
//! This module defines the [`AccrualPeriod`] struct representing one year of
//! service and the vacation days earned in it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Nominal days worked in a full accrual period (a 12 x 30-day labour-law
/// year).
pub const NOMINAL_DAYS_WORKED: u32 = 360;

/// Represents one year of service and the entitlement earned in it.
///
/// Periods are generated by the period generator and form a contiguous,
/// non-overlapping sequence: period N's start equals period N-1's end plus
/// one day, and period 1's start equals the employee's canonical hire date.
/// The `label`, `days_worked`, and `entitlement_days` fields may be manually
/// overridden by an external actor; the date range is always owned by the
/// generator.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{AccrualPeriod, NOMINAL_DAYS_WORKED};
/// use chrono::NaiveDate;
///
/// let period = AccrualPeriod {
///     ordinal: 1,
///     label: "Year 1".to_string(),
///     start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
///     days_worked: NOMINAL_DAYS_WORKED,
///     entitlement_days: 15,
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPeriod {
    /// 1-based ordinal year of service this period represents.
    pub ordinal: u32,
    /// Display label, "Year N" by default.
    pub label: String,
    /// The start date of the period (inclusive).
    pub start: NaiveDate,
    /// The end date of the period (inclusive), one year minus one day after
    /// the start.
    pub end: NaiveDate,
    /// Nominal days worked in the period; defaults to
    /// [`NOMINAL_DAYS_WORKED`], may be manually overridden.
    pub days_worked: u32,
    /// Vacation days earned for this period, determined by the entitlement
    /// tier for the period's ordinal year number.
    pub entitlement_days: u32,
}

impl AccrualPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Validates the period's internal consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the period is well-formed, or an
    /// [`EngineError::InvalidPeriod`] if:
    /// - the ordinal is zero (ordinals are 1-based)
    /// - the end date is before the start date
    pub fn validate(&self) -> EngineResult<()> {
        if self.ordinal == 0 {
            return Err(EngineError::InvalidPeriod {
                label: self.label.clone(),
                message: "ordinal must be 1-based".to_string(),
            });
        }
        if self.end < self.start {
            return Err(EngineError::InvalidPeriod {
                label: self.label.clone(),
                message: "end date before start date".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_period() -> AccrualPeriod {
        AccrualPeriod {
            ordinal: 1,
            label: "Year 1".to_string(),
            start: make_date("2020-01-01"),
            end: make_date("2020-12-31"),
            days_worked: NOMINAL_DAYS_WORKED,
            entitlement_days: 15,
        }
    }

    /// AP-001: contains_date within period
    #[test]
    fn test_contains_date_within_period() {
        let period = create_test_period();
        assert!(period.contains_date(make_date("2020-06-15")));
    }

    /// AP-002: contains_date inclusive of boundaries
    #[test]
    fn test_contains_date_inclusive_boundaries() {
        let period = create_test_period();
        assert!(period.contains_date(period.start));
        assert!(period.contains_date(period.end));
    }

    /// AP-003: contains_date outside period
    #[test]
    fn test_contains_date_outside_period() {
        let period = create_test_period();
        assert!(!period.contains_date(make_date("2019-12-31")));
        assert!(!period.contains_date(make_date("2021-01-01")));
    }

    /// AP-004: valid period passes validation
    #[test]
    fn test_valid_period_passes_validation() {
        assert!(create_test_period().validate().is_ok());
    }

    /// AP-005: inverted date range fails validation
    #[test]
    fn test_inverted_range_fails_validation() {
        let mut period = create_test_period();
        period.end = make_date("2019-01-01");

        match period.validate().unwrap_err() {
            EngineError::InvalidPeriod { label, message } => {
                assert_eq!(label, "Year 1");
                assert!(message.contains("end date"));
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    /// AP-006: zero ordinal fails validation
    #[test]
    fn test_zero_ordinal_fails_validation() {
        let mut period = create_test_period();
        period.ordinal = 0;
        assert!(period.validate().is_err());
    }

    #[test]
    fn test_serialize_period() {
        let period = create_test_period();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"label\":\"Year 1\""));
        assert!(json.contains("\"start\":\"2020-01-01\""));
        assert!(json.contains("\"end\":\"2020-12-31\""));
        assert!(json.contains("\"days_worked\":360"));
    }

    #[test]
    fn test_deserialize_period() {
        let json = r#"{
            "ordinal": 2,
            "label": "Year 2",
            "start": "2021-01-01",
            "end": "2021-12-31",
            "days_worked": 360,
            "entitlement_days": 15
        }"#;
        let period: AccrualPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.ordinal, 2);
        assert_eq!(period.start, make_date("2021-01-01"));
        assert_eq!(period.entitlement_days, 15);
    }
}
