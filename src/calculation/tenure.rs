//! Tenure computation.
//!
//! This module computes an employee's length of service from the canonical
//! hire date to a reference date, expressed as whole years plus the months
//! elapsed since the last anniversary.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of service at a reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// Whole elapsed years of service.
    pub years: u32,
    /// Months elapsed since the last service anniversary (0-11).
    pub months: u32,
}

/// Computes tenure from a hire date to a reference date.
///
/// Counts whole elapsed months (a month is complete once the reference
/// day-of-month reaches the hire day-of-month), then splits them into years
/// and the remainder. Both components floor at zero, so a hire date in the
/// future yields zero tenure rather than an error.
///
/// # Arguments
///
/// * `hire_date` - The canonical hire date
/// * `as_of` - The reference date
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::tenure;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let result = tenure(hire, as_of);
/// assert_eq!(result.years, 4);
/// assert_eq!(result.months, 3);
/// ```
pub fn tenure(hire_date: NaiveDate, as_of: NaiveDate) -> Tenure {
    let mut months = (as_of.year() - hire_date.year()) * 12 + as_of.month() as i32
        - hire_date.month() as i32;
    if as_of.day() < hire_date.day() {
        months -= 1;
    }
    let months = months.max(0);

    Tenure {
        years: (months / 12) as u32,
        months: (months % 12) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// TN-001: exact anniversary
    #[test]
    fn test_exact_anniversary() {
        let result = tenure(make_date("2020-03-01"), make_date("2024-03-01"));
        assert_eq!(result, Tenure { years: 4, months: 0 });
    }

    /// TN-002: months since last anniversary
    #[test]
    fn test_months_since_last_anniversary() {
        let result = tenure(make_date("2020-03-01"), make_date("2024-06-15"));
        assert_eq!(result, Tenure { years: 4, months: 3 });
    }

    /// TN-003: day before an anniversary
    #[test]
    fn test_day_before_anniversary() {
        let result = tenure(make_date("2020-03-15"), make_date("2024-03-14"));
        assert_eq!(result, Tenure { years: 3, months: 11 });
    }

    /// TN-004: hire date equal to reference date
    #[test]
    fn test_hire_equals_reference() {
        let result = tenure(make_date("2024-06-15"), make_date("2024-06-15"));
        assert_eq!(result, Tenure { years: 0, months: 0 });
    }

    /// TN-005: hire date in the future floors at zero
    #[test]
    fn test_future_hire_floors_at_zero() {
        let result = tenure(make_date("2025-01-01"), make_date("2024-06-15"));
        assert_eq!(result, Tenure { years: 0, months: 0 });
    }

    /// TN-006: under one month of service
    #[test]
    fn test_under_one_month() {
        let result = tenure(make_date("2024-06-01"), make_date("2024-06-20"));
        assert_eq!(result, Tenure { years: 0, months: 0 });
    }

    /// TN-007: partial month does not count
    #[test]
    fn test_partial_month_does_not_count() {
        // hired on the 31st; by July 28 the month is not complete
        let result = tenure(make_date("2024-01-31"), make_date("2024-07-28"));
        assert_eq!(result, Tenure { years: 0, months: 5 });
    }

    #[test]
    fn test_tenure_default_is_zero() {
        assert_eq!(Tenure::default(), Tenure { years: 0, months: 0 });
    }

    #[test]
    fn test_tenure_serialization() {
        let tenure = Tenure { years: 4, months: 3 };
        let json = serde_json::to_string(&tenure).unwrap();
        assert_eq!(json, r#"{"years":4,"months":3}"#);
    }
}
