//! Balance aggregation.
//!
//! Pure functions folding accrued entitlement and recorded consumption into
//! a single balance. The balance is recomputed on every read and never
//! persisted, so it cannot drift from its inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AccrualPeriod, VacationTaken};

/// Classification of a vacation balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// More days taken than accrued (negative balance).
    Exceeded,
    /// Taken exactly matches accrued (zero balance).
    Current,
    /// Days still owed to the employee (positive balance).
    Owed,
}

impl BalanceStatus {
    /// Classifies a balance by its sign.
    pub fn for_balance(balance: Decimal) -> Self {
        if balance < Decimal::ZERO {
            BalanceStatus::Exceeded
        } else if balance == Decimal::ZERO {
            BalanceStatus::Current
        } else {
            BalanceStatus::Owed
        }
    }
}

/// Sums the entitlement days across a period sequence.
pub fn total_entitlement(periods: &[AccrualPeriod]) -> Decimal {
    periods
        .iter()
        .map(|p| Decimal::from(p.entitlement_days))
        .sum()
}

/// Sums the business days consumed across recorded vacations.
pub fn total_taken(vacations: &[VacationTaken]) -> Decimal {
    vacations.iter().map(|v| v.business_days).sum()
}

/// Computes the vacation balance: accrued entitlement minus consumption.
///
/// A negative result signals the employee has taken more days than accrued.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{balance, generate_periods};
/// use vacation_engine::config::ScaleConfig;
/// use vacation_engine::models::VacationTaken;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let periods = generate_periods(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
///     &ScaleConfig::default(),
/// );
/// let taken = vec![VacationTaken::single(
///     NaiveDate::from_ymd_opt(2021, 8, 11).unwrap(),
///     Decimal::ONE,
/// )];
///
/// // two periods of 15 days each, one day taken
/// assert_eq!(balance(&periods, &taken), Decimal::from(29));
/// ```
pub fn balance(periods: &[AccrualPeriod], vacations: &[VacationTaken]) -> Decimal {
    total_entitlement(periods) - total_taken(vacations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOMINAL_DAYS_WORKED;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn period(ordinal: u32, entitlement_days: u32) -> AccrualPeriod {
        AccrualPeriod {
            ordinal,
            label: format!("Year {}", ordinal),
            start: make_date("2020-01-01"),
            end: make_date("2020-12-31"),
            days_worked: NOMINAL_DAYS_WORKED,
            entitlement_days,
        }
    }

    /// BL-001: two 15-day periods minus 10.5 taken leaves 19.5
    #[test]
    fn test_balance_with_fractional_consumption() {
        let periods = vec![period(1, 15), period(2, 15)];
        let vacations = vec![
            VacationTaken::single(make_date("2021-03-10"), dec("5")),
            VacationTaken::single(make_date("2021-07-02"), dec("5.5")),
        ];

        assert_eq!(balance(&periods, &vacations), dec("19.5"));
    }

    /// BL-002: nothing taken leaves the full entitlement
    #[test]
    fn test_balance_with_nothing_taken() {
        let periods = vec![period(1, 15), period(2, 15), period(3, 15)];
        assert_eq!(balance(&periods, &[]), dec("45"));
    }

    /// BL-003: negative balance signals exceeded entitlement
    #[test]
    fn test_negative_balance_exceeded() {
        let periods = vec![period(1, 15)];
        let vacations = vec![VacationTaken::single(make_date("2021-03-10"), dec("20"))];

        let result = balance(&periods, &vacations);
        assert_eq!(result, dec("-5"));
        assert_eq!(BalanceStatus::for_balance(result), BalanceStatus::Exceeded);
    }

    /// BL-004: empty inputs yield zero, classified as current
    #[test]
    fn test_empty_inputs_yield_zero() {
        let result = balance(&[], &[]);
        assert_eq!(result, Decimal::ZERO);
        assert_eq!(BalanceStatus::for_balance(result), BalanceStatus::Current);
    }

    /// BL-005: status classification boundaries
    #[test]
    fn test_status_boundaries() {
        assert_eq!(
            BalanceStatus::for_balance(dec("-0.5")),
            BalanceStatus::Exceeded
        );
        assert_eq!(BalanceStatus::for_balance(dec("0")), BalanceStatus::Current);
        assert_eq!(BalanceStatus::for_balance(dec("0.5")), BalanceStatus::Owed);
    }

    #[test]
    fn test_total_entitlement_respects_overrides() {
        let periods = vec![period(1, 15), period(2, 12)];
        assert_eq!(total_entitlement(&periods), dec("27"));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&BalanceStatus::Exceeded).unwrap(),
            "\"exceeded\""
        );
        assert_eq!(
            serde_json::to_string(&BalanceStatus::Current).unwrap(),
            "\"current\""
        );
        assert_eq!(
            serde_json::to_string(&BalanceStatus::Owed).unwrap(),
            "\"owed\""
        );
    }
}
