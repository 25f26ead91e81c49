//! Vacation summary model.
//!
//! This module contains the [`VacationSummary`] type returned by the
//! summary endpoint: the reconciled accrual state of one employee together
//! with the derived balance.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{BalanceStatus, ReconcileReport, Tenure};
use crate::models::AccrualPeriod;

/// The complete accrual picture for one employee at a reference date.
///
/// The balance is derived on every computation, never persisted: it is the
/// sum of entitlement days across the reconciled periods minus the sum of
/// business days across the recorded vacations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationSummary {
    /// Unique identifier for this summary computation.
    pub summary_id: Uuid,
    /// When the summary was computed.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the summary.
    pub engine_version: String,
    /// The employee this summary belongs to.
    pub employee_id: String,
    /// The reference date the summary was computed against.
    pub as_of: NaiveDate,
    /// Tenure at the reference date; zero when no hire date is known.
    pub tenure: Tenure,
    /// Display text for the employee's current entitlement tier.
    pub scale: String,
    /// The reconciled accrual periods, ordered by ordinal.
    pub periods: Vec<AccrualPeriod>,
    /// What the reconciliation pass changed to produce `periods`.
    pub reconcile: ReconcileReport,
    /// Total entitlement days accrued across all periods.
    pub total_entitlement_days: Decimal,
    /// Total business days consumed by recorded vacations.
    pub total_days_taken: Decimal,
    /// Entitlement minus consumption; negative when exceeded.
    pub balance: Decimal,
    /// Classification of the balance sign.
    pub status: BalanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_expected_fields() {
        let summary = VacationSummary {
            summary_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: "0.1.0".to_string(),
            employee_id: "emp_001".to_string(),
            as_of: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            tenure: Tenure { years: 4, months: 5 },
            scale: "15 days/year (years 1-5)".to_string(),
            periods: vec![],
            reconcile: ReconcileReport::default(),
            total_entitlement_days: Decimal::new(60, 0),
            total_days_taken: Decimal::new(105, 1),
            balance: Decimal::new(495, 1),
            status: BalanceStatus::Owed,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"employee_id\":\"emp_001\""));
        assert!(json.contains("\"as_of\":\"2024-06-01\""));
        assert!(json.contains("\"balance\":\"49.5\""));
        assert!(json.contains("\"status\":\"owed\""));
    }
}
