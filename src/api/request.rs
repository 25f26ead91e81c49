//! Request types for the Vacation Accrual Engine API.
//!
//! These types mirror the domain models with request-friendly defaults
//! (optional labels, single-day vacations) and convert into them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AccrualPeriod, Employee, NOMINAL_DAYS_WORKED, VacationTaken};

fn default_true() -> bool {
    true
}

/// Employee data as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's job title.
    #[serde(default)]
    pub position: Option<String>,
    /// The department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// The primary hire date.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// The fallback hire date from the CPS registration.
    #[serde(default)]
    pub cps_hire_date: Option<NaiveDate>,
    /// Whether the employee is currently active.
    #[serde(default = "default_true")]
    pub active: bool,
}

impl From<EmployeeRequest> for Employee {
    fn from(request: EmployeeRequest) -> Self {
        Employee {
            id: request.id,
            full_name: request.full_name,
            position: request.position,
            department: request.department,
            hire_date: request.hire_date,
            cps_hire_date: request.cps_hire_date,
            active: request.active,
        }
    }
}

/// A stored accrual period as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// 1-based ordinal year of service.
    pub ordinal: u32,
    /// Display label; defaults to "Year N" when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// The start date of the period (inclusive).
    pub start: NaiveDate,
    /// The end date of the period (inclusive).
    pub end: NaiveDate,
    /// Nominal days worked; defaults to 360 when absent.
    #[serde(default)]
    pub days_worked: Option<u32>,
    /// Vacation days earned for this period.
    pub entitlement_days: u32,
}

impl From<PeriodRequest> for AccrualPeriod {
    fn from(request: PeriodRequest) -> Self {
        let label = request
            .label
            .unwrap_or_else(|| format!("Year {}", request.ordinal));
        AccrualPeriod {
            ordinal: request.ordinal,
            label,
            start: request.start,
            end: request.end,
            days_worked: request.days_worked.unwrap_or(NOMINAL_DAYS_WORKED),
            entitlement_days: request.entitlement_days,
        }
    }
}

/// A recorded vacation as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRequest {
    /// The first day of the vacation (inclusive).
    pub from: NaiveDate,
    /// The last day of the vacation; a single-day entry when absent.
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// The business-day cost fixed at entry time.
    pub business_days: Decimal,
    /// Optional free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Optional free-text name of the person who authorized the vacation.
    #[serde(default)]
    pub authorized_by: Option<String>,
}

impl From<VacationRequest> for VacationTaken {
    fn from(request: VacationRequest) -> Self {
        VacationTaken {
            from: request.from,
            to: request.to.unwrap_or(request.from),
            business_days: request.business_days,
            reason: request.reason,
            authorized_by: request.authorized_by,
        }
    }
}

/// Request body for the business-day count endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDaysRequest {
    /// The first day of the range (inclusive).
    pub from: NaiveDate,
    /// The last day of the range (inclusive).
    pub to: NaiveDate,
}

/// Request body for the reconciliation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The employee whose periods are reconciled.
    pub employee: EmployeeRequest,
    /// The currently stored periods.
    #[serde(default)]
    pub existing_periods: Vec<PeriodRequest>,
    /// Forces full regeneration, discarding manual overrides. Irreversible.
    #[serde(default)]
    pub force: bool,
    /// Reference date; defaults to today (UTC).
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The employee to summarize.
    pub employee: EmployeeRequest,
    /// The currently stored periods.
    #[serde(default)]
    pub existing_periods: Vec<PeriodRequest>,
    /// The recorded vacations charged against the entitlement.
    #[serde(default)]
    pub vacations_taken: Vec<VacationRequest>,
    /// Reference date; defaults to today (UTC).
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_period_request_defaults() {
        let json = r#"{
            "ordinal": 3,
            "start": "2022-01-01",
            "end": "2022-12-31",
            "entitlement_days": 15
        }"#;
        let request: PeriodRequest = serde_json::from_str(json).unwrap();
        let period: AccrualPeriod = request.into();

        assert_eq!(period.label, "Year 3");
        assert_eq!(period.days_worked, NOMINAL_DAYS_WORKED);
    }

    #[test]
    fn test_period_request_preserves_overrides() {
        let json = r#"{
            "ordinal": 2,
            "label": "Year 2 (adjusted)",
            "start": "2021-01-01",
            "end": "2021-12-31",
            "days_worked": 300,
            "entitlement_days": 12
        }"#;
        let request: PeriodRequest = serde_json::from_str(json).unwrap();
        let period: AccrualPeriod = request.into();

        assert_eq!(period.label, "Year 2 (adjusted)");
        assert_eq!(period.days_worked, 300);
        assert_eq!(period.entitlement_days, 12);
    }

    #[test]
    fn test_vacation_request_single_day_default() {
        let json = r#"{
            "from": "2024-06-05",
            "business_days": "1"
        }"#;
        let request: VacationRequest = serde_json::from_str(json).unwrap();
        let vacation: VacationTaken = request.into();

        assert_eq!(vacation.from, make_date("2024-06-05"));
        assert_eq!(vacation.to, make_date("2024-06-05"));
        assert_eq!(vacation.business_days, Decimal::ONE);
    }

    #[test]
    fn test_employee_request_conversion() {
        let json = r#"{
            "id": "emp_001",
            "full_name": "Maria Fernandez",
            "cps_hire_date": "2019-04-01"
        }"#;
        let request: EmployeeRequest = serde_json::from_str(json).unwrap();
        let employee: Employee = request.into();

        assert!(employee.active);
        assert_eq!(
            employee.canonical_hire_date(),
            Some(make_date("2019-04-01"))
        );
    }

    #[test]
    fn test_summary_request_defaults() {
        let json = r#"{
            "employee": {"id": "emp_001", "full_name": "Maria Fernandez"}
        }"#;
        let request: SummaryRequest = serde_json::from_str(json).unwrap();

        assert!(request.existing_periods.is_empty());
        assert!(request.vacations_taken.is_empty());
        assert!(request.as_of.is_none());
    }

    #[test]
    fn test_reconcile_request_force_defaults_false() {
        let json = r#"{
            "employee": {"id": "emp_001", "full_name": "Maria Fernandez"}
        }"#;
        let request: ReconcileRequest = serde_json::from_str(json).unwrap();
        assert!(!request.force);
    }
}
