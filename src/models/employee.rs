//! Employee model.
//!
//! This module defines the Employee struct representing a worker whose
//! vacation entitlement is tracked by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// Represents an employee subject to vacation accrual.
///
/// Two candidate hire-date fields exist: the primary `hire_date` and the
/// fallback `cps_hire_date` taken from the employee's CPS (social security
/// fund) registration. All tenure and accrual calculations use exactly one
/// canonical date, resolved by [`Employee::canonical_hire_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
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
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Employee {
    /// Resolves the canonical hire date for all calculations.
    ///
    /// The primary hire date takes precedence; the CPS date is used only
    /// when the primary is absent. Returns `None` when neither is set, in
    /// which case tenure and entitlement are reported as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     full_name: "Maria Fernandez".to_string(),
    ///     position: None,
    ///     department: None,
    ///     hire_date: None,
    ///     cps_hire_date: Some(NaiveDate::from_ymd_opt(2019, 4, 1).unwrap()),
    ///     active: true,
    /// };
    /// assert_eq!(
    ///     employee.canonical_hire_date(),
    ///     Some(NaiveDate::from_ymd_opt(2019, 4, 1).unwrap())
    /// );
    /// ```
    pub fn canonical_hire_date(&self) -> Option<NaiveDate> {
        self.hire_date.or(self.cps_hire_date)
    }
}
