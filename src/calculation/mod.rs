//! Calculation logic for the Vacation Accrual Engine.
//!
//! This module contains all the calculation functions for tracking paid
//! leave, including Gregorian Easter computation, the national holiday
//! calendar, business-day counting with the half-day Saturday rule, tenure
//! computation, yearly accrual-period generation, reconciliation of stored
//! periods against an edited hire date, and balance aggregation.

mod balance;
mod business_days;
mod easter;
mod holidays;
mod periods;
mod reconcile;
mod tenure;

pub use balance::{BalanceStatus, balance, total_entitlement, total_taken};
pub use business_days::{DayType, business_days, day_type};
pub use easter::easter_sunday;
pub use holidays::{Holiday, HolidayCalendar};
pub use periods::generate_periods;
pub use reconcile::{ReconcileReport, Reconciliation, reconcile};
pub use tenure::{Tenure, tenure};
