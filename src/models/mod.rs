//! Core data models for the Vacation Accrual Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod accrual_period;
mod employee;
mod summary;
mod vacation;

pub use accrual_period::{AccrualPeriod, NOMINAL_DAYS_WORKED};
pub use employee::Employee;
pub use summary::VacationSummary;
pub use vacation::VacationTaken;
