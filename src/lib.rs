//! Vacation Accrual Engine for the Bolivian General Labour Law
//!
//! This crate provides functionality for tracking paid-leave entitlement
//! under the LGT: tenure computation, the statutory entitlement scale, the
//! national holiday calendar, business-day counting for vacation requests,
//! automatic generation of yearly accrual periods since hire date, and
//! reconciliation of stored periods against an edited hire date.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
