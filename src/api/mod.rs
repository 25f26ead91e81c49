//! HTTP API module for the Vacation Accrual Engine.
//!
//! This module provides the REST API endpoints for computing vacation
//! summaries, business-day counts, and period reconciliation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BusinessDaysRequest, EmployeeRequest, PeriodRequest, ReconcileRequest, SummaryRequest,
    VacationRequest,
};
pub use response::{ApiError, BusinessDaysResponse};
pub use state::AppState;
