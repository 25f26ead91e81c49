//! HTTP request handlers for the Vacation Accrual Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    BalanceStatus, business_days, reconcile, tenure, total_entitlement, total_taken,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{AccrualPeriod, Employee, VacationSummary, VacationTaken};

use super::request::{BusinessDaysRequest, ReconcileRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, BusinessDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_handler))
        .route("/business-days", post(business_days_handler))
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, mapping axum rejections to API errors.
fn parse_request<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(match rejection {
            JsonRejection::JsonDataError(err) => {
                // The body text carries the detailed error from serde
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                if body_text.contains("missing field") {
                    ApiError::new("VALIDATION_ERROR", body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "JSON syntax error"
                );
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        }),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /business-days endpoint.
///
/// Counts the business days in an inclusive date range. An inverted range
/// answers zero rather than an error.
async fn business_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<BusinessDaysRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing business-day count request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    if request.from > request.to {
        warn!(
            correlation_id = %correlation_id,
            from = %request.from,
            to = %request.to,
            "Inverted date range, counting zero business days"
        );
    }

    let calendar = state.config().calendar();
    let count = business_days(request.from, request.to, calendar);
    let holidays = calendar.holidays_in_range(request.from, request.to);

    info!(
        correlation_id = %correlation_id,
        business_days = %count,
        holidays = holidays.len(),
        "Business-day count completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(BusinessDaysResponse {
            from: request.from,
            to: request.to,
            business_days: count,
            holidays,
        }),
    )
        .into_response()
}

/// Handler for the POST /reconcile endpoint.
///
/// Reconciles stored periods against the employee's current hire date and
/// returns the reconciled sequence plus a report of what changed. A forced
/// pass discards manual overrides and is irreversible.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconciliation request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let employee: Employee = request.employee.into();
    let periods: Vec<AccrualPeriod> =
        request.existing_periods.into_iter().map(Into::into).collect();

    for period in &periods {
        if let Err(err) = period.validate() {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                error = %err,
                "Rejected invalid stored period"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    }

    if request.force {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            "Forced recalculation requested, manual period edits will be lost"
        );
    }

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let result = reconcile(
        employee.canonical_hire_date(),
        as_of,
        &periods,
        request.force,
        state.config().scale(),
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        stale = result.report.stale,
        rebased = result.report.rebased,
        appended = result.report.appended,
        dropped = result.report.dropped,
        "Reconciliation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for the POST /summary endpoint.
///
/// Reconciles the employee's periods and returns the full accrual picture:
/// tenure, entitlement scale, periods, totals, and balance.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let employee: Employee = request.employee.into();
    let periods: Vec<AccrualPeriod> =
        request.existing_periods.into_iter().map(Into::into).collect();
    let vacations: Vec<VacationTaken> =
        request.vacations_taken.into_iter().map(Into::into).collect();

    for vacation in &vacations {
        if vacation.is_zero_days() {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                from = %vacation.from,
                "Vacation entry consumes zero business days"
            );
        }
    }

    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    match build_summary(&employee, &periods, &vacations, as_of, state.config()) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                periods = summary.periods.len(),
                balance = %summary.balance,
                "Summary completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(summary),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                error = %err,
                "Summary failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Builds the vacation summary for an employee.
///
/// Validates the supplied records, reconciles periods against the canonical
/// hire date, and folds entitlement and consumption into the balance. A
/// missing hire date is a valid insufficient-data state producing a zero
/// summary, not an error.
fn build_summary(
    employee: &Employee,
    existing_periods: &[AccrualPeriod],
    vacations: &[VacationTaken],
    as_of: NaiveDate,
    config: &ConfigLoader,
) -> EngineResult<VacationSummary> {
    for period in existing_periods {
        period.validate()?;
    }
    for vacation in vacations {
        vacation.validate()?;
    }

    let hire_date = employee.canonical_hire_date();
    let reconciliation = reconcile(hire_date, as_of, existing_periods, false, config.scale());

    let employee_tenure = hire_date
        .map(|hire| tenure(hire, as_of))
        .unwrap_or_default();
    let scale_text = config.scale().description_for(employee_tenure.years as i32);

    let total_entitlement_days = total_entitlement(&reconciliation.periods);
    let total_days_taken = total_taken(vacations);
    let balance = total_entitlement_days - total_days_taken;

    Ok(VacationSummary {
        summary_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        as_of,
        tenure: employee_tenure,
        scale: scale_text,
        periods: reconciliation.periods,
        reconcile: reconciliation.report,
        total_entitlement_days,
        total_days_taken,
        balance,
        status: BalanceStatus::for_balance(balance),
    })
}
