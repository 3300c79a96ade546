//! HTTP API handlers

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use event_wizard::{FormData, StepIssue, StepValidator, ValidationPolicy, WizardStep};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub validator: StepValidator,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            validator: StepValidator::new(policy),
            started_at: Instant::now(),
        }
    }
}

/// General status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// Result of checking one wizard step
#[derive(Debug, Serialize)]
pub struct StepValidationResponse {
    pub step: i64,
    pub valid: bool,
    /// First problem found, when the step is a known one and fails
    pub issue: Option<StepIssue>,
}

/// Result of checking the whole wizard
#[derive(Debug, Serialize)]
pub struct FormValidationResponse {
    pub valid: bool,
    pub first_invalid_step: Option<WizardStep>,
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/api/wizard/validate", post(validate_form_handler))
        .route("/api/wizard/steps/{step}/validate", post(validate_step_handler))
        .with_state(state)
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "ticket-frontend",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

/// POST /api/wizard/steps/{step}/validate - Check one step of a snapshot
pub async fn validate_step_handler(
    State(state): State<AppState>,
    Path(step): Path<i64>,
    Json(form): Json<FormData>,
) -> Json<StepValidationResponse> {
    let issue = WizardStep::try_from(step)
        .ok()
        .and_then(|s| state.validator.check_step(s, &form).err());
    debug!(step, valid = issue.is_none(), "validated wizard step");

    Json(StepValidationResponse {
        step,
        valid: issue.is_none(),
        issue,
    })
}

/// POST /api/wizard/validate - Check every step of a snapshot
pub async fn validate_form_handler(
    State(state): State<AppState>,
    Json(form): Json<FormData>,
) -> Json<FormValidationResponse> {
    let first_invalid_step = state.validator.first_invalid_step(&form);
    debug!(?first_invalid_step, "validated wizard form");

    Json(FormValidationResponse {
        valid: first_invalid_step.is_none(),
        first_invalid_step,
    })
}
