use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::DomainError;

use crate::api::presentation::GenerateResponse;
use crate::api::requests::GenerateRequest;
use crate::api::state::AppState;

/// Runs one solve synchronously and returns the flattened roster.
/// Grounded on the teacher's `schedule_handlers::submit_schedule`,
/// collapsed to a single request/response pair since the orchestrator
/// no longer defers work to a background queue.
///
/// Takes the raw body instead of `Json<GenerateRequest>` so a missing
/// or malformed request reaches `ApiError` (400) rather than axum's
/// built-in `JsonRejection` (422).
#[utoipa::path(
    post,
    path = "/api/v1/schedule-jobs",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Solve completed or returned a partial roster", body = GenerateResponse),
        (status = 400, description = "Missing or invalid year/month"),
        (status = 500, description = "Internal failure, rolled back")
    ),
    tag = "roster"
)]
pub async fn generate_schedule(State(state): State<AppState>, body: Bytes) -> Result<Json<GenerateResponse>, ApiError> {
    let request: GenerateRequest = serde_json::from_slice(&body)
        .map_err(|e| DomainError::InvalidInput(format!("invalid request body: {e}")))?;
    let job_spec = request.into_job_spec(state.default_target_holidays)?;
    let cancelled = Arc::new(AtomicBool::new(false));
    let timeout = Duration::from_secs(state.solve_timeout_secs);
    let generator = state.roster_generator.clone();

    let solve = tokio::spawn({
        let cancelled = cancelled.clone();
        async move { generator.generate(job_spec, cancelled).await }
    });

    tokio::pin!(solve);
    let outcome = tokio::select! {
        result = &mut solve => {
            result.map_err(|e| DomainError::InternalError(format!("solve task panicked: {e}")))??
        }
        _ = tokio::time::sleep(timeout) => {
            // Abort the search, then wait for the backtracker to notice
            // and unwind so the actual (incomplete) outcome is returned
            // rather than dropped.
            cancelled.store(true, Ordering::Relaxed);
            solve
                .await
                .map_err(|e| DomainError::InternalError(format!("solve task panicked: {e}")))??
        }
    };

    Ok(Json(GenerateResponse::from(outcome)))
}

/// Maps `DomainError` onto HTTP status codes.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::InvalidInput(_) | DomainError::NotFound(_) => StatusCode::BAD_REQUEST,
            DomainError::DatabaseError(_) | DomainError::ExternalServiceError(_) | DomainError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
