//! API route handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use churn::{ChurnError, ChurnPrediction};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness probe - is the server running?
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: state.service.health(),
    })
}

/// A [`ChurnError`] translated to an HTTP response.
///
/// Validation problems are the client's fault and carry the full violation
/// list; everything else is a server fault reported as a detail string.
#[derive(Debug)]
pub struct ApiError(ChurnError);

impl From<ChurnError> for ApiError {
    fn from(error: ChurnError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ChurnError::Validation(e) => {
                tracing::debug!("rejected payload: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": e.violations })),
                )
                    .into_response()
            }
            err @ ChurnError::SchemaMismatch { .. } => {
                // Deployment drift between code and artifact, not a user error.
                tracing::error!("model artifact and feature contract disagree: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": err.to_string() })),
                )
                    .into_response()
            }
            err => {
                tracing::error!("prediction failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

/// Validate the payload, build the feature frame, run inference.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ChurnPrediction>, ApiError> {
    let prediction = state.service.predict(&payload)?;
    Ok(Json(prediction))
}
