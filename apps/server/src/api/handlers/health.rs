//! Health check handler.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

/// Report API and database status: 200 when the store answers, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.health_service.check().await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "Unhealthy",
                    "database": "Disconnected",
                    "message": "Unable to reach the database",
                    "timestamp": Utc::now(),
                })),
            )
                .into_response()
        }
    }
}
