//! Error types and HTTP error mapping

use crate::models::FieldViolation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Meeting room with ID {id} was not found")]
    RoomNotFound { id: i32 },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Error::StorageUnavailable(err.to_string())
            }
            other => Error::Database(other),
        }
    }
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::RoomNotFound { .. } => StatusCode::NOT_FOUND,
            Error::StorageUnavailable(_)
            | Error::Database(_)
            | Error::Migration(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Error::Validation(violations) => json!({
                "message": "One or more fields are invalid",
                "errors": violations,
            }),
            Error::BadRequest(message) | Error::PayloadTooLarge(message) => {
                json!({ "message": message })
            }
            Error::RoomNotFound { .. } => json!({ "message": self.to_string() }),
            _ => {
                // Details stay in the log, never in the response body.
                tracing::error!(error = %self, "Request failed");
                json!({ "message": "An internal server error occurred" })
            }
        };

        (status, Json(body)).into_response()
    }
}
