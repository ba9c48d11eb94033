//! Server Error Types
//!
//! Maps service errors onto HTTP responses with a JSON `{"error": ...}` body.

use super::dto::ErrorResponse;
use crate::service::GameError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Server result type alias
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors surfaced over HTTP
#[derive(Debug, Error)]
pub enum ServerError {
    /// The word store is empty
    #[error("Words not loaded yet")]
    NotReady,
}

impl ServerError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotReady => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ServerError::NotReady => {
                tracing::warn!("Puzzle requested before any words were loaded");
            }
        }
    }
}

impl From<GameError> for ServerError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::NotReady => ServerError::NotReady,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
