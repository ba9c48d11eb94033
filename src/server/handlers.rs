//! HTTP Handlers

use super::dto::{HealthResponse, ValidateRequest, ValidateResponse, WordResponse};
use super::error::ServerResult;
use crate::service::GameService;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rand::RngCore;
use std::sync::Arc;

/// Shared state for game handlers
pub struct GameAppState<R> {
    pub service: Arc<GameService<R>>,
}

impl<R> Clone for GameAppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// GET /word
pub async fn get_word<R>(State(state): State<GameAppState<R>>) -> ServerResult<Json<WordResponse>>
where
    R: RngCore + Send + 'static,
{
    let puzzle = state.service.get_word()?;
    tracing::debug!(original = %puzzle.original(), scrambled = puzzle.scrambled(), "Puzzle issued");
    Ok(Json(WordResponse::from(&puzzle)))
}

/// POST /validate
///
/// A body that is not valid JSON of the expected shape counts as an
/// incorrect guess, never as a protocol error.
pub async fn validate<R>(
    State(state): State<GameAppState<R>>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Json<ValidateResponse>
where
    R: RngCore + Send + 'static,
{
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Malformed validate body");
            ValidateRequest::default()
        }
    };

    let result = state
        .service
        .validate_guess(req.original.as_deref(), req.answer.as_deref());

    Json(ValidateResponse {
        correct: result.correct,
    })
}

/// GET /health
pub async fn health<R>(State(state): State<GameAppState<R>>) -> Json<HealthResponse>
where
    R: RngCore + Send + 'static,
{
    Json(HealthResponse {
        status: "ok".to_string(),
        words: state.service.store().len(),
    })
}
