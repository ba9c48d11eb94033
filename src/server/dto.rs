//! API DTOs (Data Transfer Objects)
//!
//! Shared by the server handlers and the HTTP client.

use crate::core::Puzzle;
use serde::{Deserialize, Serialize};

/// Response for GET /word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResponse {
    pub scrambled: String,
    pub original: String,
}

impl From<&Puzzle> for WordResponse {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            scrambled: puzzle.scrambled().to_string(),
            original: puzzle.original().text().to_string(),
        }
    }
}

/// Request for POST /validate
///
/// Both fields are optional on the wire; a missing field makes the guess
/// incorrect rather than the request invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Response for POST /validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub correct: bool,
}

/// Error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response for GET /health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub words: usize,
}
