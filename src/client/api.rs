//! Game server transport
//!
//! The [`GameApi`] trait is the seam between the session driver and the
//! network; [`HttpGameApi`] talks to the real server with `reqwest`.

use crate::core::{Puzzle, Word, WordError};
use crate::server::dto::{ErrorResponse, ValidateRequest, ValidateResponse, WordResponse};
use reqwest::StatusCode;

/// Errors from talking to the game server
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("server returned {status}: {message}")]
    Server { status: StatusCode, message: String },

    /// The server sent a puzzle with an empty word
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(#[from] WordError),
}

/// Client-side view of the game service
#[trait_variant::make(GameApi: Send)]
pub trait LocalGameApi {
    /// GET /word
    async fn fetch_puzzle(&self) -> Result<Puzzle, ClientError>;

    /// POST /validate
    async fn validate(&self, original: &str, answer: &str) -> Result<bool, ClientError>;
}

/// `reqwest`-backed game server client
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGameApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Turn a non-success response into `ClientError::Server`
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Err(ClientError::Server { status, message })
}

impl GameApi for HttpGameApi {
    async fn fetch_puzzle(&self) -> Result<Puzzle, ClientError> {
        let response = self.client.get(self.url("/word")).send().await?;
        let body: WordResponse = error_for_status(response).await?.json().await?;

        let original = Word::new(body.original)?;
        Ok(Puzzle::new(original, body.scrambled))
    }

    async fn validate(&self, original: &str, answer: &str) -> Result<bool, ClientError> {
        let request = ValidateRequest {
            original: Some(original.to_string()),
            answer: Some(answer.to_string()),
        };
        let response = self
            .client
            .post(self.url("/validate"))
            .json(&request)
            .send()
            .await?;
        let body: ValidateResponse = error_for_status(response).await?.json().await?;

        Ok(body.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let api = HttpGameApi::new("http://localhost:3000/");
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.url("/word"), "http://localhost:3000/word");
    }

    #[test]
    fn server_error_message() {
        let err = ClientError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Words not loaded yet".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server returned 500 Internal Server Error: Words not loaded yet"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let api = HttpGameApi::new("http://127.0.0.1:1");
        let err = GameApi::fetch_puzzle(&api).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
