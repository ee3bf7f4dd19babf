//! Error types shared by the data-access layer and the views.

use thiserror::Error;

use crate::requests::ErrorBody;

/// Text shown when a failure carries no message from the server.
pub const GENERIC_FAILURE_MESSAGE: &str = "Ocorreu um erro, tente novamente em alguns instantes.";

/// Result type alias using the crate's API error.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single call to the exam API.
///
/// Calls are never retried; each variant only decides what the user is told.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server returned status {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// A response arrived but its body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built (body serialization, headers).
    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Maps a non-success answer. The server's message is kept when the body
    /// is a JSON object with a non-empty `message`; any other body is ignored.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|body| body.message)
            .filter(|message| !message.is_empty());
        ApiError::Server { status, message }
    }

    /// Message suitable for a notification: the server's own message when it
    /// sent one, the generic retry-later text otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
