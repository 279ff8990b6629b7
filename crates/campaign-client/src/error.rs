//! Error types for the campaign client.

use thiserror::Error;

/// Message shown when the server gives no usable explanation.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// A request that did not produce a usable response.
///
/// Every variant carries the human-readable message that was surfaced to the
/// user through the client's notifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Server answered with a non-2xx status.
    #[error("Request failed ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The request never got a response (DNS, refused connection, reset).
    #[error("Connection failed: {message}")]
    Transport {
        /// User-facing message.
        message: String,
    },

    /// A 2xx response whose body is not the expected envelope.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// User-facing message.
        message: String,
    },
}

impl RequestError {
    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::Status { message, .. }
            | Self::Transport { message }
            | Self::InvalidResponse { message } => message,
        }
    }

    /// HTTP status, if the server answered.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::InvalidResponse { .. } => None,
        }
    }

    /// Whether the server reported the resource as missing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Errors building the client from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is not an absolute http(s) URL.
    #[error("Invalid API base URL {url:?}: {message}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Pull a human-readable message out of an error response body.
///
/// Prefers a string `error` field, then a string `message` field, and falls
/// back to [`DEFAULT_ERROR_MESSAGE`].
pub(crate) fn extract_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return DEFAULT_ERROR_MESSAGE.to_string();
    };
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map_or_else(|| DEFAULT_ERROR_MESSAGE.to_string(), str::to_string)
}
