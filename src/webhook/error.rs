//! Error types for webhook operations.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the connection level. Status codes are not
/// errors here; they are interpreted by the webhook operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The URL cannot be used for a request.
    ///
    /// This indicates a configuration error rather than a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for request body construction.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The payload could not be serialized as JSON.
    #[error("Failed to serialize payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The generated content type is not a valid header value.
    #[error("Invalid content type: {0}")]
    ContentType(#[from] http::header::InvalidHeaderValue),
}

/// Error type for webhook operations.
///
/// Each variant maps to one stage of a call: encoding the request,
/// sending it, or interpreting the response.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Building the request body failed.
    #[error("Failed to encode request: {0}")]
    Encoding(#[from] EncodeError),

    /// The request could not be delivered.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The endpoint answered with an unexpected status code.
    #[error("Bad webhook response (expected status {expected}, got {status}): {body}")]
    Api {
        /// Status code returned by the endpoint
        status: http::StatusCode,
        /// Status code the operation expects on success
        expected: http::StatusCode,
        /// Raw response body
        body: String,
    },

    /// A success response carried a body that could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl WebhookError {
    /// Returns the HTTP status for [`WebhookError::Api`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
