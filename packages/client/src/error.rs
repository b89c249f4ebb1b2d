//! Client error definitions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server URL could not be used as a base URL
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport or decoding failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a problem description
    #[error("Server returned {status}: {description}")]
    Api { status: u16, description: String },

    /// Output could not be encoded
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
