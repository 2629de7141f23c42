//! Client error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Username must not be empty")]
    EmptyUsername,
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
