//! Error types for the Petfinder client core

use crate::session::DecodeError;
use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Petfinder client error types
#[derive(Error, Debug)]
pub enum Error {
    /// The authentication token could not be decoded.
    ///
    /// Surfaced by `SessionManager::login`; during startup the session
    /// manager recovers from this locally instead of returning it.
    #[error("authentication token rejected: {0}")]
    Decode(#[from] DecodeError),

    #[error("network error: {0}. Check your internet connection.")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when this error came from the remote API rather than this client
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
