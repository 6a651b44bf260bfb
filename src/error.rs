//! Error types for tokenauth

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for tokenauth operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for auth client operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised by the auth client for any login or user-fetch failure
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No token is stored; raised before any request is sent
    #[error("not logged in")]
    NotLoggedIn,

    /// The server answered with a non-success status
    #[error("{message}")]
    RequestFailed { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// True when the failure means there is no usable session
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            AuthError::NotLoggedIn => true,
            AuthError::RequestFailed { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            AuthError::Network("Failed to connect to API".to_string())
        } else {
            AuthError::Network(err.to_string())
        }
    }
}

/// Token storage errors. These never escape the token store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine a data directory for token storage")]
    NoDataDir,

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
