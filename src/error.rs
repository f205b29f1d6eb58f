//! Error types for IntelliSQL.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for IntelliSQL operations.
#[derive(Error, Debug)]
pub enum IntelliSqlError {
    /// Language model errors (network, auth, quota, malformed response).
    #[error("Translation error: {0}")]
    Translation(String),

    /// Statement execution errors (syntax errors, missing tables, constraint violations).
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration errors (invalid config file, unknown provider, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, I/O on the terminal, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntelliSqlError {
    /// Creates a translation error with the given message.
    pub fn translation(msg: impl Into<String>) -> Self {
        Self::Translation(msg.into())
    }

    /// Creates an execution error with the given message.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the bare message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Translation(msg)
            | Self::Execution(msg)
            | Self::Config(msg)
            | Self::Internal(msg) => msg,
        }
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Translation(_) => "Translation Error",
            Self::Execution(_) => "Execution Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

impl From<sqlx::Error> for IntelliSqlError {
    fn from(e: sqlx::Error) -> Self {
        match e.as_database_error() {
            Some(db_error) => Self::Execution(db_error.message().to_string()),
            None => Self::Execution(e.to_string()),
        }
    }
}

/// Result type alias using IntelliSqlError.
pub type Result<T> = std::result::Result<T, IntelliSqlError>;
