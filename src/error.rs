// src/error.rs

//! Unified error handling for the client library.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Boxed underlying cause carried by a fetch failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A resource request failed at the transport level or returned a non-2xx status.
    ///
    /// Displays as the fixed per-operation message only (e.g. "Failed to fetch events").
    #[error("{message}")]
    Fetch {
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<BoxError>,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a fetch error for a response with a non-success status.
    pub fn fetch(message: impl Into<String>, status: u16) -> Self {
        Self::Fetch {
            message: message.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Create a fetch error for a request that never produced a response.
    pub fn fetch_failed(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Fetch {
            message: message.into(),
            status: None,
            source: Some(source.into()),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status carried by a fetch error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
