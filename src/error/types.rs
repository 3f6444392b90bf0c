//! Error type definitions
//!
//! The failure surface of this application is small: configuration can be
//! malformed, the page template can be broken, and the server can fail to
//! bind. Everything else is the framework's business.

use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// Template rendering errors
    #[error("Template render failed: {details}")]
    Template {
        /// Detailed error description
        details: String,
    },

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a template rendering error
    pub fn template<S: Into<String>>(details: S) -> Self {
        Self::Template {
            details: details.into(),
        }
    }
}
