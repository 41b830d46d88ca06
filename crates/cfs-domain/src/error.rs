//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Configuration Store Service
#[derive(Error, Debug)]
pub enum Error {
    /// Resource not found (backing store file at load time, or a named record)
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Backing store content is not valid JSON or has the wrong shape
    #[error("Format error: {message}")]
    Format {
        /// Description of the format violation
        message: String,
    },

    /// Invalid caller input (malformed search query, record missing fields)
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the invalid input
        message: String,
    },

    /// Disk write failed during a mutating operation
    ///
    /// The in-memory mutation has already been applied when this is
    /// returned, so memory and disk may disagree until the next successful
    /// persist.
    #[error("Persist error: {message}")]
    Persist {
        /// Description of the persistence failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Service configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },
}

impl Error {
    /// Create a not-found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Error::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a format error
    pub fn format<S: Into<String>>(message: S) -> Self {
        Error::Format {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Create a persist error without a source
    pub fn persist<S: Into<String>>(message: S) -> Self {
        Error::Persist {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persist error wrapping a source error
    pub fn persist_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Persist {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Whether this error maps to a caller-level input problem
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
