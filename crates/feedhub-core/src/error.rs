//! Error types for feedhub-core.
//!
//! Every fallible operation in the crate returns [`Result`]. The UI turns
//! errors into inline messages with `to_string()`.

use thiserror::Error;

/// The main error type for Feedhub operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// The key-value backend rejected a read or write.
    #[error("storage error on '{key}': {message}")]
    Storage {
        /// Key being accessed.
        key: String,
        /// Description of what went wrong.
        message: String,
    },

    /// The stored value changed between read and write.
    #[error("'{key}' was modified by another writer")]
    Conflict {
        /// Key that was clobbered.
        key: String,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Domain Errors ===
    /// A required field was empty or out of range.
    #[error("{field}: {message}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// No entity with the given id exists in the collection.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Entity kind, e.g. `feedback`.
        kind: &'static str,
        /// Requested id.
        id: String,
    },

    /// The active data source cannot perform the operation.
    #[error("operation not supported by this data source: {operation}")]
    Unsupported {
        /// Name of the operation.
        operation: &'static str,
    },

    // === Network Errors ===
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Server-provided message or a body excerpt.
        message: String,
    },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    Config(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for Feedhub operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl Error {
    /// Create a storage error for `key`.
    #[must_use]
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a validation error for `field`.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create an unsupported-operation error.
    #[must_use]
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Check if this error means the entity does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from input validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error is a lost-update conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
