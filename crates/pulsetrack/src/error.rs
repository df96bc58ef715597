//! Error types for pulsetrack.
//!
//! This module defines all error types used throughout the pulsetrack crate.
//! Failures are kept as a typed union so callers can distinguish local
//! validation rejections from remote API failures instead of logging and
//! discarding them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pulsetrack operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Form Errors ===
    /// One or more required form fields are missing or invalid.
    #[error("validation failed for field(s): {}", fields.join(", "))]
    Validation {
        /// Names of the fields in error state.
        fields: Vec<String>,
    },

    // === Remote API Errors ===
    /// The HTTP request to the remote API failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API rejected the operation.
    #[error("remote API error: {}", messages.join("; "))]
    Remote {
        /// Error messages returned by the API.
        messages: Vec<String>,
    },

    /// The remote API returned a response we could not interpret.
    #[error("unexpected API response: {message}")]
    InvalidResponse {
        /// Description of what was wrong with the response.
        message: String,
    },

    // === Session Errors ===
    /// No signed-in session is available.
    #[error("not signed in: {message}")]
    NotSignedIn {
        /// Instructions for establishing a session.
        message: String,
    },

    // === Object Storage Errors ===
    /// A photo upload to object storage failed.
    #[error("upload failed for key '{key}': {message}")]
    Upload {
        /// The storage key that was being written.
        key: String,
        /// Description of what went wrong.
        message: String,
    },

    /// A photo file could not be read.
    #[error("failed to read photo at {path}: {source}")]
    PhotoRead {
        /// Path to the photo file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for pulsetrack operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a validation error for the given field names.
    #[must_use]
    pub fn validation(fields: Vec<String>) -> Self {
        Self::Validation { fields }
    }

    /// Create a remote API error from a list of messages.
    #[must_use]
    pub fn remote(messages: Vec<String>) -> Self {
        Self::Remote { messages }
    }

    /// Create an invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a not-signed-in error with sign-in instructions.
    #[must_use]
    pub fn not_signed_in(message: impl Into<String>) -> Self {
        Self::NotSignedIn {
            message: message.into(),
        }
    }

    /// Create an upload error for the given storage key.
    #[must_use]
    pub fn upload(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upload {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error is a local form-validation rejection.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error came back from the remote API.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Remote { .. } | Self::Http(_) | Self::InvalidResponse { .. }
        )
    }

    /// Check if this error indicates a missing session.
    #[must_use]
    pub fn is_not_signed_in(&self) -> bool {
        matches!(self, Self::NotSignedIn { .. })
    }
}
