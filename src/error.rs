//! Error types for gateway request handling.
//!
//! This module defines the error taxonomy for the dispatch path: caller
//! validation failures, directory provider outcomes, and transport-level
//! faults, plus the configuration errors that can occur while constructing
//! a gateway.

use crate::directory::DirectoryError;

/// Main error type for request dispatch.
///
/// Every failure a dispatched request can produce is a variant here, so the
/// mapping from error to HTTP response can be written as a single exhaustive
/// match. Validation and directory errors convert automatically via `From`.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Payload validation failures, reported to the caller as 400 responses
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Failure outcomes reported by the directory provider
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Request body carried the base64 flag but did not decode
    #[error("Invalid base64 request body: {0}")]
    BodyDecode(#[from] base64::DecodeError),

    /// Decoded request body was not valid UTF-8
    #[error("Request body is not valid UTF-8: {0}")]
    BodyEncoding(#[from] std::string::FromUtf8Error),
}

/// Validation errors for the user-creation payload.
///
/// The `Display` string of each variant is the exact message returned to the
/// caller in the response body's `error` field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Request arrived without a body, or the body was blank
    #[error("Request body is required")]
    MissingBody,

    /// Body was present but did not parse as a flat string-to-string object
    #[error("Malformed request body: {detail}")]
    MalformedBody { detail: String },

    /// The `username` field was absent or empty
    #[error("Username is required")]
    MissingUsername,
}

/// Errors that can occur while building a gateway.
///
/// These are configuration mistakes caught at construction time; they never
/// occur during request dispatch.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// No user pool identifier was configured
    #[error("User pool identifier is required but not configured")]
    MissingUserPoolId,

    /// Configuration was present but unusable
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ValidationError {
    /// Create a malformed-body error from a parse failure
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self::MalformedBody {
            detail: detail.into(),
        }
    }
}

impl BuildError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type BuildResult<T> = Result<T, BuildError>;
