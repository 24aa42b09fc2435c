//! Core error types for the ForestiFi dashboard.
//!
//! This module defines provider-agnostic error types. Provider-specific
//! failures (network, fixtures, whatever backs the data) are converted to
//! these types at the provider boundary.

use chrono::ParseError as ChronoParseError;
use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data provider operation failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Failures raised by asynchronous data providers.
///
/// The fixture provider never fails; the variants keep the boundary
/// stable for real provider implementations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider could not produce the requested dataset.
    #[error("Failed to fetch {0}")]
    FetchFailed(String),

    /// The requested record does not exist in the provider's dataset.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The provider is not reachable at all.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
