//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can signal: rejected inputs, storage
//! failures and configuration problems.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Validation failures leave the record untouched; storage failures leave
/// the in-memory record untouched. Both are recoverable per operation.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::Validation {
///     field: "hours_worked".to_string(),
///     reason: "must be between 0 and 12".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid value for 'hours_worked': must be between 0 and 12"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An input violated its allowed range or a required-field rule.
    #[error("Invalid value for '{field}': {reason}")]
    Validation {
        /// The field that was rejected.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A record store operation failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Builds a [`PayrollError::Validation`] for the given field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Builds a [`PayrollError::Storage`] with the given message.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Builds a [`PayrollError::Validation`] for a value whose derived
    /// figures would not fit in a `Decimal`.
    pub fn too_large(field: impl Into<String>) -> Self {
        Self::validation(field, "value too large")
    }

    /// Returns true if this error rejected an input value.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true if this error came from the record store.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

impl From<sqlx::Error> for PayrollError {
    fn from(err: sqlx::Error) -> Self {
        Self::storage(err.to_string())
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
