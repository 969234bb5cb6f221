//! # Error Types
//!
//! Structured error types for eurocalc_core. Formulas only ever fail with
//! [`CalcError::NegativeValue`]; the remaining variants belong to the
//! registry and profile lookups used by front ends.
//!
//! ## Example
//!
//! ```rust
//! use eurocalc_core::errors::{CalcError, CalcResult};
//!
//! fn check_depth(d: f64) -> CalcResult<()> {
//!     if d < 0.0 {
//!         return Err(CalcError::negative_value("d", d));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_depth(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for eurocalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for formula and lookup operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A physical quantity that must be non-negative was negative
    #[error("Negative value for '{field}': {value} - value must be zero or positive")]
    NegativeValue { field: String, value: f64 },

    /// A named input could not be used (unparsable, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required named input was not supplied
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    /// A named input was supplied that the clause does not take
    #[error("Unexpected input: {field}")]
    UnexpectedInput { field: String },

    /// No clause with this label in the given document
    #[error("Clause not found: ({label}) in {document}")]
    ClauseNotFound { document: String, label: String },

    /// Profile name not present in the lookup tables
    #[error("Profile not found: {name}")]
    ProfileNotFound { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a NegativeValue error
    pub fn negative_value(field: impl Into<String>, value: f64) -> Self {
        CalcError::NegativeValue {
            field: field.into(),
            value,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingInput error
    pub fn missing_input(field: impl Into<String>) -> Self {
        CalcError::MissingInput { field: field.into() }
    }

    /// Create an UnexpectedInput error
    pub fn unexpected_input(field: impl Into<String>) -> Self {
        CalcError::UnexpectedInput { field: field.into() }
    }

    /// Create a ClauseNotFound error
    pub fn clause_not_found(document: impl Into<String>, label: impl Into<String>) -> Self {
        CalcError::ClauseNotFound {
            document: document.into(),
            label: label.into(),
        }
    }

    /// Create a ProfileNotFound error
    pub fn profile_not_found(name: impl Into<String>) -> Self {
        CalcError::ProfileNotFound { name: name.into() }
    }

    /// True for errors caused by the caller's numeric input rather than a lookup
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::NegativeValue { .. }
                | CalcError::InvalidInput { .. }
                | CalcError::MissingInput { .. }
                | CalcError::UnexpectedInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NegativeValue { .. } => "NEGATIVE_VALUE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingInput { .. } => "MISSING_INPUT",
            CalcError::UnexpectedInput { .. } => "UNEXPECTED_INPUT",
            CalcError::ClauseNotFound { .. } => "CLAUSE_NOT_FOUND",
            CalcError::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::negative_value("v_ed", -100000.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"NegativeValue\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::negative_value("a_s", -100.0);
        assert_eq!(
            error.to_string(),
            "Negative value for 'a_s': -100 - value must be zero or positive"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_input("d").error_code(), "MISSING_INPUT");
        assert_eq!(CalcError::profile_not_found("IPE 999").error_code(), "PROFILE_NOT_FOUND");
        assert!(CalcError::negative_value("d", -1.0).is_input_error());
        assert!(!CalcError::clause_not_found("EN 1992-1-1:2004", "1.1").is_input_error());
    }
}
