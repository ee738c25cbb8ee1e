//! Error type for the product model
//!
//! - [`ErrorCode`]: what kind of failure happened
//! - [`AppError`]: code + message + optional per-field details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::unknown_field("colour");
//! assert_eq!(err.code, ErrorCode::UnknownField);
//! ```

use crate::validation::FieldErrors;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Model error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Draft failed field validation
    ValidationFailed,
    /// Field name does not belong to the product form
    UnknownField,
    /// Malformed input (e.g. `key=value` without `=`)
    InvalidRequest,
}

impl ErrorCode {
    /// Default message for this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::UnknownField => "Unknown field",
            ErrorCode::InvalidRequest => "Invalid request",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Model error with structured code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, offending input)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::with_message(ErrorCode::UnknownField, format!("Unknown field: {}", name))
            .with_detail("field", name)
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a validation error carrying one detail entry per failing field
    pub fn validation(errors: &FieldErrors) -> Self {
        let names: Vec<&str> = errors.invalid_fields().iter().map(|f| f.name()).collect();
        let mut err = Self::with_message(
            ErrorCode::ValidationFailed,
            format!("Validation failed: {}", names.join(", ")),
        );
        for field in errors.invalid_fields() {
            err = err.with_detail(field.name(), field.message());
        }
        err
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        Self::validation(&errors)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ProductField;

    #[test]
    fn test_validation_error_details() {
        let mut errors = FieldErrors::default();
        errors.set(ProductField::Brand, true);
        errors.set(ProductField::Title, true);

        let err = AppError::validation(&errors);
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Validation failed: title, brand");

        let details = err.details.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(
            details["brand"],
            Value::from(ProductField::Brand.message())
        );
    }

    #[test]
    fn test_unknown_field() {
        let err = AppError::unknown_field("colour");
        assert_eq!(err.to_string(), "Unknown field: colour");
        assert_eq!(err.details.unwrap()["field"], Value::from("colour"));
    }
}
