//! # Error Types
//!
//! Structured error types for convert_core. The binding controller never
//! surfaces these to its caller: an unparsable field blanks its dependent
//! field and an unknown identifier falls back to the registry defaults. The
//! errors exist for the fallible lookups, the number parser and settings
//! loading, where a front end may want to tell the user what went wrong.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::errors::{ConvertError, ConvertResult};
//! use convert_core::format::parse_number;
//!
//! fn positive(text: &str) -> ConvertResult<f64> {
//!     let value = parse_number(text)?;
//!     if value <= 0.0 {
//!         return Err(ConvertError::invalid_number(text));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(positive("-").is_err());
//! assert_eq!(positive("2.5").unwrap(), 2.5);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for convert_core operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Structured error type for conversion operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvertError {
    /// Text does not start with a number
    #[error("Invalid number: '{text}'")]
    InvalidNumber { text: String },

    /// Category id is not in the registry
    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: String },

    /// Unit id is not part of the given category
    #[error("Unit not found: '{unit_id}' in category '{category_id}'")]
    UnitNotFound {
        category_id: String,
        unit_id: String,
    },

    /// Settings file could not be read
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings parsed but reference something the registry does not know
    #[error("Invalid settings for '{field}': {reason}")]
    InvalidSettings { field: String, reason: String },
}

impl ConvertError {
    /// Create an InvalidNumber error
    pub fn invalid_number(text: impl Into<String>) -> Self {
        ConvertError::InvalidNumber { text: text.into() }
    }

    /// Create a CategoryNotFound error
    pub fn category_not_found(category_id: impl Into<String>) -> Self {
        ConvertError::CategoryNotFound {
            category_id: category_id.into(),
        }
    }

    /// Create a UnitNotFound error
    pub fn unit_not_found(category_id: impl Into<String>, unit_id: impl Into<String>) -> Self {
        ConvertError::UnitNotFound {
            category_id: category_id.into(),
            unit_id: unit_id.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidSettings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the binding controller recovers from this error on its own
    /// (blank the dependent field or fall back to a default).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidNumber { .. }
                | ConvertError::CategoryNotFound { .. }
                | ConvertError::UnitNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::InvalidNumber { .. } => "INVALID_NUMBER",
            ConvertError::CategoryNotFound { .. } => "CATEGORY_NOT_FOUND",
            ConvertError::UnitNotFound { .. } => "UNIT_NOT_FOUND",
            ConvertError::FileError { .. } => "FILE_ERROR",
            ConvertError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ConvertError::InvalidSettings { .. } => "INVALID_SETTINGS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ConvertError::unit_not_found("length", "furlong");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnitNotFound\""));
        let roundtrip: ConvertError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ConvertError::invalid_number("-").error_code(), "INVALID_NUMBER");
        assert_eq!(ConvertError::category_not_found("pressure").error_code(), "CATEGORY_NOT_FOUND");
        assert_eq!(
            ConvertError::invalid_settings("initial_category", "unknown").error_code(),
            "INVALID_SETTINGS"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(ConvertError::invalid_number("abc").is_recoverable());
        assert!(ConvertError::category_not_found("x").is_recoverable());
        assert!(!ConvertError::file_error("open", "cfg.json", "missing").is_recoverable());
    }

    #[test]
    fn test_display() {
        let error = ConvertError::unit_not_found("mass", "stone");
        assert_eq!(error.to_string(), "Unit not found: 'stone' in category 'mass'");
    }
}
