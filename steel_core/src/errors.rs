//! # Error Types
//!
//! Structured error types for steel_core. Every variant carries enough
//! context to understand and fix the problem programmatically, and all
//! variants serialize cleanly so errors can travel through the same JSON
//! boundary as results.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for steel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong.
/// Note that an exhausted connection search is NOT an error: see
/// `ConnectionSolution::status`, which callers must branch on.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Section not found in the catalog
    #[error("Section not found: {section_name}")]
    SectionNotFound { section_name: String },

    /// A derived section property could not be computed; the section
    /// must be skipped, never substituted with a default
    #[error("Cannot derive '{property}' for section '{section_name}': {reason}")]
    DerivationFailed {
        section_name: String,
        property: String,
        reason: String,
    },

    /// Connection geometry below a code minimum (spacing, edge distance)
    #[error("Geometry violation: {constraint} = {actual}, required >= {required}")]
    GeometryViolation {
        constraint: String,
        actual: String,
        required: String,
    },

    /// Calculation failed (degenerate geometry, unstable configuration, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(section_name: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            section_name: section_name.into(),
        }
    }

    /// Create a DerivationFailed error
    pub fn derivation_failed(
        section_name: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::DerivationFailed {
            section_name: section_name.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }

    /// Create a GeometryViolation error
    pub fn geometry_violation(
        constraint: impl Into<String>,
        actual: impl Into<String>,
        required: impl Into<String>,
    ) -> Self {
        CalcError::GeometryViolation {
            constraint: constraint.into(),
            actual: actual.into(),
            required: required.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::DerivationFailed { .. } => "DERIVATION_FAILED",
            CalcError::GeometryViolation { .. } => "GEOMETRY_VIOLATION",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_m", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::section_not_found("H-999").error_code(),
            "SECTION_NOT_FOUND"
        );
        assert_eq!(
            CalcError::derivation_failed("H-300", "ry", "Iy missing").error_code(),
            "DERIVATION_FAILED"
        );
        assert_eq!(
            CalcError::geometry_violation("pitch", "40", "53.4").error_code(),
            "GEOMETRY_VIOLATION"
        );
    }

    #[test]
    fn test_geometry_violation_message() {
        let error = CalcError::geometry_violation("pitch_mm", "40.0", "53.4");
        let msg = error.to_string();
        assert!(msg.contains("pitch_mm"));
        assert!(msg.contains("53.4"));
    }
}
