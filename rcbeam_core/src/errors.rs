//! # Error Types
//!
//! Structured error types for rcbeam_core. Every variant describes a violated
//! precondition precisely enough for a calling form or prompt loop to show a
//! message and ask again. None of them is fatal.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(CalcError::non_positive("width_mm", width_mm, "Width must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-300.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rcbeam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An enumerated choice (concrete class, ...) is outside the known set
    #[error("Invalid selection for '{field}': {value} is not one of the known options")]
    InvalidSelection { field: String, value: String },

    /// A quantity that must be strictly positive is not, or is out of range
    #[error("Invalid value for '{field}': {value} - {reason}")]
    NonPositiveValue {
        field: String,
        value: f64,
        reason: String,
    },

    /// The tension face carries no bars, so there is nothing to design
    #[error("Empty reinforcement on {face} face: {reason}")]
    EmptyReinforcement { face: String, reason: String },

    /// The section cannot be built with the given cover and bar layout
    #[error("Geometrically infeasible section: {reason} (d = {d_eff_mm:.1} mm, d2 = {dc_eff_mm:.1} mm)")]
    GeometricInfeasibility {
        reason: String,
        d_eff_mm: f64,
        dc_eff_mm: f64,
    },

    /// An input value is invalid for a reason not covered above
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidSelection error
    pub fn invalid_selection(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InvalidSelection {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a NonPositiveValue error
    pub fn non_positive(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::NonPositiveValue {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create an EmptyReinforcement error
    pub fn empty_reinforcement(face: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::EmptyReinforcement {
            face: face.into(),
            reason: reason.into(),
        }
    }

    /// Create a GeometricInfeasibility error
    pub fn geometric_infeasibility(reason: impl Into<String>, d_eff_mm: f64, dc_eff_mm: f64) -> Self {
        CalcError::GeometricInfeasibility {
            reason: reason.into(),
            d_eff_mm,
            dc_eff_mm,
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

    /// Check if the caller can fix this by correcting its input and retrying
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CalcError::SerializationError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidSelection { .. } => "INVALID_SELECTION",
            CalcError::NonPositiveValue { .. } => "NON_POSITIVE_VALUE",
            CalcError::EmptyReinforcement { .. } => "EMPTY_REINFORCEMENT",
            CalcError::GeometricInfeasibility { .. } => "GEOMETRIC_INFEASIBILITY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
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
