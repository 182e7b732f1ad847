//! # Error Types
//!
//! Structured error types for phys_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Expected conditions (missing inputs, a category mismatch, a zero value)
//! are reported through [`ValidationResult`](crate::validator::ValidationResult)
//! instead. Only conditions a caller cannot fix by supplying more data end up
//! here, plus the two recoverable variants used by
//! [`SolveOutcome::into_result`](crate::solver::SolveOutcome::into_result).
//!
//! ## Example
//!
//! ```rust
//! use phys_core::errors::{SolverError, SolverResult};
//!
//! fn check_floor(floor: f64) -> SolverResult<()> {
//!     if !(0.8..=1.0).contains(&floor) {
//!         return Err(SolverError::invalid_input(
//!             "confidence_floor",
//!             floor.to_string(),
//!             "must be between 0.8 and 1.0",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_floor(0.5).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for phys_core operations
pub type SolverResult<T> = Result<T, SolverError>;

/// Structured error type for solver operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SolverError {
    /// Equation id is not in the registry (caller bug)
    #[error("Unknown equation: {equation_id}")]
    UnknownEquation { equation_id: String },

    /// The equation exists but cannot be solved for this variable
    #[error("Equation {equation_id} cannot be solved for '{target}' (supported: {})", supported.join(", "))]
    UnsupportedSolveDirection {
        equation_id: String,
        target: String,
        supported: Vec<String>,
    },

    /// Inputs are insufficient for the requested solve
    #[error("Missing required variables for {equation_id}: {}", missing.join(", "))]
    MissingVariables {
        equation_id: String,
        missing: Vec<String>,
    },

    /// No registry equation matched the inputs well enough to guess
    #[error("No equation can solve for '{solve_for}' with confidence >= {floor}")]
    LowConfidenceInference { solve_for: String, floor: f64 },

    /// The formula evaluated to NaN or an infinity
    #[error("Solving {equation_id} for '{target}' produced a non-finite result ({value})")]
    NonFiniteResult {
        equation_id: String,
        target: String,
        value: String,
    },

    /// An input value is invalid (out of range, malformed, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Configuration could not be read or parsed
    #[error("Config error: {path} - {reason}")]
    Config { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl SolverError {
    /// Create an UnknownEquation error
    pub fn unknown_equation(equation_id: impl Into<String>) -> Self {
        SolverError::UnknownEquation {
            equation_id: equation_id.into(),
        }
    }

    /// Create an UnsupportedSolveDirection error
    pub fn unsupported_direction(
        equation_id: impl Into<String>,
        target: impl Into<String>,
        supported: &[&str],
    ) -> Self {
        SolverError::UnsupportedSolveDirection {
            equation_id: equation_id.into(),
            target: target.into(),
            supported: supported.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a MissingVariables error
    pub fn missing_variables(equation_id: impl Into<String>, missing: Vec<String>) -> Self {
        SolverError::MissingVariables {
            equation_id: equation_id.into(),
            missing,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SolverError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SolverError::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the user can recover by supplying different inputs
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SolverError::MissingVariables { .. } | SolverError::LowConfidenceInference { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SolverError::UnknownEquation { .. } => "UNKNOWN_EQUATION",
            SolverError::UnsupportedSolveDirection { .. } => "UNSUPPORTED_SOLVE_DIRECTION",
            SolverError::MissingVariables { .. } => "MISSING_VARIABLES",
            SolverError::LowConfidenceInference { .. } => "LOW_CONFIDENCE_INFERENCE",
            SolverError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            SolverError::InvalidInput { .. } => "INVALID_INPUT",
            SolverError::Config { .. } => "CONFIG_ERROR",
            SolverError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for SolverError {
    fn from(err: serde_json::Error) -> Self {
        SolverError::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SolverError::unsupported_direction("x1", "t", &["x", "x0", "v0", "a"]);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnsupportedSolveDirection\""));
        let roundtrip: SolverError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SolverError::unknown_equation("zz9").error_code(), "UNKNOWN_EQUATION");
        assert_eq!(
            SolverError::missing_variables("f1", vec!["m".into()]).error_code(),
            "MISSING_VARIABLES"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(SolverError::missing_variables("f1", vec!["a".into()]).is_recoverable());
        assert!(!SolverError::unknown_equation("nope").is_recoverable());
        assert!(!SolverError::unsupported_direction("x1", "t", &["x"]).is_recoverable());
    }

    #[test]
    fn test_display_lists_symbols() {
        let err = SolverError::missing_variables("j2", vec!["vi".into(), "vf".into()]);
        assert_eq!(err.to_string(), "Missing required variables for j2: vi, vf");
    }
}
