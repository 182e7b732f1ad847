//! # Solver Configuration
//!
//! Tunables for validation, inference and solution output. Every field has a
//! default, so an empty file (or no file at all) gives the standard behavior.
//!
//! ## File Format
//!
//! ```toml
//! # physolve.toml
//! confidence_floor = 0.9   # inference floor, 0.8..=1.0
//! gravity = 9.80665        # used when g must be assumed
//! auto_infer = true        # retry once with an inferred equation
//! result_precision = 4     # decimals in solution steps
//! ```
//!
//! ```rust
//! use phys_core::config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str("gravity = 9.8").unwrap();
//! assert_eq!(config.gravity, 9.8);
//! assert_eq!(config.confidence_floor, 0.8);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GRAVITY;
use crate::errors::{SolverError, SolverResult};

/// Lowest overlap inference may ever accept
pub const MIN_CONFIDENCE_FLOOR: f64 = 0.8;

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Minimum overlap for an inferred equation (may be raised, never lowered)
    pub confidence_floor: f64,
    /// Gravity assumed when `g` is needed but not given (m/s²)
    pub gravity: f64,
    /// Whether a failed validation triggers one inference retry
    pub auto_infer: bool,
    /// Decimal places shown in solution steps
    pub result_precision: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            confidence_floor: MIN_CONFIDENCE_FLOOR,
            gravity: DEFAULT_GRAVITY,
            auto_infer: true,
            result_precision: 3,
        }
    }
}

impl SolverConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> SolverResult<Self> {
        let config: SolverConfig =
            toml::from_str(toml_str).map_err(|e| SolverError::config("<inline>", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> SolverResult<Self> {
        let path_str = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| SolverError::config(&path_str, e.to_string()))?;
        let config: SolverConfig =
            toml::from_str(&contents).map_err(|e| SolverError::config(&path_str, e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path_str, ?config, "loaded solver config");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> SolverResult<()> {
        if !(MIN_CONFIDENCE_FLOOR..=1.0).contains(&self.confidence_floor) {
            return Err(SolverError::invalid_input(
                "confidence_floor",
                self.confidence_floor.to_string(),
                "must be between 0.8 and 1.0",
            ));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(SolverError::invalid_input(
                "gravity",
                self.gravity.to_string(),
                "must be a positive finite number",
            ));
        }
        if self.result_precision > 15 {
            return Err(SolverError::invalid_input(
                "result_precision",
                self.result_precision.to_string(),
                "at most 15 decimal places",
            ));
        }
        Ok(())
    }
}
