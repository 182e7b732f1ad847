//! # Solve Pipeline
//!
//! Runs one structured request end to end:
//!
//! 1. Resolve the equation (the category default when none is named)
//! 2. Normalize and validate the values
//! 3. If validation fails, infer a better equation and retry **once**
//! 4. Evaluate the chosen direction and reject non-finite results
//! 5. Attach warnings and a step-by-step walkthrough
//!
//! A request that cannot be solved with the given values is not an error; it
//! comes back as [`SolveOutcome::Rejected`] with everything the caller needs
//! to ask for more input. Hard failures (an unknown equation id, a direction
//! the equation does not support, a NaN result) are [`SolverError`]s.
//!
//! ```rust
//! use phys_core::config::SolverConfig;
//! use phys_core::solver::{solve_problem, SolveRequest};
//!
//! let request: SolveRequest = serde_json::from_str(
//!     r#"{"category": "dynamics", "equationId": "f1", "values": {"m": 2, "a": 3}, "solveFor": "F"}"#,
//! ).unwrap();
//! let solved = solve_problem(&request, &SolverConfig::default())
//!     .unwrap()
//!     .into_result()
//!     .unwrap();
//! assert_eq!(solved.result, 6.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::SolverConfig;
use crate::equations::{Category, Equation};
use crate::errors::{SolverError, SolverResult};
use crate::inference::{infer_with_floor, InferredEquation};
use crate::steps::{solution_steps, SolutionStep};
use crate::validator::{validate_with, ValidationResult};
use crate::values::Values;

/// A structured problem, as produced by a form or an interpretation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub category: Category,
    /// Defaults to the category's default equation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation_id: Option<String>,
    /// Known values; `null` entries are dropped
    #[serde(default, deserialize_with = "known_values")]
    pub values: Values,
    pub solve_for: String,
}

impl SolveRequest {
    pub fn new(category: Category, equation_id: Option<&str>, values: Values, solve_for: &str) -> Self {
        Self {
            category,
            equation_id: equation_id.map(str::to_string),
            values,
            solve_for: solve_for.to_string(),
        }
    }

    /// Parse a JSON request
    pub fn from_json(json: &str) -> SolverResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn known_values<'de, D>(deserializer: D) -> Result<Values, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Option<f64>> = BTreeMap::deserialize(deserializer)?;
    Ok(raw.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))).collect())
}

/// A successfully solved problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedProblem {
    pub result: f64,
    pub solve_for: String,
    /// The equation actually used (may differ from the request after inference)
    pub equation_id: String,
    pub category: Category,
    /// Values the formula ran on, after normalization and derivation
    pub normalized_values: Values,
    /// Set when the request's own equation was replaced by inference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred: Option<InferredEquation>,
    pub warnings: Vec<String>,
    pub steps: Vec<SolutionStep>,
}

/// Why a request could not be solved with the values given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    /// The equation whose validation is reported
    pub equation_id: String,
    pub solve_for: String,
    pub validation: ValidationResult,
    /// Whether an inference retry was attempted
    pub inference_attempted: bool,
    /// The equation inference proposed, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred: Option<InferredEquation>,
    pub confidence_floor: f64,
}

/// Result of running the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SolveOutcome {
    Solved(SolvedProblem),
    Rejected(Rejection),
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    /// Treat a rejection as an error.
    ///
    /// A failed inference becomes [`SolverError::LowConfidenceInference`]
    /// unless the chosen equation was right and only inputs are missing, which
    /// becomes [`SolverError::MissingVariables`].
    pub fn into_result(self) -> SolverResult<SolvedProblem> {
        match self {
            SolveOutcome::Solved(solved) => Ok(solved),
            SolveOutcome::Rejected(rejection) => Err(rejection.into_error()),
        }
    }
}

impl Rejection {
    pub fn into_error(self) -> SolverError {
        let target_in_equation =
            Equation::from_id(&self.equation_id).is_some_and(|eq| eq.has_variable(&self.solve_for));
        let inference_failed = self.inference_attempted && self.inferred.is_none();

        if inference_failed && (!target_in_equation || self.validation.missing.is_empty()) {
            return SolverError::LowConfidenceInference {
                solve_for: self.solve_for,
                floor: self.confidence_floor,
            };
        }
        if !self.validation.missing.is_empty() {
            return SolverError::missing_variables(self.equation_id, self.validation.missing);
        }
        SolverError::invalid_input("solveFor", self.solve_for, self.validation.errors.join("; "))
    }
}

/// Runs requests against one configuration.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the pipeline for one request.
    ///
    /// # Errors
    ///
    /// - [`SolverError::UnknownEquation`] if `equationId` is not registered
    /// - [`SolverError::UnsupportedSolveDirection`] if the validated equation
    ///   cannot be solved for the target
    /// - [`SolverError::NonFiniteResult`] if the formula produced NaN or an
    ///   infinity
    pub fn solve(&self, request: &SolveRequest) -> SolverResult<SolveOutcome> {
        let equation = match &request.equation_id {
            Some(id) => Equation::from_id(id).ok_or_else(|| SolverError::unknown_equation(id))?,
            None => {
                let default = request.category.default_equation();
                tracing::debug!(category = %request.category, equation = %default, "using category default equation");
                default
            }
        };
        let solve_for = request.solve_for.as_str();

        let validation = validate_with(&self.config, &request.values, equation.id(), solve_for, request.category);
        if validation.is_valid {
            return self.finish(equation, request.category, solve_for, validation, None);
        }

        tracing::info!(
            equation = %equation,
            solve_for,
            errors = ?validation.errors,
            "validation failed"
        );

        if !self.config.auto_infer {
            return Ok(self.reject(equation, solve_for, validation, false, None));
        }

        let Some(inferred) = infer_with_floor(&request.values, solve_for, self.config.confidence_floor) else {
            return Ok(self.reject(equation, solve_for, validation, true, None));
        };

        let Some(retry_equation) = Equation::from_id(&inferred.equation_id) else {
            return Err(SolverError::unknown_equation(&inferred.equation_id));
        };
        if retry_equation == equation && inferred.category == request.category {
            return Ok(self.reject(equation, solve_for, validation, true, Some(inferred)));
        }

        tracing::info!(
            equation = %retry_equation,
            category = %inferred.category,
            confidence = inferred.confidence,
            "retrying with inferred equation"
        );

        let retry = validate_with(&self.config, &request.values, retry_equation.id(), solve_for, inferred.category);
        if retry.is_valid {
            let category = inferred.category;
            return self.finish(retry_equation, category, solve_for, retry, Some(inferred));
        }

        // Only one retry; report the second failure
        Ok(self.reject(retry_equation, solve_for, retry, true, Some(inferred)))
    }

    fn finish(
        &self,
        equation: Equation,
        category: Category,
        solve_for: &str,
        validation: ValidationResult,
        inferred: Option<InferredEquation>,
    ) -> SolverResult<SolveOutcome> {
        let normalized_values = validation.normalized_values.unwrap_or_default();
        let result = equation.solve(&normalized_values, solve_for)?;

        if !result.is_finite() {
            return Err(SolverError::NonFiniteResult {
                equation_id: equation.id().to_string(),
                target: solve_for.to_string(),
                value: result.to_string(),
            });
        }

        tracing::info!(equation = %equation, solve_for, result, "solved");

        let steps = solution_steps(
            equation,
            &normalized_values,
            solve_for,
            result,
            self.config.result_precision,
        );

        Ok(SolveOutcome::Solved(SolvedProblem {
            result,
            solve_for: solve_for.to_string(),
            equation_id: equation.id().to_string(),
            category,
            normalized_values,
            inferred,
            warnings: validation.warnings,
            steps,
        }))
    }

    fn reject(
        &self,
        equation: Equation,
        solve_for: &str,
        validation: ValidationResult,
        inference_attempted: bool,
        inferred: Option<InferredEquation>,
    ) -> SolveOutcome {
        SolveOutcome::Rejected(Rejection {
            equation_id: equation.id().to_string(),
            solve_for: solve_for.to_string(),
            validation,
            inference_attempted,
            inferred,
            confidence_floor: self.config.confidence_floor,
        })
    }
}

/// Run one request with `config`.
pub fn solve_problem(request: &SolveRequest, config: &SolverConfig) -> SolverResult<SolveOutcome> {
    Solver::new(config.clone()).solve(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::values_from;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_null_values_dropped() {
        let request = SolveRequest::from_json(
            r#"{"category": "momentum", "equationId": "j2", "values": {"m": 0.5, "J": null}, "solveFor": "J"}"#,
        )
        .unwrap();
        assert_eq!(request.values, values_from(&[("m", 0.5)]));
    }

    #[test]
    fn test_default_equation_for_category() {
        let request = SolveRequest::new(Category::Dynamics, None, values_from(&[("m", 2.0), ("a", 3.0)]), "F");
        let solved = Solver::default().solve(&request).unwrap().into_result().unwrap();
        assert_eq!(solved.equation_id, "f1");
        assert!(approx_eq(solved.result, 6.0, 1e-12));
        assert!(solved.inferred.is_none());
    }

    #[test]
    fn test_unknown_equation_is_error() {
        let request = SolveRequest::new(Category::Dynamics, Some("zz9"), Values::new(), "F");
        let err = Solver::default().solve(&request).unwrap_err();
        assert_eq!(err, SolverError::unknown_equation("zz9"));
    }

    #[test]
    fn test_inference_disabled() {
        let config = SolverConfig {
            auto_infer: false,
            ..SolverConfig::default()
        };
        let values = values_from(&[("m", 0.5), ("v0", 30.0), ("v", -40.0)]);
        let request = SolveRequest::new(Category::Kinematics, Some("v1"), values, "J");
        let outcome = Solver::new(config).solve(&request).unwrap();
        let SolveOutcome::Rejected(rejection) = outcome else {
            panic!("expected rejection");
        };
        assert!(!rejection.inference_attempted);
        assert_eq!(rejection.equation_id, "v1");
    }

    #[test]
    fn test_low_confidence_rejection() {
        let request = SolveRequest::new(Category::Waves, Some("wave_v1"), values_from(&[("m", 1.0)]), "J");
        let err = Solver::default().solve(&request).unwrap().into_result().unwrap_err();
        assert_eq!(err.error_code(), "LOW_CONFIDENCE_INFERENCE");
    }

    #[test]
    fn test_outcome_serialization_tag() {
        let request = SolveRequest::new(Category::Dynamics, Some("f1"), values_from(&[("m", 2.0), ("a", 3.0)]), "F");
        let outcome = Solver::default().solve(&request).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "solved");
        assert_eq!(json["equationId"], "f1");
        assert_eq!(json["result"], 6.0);
    }
}
