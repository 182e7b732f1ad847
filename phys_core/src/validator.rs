//! # Input Validator
//!
//! Decides whether a set of values is sufficient to solve a chosen equation
//! for a chosen variable, before any formula runs.
//!
//! Validation never fails with an `Err`; every problem is reported inside the
//! [`ValidationResult`] so the caller can show all of them at once:
//!
//! - **errors** make the result invalid (unknown equation, missing inputs,
//!   a target the equation does not contain)
//! - **warnings** never block (category mismatch, zero values, values filled
//!   in by a [derivation rule](crate::derivations))
//! - **suggestions** tell the caller what to supply next
//!
//! ```rust
//! use phys_core::equations::Category;
//! use phys_core::validator::validate;
//! use phys_core::values::values_from;
//!
//! let values = values_from(&[("m", 0.5), ("v0", 30.0), ("v", -40.0)]);
//! let result = validate(&values, "j2", "J", Category::Momentum);
//! assert!(result.is_valid);
//! assert_eq!(result.normalized_values.unwrap()["vi"], 30.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::derivations;
use crate::equations::{requirement, Category};
use crate::normalizer::normalize;
use crate::values::{is_known, Values};

/// Outcome of validating one solve request.
///
/// `is_valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    /// Inputs after alias normalization and derivation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_values: Option<Values>,
    /// The equation's own category when it differs from the requested one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_equation_id: Option<String>,
    /// Required variables that are still missing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl ValidationResult {
    fn finish(mut self) -> Self {
        self.is_valid = self.errors.is_empty();
        self
    }
}

/// Validate with the default [`SolverConfig`].
pub fn validate(values: &Values, equation_id: &str, solve_for: &str, category: Category) -> ValidationResult {
    validate_with(&SolverConfig::default(), values, equation_id, solve_for, category)
}

/// Validate `values` for solving `equation_id` for `solve_for`.
///
/// Values are normalized under `category` (the caller's category, even when
/// the equation belongs elsewhere). Missing inputs with a derivation rule are
/// filled in and reported as warnings; `solve_for` itself is never filled.
pub fn validate_with(
    config: &SolverConfig,
    values: &Values,
    equation_id: &str,
    solve_for: &str,
    category: Category,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    let Some(req) = requirement(equation_id) else {
        result.errors.push(format!("Unknown equation: {}", equation_id));
        return result.finish();
    };
    let equation = req.equation;

    let mut normalized = normalize(values, category);

    if req.category != category {
        result.warnings.push(format!(
            "Equation {} belongs to {}, but category is set to {}",
            equation_id, req.category, category
        ));
        result.suggested_category = Some(req.category);
    }

    if !req.contains(solve_for) {
        result.errors.push(format!(
            "Equation {} has no variable '{}' (variables: {})",
            equation_id,
            solve_for,
            req.variables.join(", ")
        ));
        result
            .suggestions
            .push(format!("Choose an equation that contains '{}'", solve_for));
    }

    let supplied: Vec<&'static str> = req
        .required_for(solve_for)
        .filter(|sym| is_known(&normalized, sym))
        .collect();

    let mut missing = Vec::new();
    for sym in req.required_for(solve_for) {
        if is_known(&normalized, sym) {
            continue;
        }
        match derivations::derive(equation, sym, &normalized, config) {
            Some((rule, value)) => {
                tracing::debug!(equation = equation_id, symbol = sym, value, "derived missing variable");
                result.warnings.push(if rule.is_default() {
                    format!("Assumed {} = {} ({})", sym, value, rule.formula)
                } else {
                    format!("Derived {} = {} from {}", sym, value, rule.formula)
                });
                normalized.insert(sym.to_string(), value);
            }
            None => missing.push(sym.to_string()),
        }
    }

    if !missing.is_empty() {
        result
            .errors
            .push(format!("Missing required variables: {}", missing.join(", ")));
        let quoted: Vec<String> = missing.iter().map(|m| format!("'{}'", m)).collect();
        result
            .suggestions
            .push(format!("Please provide values for: {}", quoted.join(", ")));

        for sym in &missing {
            for rule in derivations::rules_for(equation, sym).filter(|r| !r.is_default()) {
                let inputs: Vec<String> = rule.inputs.iter().map(|i| format!("'{}'", i)).collect();
                result.suggestions.push(format!(
                    "'{}' can also be derived from {} ({})",
                    sym,
                    inputs.join(", "),
                    rule.formula
                ));
            }
        }
        result.missing = missing;
    }

    for sym in supplied {
        if normalized.get(sym) == Some(&0.0) {
            result
                .warnings
                .push(format!("Variable '{}' is zero, which may cause division errors", sym));
        }
    }

    result.normalized_values = Some(normalized);
    result.finish()
}

/// Render a validation result as a short markdown message.
pub fn diagnostic_message(result: &ValidationResult) -> String {
    let mut sections = Vec::new();

    for (title, items) in [
        ("Issues found", &result.errors),
        ("Suggestions", &result.suggestions),
        ("Warnings", &result.warnings),
    ] {
        if items.is_empty() {
            continue;
        }
        let mut section = format!("**{}:**\n", title);
        for item in items {
            section.push_str(&format!("• {}\n", item));
        }
        sections.push(section);
    }

    if sections.is_empty() {
        return "All inputs are valid.".to_string();
    }
    sections.join("\n").trim_end().to_string()
}
