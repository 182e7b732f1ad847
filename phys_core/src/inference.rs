//! # Equation Inference
//!
//! Picks the registry equation that best fits a set of known values, used when
//! the equation a caller chose turns out not to work.
//!
//! A candidate must have a solve direction for the target variable; merely
//! containing it is not enough (`x1` holds `t` but cannot be solved for it).
//! Its score is the fraction of
//! its other variables that are known after normalizing under the candidate's
//! own category (a variable fillable by a [derivation rule](crate::derivations)
//! also counts as known). The highest score wins; on a tie the earlier
//! equation in registry order is kept. Nothing below the confidence floor
//! (0.8 by default) is ever proposed.
//!
//! ```rust
//! use phys_core::inference::infer;
//! use phys_core::values::values_from;
//!
//! let values = values_from(&[("m", 0.5), ("v0", 30.0), ("v", -40.0)]);
//! let inferred = infer(&values, "J").unwrap();
//! assert_eq!(inferred.equation_id, "j2");
//! assert_eq!(inferred.confidence, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::MIN_CONFIDENCE_FLOOR;
use crate::derivations;
use crate::equations::{requirements, Category, EquationRequirement};
use crate::normalizer::normalize;
use crate::values::{is_known, Values};

/// An equation proposed by inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredEquation {
    pub category: Category,
    pub equation_id: String,
    /// Fraction of required variables that are known, in `[0, 1]`
    pub confidence: f64,
}

/// Score of every equation that can be solved for `solve_for`, in registry order.
///
/// Unlike [`infer`], this applies no floor; it is meant for diagnostics.
pub fn score_candidates(values: &Values, solve_for: &str) -> Vec<InferredEquation> {
    requirements()
        .filter(|req| req.equation.supports(solve_for))
        .map(|req| InferredEquation {
            category: req.category,
            equation_id: req.equation.id().to_string(),
            confidence: overlap(req, values, solve_for),
        })
        .collect()
}

/// Infer with the default confidence floor.
pub fn infer(values: &Values, solve_for: &str) -> Option<InferredEquation> {
    infer_with_floor(values, solve_for, MIN_CONFIDENCE_FLOOR)
}

/// Infer an equation whose confidence is at least `floor`.
///
/// `floor` is clamped up to [`MIN_CONFIDENCE_FLOOR`]; it can be raised but
/// never lowered.
pub fn infer_with_floor(values: &Values, solve_for: &str, floor: f64) -> Option<InferredEquation> {
    let floor = floor.max(MIN_CONFIDENCE_FLOOR);

    let mut best: Option<InferredEquation> = None;
    for candidate in score_candidates(values, solve_for) {
        if best.as_ref().map_or(true, |b| candidate.confidence > b.confidence) {
            best = Some(candidate);
        }
    }

    let best = best.filter(|b| b.confidence >= floor);
    match &best {
        Some(b) => tracing::debug!(
            solve_for,
            equation = %b.equation_id,
            confidence = b.confidence,
            "inferred equation"
        ),
        None => tracing::debug!(solve_for, floor, "no equation above confidence floor"),
    }
    best
}

fn overlap(req: &EquationRequirement, values: &Values, solve_for: &str) -> f64 {
    let normalized = normalize(values, req.category);
    let required: Vec<&str> = req.required_for(solve_for).collect();
    if required.is_empty() {
        return 0.0;
    }
    let known = required
        .iter()
        .filter(|sym| is_known(&normalized, sym) || derivations::is_derivable(req.equation, sym, &normalized))
        .count();
    known as f64 / required.len() as f64
}
