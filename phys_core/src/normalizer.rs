//! # Variable Normalizer
//!
//! Reconciles symbol conventions between categories. Kinematics calls the
//! velocities `v0`/`v` and the time `t`; momentum calls them `vi`/`vf` and
//! `dt`. A caller (or an AI interpretation) that mixes the two still reaches
//! the right variables after normalization.
//!
//! Rules are directional and scoped to one category. Normalization only
//! *adds* synonyms: it copies `from` into `to` when `to` is not known yet, so
//! the caller's keys are always preserved and re-running it changes nothing.
//!
//! ```rust
//! use phys_core::equations::Category;
//! use phys_core::normalizer::normalize;
//! use phys_core::values::values_from;
//!
//! let raw = values_from(&[("v0", 30.0), ("v", -40.0)]);
//! let normalized = normalize(&raw, Category::Momentum);
//! assert_eq!(normalized["vi"], 30.0);
//! assert_eq!(normalized["vf"], -40.0);
//! assert_eq!(normalized["v0"], 30.0);
//! ```

use serde::Serialize;

use crate::equations::Category;
use crate::values::{is_known, Values};

/// One directional alias rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableMapping {
    pub from: &'static str,
    pub to: &'static str,
    pub category: Category,
}

impl VariableMapping {
    pub const fn new(from: &'static str, to: &'static str, category: Category) -> Self {
        Self { from, to, category }
    }
}

/// All alias rules, in application order.
///
/// When several rules target the same symbol the first satisfied one wins.
pub static VARIABLE_MAPPINGS: &[VariableMapping] = &[
    // Kinematics velocity names into momentum
    VariableMapping::new("v0", "vi", Category::Momentum),
    VariableMapping::new("v", "vf", Category::Momentum),
    VariableMapping::new("v1", "vi", Category::Momentum),
    VariableMapping::new("v2", "vf", Category::Momentum),
    // Momentum velocity names into kinematics
    VariableMapping::new("vi", "v0", Category::Kinematics),
    VariableMapping::new("vf", "v", Category::Kinematics),
    // Distance and position
    VariableMapping::new("d", "x", Category::Kinematics),
    VariableMapping::new("x", "d", Category::Energy),
    // Time interval
    VariableMapping::new("t", "dt", Category::Momentum),
    VariableMapping::new("dt", "t", Category::Kinematics),
];

/// Rules that apply to `category`, in application order
pub fn mappings_for(category: Category) -> impl Iterator<Item = &'static VariableMapping> {
    VARIABLE_MAPPINGS.iter().filter(move |m| m.category == category)
}

/// Apply the category's alias rules to a copy of `values`.
pub fn normalize(values: &Values, category: Category) -> Values {
    let mut normalized = values.clone();

    for mapping in mappings_for(category) {
        if is_known(&normalized, mapping.from) && !is_known(&normalized, mapping.to) {
            let value = normalized[mapping.from];
            tracing::trace!(from = mapping.from, to = mapping.to, %category, "aliasing variable");
            normalized.insert(mapping.to.to_string(), value);
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::values_from;

    #[test]
    fn test_momentum_aliases() {
        let raw = values_from(&[("m", 0.5), ("v0", 30.0), ("v", -40.0), ("t", 0.1)]);
        let n = normalize(&raw, Category::Momentum);
        assert_eq!(n["vi"], 30.0);
        assert_eq!(n["vf"], -40.0);
        assert_eq!(n["dt"], 0.1);
        // Non-destructive
        for key in raw.keys() {
            assert_eq!(n[key], raw[key]);
        }
    }

    #[test]
    fn test_first_rule_wins() {
        // Both v0 and v1 target vi; v0 is registered first
        let raw = values_from(&[("v0", 1.0), ("v1", 2.0)]);
        assert_eq!(normalize(&raw, Category::Momentum)["vi"], 1.0);
    }

    #[test]
    fn test_existing_target_not_overwritten() {
        let raw = values_from(&[("vi", 5.0), ("v0", 1.0)]);
        assert_eq!(normalize(&raw, Category::Momentum)["vi"], 5.0);
    }

    #[test]
    fn test_rules_are_directional_and_scoped() {
        // vi -> v0 exists for kinematics only
        let raw = values_from(&[("vi", 3.0)]);
        assert!(!normalize(&raw, Category::Momentum).contains_key("v0"));
        assert_eq!(normalize(&raw, Category::Kinematics)["v0"], 3.0);
        // No rules for waves
        assert_eq!(normalize(&raw, Category::Waves), raw);
    }

    #[test]
    fn test_nan_target_is_filled() {
        let raw = values_from(&[("vi", 3.0), ("v0", f64::NAN)]);
        assert_eq!(normalize(&raw, Category::Kinematics)["v0"], 3.0);
    }

    #[test]
    fn test_idempotent_for_every_category() {
        let raw = values_from(&[
            ("v0", 1.0),
            ("v", 2.0),
            ("v1", 3.0),
            ("vf", 4.0),
            ("d", 5.0),
            ("x", 6.0),
            ("t", 7.0),
            ("dt", f64::NAN),
        ]);
        for category in Category::ALL {
            let once = normalize(&raw, category);
            let twice = normalize(&once, category);
            // NaN != NaN, so compare through the debug form
            assert_eq!(format!("{:?}", once), format!("{:?}", twice), "{} not idempotent", category);
        }
    }
}
