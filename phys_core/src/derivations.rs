//! # Derivation Rules
//!
//! Some equation inputs can be filled in when the caller leaves them out:
//!
//! | Equation | Symbol | Rule |
//! |----------|--------|------|
//! | `w1`, `pe1` | `g` | configured gravity (default 9.81 m/s²) |
//! | `ff1` | `N` | `N = m*g` (horizontal surface) |
//! | `work1` | `theta` | `0` (force along the displacement) |
//!
//! The [`validator`](crate::validator) applies these rules and records every
//! value it fills in as a warning, so the numbers the registry receives are
//! always visible to the caller. The registry itself never derives a missing
//! variable from other variables.

use serde::Serialize;

use crate::config::SolverConfig;
use crate::equations::Equation;
use crate::values::{is_known, Knowns, Values};

/// One way of filling a missing equation input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Derivation {
    pub equation: Equation,
    /// Symbol this rule fills
    pub symbol: &'static str,
    /// Symbols that must be known for the rule to apply (empty for a default)
    pub inputs: &'static [&'static str],
    /// Plain-text description, e.g. "N = m*g"
    pub formula: &'static str,
    #[serde(skip)]
    compute: fn(&Knowns, &SolverConfig) -> f64,
}

impl Derivation {
    /// Whether this rule is an assumed default rather than a derivation
    pub fn is_default(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Whether every input is known in `values`
    pub fn applies_to(&self, values: &Values) -> bool {
        self.inputs.iter().all(|s| is_known(values, s))
    }

    pub fn evaluate(&self, values: &Values, config: &SolverConfig) -> f64 {
        (self.compute)(&Knowns::new(values), config)
    }
}

fn configured_gravity(_: &Knowns, config: &SolverConfig) -> f64 {
    config.gravity
}

fn normal_force_from_mass(k: &Knowns, config: &SolverConfig) -> f64 {
    k.term("m") * k.or("g", config.gravity)
}

fn zero_angle(_: &Knowns, _: &SolverConfig) -> f64 {
    0.0
}

/// All derivation rules
pub static DERIVATIONS: &[Derivation] = &[
    Derivation {
        equation: Equation::Weight,
        symbol: "g",
        inputs: &[],
        formula: "g = standard gravity",
        compute: configured_gravity,
    },
    Derivation {
        equation: Equation::PotentialEnergy,
        symbol: "g",
        inputs: &[],
        formula: "g = standard gravity",
        compute: configured_gravity,
    },
    Derivation {
        equation: Equation::FrictionForce,
        symbol: "N",
        inputs: &["m"],
        formula: "N = m*g",
        compute: normal_force_from_mass,
    },
    Derivation {
        equation: Equation::WorkForceDistance,
        symbol: "theta",
        inputs: &[],
        formula: "theta = 0",
        compute: zero_angle,
    },
];

/// Rules that can fill `symbol` for `equation`
pub fn rules_for(equation: Equation, symbol: &str) -> impl Iterator<Item = &'static Derivation> + '_ {
    DERIVATIONS
        .iter()
        .filter(move |d| d.equation == equation && d.symbol == symbol)
}

/// Whether `symbol` has an input-free default for `equation`
pub fn has_default(equation: Equation, symbol: &str) -> bool {
    rules_for(equation, symbol).any(|d| d.is_default())
}

/// Whether some rule could fill `symbol` from `values`
pub fn is_derivable(equation: Equation, symbol: &str, values: &Values) -> bool {
    rules_for(equation, symbol).any(|d| d.applies_to(values))
}

/// Fill `symbol` with the first applicable rule
pub fn derive(
    equation: Equation,
    symbol: &str,
    values: &Values,
    config: &SolverConfig,
) -> Option<(&'static Derivation, f64)> {
    rules_for(equation, symbol)
        .find(|d| d.applies_to(values))
        .map(|d| (d, d.evaluate(values, config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::values_from;

    #[test]
    fn test_normal_force_needs_mass() {
        let config = SolverConfig::default();
        assert!(derive(Equation::FrictionForce, "N", &values_from(&[("mu", 0.3)]), &config).is_none());

        let (rule, n) = derive(Equation::FrictionForce, "N", &values_from(&[("m", 10.0)]), &config).unwrap();
        assert_eq!(rule.formula, "N = m*g");
        assert!((n - 98.1).abs() < 1e-9, "N = {}", n);
    }

    #[test]
    fn test_supplied_gravity_beats_config() {
        let values = values_from(&[("m", 10.0), ("g", 1.62)]);
        let (_, n) = derive(Equation::FrictionForce, "N", &values, &SolverConfig::default()).unwrap();
        assert!((n - 16.2).abs() < 1e-9);
    }

    #[test]
    fn test_configured_gravity() {
        let config = SolverConfig {
            gravity: 9.80665,
            ..SolverConfig::default()
        };
        let (rule, g) = derive(Equation::Weight, "g", &Values::new(), &config).unwrap();
        assert!(rule.is_default());
        assert_eq!(g, 9.80665);
    }

    #[test]
    fn test_rules_reference_equation_variables() {
        for rule in DERIVATIONS {
            assert!(rule.equation.has_variable(rule.symbol), "{:?}", rule);
        }
        assert!(has_default(Equation::WorkForceDistance, "theta"));
        assert!(!has_default(Equation::FrictionForce, "N"));
    }
}
