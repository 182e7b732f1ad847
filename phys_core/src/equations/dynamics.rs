//! # Dynamics Equations
//!
//! Newton's second law, weight, and kinetic friction.
//!
//! Friction's `N` (normal force) and the gas law's `n` (moles) are unrelated
//! symbols; equations are keyed by id, never by variable name.
//!
//! The friction formulas read `N` directly. When a caller only knows the
//! mass, the validator fills `N = m·g` before solving (see
//! [`derivations`](crate::derivations)).

use super::registry::{Category, Equation, EquationMetadata, SolveDirection, Variable};
use crate::constants::DEFAULT_GRAVITY;
use crate::values::Knowns;

const F: Variable = Variable::new("F", "Net Force", "N");
const M: Variable = Variable::new("m", "Mass", "kg");
const A: Variable = Variable::new("a", "Acceleration", "m/s²");
const W: Variable = Variable::new("W", "Weight", "N");
const G: Variable = Variable::new("g", "Gravity", "m/s²");
const MU: Variable = Variable::new("mu", "Coefficient of Friction", "-");
const NORMAL: Variable = Variable::new("N", "Normal Force", "N");
const FRICTION: Variable = Variable::new("f", "Friction Force", "N");

pub static NEWTON_SECOND_LAW: EquationMetadata = EquationMetadata {
    id: "f1",
    name: "Newton's Second Law",
    description: "Net force equals mass times acceleration",
    formula_plain: "F = m*a",
    category: Category::Dynamics,
    variables: &[F, M, A],
    directions: &[
        SolveDirection::new("F", "F = m*a"),
        SolveDirection::new("m", "m = F / a"),
        SolveDirection::new("a", "a = F / m"),
    ],
    assumptions: &["Constant mass"],
};

pub static WEIGHT: EquationMetadata = EquationMetadata {
    id: "w1",
    name: "Weight",
    description: "Gravitational force on a mass",
    formula_plain: "W = m*g",
    category: Category::Dynamics,
    variables: &[W, M, G],
    directions: &[
        SolveDirection::new("W", "W = m*g"),
        SolveDirection::new("m", "m = W / g"),
        SolveDirection::new("g", "g = W / m"),
    ],
    assumptions: &["g defaults to 9.81 m/s² when not given"],
};

pub static FRICTION_FORCE: EquationMetadata = EquationMetadata {
    id: "ff1",
    name: "Friction Force",
    description: "Kinetic friction from the normal force",
    formula_plain: "f = mu*N",
    category: Category::Dynamics,
    variables: &[FRICTION, MU, NORMAL],
    directions: &[
        SolveDirection::new("f", "f = mu*N"),
        SolveDirection::new("mu", "mu = f / N"),
        SolveDirection::new("N", "N = f / mu"),
    ],
    assumptions: &["Horizontal surface when N is derived as m*g"],
};

#[inline]
pub fn net_force(m: f64, a: f64) -> f64 {
    m * a
}

#[inline]
pub fn mass_from_force(f: f64, a: f64) -> f64 {
    f / a
}

#[inline]
pub fn acceleration_from_force(f: f64, m: f64) -> f64 {
    f / m
}

#[inline]
pub fn weight(m: f64, g: f64) -> f64 {
    m * g
}

#[inline]
pub fn mass_from_weight(w: f64, g: f64) -> f64 {
    w / g
}

#[inline]
pub fn gravity_from_weight(w: f64, m: f64) -> f64 {
    w / m
}

#[inline]
pub fn friction(mu: f64, n: f64) -> f64 {
    mu * n
}

#[inline]
pub fn friction_coefficient(f: f64, n: f64) -> f64 {
    f / n
}

#[inline]
pub fn normal_force(f: f64, mu: f64) -> f64 {
    f / mu
}

pub(crate) fn evaluate(equation: Equation, target: &str, k: &Knowns) -> Option<f64> {
    let g = k.or("g", DEFAULT_GRAVITY);
    let value = match (equation, target) {
        (Equation::NewtonSecondLaw, "F") => net_force(k.term("m"), k.term("a")),
        (Equation::NewtonSecondLaw, "m") => mass_from_force(k.term("F"), k.divisor("a")),
        (Equation::NewtonSecondLaw, "a") => acceleration_from_force(k.term("F"), k.divisor("m")),

        (Equation::Weight, "W") => weight(k.term("m"), g),
        (Equation::Weight, "m") => mass_from_weight(k.term("W"), g),
        (Equation::Weight, "g") => gravity_from_weight(k.term("W"), k.divisor("m")),

        (Equation::FrictionForce, "f") => friction(k.term("mu"), k.term("N")),
        (Equation::FrictionForce, "mu") => friction_coefficient(k.term("f"), k.divisor("N")),
        (Equation::FrictionForce, "N") => normal_force(k.term("f"), k.divisor("mu")),

        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::values_from;

    #[test]
    fn test_weight_defaults_gravity() {
        let values = values_from(&[("m", 10.0)]);
        let w = evaluate(Equation::Weight, "W", &Knowns::new(&values)).unwrap();
        assert!((w - 98.1).abs() < 1e-9, "W = {}", w);
    }

    #[test]
    fn test_friction_does_not_synthesize_normal_force() {
        // Mass alone is not read by the friction formula
        let values = values_from(&[("mu", 0.3), ("m", 10.0)]);
        let f = evaluate(Equation::FrictionForce, "f", &Knowns::new(&values)).unwrap();
        assert_eq!(f, 0.0);
    }

    #[test]
    fn test_missing_denominator_reads_as_one() {
        let values = values_from(&[("F", 12.0)]);
        let m = evaluate(Equation::NewtonSecondLaw, "m", &Knowns::new(&values)).unwrap();
        assert_eq!(m, 12.0);
    }
}
