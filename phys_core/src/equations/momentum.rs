//! # Momentum and Impulse
//!
//! Momentum problems name their velocities `vi`/`vf` and their time interval
//! `dt`. Inputs using kinematics names (`v0`, `v`, `t`) are aliased by the
//! [`normalizer`](crate::normalizer) before they reach these formulas.

use super::registry::{Category, Equation, EquationMetadata, SolveDirection, Variable};
use crate::values::Knowns;

const P: Variable = Variable::new("p", "Momentum", "kg·m/s");
const M: Variable = Variable::new("m", "Mass", "kg");
const V: Variable = Variable::new("v", "Velocity", "m/s");
const J: Variable = Variable::new("J", "Impulse", "N·s");
const F: Variable = Variable::new("F", "Force", "N");
const DT: Variable = Variable::new("dt", "Time Interval", "s");
const VI: Variable = Variable::new("vi", "Initial Velocity", "m/s");
const VF: Variable = Variable::new("vf", "Final Velocity", "m/s");

pub static LINEAR_MOMENTUM: EquationMetadata = EquationMetadata {
    id: "p1",
    name: "Linear Momentum",
    description: "Momentum of a moving mass",
    formula_plain: "p = m*v",
    category: Category::Momentum,
    variables: &[P, M, V],
    directions: &[
        SolveDirection::new("p", "p = m*v"),
        SolveDirection::new("m", "m = p / v"),
        SolveDirection::new("v", "v = p / m"),
    ],
    assumptions: &[],
};

pub static IMPULSE_FORCE_TIME: EquationMetadata = EquationMetadata {
    id: "j1",
    name: "Impulse (Force-Time)",
    description: "Impulse delivered by a constant force over an interval",
    formula_plain: "J = F*dt",
    category: Category::Momentum,
    variables: &[J, F, DT],
    directions: &[
        SolveDirection::new("J", "J = F*dt"),
        SolveDirection::new("F", "F = J / dt"),
        SolveDirection::new("dt", "dt = J / F"),
    ],
    assumptions: &["Constant (or average) force"],
};

pub static IMPULSE_MOMENTUM: EquationMetadata = EquationMetadata {
    id: "j2",
    name: "Impulse-Momentum Theorem",
    description: "Impulse equals the change in momentum",
    formula_plain: "J = m*(vf - vi)",
    category: Category::Momentum,
    variables: &[J, M, VI, VF],
    directions: &[
        SolveDirection::new("J", "J = m*(vf - vi)"),
        SolveDirection::new("m", "m = J / (vf - vi)"),
        SolveDirection::new("vf", "vf = J / m + vi"),
        SolveDirection::new("vi", "vi = vf - J / m"),
    ],
    assumptions: &["Signed velocities along one axis"],
};

#[inline]
pub fn momentum(m: f64, v: f64) -> f64 {
    m * v
}

/// Divide a product back into one of its factors
#[inline]
pub fn quotient(product: f64, factor: f64) -> f64 {
    product / factor
}

#[inline]
pub fn impulse(f: f64, dt: f64) -> f64 {
    f * dt
}

#[inline]
pub fn impulse_from_velocity_change(m: f64, vi: f64, vf: f64) -> f64 {
    m * (vf - vi)
}

#[inline]
pub fn mass_from_impulse(j: f64, vi: f64, vf: f64) -> f64 {
    j / (vf - vi)
}

#[inline]
pub fn final_velocity_from_impulse(j: f64, m: f64, vi: f64) -> f64 {
    j / m + vi
}

#[inline]
pub fn initial_velocity_from_impulse(j: f64, m: f64, vf: f64) -> f64 {
    vf - j / m
}

pub(crate) fn evaluate(equation: Equation, target: &str, k: &Knowns) -> Option<f64> {
    let value = match (equation, target) {
        (Equation::LinearMomentum, "p") => momentum(k.term("m"), k.term("v")),
        (Equation::LinearMomentum, "m") => quotient(k.term("p"), k.divisor("v")),
        (Equation::LinearMomentum, "v") => quotient(k.term("p"), k.divisor("m")),

        (Equation::ImpulseForceTime, "J") => impulse(k.term("F"), k.term("dt")),
        (Equation::ImpulseForceTime, "F") => quotient(k.term("J"), k.divisor("dt")),
        (Equation::ImpulseForceTime, "dt") => quotient(k.term("J"), k.divisor("F")),

        (Equation::ImpulseMomentum, "J") => impulse_from_velocity_change(k.term("m"), k.term("vi"), k.term("vf")),
        (Equation::ImpulseMomentum, "m") => mass_from_impulse(k.term("J"), k.term("vi"), k.term("vf")),
        (Equation::ImpulseMomentum, "vf") => {
            final_velocity_from_impulse(k.term("J"), k.divisor("m"), k.term("vi"))
        }
        (Equation::ImpulseMomentum, "vi") => {
            initial_velocity_from_impulse(k.term("J"), k.divisor("m"), k.term("vf"))
        }

        _ => return None,
    };
    Some(value)
}
