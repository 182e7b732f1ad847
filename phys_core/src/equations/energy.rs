//! # Work, Energy and Power
//!
//! Angles are in degrees, matching how problems are usually stated.

use super::registry::{Category, Equation, EquationMetadata, SolveDirection, Variable};
use crate::constants::DEFAULT_GRAVITY;
use crate::values::Knowns;

const WORK: Variable = Variable::new("W", "Work", "J");
const F: Variable = Variable::new("F", "Force", "N");
const D: Variable = Variable::new("d", "Displacement", "m");
const THETA: Variable = Variable::new("theta", "Angle", "deg");
const K: Variable = Variable::new("K", "Kinetic Energy", "J");
const M: Variable = Variable::new("m", "Mass", "kg");
const V: Variable = Variable::new("v", "Velocity", "m/s");
const U: Variable = Variable::new("U", "Potential Energy", "J");
const G: Variable = Variable::new("g", "Gravity", "m/s²");
const H: Variable = Variable::new("h", "Height", "m");
const P: Variable = Variable::new("P", "Power", "W");
const T: Variable = Variable::new("t", "Time", "s");

pub static WORK_FORCE_DISTANCE: EquationMetadata = EquationMetadata {
    id: "work1",
    name: "Work-Force-Distance",
    description: "Work done by a constant force along a displacement",
    formula_plain: "W = F*d*cos(theta)",
    category: Category::Energy,
    variables: &[WORK, F, D, THETA],
    directions: &[
        SolveDirection::new("W", "W = F*d*cos(theta)"),
        SolveDirection::new("F", "F = W / (d*cos(theta))"),
        SolveDirection::new("d", "d = W / (F*cos(theta))"),
        SolveDirection::new("theta", "theta = acos(W / (F*d))"),
    ],
    assumptions: &["theta in degrees", "theta defaults to 0 (force along displacement)"],
};

pub static KINETIC_ENERGY: EquationMetadata = EquationMetadata {
    id: "ke1",
    name: "Kinetic Energy",
    description: "Translational kinetic energy of a moving mass",
    formula_plain: "K = 1/2*m*v^2",
    category: Category::Energy,
    variables: &[K, M, V],
    directions: &[
        SolveDirection::new("K", "K = 0.5*m*v^2"),
        SolveDirection::new("m", "m = 2*K / v^2"),
        SolveDirection::new("v", "v = sqrt(2*K / m)"),
    ],
    assumptions: &["Non-relativistic speeds"],
};

pub static POTENTIAL_ENERGY: EquationMetadata = EquationMetadata {
    id: "pe1",
    name: "Potential Energy",
    description: "Gravitational potential energy near the surface",
    formula_plain: "U = m*g*h",
    category: Category::Energy,
    variables: &[U, M, G, H],
    directions: &[
        SolveDirection::new("U", "U = m*g*h"),
        SolveDirection::new("m", "m = U / (g*h)"),
        SolveDirection::new("g", "g = U / (m*h)"),
        SolveDirection::new("h", "h = U / (m*g)"),
    ],
    assumptions: &["Uniform gravitational field", "g defaults to 9.81 m/s² when not given"],
};

pub static POWER: EquationMetadata = EquationMetadata {
    id: "power1",
    name: "Power",
    description: "Average rate of doing work",
    formula_plain: "P = W / t",
    category: Category::Energy,
    variables: &[P, WORK, T],
    directions: &[
        SolveDirection::new("P", "P = W / t"),
        SolveDirection::new("W", "W = P*t"),
        SolveDirection::new("t", "t = W / P"),
    ],
    assumptions: &[],
};

#[inline]
pub fn work(f: f64, d: f64, theta_deg: f64) -> f64 {
    f * d * theta_deg.to_radians().cos()
}

#[inline]
pub fn force_from_work(w: f64, d: f64, theta_deg: f64) -> f64 {
    w / (d * theta_deg.to_radians().cos())
}

#[inline]
pub fn distance_from_work(w: f64, f: f64, theta_deg: f64) -> f64 {
    w / (f * theta_deg.to_radians().cos())
}

/// Angle in degrees between force and displacement
#[inline]
pub fn angle_from_work(w: f64, f: f64, d: f64) -> f64 {
    (w / (f * d)).acos().to_degrees()
}

#[inline]
pub fn kinetic_energy(m: f64, v: f64) -> f64 {
    0.5 * m * v * v
}

#[inline]
pub fn mass_from_kinetic_energy(k: f64, v: f64) -> f64 {
    2.0 * k / (v * v)
}

#[inline]
pub fn speed_from_kinetic_energy(k: f64, m: f64) -> f64 {
    (2.0 * k / m).sqrt()
}

#[inline]
pub fn potential_energy(m: f64, g: f64, h: f64) -> f64 {
    m * g * h
}

/// Solves `U = m·g·h` for whichever factor is missing
#[inline]
pub fn factor_from_potential_energy(u: f64, other_a: f64, other_b: f64) -> f64 {
    u / (other_a * other_b)
}

#[inline]
pub fn power(w: f64, t: f64) -> f64 {
    w / t
}

#[inline]
pub fn work_from_power(p: f64, t: f64) -> f64 {
    p * t
}

#[inline]
pub fn time_from_power(w: f64, p: f64) -> f64 {
    w / p
}

pub(crate) fn evaluate(equation: Equation, target: &str, k: &Knowns) -> Option<f64> {
    let g = k.or("g", DEFAULT_GRAVITY);
    let value = match (equation, target) {
        (Equation::WorkForceDistance, "W") => work(k.term("F"), k.term("d"), k.term("theta")),
        (Equation::WorkForceDistance, "F") => force_from_work(k.term("W"), k.divisor("d"), k.term("theta")),
        (Equation::WorkForceDistance, "d") => distance_from_work(k.term("W"), k.divisor("F"), k.term("theta")),
        (Equation::WorkForceDistance, "theta") => angle_from_work(k.term("W"), k.divisor("F"), k.divisor("d")),

        (Equation::KineticEnergy, "K") => kinetic_energy(k.term("m"), k.term("v")),
        (Equation::KineticEnergy, "m") => mass_from_kinetic_energy(k.term("K"), k.divisor("v")),
        (Equation::KineticEnergy, "v") => speed_from_kinetic_energy(k.term("K"), k.divisor("m")),

        (Equation::PotentialEnergy, "U") => potential_energy(k.term("m"), g, k.term("h")),
        (Equation::PotentialEnergy, "m") => factor_from_potential_energy(k.term("U"), g, k.divisor("h")),
        (Equation::PotentialEnergy, "g") => {
            factor_from_potential_energy(k.term("U"), k.divisor("m"), k.divisor("h"))
        }
        (Equation::PotentialEnergy, "h") => factor_from_potential_energy(k.term("U"), k.divisor("m"), g),

        (Equation::Power, "P") => power(k.term("W"), k.divisor("t")),
        (Equation::Power, "W") => work_from_power(k.term("P"), k.term("t")),
        (Equation::Power, "t") => time_from_power(k.term("W"), k.divisor("P")),

        _ => return None,
    };
    Some(value)
}
