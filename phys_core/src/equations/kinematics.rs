//! # Kinematics Equations
//!
//! Constant-acceleration motion along one axis.
//!
//! ## Notation
//!
//! - `x0`, `x` = Initial and final position (m)
//! - `v0`, `v` = Initial and final velocity (m/s)
//! - `a` = Acceleration (m/s²)
//! - `t` = Elapsed time (s)
//!
//! ## Unsupported Directions
//!
//! `x1` cannot be solved for `t`: that needs the quadratic formula and a
//! choice of root, which this solver does not make.

use super::registry::{Category, Equation, EquationMetadata, SolveDirection, Variable};
use crate::values::Knowns;

const V: Variable = Variable::new("v", "Final Velocity", "m/s");
const V0: Variable = Variable::new("v0", "Initial Velocity", "m/s");
const A: Variable = Variable::new("a", "Acceleration", "m/s²");
const T: Variable = Variable::new("t", "Time", "s");
const X: Variable = Variable::new("x", "Final Position", "m");
const X0: Variable = Variable::new("x0", "Initial Position", "m");

pub static VELOCITY_TIME: EquationMetadata = EquationMetadata {
    id: "v1",
    name: "Velocity-Time",
    description: "Final velocity after accelerating uniformly for a time",
    formula_plain: "v = v0 + a*t",
    category: Category::Kinematics,
    variables: &[V, V0, A, T],
    directions: &[
        SolveDirection::new("v", "v = v0 + a*t"),
        SolveDirection::new("v0", "v0 = v - a*t"),
        SolveDirection::new("a", "a = (v - v0) / t"),
        SolveDirection::new("t", "t = (v - v0) / a"),
    ],
    assumptions: &["Constant acceleration"],
};

pub static DISPLACEMENT_TIME: EquationMetadata = EquationMetadata {
    id: "x1",
    name: "Displacement-Time",
    description: "Position after accelerating uniformly from an initial velocity",
    formula_plain: "x = x0 + v0*t + 1/2*a*t^2",
    category: Category::Kinematics,
    variables: &[X, X0, V0, T, A],
    directions: &[
        SolveDirection::new("x", "x = x0 + v0*t + 0.5*a*t^2"),
        SolveDirection::new("x0", "x0 = x - (v0*t + 0.5*a*t^2)"),
        SolveDirection::new("v0", "v0 = (x - x0 - 0.5*a*t^2) / t"),
        SolveDirection::new("a", "a = 2*(x - x0 - v0*t) / t^2"),
    ],
    assumptions: &["Constant acceleration", "Solving for t is not supported (quadratic)"],
};

pub static VELOCITY_DISPLACEMENT: EquationMetadata = EquationMetadata {
    id: "v2",
    name: "Velocity-Displacement",
    description: "Relates velocities to displacement without time",
    formula_plain: "v^2 = v0^2 + 2*a*(x - x0)",
    category: Category::Kinematics,
    variables: &[V, V0, A, X, X0],
    directions: &[
        SolveDirection::new("v", "v = sqrt(v0^2 + 2*a*(x - x0))"),
        SolveDirection::new("v0", "v0 = sqrt(v^2 - 2*a*(x - x0))"),
        SolveDirection::new("a", "a = (v^2 - v0^2) / (2*(x - x0))"),
        SolveDirection::new("x", "x = (v^2 - v0^2) / (2*a) + x0"),
        SolveDirection::new("x0", "x0 = x - (v^2 - v0^2) / (2*a)"),
    ],
    assumptions: &["Constant acceleration", "Square roots return the non-negative speed"],
};

pub static AVERAGE_VELOCITY: EquationMetadata = EquationMetadata {
    id: "x2",
    name: "Average Velocity",
    description: "Position from the mean of initial and final velocity",
    formula_plain: "x = x0 + 1/2*(v + v0)*t",
    category: Category::Kinematics,
    variables: &[X, X0, V, V0, T],
    directions: &[
        SolveDirection::new("x", "x = x0 + 0.5*(v + v0)*t"),
        SolveDirection::new("x0", "x0 = x - 0.5*(v + v0)*t"),
        SolveDirection::new("v", "v = 2*(x - x0) / t - v0"),
        SolveDirection::new("v0", "v0 = 2*(x - x0) / t - v"),
        SolveDirection::new("t", "t = 2*(x - x0) / (v + v0)"),
    ],
    assumptions: &["Constant acceleration"],
};

// =============================================================================
// v = v0 + a·t
// =============================================================================

#[inline]
pub fn final_velocity(v0: f64, a: f64, t: f64) -> f64 {
    v0 + a * t
}

#[inline]
pub fn initial_velocity(v: f64, a: f64, t: f64) -> f64 {
    v - a * t
}

#[inline]
pub fn acceleration_from_velocities(v: f64, v0: f64, t: f64) -> f64 {
    (v - v0) / t
}

#[inline]
pub fn time_from_velocities(v: f64, v0: f64, a: f64) -> f64 {
    (v - v0) / a
}

// =============================================================================
// x = x0 + v0·t + ½·a·t²
// =============================================================================

#[inline]
pub fn position_after(x0: f64, v0: f64, a: f64, t: f64) -> f64 {
    x0 + v0 * t + 0.5 * a * t * t
}

#[inline]
pub fn start_position(x: f64, v0: f64, a: f64, t: f64) -> f64 {
    x - (v0 * t + 0.5 * a * t * t)
}

/// `t_term` is the time read as a term (absent = 0), `t_div` as the divisor
#[inline]
pub fn initial_velocity_from_displacement(x: f64, x0: f64, a: f64, t_term: f64, t_div: f64) -> f64 {
    (x - x0 - 0.5 * a * t_term * t_term) / t_div
}

#[inline]
pub fn acceleration_from_displacement(x: f64, x0: f64, v0: f64, t_term: f64, t_div: f64) -> f64 {
    2.0 * (x - x0 - v0 * t_term) / (t_div * t_div)
}

// =============================================================================
// v² = v0² + 2·a·(x − x0)
// =============================================================================

#[inline]
pub fn speed_after_displacement(v0: f64, a: f64, x: f64, x0: f64) -> f64 {
    (v0 * v0 + 2.0 * a * (x - x0)).sqrt()
}

#[inline]
pub fn speed_before_displacement(v: f64, a: f64, x: f64, x0: f64) -> f64 {
    (v * v - 2.0 * a * (x - x0)).sqrt()
}

#[inline]
pub fn acceleration_over_displacement(v: f64, v0: f64, x: f64, x0: f64) -> f64 {
    (v * v - v0 * v0) / (2.0 * (x - x0))
}

#[inline]
pub fn position_from_speeds(v: f64, v0: f64, a: f64, x0: f64) -> f64 {
    (v * v - v0 * v0) / (2.0 * a) + x0
}

#[inline]
pub fn start_position_from_speeds(v: f64, v0: f64, a: f64, x: f64) -> f64 {
    x - (v * v - v0 * v0) / (2.0 * a)
}

// =============================================================================
// x = x0 + ½·(v + v0)·t
// =============================================================================

#[inline]
pub fn position_from_average(x0: f64, v: f64, v0: f64, t: f64) -> f64 {
    x0 + 0.5 * (v + v0) * t
}

#[inline]
pub fn start_position_from_average(x: f64, v: f64, v0: f64, t: f64) -> f64 {
    x - 0.5 * (v + v0) * t
}

/// Solves for one velocity given the other (same form for `v` and `v0`)
#[inline]
pub fn velocity_from_average(x: f64, x0: f64, t: f64, other_velocity: f64) -> f64 {
    2.0 * (x - x0) / t - other_velocity
}

#[inline]
pub fn time_from_average(x: f64, x0: f64, v: f64, v0: f64) -> f64 {
    2.0 * (x - x0) / (v + v0)
}

/// Evaluate one direction of a kinematics equation.
///
/// Returns `None` for a target the equation does not support.
pub(crate) fn evaluate(equation: Equation, target: &str, k: &Knowns) -> Option<f64> {
    let value = match (equation, target) {
        (Equation::VelocityTime, "v") => final_velocity(k.term("v0"), k.term("a"), k.term("t")),
        (Equation::VelocityTime, "v0") => initial_velocity(k.term("v"), k.term("a"), k.term("t")),
        (Equation::VelocityTime, "a") => acceleration_from_velocities(k.term("v"), k.term("v0"), k.divisor("t")),
        (Equation::VelocityTime, "t") => time_from_velocities(k.term("v"), k.term("v0"), k.divisor("a")),

        (Equation::DisplacementTime, "x") => position_after(k.term("x0"), k.term("v0"), k.term("a"), k.term("t")),
        (Equation::DisplacementTime, "x0") => start_position(k.term("x"), k.term("v0"), k.term("a"), k.term("t")),
        (Equation::DisplacementTime, "v0") => initial_velocity_from_displacement(
            k.term("x"),
            k.term("x0"),
            k.term("a"),
            k.term("t"),
            k.divisor("t"),
        ),
        (Equation::DisplacementTime, "a") => acceleration_from_displacement(
            k.term("x"),
            k.term("x0"),
            k.term("v0"),
            k.term("t"),
            k.divisor("t"),
        ),

        (Equation::VelocityDisplacement, "v") => {
            speed_after_displacement(k.term("v0"), k.term("a"), k.term("x"), k.term("x0"))
        }
        (Equation::VelocityDisplacement, "v0") => {
            speed_before_displacement(k.term("v"), k.term("a"), k.term("x"), k.term("x0"))
        }
        (Equation::VelocityDisplacement, "a") => {
            acceleration_over_displacement(k.term("v"), k.term("v0"), k.term("x"), k.term("x0"))
        }
        (Equation::VelocityDisplacement, "x") => {
            position_from_speeds(k.term("v"), k.term("v0"), k.divisor("a"), k.term("x0"))
        }
        (Equation::VelocityDisplacement, "x0") => {
            start_position_from_speeds(k.term("v"), k.term("v0"), k.divisor("a"), k.term("x"))
        }

        (Equation::AverageVelocity, "x") => {
            position_from_average(k.term("x0"), k.term("v"), k.term("v0"), k.term("t"))
        }
        (Equation::AverageVelocity, "x0") => {
            start_position_from_average(k.term("x"), k.term("v"), k.term("v0"), k.term("t"))
        }
        (Equation::AverageVelocity, "v") => {
            velocity_from_average(k.term("x"), k.term("x0"), k.divisor("t"), k.term("v0"))
        }
        (Equation::AverageVelocity, "v0") => {
            velocity_from_average(k.term("x"), k.term("x0"), k.divisor("t"), k.term("v"))
        }
        (Equation::AverageVelocity, "t") => time_from_average(k.term("x"), k.term("x0"), k.term("v"), k.term("v0")),

        _ => return None,
    };
    Some(value)
}
