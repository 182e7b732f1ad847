//! # Waves
//!
//! In this category `T` is the period and `mu` the linear mass density of a
//! string. Neither is related to the symbols of the same name elsewhere.

use std::f64::consts::PI;

use super::registry::{Category, Equation, EquationMetadata, SolveDirection, Variable};
use crate::values::Knowns;

const V: Variable = Variable::new("v", "Wave Speed", "m/s");
const F: Variable = Variable::new("f", "Frequency", "Hz");
const LAMBDA: Variable = Variable::new("lambda", "Wavelength", "m");
const T: Variable = Variable::new("T", "Period", "s");
const TENSION: Variable = Variable::new("Tension", "Tension Force", "N");
const MU: Variable = Variable::new("mu", "Linear Mass Density", "kg/m");
const OMEGA: Variable = Variable::new("omega", "Angular Frequency", "rad/s");

pub static WAVE_SPEED: EquationMetadata = EquationMetadata {
    id: "wave_v1",
    name: "Wave Speed",
    description: "Speed of a periodic wave from frequency and wavelength",
    formula_plain: "v = f*lambda",
    category: Category::Waves,
    variables: &[V, F, LAMBDA],
    directions: &[
        SolveDirection::new("v", "v = f*lambda"),
        SolveDirection::new("f", "f = v / lambda"),
        SolveDirection::new("lambda", "lambda = v / f"),
    ],
    assumptions: &[],
};

pub static PERIOD_FREQUENCY: EquationMetadata = EquationMetadata {
    id: "wave_p1",
    name: "Period and Frequency",
    description: "Period is the reciprocal of frequency",
    formula_plain: "T = 1 / f",
    category: Category::Waves,
    variables: &[T, F],
    directions: &[
        SolveDirection::new("T", "T = 1 / f"),
        SolveDirection::new("f", "f = 1 / T"),
    ],
    assumptions: &[],
};

pub static STRING_WAVE_SPEED: EquationMetadata = EquationMetadata {
    id: "wave_s1",
    name: "Wave Speed on a String",
    description: "Transverse wave speed on a stretched string",
    formula_plain: "v = sqrt(Tension / mu)",
    category: Category::Waves,
    variables: &[V, TENSION, MU],
    directions: &[
        SolveDirection::new("v", "v = sqrt(Tension / mu)"),
        SolveDirection::new("Tension", "Tension = v^2*mu"),
        SolveDirection::new("mu", "mu = Tension / v^2"),
    ],
    assumptions: &["Perfectly flexible string", "Small amplitude"],
};

pub static ANGULAR_FREQUENCY: EquationMetadata = EquationMetadata {
    id: "wave_a1",
    name: "Angular Frequency",
    description: "Angular frequency from ordinary frequency",
    formula_plain: "omega = 2*pi*f",
    category: Category::Waves,
    variables: &[OMEGA, F],
    directions: &[
        SolveDirection::new("omega", "omega = 2*pi*f"),
        SolveDirection::new("f", "f = omega / (2*pi)"),
    ],
    assumptions: &[],
};

#[inline]
pub fn reciprocal(x: f64) -> f64 {
    1.0 / x
}

#[inline]
pub fn string_wave_speed(tension: f64, mu: f64) -> f64 {
    (tension / mu).sqrt()
}

#[inline]
pub fn string_tension(v: f64, mu: f64) -> f64 {
    v * v * mu
}

#[inline]
pub fn string_density(tension: f64, v: f64) -> f64 {
    tension / (v * v)
}

#[inline]
pub fn angular_frequency(f: f64) -> f64 {
    2.0 * PI * f
}

#[inline]
pub fn frequency_from_angular(omega: f64) -> f64 {
    omega / (2.0 * PI)
}

pub(crate) fn evaluate(equation: Equation, target: &str, k: &Knowns) -> Option<f64> {
    let value = match (equation, target) {
        (Equation::WaveSpeed, "v") => k.term("f") * k.term("lambda"),
        (Equation::WaveSpeed, "f") => k.term("v") / k.divisor("lambda"),
        (Equation::WaveSpeed, "lambda") => k.term("v") / k.divisor("f"),

        (Equation::PeriodFrequency, "T") => reciprocal(k.divisor("f")),
        (Equation::PeriodFrequency, "f") => reciprocal(k.divisor("T")),

        (Equation::StringWaveSpeed, "v") => string_wave_speed(k.term("Tension"), k.divisor("mu")),
        (Equation::StringWaveSpeed, "Tension") => string_tension(k.term("v"), k.term("mu")),
        (Equation::StringWaveSpeed, "mu") => string_density(k.term("Tension"), k.divisor("v")),

        (Equation::AngularFrequency, "omega") => angular_frequency(k.term("f")),
        (Equation::AngularFrequency, "f") => frequency_from_angular(k.term("omega")),

        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_wavelength() {
        // 343 m/s at 440 Hz
        let values = crate::values::values_from(&[("v", 343.0), ("f", 440.0)]);
        let lambda = evaluate(Equation::WaveSpeed, "lambda", &Knowns::new(&values)).unwrap();
        assert!((lambda - 0.779_545).abs() < 1e-6, "lambda = {}", lambda);
    }

    #[test]
    fn test_string_speed() {
        // 100 N on 0.01 kg/m -> 100 m/s
        assert!((string_wave_speed(100.0, 0.01) - 100.0).abs() < 1e-9);
        assert!((string_tension(100.0, 0.01) - 100.0).abs() < 1e-9);
    }
}
