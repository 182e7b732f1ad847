//! # Thermodynamics Equations
//!
//! Ideal gas, sensible heat, latent heat and the kinetic theory of gases.
//! `T` here is absolute temperature in kelvin.

use super::registry::{Category, Equation, EquationMetadata, SolveDirection, Variable};
use crate::constants::{BOLTZMANN, GAS_CONSTANT};
use crate::values::Knowns;

const P: Variable = Variable::new("P", "Pressure", "Pa");
const V: Variable = Variable::new("V", "Volume", "m³");
const N: Variable = Variable::new("n", "Amount", "mol");
const T: Variable = Variable::new("T", "Temperature", "K");
const Q: Variable = Variable::new("Q", "Heat Energy", "J");
const M: Variable = Variable::new("m", "Mass", "kg");
const C: Variable = Variable::new("c", "Specific Heat", "J/(kg·K)");
const DT: Variable = Variable::new("dT", "Temperature Change", "K");
const L: Variable = Variable::new("L", "Latent Heat", "J/kg");
const KAVG: Variable = Variable::new("Kavg", "Average Kinetic Energy", "J");

pub static IDEAL_GAS_LAW: EquationMetadata = EquationMetadata {
    id: "pv1",
    name: "Ideal Gas Law",
    description: "State equation of an ideal gas",
    formula_plain: "P*V = n*R*T",
    category: Category::Thermodynamics,
    variables: &[P, V, N, T],
    directions: &[
        SolveDirection::new("P", "P = n*R*T / V"),
        SolveDirection::new("V", "V = n*R*T / P"),
        SolveDirection::new("n", "n = P*V / (R*T)"),
        SolveDirection::new("T", "T = P*V / (n*R)"),
    ],
    assumptions: &["Ideal gas", "R = 8.314462618 J/(mol·K)"],
};

pub static SPECIFIC_HEAT: EquationMetadata = EquationMetadata {
    id: "q1",
    name: "Specific Heat",
    description: "Heat needed to change the temperature of a mass",
    formula_plain: "Q = m*c*dT",
    category: Category::Thermodynamics,
    variables: &[Q, M, C, DT],
    directions: &[
        SolveDirection::new("Q", "Q = m*c*dT"),
        SolveDirection::new("m", "m = Q / (c*dT)"),
        SolveDirection::new("c", "c = Q / (m*dT)"),
        SolveDirection::new("dT", "dT = Q / (m*c)"),
    ],
    assumptions: &["No phase change", "c constant over the range"],
};

pub static LATENT_HEAT: EquationMetadata = EquationMetadata {
    id: "q2",
    name: "Latent Heat",
    description: "Heat absorbed or released during a phase change",
    formula_plain: "Q = m*L",
    category: Category::Thermodynamics,
    variables: &[Q, M, L],
    directions: &[
        SolveDirection::new("Q", "Q = m*L"),
        SolveDirection::new("m", "m = Q / L"),
        SolveDirection::new("L", "L = Q / m"),
    ],
    assumptions: &["Constant temperature during the phase change"],
};

pub static KINETIC_THEORY: EquationMetadata = EquationMetadata {
    id: "k1",
    name: "Kinetic Theory (Avg K)",
    description: "Average translational kinetic energy per molecule",
    formula_plain: "Kavg = 3/2*k_B*T",
    category: Category::Thermodynamics,
    variables: &[KAVG, T],
    directions: &[
        SolveDirection::new("Kavg", "Kavg = 1.5*k_B*T"),
        SolveDirection::new("T", "T = Kavg / (1.5*k_B)"),
    ],
    assumptions: &["Monatomic ideal gas", "k_B = 1.380649e-23 J/K"],
};

#[inline]
pub fn ideal_gas_pressure(n: f64, t: f64, v: f64) -> f64 {
    n * GAS_CONSTANT * t / v
}

#[inline]
pub fn ideal_gas_volume(n: f64, t: f64, p: f64) -> f64 {
    n * GAS_CONSTANT * t / p
}

#[inline]
pub fn ideal_gas_moles(p: f64, v: f64, t: f64) -> f64 {
    p * v / (GAS_CONSTANT * t)
}

#[inline]
pub fn ideal_gas_temperature(p: f64, v: f64, n: f64) -> f64 {
    p * v / (n * GAS_CONSTANT)
}

#[inline]
pub fn sensible_heat(m: f64, c: f64, dt: f64) -> f64 {
    m * c * dt
}

/// Solves `Q = m·c·ΔT` for whichever factor is missing
#[inline]
pub fn factor_from_heat(q: f64, other_a: f64, other_b: f64) -> f64 {
    q / (other_a * other_b)
}

#[inline]
pub fn latent_heat(m: f64, l: f64) -> f64 {
    m * l
}

#[inline]
pub fn average_kinetic_energy(t: f64) -> f64 {
    1.5 * BOLTZMANN * t
}

#[inline]
pub fn temperature_from_kinetic_energy(kavg: f64) -> f64 {
    kavg / (1.5 * BOLTZMANN)
}

pub(crate) fn evaluate(equation: Equation, target: &str, k: &Knowns) -> Option<f64> {
    let value = match (equation, target) {
        (Equation::IdealGasLaw, "P") => ideal_gas_pressure(k.term("n"), k.term("T"), k.divisor("V")),
        (Equation::IdealGasLaw, "V") => ideal_gas_volume(k.term("n"), k.term("T"), k.divisor("P")),
        (Equation::IdealGasLaw, "n") => ideal_gas_moles(k.term("P"), k.term("V"), k.divisor("T")),
        (Equation::IdealGasLaw, "T") => ideal_gas_temperature(k.term("P"), k.term("V"), k.divisor("n")),

        (Equation::SpecificHeat, "Q") => sensible_heat(k.term("m"), k.term("c"), k.term("dT")),
        (Equation::SpecificHeat, "m") => factor_from_heat(k.term("Q"), k.divisor("c"), k.divisor("dT")),
        (Equation::SpecificHeat, "c") => factor_from_heat(k.term("Q"), k.divisor("m"), k.divisor("dT")),
        (Equation::SpecificHeat, "dT") => factor_from_heat(k.term("Q"), k.divisor("m"), k.divisor("c")),

        (Equation::LatentHeat, "Q") => latent_heat(k.term("m"), k.term("L")),
        (Equation::LatentHeat, "m") => k.term("Q") / k.divisor("L"),
        (Equation::LatentHeat, "L") => k.term("Q") / k.divisor("m"),

        (Equation::KineticTheory, "Kavg") => average_kinetic_energy(k.term("T")),
        (Equation::KineticTheory, "T") => temperature_from_kinetic_energy(k.term("Kavg")),

        _ => return None,
    };
    Some(value)
}
