//! # Analytical Mechanics
//!
//! Scalar energy functions. `T` is kinetic and `V` potential energy.

use super::registry::{Category, Equation, EquationMetadata, SolveDirection, Variable};
use crate::values::Knowns;

const L: Variable = Variable::new("L", "Lagrangian", "J");
const H: Variable = Variable::new("H", "Hamiltonian", "J");
const E: Variable = Variable::new("E", "Total Energy", "J");
const T: Variable = Variable::new("T", "Kinetic Energy", "J");
const V: Variable = Variable::new("V", "Potential Energy", "J");

pub static LAGRANGIAN: EquationMetadata = EquationMetadata {
    id: "lag_1",
    name: "Lagrangian",
    description: "Kinetic minus potential energy",
    formula_plain: "L = T - V",
    category: Category::Advanced,
    variables: &[L, T, V],
    directions: &[
        SolveDirection::new("L", "L = T - V"),
        SolveDirection::new("T", "T = L + V"),
        SolveDirection::new("V", "V = T - L"),
    ],
    assumptions: &[],
};

pub static HAMILTONIAN: EquationMetadata = EquationMetadata {
    id: "ham_1",
    name: "Hamiltonian (Conservative)",
    description: "Kinetic plus potential energy for a conservative system",
    formula_plain: "H = T + V",
    category: Category::Advanced,
    variables: &[H, T, V],
    directions: &[
        SolveDirection::new("H", "H = T + V"),
        SolveDirection::new("T", "T = H - V"),
        SolveDirection::new("V", "V = H - T"),
    ],
    assumptions: &["Time-independent constraints", "Conservative forces"],
};

pub static TOTAL_MECHANICAL_ENERGY: EquationMetadata = EquationMetadata {
    id: "energy_1",
    name: "Total Mechanical Energy",
    description: "Sum of kinetic and potential energy",
    formula_plain: "E = T + V",
    category: Category::Advanced,
    variables: &[E, T, V],
    directions: &[
        SolveDirection::new("E", "E = T + V"),
        SolveDirection::new("T", "T = E - V"),
        SolveDirection::new("V", "V = E - T"),
    ],
    assumptions: &[],
};

pub(crate) fn evaluate(equation: Equation, target: &str, k: &Knowns) -> Option<f64> {
    // H and E share the same form
    let total = match equation {
        Equation::Hamiltonian => "H",
        _ => "E",
    };
    let value = match (equation, target) {
        (Equation::Lagrangian, "L") => k.term("T") - k.term("V"),
        (Equation::Lagrangian, "T") => k.term("L") + k.term("V"),
        (Equation::Lagrangian, "V") => k.term("T") - k.term("L"),

        (Equation::Hamiltonian | Equation::TotalMechanicalEnergy, t) if t == total => k.term("T") + k.term("V"),
        (Equation::Hamiltonian | Equation::TotalMechanicalEnergy, "T") => k.term(total) - k.term("V"),
        (Equation::Hamiltonian | Equation::TotalMechanicalEnergy, "V") => k.term(total) - k.term("T"),

        _ => return None,
    };
    Some(value)
}
