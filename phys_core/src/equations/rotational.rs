//! # Rotational Dynamics
//!
//! Angles in radians, angular rates in rad/s.

use super::registry::{Category, Equation, EquationMetadata, SolveDirection, Variable};
use crate::values::Knowns;

const TAU: Variable = Variable::new("tau", "Torque", "N·m");
const I: Variable = Variable::new("I", "Moment of Inertia", "kg·m²");
const ALPHA: Variable = Variable::new("alpha", "Angular Acceleration", "rad/s²");
const L: Variable = Variable::new("L", "Angular Momentum", "kg·m²/s");
const OMEGA: Variable = Variable::new("omega", "Angular Velocity", "rad/s");
const OMEGA0: Variable = Variable::new("omega0", "Initial Angular Velocity", "rad/s");
const KROT: Variable = Variable::new("Krot", "Rotational Kinetic Energy", "J");
const T: Variable = Variable::new("t", "Time", "s");

pub static TORQUE_INERTIA: EquationMetadata = EquationMetadata {
    id: "rot_tau1",
    name: "Torque (Inertia)",
    description: "Rotational form of Newton's second law",
    formula_plain: "tau = I*alpha",
    category: Category::Rotational,
    variables: &[TAU, I, ALPHA],
    directions: &[
        SolveDirection::new("tau", "tau = I*alpha"),
        SolveDirection::new("I", "I = tau / alpha"),
        SolveDirection::new("alpha", "alpha = tau / I"),
    ],
    assumptions: &["Rigid body about a fixed axis"],
};

pub static ANGULAR_MOMENTUM: EquationMetadata = EquationMetadata {
    id: "rot_L1",
    name: "Angular Momentum",
    description: "Angular momentum of a rigid body",
    formula_plain: "L = I*omega",
    category: Category::Rotational,
    variables: &[L, I, OMEGA],
    directions: &[
        SolveDirection::new("L", "L = I*omega"),
        SolveDirection::new("I", "I = L / omega"),
        SolveDirection::new("omega", "omega = L / I"),
    ],
    assumptions: &["Rigid body about a fixed axis"],
};

pub static ROTATIONAL_KINETIC_ENERGY: EquationMetadata = EquationMetadata {
    id: "rot_ke1",
    name: "Rotational Kinetic Energy",
    description: "Kinetic energy of rotation",
    formula_plain: "Krot = 1/2*I*omega^2",
    category: Category::Rotational,
    variables: &[KROT, I, OMEGA],
    directions: &[
        SolveDirection::new("Krot", "Krot = 0.5*I*omega^2"),
        SolveDirection::new("I", "I = 2*Krot / omega^2"),
        SolveDirection::new("omega", "omega = sqrt(2*Krot / I)"),
    ],
    assumptions: &[],
};

pub static ANGULAR_VELOCITY_TIME: EquationMetadata = EquationMetadata {
    id: "rot_kin1",
    name: "Angular Velocity (Kinematics)",
    description: "Angular velocity after uniform angular acceleration",
    formula_plain: "omega = omega0 + alpha*t",
    category: Category::Rotational,
    variables: &[OMEGA, OMEGA0, ALPHA, T],
    directions: &[
        SolveDirection::new("omega", "omega = omega0 + alpha*t"),
        SolveDirection::new("omega0", "omega0 = omega - alpha*t"),
        SolveDirection::new("alpha", "alpha = (omega - omega0) / t"),
        SolveDirection::new("t", "t = (omega - omega0) / alpha"),
    ],
    assumptions: &["Constant angular acceleration"],
};

#[inline]
pub fn product(a: f64, b: f64) -> f64 {
    a * b
}

#[inline]
pub fn rotational_kinetic_energy(i: f64, omega: f64) -> f64 {
    0.5 * i * omega * omega
}

#[inline]
pub fn inertia_from_kinetic_energy(krot: f64, omega: f64) -> f64 {
    2.0 * krot / (omega * omega)
}

#[inline]
pub fn angular_speed_from_kinetic_energy(krot: f64, i: f64) -> f64 {
    (2.0 * krot / i).sqrt()
}

pub(crate) fn evaluate(equation: Equation, target: &str, k: &Knowns) -> Option<f64> {
    let value = match (equation, target) {
        (Equation::TorqueInertia, "tau") => product(k.term("I"), k.term("alpha")),
        (Equation::TorqueInertia, "I") => k.term("tau") / k.divisor("alpha"),
        (Equation::TorqueInertia, "alpha") => k.term("tau") / k.divisor("I"),

        (Equation::AngularMomentum, "L") => product(k.term("I"), k.term("omega")),
        (Equation::AngularMomentum, "I") => k.term("L") / k.divisor("omega"),
        (Equation::AngularMomentum, "omega") => k.term("L") / k.divisor("I"),

        (Equation::RotationalKineticEnergy, "Krot") => rotational_kinetic_energy(k.term("I"), k.term("omega")),
        (Equation::RotationalKineticEnergy, "I") => inertia_from_kinetic_energy(k.term("Krot"), k.divisor("omega")),
        (Equation::RotationalKineticEnergy, "omega") => {
            angular_speed_from_kinetic_energy(k.term("Krot"), k.divisor("I"))
        }

        (Equation::AngularVelocityTime, "omega") => k.term("omega0") + k.term("alpha") * k.term("t"),
        (Equation::AngularVelocityTime, "omega0") => k.term("omega") - k.term("alpha") * k.term("t"),
        (Equation::AngularVelocityTime, "alpha") => (k.term("omega") - k.term("omega0")) / k.divisor("t"),
        (Equation::AngularVelocityTime, "t") => (k.term("omega") - k.term("omega0")) / k.divisor("alpha"),

        _ => return None,
    };
    Some(value)
}
