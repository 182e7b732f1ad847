//! # Physics Equations
//!
//! All equations the solver can evaluate, grouped by physical domain.
//! Having every formula in one place enables:
//! - Checking each rearrangement against its forward form
//! - Documenting assumptions next to the formula
//! - A single registry for lookup, validation and inference
//!
//! ## Modules
//!
//! - [`registry`] - Equation catalog, categories, requirement index, dispatch
//! - [`kinematics`] - Constant-acceleration motion
//! - [`dynamics`] - Forces, weight, friction
//! - [`energy`] - Work, kinetic/potential energy, power
//! - [`momentum`] - Momentum and impulse
//! - [`thermodynamics`] - Gas law, heat, kinetic theory
//! - [`rotational`] - Torque, angular momentum, rotational energy
//! - [`waves`] - Wave speed, period, angular frequency
//! - [`advanced`] - Lagrangian, Hamiltonian, total energy
//!
//! ## Conventions
//!
//! - **Units**: SI throughout, except `theta` in `work1` (degrees)
//! - **Signs**: velocities and displacements are signed along one axis
//! - **Roots**: square-root directions return the non-negative root

pub mod advanced;
pub mod dynamics;
pub mod energy;
pub mod kinematics;
pub mod momentum;
pub mod registry;
pub mod rotational;
pub mod thermodynamics;
pub mod waves;

pub use registry::{
    equations_in,
    generate_equations_markdown,
    requirement,
    requirements,
    solve,
    Category,
    Equation,
    EquationMetadata,
    EquationRequirement,
    SolveDirection,
    Variable,
    ALL_EQUATIONS,
};
