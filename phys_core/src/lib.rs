//! # phys_core - Single-Unknown Physics Equation Solver
//!
//! `phys_core` solves introductory physics problems of the form "given these
//! values, find that one". Every type is JSON-serializable, so structured
//! requests from a form or an AI interpretation service can be passed straight
//! through.
//!
//! ## Design Philosophy
//!
//! - **Closed catalog**: every equation and every solve direction is a fixed,
//!   documented entry; nothing is parsed or solved symbolically
//! - **Explicit leniency**: values filled in on the caller's behalf are
//!   reported as warnings
//! - **Stateless**: pure functions over immutable static tables
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use phys_core::{solve_problem, Category, SolveRequest, SolverConfig};
//! use phys_core::values::values_from;
//!
//! // Kinematics names, momentum question: inference picks j2
//! let request = SolveRequest::new(
//!     Category::Kinematics,
//!     Some("v1"),
//!     values_from(&[("m", 0.5), ("vi", 30.0), ("vf", -40.0)]),
//!     "J",
//! );
//! let solved = solve_problem(&request, &SolverConfig::default())
//!     .unwrap()
//!     .into_result()
//!     .unwrap();
//! assert_eq!(solved.equation_id, "j2");
//! assert!((solved.result - (-35.0)).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - Equation registry and per-category formulas
//! - [`normalizer`] - Cross-category variable aliases
//! - [`derivations`] - Rules for filling in missing inputs
//! - [`validator`] - Input sufficiency checks
//! - [`inference`] - Best-fit equation selection
//! - [`solver`] - End-to-end pipeline
//! - [`steps`] - Solution walkthroughs
//! - [`constants`] - Physical constants
//! - [`config`] - Solver settings
//! - [`errors`] - Structured error types

pub mod config;
pub mod constants;
pub mod derivations;
pub mod equations;
pub mod errors;
pub mod inference;
pub mod normalizer;
pub mod solver;
pub mod steps;
pub mod validator;
pub mod values;

// Re-export commonly used types at crate root for convenience
pub use config::SolverConfig;
pub use equations::{Category, Equation};
pub use errors::{SolverError, SolverResult};
pub use inference::{infer, InferredEquation};
pub use normalizer::normalize;
pub use solver::{solve_problem, Rejection, SolveOutcome, SolveRequest, SolvedProblem, Solver};
pub use validator::{diagnostic_message, validate, ValidationResult};
pub use values::Values;
