//! # Equation Registry
//!
//! Central catalog of every physics equation the solver understands.
//!
//! ## Architecture
//!
//! - [`Equation`] is a tagged-variant catalog: one variant per equation.
//! - Each variant has static [`EquationMetadata`]: its ordered variable list
//!   and the closed set of [`SolveDirection`]s it can be solved for.
//! - Each direction is backed by a pure function in the category module
//!   (`kinematics`, `dynamics`, ...). Asking for any other target is a typed
//!   [`SolverError::UnsupportedSolveDirection`], never a silent default.
//! - [`EquationRequirement`] is a formula-free index over the same catalog,
//!   used by the validator and the inferrer.
//!
//! ## Usage
//!
//! ```rust
//! use phys_core::equations::registry::{solve, Equation};
//! use phys_core::values::values_from;
//!
//! let f = solve("f1", &values_from(&[("m", 2.0), ("a", 3.0)]), "F").unwrap();
//! assert_eq!(f, 6.0);
//!
//! // x1 cannot be solved for time
//! assert!(Equation::DisplacementTime.solve(&values_from(&[]), "t").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{advanced, dynamics, energy, kinematics, momentum, rotational, thermodynamics, waves};
use crate::errors::{SolverError, SolverResult};
use crate::values::{Knowns, Values};

// ============================================================================
// Categories
// ============================================================================

/// The fixed physical domains an equation can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kinematics,
    Dynamics,
    Energy,
    Momentum,
    Thermodynamics,
    Rotational,
    Waves,
    Advanced,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Kinematics,
        Category::Dynamics,
        Category::Energy,
        Category::Momentum,
        Category::Thermodynamics,
        Category::Rotational,
        Category::Waves,
        Category::Advanced,
    ];

    /// Wire name (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Kinematics => "kinematics",
            Category::Dynamics => "dynamics",
            Category::Energy => "energy",
            Category::Momentum => "momentum",
            Category::Thermodynamics => "thermodynamics",
            Category::Rotational => "rotational",
            Category::Waves => "waves",
            Category::Advanced => "advanced",
        }
    }

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Kinematics => "Kinematics",
            Category::Dynamics => "Dynamics",
            Category::Energy => "Work & Energy",
            Category::Momentum => "Momentum & Impulse",
            Category::Thermodynamics => "Thermodynamics",
            Category::Rotational => "Rotational Motion",
            Category::Waves => "Waves",
            Category::Advanced => "Analytical Mechanics",
        }
    }

    /// Equation used when a caller names a category but no equation
    pub fn default_equation(&self) -> Equation {
        match self {
            Category::Kinematics => Equation::VelocityTime,
            Category::Dynamics => Equation::NewtonSecondLaw,
            Category::Energy => Equation::WorkForceDistance,
            Category::Momentum => Equation::LinearMomentum,
            Category::Thermodynamics => Equation::IdealGasLaw,
            Category::Rotational => Equation::TorqueInertia,
            Category::Waves => Equation::WaveSpeed,
            Category::Advanced => Equation::Lagrangian,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| {
                SolverError::invalid_input("category", s, "expected one of: kinematics, dynamics, energy, momentum, thermodynamics, rotational, waves, advanced")
            })
    }
}

// ============================================================================
// Variable and Direction Definitions
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variable {
    /// Symbol (e.g., "v0", "mu", "Tension")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// SI units (e.g., "m/s", "N")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }

    /// Label for forms, e.g. "Initial Velocity (m/s)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.description, self.units)
    }
}

/// One supported way of solving an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolveDirection {
    /// The symbol this direction produces
    pub target: &'static str,
    /// Rearranged formula in plain text, using the equation's symbols
    pub formula: &'static str,
}

impl SolveDirection {
    pub const fn new(target: &'static str, formula: &'static str) -> Self {
        Self { target, formula }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete static description of an equation.
#[derive(Debug, Clone, Serialize)]
pub struct EquationMetadata {
    /// Stable identifier used on the wire (e.g. "j2")
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation relates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Owning category
    pub category: Category,
    /// Variables in display order; every symbol any direction reads or writes
    pub variables: &'static [Variable],
    /// Closed set of supported solve targets
    pub directions: &'static [SolveDirection],
    /// Assumptions or limitations
    pub assumptions: &'static [&'static str],
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    // Kinematics
    #[serde(rename = "v1")]
    VelocityTime,
    #[serde(rename = "x1")]
    DisplacementTime,
    #[serde(rename = "v2")]
    VelocityDisplacement,
    #[serde(rename = "x2")]
    AverageVelocity,

    // Dynamics
    #[serde(rename = "f1")]
    NewtonSecondLaw,
    #[serde(rename = "w1")]
    Weight,
    #[serde(rename = "ff1")]
    FrictionForce,

    // Energy
    #[serde(rename = "work1")]
    WorkForceDistance,
    #[serde(rename = "ke1")]
    KineticEnergy,
    #[serde(rename = "pe1")]
    PotentialEnergy,
    #[serde(rename = "power1")]
    Power,

    // Momentum
    #[serde(rename = "p1")]
    LinearMomentum,
    #[serde(rename = "j1")]
    ImpulseForceTime,
    #[serde(rename = "j2")]
    ImpulseMomentum,

    // Thermodynamics
    #[serde(rename = "pv1")]
    IdealGasLaw,
    #[serde(rename = "q1")]
    SpecificHeat,
    #[serde(rename = "q2")]
    LatentHeat,
    #[serde(rename = "k1")]
    KineticTheory,

    // Rotational
    #[serde(rename = "rot_tau1")]
    TorqueInertia,
    #[serde(rename = "rot_L1")]
    AngularMomentum,
    #[serde(rename = "rot_ke1")]
    RotationalKineticEnergy,
    #[serde(rename = "rot_kin1")]
    AngularVelocityTime,

    // Waves
    #[serde(rename = "wave_v1")]
    WaveSpeed,
    #[serde(rename = "wave_p1")]
    PeriodFrequency,
    #[serde(rename = "wave_s1")]
    StringWaveSpeed,
    #[serde(rename = "wave_a1")]
    AngularFrequency,

    // Advanced
    #[serde(rename = "lag_1")]
    Lagrangian,
    #[serde(rename = "ham_1")]
    Hamiltonian,
    #[serde(rename = "energy_1")]
    TotalMechanicalEnergy,
}

/// All equations in registry order. Inference scans in this order.
pub static ALL_EQUATIONS: &[Equation] = &[
    // Kinematics
    Equation::VelocityTime,
    Equation::DisplacementTime,
    Equation::VelocityDisplacement,
    Equation::AverageVelocity,
    // Dynamics
    Equation::NewtonSecondLaw,
    Equation::Weight,
    Equation::FrictionForce,
    // Energy
    Equation::WorkForceDistance,
    Equation::KineticEnergy,
    Equation::PotentialEnergy,
    Equation::Power,
    // Momentum
    Equation::LinearMomentum,
    Equation::ImpulseForceTime,
    Equation::ImpulseMomentum,
    // Thermodynamics
    Equation::IdealGasLaw,
    Equation::SpecificHeat,
    Equation::LatentHeat,
    Equation::KineticTheory,
    // Rotational
    Equation::TorqueInertia,
    Equation::AngularMomentum,
    Equation::RotationalKineticEnergy,
    Equation::AngularVelocityTime,
    // Waves
    Equation::WaveSpeed,
    Equation::PeriodFrequency,
    Equation::StringWaveSpeed,
    Equation::AngularFrequency,
    // Advanced
    Equation::Lagrangian,
    Equation::Hamiltonian,
    Equation::TotalMechanicalEnergy,
];

static BY_ID: Lazy<HashMap<&'static str, Equation>> =
    Lazy::new(|| ALL_EQUATIONS.iter().map(|eq| (eq.id(), *eq)).collect());

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> &'static EquationMetadata {
        match self {
            Equation::VelocityTime => &kinematics::VELOCITY_TIME,
            Equation::DisplacementTime => &kinematics::DISPLACEMENT_TIME,
            Equation::VelocityDisplacement => &kinematics::VELOCITY_DISPLACEMENT,
            Equation::AverageVelocity => &kinematics::AVERAGE_VELOCITY,

            Equation::NewtonSecondLaw => &dynamics::NEWTON_SECOND_LAW,
            Equation::Weight => &dynamics::WEIGHT,
            Equation::FrictionForce => &dynamics::FRICTION_FORCE,

            Equation::WorkForceDistance => &energy::WORK_FORCE_DISTANCE,
            Equation::KineticEnergy => &energy::KINETIC_ENERGY,
            Equation::PotentialEnergy => &energy::POTENTIAL_ENERGY,
            Equation::Power => &energy::POWER,

            Equation::LinearMomentum => &momentum::LINEAR_MOMENTUM,
            Equation::ImpulseForceTime => &momentum::IMPULSE_FORCE_TIME,
            Equation::ImpulseMomentum => &momentum::IMPULSE_MOMENTUM,

            Equation::IdealGasLaw => &thermodynamics::IDEAL_GAS_LAW,
            Equation::SpecificHeat => &thermodynamics::SPECIFIC_HEAT,
            Equation::LatentHeat => &thermodynamics::LATENT_HEAT,
            Equation::KineticTheory => &thermodynamics::KINETIC_THEORY,

            Equation::TorqueInertia => &rotational::TORQUE_INERTIA,
            Equation::AngularMomentum => &rotational::ANGULAR_MOMENTUM,
            Equation::RotationalKineticEnergy => &rotational::ROTATIONAL_KINETIC_ENERGY,
            Equation::AngularVelocityTime => &rotational::ANGULAR_VELOCITY_TIME,

            Equation::WaveSpeed => &waves::WAVE_SPEED,
            Equation::PeriodFrequency => &waves::PERIOD_FREQUENCY,
            Equation::StringWaveSpeed => &waves::STRING_WAVE_SPEED,
            Equation::AngularFrequency => &waves::ANGULAR_FREQUENCY,

            Equation::Lagrangian => &advanced::LAGRANGIAN,
            Equation::Hamiltonian => &advanced::HAMILTONIAN,
            Equation::TotalMechanicalEnergy => &advanced::TOTAL_MECHANICAL_ENERGY,
        }
    }

    /// Look up an equation by its wire id
    pub fn from_id(id: &str) -> Option<Equation> {
        BY_ID.get(id).copied()
    }

    pub fn id(&self) -> &'static str {
        self.metadata().id
    }

    pub fn name(&self) -> &'static str {
        self.metadata().name
    }

    pub fn category(&self) -> Category {
        self.metadata().category
    }

    /// Variable symbols in display order
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        self.metadata().variables.iter().map(|v| v.symbol)
    }

    /// Whether `symbol` is one of this equation's variables
    pub fn has_variable(&self, symbol: &str) -> bool {
        self.symbols().any(|s| s == symbol)
    }

    /// Definition of one of this equation's variables
    pub fn variable(&self, symbol: &str) -> Option<&'static Variable> {
        self.metadata().variables.iter().find(|v| v.symbol == symbol)
    }

    /// The supported direction for `target`, if any
    pub fn direction(&self, target: &str) -> Option<&'static SolveDirection> {
        self.metadata().directions.iter().find(|d| d.target == target)
    }

    /// Symbols this equation can be solved for
    pub fn supported_targets(&self) -> Vec<&'static str> {
        self.metadata().directions.iter().map(|d| d.target).collect()
    }

    pub fn supports(&self, target: &str) -> bool {
        self.direction(target).is_some()
    }

    /// Formula-free view of this equation
    pub fn requirement(&self) -> &'static EquationRequirement {
        &REQUIREMENTS[self]
    }

    /// Compute `target` from `values`.
    ///
    /// Absent inputs are read leniently (see [`Knowns`]); use the
    /// [`validator`](crate::validator) first to decide whether the inputs are
    /// actually sufficient.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnsupportedSolveDirection`] if `target` is not one of
    /// this equation's directions.
    pub fn solve(&self, values: &Values, target: &str) -> SolverResult<f64> {
        let unsupported = || SolverError::unsupported_direction(self.id(), target, &self.supported_targets());
        if !self.supports(target) {
            return Err(unsupported());
        }

        let k = Knowns::new(values);
        let value = match self.category() {
            Category::Kinematics => kinematics::evaluate(*self, target, &k),
            Category::Dynamics => dynamics::evaluate(*self, target, &k),
            Category::Energy => energy::evaluate(*self, target, &k),
            Category::Momentum => momentum::evaluate(*self, target, &k),
            Category::Thermodynamics => thermodynamics::evaluate(*self, target, &k),
            Category::Rotational => rotational::evaluate(*self, target, &k),
            Category::Waves => waves::evaluate(*self, target, &k),
            Category::Advanced => advanced::evaluate(*self, target, &k),
        };
        value.ok_or_else(unsupported)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Solve equation `equation_id` for `target`.
///
/// # Errors
///
/// - [`SolverError::UnknownEquation`] if the id is not registered
/// - [`SolverError::UnsupportedSolveDirection`] if the target is not supported
pub fn solve(equation_id: &str, values: &Values, target: &str) -> SolverResult<f64> {
    Equation::from_id(equation_id)
        .ok_or_else(|| SolverError::unknown_equation(equation_id))?
        .solve(values, target)
}

/// Equations of one category, in registry order
pub fn equations_in(category: Category) -> Vec<Equation> {
    ALL_EQUATIONS
        .iter()
        .copied()
        .filter(|eq| eq.category() == category)
        .collect()
}

// ============================================================================
// Requirement Index
// ============================================================================

/// What an equation needs, without any executable formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquationRequirement {
    pub equation: Equation,
    /// Variable symbols in display order
    pub variables: Vec<&'static str>,
    pub category: Category,
}

impl EquationRequirement {
    pub fn contains(&self, symbol: &str) -> bool {
        self.variables.iter().any(|v| *v == symbol)
    }

    /// Variables other than `solve_for`
    pub fn required_for<'a>(&'a self, solve_for: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.variables.iter().copied().filter(move |v| *v != solve_for)
    }
}

static REQUIREMENTS: Lazy<HashMap<Equation, EquationRequirement>> = Lazy::new(|| {
    ALL_EQUATIONS
        .iter()
        .map(|eq| {
            let requirement = EquationRequirement {
                equation: *eq,
                variables: eq.symbols().collect(),
                category: eq.category(),
            };
            (*eq, requirement)
        })
        .collect()
});

/// Requirement entry for an equation id
pub fn requirement(equation_id: &str) -> Option<&'static EquationRequirement> {
    Equation::from_id(equation_id).map(|eq| eq.requirement())
}

/// All requirement entries in registry order
pub fn requirements() -> impl Iterator<Item = &'static EquationRequirement> {
    ALL_EQUATIONS.iter().map(|eq| eq.requirement())
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the equations reference document.
///
/// Lists every equation grouped by category with its formula, variables and
/// supported solve directions.
pub fn generate_equations_markdown() -> String {
    let mut md = String::new();

    md.push_str("# Physolve Equations Reference\n\n");
    md.push_str("> Auto-generated from the equation registry. Do not edit by hand.\n\n");
    md.push_str("All values are in SI units. Each equation can only be solved for the\n");
    md.push_str("targets listed under **Solve directions**.\n\n");

    md.push_str("## Table of Contents\n\n");
    for category in Category::ALL {
        md.push_str(&format!("- [{}](#{})\n", category.display_name(), anchor(category.display_name())));
    }
    md.push('\n');

    for category in Category::ALL {
        md.push_str(&format!("## {}\n\n", category.display_name()));

        for eq in equations_in(category) {
            let meta = eq.metadata();
            md.push_str(&format!("### {} (`{}`)\n\n", meta.name, meta.id));
            md.push_str(&format!("{}\n\n", meta.description));
            md.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            md.push_str("| Symbol | Description | Units |\n");
            md.push_str("|--------|-------------|-------|\n");
            for var in meta.variables {
                md.push_str(&format!("| `{}` | {} | {} |\n", var.symbol, var.description, var.units));
            }
            md.push('\n');

            md.push_str("**Solve directions:**\n\n");
            for dir in meta.directions {
                md.push_str(&format!("- `{}`\n", dir.formula));
            }
            md.push('\n');

            if !meta.assumptions.is_empty() {
                md.push_str("**Assumptions:**\n\n");
                for assumption in meta.assumptions {
                    md.push_str(&format!("- {}\n", assumption));
                }
                md.push('\n');
            }
        }
    }

    let directions: usize = ALL_EQUATIONS.iter().map(|eq| eq.metadata().directions.len()).sum();
    md.push_str("## Statistics\n\n");
    md.push_str(&format!("- **Total Equations:** {}\n", ALL_EQUATIONS.len()));
    md.push_str(&format!("- **Solve Directions:** {}\n", directions));
    md.push_str(&format!("- **Categories:** {}\n", Category::ALL.len()));

    md
}

fn anchor(heading: &str) -> String {
    heading
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => Some(c),
            ' ' => Some('-'),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::values_from;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 29);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.directions.is_empty(), "Equation {:?} has no directions", eq);
        }
    }

    #[test]
    fn test_ids_unique_and_resolvable() {
        for eq in ALL_EQUATIONS {
            assert_eq!(Equation::from_id(eq.id()), Some(*eq));
        }
        assert_eq!(BY_ID.len(), ALL_EQUATIONS.len());
        assert_eq!(Equation::from_id("d1"), None);
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        let json = serde_json::to_string(&Equation::ImpulseMomentum).unwrap();
        assert_eq!(json, "\"j2\"");
        let eq: Equation = serde_json::from_str("\"rot_L1\"").unwrap();
        assert_eq!(eq, Equation::AngularMomentum);
        let cat: Category = serde_json::from_str("\"thermodynamics\"").unwrap();
        assert_eq!(cat, Category::Thermodynamics);
    }

    #[test]
    fn test_directions_are_variables() {
        for eq in ALL_EQUATIONS {
            for dir in eq.metadata().directions {
                assert!(eq.has_variable(dir.target), "{}: direction {} is not a variable", eq, dir.target);
                assert!(
                    dir.formula.starts_with(&format!("{} = ", dir.target)),
                    "{}: formula '{}' does not solve for {}",
                    eq,
                    dir.formula,
                    dir.target
                );
            }
        }
    }

    #[test]
    fn test_every_direction_dispatches() {
        // The static direction table and the formula dispatch must agree
        let values = Values::new();
        for eq in ALL_EQUATIONS {
            for sym in eq.symbols() {
                let result = eq.solve(&values, sym);
                if eq.supports(sym) {
                    assert!(result.is_ok(), "{} should solve for {}", eq, sym);
                } else {
                    assert!(
                        matches!(result, Err(SolverError::UnsupportedSolveDirection { .. })),
                        "{} should reject {}",
                        eq,
                        sym
                    );
                }
            }
        }
    }

    #[test]
    fn test_unsupported_direction() {
        let values = values_from(&[("x", 10.0), ("x0", 0.0), ("v0", 2.0), ("a", 1.0)]);
        let err = solve("x1", &values, "t").unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_SOLVE_DIRECTION");
        if let SolverError::UnsupportedSolveDirection { supported, .. } = err {
            assert_eq!(supported, vec!["x", "x0", "v0", "a"]);
        }

        // Not a variable of the equation at all
        assert!(solve("f1", &values, "J").is_err());
    }

    #[test]
    fn test_unknown_equation() {
        let err = solve("nope", &Values::new(), "x").unwrap_err();
        assert_eq!(err, SolverError::unknown_equation("nope"));
    }

    #[test]
    fn test_same_symbol_different_equations() {
        // Friction N and gas-law n live in different equations
        let friction = Equation::from_id("ff1").unwrap();
        let gas = Equation::from_id("pv1").unwrap();
        assert!(friction.has_variable("N") && !friction.has_variable("n"));
        assert!(gas.has_variable("n") && !gas.has_variable("N"));
        assert_eq!(gas.variable("T").map(|v| v.description), Some("Temperature"));
        assert_eq!(
            Equation::PeriodFrequency.variable("T").map(|v| v.description),
            Some("Period")
        );
    }

    #[test]
    fn test_requirement_index_matches_metadata() {
        for req in requirements() {
            let symbols: Vec<_> = req.equation.symbols().collect();
            assert_eq!(req.variables, symbols);
            assert_eq!(req.category, req.equation.category());
        }
        let j2 = requirement("j2").unwrap();
        assert_eq!(j2.variables, vec!["J", "m", "vi", "vf"]);
        assert_eq!(j2.required_for("J").collect::<Vec<_>>(), vec!["m", "vi", "vf"]);
    }

    #[test]
    fn test_category_parsing_and_defaults() {
        assert_eq!("Momentum".parse::<Category>().unwrap(), Category::Momentum);
        assert!("optics".parse::<Category>().is_err());
        for category in Category::ALL {
            assert_eq!(category.default_equation().category(), category);
            assert!(!equations_in(category).is_empty());
        }
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Physolve Equations Reference"), "Missing title");
        assert!(markdown.contains("## Kinematics"));
        assert!(markdown.contains("## Analytical Mechanics"));
        assert!(markdown.contains("### Impulse-Momentum Theorem (`j2`)"));
        assert!(markdown.contains("`J = m*(vf - vi)`"));
        assert!(markdown.contains("Solving for t is not supported"));
        assert!(markdown.contains("**Total Equations:** 29"));
        assert!(markdown.contains("**Categories:** 8"));
        assert!(markdown.contains("(#work--energy)"));
    }
}
