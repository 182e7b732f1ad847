//! # Physical Constants
//!
//! Reference table of physical constants (CODATA 2018 exact or recommended
//! values) plus the defaults the solver itself relies on.

use serde::Serialize;

/// Gravity assumed when `g` is not supplied (m/s²).
///
/// Rounded on purpose: this is the value users expect from textbook problems.
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Standard acceleration of gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Molar gas constant R (J/(mol·K))
pub const GAS_CONSTANT: f64 = 8.314462618;

/// Boltzmann constant k_B (J/K)
pub const BOLTZMANN: f64 = 1.380649e-23;

/// A named physical constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstant {
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

/// All constants in the library, in display order
pub static PHYSICAL_CONSTANTS: &[PhysicalConstant] = &[
    PhysicalConstant {
        name: "Acceleration due to Gravity",
        symbol: "g",
        value: STANDARD_GRAVITY,
        unit: "m/s²",
        description: "Standard acceleration due to Earth's gravity at sea level.",
    },
    PhysicalConstant {
        name: "Universal Gravitational Constant",
        symbol: "G",
        value: 6.67430e-11,
        unit: "m³·kg⁻¹·s⁻²",
        description: "Constant in Newton's law of universal gravitation.",
    },
    PhysicalConstant {
        name: "Speed of Light",
        symbol: "c",
        value: 299_792_458.0,
        unit: "m/s",
        description: "Exact speed of light in a vacuum.",
    },
    PhysicalConstant {
        name: "Planck Constant",
        symbol: "h",
        value: 6.62607015e-34,
        unit: "J·s",
        description: "Relates the energy of a photon to its frequency.",
    },
    PhysicalConstant {
        name: "Boltzmann Constant",
        symbol: "k_B",
        value: BOLTZMANN,
        unit: "J/K",
        description: "Relates thermal energy to temperature.",
    },
    PhysicalConstant {
        name: "Ideal Gas Constant",
        symbol: "R",
        value: GAS_CONSTANT,
        unit: "J/(mol·K)",
        description: "The molar gas constant in the ideal gas law.",
    },
    PhysicalConstant {
        name: "Elementary Charge",
        symbol: "e",
        value: 1.602176634e-19,
        unit: "C",
        description: "Magnitude of electric charge carried by a single electron.",
    },
    PhysicalConstant {
        name: "Electron Mass",
        symbol: "m_e",
        value: 9.1093837e-31,
        unit: "kg",
        description: "Rest mass of an electron.",
    },
    PhysicalConstant {
        name: "Proton Mass",
        symbol: "m_p",
        value: 1.6726219e-27,
        unit: "kg",
        description: "Rest mass of a proton.",
    },
    PhysicalConstant {
        name: "Avogadro Constant",
        symbol: "N_A",
        value: 6.02214076e23,
        unit: "mol⁻¹",
        description: "Number of constituent particles in one mole of substance.",
    },
    PhysicalConstant {
        name: "Permittivity of Free Space",
        symbol: "ε₀",
        value: 8.8541878128e-12,
        unit: "F/m",
        description: "Describes how an electric field affects a vacuum.",
    },
    PhysicalConstant {
        name: "Permeability of Free Space",
        symbol: "μ₀",
        value: 1.25663706212e-6,
        unit: "N/A²",
        description: "Magnetic permeability of a vacuum.",
    },
];

/// Look up a constant by its symbol
pub fn lookup(symbol: &str) -> Option<&'static PhysicalConstant> {
    PHYSICAL_CONSTANTS.iter().find(|c| c.symbol == symbol)
}
