//! Every supported direction of every equation must invert the forward form.

use phys_core::equations::{Equation, ALL_EQUATIONS};
use phys_core::values::{values_from, Values};

/// Inputs for each equation's first (forward) direction
fn fixture(equation: Equation) -> Values {
    let pairs: &[(&str, f64)] = match equation {
        Equation::VelocityTime => &[("v0", 3.0), ("a", 2.0), ("t", 4.0)],
        Equation::DisplacementTime => &[("x0", 1.0), ("v0", 3.0), ("t", 2.0), ("a", 1.5)],
        Equation::VelocityDisplacement => &[("v0", 3.0), ("a", 2.0), ("x", 10.0), ("x0", 2.0)],
        Equation::AverageVelocity => &[("x0", 1.0), ("v", 5.0), ("v0", 3.0), ("t", 2.0)],

        Equation::NewtonSecondLaw => &[("m", 2.0), ("a", 3.0)],
        Equation::Weight => &[("m", 10.0), ("g", 9.81)],
        Equation::FrictionForce => &[("mu", 0.3), ("N", 98.1)],

        Equation::WorkForceDistance => &[("F", 10.0), ("d", 5.0), ("theta", 30.0)],
        Equation::KineticEnergy => &[("m", 2.0), ("v", 3.0)],
        Equation::PotentialEnergy => &[("m", 2.0), ("g", 9.81), ("h", 5.0)],
        Equation::Power => &[("W", 100.0), ("t", 4.0)],

        Equation::LinearMomentum => &[("m", 2.0), ("v", 3.0)],
        Equation::ImpulseForceTime => &[("F", 10.0), ("dt", 0.5)],
        Equation::ImpulseMomentum => &[("m", 0.5), ("vi", 30.0), ("vf", -40.0)],

        Equation::IdealGasLaw => &[("V", 0.0224), ("n", 1.0), ("T", 273.15)],
        Equation::SpecificHeat => &[("m", 2.0), ("c", 4186.0), ("dT", 10.0)],
        Equation::LatentHeat => &[("m", 2.0), ("L", 334000.0)],
        Equation::KineticTheory => &[("T", 300.0)],

        Equation::TorqueInertia => &[("I", 2.0), ("alpha", 3.0)],
        Equation::AngularMomentum => &[("I", 2.0), ("omega", 3.0)],
        Equation::RotationalKineticEnergy => &[("I", 2.0), ("omega", 3.0)],
        Equation::AngularVelocityTime => &[("omega0", 1.0), ("alpha", 2.0), ("t", 3.0)],

        Equation::WaveSpeed => &[("f", 440.0), ("lambda", 0.78)],
        Equation::PeriodFrequency => &[("f", 50.0)],
        Equation::StringWaveSpeed => &[("Tension", 100.0), ("mu", 0.01)],
        Equation::AngularFrequency => &[("f", 50.0)],

        Equation::Lagrangian => &[("T", 10.0), ("V", 4.0)],
        Equation::Hamiltonian => &[("T", 10.0), ("V", 4.0)],
        Equation::TotalMechanicalEnergy => &[("T", 10.0), ("V", 4.0)],
    };
    values_from(pairs)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn test_every_direction_round_trips() {
    for eq in ALL_EQUATIONS {
        let meta = eq.metadata();
        let forward = meta.directions[0].target;

        let mut full = fixture(*eq);
        let forward_value = eq.solve(&full, forward).unwrap();
        assert!(forward_value.is_finite(), "{} forward value is not finite", eq);
        full.insert(forward.to_string(), forward_value);

        // The fixture plus the forward value must cover every variable
        for sym in eq.symbols() {
            assert!(full.contains_key(sym), "{} fixture is missing {}", eq, sym);
        }

        for dir in meta.directions {
            let expected = full[dir.target];
            let mut inputs = full.clone();
            inputs.remove(dir.target);

            let solved = eq.solve(&inputs, dir.target).unwrap();
            assert!(
                approx_eq(solved, expected),
                "{} solving for {}: got {}, expected {}",
                eq,
                dir.target,
                solved,
                expected
            );
        }
    }
}

#[test]
fn test_known_forward_values() {
    let cases: &[(&str, &str, f64)] = &[
        ("v1", "v", 11.0),
        ("x1", "x", 10.0),
        ("x2", "x", 9.0),
        ("f1", "F", 6.0),
        ("w1", "W", 98.1),
        ("ff1", "f", 29.43),
        ("ke1", "K", 9.0),
        ("pe1", "U", 98.1),
        ("power1", "P", 25.0),
        ("j2", "J", -35.0),
        ("q1", "Q", 83720.0),
        ("rot_ke1", "Krot", 9.0),
        ("wave_p1", "T", 0.02),
        ("lag_1", "L", 6.0),
        ("ham_1", "H", 14.0),
    ];
    for (id, target, expected) in cases {
        let eq = Equation::from_id(id).unwrap();
        let got = eq.solve(&fixture(eq), target).unwrap();
        assert!(approx_eq(got, *expected), "{} {}: got {}, expected {}", id, target, got, expected);
    }
}
