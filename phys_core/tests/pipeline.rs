//! End-to-end scenarios through the solve pipeline.

use phys_core::equations::{requirements, Equation, ALL_EQUATIONS};
use phys_core::values::{values_from, Values};
use phys_core::{
    infer, normalize, solve_problem, validate, Category, SolveOutcome, SolveRequest, SolverConfig, SolverError,
};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn run(request: &SolveRequest) -> SolveOutcome {
    solve_problem(request, &SolverConfig::default()).unwrap()
}

#[test]
fn test_ball_rebound_recovers_via_inference() {
    // Wrong category, wrong equation: kinematics cannot solve for J
    let request = SolveRequest::new(
        Category::Kinematics,
        Some("v1"),
        values_from(&[("m", 0.5), ("vi", 30.0), ("vf", -40.0)]),
        "J",
    );
    let solved = run(&request).into_result().unwrap();

    assert_eq!(solved.equation_id, "j2");
    assert_eq!(solved.category, Category::Momentum);
    assert!(approx_eq(solved.result, -35.0, 1e-9));

    let inferred = solved.inferred.unwrap();
    assert_eq!(inferred.equation_id, "j2");
    assert_eq!(inferred.confidence, 1.0);
    assert_eq!(solved.steps.last().unwrap().formula.as_deref(), Some("J = -35.000"));
}

#[test]
fn test_ai_json_with_kinematic_names() {
    let request = SolveRequest::from_json(
        r#"{
            "category": "momentum",
            "equationId": "j2",
            "values": {"m": 0.5, "v0": 30, "v": -40, "t": null},
            "solveFor": "J"
        }"#,
    )
    .unwrap();
    let solved = run(&request).into_result().unwrap();
    assert!(approx_eq(solved.result, -35.0, 1e-9));
    assert!(solved.inferred.is_none());
    assert_eq!(solved.normalized_values["vi"], 30.0);
    assert_eq!(solved.normalized_values["v0"], 30.0);
}

#[test]
fn test_friction_with_mass_instead_of_normal_force() {
    let request = SolveRequest::new(
        Category::Dynamics,
        Some("ff1"),
        values_from(&[("mu", 0.3), ("m", 10.0)]),
        "f",
    );
    let solved = run(&request).into_result().unwrap();
    assert!(approx_eq(solved.result, 29.43, 1e-9));
    assert!(approx_eq(solved.normalized_values["N"], 98.1, 1e-9));
    assert!(solved.warnings.iter().any(|w| w.contains("N = m*g")));
}

#[test]
fn test_friction_without_mass_reports_missing_normal_force() {
    let request = SolveRequest::new(Category::Dynamics, Some("ff1"), values_from(&[("mu", 0.3)]), "f");
    let SolveOutcome::Rejected(rejection) = run(&request) else {
        panic!("expected rejection");
    };
    assert_eq!(rejection.validation.missing, vec!["N"]);
    assert!(rejection.validation.suggestions.iter().any(|s| s.contains("'m'")));

    match rejection.into_error() {
        SolverError::MissingVariables { equation_id, missing } => {
            assert_eq!(equation_id, "ff1");
            assert_eq!(missing, vec!["N"]);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_failed_inference_is_final() {
    let config = SolverConfig::default();

    // j1 lacks dt and j2 lacks vf: nothing reaches the floor
    let request = SolveRequest::new(
        Category::Kinematics,
        Some("v1"),
        values_from(&[("m", 0.5), ("vi", 30.0), ("F", 10.0)]),
        "J",
    );
    let SolveOutcome::Rejected(rejection) = solve_problem(&request, &config).unwrap() else {
        panic!("expected rejection");
    };
    assert!(rejection.inference_attempted);
    assert!(rejection.inferred.is_none());
    assert_eq!(rejection.equation_id, "v1");
    assert_eq!(rejection.into_error().error_code(), "LOW_CONFIDENCE_INFERENCE");

    // With dt present j1 scores 1.0 and the single retry succeeds
    let request = SolveRequest::new(
        Category::Kinematics,
        Some("v1"),
        values_from(&[("m", 0.5), ("vi", 30.0), ("F", 10.0), ("dt", 0.1)]),
        "J",
    );
    let solved = solve_problem(&request, &config).unwrap().into_result().unwrap();
    assert_eq!(solved.equation_id, "j1");
    assert!(approx_eq(solved.result, 1.0, 1e-12));
}

#[test]
fn test_inference_moves_across_categories() {
    let config = SolverConfig {
        confidence_floor: 1.0,
        ..SolverConfig::default()
    };
    // wave_v1 needs v and lambda for f; friction f is reachable through N = m*g
    let request = SolveRequest::new(
        Category::Waves,
        Some("wave_v1"),
        values_from(&[("mu", 0.3), ("m", 10.0)]),
        "f",
    );
    let solved = solve_problem(&request, &config).unwrap().into_result().unwrap();
    assert_eq!(solved.equation_id, "ff1");
    assert_eq!(solved.category, Category::Dynamics);
    assert!(approx_eq(solved.result, 29.43, 1e-9));
}

#[test]
fn test_unsupported_direction_is_error() {
    let request = SolveRequest::new(
        Category::Kinematics,
        Some("x1"),
        values_from(&[("x", 10.0), ("x0", 0.0), ("v0", 2.0), ("a", 1.0)]),
        "t",
    );
    let err = solve_problem(&request, &SolverConfig::default()).unwrap_err();
    match err {
        SolverError::UnsupportedSolveDirection { equation_id, target, supported } => {
            assert_eq!(equation_id, "x1");
            assert_eq!(target, "t");
            assert!(!supported.contains(&"t".to_string()));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_inference_only_proposes_solvable_equations() {
    let values = values_from(&[("x", 10.0), ("x0", 0.0), ("v0", 2.0), ("a", 1.0), ("m", 3.0), ("F", 4.0)]);
    for eq in ALL_EQUATIONS {
        for sym in eq.symbols() {
            if let Some(inferred) = infer(&values, sym) {
                let proposed = Equation::from_id(&inferred.equation_id).unwrap();
                assert!(proposed.supports(sym), "{} proposed for {}", proposed, sym);
            }
        }
    }
}

#[test]
fn test_time_from_displacement_is_rejected_not_error() {
    // x1 holds every input but cannot be solved for t; x2 still lacks v
    let values = values_from(&[("x", 10.0), ("x0", 0.0), ("v0", 2.0), ("a", 1.0)]);

    let request = SolveRequest::new(Category::Kinematics, Some("v1"), values.clone(), "t");
    let SolveOutcome::Rejected(rejection) = run(&request) else {
        panic!("expected rejection");
    };
    assert!(rejection.inference_attempted);
    assert!(rejection.inferred.is_none());
    assert_eq!(rejection.validation.missing, vec!["v"]);

    // f1 has no t at all, so the failed inference is what the caller hears about
    let request = SolveRequest::new(Category::Dynamics, Some("f1"), values, "t");
    let SolveOutcome::Rejected(rejection) = run(&request) else {
        panic!("expected rejection");
    };
    assert!(rejection.inferred.is_none());
    assert_eq!(rejection.into_error().error_code(), "LOW_CONFIDENCE_INFERENCE");
}

#[test]
fn test_non_finite_result_is_error() {
    // a = F / m with m = 0
    let request = SolveRequest::new(
        Category::Dynamics,
        Some("f1"),
        values_from(&[("F", 10.0), ("m", 0.0)]),
        "a",
    );
    let err = solve_problem(&request, &SolverConfig::default()).unwrap_err();
    assert_eq!(err.error_code(), "NON_FINITE_RESULT");
}

#[test]
fn test_validator_completeness() {
    for req in requirements() {
        for target in req.equation.supported_targets() {
            let result = validate(&Values::new(), req.equation.id(), target, req.category);
            assert!(!result.is_valid, "{} for {} accepted empty input", req.equation, target);

            // Everything without a default must be named
            for sym in req.required_for(target) {
                let defaultable = phys_core::derivations::has_default(req.equation, sym);
                assert_eq!(
                    result.missing.iter().any(|m| m == sym),
                    !defaultable,
                    "{} for {}: missing list {:?}",
                    req.equation,
                    target,
                    result.missing
                );
            }
        }
    }
}

#[test]
fn test_validator_soundness() {
    for req in requirements() {
        for target in req.equation.supported_targets() {
            let values: Values = req.required_for(target).map(|s| (s.to_string(), 2.0)).collect();
            let result = validate(&values, req.equation.id(), target, req.category);
            assert!(result.is_valid, "{} for {}: {:?}", req.equation, target, result.errors);
            assert!(result.errors.is_empty());
        }
    }
}

#[test]
fn test_inference_respects_floor_everywhere() {
    let values = values_from(&[("m", 1.0), ("v", 2.0), ("t", 3.0), ("F", 4.0)]);
    for eq in ALL_EQUATIONS {
        for sym in eq.symbols() {
            if let Some(inferred) = infer(&values, sym) {
                assert!(inferred.confidence >= 0.8);
                assert!(inferred.confidence <= 1.0);
            }
        }
    }
}

#[test]
fn test_normalization_is_idempotent() {
    let values = values_from(&[("v0", 1.0), ("vf", 2.0), ("d", 3.0), ("t", 4.0), ("v1", 5.0)]);
    for category in Category::ALL {
        let once = normalize(&values, category);
        assert_eq!(normalize(&once, category), once);
    }
}

#[test]
fn test_rejected_outcome_serializes_with_status() {
    let request = SolveRequest::new(Category::Momentum, Some("j2"), values_from(&[("m", 0.5)]), "J");
    let outcome = run(&request);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["validation"]["isValid"], false);
    assert_eq!(json["validation"]["missing"][0], "vi");
}
