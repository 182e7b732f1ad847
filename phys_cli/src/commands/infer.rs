use std::path::Path;

use phys_core::inference::{infer_with_floor, score_candidates};
use phys_core::Values;
use serde_json::json;

use crate::support::{load_config_or_exit, print_json, EXIT_REJECTED};

pub fn run(solve_for: String, values: Vec<(String, f64)>, json_output: bool, config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);
    let values: Values = values.into_iter().collect();

    let inferred = infer_with_floor(&values, &solve_for, config.confidence_floor);
    let candidates = score_candidates(&values, &solve_for);

    if json_output {
        print_json(&json!({
            "solveFor": solve_for,
            "confidenceFloor": config.confidence_floor,
            "inferred": inferred,
            "candidates": candidates,
        }));
    } else {
        match &inferred {
            Some(best) => println!(
                "Best match for '{solve_for}': {}/{} (confidence {:.2})",
                best.category, best.equation_id, best.confidence
            ),
            None => println!(
                "No equation solves for '{solve_for}' with confidence >= {:.2}",
                config.confidence_floor
            ),
        }
        if !candidates.is_empty() {
            println!();
            println!("  {:<10} {:<16} {:>10}", "Equation", "Category", "Confidence");
            for candidate in &candidates {
                println!(
                    "  {:<10} {:<16} {:>10.2}",
                    candidate.equation_id,
                    candidate.category.as_str(),
                    candidate.confidence
                );
            }
        }
    }

    if inferred.is_none() {
        std::process::exit(EXIT_REJECTED);
    }
}
