use std::path::Path;

use phys_core::{diagnostic_message, SolveOutcome, Solver};

use crate::cli::ProblemArgs;
use crate::support::{exit_with, load_config_or_exit, print_json, request_or_exit, EXIT_REJECTED};

pub fn run(problem: ProblemArgs, config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);
    let request = request_or_exit(&problem);
    let outcome = Solver::new(config).solve(&request).unwrap_or_else(|e| exit_with(&e));

    if problem.json {
        print_json(&outcome);
        if !outcome.is_solved() {
            std::process::exit(EXIT_REJECTED);
        }
        return;
    }

    match outcome {
        SolveOutcome::Solved(solved) => {
            println!("{} = {}", solved.solve_for, solved.result);
            println!("  Equation: {} ({})", solved.equation_id, solved.category);
            if let Some(inferred) = &solved.inferred {
                println!(
                    "  Inferred: {}/{} (confidence {:.2})",
                    inferred.category, inferred.equation_id, inferred.confidence
                );
            }
            if !solved.warnings.is_empty() {
                println!("  Warnings:");
                for warning in &solved.warnings {
                    println!("    - {warning}");
                }
            }
            println!();
            println!("Steps:");
            for (i, step) in solved.steps.iter().enumerate() {
                match &step.formula {
                    Some(formula) => println!("  {}. {}\n       {}", i + 1, step.description, formula),
                    None => println!("  {}. {}", i + 1, step.description),
                }
            }
        }
        SolveOutcome::Rejected(rejection) => {
            println!("Cannot solve {} for '{}'", rejection.equation_id, rejection.solve_for);
            println!();
            println!("{}", diagnostic_message(&rejection.validation));
            if rejection.inference_attempted && rejection.inferred.is_none() {
                println!();
                println!(
                    "No equation matched the known values with confidence >= {:.2}.",
                    rejection.confidence_floor
                );
            }
            std::process::exit(EXIT_REJECTED);
        }
    }
}
