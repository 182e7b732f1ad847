use std::path::Path;

use phys_core::diagnostic_message;
use phys_core::validator::validate_with;

use crate::cli::ProblemArgs;
use crate::support::{load_config_or_exit, print_json, request_or_exit, EXIT_REJECTED};

pub fn run(problem: ProblemArgs, config_path: Option<&Path>) {
    let config = load_config_or_exit(config_path);
    let request = request_or_exit(&problem);
    let equation_id = request
        .equation_id
        .clone()
        .unwrap_or_else(|| request.category.default_equation().id().to_string());

    let result = validate_with(&config, &request.values, &equation_id, &request.solve_for, request.category);

    if problem.json {
        print_json(&result);
    } else {
        println!("physolve validate {equation_id} --solve-for {}", request.solve_for);
        println!();
        println!("{}", diagnostic_message(&result));
    }

    if !result.is_valid {
        std::process::exit(EXIT_REJECTED);
    }
}
