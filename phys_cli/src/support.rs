use std::fs;
use std::path::Path;

use phys_core::{Category, SolveRequest, SolverConfig, SolverError};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cli::ProblemArgs;

/// Exit code for a request that was understood but could not be solved
pub const EXIT_REJECTED: i32 = 2;

pub fn init_logging(level: &str) {
    let level = match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// clap parser for `symbol=number`
pub fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (symbol, number) = s
        .split_once('=')
        .ok_or_else(|| format!("expected symbol=number, got '{s}'"))?;
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(format!("missing symbol in '{s}'"));
    }
    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", number.trim()))?;
    Ok((symbol.to_string(), value))
}

pub fn exit_with(err: &SolverError) -> ! {
    eprintln!("error [{}]: {err}", err.error_code());
    std::process::exit(1);
}

pub fn load_config_or_exit(path: Option<&Path>) -> SolverConfig {
    match path {
        Some(path) => SolverConfig::load(path).unwrap_or_else(|e| exit_with(&e)),
        None => SolverConfig::default(),
    }
}

pub fn parse_category_or_exit(category: &str) -> Category {
    category.parse().unwrap_or_else(|e: SolverError| exit_with(&e))
}

/// Build a request from an optional JSON file plus command-line flags.
pub fn request_or_exit(args: &ProblemArgs) -> SolveRequest {
    let base = args.input.as_deref().map(|path| {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error: failed to read {}: {e}", path.display());
            std::process::exit(1);
        });
        SolveRequest::from_json(&json).unwrap_or_else(|e| exit_with(&e))
    });

    let category = match (&args.category, &base) {
        (Some(c), _) => parse_category_or_exit(c),
        (None, Some(request)) => request.category,
        (None, None) => {
            eprintln!("error: --category is required (or pass --input)");
            std::process::exit(1);
        }
    };
    let solve_for = match (&args.solve_for, &base) {
        (Some(s), _) => s.clone(),
        (None, Some(request)) => request.solve_for.clone(),
        (None, None) => {
            eprintln!("error: --solve-for is required (or pass --input)");
            std::process::exit(1);
        }
    };
    let equation_id = args
        .equation_id
        .clone()
        .or_else(|| base.as_ref().and_then(|r| r.equation_id.clone()));

    let mut values = base.map(|r| r.values).unwrap_or_default();
    values.extend(args.values.iter().cloned());

    SolveRequest {
        category,
        equation_id,
        values,
        solve_for,
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => exit_with(&SolverError::from(e)),
    }
}
