//! # Physolve CLI Application
//!
//! Command-line front end for `phys_core`: solve, validate and infer
//! single-unknown physics problems, and browse the equation catalog.
//!
//! ```text
//! physolve solve --category momentum --equation j2 --solve-for J \
//!     --value m=0.5 --value vi=30 --value vf=-40
//! physolve infer --solve-for J --value m=0.5 --value v0=30 --value v=-40
//! physolve equations --category waves
//! physolve catalog --output EQUATIONS.md
//! ```
//!
//! Exit codes: `0` success, `1` error, `2` inputs insufficient.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_logging(&cli.log_level);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Solve { problem } => commands::solve::run(problem, config),

        Commands::Validate { problem } => commands::validate::run(problem, config),

        Commands::Infer {
            solve_for,
            values,
            json,
        } => commands::infer::run(solve_for, values, json, config),

        Commands::Equations { category, json } => commands::equations::run(category, json),

        Commands::Catalog { output } => commands::catalog::run(output),

        Commands::Constants { json } => commands::constants::run(json),
    }
}
