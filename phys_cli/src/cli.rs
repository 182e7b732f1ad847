use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "physolve",
    about = "Physolve: single-unknown physics equation solver",
    version
)]
pub struct Cli {
    /// Solver settings file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Logging level: trace, debug, info, warn, error (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Problem description shared by `solve` and `validate`.
#[derive(Args, Debug, Clone)]
pub struct ProblemArgs {
    /// Category: kinematics, dynamics, energy, momentum, thermodynamics,
    /// rotational, waves, advanced
    #[arg(long)]
    pub category: Option<String>,

    /// Equation id (defaults to the category's default equation)
    #[arg(long = "equation")]
    pub equation_id: Option<String>,

    /// Variable to solve for
    #[arg(long)]
    pub solve_for: Option<String>,

    /// Known value as `symbol=number` (repeatable)
    #[arg(long = "value", value_parser = crate::support::parse_assignment)]
    pub values: Vec<(String, f64)>,

    /// JSON request file; flags given alongside it take precedence
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve a problem for one unknown
    Solve {
        #[command(flatten)]
        problem: ProblemArgs,
    },

    /// Check whether the inputs are sufficient without solving
    Validate {
        #[command(flatten)]
        problem: ProblemArgs,
    },

    /// Find the equation that best fits the known values
    Infer {
        /// Variable to solve for
        #[arg(long)]
        solve_for: String,

        /// Known value as `symbol=number` (repeatable)
        #[arg(long = "value", value_parser = crate::support::parse_assignment)]
        values: Vec<(String, f64)>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List equations and their solve directions
    Equations {
        /// Only list this category
        #[arg(long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the markdown equations reference
    Catalog {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List physical constants
    Constants {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
