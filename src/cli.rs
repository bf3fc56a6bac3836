//! CLI argument definitions for vergate.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vergate")]
#[command(version)]
#[command(about = "Dependency version gate for build recipes", long_about = None)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether an installed version satisfies a constraint expression
    ///
    /// Exits 0 when the constraint is satisfied and 1 when it is not, so
    /// the result can be consumed directly from shell scripts.
    Satisfies {
        /// Installed version, e.g. 2016b
        installed: String,
        /// Constraint expression, e.g. '>=2016a,<=2019b|2021a'
        constraint: String,
    },
    /// Show the epoch/qualifier decomposition of a version string
    Parse {
        /// Version string, e.g. 2016a
        version: String,
    },
    /// Gate a recipe's dependencies against an installed-software manifest
    Check {
        /// Path to the recipe YAML file
        #[arg(long)]
        recipe: String,
        /// Path to the installed-software manifest YAML file
        #[arg(long)]
        manifest: String,
    },
    /// Show version information
    Version {
        /// Show commit hash and build date
        #[arg(long)]
        verbose: bool,
    },
}
