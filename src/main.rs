//! CLI entry point and command handlers for vergate.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use vergate::check::check_dependencies;
use vergate::cli::{Cli, Commands};
use vergate::constraint::satisfies;
use vergate::recipe::{Manifest, Recipe};
use vergate::version::Version;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Satisfies {
            installed,
            constraint,
        } => cmd_satisfies(installed, constraint, cli.quiet),
        Commands::Parse { version } => cmd_parse(version),
        Commands::Check { recipe, manifest } => cmd_check(recipe, manifest, cli.quiet),
        Commands::Version { verbose } => cmd_version(*verbose),
    }
}

/// Evaluate one installed version against one constraint expression.
fn cmd_satisfies(installed: &str, constraint: &str, quiet: bool) -> Result<ExitCode> {
    let ok = satisfies(installed, constraint)?;

    if !quiet {
        if ok {
            println!("{} {} satisfies '{}'", "✓".green(), installed, constraint);
        } else {
            println!(
                "{} {} does not satisfy '{}'",
                "✗".red(),
                installed,
                constraint
            );
        }
    }

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Show the epoch/qualifier decomposition of a version string.
fn cmd_parse(version: &str) -> Result<ExitCode> {
    let parsed = Version::parse(version)?;

    println!("version:   {}", parsed);
    println!("epoch:     {}", parsed.epoch);
    if parsed.qualifier.is_empty() {
        println!("qualifier: (none)");
    } else {
        println!("qualifier: {}", parsed.qualifier);
    }

    Ok(ExitCode::SUCCESS)
}

/// Gate a recipe's dependencies against an installed-software manifest.
fn cmd_check(recipe: &str, manifest: &str, quiet: bool) -> Result<ExitCode> {
    let recipe_path = PathBuf::from(shellexpand::tilde(recipe).to_string());
    let manifest_path = PathBuf::from(shellexpand::tilde(manifest).to_string());

    let recipe = Recipe::load(&recipe_path)?;
    let manifest = Manifest::load(&manifest_path)?;

    let checked = check_dependencies(&recipe.dependencies, &manifest)?;

    if !quiet {
        for dep in &checked {
            println!("{} {} {}", "✓".green(), dep.name, dep.resolved.dimmed());
        }
        println!(
            "{} dependencies satisfied for {} {}",
            checked.len(),
            recipe.name,
            recipe.version
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Show version information.
fn cmd_version(verbose: bool) -> Result<ExitCode> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("vergate {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(ExitCode::SUCCESS)
}
