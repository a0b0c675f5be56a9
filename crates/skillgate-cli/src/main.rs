//! Skillgate CLI entry point.
//!
//! Binary name: `skillgate`
//!
//! Parses CLI arguments, initializes tracing, then dispatches to the
//! command handlers. The process exits zero only when the requested
//! operation succeeded and, for `validate`, produced no findings -- that
//! binary outcome is what makes the tool usable as a pipeline gate.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,skillgate=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Validate {
            root,
            max_lines,
            exempt,
        } => cli::validate::run_validate(&root, max_lines, &exempt, cli.json),

        Commands::List { root } => {
            cli::list::run_list(&root, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::New {
            name,
            root,
            owner,
            description,
            force,
        } => {
            cli::create::run_create(&root, &name, &owner, description.as_deref(), force, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "skillgate", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}
