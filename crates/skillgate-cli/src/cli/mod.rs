//! CLI command definitions and dispatch for the `skillgate` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a verb
//! pattern (e.g., `skillgate validate`, `skillgate new deploy-helper`).

pub mod create;
pub mod list;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Structural validator for skill directories.
#[derive(Parser)]
#[command(name = "skillgate", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every skill directory under the skills root.
    #[command(alias = "check")]
    Validate {
        /// Skills root directory.
        #[arg(default_value = "skills")]
        root: PathBuf,

        /// Override the SKILL.md line ceiling.
        #[arg(long)]
        max_lines: Option<usize>,

        /// Additional exempt directory names (repeatable).
        #[arg(long = "exempt", value_name = "DIR")]
        exempt: Vec<String>,
    },

    /// List skill directories with their declared descriptions.
    #[command(alias = "ls")]
    List {
        /// Skills root directory.
        #[arg(default_value = "skills")]
        root: PathBuf,
    },

    /// Scaffold a new skill directory.
    New {
        /// Skill name (slug format, e.g. "deploy-helper").
        name: String,

        /// Skills root directory.
        #[arg(long, default_value = "skills")]
        root: PathBuf,

        /// Owner recorded in the front matter.
        #[arg(long, default_value = "team")]
        owner: String,

        /// Description recorded in the front matter.
        #[arg(long)]
        description: Option<String>,

        /// Overwrite an existing skill.
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
