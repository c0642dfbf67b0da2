//! Command-line interface.

pub mod ci;
pub mod completions;
pub mod new;
pub mod output;
pub mod pipeline;
pub mod templates;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hatch - bootstrap Gradle projects with Travis CI publishing.
#[derive(Parser)]
#[command(
    name = "hatch",
    about = "Bootstrap Gradle/Kotlin projects with Travis CI publishing",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create missing project files in a directory
    New {
        /// Project directory; its last component is the project name
        #[arg(short, long)]
        project: PathBuf,
        /// Project description
        #[arg(short, long)]
        description: String,
        /// Encrypt credentials and generate .travis.yml
        #[arg(short, long)]
        travis: bool,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt credentials and print .travis.yml without writing it
    Pipeline {
        /// Project directory (must be a git checkout known to Travis)
        #[arg(short, long)]
        project: PathBuf,
    },

    /// List bundled templates and where they are written
    Templates {
        /// Project directory used to resolve destinations
        #[arg(short, long)]
        project: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        New {
            project,
            description,
            travis,
            json,
        } => new::execute(&project, &description, travis, json),
        Pipeline { project } => pipeline::execute(&project),
        Templates { project, json } => templates::execute(project.as_deref(), json),
        Completions { shell } => completions::execute(shell),
    }
}
