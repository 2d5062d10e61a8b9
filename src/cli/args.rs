//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::browser::Browser;

/// Laggard - Detect stale browsers from their user-agent string.
#[derive(Debug, Parser)]
#[command(name = "laggard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print nothing; report through the exit code only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a user-agent belongs to a stale browser
    Check(CheckArgs),

    /// Show recommended alternatives for a laggard on an OS
    Options(OptionsArgs),

    /// List configured laggards and their recommendations
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// The subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Check(_) => "check",
            Commands::Options(_) => "options",
            Commands::List(_) => "list",
            Commands::Completions(_) => "completions",
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// User-agent string to classify
    #[arg(value_name = "USER_AGENT")]
    pub user_agent: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OptionsArgs {
    /// Laggard identifier (e.g., IE8, FF36)
    #[arg(value_name = "LAGGARD")]
    pub laggard: String,

    /// Operating system identifier (xp, vista, win7, osx)
    #[arg(value_name = "OS")]
    pub os: String,

    /// Browsers to leave out of the list (comma-separated, e.g. IE,GCF)
    #[arg(long, value_delimiter = ',', value_name = "BROWSER")]
    pub exclude: Vec<Browser>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
