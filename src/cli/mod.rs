//! Command-line interface for laggard.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`run`] - Entry point used by the binary

pub mod args;
pub mod commands;

use std::io::Write;

use anyhow::Context;

use crate::detector::Detector;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ListArgs, OptionsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};

/// Run the parsed command against a detector and return its exit code.
///
/// Errors carry the failing subcommand as context.
pub fn run(cli: &Cli, detector: &Detector, out: &mut dyn Write) -> anyhow::Result<i32> {
    let result = CommandDispatcher::new(detector)
        .dispatch(cli, out)
        .with_context(|| format!("`{}` command failed", cli.command.name()))?;

    out.flush().context("failed to flush command output")?;

    Ok(result.exit_code)
}
