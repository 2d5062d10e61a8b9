//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::{self, Write};

use crate::cli::args::{Cli, Commands};
use crate::detector::Detector;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination for command output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    detector: &'a Detector,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher over the given detector.
    pub fn new(detector: &'a Detector) -> Self {
        Self { detector }
    }

    /// Get the detector commands run against.
    pub fn detector(&self) -> &Detector {
        self.detector
    }

    /// Dispatch and execute a command.
    ///
    /// With `--quiet`, output is discarded and only the exit code remains.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        if cli.quiet {
            return self.run(&cli.command, &mut io::sink());
        }
        self.run(&cli.command, out)
    }

    fn run(&self, command: &Commands, out: &mut dyn Write) -> Result<CommandResult> {
        match command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(self.detector, args.clone());
                cmd.execute(out)
            }
            Commands::Options(args) => {
                let cmd = super::options::OptionsCommand::new(self.detector, args.clone());
                cmd.execute(out)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(self.detector, args.clone());
                cmd.execute(out)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatches_check() {
        let cli = Cli::parse_from([
            "laggard",
            "check",
            "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1;)",
        ]);
        let dispatcher = CommandDispatcher::new(Detector::builtin());
        let mut out = Vec::new();

        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(String::from_utf8(out).unwrap().starts_with("behind"));
    }

    #[test]
    fn quiet_discards_output_but_keeps_exit_code() {
        let cli = Cli::parse_from(["laggard", "--quiet", "options", "IE6", "win7"]);
        let dispatcher = CommandDispatcher::new(Detector::builtin());
        let mut out = Vec::new();

        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(out.is_empty());
    }
}
