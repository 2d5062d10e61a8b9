//! Check command implementation.
//!
//! The `laggard check` command classifies one user-agent string. It exits
//! with 0 when the browser is current and 1 when it is a laggard.

use std::io::Write;

use crate::browser;
use crate::cli::args::CheckArgs;
use crate::detector::Detector;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// Exit code reported for a laggard.
pub const BEHIND_EXIT_CODE: i32 = 1;

/// The check command implementation.
pub struct CheckCommand<'a> {
    detector: &'a Detector,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(detector: &'a Detector, args: CheckArgs) -> Self {
        Self { detector, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let verdict = self.detector.classify(&self.args.user_agent);

        if self.args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&verdict)?)?;
        } else if let Some(laggard) = &verdict.laggard {
            writeln!(out, "behind: {}", laggard)?;
            if let Some(platform) = verdict.platform {
                writeln!(out, "platform: {}", platform)?;
            }
            if let Some(browsers) = &verdict.recommendations {
                writeln!(out, "recommended: {}", browser::join(browsers))?;
            }
        } else {
            writeln!(out, "current")?;
        }

        if verdict.behind {
            Ok(CommandResult::failure(BEHIND_EXIT_CODE))
        } else {
            Ok(CommandResult::success())
        }
    }
}
