//! Options command implementation.
//!
//! The `laggard options` command looks up the recommended alternatives for
//! a laggard on an operating system, optionally leaving some browsers out.

use std::io::Write;

use crate::browser::{self, Browser};
use crate::cli::args::OptionsArgs;
use crate::detector::Detector;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// Exit code reported when no recommendation exists.
pub const NOT_FOUND_EXIT_CODE: i32 = 2;

/// The options command implementation.
pub struct OptionsCommand<'a> {
    detector: &'a Detector,
    args: OptionsArgs,
}

impl<'a> OptionsCommand<'a> {
    /// Create a new options command.
    pub fn new(detector: &'a Detector, args: OptionsArgs) -> Self {
        Self { detector, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &OptionsArgs {
        &self.args
    }
}

impl Command for OptionsCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let options: Option<Vec<Browser>> = self
            .detector
            .options(&self.args.laggard, &self.args.os)
            .map(|browsers| {
                browsers
                    .iter()
                    .copied()
                    .filter(|b| !self.args.exclude.contains(b))
                    .collect::<Vec<_>>()
            })
            .filter(|browsers| !browsers.is_empty());

        if self.args.json {
            writeln!(out, "{}", serde_json::to_string(&options)?)?;
        } else {
            match &options {
                Some(browsers) => {
                    for (rank, browser) in browsers.iter().enumerate() {
                        writeln!(out, "{}. {} ({})", rank + 1, browser.id(), browser.display_name())?;
                    }
                }
                None => writeln!(
                    out,
                    "No recommendation for {} on {}",
                    self.args.laggard, self.args.os
                )?,
            }
        }

        match options {
            Some(browsers) => {
                tracing::debug!(
                    laggard = %self.args.laggard,
                    os = %self.args.os,
                    "recommending {}",
                    browser::join(&browsers)
                );
                Ok(CommandResult::success())
            }
            None => Ok(CommandResult::failure(NOT_FOUND_EXIT_CODE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(laggard: &str, os: &str, json: bool) -> (CommandResult, String) {
        run_excluding(laggard, os, json, Vec::new())
    }

    fn run_excluding(
        laggard: &str,
        os: &str,
        json: bool,
        exclude: Vec<Browser>,
    ) -> (CommandResult, String) {
        let cmd = OptionsCommand::new(
            Detector::builtin(),
            OptionsArgs {
                laggard: laggard.to_string(),
                os: os.to_string(),
                exclude,
                json,
            },
        );
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_ranked_recommendations() {
        let (result, output) = run("FF36", "osx", false);

        assert!(result.success);
        assert_eq!(
            output,
            "1. CHROME (Google Chrome)\n2. FF (Mozilla Firefox)\n3. OPERA (Opera)\n"
        );
    }

    #[test]
    fn reports_missing_recommendation() {
        let (result, output) = run("IE6", "win7", false);

        assert_eq!(result.exit_code, NOT_FOUND_EXIT_CODE);
        assert_eq!(output, "No recommendation for IE6 on win7\n");
    }

    #[test]
    fn json_output_is_array_or_null() {
        let (_, found) = run("IE8", "vista", true);
        assert_eq!(found.trim(), r#"["IE","CHROME","FF","GCF","OPERA"]"#);

        let (_, missing) = run("IE8", "osx", true);
        assert_eq!(missing.trim(), "null");
    }

    #[test]
    fn excluded_browsers_are_left_out_in_order() {
        let (result, output) = run_excluding("IE8", "win7", false, vec![Browser::Ie, Browser::Gcf]);

        assert!(result.success);
        assert_eq!(
            output,
            "1. CHROME (Google Chrome)\n2. FF (Mozilla Firefox)\n3. OPERA (Opera)\n"
        );
    }

    #[test]
    fn excluding_every_browser_is_not_found() {
        let (result, output) = run_excluding(
            "FF36",
            "xp",
            true,
            vec![Browser::Chrome, Browser::Ff, Browser::Opera],
        );

        assert_eq!(result.exit_code, NOT_FOUND_EXIT_CODE);
        assert_eq!(output.trim(), "null");
    }
}
