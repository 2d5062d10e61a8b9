//! List command implementation.
//!
//! The `laggard list` command lists the configured laggards in definition
//! order along with their per-platform recommendations.

use std::io::Write;

use serde::Serialize;

use crate::browser;
use crate::cli::args::ListArgs;
use crate::detector::{CoverageGap, Detector};
use crate::error::Result;
use crate::laggard::LaggardSet;
use crate::recommendation::RecommendationTable;

use super::dispatcher::{Command, CommandResult};

/// Serialized form of the detector tables.
#[derive(Debug, Serialize)]
struct TableDump<'a> {
    laggards: &'a LaggardSet,
    recommendations: &'a RecommendationTable,
    coverage_gaps: Vec<CoverageGap>,
}

/// The list command implementation.
pub struct ListCommand<'a> {
    detector: &'a Detector,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(detector: &'a Detector, args: ListArgs) -> Self {
        Self { detector, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn dump(&self) -> TableDump<'a> {
        TableDump {
            laggards: self.detector.laggards(),
            recommendations: self.detector.recommendations(),
            coverage_gaps: self.detector.coverage_gaps(),
        }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        if self.args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&self.dump())?)?;
            return Ok(CommandResult::success());
        }

        if self.args.yaml {
            write!(out, "{}", serde_yaml::to_string(&self.dump())?)?;
            return Ok(CommandResult::success());
        }

        let recommendations = self.detector.recommendations();

        writeln!(out, "Laggards:")?;
        for id in self.detector.laggard_ids() {
            writeln!(out, "  {}", id)?;
            match recommendations.platforms(id) {
                Some(platforms) if !platforms.is_empty() => {
                    for (platform, browsers) in platforms {
                        writeln!(out, "    {}: {}", platform, browser::join(browsers))?;
                    }
                }
                _ => writeln!(out, "    (no recommendations)")?,
            }
        }

        let gaps = self.detector.coverage_gaps();
        if !gaps.is_empty() {
            writeln!(out)?;
            writeln!(out, "Coverage gaps:")?;
            for gap in &gaps {
                writeln!(out, "  - {}", gap)?;
            }
        }

        Ok(CommandResult::success())
    }
}
