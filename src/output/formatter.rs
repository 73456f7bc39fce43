use anyhow::Result;
use std::fmt::Write;

use crate::cli::OutputFormat;

use super::RunSummary;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(summary: &RunSummary, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_text(summary)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(summary)?),
        }
    }

    pub fn format_text(summary: &RunSummary) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "Running {} Tests", summary.total);
        for suite in &summary.suites {
            let _ = writeln!(out, "Running test: {}", suite.name);
            if suite.passed {
                let _ = writeln!(out, "SUCCESS");
            } else {
                let _ = writeln!(out, "FAILURE");
                for failure in &suite.failures {
                    let _ = writeln!(out, "  {}: {}", failure.step, failure.outcome.as_str());
                }
            }
        }

        for skipped in &summary.skipped {
            let _ = writeln!(out, "Skipped {}: {}", skipped.name, skipped.reason);
        }

        if summary.all_passed() {
            let _ = writeln!(out, "All Tests Passed");
        } else {
            let _ = writeln!(out, "{} Test Failures", summary.failed);
        }

        out
    }
}
