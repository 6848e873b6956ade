//! Human-readable output formatter.
//!
//! Formats findings for terminal display with optional color support.

use std::io::Write;

use console::style;

use super::LintFormatter;
use crate::lint::{Finding, LintReport, Severity};

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn prefix(&self, finding: &Finding) -> String {
        let label = finding.severity.to_string();
        if self.use_color {
            match finding.severity {
                Severity::Error => style(label).red().bold().to_string(),
                Severity::Hint => style(label).yellow().to_string(),
            }
        } else {
            label
        }
    }

    fn write_finding<W: Write>(&self, finding: &Finding, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}[{}]: {}",
            self.prefix(finding),
            finding.rule.0,
            finding.message
        )
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        for finding in report.errors() {
            self.write_finding(finding, writer)?;
        }
        for finding in report.hints() {
            self.write_finding(finding, writer)?;
        }

        if !report.is_clean() {
            writeln!(writer)?;
            writeln!(
                writer,
                "{} error(s), {} hint(s)",
                report.errors().len(),
                report.hints().len()
            )?;
        }
        Ok(())
    }
}
