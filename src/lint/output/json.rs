//! JSON output formatter.

use std::io::Write;

use serde::Serialize;

use super::LintFormatter;
use crate::lint::{Finding, LintReport};

/// Serialized shape of a report.
#[derive(Serialize)]
struct JsonReport<'a> {
    errors: &'a [Finding],
    hints: &'a [Finding],
}

/// Formats lint output as a JSON object with `errors` and `hints` arrays.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        let view = JsonReport {
            errors: report.errors(),
            hints: report.hints(),
        };
        serde_json::to_writer_pretty(&mut *writer, &view)?;
        writeln!(writer)
    }
}
