//! Findings and the shared report accumulator.
//!
//! A [`Finding`] is an immutable (severity, message) pair tagged with the
//! rule that produced it. Findings accumulate in two ordered sequences
//! (blocking errors and non-blocking hints) in the order the rules ran, so
//! a report is deterministic for identical input.

use serde::Serialize;

use super::rule::{RuleId, Severity};

/// A single finding produced by a lint rule.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// The rule that produced this finding.
    pub rule: RuleId,
    /// Whether this finding blocks a merge.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

/// Accumulator shared by every rule in a pass.
#[derive(Debug, Default)]
pub struct LintReport {
    errors: Vec<Finding>,
    hints: Vec<Finding>,
}

impl LintReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a blocking error.
    pub fn error(&mut self, rule: RuleId, message: impl Into<String>) {
        self.errors.push(Finding {
            rule,
            severity: Severity::Error,
            message: message.into(),
        });
    }

    /// Record a non-blocking hint.
    pub fn hint(&mut self, rule: RuleId, message: impl Into<String>) {
        self.hints.push(Finding {
            rule,
            severity: Severity::Hint,
            message: message.into(),
        });
    }

    /// Blocking findings, in the order they were recorded.
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// Non-blocking findings, in the order they were recorded.
    pub fn hints(&self) -> &[Finding] {
        &self.hints
    }

    /// Error messages only, for callers that want plain strings.
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|f| f.message.as_str()).collect()
    }

    /// Hint messages only, for callers that want plain strings.
    pub fn hint_messages(&self) -> Vec<&str> {
        self.hints.iter().map(|f| f.message.as_str()).collect()
    }

    /// Whether any blocking finding was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the pass produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.hints.is_empty()
    }

    /// Drop the hints, keeping only blocking findings.
    pub fn without_hints(mut self) -> Self {
        self.hints.clear();
        self
    }
}
