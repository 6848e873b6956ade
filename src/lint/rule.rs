//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for findings (Hint, Error)

use serde::Serialize;

use super::context::LintContext;
use super::report::LintReport;
use crate::error::Result;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Non-blocking suggestion.
    Hint,
    /// Blocking lint error.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A lint rule that validates one aspect of a recipe.
///
/// Rules are independent of each other: each inspects the normalized
/// document (and, for a few, the raw recipe text) and appends findings to
/// the shared report. A rule that cannot evaluate degrades by skipping.
/// Only rules backed by remote lookups may return an error, and that error
/// aborts the one rule, never the pass.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the recipe and append any findings to the report.
    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()>;
}
