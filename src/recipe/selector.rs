//! Selector and template-line classification over raw recipe text.
//!
//! Two line families carry meaning the parsed document cannot represent:
//!
//! - *selector lines*, whose trailing comment holds a bracketed conditional
//!   expression, e.g. `- pywin32  # [win]`
//! - *template variable assignments*, e.g. `{% set version = "1.0" %}`
//!
//! For each family a second, stricter pattern defines the canonical "tidy"
//! form that the formatting rules enforce. The classifiers re-scan the raw
//! text on every call; the text is immutable input, so repeated scans are
//! restartable and deterministic.

use regex::Regex;
use std::sync::LazyLock;

/// A line ending in a bracketed conditional expression, with or without a
/// comment marker. When no `#` is present the bracket must close the line.
static SELECTOR_PAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+?\s*(?:#.*\[[^\[\]]+\].*$|\[[^\[\]]+\]$)").unwrap());

/// Canonical selector form: content, two or more spaces, `#`, one space,
/// bracketed expression.
static TIDY_SELECTOR_PAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+?\s{2,}#\s\[.+\]").unwrap());

/// A templating variable assignment: `{% set name = value %}` with free
/// spacing.
static TEMPLATE_PAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{%\s*set\s+\S+\s*=\s*\S+\s*%\}").unwrap());

/// Canonical template-assignment form: exactly one space around `set`, the
/// variable name, `=` and the value.
static TIDY_TEMPLATE_PAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{%\sset\s\S+\s=\s\S+\s%\}").unwrap());

/// Whether a raw line carries a conditional selector.
///
/// Comment-only lines are never selector lines.
pub fn is_selector_line(line: &str) -> bool {
    let line = line.trim_end();
    if line.trim_start().starts_with('#') {
        return false;
    }
    SELECTOR_PAT.is_match(line)
}

/// Whether a raw line is a templating variable assignment.
pub fn is_template_line(line: &str) -> bool {
    TEMPLATE_PAT.is_match(line.trim_end())
}

/// Whether a selector line is in canonical form.
pub fn is_tidy_selector(line: &str) -> bool {
    TIDY_SELECTOR_PAT.is_match(line)
}

/// Whether a template assignment line is in canonical form.
pub fn is_tidy_template(line: &str) -> bool {
    TIDY_TEMPLATE_PAT.is_match(line)
}

/// All selector lines of a text, as `(line, 1-based line number)` pairs.
pub fn selector_lines(text: &str) -> impl Iterator<Item = (&str, usize)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| is_selector_line(line))
        .map(|(idx, line)| (line, idx + 1))
}

/// All template assignment lines of a text, as `(line, 1-based line number)`
/// pairs.
pub fn template_lines(text: &str) -> impl Iterator<Item = (&str, usize)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| is_template_line(line))
        .map(|(idx, line)| (line, idx + 1))
}
