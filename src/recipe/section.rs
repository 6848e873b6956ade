//! Section accessors: normalize heterogeneous section shapes.
//!
//! Recipes are hand-written YAML, so a section can show up as the wrong
//! shape entirely (a string where a mapping belongs, a mapping where a list
//! belongs). The accessors here record a shape finding in the shared
//! [`LintReport`] and hand back a safe default so every downstream rule can
//! run without null checks.

use serde_yaml::{Mapping, Value};

use crate::lint::{LintReport, RuleId};
use crate::recipe::document::value_type_name;

fn shape_rule() -> RuleId {
    RuleId::new("section-shape")
}

/// Fetch a plain (mapping-shaped) section.
///
/// An absent section is not a finding; it simply yields an empty mapping.
/// A present but wrong-shaped section yields an empty mapping plus an error.
pub fn get_section(parent: &Mapping, name: &str, report: &mut LintReport) -> Mapping {
    match parent.get(name) {
        None => Mapping::new(),
        Some(Value::Mapping(section)) => section.clone(),
        Some(other) => {
            report.error(
                shape_rule(),
                format!(
                    "The \"{}\" section was expected to be a dictionary, but got a {}.",
                    name,
                    value_type_name(other)
                ),
            );
            Mapping::new()
        }
    }
}

/// Fetch a list-shaped section (`source`, `outputs`).
///
/// With `allow_single`, a bare mapping is accepted and wrapped into a
/// one-element list. Anything else that is not a list yields a single empty
/// placeholder entry plus an error, so rules that iterate entries still run.
/// List entries that are not mappings are themselves replaced by empty
/// placeholders.
pub fn get_list_section(
    parent: &Mapping,
    name: &str,
    allow_single: bool,
    report: &mut LintReport,
) -> Vec<Mapping> {
    match parent.get(name) {
        None => Vec::new(),
        Some(Value::Mapping(section)) if allow_single => vec![section.clone()],
        Some(Value::Sequence(entries)) => entries
            .iter()
            .map(|entry| entry.as_mapping().cloned().unwrap_or_default())
            .collect(),
        Some(other) => {
            report.error(
                shape_rule(),
                format!(
                    "The \"{}\" section was expected to be a {}list, but got a {}.",
                    name,
                    if allow_single { "dictionary or a " } else { "" },
                    value_type_name(other)
                ),
            );
            vec![Mapping::new()]
        }
    }
}

/// Quiet variant of [`get_section`] for rules that re-visit a section the
/// context already normalized (and reported) once.
pub(crate) fn mapping_or_default(parent: &Mapping, name: &str) -> Mapping {
    match parent.get(name) {
        Some(Value::Mapping(section)) => section.clone(),
        _ => Mapping::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn absent_section_is_empty_without_findings() {
        let mut report = LintReport::new();
        let section = get_section(&doc("package: {name: x}"), "about", &mut report);
        assert!(section.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn wrong_shaped_section_reports_and_defaults() {
        let mut report = LintReport::new();
        let section = get_section(&doc("about: just a string"), "about", &mut report);
        assert!(section.is_empty());
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0]
            .message
            .contains("\"about\" section was expected to be a dictionary, but got a string"));
    }

    #[test]
    fn single_source_mapping_is_wrapped() {
        let mut report = LintReport::new();
        let sources = get_list_section(&doc("source: {url: http://x}"), "source", true, &mut report);
        assert_eq!(sources.len(), 1);
        assert!(sources[0].get("url").is_some());
        assert!(report.is_clean());
    }

    #[test]
    fn source_list_passes_through() {
        let mut report = LintReport::new();
        let sources = get_list_section(
            &doc("source:\n  - {url: http://x}\n  - {url: http://y}"),
            "source",
            true,
            &mut report,
        );
        assert_eq!(sources.len(), 2);
        assert!(report.is_clean());
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut report = LintReport::new();
        let parent = doc("source:\n  - {url: http://x}");
        let first = get_list_section(&parent, "source", true, &mut report);
        let second = get_list_section(&parent, "source", true, &mut report);
        assert_eq!(first, second);
        assert!(report.is_clean());
    }

    #[test]
    fn outputs_mapping_is_not_wrapped() {
        let mut report = LintReport::new();
        let outputs = get_list_section(&doc("outputs: {name: x}"), "outputs", false, &mut report);
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].is_empty());
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0]
            .message
            .contains("expected to be a list, but got a dictionary"));
    }

    #[test]
    fn scalar_source_reports_with_both_shapes_named() {
        let mut report = LintReport::new();
        let sources = get_list_section(&doc("source: 42"), "source", true, &mut report);
        assert_eq!(sources.len(), 1);
        assert!(report.errors()[0]
            .message
            .contains("expected to be a dictionary or a list, but got a number"));
    }

    #[test]
    fn non_mapping_entries_become_placeholders() {
        let mut report = LintReport::new();
        let outputs = get_list_section(&doc("outputs:\n  - plain\n  - {name: x}"), "outputs", false, &mut report);
        assert_eq!(outputs.len(), 2);
        assert!(outputs[0].is_empty());
        assert!(outputs[1].get("name").is_some());
    }
}
