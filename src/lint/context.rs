//! Shared per-pass context handed to every rule.
//!
//! The context is built once per pass: it normalizes the heterogeneous
//! section shapes up front (recording shape findings as it goes) so the
//! rules themselves never deal with dict-or-list ambiguity, and it exposes
//! the raw recipe text for the rules that inspect literal layout.

use std::path::{Path, PathBuf};

use serde_yaml::Mapping;

use super::report::LintReport;
use crate::recipe::document::{scalar_to_string, RECIPE_FILE, TOP_LEVEL_SECTIONS};
use crate::recipe::section::{get_list_section, get_section};

/// Normalized view of one recipe document for a single lint pass.
pub struct LintContext<'a> {
    doc: &'a Mapping,
    recipe_dir: Option<PathBuf>,
    /// Top-level keys in document order.
    pub major_sections: Vec<String>,
    pub sources: Vec<Mapping>,
    pub build: Mapping,
    pub requirements: Mapping,
    pub test: Mapping,
    pub about: Mapping,
    pub extra: Mapping,
    pub package: Mapping,
    pub outputs: Vec<Mapping>,
}

impl<'a> LintContext<'a> {
    /// Normalize a document. Shape findings land in `report` before any
    /// rule runs.
    pub fn new(doc: &'a Mapping, recipe_dir: Option<&Path>, report: &mut LintReport) -> Self {
        let major_sections = doc.keys().filter_map(scalar_to_string).collect();

        let sources = get_list_section(doc, "source", true, report);
        let build = get_section(doc, "build", report);
        let requirements = get_section(doc, "requirements", report);
        let test = get_section(doc, "test", report);
        let about = get_section(doc, "about", report);
        let extra = get_section(doc, "extra", report);
        let package = get_section(doc, "package", report);
        let outputs = get_list_section(doc, "outputs", false, report);

        Self {
            doc,
            recipe_dir: recipe_dir.map(Path::to_path_buf),
            major_sections,
            sources,
            build,
            requirements,
            test,
            about,
            extra,
            package,
            outputs,
        }
    }

    /// The raw parsed document.
    pub fn doc(&self) -> &Mapping {
        self.doc
    }

    /// The recipe directory, when linting from disk.
    pub fn recipe_dir(&self) -> Option<&Path> {
        self.recipe_dir.as_deref()
    }

    /// Path of the recipe file, when it is accessible on disk.
    pub fn recipe_file(&self) -> Option<PathBuf> {
        let path = self.recipe_dir.as_ref()?.join(RECIPE_FILE);
        path.exists().then_some(path)
    }

    /// Raw recipe text, when it is accessible on disk. Raw-text rules skip
    /// when this is `None`.
    pub fn recipe_text(&self) -> Option<String> {
        std::fs::read_to_string(self.recipe_file()?).ok()
    }

    /// Top-level keys that belong to the recipe vocabulary, in document
    /// order. Unexpected keys are excluded from order checking.
    pub fn expected_sections(&self) -> Vec<&str> {
        self.major_sections
            .iter()
            .map(String::as_str)
            .filter(|name| TOP_LEVEL_SECTIONS.contains(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn normalizes_all_sections() {
        let doc = doc(
            "package: {name: foo}\nsource: {url: http://x}\nbuild: {number: 0}\nextras: {}\n",
        );
        let mut report = LintReport::new();
        let ctx = LintContext::new(&doc, None, &mut report);

        assert_eq!(ctx.sources.len(), 1);
        assert!(ctx.package.get("name").is_some());
        assert!(ctx.about.is_empty());
        assert!(ctx.outputs.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn major_sections_preserve_document_order() {
        let doc = doc("build: {}\npackage: {}\nunknown: {}\n");
        let mut report = LintReport::new();
        let ctx = LintContext::new(&doc, None, &mut report);

        assert_eq!(ctx.major_sections, vec!["build", "package", "unknown"]);
        assert_eq!(ctx.expected_sections(), vec!["build", "package"]);
    }

    #[test]
    fn shape_findings_surface_during_normalization() {
        let doc = doc("about: not-a-mapping\n");
        let mut report = LintReport::new();
        let ctx = LintContext::new(&doc, None, &mut report);

        assert!(ctx.about.is_empty());
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn single_source_and_list_source_normalize_identically() {
        let single = doc("source: {url: http://x}");
        let listed = doc("source:\n  - {url: http://x}");
        let mut report_a = LintReport::new();
        let mut report_b = LintReport::new();

        let ctx_a = LintContext::new(&single, None, &mut report_a);
        let ctx_b = LintContext::new(&listed, None, &mut report_b);

        assert_eq!(ctx_a.sources, ctx_b.sources);
        assert!(report_a.is_clean());
        assert!(report_b.is_clean());
    }

    #[test]
    fn recipe_text_is_none_without_a_directory() {
        let doc = doc("package: {}");
        let mut report = LintReport::new();
        let ctx = LintContext::new(&doc, None, &mut report);

        assert!(ctx.recipe_file().is_none());
        assert!(ctx.recipe_text().is_none());
    }
}
