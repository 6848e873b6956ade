//! The ordered rule catalog.
//!
//! Rules run in a fixed, declared order; findings therefore come out in a
//! deterministic order for identical input. The order affects only message
//! ordering, never correctness: every rule is independent.

use std::sync::Arc;

use super::context::LintContext;
use super::report::LintReport;
use super::rule::LintRule;
use super::rules::{
    AboutContentsRule, BuildNumberRule, FieldSchemaRule, ForgeAdvisoryRule, LicenseFamilyRule,
    LicenseUnknownRule, LicenseWordingRule, MaintainersFormatRule, MaintainersPresentRule,
    NoarchSelectorRule, PackageNameRule, PackageVersionRule, PinnedNumpyRule, PipInstallHintRule,
    RecipeTestsRule, RequirementsOrderRule, SectionOrderRule, SelectorTidyRule, SourceChecksumRule,
    TemplateTidyRule, ToolchainRule, TrailingNewlineRule, UnexpectedSectionRule,
};
use super::LintOptions;

/// An ordered catalog of lint rules.
pub struct RuleSet {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build the full catalog for the given options.
    ///
    /// The advisory rule joins the catalog only when a directory service is
    /// configured; everything else always runs.
    pub fn for_options(options: &LintOptions) -> Self {
        let mut set = Self::new();
        set.push(Box::new(UnexpectedSectionRule));
        set.push(Box::new(SectionOrderRule));
        set.push(Box::new(AboutContentsRule));
        set.push(Box::new(MaintainersPresentRule));
        set.push(Box::new(MaintainersFormatRule));
        set.push(Box::new(RecipeTestsRule));
        set.push(Box::new(LicenseUnknownRule));
        set.push(Box::new(SelectorTidyRule));
        set.push(Box::new(BuildNumberRule));
        set.push(Box::new(RequirementsOrderRule));
        set.push(Box::new(SourceChecksumRule));
        set.push(Box::new(LicenseWordingRule));
        set.push(Box::new(TrailingNewlineRule));
        set.push(Box::new(LicenseFamilyRule));
        set.push(Box::new(PackageNameRule));
        if let Some(directory) = &options.directory {
            set.push(Box::new(ForgeAdvisoryRule::new(
                Arc::clone(directory),
                options.org.clone(),
            )));
        }
        set.push(Box::new(PinnedNumpyRule));
        set.push(Box::new(FieldSchemaRule));
        set.push(Box::new(NoarchSelectorRule));
        set.push(Box::new(PackageVersionRule));
        set.push(Box::new(TemplateTidyRule));
        set.push(Box::new(ToolchainRule));
        set.push(Box::new(PipInstallHintRule));
        set
    }

    /// Append a rule to the catalog.
    pub fn push(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Run every rule in declared order against one context.
    ///
    /// A rule returning an error (only the advisory rule can) is logged and
    /// skipped; the remaining rules still run.
    pub fn run(&self, ctx: &LintContext, report: &mut LintReport) {
        tracing::debug!("running {} lint rules", self.rules.len());
        for rule in &self.rules {
            if let Err(err) = rule.check(ctx, report) {
                tracing::warn!("rule {} aborted: {}", rule.id(), err);
            }
        }
    }

    /// Iterate over the rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Number of rules in the catalog.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::OfflineDirectory;

    #[test]
    fn base_catalog_has_all_core_rules() {
        let set = RuleSet::for_options(&LintOptions::default());
        assert_eq!(set.len(), 22);
    }

    #[test]
    fn directory_service_enables_the_advisory_rule() {
        let options = LintOptions::default().with_directory(Arc::new(OfflineDirectory));
        let set = RuleSet::for_options(&options);
        assert_eq!(set.len(), 23);
        assert!(set.iter().any(|rule| rule.id().0 == "forge-advisory"));
    }

    #[test]
    fn catalog_starts_with_vocabulary_and_ends_with_the_pip_hint() {
        let set = RuleSet::for_options(&LintOptions::default());
        let ids: Vec<String> = set.iter().map(|rule| rule.id().0).collect();
        assert_eq!(ids.first().map(String::as_str), Some("unexpected-section"));
        assert_eq!(ids.last().map(String::as_str), Some("pip-install"));
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let doc: serde_yaml::Mapping =
            serde_yaml::from_str("build: {}\npackage: {name: Foo}\n").unwrap();
        let set = RuleSet::for_options(&LintOptions::default());

        let mut first = LintReport::new();
        let ctx = LintContext::new(&doc, None, &mut first);
        set.run(&ctx, &mut first);

        let mut second = LintReport::new();
        let ctx = LintContext::new(&doc, None, &mut second);
        set.run(&ctx, &mut second);

        assert_eq!(first.error_messages(), second.error_messages());
        assert_eq!(first.hint_messages(), second.hint_messages());
    }
}
