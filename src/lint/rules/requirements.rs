//! Rules over the `requirements` section: tier ordering and legacy
//! patterns.

use serde_yaml::Value;

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};
use crate::recipe::document::scalar_to_string;

/// Canonical order for the requirement tiers.
pub const REQUIREMENTS_ORDER: [&str; 3] = ["build", "host", "run"];

/// The requirement tiers that are present must keep their canonical
/// relative order. Absent tiers are skipped, not violations.
pub struct RequirementsOrderRule;

impl LintRule for RequirementsOrderRule {
    fn id(&self) -> RuleId {
        RuleId::new("requirements-order")
    }

    fn description(&self) -> &str {
        "Requirement tiers must follow build, host, run order"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let seen: Vec<String> = ctx
            .requirements
            .keys()
            .filter_map(scalar_to_string)
            .filter(|key| REQUIREMENTS_ORDER.contains(&key.as_str()))
            .collect();
        let mut sorted = seen.clone();
        sorted.sort_by_key(|key| REQUIREMENTS_ORDER.iter().position(|c| *c == key.as_str()));

        if seen != sorted {
            report.error(
                self.id(),
                format!(
                    "The `requirements/` sections should be defined in the following order: {}; instead saw: {}.",
                    REQUIREMENTS_ORDER.join(", "),
                    seen.join(", ")
                ),
            );
        }
        Ok(())
    }
}

/// Whether `requirements/build` contains a token: element equality for a
/// list, substring containment for a string.
fn build_requirements_contain(ctx: &LintContext, token: &str) -> bool {
    match ctx.requirements.get("build") {
        Some(Value::Sequence(entries)) => entries.iter().any(|v| v.as_str() == Some(token)),
        Some(Value::String(s)) => s.contains(token),
        _ => false,
    }
}

/// Legacy pattern: pinned numpy in the build requirements.
pub struct PinnedNumpyRule;

impl LintRule for PinnedNumpyRule {
    fn id(&self) -> RuleId {
        RuleId::new("pinned-numpy")
    }

    fn description(&self) -> &str {
        "Pinned numpy packages are a deprecated pattern"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        if build_requirements_contain(ctx, "numpy x.x") {
            report.error(
                self.id(),
                "Using pinned numpy packages is a deprecated pattern.  Consider \
                 using the method outlined \
                 [here](https://conda-forge.org/docs/meta.html#building-against-numpy).",
            );
        }
        Ok(())
    }
}

/// Legacy pattern: direct `toolchain` usage in the build requirements.
pub struct ToolchainRule;

impl LintRule for ToolchainRule {
    fn id(&self) -> RuleId {
        RuleId::new("legacy-toolchain")
    }

    fn description(&self) -> &str {
        "Direct toolchain usage is deprecated"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        if build_requirements_contain(ctx, "toolchain") {
            report.error(
                self.id(),
                "Using toolchain directly in this manner is deprecated.  Consider \
                 using the compilers outlined \
                 [here](https://conda-forge.org/docs/meta.html#compilers).",
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: &dyn LintRule, yaml: &str) -> LintReport {
        let doc: serde_yaml::Mapping = serde_yaml::from_str(yaml).unwrap();
        let mut report = LintReport::new();
        let ctx = LintContext::new(&doc, None, &mut report);
        rule.check(&ctx, &mut report).unwrap();
        report
    }

    #[test]
    fn canonical_tier_order_passes() {
        let report = check(
            &RequirementsOrderRule,
            "requirements:\n  build: [a]\n  host: [b]\n  run: [c]\n",
        );
        assert!(report.is_clean());
    }

    #[test]
    fn reversed_tiers_name_both_orders() {
        let report = check(&RequirementsOrderRule, "requirements:\n  run: [c]\n  build: [a]\n");
        assert_eq!(
            report.error_messages(),
            vec![
                "The `requirements/` sections should be defined in the following order: \
                 build, host, run; instead saw: run, build."
            ]
        );
    }

    #[test]
    fn absent_tiers_are_not_violations() {
        let report = check(&RequirementsOrderRule, "requirements:\n  host: [b]\n  run: [c]\n");
        assert!(report.is_clean());
    }

    #[test]
    fn unknown_tier_keys_are_ignored() {
        let report = check(
            &RequirementsOrderRule,
            "requirements:\n  conflicts: [x]\n  build: [a]\n  run: [c]\n",
        );
        assert!(report.is_clean());
    }

    #[test]
    fn pinned_numpy_list_entry_is_flagged() {
        let report = check(&PinnedNumpyRule, "requirements:\n  build:\n    - numpy x.x\n");
        assert_eq!(report.errors().len(), 1);
        assert!(report.error_messages()[0].contains("building-against-numpy"));
    }

    #[test]
    fn plain_numpy_is_not_flagged() {
        let report = check(&PinnedNumpyRule, "requirements:\n  build:\n    - numpy\n");
        assert!(report.is_clean());
    }

    #[test]
    fn toolchain_entry_is_flagged() {
        let report = check(&ToolchainRule, "requirements:\n  build:\n    - toolchain\n");
        assert_eq!(report.errors().len(), 1);
        assert!(report.error_messages()[0].contains("compilers"));
    }

    #[test]
    fn toolchain_in_string_requirements_is_flagged() {
        let report = check(&ToolchainRule, "requirements:\n  build: toolchain\n");
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn missing_build_tier_passes_legacy_checks() {
        let report = check(&ToolchainRule, "requirements:\n  run: [python]\n");
        assert!(report.is_clean());
    }
}
