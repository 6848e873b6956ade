//! Top-level section vocabulary and ordering.

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};
use crate::recipe::TOP_LEVEL_SECTIONS;

/// Flags top-level keys outside the recipe vocabulary.
pub struct UnexpectedSectionRule;

impl LintRule for UnexpectedSectionRule {
    fn id(&self) -> RuleId {
        RuleId::new("unexpected-section")
    }

    fn description(&self) -> &str {
        "Top level keys must come from the recipe vocabulary"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        for name in &ctx.major_sections {
            if !TOP_LEVEL_SECTIONS.contains(&name.as_str()) {
                report.error(
                    self.id(),
                    format!("The top level meta key {} is unexpected", name),
                );
            }
        }
        Ok(())
    }
}

/// Checks that the top-level keys appear in canonical order.
///
/// Unexpected keys are excluded before comparing; only the relative order
/// of recognized sections matters.
pub struct SectionOrderRule;

impl LintRule for SectionOrderRule {
    fn id(&self) -> RuleId {
        RuleId::new("section-order")
    }

    fn description(&self) -> &str {
        "Top level keys must follow the canonical section order"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let present = ctx.expected_sections();
        let mut sorted = present.clone();
        sorted.sort_by_key(|name| TOP_LEVEL_SECTIONS.iter().position(|c| c == name));

        if present != sorted {
            let expected = sorted
                .iter()
                .map(|name| format!("'{}'", name))
                .collect::<Vec<_>>()
                .join(", ");
            report.error(
                self.id(),
                format!(
                    "The top level meta keys are in an unexpected order. Expecting [{}].",
                    expected
                ),
            );
        }
        Ok(())
    }
}
