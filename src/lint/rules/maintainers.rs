//! Rules over `extra/recipe-maintainers`.

use serde_yaml::Value;

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};
use crate::recipe::is_blank;

/// A recipe must list at least one maintainer.
pub struct MaintainersPresentRule;

impl LintRule for MaintainersPresentRule {
    fn id(&self) -> RuleId {
        RuleId::new("maintainers-present")
    }

    fn description(&self) -> &str {
        "The recipe must list maintainers"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        if is_blank(ctx.extra.get("recipe-maintainers")) {
            report.error(
                self.id(),
                "The recipe could do with some maintainers listed in \
                 the `extra/recipe-maintainers` section.",
            );
        }
        Ok(())
    }
}

/// Maintainers must be a list, not a scalar.
pub struct MaintainersFormatRule;

impl LintRule for MaintainersFormatRule {
    fn id(&self) -> RuleId {
        RuleId::new("maintainers-format")
    }

    fn description(&self) -> &str {
        "Maintainers must be a list"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        match ctx.extra.get("recipe-maintainers") {
            None | Some(Value::Sequence(_)) => {}
            Some(_) => {
                report.error(self.id(), "Recipe maintainers should be a json list.");
            }
        }
        Ok(())
    }
}
