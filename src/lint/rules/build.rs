//! Rules over the `build` section.

use serde_yaml::Value;

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};

/// Every recipe needs an explicit build number.
pub struct BuildNumberRule;

impl LintRule for BuildNumberRule {
    fn id(&self) -> RuleId {
        RuleId::new("build-number")
    }

    fn description(&self) -> &str {
        "The build section must carry a build number"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        match ctx.build.get("number") {
            Some(value) if !value.is_null() => {}
            _ => {
                report.error(self.id(), "The recipe must have a `build/number` section.");
            }
        }
        Ok(())
    }
}

/// Suggests pip over `python setup.py install` in build scripts.
pub struct PipInstallHintRule;

impl LintRule for PipInstallHintRule {
    fn id(&self) -> RuleId {
        RuleId::new("pip-install")
    }

    fn description(&self) -> &str {
        "Python packages should install with pip"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let Some(script) = ctx.build.get("script") else {
            return Ok(());
        };
        let scripts: Vec<&str> = match script {
            Value::String(s) => vec![s.as_str()],
            Value::Sequence(entries) => entries.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };
        for script in scripts {
            if script.contains("python setup.py install") {
                report.hint(
                    self.id(),
                    "Whenever possible python packages should use pip. \
                     See https://conda-forge.org/docs/meta.html#use-pip",
                );
            }
        }
        Ok(())
    }
}
