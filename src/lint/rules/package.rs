//! Rules over the `package` section: name charset and version grammar.

use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};
use crate::metadata::Version;
use crate::recipe::document::scalar_to_string;

static NAME_PAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9_\-.]+$").unwrap());

/// Package names are restricted to a lowercase charset.
pub struct PackageNameRule;

impl LintRule for PackageNameRule {
    fn id(&self) -> RuleId {
        RuleId::new("package-name")
    }

    fn description(&self) -> &str {
        "Package names use lowercase alphanumerics, underscores, hyphens and dots"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let name = ctx
            .package
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim();
        if !NAME_PAT.is_match(name) {
            report.error(
                self.id(),
                "Recipe name has invalid characters. only lowercase alpha, numeric, \
                 underscores, hyphens and dots allowed",
            );
        }
        Ok(())
    }
}

/// Package versions must parse under the version-ordering grammar.
///
/// The validator's failure is reduced to a finding naming the offending
/// string; it never aborts the pass.
pub struct PackageVersionRule;

impl LintRule for PackageVersionRule {
    fn id(&self) -> RuleId {
        RuleId::new("package-version")
    }

    fn description(&self) -> &str {
        "Package versions must parse under the version grammar"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let Some(value) = ctx.package.get("version") else {
            return Ok(());
        };
        if value.is_null() {
            return Ok(());
        }
        let version = scalar_to_string(value).unwrap_or_default();
        if version.parse::<Version>().is_err() {
            report.error(
                self.id(),
                format!("Package version {} doesn't match conda spec", version),
            );
        }
        Ok(())
    }
}
