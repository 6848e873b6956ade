//! Rules over the `about` section: required items and license wording.

use serde_yaml::Value;

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};
use crate::metadata::ensure_valid_license_family;
use crate::recipe::is_blank;

/// The `about` section must carry a home, license and summary.
pub struct AboutContentsRule;

impl LintRule for AboutContentsRule {
    fn id(&self) -> RuleId {
        RuleId::new("about-contents")
    }

    fn description(&self) -> &str {
        "The about section must have home, license and summary"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        for item in ["home", "license", "summary"] {
            if is_blank(ctx.about.get(item)) {
                report.error(
                    self.id(),
                    format!("The {} item is expected in the about section.", item),
                );
            }
        }
        Ok(())
    }
}

fn license_text<'a>(ctx: &'a LintContext) -> &'a str {
    ctx.about
        .get("license")
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// The license must be stated; "unknown" is not a license.
pub struct LicenseUnknownRule;

impl LintRule for LicenseUnknownRule {
    fn id(&self) -> RuleId {
        RuleId::new("license-unknown")
    }

    fn description(&self) -> &str {
        "The license cannot be unknown"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        if license_text(ctx).trim().eq_ignore_ascii_case("unknown") {
            report.error(self.id(), "The recipe license cannot be unknown.");
        }
        Ok(())
    }
}

/// The license text must not contain the redundant word "license".
pub struct LicenseWordingRule;

impl LintRule for LicenseWordingRule {
    fn id(&self) -> RuleId {
        RuleId::new("license-wording")
    }

    fn description(&self) -> &str {
        "The license should not include the word license"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        if license_text(ctx).to_lowercase().contains("license") {
            report.error(
                self.id(),
                "The recipe `license` should not include the word \"License\".",
            );
        }
        Ok(())
    }
}

/// The license family must validate against the packaging-metadata schema.
///
/// The validator's failure is surfaced verbatim as a finding; it never
/// aborts the pass.
pub struct LicenseFamilyRule;

impl LintRule for LicenseFamilyRule {
    fn id(&self) -> RuleId {
        RuleId::new("license-family")
    }

    fn description(&self) -> &str {
        "The license family must be a recognized one"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        if let Err(err) = ensure_valid_license_family(ctx.doc()) {
            report.error(self.id(), err.to_string());
        }
        Ok(())
    }
}
