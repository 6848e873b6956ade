//! Subsection-name validation against the permitted-field schema.

use serde_yaml::Mapping;

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};
use crate::metadata::permitted_fields;
use crate::recipe::document::scalar_to_string;
use crate::recipe::section::mapping_or_default;

/// Every subsection name must be a permitted field of its section.
///
/// For the list-shaped sections (`source`, `outputs`) the keys of every
/// entry are checked; for plain sections the keys of the mapping itself.
/// Sections without a known schema are skipped.
pub struct FieldSchemaRule;

impl FieldSchemaRule {
    fn check_keys(
        &self,
        section: &str,
        mapping: &Mapping,
        allowed: &[&str],
        report: &mut LintReport,
    ) {
        for key in mapping.keys().filter_map(scalar_to_string) {
            if !allowed.contains(&key.as_str()) {
                report.error(
                    self.id(),
                    format!(
                        "The {} section contained an unexpected subsection name. \
                         {} is not a valid subsection name.",
                        section, key
                    ),
                );
            }
        }
    }
}

impl LintRule for FieldSchemaRule {
    fn id(&self) -> RuleId {
        RuleId::new("field-names")
    }

    fn description(&self) -> &str {
        "Subsection names must come from the section's field schema"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        for section in ctx.expected_sections() {
            let allowed = permitted_fields(section);
            if allowed.is_empty() {
                continue;
            }
            match section {
                "source" => {
                    for entry in &ctx.sources {
                        self.check_keys(section, entry, &allowed, report);
                    }
                }
                "outputs" => {
                    for entry in &ctx.outputs {
                        self.check_keys(section, entry, &allowed, report);
                    }
                }
                _ => {
                    let mapping = mapping_or_default(ctx.doc(), section);
                    self.check_keys(section, &mapping, &allowed, report);
                }
            }
        }
        Ok(())
    }
}
