//! Rules that inspect the literal recipe text.
//!
//! Selector comments, templating lines and trailing newlines do not survive
//! the render/parse pipeline, so these rules re-read the recipe file. They
//! only evaluate when the file is accessible on disk; a purely in-memory
//! document skips them.

use crate::error::Result;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};
use crate::recipe::document::scalar_to_string;
use crate::recipe::{
    is_selector_line, is_tidy_selector, is_tidy_template, selector_lines, template_lines,
};

/// Selector comments must be in canonical form.
pub struct SelectorTidyRule;

impl LintRule for SelectorTidyRule {
    fn id(&self) -> RuleId {
        RuleId::new("selector-format")
    }

    fn description(&self) -> &str {
        "Selectors take a two-spaces-hash-one-space form"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let Some(text) = ctx.recipe_text() else {
            return Ok(());
        };
        let bad_lines: Vec<usize> = selector_lines(&text)
            .filter(|(line, _)| !is_tidy_selector(line))
            .map(|(_, number)| number)
            .collect();
        if !bad_lines.is_empty() {
            report.error(
                self.id(),
                format!(
                    "Selectors are suggested to take a \
                     ``<two spaces>#<one space>[<expression>]`` form. \
                     See lines {:?}",
                    bad_lines
                ),
            );
        }
        Ok(())
    }
}

/// The recipe file must end with exactly one empty line.
pub struct TrailingNewlineRule;

impl LintRule for TrailingNewlineRule {
    fn id(&self) -> RuleId {
        RuleId::new("trailing-newline")
    }

    fn description(&self) -> &str {
        "The recipe ends with exactly one empty line"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let Some(text) = ctx.recipe_text() else {
            return Ok(());
        };
        let lines: Vec<&str> = text.split('\n').collect();
        let end_empty_lines = lines.iter().rev().take_while(|line| line.is_empty()).count();
        if end_empty_lines > 1 {
            report.error(
                self.id(),
                format!(
                    "There are {} too many lines.  There should be one empty \
                     line at the end of the file.",
                    end_empty_lines - 1
                ),
            );
        } else if end_empty_lines < 1 {
            report.error(
                self.id(),
                "There are too few lines.  There should be one empty line at \
                 the end of the file.",
            );
        }
        Ok(())
    }
}

/// `noarch` builds cannot be platform-conditional.
///
/// Scans the `requirements:` block by indentation (the block ends at the
/// first line returning to the `requirements:` line's own indentation) and
/// any `skip:` line anywhere; a selector on either is an error.
pub struct NoarchSelectorRule;

fn leading_whitespace(line: &str) -> &str {
    let stripped = line.trim_start();
    if stripped.is_empty() {
        ""
    } else {
        &line[..line.len() - stripped.len()]
    }
}

impl LintRule for NoarchSelectorRule {
    fn id(&self) -> RuleId {
        RuleId::new("noarch-selectors")
    }

    fn description(&self) -> &str {
        "noarch packages can't have selectors"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let Some(noarch) = ctx.build.get("noarch") else {
            return Ok(());
        };
        if noarch.is_null() {
            return Ok(());
        }
        let Some(text) = ctx.recipe_text() else {
            return Ok(());
        };

        let noarch = scalar_to_string(noarch).unwrap_or_default();
        let message = format!(
            "`noarch` packages can't have selectors. If the selectors are \
             necessary, please remove `noarch: {}`.",
            noarch
        );

        let mut in_requirements = false;
        let mut requirements_indent = "";
        for line in text.lines() {
            let line_s = line.trim();
            if line_s == "requirements:" {
                in_requirements = true;
                requirements_indent = leading_whitespace(line);
                continue;
            }
            if line_s.starts_with("skip:") && is_selector_line(line) {
                report.error(self.id(), message.as_str());
                break;
            }
            if in_requirements {
                if leading_whitespace(line) == requirements_indent {
                    in_requirements = false;
                    continue;
                }
                if is_selector_line(line) {
                    report.error(self.id(), message.as_str());
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Templating variable assignments must be in canonical form.
pub struct TemplateTidyRule;

impl LintRule for TemplateTidyRule {
    fn id(&self) -> RuleId {
        RuleId::new("template-format")
    }

    fn description(&self) -> &str {
        "Template variable definitions take a single-space form"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let Some(text) = ctx.recipe_text() else {
            return Ok(());
        };
        let bad_lines: Vec<usize> = template_lines(&text)
            .filter(|(line, _)| !is_tidy_template(line))
            .map(|(_, number)| number)
            .collect();
        if !bad_lines.is_empty() {
            report.error(
                self.id(),
                format!(
                    "Jinja2 variable definitions are suggested to take a \
                     ``{{%<one space>set<one space><variable name><one space>=\
                     <one space><expression><one space>%}}`` form. See lines {:?}",
                    bad_lines
                ),
            );
        }
        Ok(())
    }
}
