//! Recipe validation and linting.
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Engine** - The ordered catalog of all rules ([`RuleSet`])
//! - **Report** - The shared finding accumulator ([`LintReport`])
//! - **Orchestrator** - [`lint_recipe_dir`] / [`lintify`], which wire the
//!   renderer, the parser and the engine together
//!
//! # Example
//!
//! ```
//! use forgelint::lint::{lintify, LintOptions};
//!
//! let doc: serde_yaml::Mapping = serde_yaml::from_str(
//!     "package: {name: foo, version: '1.0'}\nbuild: {number: 0}",
//! )
//! .unwrap();
//!
//! let report = lintify(&doc, None, &LintOptions::default());
//! assert!(report.has_errors()); // no about section, no maintainers, no tests
//! ```

pub mod context;
pub mod engine;
pub mod output;
pub mod report;
pub mod rule;
pub mod rules;

use std::path::Path;
use std::sync::Arc;

use serde_yaml::Mapping;

use crate::error::{ForgelintError, Result};
use crate::forge::DirectoryService;
use crate::recipe::RECIPE_FILE;
use crate::render::Renderer;

pub use context::LintContext;
pub use engine::RuleSet;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use report::{Finding, LintReport};
pub use rule::{LintRule, RuleId, Severity};

/// Default organization checked for feedstock collisions.
pub const DEFAULT_ORG: &str = "conda-forge";

/// Options for a lint pass.
#[derive(Clone)]
pub struct LintOptions {
    /// Organization checked for same-named feedstock repositories.
    pub org: String,
    /// Directory service for the advisory rules. `None` disables them.
    pub directory: Option<Arc<dyn DirectoryService>>,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            org: DEFAULT_ORG.to_string(),
            directory: None,
        }
    }
}

impl LintOptions {
    /// Enable the advisory rules with the given directory service.
    pub fn with_directory(mut self, directory: Arc<dyn DirectoryService>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Override the organization checked for feedstock collisions.
    pub fn with_org(mut self, org: impl Into<String>) -> Self {
        self.org = org.into();
        self
    }
}

/// Lint an already-rendered, already-parsed recipe document.
///
/// `recipe_dir` is optional; without it the raw-text rules and the
/// test-script lookup degrade by skipping. The pass always completes and
/// returns every finding it accumulated.
pub fn lintify(doc: &Mapping, recipe_dir: Option<&Path>, options: &LintOptions) -> LintReport {
    let mut report = LintReport::new();
    let ctx = LintContext::new(doc, recipe_dir, &mut report);
    RuleSet::for_options(options).run(&ctx, &mut report);
    report
}

/// Lint a recipe directory from disk.
///
/// Reads `meta.yaml`, expands it through the renderer, parses the result
/// and runs the full rule pass. A directory without a `meta.yaml` is the
/// distinguished [`ForgelintError::RecipeNotFound`]; render and parse
/// failures propagate as their own variants.
pub fn lint_recipe_dir(
    recipe_dir: &Path,
    renderer: &dyn Renderer,
    options: &LintOptions,
) -> Result<LintReport> {
    let recipe_file = recipe_dir.join(RECIPE_FILE);
    if !recipe_file.exists() {
        return Err(ForgelintError::RecipeNotFound {
            dir: recipe_dir.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(&recipe_file)?;
    let rendered = renderer.render(&raw)?;
    let doc: Mapping =
        serde_yaml::from_str(&rendered).map_err(|err| ForgelintError::Parse {
            path: recipe_file,
            message: err.to_string(),
        })?;

    Ok(lintify(&doc, Some(recipe_dir), options))
}
