//! Forge-specific advisory checks backed by the directory service.
//!
//! These are the only rules that talk to the outside world. "Not found" is
//! the expected negative outcome of every lookup; a transport failure
//! propagates out of this rule only, aborting the remaining advisory
//! checks while the engine carries on with the rest of the catalog.

use std::sync::Arc;

use serde_yaml::Value;

use crate::error::Result;
use crate::forge::DirectoryService;
use crate::lint::{LintContext, LintReport, LintRule, RuleId};

/// Name of the canonical single-recipe folder inside a feedstock. A recipe
/// living under any other directory name is a staged submission.
const FEEDSTOCK_RECIPE_DIR: &str = "recipe";

/// Forge-specific advisory checks: collisions with existing packages and
/// maintainer existence.
pub struct ForgeAdvisoryRule {
    directory: Arc<dyn DirectoryService>,
    org: String,
}

impl ForgeAdvisoryRule {
    pub fn new(directory: Arc<dyn DirectoryService>, org: impl Into<String>) -> Self {
        Self {
            directory,
            org: org.into(),
        }
    }
}

impl LintRule for ForgeAdvisoryRule {
    fn id(&self) -> RuleId {
        RuleId::new("forge-advisory")
    }

    fn description(&self) -> &str {
        "Staged recipes must not collide with existing packages, and maintainers must exist"
    }

    fn check(&self, ctx: &LintContext, report: &mut LintReport) -> Result<()> {
        let recipe_dirname = ctx
            .recipe_dir()
            .and_then(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FEEDSTOCK_RECIPE_DIR.to_string());
        let recipe_name = ctx
            .package
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();
        let is_staged_recipe = recipe_dirname != FEEDSTOCK_RECIPE_DIR;

        if is_staged_recipe && !recipe_name.is_empty() {
            let feedstock = format!("{}-feedstock", recipe_name);
            if self.directory.repo_exists(&self.org, &feedstock)? {
                report.error(self.id(), "Feedstock with the same name exists in conda-forge");
            }

            let bioconda_path = format!("recipes/{}", recipe_name);
            if self
                .directory
                .path_exists("bioconda", "bioconda-recipes", &bioconda_path)?
            {
                report.hint(
                    self.id(),
                    "Recipe with the same name exists in bioconda: \
                     please discuss with @conda-forge/bioconda-recipes.",
                );
            }
        }

        let maintainers = match ctx.extra.get("recipe-maintainers") {
            Some(Value::Sequence(entries)) => entries.clone(),
            _ => Vec::new(),
        };
        for maintainer in maintainers.iter().filter_map(Value::as_str) {
            if maintainer.contains('/') {
                // Team handle. Checking team existence is expensive; skip.
                continue;
            }
            if !self.directory.user_exists(maintainer)? {
                report.error(
                    self.id(),
                    format!("Recipe maintainer \"{}\" does not exist", maintainer),
                );
            }
        }

        if let Some(dir) = ctx.recipe_dir() {
            if dir.to_string_lossy().contains("recipes/example/") {
                report.error(
                    self.id(),
                    "Please move the recipe out of the example dir and into its own dir.",
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{LookupError, OfflineDirectory};
    use std::path::Path;
    use std::sync::Mutex;

    /// Scripted directory that records the lookups it receives.
    struct ScriptedDirectory {
        existing_users: Vec<&'static str>,
        existing_repos: Vec<&'static str>,
        existing_paths: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedDirectory {
        fn new() -> Self {
            Self {
                existing_users: vec![],
                existing_repos: vec![],
                existing_paths: vec![],
                calls: Mutex::new(vec![]),
            }
        }
    }

    impl DirectoryService for ScriptedDirectory {
        fn user_exists(&self, login: &str) -> std::result::Result<bool, LookupError> {
            self.calls.lock().unwrap().push(format!("user:{}", login));
            Ok(self.existing_users.contains(&login))
        }

        fn repo_exists(&self, org: &str, repo: &str) -> std::result::Result<bool, LookupError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("repo:{}/{}", org, repo));
            Ok(self.existing_repos.contains(&repo))
        }

        fn path_exists(
            &self,
            _org: &str,
            _repo: &str,
            path: &str,
        ) -> std::result::Result<bool, LookupError> {
            self.calls.lock().unwrap().push(format!("path:{}", path));
            Ok(self.existing_paths.contains(&path))
        }
    }

    fn check_with(
        directory: Arc<dyn DirectoryService>,
        yaml: &str,
        recipe_dir: &Path,
    ) -> LintReport {
        let doc: serde_yaml::Mapping = serde_yaml::from_str(yaml).unwrap();
        let mut report = LintReport::new();
        let ctx = LintContext::new(&doc, Some(recipe_dir), &mut report);
        let rule = ForgeAdvisoryRule::new(directory, "conda-forge");
        rule.check(&ctx, &mut report).unwrap();
        report
    }

    #[test]
    fn missing_maintainer_is_flagged_by_name() {
        let directory = Arc::new(ScriptedDirectory::new());
        let report = check_with(
            directory,
            "package: {name: foo}\nextra: {recipe-maintainers: [ghost-user]}\n",
            Path::new("/work/recipes/foo"),
        );
        assert!(report
            .error_messages()
            .contains(&"Recipe maintainer \"ghost-user\" does not exist"));
    }

    #[test]
    fn team_maintainers_are_not_looked_up() {
        let directory = Arc::new(ScriptedDirectory::new());
        let report = check_with(
            Arc::clone(&directory) as Arc<dyn DirectoryService>,
            "package: {name: foo}\nextra: {recipe-maintainers: [conda-forge/core]}\n",
            Path::new("/work/recipes/foo"),
        );
        let calls = directory.calls.lock().unwrap();
        assert!(!calls.iter().any(|c| c.starts_with("user:")));
        assert!(!report
            .error_messages()
            .iter()
            .any(|m| m.contains("does not exist")));
    }

    #[test]
    fn staged_recipe_with_existing_feedstock_is_flagged() {
        let directory = Arc::new(ScriptedDirectory {
            existing_repos: vec!["foo-feedstock"],
            ..ScriptedDirectory::new()
        });
        let report = check_with(
            directory,
            "package: {name: foo}\n",
            Path::new("/work/staged-recipes/recipes/foo"),
        );
        assert!(report
            .error_messages()
            .contains(&"Feedstock with the same name exists in conda-forge"));
    }

    #[test]
    fn bioconda_collision_is_a_hint_not_an_error() {
        let directory = Arc::new(ScriptedDirectory {
            existing_paths: vec!["recipes/foo"],
            ..ScriptedDirectory::new()
        });
        let report = check_with(directory, "package: {name: foo}\n", Path::new("/work/foo"));
        assert!(report.errors().is_empty());
        assert_eq!(report.hints().len(), 1);
        assert!(report.hint_messages()[0].contains("bioconda"));
    }

    #[test]
    fn feedstock_layout_skips_collision_lookups() {
        let directory = Arc::new(ScriptedDirectory::new());
        let report = check_with(
            Arc::clone(&directory) as Arc<dyn DirectoryService>,
            "package: {name: foo}\n",
            Path::new("/work/foo-feedstock/recipe"),
        );
        let calls = directory.calls.lock().unwrap();
        assert!(calls.iter().all(|c| !c.starts_with("repo:")));
        assert!(report.is_clean());
    }

    #[test]
    fn example_staging_path_is_flagged() {
        let report = check_with(
            Arc::new(OfflineDirectory),
            "package: {name: foo}\n",
            Path::new("/work/staged-recipes/recipes/example/foo"),
        );
        assert!(report
            .error_messages()
            .contains(&"Please move the recipe out of the example dir and into its own dir."));
    }

    #[test]
    fn offline_directory_yields_no_advisory_findings() {
        let report = check_with(
            Arc::new(OfflineDirectory),
            "package: {name: foo}\nextra: {recipe-maintainers: [octocat]}\n",
            Path::new("/work/recipes/foo"),
        );
        assert!(report.is_clean());
    }
}
