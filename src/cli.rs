//! CLI argument definitions and command execution.
//!
//! This module defines all CLI arguments using clap's derive macros and
//! carries the glue between parsed arguments and a lint pass.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::error::{ForgelintError, Result};
use crate::forge::GithubDirectory;
use crate::lint::{
    lint_recipe_dir, HumanFormatter, JsonFormatter, LintFormatter, LintOptions, LintReport,
};
use crate::render::TeraRenderer;

/// Forgelint - lint conda-style build recipes.
#[derive(Debug, Parser)]
#[command(name = "forgelint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the recipe directory containing meta.yaml
    pub recipe_dir: PathBuf,

    /// Run the forge-specific advisory checks (requires network access)
    #[arg(long)]
    pub conda_forge: bool,

    /// Organization checked for same-named feedstock repositories
    #[arg(long, env = "GH_ORG", default_value = "conda-forge")]
    pub org: String,

    /// Output format: human or json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Suppress hints, report only blocking lints
    #[arg(long)]
    pub no_hints: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Exit code for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: u8,
}

impl CommandResult {
    fn clean() -> Self {
        Self { exit_code: 0 }
    }

    fn lints_found() -> Self {
        Self { exit_code: 1 }
    }

    fn recipe_missing() -> Self {
        Self { exit_code: 2 }
    }
}

fn format_report(cli: &Cli, report: &LintReport) -> String {
    let mut output = Vec::new();
    match cli.format.as_str() {
        "json" => {
            JsonFormatter::new().format(report, &mut output).ok();
        }
        _ => {
            HumanFormatter::new(!cli.no_color)
                .format(report, &mut output)
                .ok();
        }
    }
    String::from_utf8(output).unwrap_or_default()
}

/// Run a lint pass for the parsed arguments, writing findings to stdout.
pub fn run(cli: &Cli) -> Result<CommandResult> {
    let mut options = LintOptions::default().with_org(cli.org.clone());
    if cli.conda_forge {
        options = options.with_directory(Arc::new(GithubDirectory::new()));
    }

    let report = match lint_recipe_dir(&cli.recipe_dir, &TeraRenderer, &options) {
        Ok(report) => report,
        Err(ForgelintError::RecipeNotFound { dir }) => {
            eprintln!("No meta.yaml found in {}", dir.display());
            return Ok(CommandResult::recipe_missing());
        }
        Err(err) => return Err(err),
    };

    let report = if cli.no_hints {
        report.without_hints()
    } else {
        report
    };

    if report.is_clean() {
        if cli.format == "json" {
            print!("{}", format_report(cli, &report));
        } else {
            println!("Recipe is clean!");
        }
        return Ok(CommandResult::clean());
    }

    print!("{}", format_report(cli, &report));
    if report.has_errors() {
        Ok(CommandResult::lints_found())
    } else {
        Ok(CommandResult::clean())
    }
}
