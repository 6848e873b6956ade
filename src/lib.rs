//! Forgelint - lint conda-style build recipes for community package forges.
//!
//! Forgelint validates a recipe's `meta.yaml` against a style and
//! correctness rulebook, producing blocking lint errors and non-blocking
//! hints for pre-merge checks.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`forge`] - Directory/lookup capability for the advisory rules
//! - [`lint`] - The rule engine, report accumulator and orchestrator
//! - [`metadata`] - Packaging-metadata schema and validators
//! - [`recipe`] - Document access and raw-text classification
//! - [`render`] - Template rendering collaborator
//!
//! # Example
//!
//! ```
//! use forgelint::lint::{lintify, LintOptions};
//!
//! let doc: serde_yaml::Mapping =
//!     serde_yaml::from_str("package: {name: My Package}").unwrap();
//! let report = lintify(&doc, None, &LintOptions::default());
//!
//! // "My Package" violates the package-name charset, among other findings.
//! assert!(report
//!     .error_messages()
//!     .iter()
//!     .any(|m| m.contains("invalid characters")));
//! ```
//!
//! For file-based linting, see [`lint::lint_recipe_dir`].

pub mod cli;
pub mod error;
pub mod forge;
pub mod lint;
pub mod metadata;
pub mod recipe;
pub mod render;

pub use error::{ForgelintError, Result};
pub use lint::{lint_recipe_dir, lintify, LintOptions, LintReport};
