//! Error types for forgelint operations.
//!
//! This module defines [`ForgelintError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lint findings are never errors: rules report through the shared
//!   [`LintReport`](crate::lint::LintReport) and the pass always completes.
//! - `ForgelintError` covers the conditions that prevent a pass from
//!   producing findings at all: a missing recipe, a render or parse failure,
//!   or a directory-lookup transport failure inside the advisory rules.
//! - Use `anyhow::Error` (via `ForgelintError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::forge::LookupError;

/// Core error type for forgelint operations.
#[derive(Debug, Error)]
pub enum ForgelintError {
    /// Recipe directory exists but holds no recipe definition file.
    #[error("Recipe not found: {dir} has no meta.yaml")]
    RecipeNotFound { dir: PathBuf },

    /// The template renderer rejected the raw recipe text.
    #[error("Failed to render recipe template: {message}")]
    Render { message: String },

    /// The rendered recipe text is not a YAML mapping.
    #[error("Failed to parse recipe at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A directory lookup failed for a reason other than "not found".
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for forgelint operations.
pub type Result<T> = std::result::Result<T, ForgelintError>;
