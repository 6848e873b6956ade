//! Directory/lookup capability for the remote advisory rules.
//!
//! The advisory rules need to answer three questions about the outside
//! world: does a user exist, does a repository exist, does a path exist
//! inside a repository. [`DirectoryService`] expresses exactly that, with
//! "not found" as a distinguished `Ok(false)` outcome; only transport and
//! authentication failures surface as [`LookupError`]. The core engine has
//! no hard dependency on any implementation; environments without
//! credentials inject [`OfflineDirectory`].

pub mod github;

use thiserror::Error;

pub use github::GithubDirectory;

/// A directory lookup failed for a reason other than "not found".
#[derive(Debug, Error)]
pub enum LookupError {
    /// The service answered with an unexpected status.
    #[error("directory lookup failed: HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The request never completed.
    #[error("directory lookup failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Point-in-time existence lookups against an account/repository directory.
///
/// Every call is a single best-effort request; no retries, no caching.
pub trait DirectoryService: Send + Sync {
    /// Whether a user account with this login exists.
    fn user_exists(&self, login: &str) -> Result<bool, LookupError>;

    /// Whether `org/repo` exists.
    fn repo_exists(&self, org: &str, repo: &str) -> Result<bool, LookupError>;

    /// Whether `path` exists inside `org/repo`.
    fn path_exists(&self, org: &str, repo: &str, path: &str) -> Result<bool, LookupError>;
}

/// Directory service for environments without lookup credentials.
///
/// Answers every query with the outcome that produces no findings: users
/// exist, repositories and paths do not.
pub struct OfflineDirectory;

impl DirectoryService for OfflineDirectory {
    fn user_exists(&self, _login: &str) -> Result<bool, LookupError> {
        Ok(true)
    }

    fn repo_exists(&self, _org: &str, _repo: &str) -> Result<bool, LookupError> {
        Ok(false)
    }

    fn path_exists(&self, _org: &str, _repo: &str, _path: &str) -> Result<bool, LookupError> {
        Ok(false)
    }
}
