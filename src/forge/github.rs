//! GitHub-backed directory service.
//!
//! Existence checks map onto the REST API: a 2xx answer means the entity
//! exists, 404 means it does not, anything else is a transport-level
//! failure. An optional token (from `GH_TOKEN`) lifts the unauthenticated
//! rate limit; lookups work without one.

use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::StatusCode;

use super::{DirectoryService, LookupError};

const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// [`DirectoryService`] implementation over the GitHub REST API.
pub struct GithubDirectory {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl GithubDirectory {
    /// Create a directory against api.github.com, reading the token from
    /// `GH_TOKEN` if set.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a directory against a custom API root. Used by tests to point
    /// at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: std::env::var("GH_TOKEN").ok(),
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Override the token explicitly.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn exists(&self, url: String) -> Result<bool, LookupError> {
        let mut request = self.client.get(&url).header(USER_AGENT, "forgelint");
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(LookupError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }
}

impl Default for GithubDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryService for GithubDirectory {
    fn user_exists(&self, login: &str) -> Result<bool, LookupError> {
        self.exists(format!("{}/users/{}", self.base_url, login))
    }

    fn repo_exists(&self, org: &str, repo: &str) -> Result<bool, LookupError> {
        self.exists(format!("{}/repos/{}/{}", self.base_url, org, repo))
    }

    fn path_exists(&self, org: &str, repo: &str, path: &str) -> Result<bool, LookupError> {
        self.exists(format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url, org, repo, path
        ))
    }
}
