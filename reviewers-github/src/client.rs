//! GitHub API client using octocrab

use crate::{Error, Result};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use reviewers_core::Token;
use tracing::{debug, info};
use url::Url;

/// Environment variable the runner sets to the REST API base URL
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// GitHub API client bound to one repository
pub struct GitHubClient {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Create a client for the specified repository against api.github.com
    pub fn new(token: &Token, owner: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        Self::with_api_url(token, owner, repo, None)
    }

    /// Create a client for the specified repository
    ///
    /// `api_url` points at a GitHub Enterprise Server API, e.g.
    /// `https://github.example.com/api/v3`. `None` uses api.github.com.
    pub fn with_api_url(
        token: &Token,
        owner: impl Into<String>,
        repo: impl Into<String>,
        api_url: Option<&str>,
    ) -> Result<Self> {
        let owner = owner.into();
        let repo = repo.into();

        // One request per run: a failed review request is reported, not resent
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
        if let Some(raw) = api_url {
            let url = parse_api_url(raw)?;
            debug!(api_url = %url, "Using custom GitHub API URL");
            builder = builder
                .base_uri(url.as_str())
                .map_err(|e| Error::Parse(format!("Invalid API URL {}: {}", url, e)))?;
        }

        let client = builder
            .personal_token(token.expose_secret().to_string())
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        info!(owner = %owner, repo = %repo, "Created GitHub client");

        Ok(Self {
            client,
            owner,
            repo,
        })
    }

    /// Get the repository owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Get the underlying octocrab client
    pub fn client(&self) -> &Octocrab {
        &self.client
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

/// Parse an API base URL, which must be absolute http(s)
fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Parse(format!("Invalid API URL {}: {}", raw, e)))?;

    match url.scheme() {
        "https" | "http" => Ok(url),
        scheme => Err(Error::Parse(format!(
            "Invalid API URL {}: unsupported scheme {}",
            raw, scheme
        ))),
    }
}
