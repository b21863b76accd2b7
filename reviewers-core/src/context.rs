//! Triggering event context
//!
//! The runner describes the triggering event through environment variables
//! and a JSON webhook payload on disk. Only the handful of fields needed to
//! pick reviewers are read; everything is optional so a partial payload
//! degrades into validation messages instead of parse errors.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::Result;

/// Pull request details from the triggering event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestContext {
    /// Pull request number, if present and a positive integer
    pub number: Option<u64>,
    /// Login of the pull request author
    pub author: Option<String>,
    /// Whether the pull request is a draft
    pub draft: bool,
    /// Logins of users already requested for review
    pub requested_reviewers: Vec<String>,
}

/// Read-only snapshot of the triggering event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    /// Repository owner
    pub owner: Option<String>,
    /// Repository name
    pub repo: Option<String>,
    /// Pull request, when the event carries one
    pub pull_request: Option<PullRequestContext>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
    repository: Option<RepositoryPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PullRequestPayload {
    number: Option<Value>,
    draft: Option<bool>,
    user: Option<UserPayload>,
    requested_reviewers: Option<Vec<UserPayload>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RepositoryPayload {
    name: Option<String>,
    owner: Option<UserPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserPayload {
    login: Option<String>,
}

impl From<PullRequestPayload> for PullRequestContext {
    fn from(pr: PullRequestPayload) -> Self {
        Self {
            number: pr.number.as_ref().and_then(parse_pull_number),
            author: pr.user.and_then(|u| u.login),
            draft: pr.draft.unwrap_or(false),
            requested_reviewers: pr
                .requested_reviewers
                .unwrap_or_default()
                .into_iter()
                .filter_map(|u| u.login)
                .collect(),
        }
    }
}

/// Accept a JSON number or numeric string; zero and anything else is invalid
fn parse_pull_number(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    number.filter(|n| *n > 0)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl EventContext {
    /// Load the context from an event payload file and an `owner/repo` string
    ///
    /// A missing path or file yields an empty payload; malformed JSON is an
    /// error.
    pub fn load(event_path: Option<&Path>, repository: Option<&str>) -> Result<Self> {
        let payload = match event_path {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Reading event payload");
                let contents = std::fs::read_to_string(path)?;
                serde_json::from_str(&contents)?
            }
            Some(path) => {
                warn!(path = %path.display(), "Event payload file does not exist");
                EventPayload::default()
            }
            None => {
                warn!("No event payload path given, using an empty payload");
                EventPayload::default()
            }
        };

        Ok(Self::from_payload(payload, repository))
    }

    /// Parse the context from a JSON payload string
    pub fn from_json(json: &str, repository: Option<&str>) -> Result<Self> {
        let payload: EventPayload = serde_json::from_str(json)?;
        Ok(Self::from_payload(payload, repository))
    }

    fn from_payload(payload: EventPayload, repository: Option<&str>) -> Self {
        // `owner/repo` from the environment wins over the payload's repository
        let (owner, repo) = match repository.and_then(non_empty) {
            Some(full_name) => match full_name.split_once('/') {
                Some((owner, repo)) => (non_empty(owner), non_empty(repo)),
                None => (Some(full_name), None),
            },
            None => {
                let repository = payload.repository.unwrap_or_default();
                (
                    repository
                        .owner
                        .and_then(|o| o.login)
                        .as_deref()
                        .and_then(non_empty),
                    repository.name.as_deref().and_then(non_empty),
                )
            }
        };

        Self {
            owner,
            repo,
            pull_request: payload.pull_request.map(Into::into),
        }
    }

    /// Repository owner
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Repository name
    pub fn repo(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    /// Pull request number, if valid
    pub fn pull_request_number(&self) -> Option<u64> {
        self.pull_request.as_ref().and_then(|pr| pr.number)
    }

    /// Login of the pull request author
    pub fn author(&self) -> Option<&str> {
        self.pull_request.as_ref().and_then(|pr| pr.author.as_deref())
    }

    /// Whether the pull request is a draft; `false` when there is none
    pub fn is_draft(&self) -> bool {
        self.pull_request.as_ref().is_some_and(|pr| pr.draft)
    }

    /// Logins already requested for review; empty when there is no pull request
    pub fn existing_reviewers(&self) -> &[String] {
        self.pull_request
            .as_ref()
            .map(|pr| pr.requested_reviewers.as_slice())
            .unwrap_or_default()
    }
}
