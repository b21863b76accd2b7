//! Review request pipeline
//!
//! [`run`] ties the pieces together: build the reviewer list, check the
//! preconditions, then hand the validated target to a [`ReviewRequester`].
//! The requester is only constructed once every check has passed.

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::Inputs;
use crate::context::EventContext;
use crate::gate::{evaluate, Gate, ReviewTarget, SkipReason};
use crate::reviewers::clean_users_list;
use crate::secrets::Token;
use crate::Result;

/// Something that can request reviewers on a pull request
#[async_trait]
pub trait ReviewRequester: Send + Sync {
    /// Request `target.reviewers` on pull request `target.pull_number`
    async fn request_reviewers(&self, target: &ReviewTarget) -> Result<()>;
}

/// Summary of a successful review request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub pull_number: u64,
    /// Users that were requested
    pub reviewers: Vec<String>,
}

impl From<ReviewTarget> for ReviewSummary {
    fn from(target: ReviewTarget) -> Self {
        Self {
            repo: target.repo,
            pull_number: target.pull_number,
            reviewers: target.reviewers,
        }
    }
}

impl fmt::Display for ReviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reviewers = serde_json::to_string(&self.reviewers).map_err(|_| fmt::Error)?;
        write!(
            f,
            "{} assigned for review of Pull Request #{} on {}",
            reviewers, self.pull_number, self.repo
        )
    }
}

/// How a run that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Reviewers were requested
    Requested(ReviewSummary),
    /// Nothing was requested
    Skipped(SkipReason),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Requested(summary) => fmt::Display::fmt(summary, f),
            Outcome::Skipped(reason) => fmt::Display::fmt(reason, f),
        }
    }
}

/// Request reviewers for the pull request described by `context`
///
/// `connect` builds the requester from the token and the validated target.
/// It is not called when a precondition fails or the run is skipped.
pub async fn run<R, F>(inputs: &Inputs, context: &EventContext, connect: F) -> Result<Outcome>
where
    R: ReviewRequester,
    F: FnOnce(&Token, &ReviewTarget) -> Result<R>,
{
    let users = clean_users_list(inputs.users.as_deref(), context);
    debug!(?users, "Built reviewer list");

    let (token, target) =
        match evaluate(inputs.token.as_ref(), users, inputs.ignore_drafts, context)? {
            Gate::Proceed { token, target } => (token, target),
            Gate::Skip(reason) => {
                debug!(%reason, "Skipping review request");
                return Ok(Outcome::Skipped(reason));
            }
        };

    let requester = connect(token, &target)?;

    info!(
        owner = %target.owner,
        repo = %target.repo,
        pull_number = target.pull_number,
        reviewers = ?target.reviewers,
        "Requesting reviewers"
    );
    requester.request_reviewers(&target).await?;

    Ok(Outcome::Requested(target.into()))
}
