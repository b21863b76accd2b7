//! Precondition checks before requesting reviewers
//!
//! Checks run in a fixed order and the first one that does not pass decides
//! the outcome. Some are informational skips, the rest are failures.

use std::fmt;

use thiserror::Error;

use crate::context::EventContext;
use crate::secrets::Token;

/// A precondition failure that fails the run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// No API token was provided
    #[error("Required input \"token\" not provided")]
    MissingToken,

    /// The event has no repository owner
    #[error("Valid owner is missing from context")]
    MissingOwner,

    /// The event has no repository name
    #[error("Valid repo is missing from context")]
    MissingRepo,

    /// The event has no usable pull request number
    #[error("Valid Pull Request number is missing from context")]
    MissingPullRequestNumber,
}

/// Why a run ended without requesting anyone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nobody left to request after filtering
    NoUsers,
    /// Draft pull requests are ignored
    DraftPullRequest,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoUsers => f.write_str(
                "Required input \"users\" not provided, at least one must be provided",
            ),
            SkipReason::DraftPullRequest => f.write_str("Ignoring due to draft PR"),
        }
    }
}

/// A validated review request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTarget {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub pull_number: u64,
    /// Users to request, already filtered
    pub reviewers: Vec<String>,
}

/// Result of a gate evaluation that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate<'a> {
    /// Request reviews for this target with the validated token
    Proceed {
        /// Token for building the client
        token: &'a Token,
        /// What to request
        target: ReviewTarget,
    },
    /// Exit without requesting anything
    Skip(SkipReason),
}

/// Run the precondition checks in order
pub fn evaluate<'a>(
    token: Option<&'a Token>,
    users: Vec<String>,
    ignore_drafts: bool,
    context: &EventContext,
) -> Result<Gate<'a>, GateError> {
    let token = token.ok_or(GateError::MissingToken)?;

    if users.is_empty() {
        return Ok(Gate::Skip(SkipReason::NoUsers));
    }

    if context.is_draft() && ignore_drafts {
        return Ok(Gate::Skip(SkipReason::DraftPullRequest));
    }

    let owner = context.owner().ok_or(GateError::MissingOwner)?;
    let repo = context.repo().ok_or(GateError::MissingRepo)?;
    let pull_number = context
        .pull_request_number()
        .ok_or(GateError::MissingPullRequestNumber)?;

    Ok(Gate::Proceed {
        token,
        target: ReviewTarget {
            owner: owner.to_string(),
            repo: repo.to_string(),
            pull_number,
            reviewers: users,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PullRequestContext;

    fn token() -> Token {
        Token::new("ghp_test").unwrap()
    }

    fn users() -> Vec<String> {
        vec!["alice".to_string()]
    }

    fn context() -> EventContext {
        EventContext {
            owner: Some("acme".to_string()),
            repo: Some("widgets".to_string()),
            pull_request: Some(PullRequestContext {
                number: Some(12),
                author: Some("carol".to_string()),
                draft: false,
                requested_reviewers: vec![],
            }),
        }
    }

    #[test]
    fn test_proceed() {
        let token = token();
        let gate = evaluate(Some(&token), users(), false, &context()).unwrap();
        assert_eq!(
            gate,
            Gate::Proceed {
                token: &token,
                target: ReviewTarget {
                    owner: "acme".to_string(),
                    repo: "widgets".to_string(),
                    pull_number: 12,
                    reviewers: users(),
                },
            }
        );
    }

    #[test]
    fn test_missing_token_checked_first() {
        let err = evaluate(None, vec![], true, &EventContext::default()).unwrap_err();
        assert_eq!(err, GateError::MissingToken);
        assert_eq!(err.to_string(), "Required input \"token\" not provided");
    }

    #[test]
    fn test_no_users_skips_before_context_checks() {
        let token = token();
        let gate = evaluate(Some(&token), vec![], false, &EventContext::default()).unwrap();
        assert_eq!(gate, Gate::Skip(SkipReason::NoUsers));
        assert_eq!(
            SkipReason::NoUsers.to_string(),
            "Required input \"users\" not provided, at least one must be provided"
        );
    }

    #[test]
    fn test_draft_ignored() {
        let mut ctx = context();
        ctx.pull_request.as_mut().unwrap().draft = true;
        ctx.owner = None;

        let token = token();
        let gate = evaluate(Some(&token), users(), true, &ctx).unwrap();
        assert_eq!(gate, Gate::Skip(SkipReason::DraftPullRequest));
        assert_eq!(gate_message(gate), "Ignoring due to draft PR");
    }

    #[test]
    fn test_draft_requested_when_flag_off() {
        let mut ctx = context();
        ctx.pull_request.as_mut().unwrap().draft = true;

        let token = token();
        let gate = evaluate(Some(&token), users(), false, &ctx).unwrap();
        assert!(matches!(gate, Gate::Proceed { .. }));
    }

    #[test]
    fn test_missing_owner() {
        let mut ctx = context();
        ctx.owner = None;
        ctx.repo = None;
        let err = evaluate(Some(&token()), users(), false, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Valid owner is missing from context");
    }

    #[test]
    fn test_missing_repo() {
        let mut ctx = context();
        ctx.repo = None;
        let err = evaluate(Some(&token()), users(), false, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Valid repo is missing from context");
    }

    #[test]
    fn test_missing_pull_request_number() {
        let mut ctx = context();
        ctx.pull_request.as_mut().unwrap().number = None;
        let err = evaluate(Some(&token()), users(), false, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Valid Pull Request number is missing from context");

        ctx.pull_request = None;
        let err = evaluate(Some(&token()), users(), false, &ctx).unwrap_err();
        assert_eq!(err, GateError::MissingPullRequestNumber);
    }

    fn gate_message(gate: Gate) -> String {
        match gate {
            Gate::Skip(reason) => reason.to_string(),
            Gate::Proceed { target, .. } => format!("proceed {:?}", target),
        }
    }
}
