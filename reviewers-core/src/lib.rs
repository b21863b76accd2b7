//! Reviewers Core - reviewer selection for pull request review requests
//!
//! This crate resolves the run inputs and the triggering event, builds the
//! list of users to request, and decides whether a review request should be
//! made at all. The actual API call sits behind [`ReviewRequester`].

pub mod config;
pub mod context;
pub mod error;
pub mod gate;
pub mod review;
pub mod reviewers;
pub mod secrets;

pub use config::{parse_flag, Config, Inputs, ReviewersConfig};
pub use context::{EventContext, PullRequestContext};
pub use error::{Error, Result};
pub use gate::{evaluate, Gate, GateError, ReviewTarget, SkipReason};
pub use review::{run, Outcome, ReviewRequester, ReviewSummary};
pub use reviewers::clean_users_list;
pub use secrets::Token;
