//! Reviewer requests on pull requests

use async_trait::async_trait;
use reviewers_core::{ReviewRequester, ReviewTarget};
use tracing::{debug, info};

use crate::{Error, GitHubClient, Result};

impl GitHubClient {
    /// Request `reviewers` as reviewers on pull request `pr_number`
    pub async fn request_reviews(&self, pr_number: u64, reviewers: &[String]) -> Result<()> {
        debug!(pr_number, ?reviewers, "Requesting pull request reviews");

        self.client()
            .pulls(self.owner(), self.repo())
            .request_reviews(pr_number, reviewers.to_vec(), Vec::<String>::new())
            .await
            .map_err(|e| match &e {
                octocrab::Error::GitHub { source, .. }
                    if source.message.contains("Not Found") =>
                {
                    Error::PrNotFound(pr_number)
                }
                _ => Error::Api(e),
            })?;

        info!(
            owner = %self.owner(),
            repo = %self.repo(),
            pr_number,
            count = reviewers.len(),
            "Requested pull request reviews"
        );
        Ok(())
    }
}

#[async_trait]
impl ReviewRequester for GitHubClient {
    async fn request_reviewers(&self, target: &ReviewTarget) -> reviewers_core::Result<()> {
        self.request_reviews(target.pull_number, &target.reviewers)
            .await
            .map_err(reviewers_core::Error::request)
    }
}
