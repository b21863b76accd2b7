//! Request command - Request reviewers on the triggering pull request

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;
use reviewers_core::{run, Config, Error, EventContext, Outcome, Token};
use reviewers_github::{GitHubClient, API_URL_ENV};

use crate::actions;

/// Arguments for the request command
#[derive(Args, Debug, Default)]
pub struct RequestArgs {
    /// API token; prefer the environment variable over the flag
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Comma-separated users to request (overrides INPUT_USERS and config)
    #[arg(long)]
    pub users: Option<String>,

    /// Skip draft pull requests: true/false (overrides INPUT_IGNORE-DRAFTS and config)
    #[arg(long, value_name = "BOOL")]
    pub ignore_drafts: Option<String>,

    /// Path to the event payload JSON
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Repository as owner/repo (overrides the event payload)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise Server
    #[arg(long, env = API_URL_ENV)]
    pub api_url: Option<String>,
}

impl RequestArgs {
    /// Execute the request command
    ///
    /// Precondition failures are reported and mapped to a failing exit code;
    /// anything else is reported and returned as an error.
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
        match self.request(config_path).await {
            Ok(outcome) => {
                actions::info(&outcome.to_string());
                Ok(ExitCode::SUCCESS)
            }
            Err(Error::Gate(err)) => {
                actions::set_failed(&err.to_string());
                Ok(ExitCode::FAILURE)
            }
            Err(err) => {
                actions::set_failed(&err.to_string());
                Err(err.into())
            }
        }
    }

    async fn request(&self, config_path: Option<&Path>) -> reviewers_core::Result<Outcome> {
        self.request_with_inputs(config_path, |key| std::env::var(key).ok()).await
    }

    /// Run the request with action inputs looked up through `lookup`
    async fn request_with_inputs(
        &self,
        config_path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> reviewers_core::Result<Outcome> {
        let token = Token::from_input(self.token.as_deref());
        if let Some(token) = &token {
            if actions::running_in_actions() {
                actions::add_mask(token.expose_secret());
            }
        }

        let inputs = Config::load_from(config_path)?
            .with_overrides_from(lookup)
            .with_cli_overrides(self.users.clone(), self.ignore_drafts.clone())
            .into_inputs(token);

        let context = EventContext::load(self.event_path.as_deref(), self.repository.as_deref())?;

        tracing::debug!(
            owner = ?context.owner(),
            repo = ?context.repo(),
            pull_number = ?context.pull_request_number(),
            draft = context.is_draft(),
            ignore_drafts = inputs.ignore_drafts,
            "Resolved inputs"
        );

        let api_url = self.api_url.as_deref().filter(|url| !url.trim().is_empty());

        run(&inputs, &context, |token, target| {
            GitHubClient::with_api_url(token, &target.owner, &target.repo, api_url)
                .map_err(Error::request)
        })
        .await
    }
}
