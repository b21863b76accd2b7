//! Reviewers GitHub - GitHub integration for review requests
//!
//! This crate provides the octocrab-backed [`reviewers_core::ReviewRequester`].

mod client;
mod error;
mod review;

pub use client::{GitHubClient, API_URL_ENV};
pub use error::{Error, Result};
