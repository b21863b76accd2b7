//! Reviewer list building

use std::collections::HashSet;

use crate::context::EventContext;

/// Build the list of users to request from a raw comma-separated input
///
/// Order of first occurrence is preserved. Blank entries, duplicates, the
/// pull request author and users already requested are removed.
pub fn clean_users_list(raw: Option<&str>, context: &EventContext) -> Vec<String> {
    let users = split_users(raw.unwrap_or_default());
    let users = filter_duplicate_users(users);
    let users = filter_pull_request_author(users, context.author());
    filter_existing_reviewers(users, context.existing_reviewers())
}

fn split_users(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|user| !user.is_empty())
        .map(String::from)
        .collect()
}

fn filter_duplicate_users(users: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    users
        .into_iter()
        .filter(|user| seen.insert(user.clone()))
        .collect()
}

fn filter_pull_request_author(users: Vec<String>, author: Option<&str>) -> Vec<String> {
    match author {
        Some(author) => users.into_iter().filter(|user| user != author).collect(),
        None => users,
    }
}

fn filter_existing_reviewers(users: Vec<String>, existing: &[String]) -> Vec<String> {
    users
        .into_iter()
        .filter(|user| !existing.contains(user))
        .collect()
}
