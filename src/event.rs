//! Event Reader
//!
//! Resolves the pull request a workflow run is about from the event payload
//! file GitHub Actions writes to `GITHUB_EVENT_PATH`.

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};

/// Message used when the run was not started by a pull request event.
pub const NOT_A_PULL_REQUEST: &str =
    "Action not triggered by a PullRequest review action. PR ID is missing";

/// Identifies the pull request every API call is made against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}

/// What the event payload points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTarget {
    PullRequest(RepositoryLocator),
    /// No pull request number in the payload; the run should stop neutrally.
    NotPullRequest,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequestPayload>,
    repository: RepositoryPayload,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    number: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
    owner: OwnerPayload,
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
}

impl EventPayload {
    fn into_target(self) -> EventTarget {
        match self.pull_request.and_then(|pr| pr.number) {
            Some(issue_number) => EventTarget::PullRequest(RepositoryLocator {
                owner: self.repository.owner.login,
                repo: self.repository.name,
                issue_number,
            }),
            None => EventTarget::NotPullRequest,
        }
    }
}

/// Parse an event payload that is already in memory.
pub fn parse_event(raw: &str, path: &Path) -> Result<EventTarget> {
    let payload: EventPayload = serde_json::from_str(raw).map_err(|source| Error::EventParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(payload.into_target())
}

/// Load the event file at `event_path` and work out which pull request it
/// refers to.
///
/// A payload without `pull_request.number` yields [`EventTarget::NotPullRequest`]
/// rather than an error. An unreadable file or a payload missing the
/// repository owner/name is fatal.
pub fn find_repository_information(event_path: &Path) -> Result<EventTarget> {
    let raw = std::fs::read_to_string(event_path).map_err(|source| Error::EventRead {
        path: event_path.to_path_buf(),
        source,
    })?;

    let target = parse_event(&raw, event_path)?;
    if let EventTarget::PullRequest(locator) = &target {
        info!("Checking labels for PR#{}", locator.issue_number);
    }
    Ok(target)
}
