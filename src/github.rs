//! GitHub API access
//!
//! The gate only needs two read calls against the REST API, so each is
//! exposed as its own narrow trait. [`GitHubClient`] implements both over
//! `reqwest`; tests substitute in-memory fakes.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::event::RepositoryLocator;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "label-reviews-gate";
const API_VERSION: &str = "2022-11-28";
const PER_PAGE: u32 = 100;

/// A label attached to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

/// A review recorded on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    pub state: String,
}

/// Parameters for listing the labels on an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLabelsParams {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}

impl From<&RepositoryLocator> for IssueLabelsParams {
    fn from(locator: &RepositoryLocator) -> Self {
        Self {
            owner: locator.owner.clone(),
            repo: locator.repo.clone(),
            issue_number: locator.issue_number,
        }
    }
}

/// Parameters for listing the reviews on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullReviewsParams {
    pub owner: String,
    pub repo: String,
    pub pull_number: u64,
}

impl From<&RepositoryLocator> for PullReviewsParams {
    fn from(locator: &RepositoryLocator) -> Self {
        Self {
            owner: locator.owner.clone(),
            repo: locator.repo.clone(),
            pull_number: locator.issue_number,
        }
    }
}

/// Lists the labels on an issue or pull request.
#[async_trait]
pub trait LabelLister: Send + Sync {
    async fn list_labels_on_issue(&self, params: &IssueLabelsParams) -> Result<Vec<Label>>;
}

/// Lists the reviews on a pull request.
#[async_trait]
pub trait ReviewLister: Send + Sync {
    async fn list_reviews(&self, params: &PullReviewsParams) -> Result<Vec<Review>>;
}

/// GitHub REST client authenticated with a token (usually `GITHUB_TOKEN`).
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn labels_url(&self, params: &IssueLabelsParams) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.api_url, params.owner, params.repo, params.issue_number
        )
    }

    fn reviews_url(&self, params: &PullReviewsParams) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}/reviews",
            self.api_url, params.owner, params.repo, params.pull_number
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("per_page", PER_PAGE)])
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Failed to read error body from {}: {}", url, e);
                    String::new()
                }
            };
            return Err(Error::Api { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl LabelLister for GitHubClient {
    async fn list_labels_on_issue(&self, params: &IssueLabelsParams) -> Result<Vec<Label>> {
        self.get_json(&self.labels_url(params)).await
    }
}

#[async_trait]
impl ReviewLister for GitHubClient {
    async fn list_reviews(&self, params: &PullReviewsParams) -> Result<Vec<Review>> {
        self.get_json(&self.reviews_url(params)).await
    }
}
