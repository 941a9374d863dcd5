//! In-memory GitHub fakes shared by the unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::github::{
    IssueLabelsParams, Label, LabelLister, PullReviewsParams, Review, ReviewLister,
};

#[derive(Default)]
pub struct FakeGitHub {
    pub labels: Vec<String>,
    pub review_states: Vec<String>,
    pub fail_labels: bool,
    pub fail_reviews: bool,
    pub calls: AtomicUsize,
    pub last_review_params: Mutex<Option<PullReviewsParams>>,
}

impl FakeGitHub {
    pub fn new(labels: &[&str], review_states: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            review_states: review_states.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LabelLister for FakeGitHub {
    async fn list_labels_on_issue(&self, _params: &IssueLabelsParams) -> Result<Vec<Label>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_labels {
            return Err(Error::Api {
                status: 502,
                body: "Bad Gateway".to_string(),
            });
        }
        Ok(self
            .labels
            .iter()
            .map(|name| Label { name: name.clone() })
            .collect())
    }
}

#[async_trait]
impl ReviewLister for FakeGitHub {
    async fn list_reviews(&self, params: &PullReviewsParams) -> Result<Vec<Review>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_review_params.lock().unwrap() = Some(params.clone());
        if self.fail_reviews {
            return Err(Error::Api {
                status: 404,
                body: "Not Found".to_string(),
            });
        }
        Ok(self
            .review_states
            .iter()
            .map(|state| Review { state: state.clone() })
            .collect())
    }
}
