//! Run outcome and its mapping onto GitHub Actions exit codes.

use serde::Serialize;

/// Exit code GitHub Actions treats as a neutral (skipped) result.
pub const NEUTRAL_EXIT_CODE: i32 = 78;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "lowercase")]
pub enum Outcome {
    Success(String),
    Failure(String),
    Neutral(String),
}

impl Outcome {
    /// Compare the approvals on the pull request with the required threshold.
    pub fn evaluate(required: u32, approved: u32, matched_labels: &[String]) -> Self {
        let labels = if matched_labels.is_empty() {
            "no matching labels".to_string()
        } else {
            format!("labels: {}", matched_labels.join(", "))
        };

        if approved >= required {
            Outcome::Success(format!(
                "{} approving review(s), {} required ({})",
                approved, required, labels
            ))
        } else {
            Outcome::Failure(format!(
                "Labels require at least {} approving review(s), found {} ({})",
                required, approved, labels
            ))
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success(_) => 0,
            Outcome::Failure(_) => 1,
            Outcome::Neutral(_) => NEUTRAL_EXIT_CODE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(message) | Outcome::Failure(message) | Outcome::Neutral(message) => {
                message
            }
        }
    }
}
