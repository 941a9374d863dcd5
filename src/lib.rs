//! Label Reviews Gate
//!
//! GitHub Action that fails a pull request check until it has as many
//! approving reviews as its labels demand.
//!
//! ## Flow
//!
//! 1. Read the event payload from `GITHUB_EVENT_PATH` and resolve the pull request
//! 2. List the pull request labels and keep the configured rules that match
//! 3. Take the highest required review count among the matched rules
//! 4. Count `APPROVED` reviews and compare
//!
//! Runs that are not about a pull request stop with the neutral exit code (78).
//!
//! ## Example Workflow Step
//!
//! ```yaml
//! - uses: actions/checkout@v4
//! - run: label-reviews-gate
//!   env:
//!     GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod gate;
pub mod github;
pub mod outcome;
pub mod reviews;
pub mod rules;

#[cfg(test)]
mod testing;

pub use config::RuleConfig;
pub use error::{Error, Result};
pub use event::{find_repository_information, EventTarget, RepositoryLocator};
pub use gate::check_pull_request;
pub use github::{GitHubClient, LabelLister, ReviewLister};
pub use outcome::Outcome;
pub use reviews::get_current_review_count;
pub use rules::{get_max_review_number, get_rules_for_labels, Rule};
