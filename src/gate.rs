//! Ties the four steps together for a single workflow run.

use std::path::Path;
use tracing::{info, warn};

use crate::config::RuleConfig;
use crate::error::Result;
use crate::event::{find_repository_information, EventTarget, NOT_A_PULL_REQUEST};
use crate::github::{LabelLister, ReviewLister};
use crate::outcome::Outcome;
use crate::reviews::get_current_review_count;
use crate::rules::{get_max_review_number, get_rules_for_labels, Rule};

/// Decide the outcome for the pull request in `target`.
///
/// The label and review lookups are independent and run concurrently.
pub async fn check_pull_request<C>(
    target: &EventTarget,
    client: &C,
    rules: &[Rule],
) -> Result<Outcome>
where
    C: LabelLister + ReviewLister + ?Sized,
{
    let locator = match target {
        EventTarget::PullRequest(locator) => locator,
        EventTarget::NotPullRequest => {
            return Ok(Outcome::Neutral(NOT_A_PULL_REQUEST.to_string()));
        }
    };

    let (matched, approved) = tokio::try_join!(
        get_rules_for_labels(locator, client, rules),
        get_current_review_count(locator, client),
    )?;

    let required = get_max_review_number(&matched);
    let matched_labels: Vec<String> = matched.into_iter().map(|rule| rule.label).collect();
    info!(
        "PR#{}: {} approval(s), {} required",
        locator.issue_number, approved, required
    );

    Ok(Outcome::evaluate(required, approved, &matched_labels))
}

/// One full workflow run: read the event, load the rules, check the PR.
///
/// Non pull request events stop neutrally before the rule file is read, so a
/// push to a repository without a rule file is not a failure.
pub async fn run<C>(event_path: &Path, config_path: &Path, client: &C) -> Result<Outcome>
where
    C: LabelLister + ReviewLister + ?Sized,
{
    let target = find_repository_information(event_path)?;
    if target == EventTarget::NotPullRequest {
        return Ok(Outcome::Neutral(NOT_A_PULL_REQUEST.to_string()));
    }

    let config = RuleConfig::load(config_path)?;
    if config.rules.is_empty() {
        warn!(
            "No rules configured in {}; any PR will pass",
            config_path.display()
        );
    } else {
        info!(
            "📋 Loaded {} rule(s) from {}",
            config.rules.len(),
            config_path.display()
        );
    }

    check_pull_request(&target, client, &config.rules).await
}
