//! Rule Matcher and Threshold Calculator

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::event::RepositoryLocator;
use crate::github::{IssueLabelsParams, LabelLister};

/// "If this label is present, at least `reviews` approvals are required."
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub label: String,
    pub reviews: u32,
}

impl Rule {
    pub fn new(label: impl Into<String>, reviews: u32) -> Self {
        Self {
            label: label.into(),
            reviews,
        }
    }
}

/// Fetch the labels on the pull request and keep the rules whose label is
/// among them, in configured order.
pub async fn get_rules_for_labels<L>(
    locator: &RepositoryLocator,
    client: &L,
    rules: &[Rule],
) -> Result<Vec<Rule>>
where
    L: LabelLister + ?Sized,
{
    let labels = client
        .list_labels_on_issue(&IssueLabelsParams::from(locator))
        .await?;
    let issue_labels: Vec<String> = labels.into_iter().map(|label| label.name).collect();
    debug!("PR#{} labels: {:?}", locator.issue_number, issue_labels);

    Ok(match_rules(&issue_labels, rules))
}

/// Order-preserving subsequence of `rules` whose label is in `issue_labels`.
pub fn match_rules(issue_labels: &[String], rules: &[Rule]) -> Vec<Rule> {
    rules
        .iter()
        .filter(|rule| issue_labels.iter().any(|name| *name == rule.label))
        .cloned()
        .collect()
}

/// Highest `reviews` value among `rules`, or 0 when there are none.
pub fn get_max_review_number(rules: &[Rule]) -> u32 {
    rules.iter().map(|rule| rule.reviews).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGitHub;

    fn locator() -> RepositoryLocator {
        RepositoryLocator {
            owner: "o".to_string(),
            repo: "r".to_string(),
            issue_number: 1,
        }
    }

    #[tokio::test]
    async fn test_single_rule_matches() {
        let client = FakeGitHub::new(&["size:L", "bug"], &[]);
        let rules = vec![Rule::new("size:L", 2)];

        let matched = get_rules_for_labels(&locator(), &client, &rules).await.unwrap();
        assert_eq!(matched, vec![Rule::new("size:L", 2)]);
        assert_eq!(get_max_review_number(&matched), 2);
    }

    #[tokio::test]
    async fn test_only_present_labels_match() {
        let client = FakeGitHub::new(&["critical"], &[]);
        let rules = vec![Rule::new("size:L", 2), Rule::new("critical", 3)];

        let matched = get_rules_for_labels(&locator(), &client, &rules).await.unwrap();
        assert_eq!(matched, vec![Rule::new("critical", 3)]);
        assert_eq!(get_max_review_number(&matched), 3);
    }

    #[test]
    fn test_no_rules() {
        let client = FakeGitHub::new(&["bug"], &[]);
        let matched =
            tokio_test::block_on(get_rules_for_labels(&locator(), &client, &[])).unwrap();
        assert!(matched.is_empty());
        assert_eq!(get_max_review_number(&matched), 0);
    }

    #[test]
    fn test_match_preserves_order_and_duplicates() {
        let labels = vec!["b".to_string(), "a".to_string(), "a".to_string()];
        let rules = vec![
            Rule::new("a", 1),
            Rule::new("c", 9),
            Rule::new("b", 2),
            Rule::new("a", 4),
        ];

        let matched = match_rules(&labels, &rules);
        assert_eq!(
            matched,
            vec![Rule::new("a", 1), Rule::new("b", 2), Rule::new("a", 4)]
        );
        assert_eq!(get_max_review_number(&matched), 4);
        assert_eq!(match_rules(&labels, &rules), matched);
    }

    #[test]
    fn test_label_match_is_exact() {
        let labels = vec!["Size:L".to_string()];
        assert!(match_rules(&labels, &[Rule::new("size:L", 2)]).is_empty());
    }

    #[tokio::test]
    async fn test_label_listing_failure_propagates() {
        let client = FakeGitHub {
            fail_labels: true,
            ..FakeGitHub::new(&[], &[])
        };
        let result = get_rules_for_labels(&locator(), &client, &[Rule::new("bug", 1)]).await;
        assert!(result.is_err());
    }
}
