//! Review Counter

use tracing::debug;

use crate::error::Result;
use crate::event::RepositoryLocator;
use crate::github::{PullReviewsParams, Review, ReviewLister};

/// The only review state that counts towards the threshold.
pub const APPROVED: &str = "APPROVED";

/// Count the approving reviews currently recorded on the pull request.
///
/// Every review in state `APPROVED` counts, including several from the same
/// reviewer. Other states are ignored.
pub async fn get_current_review_count<C>(locator: &RepositoryLocator, client: &C) -> Result<u32>
where
    C: ReviewLister + ?Sized,
{
    let reviews = client
        .list_reviews(&PullReviewsParams::from(locator))
        .await?;
    let approved = count_approved(&reviews);
    debug!(
        "PR#{}: {} review(s), {} approved",
        locator.issue_number,
        reviews.len(),
        approved
    );
    Ok(approved)
}

pub fn count_approved(reviews: &[Review]) -> u32 {
    let approved = reviews.iter().filter(|review| review.state == APPROVED).count();
    u32::try_from(approved).unwrap_or(u32::MAX)
}
