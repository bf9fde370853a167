//! Driving ports for the pull request lifecycle and the review queue.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::pull_request::{PullRequest, PullRequestId, PullRequestShort};
use crate::domain::user::UserId;

/// Payload for opening a pull request.
#[derive(Debug, Clone)]
pub struct CreatePullRequestRequest {
    pub id: PullRequestId,
    pub name: String,
    pub author_id: UserId,
}

/// Payload for swapping an assigned reviewer.
#[derive(Debug, Clone)]
pub struct ReassignReviewerRequest {
    pub pull_request_id: PullRequestId,
    pub old_reviewer_id: UserId,
    pub new_reviewer_id: UserId,
}

/// Mutate the pull request lifecycle.
#[async_trait]
pub trait PullRequestCommand: Send + Sync {
    /// Open a pull request and assign up to
    /// [`crate::domain::MAX_REVIEWERS`] reviewers from the author's team.
    async fn create_pull_request(
        &self,
        request: CreatePullRequestRequest,
    ) -> Result<PullRequest, Error>;

    /// Transition the pull request to MERGED. Idempotent: an already-merged
    /// pull request is returned unchanged.
    async fn merge_pull_request(&self, id: &PullRequestId) -> Result<PullRequest, Error>;

    /// Replace an assigned reviewer while the pull request is still open.
    async fn reassign_reviewer(
        &self,
        request: ReassignReviewerRequest,
    ) -> Result<PullRequest, Error>;
}

/// Read projection over a user's outstanding reviews.
#[async_trait]
pub trait ReviewQueueQuery: Send + Sync {
    /// List the pull requests where the user is currently an assigned
    /// reviewer, in pull request creation order. An empty list is a valid
    /// result, not an error.
    async fn list_for_reviewer(&self, user_id: &UserId)
    -> Result<Vec<PullRequestShort>, Error>;
}
