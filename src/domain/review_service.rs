//! Pull request lifecycle service.
//!
//! Orchestrates the decision core in [`crate::domain::pull_request`] against
//! the repositories: reviewer selection at creation, idempotent merge,
//! validated reassignment, and the review queue projection.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::Error;
use crate::domain::ports::{
    CreatePullRequestRequest, PullRequestCommand, PullRequestPersistenceError,
    PullRequestRepository, ReassignReviewerRequest, ReviewQueueQuery, TeamPersistenceError,
    TeamRepository, UserPersistenceError, UserRepository,
};
use crate::domain::pull_request::{
    MAX_REVIEWERS, PullRequest, PullRequestId, PullRequestShort, ReassignError, select_reviewers,
};
use crate::domain::user::UserId;

fn map_pull_request_error(error: PullRequestPersistenceError) -> Error {
    match error {
        PullRequestPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("pull request repository unavailable: {message}"))
        }
        PullRequestPersistenceError::Query { message } => {
            Error::internal(format!("pull request repository error: {message}"))
        }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_team_error(error: TeamPersistenceError) -> Error {
    match error {
        TeamPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("team repository unavailable: {message}"))
        }
        TeamPersistenceError::Query { message } => {
            Error::internal(format!("team repository error: {message}"))
        }
    }
}

/// Review engine service implementing the pull request driving ports.
#[derive(Clone)]
pub struct ReviewService<P, U, T> {
    pull_requests: Arc<P>,
    users: Arc<U>,
    teams: Arc<T>,
}

impl<P, U, T> ReviewService<P, U, T> {
    /// Create a new service over the three repositories.
    pub fn new(pull_requests: Arc<P>, users: Arc<U>, teams: Arc<T>) -> Self {
        Self {
            pull_requests,
            users,
            teams,
        }
    }
}

impl<P, U, T> ReviewService<P, U, T>
where
    P: PullRequestRepository,
{
    async fn load_pull_request(&self, id: &PullRequestId) -> Result<PullRequest, Error> {
        self.pull_requests
            .find_by_id(id)
            .await
            .map_err(map_pull_request_error)?
            .ok_or_else(|| Error::not_found(format!("pull request {id} not found")))
    }
}

#[async_trait]
impl<P, U, T> PullRequestCommand for ReviewService<P, U, T>
where
    P: PullRequestRepository,
    U: UserRepository,
    T: TeamRepository,
{
    async fn create_pull_request(
        &self,
        request: CreatePullRequestRequest,
    ) -> Result<PullRequest, Error> {
        let CreatePullRequestRequest {
            id,
            name,
            author_id,
        } = request;

        if self
            .pull_requests
            .exists(&id)
            .await
            .map_err(map_pull_request_error)?
        {
            return Err(Error::already_exists(format!(
                "pull request {id} is already registered"
            )));
        }

        let author = self
            .users
            .find_by_id(&author_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(format!("author {author_id} not found")))?;

        let team = self
            .teams
            .find_by_name(author.team_name())
            .await
            .map_err(map_team_error)?
            .ok_or_else(|| {
                Error::not_found(format!("team {} not found", author.team_name()))
            })?;

        // Zero eligible teammates yields an open PR with no reviewers.
        let reviewers = select_reviewers(&team, &author_id, MAX_REVIEWERS);

        let pull_request = PullRequest::open(id, name, author_id, reviewers, Utc::now());
        self.pull_requests
            .save(&pull_request)
            .await
            .map_err(map_pull_request_error)?;

        Ok(pull_request)
    }

    async fn merge_pull_request(&self, id: &PullRequestId) -> Result<PullRequest, Error> {
        let mut pull_request = self.load_pull_request(id).await?;

        // Already merged: return the record as-is, without a rewrite.
        if pull_request.merge(Utc::now()) {
            self.pull_requests
                .save(&pull_request)
                .await
                .map_err(map_pull_request_error)?;
        }

        Ok(pull_request)
    }

    async fn reassign_reviewer(
        &self,
        request: ReassignReviewerRequest,
    ) -> Result<PullRequest, Error> {
        let ReassignReviewerRequest {
            pull_request_id,
            old_reviewer_id,
            new_reviewer_id,
        } = request;

        let mut pull_request = self.load_pull_request(&pull_request_id).await?;

        pull_request
            .reassign_reviewer(&old_reviewer_id, new_reviewer_id)
            .map_err(|err| match err {
                ReassignError::Merged => Error::conflict(format!(
                    "pull request {pull_request_id} is merged; reviewers can no longer change"
                )),
                ReassignError::NotAssigned { reviewer } => Error::not_assigned(format!(
                    "reviewer {reviewer} is not assigned to pull request {pull_request_id}"
                )),
            })?;

        self.pull_requests
            .save(&pull_request)
            .await
            .map_err(map_pull_request_error)?;

        Ok(pull_request)
    }
}

#[async_trait]
impl<P, U, T> ReviewQueueQuery for ReviewService<P, U, T>
where
    P: PullRequestRepository,
    U: UserRepository,
    T: TeamRepository,
{
    async fn list_for_reviewer(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PullRequestShort>, Error> {
        let pull_requests = self
            .pull_requests
            .list_by_reviewer(user_id)
            .await
            .map_err(map_pull_request_error)?;

        Ok(pull_requests
            .iter()
            .map(PullRequest::short)
            .collect())
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
