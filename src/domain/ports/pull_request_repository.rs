//! Port abstraction for pull request persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::pull_request::{PullRequest, PullRequestId};
use crate::domain::user::UserId;

/// Persistence errors raised by pull request repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PullRequestPersistenceError {
    /// Repository connection could not be established.
    #[error("pull request repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("pull request repository query failed: {message}")]
    Query { message: String },
}

impl PullRequestPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Durable storage for pull request records.
#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    /// Check whether a pull request with the given id is registered.
    async fn exists(&self, id: &PullRequestId) -> Result<bool, PullRequestPersistenceError>;

    /// Insert or update a pull request record atomically.
    async fn save(&self, pull_request: &PullRequest) -> Result<(), PullRequestPersistenceError>;

    /// Fetch a pull request by identifier.
    async fn find_by_id(
        &self,
        id: &PullRequestId,
    ) -> Result<Option<PullRequest>, PullRequestPersistenceError>;

    /// List pull requests where the user is an assigned reviewer, in
    /// creation order.
    async fn list_by_reviewer(
        &self,
        reviewer: &UserId,
    ) -> Result<Vec<PullRequest>, PullRequestPersistenceError>;
}
