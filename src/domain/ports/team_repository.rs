//! Port abstraction for team persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::team::{Team, TeamName};

/// Persistence errors raised by team repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamPersistenceError {
    /// Repository connection could not be established.
    #[error("team repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("team repository query failed: {message}")]
    Query { message: String },
}

impl TeamPersistenceError {
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

/// Durable storage for teams and their rosters.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Check whether a team with the given name is registered.
    async fn exists(&self, name: &TeamName) -> Result<bool, TeamPersistenceError>;

    /// Persist the team record and upsert every member bound to it.
    ///
    /// Both writes happen in one transaction: a reader observing the team as
    /// existing must also observe all its members.
    async fn save(&self, team: &Team) -> Result<(), TeamPersistenceError>;

    /// Fetch a team with its roster in creation order.
    async fn find_by_name(&self, name: &TeamName) -> Result<Option<Team>, TeamPersistenceError>;
}
