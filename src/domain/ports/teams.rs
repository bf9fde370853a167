//! Driving ports for team registration and lookup.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::team::{Member, Team, TeamName};

/// Payload for registering a team with its ordered roster.
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: TeamName,
    pub members: Vec<Member>,
}

/// Register a new team.
#[async_trait]
pub trait TeamCommand: Send + Sync {
    /// Create the team if and only if no team with that name exists.
    ///
    /// Fails with [`crate::domain::ErrorCode::AlreadyExists`] when the name
    /// is taken; no partial mutation occurs.
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, Error>;
}

/// Read a team with its roster.
#[async_trait]
pub trait TeamQuery: Send + Sync {
    /// Fetch a team by name, failing with
    /// [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get_team(&self, name: &TeamName) -> Result<Team, Error>;
}
