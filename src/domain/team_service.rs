//! Team registration and lookup services.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{
    CreateTeamRequest, TeamCommand, TeamPersistenceError, TeamQuery, TeamRepository,
};
use crate::domain::team::{Team, TeamName};

fn map_repository_error(error: TeamPersistenceError) -> Error {
    match error {
        TeamPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("team repository unavailable: {message}"))
        }
        TeamPersistenceError::Query { message } => {
            Error::internal(format!("team repository error: {message}"))
        }
    }
}

/// Team service implementing the registration and lookup driving ports.
#[derive(Clone)]
pub struct TeamService<R> {
    teams: Arc<R>,
}

impl<R> TeamService<R> {
    /// Create a new service over the team repository.
    pub fn new(teams: Arc<R>) -> Self {
        Self { teams }
    }
}

#[async_trait]
impl<R> TeamCommand for TeamService<R>
where
    R: TeamRepository,
{
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, Error> {
        let CreateTeamRequest { name, members } = request;

        if self
            .teams
            .exists(&name)
            .await
            .map_err(map_repository_error)?
        {
            return Err(Error::already_exists(format!(
                "team {name} is already registered"
            )));
        }

        let team = Team::new(name, members);
        self.teams
            .save(&team)
            .await
            .map_err(map_repository_error)?;

        Ok(team)
    }
}

#[async_trait]
impl<R> TeamQuery for TeamService<R>
where
    R: TeamRepository,
{
    async fn get_team(&self, name: &TeamName) -> Result<Team, Error> {
        self.teams
            .find_by_name(name)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("team {name} not found")))
    }
}
