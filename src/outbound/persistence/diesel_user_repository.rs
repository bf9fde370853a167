//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{TeamName, User, UserId};

use super::error_classification::{classify_diesel_error, classify_pool_error};
use super::models::{UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    classify_pool_error(error).into_error(
        UserPersistenceError::connection,
        UserPersistenceError::query,
    )
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    classify_diesel_error(error).into_error(
        UserPersistenceError::connection,
        UserPersistenceError::query,
    )
}

/// Convert a database row into a validated domain user.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        username,
        team_name,
        active,
    } = row;

    let id = UserId::new(id).map_err(|err| UserPersistenceError::query(err.to_string()))?;
    let team_name =
        TeamName::new(team_name).map_err(|err| UserPersistenceError::query(err.to_string()))?;

    Ok(User::new(id, username, team_name, active))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update = UserUpdate {
            username: user.username(),
            team_name: user.team_name().as_ref(),
            active: user.is_active(),
        };

        // Users are created through team registration; this only updates the
        // mutable columns and leaves the roster position alone.
        diesel::update(users::table.filter(users::id.eq(user.id().as_ref())))
            .set(&update)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::id.eq(id.as_ref()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}
