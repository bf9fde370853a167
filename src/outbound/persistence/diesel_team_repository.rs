//! PostgreSQL-backed `TeamRepository` implementation using Diesel ORM.
//!
//! Persists the team record and its roster atomically and rebuilds rosters
//! in stored order, which reviewer selection depends on.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{TeamPersistenceError, TeamRepository};
use crate::domain::{Member, Team, TeamName, UserId};

use super::error_classification::{classify_diesel_error, classify_pool_error};
use super::models::{NewTeamRow, NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{teams, users};

/// Diesel-backed implementation of the team repository port.
#[derive(Clone)]
pub struct DieselTeamRepository {
    pool: DbPool,
}

impl DieselTeamRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TeamPersistenceError {
    classify_pool_error(error).into_error(
        TeamPersistenceError::connection,
        TeamPersistenceError::query,
    )
}

fn map_diesel_error(error: diesel::result::Error) -> TeamPersistenceError {
    classify_diesel_error(error).into_error(
        TeamPersistenceError::connection,
        TeamPersistenceError::query,
    )
}

/// Build the roster insert rows, numbering members in list order.
fn roster_rows<'a>(team: &'a Team) -> Result<Vec<NewUserRow<'a>>, TeamPersistenceError> {
    team.members()
        .iter()
        .enumerate()
        .map(|(position, member)| {
            let team_position = i32::try_from(position).map_err(|_| {
                TeamPersistenceError::query(format!("roster position {position} out of range"))
            })?;
            Ok(NewUserRow {
                id: member.user_id().as_ref(),
                username: member.username(),
                team_name: team.name().as_ref(),
                team_position,
                active: member.is_active(),
            })
        })
        .collect()
}

/// Convert a database row into a validated roster member.
fn row_to_member(row: UserRow) -> Result<Member, TeamPersistenceError> {
    let user_id =
        UserId::new(&row.id).map_err(|err| TeamPersistenceError::query(err.to_string()))?;
    Ok(Member::new(user_id, row.username, row.active))
}

#[async_trait]
impl TeamRepository for DieselTeamRepository {
    async fn exists(&self, name: &TeamName) -> Result<bool, TeamPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            teams::table.filter(teams::name.eq(name.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn save(&self, team: &Team) -> Result<(), TeamPersistenceError> {
        let team_row = NewTeamRow {
            name: team.name().as_ref(),
        };
        let member_rows = roster_rows(team)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                diesel::insert_into(teams::table)
                    .values(&team_row)
                    .on_conflict(teams::name)
                    .do_nothing()
                    .execute(conn)
                    .await?;

                if member_rows.is_empty() {
                    return Ok(());
                }

                diesel::insert_into(users::table)
                    .values(&member_rows)
                    .on_conflict(users::id)
                    .do_update()
                    .set((
                        users::username.eq(excluded(users::username)),
                        users::team_name.eq(excluded(users::team_name)),
                        users::team_position.eq(excluded(users::team_position)),
                        users::active.eq(excluded(users::active)),
                    ))
                    .execute(conn)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn find_by_name(&self, name: &TeamName) -> Result<Option<Team>, TeamPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let registered: bool = diesel::select(diesel::dsl::exists(
            teams::table.filter(teams::name.eq(name.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if !registered {
            return Ok(None);
        }

        let rows: Vec<UserRow> = users::table
            .filter(users::team_name.eq(name.as_ref()))
            .order(users::team_position.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let members = rows
            .into_iter()
            .map(row_to_member)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Team::new(name.clone(), members)))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(err, TeamPersistenceError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_errors_map_to_query_errors() {
        let err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(err, TeamPersistenceError::Query { .. }));
    }

    #[rstest]
    fn roster_rows_number_members_in_list_order() {
        let members = ["c", "a", "b"]
            .into_iter()
            .map(|id| Member::new(UserId::new(id).expect("id"), id.to_uppercase(), true))
            .collect();
        let team = Team::new(TeamName::new("payments").expect("name"), members);

        let rows = roster_rows(&team).expect("rows build");

        assert_eq!(
            rows.iter()
                .map(|row| (row.id, row.team_position))
                .collect::<Vec<_>>(),
            vec![("c", 0), ("a", 1), ("b", 2)]
        );
    }

    #[rstest]
    fn row_conversion_rejects_malformed_ids() {
        let row = UserRow {
            id: String::new(),
            username: "Alice".into(),
            team_name: "payments".into(),
            active: true,
        };

        let err = row_to_member(row).expect_err("empty id");
        assert!(matches!(err, TeamPersistenceError::Query { .. }));
    }
}
