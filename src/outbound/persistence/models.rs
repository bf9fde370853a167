//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain. Adapters convert them to domain types through
//! validated constructors.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{pull_requests, teams, users};

/// Insertable struct for registering a team.
///
/// `created_at` is filled by the database default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = teams)]
pub(crate) struct NewTeamRow<'a> {
    pub name: &'a str,
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: String,
    pub username: String,
    pub team_name: String,
    pub active: bool,
}

/// Insertable struct for creating user records as part of a team roster.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub team_name: &'a str,
    pub team_position: i32,
    pub active: bool,
}

/// Changeset struct for updating a user without touching its roster
/// position.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub username: &'a str,
    pub team_name: &'a str,
    pub active: bool,
}

/// Row struct for reading from the pull_requests table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pull_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PullRequestRow {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub reviewers: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

/// Insertable struct for persisting a pull request.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pull_requests)]
pub(crate) struct NewPullRequestRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub author_id: &'a str,
    pub reviewers: Vec<String>,
    pub status: &'a str,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}
