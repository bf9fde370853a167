//! PostgreSQL-backed `PullRequestRepository` implementation using Diesel ORM.
//!
//! Pull requests are stored in a single row each, with the reviewer list as
//! a text array in assignment order. Rows are rebuilt through
//! [`PullRequest::from_record`] so persisted state is re-validated on every
//! read.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PullRequestPersistenceError, PullRequestRepository};
use crate::domain::pull_request::{
    PullRequest, PullRequestId, PullRequestRecord, PullRequestStatus,
};
use crate::domain::user::UserId;

use super::error_classification::{classify_diesel_error, classify_pool_error};
use super::models::{NewPullRequestRow, PullRequestRow};
use super::pool::{DbPool, PoolError};
use super::schema::pull_requests;

/// Diesel-backed implementation of the pull request repository port.
#[derive(Clone)]
pub struct DieselPullRequestRepository {
    pool: DbPool,
}

impl DieselPullRequestRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PullRequestPersistenceError {
    classify_pool_error(error).into_error(
        PullRequestPersistenceError::connection,
        PullRequestPersistenceError::query,
    )
}

fn map_diesel_error(error: diesel::result::Error) -> PullRequestPersistenceError {
    classify_diesel_error(error).into_error(
        PullRequestPersistenceError::connection,
        PullRequestPersistenceError::query,
    )
}

/// Convert a database row into a validated domain pull request.
fn row_to_pull_request(row: PullRequestRow) -> Result<PullRequest, PullRequestPersistenceError> {
    let PullRequestRow {
        id,
        name,
        author_id,
        reviewers,
        status,
        created_at,
        merged_at,
    } = row;

    let id = PullRequestId::new(id)
        .map_err(|err| PullRequestPersistenceError::query(err.to_string()))?;
    let author_id =
        UserId::new(author_id).map_err(|err| PullRequestPersistenceError::query(err.to_string()))?;
    let reviewers = reviewers
        .into_iter()
        .map(UserId::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| PullRequestPersistenceError::query(err.to_string()))?;
    let status = PullRequestStatus::parse(&status)
        .map_err(|err| PullRequestPersistenceError::query(err.to_string()))?;

    PullRequest::from_record(PullRequestRecord {
        id,
        name,
        author_id,
        reviewers,
        status,
        created_at,
        merged_at,
    })
    .map_err(|err| PullRequestPersistenceError::query(err.to_string()))
}

#[async_trait]
impl PullRequestRepository for DieselPullRequestRepository {
    async fn exists(&self, id: &PullRequestId) -> Result<bool, PullRequestPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            pull_requests::table.filter(pull_requests::id.eq(id.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn save(&self, pull_request: &PullRequest) -> Result<(), PullRequestPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewPullRequestRow {
            id: pull_request.id().as_ref(),
            name: pull_request.name(),
            author_id: pull_request.author_id().as_ref(),
            reviewers: pull_request
                .reviewers()
                .iter()
                .map(|reviewer| reviewer.as_ref().to_owned())
                .collect(),
            status: pull_request.status().as_str(),
            created_at: pull_request.created_at(),
            merged_at: pull_request.merged_at(),
        };

        // created_at is intentionally absent from the update set: the
        // original creation timestamp survives reassignments and merges.
        diesel::insert_into(pull_requests::table)
            .values(&row)
            .on_conflict(pull_requests::id)
            .do_update()
            .set((
                pull_requests::name.eq(excluded(pull_requests::name)),
                pull_requests::reviewers.eq(excluded(pull_requests::reviewers)),
                pull_requests::status.eq(excluded(pull_requests::status)),
                pull_requests::merged_at.eq(excluded(pull_requests::merged_at)),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(
        &self,
        id: &PullRequestId,
    ) -> Result<Option<PullRequest>, PullRequestPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = pull_requests::table
            .filter(pull_requests::id.eq(id.as_ref()))
            .select(PullRequestRow::as_select())
            .first::<PullRequestRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_pull_request).transpose()
    }

    async fn list_by_reviewer(
        &self,
        reviewer: &UserId,
    ) -> Result<Vec<PullRequest>, PullRequestPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PullRequestRow> = pull_requests::table
            .filter(pull_requests::reviewers.contains(vec![reviewer.as_ref().to_owned()]))
            .order((pull_requests::created_at.asc(), pull_requests::id.asc()))
            .select(PullRequestRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_pull_request).collect()
    }
}
