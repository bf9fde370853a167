//! Pull request data model and lifecycle rules.
//!
//! This module is the decision core: reviewer selection at creation time,
//! the one-way OPEN → MERGED transition, and reviewer reassignment
//! validation all live here as pure logic. Services orchestrate these rules
//! against the repositories; adapters never re-implement them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::team::Team;
use crate::domain::user::UserId;

/// Upper bound on reviewers assigned at pull request creation.
pub const MAX_REVIEWERS: usize = 2;

/// Validation errors returned by [`PullRequestId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestValidationError {
    EmptyId,
    UntrimmedId,
}

impl fmt::Display for PullRequestValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "pull request id must not be empty"),
            Self::UntrimmedId => {
                write!(f, "pull request id must not contain surrounding whitespace")
            }
        }
    }
}

impl std::error::Error for PullRequestValidationError {}

/// Stable pull request identifier, caller-supplied and globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PullRequestId(String);

impl PullRequestId {
    /// Validate and construct a [`PullRequestId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, PullRequestValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, PullRequestValidationError> {
        if id.is_empty() {
            return Err(PullRequestValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(PullRequestValidationError::UntrimmedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for PullRequestId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PullRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PullRequestId> for String {
    fn from(value: PullRequestId) -> Self {
        value.0
    }
}

impl TryFrom<String> for PullRequestId {
    type Error = PullRequestValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Two-state, one-directional pull request lifecycle. `Merged` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullRequestStatus {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "MERGED")]
    Merged,
}

impl PullRequestStatus {
    /// Wire representation, shared by the HTTP and persistence adapters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
        }
    }

    /// Parse the wire representation.
    pub fn parse(value: &str) -> Result<Self, PullRequestIntegrityError> {
        match value {
            "OPEN" => Ok(Self::Open),
            "MERGED" => Ok(Self::Merged),
            other => Err(PullRequestIntegrityError::UnknownStatus {
                status: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for PullRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures raised when rebuilding a pull request from persisted state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PullRequestIntegrityError {
    /// The status column holds a value outside the lifecycle.
    #[error("unknown pull request status: {status}")]
    UnknownStatus { status: String },
    /// `merged_at` must be present exactly when the status is MERGED.
    #[error("merged_at must be set if and only if the pull request is merged")]
    MergedAtMismatch,
    /// The author may never appear in the reviewer list.
    #[error("author {author} must not be an assigned reviewer")]
    AuthorIsReviewer { author: String },
}

/// Reassignment failures, ordered by precedence: the merged check runs
/// before the membership check, so reassigning on a merged pull request is a
/// conflict even when the old reviewer id is bogus.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReassignError {
    #[error("cannot reassign a reviewer on a merged pull request")]
    Merged,
    #[error("reviewer {reviewer} is not assigned to this pull request")]
    NotAssigned { reviewer: String },
}

/// Raw persisted state used to rebuild a [`PullRequest`].
#[derive(Debug, Clone)]
pub struct PullRequestRecord {
    pub id: PullRequestId,
    pub name: String,
    pub author_id: UserId,
    pub reviewers: Vec<UserId>,
    pub status: PullRequestStatus,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

/// Compact projection of a pull request for review queue listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestShort {
    pub id: PullRequestId,
    pub name: String,
    pub author_id: UserId,
    pub status: PullRequestStatus,
}

/// A unit of proposed work with an author, assigned reviewers, and a
/// two-state lifecycle.
///
/// ## Invariants
/// - the author is never in `reviewers`;
/// - `merged_at` is set if and only if the status is MERGED;
/// - reviewers are immutable once merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    id: PullRequestId,
    name: String,
    author_id: UserId,
    reviewers: Vec<UserId>,
    status: PullRequestStatus,
    created_at: DateTime<Utc>,
    merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Open a new pull request with the reviewers selected at creation time.
    ///
    /// Callers must pass a reviewer list that excludes the author; use
    /// [`select_reviewers`] to build one.
    #[must_use]
    pub fn open(
        id: PullRequestId,
        name: impl Into<String>,
        author_id: UserId,
        reviewers: Vec<UserId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        debug_assert!(!reviewers.contains(&author_id));
        Self {
            id,
            name: name.into(),
            author_id,
            reviewers,
            status: PullRequestStatus::Open,
            created_at,
            merged_at: None,
        }
    }

    /// Rebuild a pull request from persisted state, re-checking invariants.
    pub fn from_record(record: PullRequestRecord) -> Result<Self, PullRequestIntegrityError> {
        let PullRequestRecord {
            id,
            name,
            author_id,
            reviewers,
            status,
            created_at,
            merged_at,
        } = record;

        if merged_at.is_some() != (status == PullRequestStatus::Merged) {
            return Err(PullRequestIntegrityError::MergedAtMismatch);
        }
        if reviewers.contains(&author_id) {
            return Err(PullRequestIntegrityError::AuthorIsReviewer {
                author: author_id.to_string(),
            });
        }

        Ok(Self {
            id,
            name,
            author_id,
            reviewers,
            status,
            created_at,
            merged_at,
        })
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &PullRequestId {
        &self.id
    }

    /// Human-readable title.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Author's user id.
    #[must_use]
    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Assigned reviewers in assignment order.
    #[must_use]
    pub fn reviewers(&self) -> &[UserId] {
        &self.reviewers
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> PullRequestStatus {
        self.status
    }

    /// Creation timestamp, set once.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Merge timestamp; present exactly when the status is MERGED.
    #[must_use]
    pub fn merged_at(&self) -> Option<DateTime<Utc>> {
        self.merged_at
    }

    /// Apply the OPEN → MERGED transition.
    ///
    /// Returns `true` when the state changed. Merging an already-merged pull
    /// request is a no-op: the existing `merged_at` is kept and callers must
    /// not rewrite the record.
    pub fn merge(&mut self, now: DateTime<Utc>) -> bool {
        if self.status == PullRequestStatus::Merged {
            return false;
        }
        self.status = PullRequestStatus::Merged;
        self.merged_at = Some(now);
        true
    }

    /// Replace `old` with `new` in the reviewer list, preserving order and
    /// length.
    ///
    /// Fails with [`ReassignError::Merged`] on a merged pull request,
    /// regardless of whether `old` is valid, and with
    /// [`ReassignError::NotAssigned`] when `old` is not currently assigned.
    /// The replacement target is deliberately not validated against the user
    /// store; see DESIGN.md.
    pub fn reassign_reviewer(&mut self, old: &UserId, new: UserId) -> Result<(), ReassignError> {
        if self.status == PullRequestStatus::Merged {
            return Err(ReassignError::Merged);
        }
        let Some(slot) = self.reviewers.iter_mut().find(|reviewer| *reviewer == old) else {
            return Err(ReassignError::NotAssigned {
                reviewer: old.to_string(),
            });
        };
        *slot = new;
        Ok(())
    }

    /// Compact projection for review queue listings.
    #[must_use]
    pub fn short(&self) -> PullRequestShort {
        PullRequestShort {
            id: self.id.clone(),
            name: self.name.clone(),
            author_id: self.author_id.clone(),
            status: self.status,
        }
    }
}

/// Select up to `limit` reviewers for `author` from the team roster.
///
/// Members are considered in stored (creation) order; the author is skipped,
/// inactive members are skipped, and selection stops once `limit` reviewers
/// are found. Zero eligible members yields an empty list, which is a valid
/// outcome, not an error.
#[must_use]
pub fn select_reviewers(team: &Team, author: &UserId, limit: usize) -> Vec<UserId> {
    team.members()
        .iter()
        .filter(|member| member.user_id() != author)
        .filter(|member| member.is_active())
        .take(limit)
        .map(|member| member.user_id().clone())
        .collect()
}
