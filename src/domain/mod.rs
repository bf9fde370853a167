//! Domain entities and the review engine.
//!
//! Purpose: hold the strongly typed entities (teams, users, pull requests),
//! the invariants they enforce, and the services implementing the driving
//! ports. Everything here is transport- and persistence-agnostic; adapters
//! talk to this layer through [`ports`].

pub mod error;
pub mod ports;
pub mod pull_request;
pub mod review_service;
pub mod team;
pub mod team_service;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::pull_request::{
    MAX_REVIEWERS, PullRequest, PullRequestId, PullRequestRecord, PullRequestShort,
    PullRequestStatus, ReassignError, select_reviewers,
};
pub use self::review_service::ReviewService;
pub use self::team::{Member, Team, TeamName, TeamValidationError};
pub use self::team_service::TeamService;
pub use self::user::{User, UserId, UserValidationError};
pub use self::user_service::UserActivationService;
