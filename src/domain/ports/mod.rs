//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`TeamCommand`], [`TeamQuery`], [`UserCommand`],
//! [`PullRequestCommand`], [`ReviewQueueQuery`]) are implemented by the
//! engine services and consumed by inbound adapters. Driven ports
//! ([`TeamRepository`], [`UserRepository`], [`PullRequestRepository`]) are
//! implemented by outbound persistence adapters.

mod pull_request_repository;
mod pull_requests;
mod team_repository;
mod teams;
mod user_repository;
mod users;

pub use pull_request_repository::{PullRequestPersistenceError, PullRequestRepository};
pub use pull_requests::{
    CreatePullRequestRequest, PullRequestCommand, ReassignReviewerRequest, ReviewQueueQuery,
};
pub use team_repository::{TeamPersistenceError, TeamRepository};
pub use teams::{CreateTeamRequest, TeamCommand, TeamQuery};
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users::UserCommand;
