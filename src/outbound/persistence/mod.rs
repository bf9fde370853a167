//! PostgreSQL persistence adapters backed by Diesel.
//!
//! Each repository port gets one Diesel-backed adapter. Row structs and the
//! generated schema stay private to this module; the domain only ever sees
//! validated domain types.

mod diesel_pull_request_repository;
mod diesel_team_repository;
mod diesel_user_repository;
mod error_classification;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_pull_request_repository::DieselPullRequestRepository;
pub use diesel_team_repository::DieselTeamRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
