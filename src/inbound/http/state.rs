//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    PullRequestCommand, ReviewQueueQuery, TeamCommand, TeamQuery, UserCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub teams: Arc<dyn TeamCommand>,
    pub teams_query: Arc<dyn TeamQuery>,
    pub users: Arc<dyn UserCommand>,
    pub pull_requests: Arc<dyn PullRequestCommand>,
    pub review_queue: Arc<dyn ReviewQueueQuery>,
}
