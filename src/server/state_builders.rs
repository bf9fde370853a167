//! Builders wiring repositories into services and the HTTP state.

use std::sync::Arc;

use reviewboard::domain::{ReviewService, TeamService, UserActivationService};
use reviewboard::inbound::http::state::HttpState;
use reviewboard::outbound::persistence::{
    DbPool, DieselPullRequestRepository, DieselTeamRepository, DieselUserRepository,
};

/// Construct the HTTP state over Diesel-backed repositories.
pub(crate) fn build_http_state(pool: &DbPool) -> HttpState {
    let team_repository = Arc::new(DieselTeamRepository::new(pool.clone()));
    let user_repository = Arc::new(DieselUserRepository::new(pool.clone()));
    let pull_request_repository = Arc::new(DieselPullRequestRepository::new(pool.clone()));

    let team_service = Arc::new(TeamService::new(team_repository.clone()));
    let user_service = Arc::new(UserActivationService::new(user_repository.clone()));
    let review_service = Arc::new(ReviewService::new(
        pull_request_repository,
        user_repository,
        team_repository,
    ));

    HttpState {
        teams: team_service.clone(),
        teams_query: team_service,
        users: user_service,
        pull_requests: review_service.clone(),
        review_queue: review_service,
    }
}
