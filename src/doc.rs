//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: all endpoint paths from the inbound layer plus the domain
//! schema wrappers. The generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::pull_requests::{
    CreatePullRequestBody, MergePullRequestBody, PullRequestBody, PullRequestEnvelope,
    ReassignReviewerBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::teams::{CreateTeamRequestBody, MemberBody, TeamBody, TeamEnvelope};
use crate::inbound::http::users::{
    ReviewQueueItemBody, ReviewQueueResponseBody, SetIsActiveRequestBody, UserBody, UserEnvelope,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Review board API",
        description = "Pull request lifecycle, reviewer assignment, and review queues.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::teams::add_team,
        crate::inbound::http::teams::get_team,
        crate::inbound::http::users::set_is_active,
        crate::inbound::http::users::get_review,
        crate::inbound::http::pull_requests::create_pull_request,
        crate::inbound::http::pull_requests::merge_pull_request,
        crate::inbound::http::pull_requests::reassign_reviewer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        MemberBody,
        CreateTeamRequestBody,
        TeamBody,
        TeamEnvelope,
        SetIsActiveRequestBody,
        UserBody,
        UserEnvelope,
        ReviewQueueItemBody,
        ReviewQueueResponseBody,
        CreatePullRequestBody,
        MergePullRequestBody,
        ReassignReviewerBody,
        PullRequestBody,
        PullRequestEnvelope,
    )),
    tags(
        (name = "teams", description = "Team registration and lookup"),
        (name = "users", description = "User activity and review queues"),
        (name = "pull-requests", description = "Pull request lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
