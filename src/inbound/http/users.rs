//! User HTTP handlers.
//!
//! ```text
//! POST /users/setIsActive
//! GET  /users/getReview?user_id=u1
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{PullRequestShort, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_user_id};

/// Request payload for toggling a user's activity flag.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SetIsActiveRequestBody {
    pub user_id: String,
    pub is_active: bool,
}

/// User payload returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserBody {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

/// Envelope wrapping a user payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserBody,
}

/// Query parameters for the review queue lookup.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetReviewParams {
    /// Reviewer whose queue to fetch.
    pub user_id: String,
}

/// Compact pull request entry in a review queue.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewQueueItemBody {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
}

/// Response payload for the review queue lookup.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewQueueResponseBody {
    pub user_id: String,
    pub pull_requests: Vec<ReviewQueueItemBody>,
}

impl From<User> for UserEnvelope {
    fn from(user: User) -> Self {
        Self {
            user: UserBody {
                user_id: user.id().as_ref().to_owned(),
                username: user.username().to_owned(),
                team_name: user.team_name().as_ref().to_owned(),
                is_active: user.is_active(),
            },
        }
    }
}

impl From<PullRequestShort> for ReviewQueueItemBody {
    fn from(short: PullRequestShort) -> Self {
        Self {
            pull_request_id: short.id.as_ref().to_owned(),
            pull_request_name: short.name,
            author_id: short.author_id.as_ref().to_owned(),
            status: short.status.as_str().to_owned(),
        }
    }
}

/// Flip a user's activity flag.
///
/// Deactivation only affects future reviewer selection; existing assignments
/// stay in place.
#[utoipa::path(
    post,
    path = "/users/setIsActive",
    request_body = SetIsActiveRequestBody,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "setUserIsActive"
)]
#[post("/users/setIsActive")]
pub async fn set_is_active(
    state: web::Data<HttpState>,
    payload: web::Json<SetIsActiveRequestBody>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let SetIsActiveRequestBody { user_id, is_active } = payload.into_inner();
    let user_id = parse_user_id(user_id, FieldName::new("user_id"))?;

    let user = state.users.set_user_active(&user_id, is_active).await?;

    Ok(web::Json(UserEnvelope::from(user)))
}

/// List the pull requests the user is currently assigned to review.
#[utoipa::path(
    get,
    path = "/users/getReview",
    params(GetReviewParams),
    responses(
        (status = 200, description = "Review queue", body = ReviewQueueResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getReviewQueue"
)]
#[get("/users/getReview")]
pub async fn get_review(
    state: web::Data<HttpState>,
    query: web::Query<GetReviewParams>,
) -> ApiResult<web::Json<ReviewQueueResponseBody>> {
    let user_id = parse_user_id(query.into_inner().user_id, FieldName::new("user_id"))?;

    let queue = state.review_queue.list_for_reviewer(&user_id).await?;

    Ok(web::Json(ReviewQueueResponseBody {
        user_id: user_id.as_ref().to_owned(),
        pull_requests: queue.into_iter().map(ReviewQueueItemBody::from).collect(),
    }))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
