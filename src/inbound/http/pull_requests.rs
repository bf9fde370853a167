//! Pull request HTTP handlers.
//!
//! ```text
//! POST /pullRequest/create
//! POST /pullRequest/merge
//! POST /pullRequest/reassign
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::PullRequest;
use crate::domain::ports::{CreatePullRequestRequest, ReassignReviewerRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_pull_request_id, parse_user_id};

/// Request payload for opening a pull request.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePullRequestBody {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

/// Request payload for merging a pull request.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MergePullRequestBody {
    pub pull_request_id: String,
}

/// Request payload for swapping an assigned reviewer.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReassignReviewerBody {
    pub pull_request_id: String,
    pub old_reviewer_id: String,
    pub new_reviewer_id: String,
}

/// Pull request payload returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct PullRequestBody {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub assigned_reviewers: Vec<String>,
    pub status: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(format = "date-time")]
    pub merged_at: Option<String>,
}

/// Envelope wrapping a pull request payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct PullRequestEnvelope {
    pub pull_request: PullRequestBody,
}

impl From<PullRequest> for PullRequestEnvelope {
    fn from(pull_request: PullRequest) -> Self {
        Self {
            pull_request: PullRequestBody {
                pull_request_id: pull_request.id().as_ref().to_owned(),
                pull_request_name: pull_request.name().to_owned(),
                author_id: pull_request.author_id().as_ref().to_owned(),
                assigned_reviewers: pull_request
                    .reviewers()
                    .iter()
                    .map(|reviewer| reviewer.as_ref().to_owned())
                    .collect(),
                status: pull_request.status().as_str().to_owned(),
                created_at: pull_request.created_at().to_rfc3339(),
                merged_at: pull_request
                    .merged_at()
                    .map(|merged_at| merged_at.to_rfc3339()),
            },
        }
    }
}

/// Open a pull request and auto-assign reviewers from the author's team.
#[utoipa::path(
    post,
    path = "/pullRequest/create",
    request_body = CreatePullRequestBody,
    responses(
        (status = 201, description = "Pull request opened", body = PullRequestEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Author or team not found", body = ErrorSchema),
        (status = 409, description = "Pull request id already registered", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["pull-requests"],
    operation_id = "createPullRequest"
)]
#[post("/pullRequest/create")]
pub async fn create_pull_request(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePullRequestBody>,
) -> ApiResult<HttpResponse> {
    let CreatePullRequestBody {
        pull_request_id,
        pull_request_name,
        author_id,
    } = payload.into_inner();

    let request = CreatePullRequestRequest {
        id: parse_pull_request_id(pull_request_id, FieldName::new("pull_request_id"))?,
        name: pull_request_name,
        author_id: parse_user_id(author_id, FieldName::new("author_id"))?,
    };

    let pull_request = state.pull_requests.create_pull_request(request).await?;

    Ok(HttpResponse::Created().json(PullRequestEnvelope::from(pull_request)))
}

/// Merge a pull request. Merging twice returns the stored record unchanged.
#[utoipa::path(
    post,
    path = "/pullRequest/merge",
    request_body = MergePullRequestBody,
    responses(
        (status = 200, description = "Pull request merged", body = PullRequestEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Pull request not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["pull-requests"],
    operation_id = "mergePullRequest"
)]
#[post("/pullRequest/merge")]
pub async fn merge_pull_request(
    state: web::Data<HttpState>,
    payload: web::Json<MergePullRequestBody>,
) -> ApiResult<web::Json<PullRequestEnvelope>> {
    let id = parse_pull_request_id(
        payload.into_inner().pull_request_id,
        FieldName::new("pull_request_id"),
    )?;

    let pull_request = state.pull_requests.merge_pull_request(&id).await?;

    Ok(web::Json(PullRequestEnvelope::from(pull_request)))
}

/// Swap an assigned reviewer on an open pull request.
#[utoipa::path(
    post,
    path = "/pullRequest/reassign",
    request_body = ReassignReviewerBody,
    responses(
        (status = 200, description = "Reviewer reassigned", body = PullRequestEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Pull request not found", body = ErrorSchema),
        (status = 409, description = "Merged, or reviewer not assigned", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["pull-requests"],
    operation_id = "reassignReviewer"
)]
#[post("/pullRequest/reassign")]
pub async fn reassign_reviewer(
    state: web::Data<HttpState>,
    payload: web::Json<ReassignReviewerBody>,
) -> ApiResult<web::Json<PullRequestEnvelope>> {
    let ReassignReviewerBody {
        pull_request_id,
        old_reviewer_id,
        new_reviewer_id,
    } = payload.into_inner();

    let request = ReassignReviewerRequest {
        pull_request_id: parse_pull_request_id(
            pull_request_id,
            FieldName::new("pull_request_id"),
        )?,
        old_reviewer_id: parse_user_id(old_reviewer_id, FieldName::new("old_reviewer_id"))?,
        new_reviewer_id: parse_user_id(new_reviewer_id, FieldName::new("new_reviewer_id"))?,
    };

    let pull_request = state.pull_requests.reassign_reviewer(request).await?;

    Ok(web::Json(PullRequestEnvelope::from(pull_request)))
}

#[cfg(test)]
#[path = "pull_requests_tests.rs"]
mod tests;
