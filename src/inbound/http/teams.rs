//! Team HTTP handlers.
//!
//! ```text
//! POST /team/add
//! GET  /team/get?team_name=payments
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::CreateTeamRequest;
use crate::domain::{Error, Member, Team};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_team_name, parse_user_id};

/// Roster entry payload shared by requests and responses.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MemberBody {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

/// Request payload for registering a team.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTeamRequestBody {
    pub team_name: String,
    pub members: Vec<MemberBody>,
}

/// Team payload returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamBody {
    pub team_name: String,
    pub members: Vec<MemberBody>,
}

/// Envelope wrapping a team payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamEnvelope {
    pub team: TeamBody,
}

/// Query parameters for team lookup.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetTeamParams {
    /// Name of the team to fetch.
    pub team_name: String,
}

fn parse_members(members: Vec<MemberBody>) -> Result<Vec<Member>, Error> {
    members
        .into_iter()
        .map(|member| {
            let user_id = parse_user_id(member.user_id, FieldName::new("members.user_id"))?;
            Ok(Member::new(user_id, member.username, member.is_active))
        })
        .collect()
}

impl From<Team> for TeamEnvelope {
    fn from(team: Team) -> Self {
        Self {
            team: TeamBody {
                team_name: team.name().as_ref().to_owned(),
                members: team
                    .members()
                    .iter()
                    .map(|member| MemberBody {
                        user_id: member.user_id().as_ref().to_owned(),
                        username: member.username().to_owned(),
                        is_active: member.is_active(),
                    })
                    .collect(),
            },
        }
    }
}

/// Register a new team with its ordered roster.
#[utoipa::path(
    post,
    path = "/team/add",
    request_body = CreateTeamRequestBody,
    responses(
        (status = 201, description = "Team registered", body = TeamEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Team name already registered", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["teams"],
    operation_id = "addTeam"
)]
#[post("/team/add")]
pub async fn add_team(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTeamRequestBody>,
) -> ApiResult<HttpResponse> {
    let CreateTeamRequestBody { team_name, members } = payload.into_inner();

    let request = CreateTeamRequest {
        name: parse_team_name(team_name, FieldName::new("team_name"))?,
        members: parse_members(members)?,
    };

    let team = state.teams.create_team(request).await?;

    Ok(HttpResponse::Created().json(TeamEnvelope::from(team)))
}

/// Fetch a team and its roster by name.
#[utoipa::path(
    get,
    path = "/team/get",
    params(GetTeamParams),
    responses(
        (status = 200, description = "Team found", body = TeamEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Team not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["teams"],
    operation_id = "getTeam"
)]
#[get("/team/get")]
pub async fn get_team(
    state: web::Data<HttpState>,
    query: web::Query<GetTeamParams>,
) -> ApiResult<web::Json<TeamEnvelope>> {
    let name = parse_team_name(query.into_inner().team_name, FieldName::new("team_name"))?;

    let team = state.teams_query.get_team(&name).await?;

    Ok(web::Json(TeamEnvelope::from(team)))
}

#[cfg(test)]
#[path = "teams_tests.rs"]
mod tests;
