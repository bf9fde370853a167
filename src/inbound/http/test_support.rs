//! Canned port implementations for handler tests.
//!
//! The fixtures return deterministic data keyed off a few magic identifiers
//! so each handler test can provoke the error path it cares about.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::ports::{
    CreatePullRequestRequest, CreateTeamRequest, PullRequestCommand, ReassignReviewerRequest,
    ReviewQueueQuery, TeamCommand, TeamQuery, UserCommand,
};
use crate::domain::{
    Error, Member, PullRequest, PullRequestId, PullRequestShort, PullRequestStatus, Team,
    TeamName, User, UserId,
};
use crate::inbound::http::state::HttpState;

pub(crate) fn fixture_state() -> HttpState {
    let teams = Arc::new(FixtureTeamPorts);
    let pull_requests = Arc::new(FixturePullRequestPorts);
    HttpState {
        teams: teams.clone(),
        teams_query: teams,
        users: Arc::new(FixtureUserCommand),
        pull_requests: pull_requests.clone(),
        review_queue: pull_requests,
    }
}

fn fixture_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn fixture_merged_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 2, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn user_id(id: &str) -> UserId {
    UserId::new(id).expect("fixture user id")
}

fn payments_roster() -> Vec<Member> {
    vec![
        Member::new(user_id("a"), "Alice", true),
        Member::new(user_id("b"), "Bob", false),
    ]
}

/// Team ports with one known team ("payments") and one taken name ("taken").
pub(crate) struct FixtureTeamPorts;

#[async_trait]
impl TeamCommand for FixtureTeamPorts {
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, Error> {
        if request.name.as_ref() == "taken" {
            return Err(Error::already_exists("team taken is already registered"));
        }
        Ok(Team::new(request.name, request.members))
    }
}

#[async_trait]
impl TeamQuery for FixtureTeamPorts {
    async fn get_team(&self, name: &TeamName) -> Result<Team, Error> {
        if name.as_ref() == "payments" {
            Ok(Team::new(name.clone(), payments_roster()))
        } else {
            Err(Error::not_found(format!("team {name} not found")))
        }
    }
}

/// User command with one unknown id ("ghost").
pub(crate) struct FixtureUserCommand;

#[async_trait]
impl UserCommand for FixtureUserCommand {
    async fn set_user_active(&self, id: &UserId, active: bool) -> Result<User, Error> {
        if id.as_ref() == "ghost" {
            return Err(Error::not_found(format!("user {id} not found")));
        }
        Ok(User::new(
            id.clone(),
            "Alice",
            TeamName::new("payments").expect("fixture team name"),
            active,
        ))
    }
}

/// Pull request ports keyed on magic ids: "pr-dup" collides, "pr-missing" is
/// unknown, "pr-merged" is frozen, and old reviewer "z" is never assigned.
pub(crate) struct FixturePullRequestPorts;

fn open_fixture(id: PullRequestId, name: String, author_id: UserId) -> PullRequest {
    PullRequest::open(
        id,
        name,
        author_id,
        vec![user_id("b"), user_id("c")],
        fixture_created_at(),
    )
}

#[async_trait]
impl PullRequestCommand for FixturePullRequestPorts {
    async fn create_pull_request(
        &self,
        request: CreatePullRequestRequest,
    ) -> Result<PullRequest, Error> {
        if request.id.as_ref() == "pr-dup" {
            return Err(Error::already_exists(
                "pull request pr-dup is already registered",
            ));
        }
        if request.author_id.as_ref() == "ghost" {
            return Err(Error::not_found("author ghost not found"));
        }
        Ok(open_fixture(request.id, request.name, request.author_id))
    }

    async fn merge_pull_request(&self, id: &PullRequestId) -> Result<PullRequest, Error> {
        if id.as_ref() == "pr-missing" {
            return Err(Error::not_found(format!("pull request {id} not found")));
        }
        let mut pull_request = open_fixture(id.clone(), "Fix flaky tests".into(), user_id("a"));
        pull_request.merge(fixture_merged_at());
        Ok(pull_request)
    }

    async fn reassign_reviewer(
        &self,
        request: ReassignReviewerRequest,
    ) -> Result<PullRequest, Error> {
        if request.pull_request_id.as_ref() == "pr-merged" {
            return Err(Error::conflict(
                "pull request pr-merged is merged; reviewers can no longer change",
            ));
        }
        if request.old_reviewer_id.as_ref() == "z" {
            return Err(Error::not_assigned(
                "reviewer z is not assigned to pull request pr-1",
            ));
        }
        Ok(PullRequest::open(
            request.pull_request_id,
            "Fix flaky tests",
            user_id("a"),
            vec![request.new_reviewer_id, user_id("c")],
            fixture_created_at(),
        ))
    }
}

#[async_trait]
impl ReviewQueueQuery for FixturePullRequestPorts {
    async fn list_for_reviewer(
        &self,
        reviewer: &UserId,
    ) -> Result<Vec<PullRequestShort>, Error> {
        if reviewer.as_ref() == "idle" {
            return Ok(Vec::new());
        }
        Ok(vec![
            PullRequestShort {
                id: PullRequestId::new("pr-1").expect("fixture id"),
                name: "Fix flaky tests".into(),
                author_id: user_id("a"),
                status: PullRequestStatus::Open,
            },
            PullRequestShort {
                id: PullRequestId::new("pr-2").expect("fixture id"),
                name: "Bump diesel".into(),
                author_id: user_id("d"),
                status: PullRequestStatus::Open,
            },
        ])
    }
}
