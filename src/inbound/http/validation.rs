//! Shared validation helpers for inbound HTTP adapters.
//!
//! Identifier newtypes validate on construction; these helpers translate
//! their failures into `invalid_request` errors with field context so
//! clients can tell which part of the payload was rejected.

use serde_json::json;

use crate::domain::{Error, PullRequestId, TeamName, UserId};

/// Validation error codes attached to HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidTeamName,
    InvalidUserId,
    InvalidPullRequestId,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidTeamName => "invalid_team_name",
            Self::InvalidUserId => "invalid_user_id",
            Self::InvalidPullRequestId => "invalid_pull_request_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(
    field: FieldName,
    value: &str,
    code: ValidationCode,
    message: impl std::fmt::Display,
) -> Error {
    Error::invalid_request(format!("{}: {message}", field.as_str())).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn parse_team_name(value: String, field: FieldName) -> Result<TeamName, Error> {
    TeamName::new(&value)
        .map_err(|err| field_error(field, &value, ValidationCode::InvalidTeamName, err))
}

pub(crate) fn parse_user_id(value: String, field: FieldName) -> Result<UserId, Error> {
    UserId::new(&value)
        .map_err(|err| field_error(field, &value, ValidationCode::InvalidUserId, err))
}

pub(crate) fn parse_pull_request_id(
    value: String,
    field: FieldName,
) -> Result<PullRequestId, Error> {
    PullRequestId::new(&value)
        .map_err(|err| field_error(field, &value, ValidationCode::InvalidPullRequestId, err))
}
