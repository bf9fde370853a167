//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::team::TeamName;

/// Validation errors returned by identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    UntrimmedId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::UntrimmedId => {
                write!(f, "user id must not contain surrounding whitespace")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier. Ids are caller-supplied opaque strings and are
/// globally unique across teams.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::UntrimmedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A user as persisted: identity, display name, the team it belongs to, and
/// whether it is currently eligible for review assignment.
///
/// The `team_name` field is a back-reference, not an ownership link; user
/// identity is global, not team-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    team_name: TeamName,
    active: bool,
}

impl User {
    /// Construct a user bound to a team.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, team_name: TeamName, active: bool) -> Self {
        Self {
            id,
            username: username.into(),
            team_name,
            active,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Name of the team this user belongs to.
    #[must_use]
    pub fn team_name(&self) -> &TeamName {
        &self.team_name
    }

    /// Whether the user is eligible for new review assignments.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the active flag. Setting the same value twice is a no-op by
    /// construction; deactivation never touches existing assignments.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
