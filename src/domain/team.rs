//! Team data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;

/// Validation errors returned by [`TeamName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamValidationError {
    EmptyName,
    UntrimmedName,
}

impl fmt::Display for TeamValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "team name must not be empty"),
            Self::UntrimmedName => {
                write!(f, "team name must not contain surrounding whitespace")
            }
        }
    }
}

impl std::error::Error for TeamValidationError {}

/// Globally unique team identifier. Immutable once the team is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Validate and construct a [`TeamName`] from borrowed input.
    pub fn new(name: impl AsRef<str>) -> Result<Self, TeamValidationError> {
        Self::from_owned(name.as_ref().to_owned())
    }

    fn from_owned(name: String) -> Result<Self, TeamValidationError> {
        if name.is_empty() {
            return Err(TeamValidationError::EmptyName);
        }
        if name.trim() != name {
            return Err(TeamValidationError::UntrimmedName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TeamName> for String {
    fn from(value: TeamName) -> Self {
        value.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A team member as listed at team creation time.
///
/// This is the roster entry, not the global user record: the member's team
/// binding is implied by the [`Team`] holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    user_id: UserId,
    username: String,
    active: bool,
}

impl Member {
    /// Construct a roster entry.
    #[must_use]
    pub fn new(user_id: UserId, username: impl Into<String>, active: bool) -> Self {
        Self {
            user_id,
            username: username.into(),
            active,
        }
    }

    /// Global user identifier.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Display name.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Whether the member is eligible for review assignment.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// A named group of users with a fixed, ordered membership list.
///
/// ## Invariants
/// - Member order is the order given at creation and is preserved by
///   persistence; reviewer selection depends on it.
/// - Membership is fixed after creation; activity changes happen on the
///   member's user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: TeamName,
    members: Vec<Member>,
}

impl Team {
    /// Construct a team with its ordered roster.
    #[must_use]
    pub fn new(name: TeamName, members: Vec<Member>) -> Self {
        Self { name, members }
    }

    /// Unique team name.
    #[must_use]
    pub fn name(&self) -> &TeamName {
        &self.name
    }

    /// Roster in creation order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for team name validation and roster order.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", TeamValidationError::EmptyName)]
    #[case("payments ", TeamValidationError::UntrimmedName)]
    fn rejects_malformed_names(#[case] raw: &str, #[case] expected: TeamValidationError) {
        assert_eq!(TeamName::new(raw).expect_err("invalid name"), expected);
    }

    #[rstest]
    fn members_keep_creation_order() {
        let roster: Vec<Member> = ["c", "a", "b"]
            .into_iter()
            .map(|id| Member::new(UserId::new(id).expect("id"), id.to_uppercase(), true))
            .collect();
        let team = Team::new(TeamName::new("payments").expect("name"), roster.clone());

        assert_eq!(team.members(), roster.as_slice());
    }
}
