//! Driving port for user activation changes.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::user::{User, UserId};

/// Mutate a user's active flag.
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Set the active flag, returning the updated user.
    ///
    /// Idempotent; fails with [`crate::domain::ErrorCode::NotFound`] when no
    /// user with that id exists. Never touches pull requests already
    /// referencing this user as reviewer.
    async fn set_user_active(&self, user_id: &UserId, active: bool) -> Result<User, Error>;
}
