//! User activation service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{UserCommand, UserPersistenceError, UserRepository};
use crate::domain::user::{User, UserId};

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Service flipping a user's active flag through the user repository.
#[derive(Clone)]
pub struct UserActivationService<R> {
    users: Arc<R>,
}

impl<R> UserActivationService<R> {
    /// Create a new service over the user repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UserCommand for UserActivationService<R>
where
    R: UserRepository,
{
    async fn set_user_active(&self, user_id: &UserId, active: bool) -> Result<User, Error> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))?;

        user.set_active(active);
        self.users
            .upsert(&user)
            .await
            .map_err(map_repository_error)?;

        Ok(user)
    }
}
