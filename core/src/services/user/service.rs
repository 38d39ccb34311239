//! User account management

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::Record;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Users in id order, at most `limit` of them when given
    pub async fn list(&self, limit: Option<u32>) -> DomainResult<Vec<User>> {
        self.user_repository.list_users(limit).await
    }

    pub async fn get(&self, user_id: i64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(User::RESOURCE))
    }

    /// Registers a new account.
    ///
    /// Email and phone are each unique across users; a duplicate is
    /// reported as `Conflict` by the repository's unique constraints.
    pub async fn register(&self, new_user: NewUser) -> DomainResult<User> {
        let user = User::from_new(new_user);
        user.validate()?;

        let user = match self.user_repository.create(user.clone()).await {
            Ok(user) => user,
            Err(err) => return Err(self.describe_conflict(err, &user).await),
        };

        tracing::info!(user_id = user.user_id, event = "user_registered", "Registered user");
        Ok(user)
    }

    /// Applies a partial update to an existing user
    pub async fn update(&self, user_id: i64, patch: UserPatch) -> DomainResult<User> {
        let mut user = self.get(user_id).await?;
        user.apply(patch);
        user.validate()?;

        let user = match self.user_repository.update(user.clone()).await {
            Ok(user) => user,
            Err(err) => return Err(self.describe_conflict(err, &user).await),
        };

        tracing::info!(user_id = user.user_id, event = "user_updated", "Updated user");
        Ok(user)
    }

    /// Deletes a user on behalf of `caller`.
    ///
    /// Only the account holder (same email and phone) may delete it.
    pub async fn delete(&self, user_id: i64, caller: &User) -> DomainResult<User> {
        let user = self.get(user_id).await?;
        if !user.same_identity(caller) {
            tracing::warn!(
                user_id = user_id,
                caller_id = caller.user_id,
                event = "user_delete_forbidden",
                "Caller does not own the account"
            );
            return Err(DomainError::forbidden());
        }

        if !self.user_repository.delete(user_id).await? {
            return Err(DomainError::not_found(User::RESOURCE));
        }

        tracing::info!(user_id = user_id, event = "user_deleted", "Deleted user");
        Ok(user)
    }
}

impl UserService {
    /// Names the taken field of a unique-key conflict on `user`
    async fn describe_conflict(&self, err: DomainError, user: &User) -> DomainError {
        if !err.is_conflict() {
            return err;
        }
        match self.user_repository.find_by_email(&user.email).await {
            Ok(Some(existing)) if existing.user_id != user.user_id => {
                DomainError::conflict("Email already registered")
            }
            _ => DomainError::conflict("Phone number already registered"),
        }
    }
}
