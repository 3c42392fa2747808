use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::DEFAULT_RISK_PROFILE;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::users::users_model::{NewUser, User, UserUpdate};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

/// Service for managing user accounts and profiles.
pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repository.get_user(user_id)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repository.find_user_by_email(email)
    }

    async fn register(&self, mut new_user: NewUser) -> Result<User> {
        if new_user.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if new_user.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self
            .user_repository
            .find_user_by_email(&new_user.email)?
            .is_some()
        {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "email {} already registered",
                new_user.email
            ))));
        }
        if new_user.risk_profile.is_none() {
            new_user.risk_profile = Some(DEFAULT_RISK_PROFILE.to_string());
        }
        debug!("Registering user {}", new_user.email);
        self.user_repository.insert_new_user(new_user).await
    }

    async fn update_profile(&self, user_id: &str, patch: UserUpdate) -> Result<User> {
        let mut user = self.user_repository.get_user(user_id)?;
        patch.apply_to(&mut user);
        self.user_repository.update_user(user).await
    }
}
