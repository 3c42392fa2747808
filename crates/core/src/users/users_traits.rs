use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserUpdate};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn insert_new_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_user(&self, user: User) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn register(&self, new_user: NewUser) -> Result<User>;
    async fn update_profile(&self, user_id: &str, patch: UserUpdate) -> Result<User>;
}
