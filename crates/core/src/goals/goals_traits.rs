use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn insert_new_goal(&self, user_id: String, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal: Goal) -> Result<Goal>;
    async fn delete_goal(&self, user_id: String, goal_id: String) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, goal_id: &str, patch: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}
