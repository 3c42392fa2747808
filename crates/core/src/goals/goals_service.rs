use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::GOAL_STATUS_ACTIVE;
use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use rust_decimal::Decimal;

/// Service for managing financial goals.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { goal_repository }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repository.load_goals(user_id)
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        self.goal_repository.get_goal(user_id, goal_id)
    }

    async fn create_goal(&self, user_id: &str, mut new_goal: NewGoal) -> Result<Goal> {
        if new_goal.target_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "target amount must be positive".to_string(),
            )
            .into());
        }
        if new_goal.status.is_none() {
            new_goal.status = Some(GOAL_STATUS_ACTIVE.to_string());
        }
        self.goal_repository
            .insert_new_goal(user_id.to_string(), new_goal)
            .await
    }

    async fn update_goal(&self, user_id: &str, goal_id: &str, patch: GoalUpdate) -> Result<Goal> {
        let mut goal = self.goal_repository.get_goal(user_id, goal_id)?;
        patch.apply_to(&mut goal);
        self.goal_repository.update_goal(goal).await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        self.goal_repository
            .delete_goal(user_id.to_string(), goal_id.to_string())
            .await
    }
}
