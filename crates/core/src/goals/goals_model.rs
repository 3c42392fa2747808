//! Goals domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a financial goal.
///
/// Goals are independent of the portfolio ledger; they only feed the
/// dashboard rollup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub goal_type: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    pub monthly_contribution: Decimal,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub goal_type: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    pub monthly_contribution: Option<Decimal>,
    pub status: Option<String>,
}

/// Explicit patch for goal updates. Every updatable field is named;
/// `None` leaves the current value untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub goal_type: Option<String>,
    pub target_amount: Option<Decimal>,
    pub target_date: Option<NaiveDate>,
    pub monthly_contribution: Option<Decimal>,
    pub status: Option<String>,
}

impl GoalUpdate {
    /// Merges this patch into an existing goal.
    pub fn apply_to(&self, goal: &mut Goal) {
        if let Some(goal_type) = &self.goal_type {
            goal.goal_type = goal_type.clone();
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
        if let Some(monthly_contribution) = self.monthly_contribution {
            goal.monthly_contribution = monthly_contribution;
        }
        if let Some(status) = &self.status {
            goal.status = status.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_goal() -> Goal {
        Goal {
            id: "g-1".to_string(),
            user_id: "u-1".to_string(),
            goal_type: "retirement".to_string(),
            target_amount: dec!(500000),
            target_date: NaiveDate::from_ymd_opt(2040, 1, 1).unwrap(),
            monthly_contribution: dec!(1500),
            status: "active".to_string(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut goal = sample_goal();
        let original = goal.clone();
        GoalUpdate::default().apply_to(&mut goal);
        assert_eq!(goal, original);
    }

    #[test]
    fn patch_updates_only_named_fields() {
        let mut goal = sample_goal();
        let patch = GoalUpdate {
            target_amount: Some(dec!(600000)),
            status: Some("paused".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut goal);
        assert_eq!(goal.target_amount, dec!(600000));
        assert_eq!(goal.status, "paused");
        assert_eq!(goal.goal_type, "retirement");
        assert_eq!(goal.monthly_contribution, dec!(1500));
    }
}
