//! Database models for goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use wealthtrack_core::goals::{Goal, NewGoal};

/// Database model for goals. Decimal columns are stored as TEXT.
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub goal_type: String,
    pub target_amount: String,
    pub target_date: NaiveDate,
    pub monthly_contribution: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub goal_type: String,
    pub target_amount: String,
    pub target_date: NaiveDate,
    pub monthly_contribution: String,
    pub status: String,
}

// Conversion to domain models
impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            goal_type: db.goal_type,
            target_amount: parse_decimal(&db.target_amount, "goals.target_amount"),
            target_date: db.target_date,
            monthly_contribution: parse_decimal(
                &db.monthly_contribution,
                "goals.monthly_contribution",
            ),
            status: db.status,
            created_at: db.created_at,
        }
    }
}

impl From<&Goal> for GoalDB {
    fn from(domain: &Goal) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            goal_type: domain.goal_type.clone(),
            target_amount: domain.target_amount.to_string(),
            target_date: domain.target_date,
            monthly_contribution: domain.monthly_contribution.to_string(),
            status: domain.status.clone(),
            created_at: domain.created_at,
        }
    }
}

impl NewGoalDB {
    pub fn from_domain(goal_id: String, owner_id: String, domain: NewGoal) -> Self {
        Self {
            id: goal_id,
            user_id: owner_id,
            goal_type: domain.goal_type,
            target_amount: domain.target_amount.to_string(),
            target_date: domain.target_date,
            monthly_contribution: domain
                .monthly_contribution
                .unwrap_or_default()
                .to_string(),
            status: domain.status.unwrap_or_else(|| "active".to_string()),
        }
    }
}
