//! Portfolio summary and dashboard view models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::Goal;

/// Value and share of the portfolio attributable to one asset class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub asset_type: String,
    pub value: Decimal,
    /// Share of total current value, rounded to two decimal places.
    /// Zero when the portfolio has no current value.
    pub percentage: Decimal,
}

/// Totals and per-asset-class allocation over a user's holdings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_current_value: Decimal,
    pub total_profit_loss: Decimal,
    pub asset_allocation: Vec<AssetAllocation>,
}

/// Allocation-only view for the dedicated allocation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdown {
    pub total_value: Decimal,
    pub allocation: Vec<AssetAllocation>,
}

/// Compact goal line for the dashboard rollup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressItem {
    pub id: String,
    pub goal_type: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    pub status: String,
    pub monthly_contribution: Decimal,
}

impl From<&Goal> for GoalProgressItem {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id.clone(),
            goal_type: goal.goal_type.clone(),
            target_amount: goal.target_amount,
            target_date: goal.target_date,
            status: goal.status.clone(),
            monthly_contribution: goal.monthly_contribution,
        }
    }
}

/// Portfolio summary folded together with the goal rollup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub portfolio: PortfolioSummary,
    pub active_goals_count: usize,
    pub goal_progress_summary: Vec<GoalProgressItem>,
}
