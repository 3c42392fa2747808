//! Service for computing portfolio and dashboard summaries.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::GOAL_STATUS_ACTIVE;
use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::holdings::{Holding, HoldingRepositoryTrait};
use crate::portfolio::summary::summary_model::{
    AllocationBreakdown, AssetAllocation, DashboardSummary, GoalProgressItem, PortfolioSummary,
};

/// Number of goals surfaced on the dashboard rollup.
const DASHBOARD_GOAL_LIMIT: usize = 10;

/// Trait for portfolio summary operations
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_summary(&self, user_id: &str) -> Result<PortfolioSummary>;
    fn get_allocation(&self, user_id: &str) -> Result<AllocationBreakdown>;
    fn get_dashboard(&self, user_id: &str) -> Result<DashboardSummary>;
}

/// Read-only aggregator over a user's holdings and goals. Holdings are read
/// at query time; summaries are snapshots, not isolated from concurrent
/// writers.
pub struct PortfolioService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        Self {
            holding_repository,
            goal_repository,
        }
    }
}

/// Computes totals, profit/loss, and per-asset-class allocation over a set
/// of holdings. Pure; order of holdings does not affect the result beyond
/// the (sorted) group order.
pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let mut total_invested = Decimal::ZERO;
    let mut total_current_value = Decimal::ZERO;
    let mut values_by_class: BTreeMap<String, Decimal> = BTreeMap::new();

    for holding in holdings {
        total_invested += holding.cost_basis;
        total_current_value += holding.current_value;
        *values_by_class
            .entry(holding.asset_type.clone())
            .or_insert(Decimal::ZERO) += holding.current_value;
    }

    let asset_allocation = values_by_class
        .into_iter()
        .map(|(asset_type, value)| {
            let percentage = if total_current_value > Decimal::ZERO {
                (value / total_current_value * dec!(100)).round_dp(2)
            } else {
                Decimal::ZERO
            };
            AssetAllocation {
                asset_type,
                value,
                percentage,
            }
        })
        .collect();

    PortfolioSummary {
        total_invested,
        total_current_value,
        total_profit_loss: total_current_value - total_invested,
        asset_allocation,
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    fn get_summary(&self, user_id: &str) -> Result<PortfolioSummary> {
        let holdings = self.holding_repository.load_holdings(user_id)?;
        debug!(
            "Summarizing {} holdings for user {}",
            holdings.len(),
            user_id
        );
        Ok(summarize(&holdings))
    }

    fn get_allocation(&self, user_id: &str) -> Result<AllocationBreakdown> {
        let summary = self.get_summary(user_id)?;
        Ok(AllocationBreakdown {
            total_value: summary.total_current_value,
            allocation: summary.asset_allocation,
        })
    }

    fn get_dashboard(&self, user_id: &str) -> Result<DashboardSummary> {
        let portfolio = self.get_summary(user_id)?;
        let goals = self.goal_repository.load_goals(user_id)?;
        let active_goals_count = goals
            .iter()
            .filter(|goal| goal.status == GOAL_STATUS_ACTIVE)
            .count();
        let goal_progress_summary = goals
            .iter()
            .take(DASHBOARD_GOAL_LIMIT)
            .map(GoalProgressItem::from)
            .collect();
        Ok(DashboardSummary {
            portfolio,
            active_goals_count,
            goal_progress_summary,
        })
    }
}
