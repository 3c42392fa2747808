//! Portfolio summary aggregation.

mod summary_model;
mod summary_service;
#[cfg(test)]
mod summary_service_tests;

pub use summary_model::{
    AllocationBreakdown, AssetAllocation, DashboardSummary, GoalProgressItem, PortfolioSummary,
};
pub use summary_service::{summarize, PortfolioService, PortfolioServiceTrait};
