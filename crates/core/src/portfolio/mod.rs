//! Portfolio accounting: ledger arithmetic, holding reconciliation, and
//! summary aggregation.

pub mod ledger;
pub mod reconciler;
pub mod summary;

#[cfg(test)]
mod ledger_tests;
#[cfg(test)]
mod reconciler_tests;

pub use reconciler::{
    reconcile, PositionSeed, ReconcileAction, ReconcileOutcome, RecordedTransaction,
};
pub use summary::{
    summarize, AllocationBreakdown, AssetAllocation, DashboardSummary, GoalProgressItem,
    PortfolioService, PortfolioServiceTrait, PortfolioSummary,
};
