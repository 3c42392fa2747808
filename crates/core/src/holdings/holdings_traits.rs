use crate::errors::Result;
use crate::holdings::holdings_model::{Holding, HoldingUpdate, NewHolding};
use async_trait::async_trait;

/// Trait for holding repository operations
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    fn load_holdings(&self, user_id: &str) -> Result<Vec<Holding>>;
    fn get_holding(&self, user_id: &str, holding_id: &str) -> Result<Holding>;
    fn find_holding_by_symbol(&self, user_id: &str, symbol: &str) -> Result<Option<Holding>>;
    /// Creates a holding, or merges the new lot into an existing holding for
    /// the same symbol. Find and write happen in one write transaction.
    async fn upsert_position(&self, user_id: String, new_holding: NewHolding) -> Result<Holding>;
    async fn update_holding(&self, holding: Holding) -> Result<Holding>;
    async fn delete_holding(&self, user_id: String, holding_id: String) -> Result<usize>;
}

/// Trait for holding service operations
#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>>;
    fn get_holding(&self, user_id: &str, holding_id: &str) -> Result<Holding>;
    async fn create_holding(&self, user_id: &str, new_holding: NewHolding) -> Result<Holding>;
    async fn update_holding(
        &self,
        user_id: &str,
        holding_id: &str,
        patch: HoldingUpdate,
    ) -> Result<Holding>;
    async fn delete_holding(&self, user_id: &str, holding_id: &str) -> Result<usize>;
}
