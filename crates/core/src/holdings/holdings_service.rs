use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::holdings::holdings_model::{Holding, HoldingUpdate, NewHolding};
use crate::holdings::holdings_traits::{HoldingRepositoryTrait, HoldingsServiceTrait};

/// Service for managing investment holdings.
///
/// Creation merges into an existing position for the same symbol; updates
/// are the manual correction path that bypasses reconciliation.
pub struct HoldingsService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(holding_repository: Arc<dyn HoldingRepositoryTrait>) -> Self {
        Self { holding_repository }
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>> {
        self.holding_repository.load_holdings(user_id)
    }

    fn get_holding(&self, user_id: &str, holding_id: &str) -> Result<Holding> {
        self.holding_repository.get_holding(user_id, holding_id)
    }

    async fn create_holding(&self, user_id: &str, new_holding: NewHolding) -> Result<Holding> {
        if new_holding.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if new_holding.asset_type.trim().is_empty() {
            return Err(ValidationError::MissingField("assetType".to_string()).into());
        }
        if new_holding.units <= Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("units must be positive".to_string()).into(),
            );
        }
        if new_holding.avg_buy_price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "average buy price must not be negative".to_string(),
            )
            .into());
        }
        debug!(
            "Creating holding {} for user {}",
            new_holding.symbol, user_id
        );
        self.holding_repository
            .upsert_position(user_id.to_string(), new_holding)
            .await
    }

    async fn update_holding(
        &self,
        user_id: &str,
        holding_id: &str,
        patch: HoldingUpdate,
    ) -> Result<Holding> {
        let mut holding = self.holding_repository.get_holding(user_id, holding_id)?;
        patch.apply_to(&mut holding);
        self.holding_repository.update_holding(holding).await
    }

    async fn delete_holding(&self, user_id: &str, holding_id: &str) -> Result<usize> {
        self.holding_repository
            .delete_holding(user_id.to_string(), holding_id.to_string())
            .await
    }
}
