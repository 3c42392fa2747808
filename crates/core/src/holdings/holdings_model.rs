//! Holding domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::ledger::PositionFigures;

/// A user's current position in one symbol. Unique per `(user_id, symbol)`.
///
/// `units`, `avg_buy_price`, and `cost_basis` are owned by the holding
/// reconciler; the manual update endpoint may overwrite them as an explicit
/// correction path. The invariant `cost_basis == units * avg_buy_price`
/// holds after every reconciled mutation, within rounding tolerance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub user_id: String,
    pub asset_type: String,
    pub symbol: String,
    pub units: Decimal,
    pub avg_buy_price: Decimal,
    pub cost_basis: Decimal,
    /// Current mark of the position. Updated opportunistically by buys and
    /// scaled by sells; it tracks cumulative cost added, not a live quote.
    pub current_value: Decimal,
    pub last_price: Option<Decimal>,
    pub last_price_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Holding {
    /// The ledger-owned numeric state of this position.
    pub fn figures(&self) -> PositionFigures {
        PositionFigures {
            units: self.units,
            avg_buy_price: self.avg_buy_price,
            cost_basis: self.cost_basis,
            current_value: self.current_value,
        }
    }

    /// Writes ledger output back onto the holding.
    pub fn set_figures(&mut self, figures: &PositionFigures) {
        self.units = figures.units;
        self.avg_buy_price = figures.avg_buy_price;
        self.cost_basis = figures.cost_basis;
        self.current_value = figures.current_value;
    }
}

/// Input model for creating an investment directly (outside transaction
/// recording). When a holding for the symbol already exists, the two
/// positions are merged.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub asset_type: String,
    pub symbol: String,
    pub units: Decimal,
    pub avg_buy_price: Decimal,
}

/// Explicit patch for manual holding edits. This is the deliberate escape
/// hatch for corrections: it bypasses reconciliation entirely, so a caller
/// can repair any field, including ledger-owned ones.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub asset_type: Option<String>,
    pub symbol: Option<String>,
    pub units: Option<Decimal>,
    pub avg_buy_price: Option<Decimal>,
    pub cost_basis: Option<Decimal>,
    pub current_value: Option<Decimal>,
    pub last_price: Option<Decimal>,
    pub last_price_at: Option<NaiveDateTime>,
}

impl HoldingUpdate {
    /// Merges this patch into an existing holding.
    pub fn apply_to(&self, holding: &mut Holding) {
        if let Some(asset_type) = &self.asset_type {
            holding.asset_type = asset_type.clone();
        }
        if let Some(symbol) = &self.symbol {
            holding.symbol = symbol.clone();
        }
        if let Some(units) = self.units {
            holding.units = units;
        }
        if let Some(avg_buy_price) = self.avg_buy_price {
            holding.avg_buy_price = avg_buy_price;
        }
        if let Some(cost_basis) = self.cost_basis {
            holding.cost_basis = cost_basis;
        }
        if let Some(current_value) = self.current_value {
            holding.current_value = current_value;
        }
        if let Some(last_price) = self.last_price {
            holding.last_price = Some(last_price);
        }
        if let Some(last_price_at) = self.last_price_at {
            holding.last_price_at = Some(last_price_at);
        }
    }
}
