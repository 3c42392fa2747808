//! Pure weighted-average cost-basis arithmetic.
//!
//! These functions are stateless: they take the current numeric state of a
//! position and one event, and return the next state. Persistence and
//! transaction boundaries belong to the storage layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MONEY_SCALE, PRICE_SCALE, UNIT_SCALE};
use crate::errors::{LedgerError, Result};

/// The ledger-owned numeric state of a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFigures {
    pub units: Decimal,
    pub avg_buy_price: Decimal,
    pub cost_basis: Decimal,
    pub current_value: Decimal,
}

/// Rounds to the given scale and pads with zeros so every ledger output
/// carries the fixed number of fractional digits (`round_dp` alone only
/// reduces scale).
fn quantize(value: Decimal, scale: u32) -> Decimal {
    let mut quantized = value.round_dp(scale);
    quantized.rescale(scale);
    quantized
}

fn money(value: Decimal) -> Decimal {
    quantize(value, MONEY_SCALE)
}

fn unit_price(value: Decimal) -> Decimal {
    quantize(value, PRICE_SCALE)
}

fn units(value: Decimal) -> Decimal {
    quantize(value, UNIT_SCALE)
}

/// Result of applying a disposal to a position.
#[derive(Debug, Clone, PartialEq)]
pub enum SellOutcome {
    /// All units were sold; the holding must be deleted.
    Closed,
    /// A proportion of the position remains.
    Reduced(PositionFigures),
}

/// Opens a fresh position from a first acquisition.
pub fn open_position(quantity: Decimal, price: Decimal) -> Result<PositionFigures> {
    let new_units = units(quantity);
    if new_units.is_zero() {
        return Err(LedgerError::DivideByZero("average buy price".to_string()).into());
    }
    let cost_basis = money(quantity * price);
    Ok(PositionFigures {
        units: new_units,
        avg_buy_price: unit_price(price),
        cost_basis,
        current_value: cost_basis,
    })
}

/// Applies a buy/contribution: units and cost grow, the average is
/// recomputed over the whole position, and the mark is incremented by the
/// cost added (cumulative cost, not a live quote).
pub fn apply_buy(
    position: &PositionFigures,
    quantity: Decimal,
    price: Decimal,
) -> Result<PositionFigures> {
    let cost_added = money(quantity * price);
    let new_units = units(position.units + quantity);
    if new_units.is_zero() {
        return Err(LedgerError::DivideByZero("average buy price".to_string()).into());
    }
    let new_cost = money(position.cost_basis + cost_added);
    Ok(PositionFigures {
        units: new_units,
        avg_buy_price: unit_price(new_cost / new_units),
        cost_basis: new_cost,
        current_value: money(position.current_value + cost_added),
    })
}

/// Applies a sell/withdrawal: cost basis and mark scale by the unsold
/// proportion, the average stays put. Selling every unit closes the
/// position; selling more than is held is rejected.
pub fn apply_sell(
    position: &PositionFigures,
    symbol: &str,
    quantity: Decimal,
) -> Result<SellOutcome> {
    if quantity > position.units {
        return Err(LedgerError::InsufficientUnits {
            symbol: symbol.to_string(),
            held: position.units,
            requested: quantity,
        }
        .into());
    }
    let new_units = units(position.units - quantity);
    if new_units <= Decimal::ZERO {
        return Ok(SellOutcome::Closed);
    }
    let remaining = Decimal::ONE - quantity / position.units;
    Ok(SellOutcome::Reduced(PositionFigures {
        units: new_units,
        avg_buy_price: position.avg_buy_price,
        cost_basis: money(position.cost_basis * remaining),
        current_value: money(position.current_value * remaining),
    }))
}

/// Merges a directly-created lot into an existing position. Unlike
/// [`apply_buy`], the merged mark is reset to the combined cost, matching
/// the direct investment-create semantics.
pub fn absorb_position(
    position: &PositionFigures,
    added_units: Decimal,
    price: Decimal,
) -> Result<PositionFigures> {
    let cost_added = money(added_units * price);
    let new_units = units(position.units + added_units);
    if new_units.is_zero() {
        return Err(LedgerError::DivideByZero("average buy price".to_string()).into());
    }
    let total_cost = money(position.cost_basis + cost_added);
    Ok(PositionFigures {
        units: new_units,
        avg_buy_price: unit_price(total_cost / new_units),
        cost_basis: total_cost,
        current_value: total_cost,
    })
}
