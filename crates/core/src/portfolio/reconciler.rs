//! Holding reconciliation planning.
//!
//! [`reconcile`] is the pure step between a transaction event and the
//! holdings set: given the holding currently stored for the event's symbol
//! (if any), it decides whether to create, update, close, or skip. The
//! storage layer executes the returned action together with the transaction
//! insert in a single write transaction, so a recorded event and its holding
//! effect commit atomically.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{LedgerError, Result, ValidationError};
use crate::holdings::Holding;
use crate::portfolio::ledger::{self, PositionFigures, SellOutcome};
use crate::transactions::{NewTransaction, Transaction, TransactionType};

/// Initial state for a holding created by an acquisition event.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSeed {
    pub symbol: String,
    pub asset_type: String,
    pub figures: PositionFigures,
    pub last_price: Decimal,
    pub last_price_at: NaiveDateTime,
}

/// The persistence step a transaction event requires.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileAction {
    /// No holding exists; create one from the seed.
    Create(PositionSeed),
    /// Write back the updated holding row.
    Update(Holding),
    /// The position reached zero units; delete the row.
    Close { holding_id: String },
    /// Unrecognized transaction type: record the event, touch nothing.
    Skip { transaction_type: String },
}

/// What reconciliation did, reported back to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ReconcileOutcome {
    Created { holding: Holding },
    Updated { holding: Holding },
    Closed { symbol: String },
    Skipped { transaction_type: String },
}

/// A recorded transaction together with its holding effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedTransaction {
    pub transaction: Transaction,
    pub outcome: ReconcileOutcome,
}

/// Plans the holding mutation for one transaction event.
///
/// Acquisitions on an absent holding require an explicit asset class;
/// disposals on an absent holding are an error rather than a silent no-op.
pub fn reconcile(
    existing: Option<&Holding>,
    event: &NewTransaction,
    now: NaiveDateTime,
) -> Result<ReconcileAction> {
    let kind = match TransactionType::from_str(&event.transaction_type) {
        Ok(kind) => kind,
        Err(_) => {
            return Ok(ReconcileAction::Skip {
                transaction_type: event.transaction_type.clone(),
            })
        }
    };

    match existing {
        None if kind.is_acquisition() => {
            let asset_type = event
                .asset_type
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| ValidationError::MissingField("assetType".to_string()))?;
            let figures = ledger::open_position(event.quantity, event.price)?;
            Ok(ReconcileAction::Create(PositionSeed {
                symbol: event.symbol.clone(),
                asset_type: asset_type.to_string(),
                figures,
                last_price: event.price,
                last_price_at: now,
            }))
        }
        None => Err(LedgerError::PositionNotFound {
            symbol: event.symbol.clone(),
        }
        .into()),
        Some(holding) if kind.is_acquisition() => {
            let figures = ledger::apply_buy(&holding.figures(), event.quantity, event.price)?;
            Ok(ReconcileAction::Update(touched(
                holding, &figures, event.price, now,
            )))
        }
        Some(holding) => {
            match ledger::apply_sell(&holding.figures(), &holding.symbol, event.quantity)? {
                SellOutcome::Closed => Ok(ReconcileAction::Close {
                    holding_id: holding.id.clone(),
                }),
                SellOutcome::Reduced(figures) => Ok(ReconcileAction::Update(touched(
                    holding, &figures, event.price, now,
                ))),
            }
        }
    }
}

fn touched(
    holding: &Holding,
    figures: &PositionFigures,
    price: Decimal,
    now: NaiveDateTime,
) -> Holding {
    let mut updated = holding.clone();
    updated.set_figures(figures);
    updated.last_price = Some(price);
    updated.last_price_at = Some(now);
    updated.updated_at = now;
    updated
}
