//! Transaction domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transactions::transactions_constants::*;

/// Canonical transaction types understood by the holding reconciler.
///
/// Acquisitions (buy, contribution) and disposals (sell, withdrawal) share
/// the same ledger arithmetic within each pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
    Contribution,
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
            TransactionType::Contribution => TRANSACTION_TYPE_CONTRIBUTION,
            TransactionType::Withdrawal => TRANSACTION_TYPE_WITHDRAWAL,
        }
    }

    /// Buy-side events add units at a price.
    pub fn is_acquisition(&self) -> bool {
        matches!(self, TransactionType::Buy | TransactionType::Contribution)
    }

    /// Sell-side events remove units proportionally.
    pub fn is_disposal(&self) -> bool {
        matches!(self, TransactionType::Sell | TransactionType::Withdrawal)
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            TRANSACTION_TYPE_BUY => Ok(TransactionType::Buy),
            TRANSACTION_TYPE_SELL => Ok(TransactionType::Sell),
            TRANSACTION_TYPE_CONTRIBUTION => Ok(TransactionType::Contribution),
            TRANSACTION_TYPE_WITHDRAWAL => Ok(TransactionType::Withdrawal),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only record of a buy/sell/contribution/withdrawal event.
///
/// Updating or deleting a record does NOT reconcile holdings retroactively;
/// the manual holding update endpoint is the correction path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    /// Stored as the raw string so history can carry non-canonical types.
    pub transaction_type: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub fees: Decimal,
    pub executed_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// The canonical type of this record, if it has one.
    pub fn kind(&self) -> Option<TransactionType> {
        TransactionType::from_str(&self.transaction_type).ok()
    }
}

/// Input model for recording a new transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub symbol: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub fees: Option<Decimal>,
    /// Asset class for the holding this event may create. Required when no
    /// holding exists for the symbol yet; ignored otherwise.
    #[serde(default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub executed_at: Option<NaiveDateTime>,
}

/// Explicit patch for transaction edits. Every updatable field is named;
/// `None` leaves the current value untouched. Edits never re-reconcile
/// holdings.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub fees: Option<Decimal>,
    pub executed_at: Option<NaiveDateTime>,
}

impl TransactionUpdate {
    /// Merges this patch into an existing transaction.
    pub fn apply_to(&self, transaction: &mut Transaction) {
        if let Some(symbol) = &self.symbol {
            transaction.symbol = symbol.clone();
        }
        if let Some(transaction_type) = &self.transaction_type {
            transaction.transaction_type = transaction_type.clone();
        }
        if let Some(quantity) = self.quantity {
            transaction.quantity = quantity;
        }
        if let Some(price) = self.price {
            transaction.price = price;
        }
        if let Some(fees) = self.fees {
            transaction.fees = fees;
        }
        if let Some(executed_at) = self.executed_at {
            transaction.executed_at = executed_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_types_round_trip() {
        for raw in ["buy", "sell", "contribution", "withdrawal"] {
            let kind = TransactionType::from_str(raw).unwrap();
            assert_eq!(kind.as_str(), raw);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            TransactionType::from_str("BUY").unwrap(),
            TransactionType::Buy
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(TransactionType::from_str("dividend").is_err());
    }

    #[test]
    fn acquisition_and_disposal_classification() {
        assert!(TransactionType::Buy.is_acquisition());
        assert!(TransactionType::Contribution.is_acquisition());
        assert!(TransactionType::Sell.is_disposal());
        assert!(TransactionType::Withdrawal.is_disposal());
        assert!(!TransactionType::Buy.is_disposal());
        assert!(!TransactionType::Withdrawal.is_acquisition());
    }
}
