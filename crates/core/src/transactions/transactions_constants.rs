//! Canonical transaction type strings.
//!
//! The transaction record keeps the type as a free string so history can
//! hold events this version does not understand; reconciliation only acts
//! on the canonical set below.

pub const TRANSACTION_TYPE_BUY: &str = "buy";
pub const TRANSACTION_TYPE_SELL: &str = "sell";
pub const TRANSACTION_TYPE_CONTRIBUTION: &str = "contribution";
pub const TRANSACTION_TYPE_WITHDRAWAL: &str = "withdrawal";
