//! Database models for transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use rust_decimal::Decimal;
use wealthtrack_core::transactions::{NewTransaction, Transaction};

/// Database model for transactions. Decimal columns are stored as TEXT.
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub transaction_type: String,
    pub quantity: String,
    pub price: String,
    pub fees: String,
    pub executed_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Database model for recording a new transaction
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub transaction_type: String,
    pub quantity: String,
    pub price: String,
    pub fees: String,
    pub executed_at: NaiveDateTime,
}

// Conversion to domain models
impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            symbol: db.symbol,
            transaction_type: db.transaction_type,
            quantity: parse_decimal(&db.quantity, "transactions.quantity"),
            price: parse_decimal(&db.price, "transactions.price"),
            fees: parse_decimal(&db.fees, "transactions.fees"),
            executed_at: db.executed_at,
            created_at: db.created_at,
        }
    }
}

impl From<&Transaction> for TransactionDB {
    fn from(domain: &Transaction) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            symbol: domain.symbol.clone(),
            transaction_type: domain.transaction_type.clone(),
            quantity: domain.quantity.to_string(),
            price: domain.price.to_string(),
            fees: domain.fees.to_string(),
            executed_at: domain.executed_at,
            created_at: domain.created_at,
        }
    }
}

impl NewTransactionDB {
    pub fn from_domain(
        transaction_id: String,
        owner_id: String,
        domain: &NewTransaction,
        executed_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: transaction_id,
            user_id: owner_id,
            symbol: domain.symbol.clone(),
            transaction_type: domain.transaction_type.clone(),
            quantity: domain.quantity.to_string(),
            price: domain.price.to_string(),
            fees: domain.fees.unwrap_or(Decimal::ZERO).to_string(),
            executed_at,
        }
    }
}
