//! Database models for holdings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{parse_decimal, parse_optional_decimal};
use wealthtrack_core::holdings::Holding;
use wealthtrack_core::portfolio::PositionSeed;

/// Database model for holdings. Decimal columns are stored as TEXT.
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct HoldingDB {
    pub id: String,
    pub user_id: String,
    pub asset_type: String,
    pub symbol: String,
    pub units: String,
    pub avg_buy_price: String,
    pub cost_basis: String,
    pub current_value: String,
    pub last_price: Option<String>,
    pub last_price_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new holding
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[serde(rename_all = "camelCase")]
pub struct NewHoldingDB {
    pub id: String,
    pub user_id: String,
    pub asset_type: String,
    pub symbol: String,
    pub units: String,
    pub avg_buy_price: String,
    pub cost_basis: String,
    pub current_value: String,
    pub last_price: Option<String>,
    pub last_price_at: Option<NaiveDateTime>,
}

// Conversion to domain models
impl From<HoldingDB> for Holding {
    fn from(db: HoldingDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            asset_type: db.asset_type,
            symbol: db.symbol,
            units: parse_decimal(&db.units, "holdings.units"),
            avg_buy_price: parse_decimal(&db.avg_buy_price, "holdings.avg_buy_price"),
            cost_basis: parse_decimal(&db.cost_basis, "holdings.cost_basis"),
            current_value: parse_decimal(&db.current_value, "holdings.current_value"),
            last_price: parse_optional_decimal(db.last_price.as_deref(), "holdings.last_price"),
            last_price_at: db.last_price_at,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<&Holding> for HoldingDB {
    fn from(domain: &Holding) -> Self {
        Self {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            asset_type: domain.asset_type.clone(),
            symbol: domain.symbol.clone(),
            units: domain.units.to_string(),
            avg_buy_price: domain.avg_buy_price.to_string(),
            cost_basis: domain.cost_basis.to_string(),
            current_value: domain.current_value.to_string(),
            last_price: domain.last_price.map(|p| p.to_string()),
            last_price_at: domain.last_price_at,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl NewHoldingDB {
    /// Builds the row for a holding created by transaction reconciliation.
    pub fn from_seed(holding_id: String, owner_id: String, seed: &PositionSeed) -> Self {
        Self {
            id: holding_id,
            user_id: owner_id,
            asset_type: seed.asset_type.clone(),
            symbol: seed.symbol.clone(),
            units: seed.figures.units.to_string(),
            avg_buy_price: seed.figures.avg_buy_price.to_string(),
            cost_basis: seed.figures.cost_basis.to_string(),
            current_value: seed.figures.current_value.to_string(),
            last_price: Some(seed.last_price.to_string()),
            last_price_at: Some(seed.last_price_at),
        }
    }
}
