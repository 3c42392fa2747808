use wealthtrack_core::holdings::{Holding, HoldingRepositoryTrait, NewHolding};
use wealthtrack_core::portfolio::ledger;
use wealthtrack_core::Result;

use super::model::{HoldingDB, NewHoldingDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::holdings;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct HoldingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        HoldingRepository { pool, writer }
    }
}

/// Shared lookup used by both this repository and transaction recording.
pub(crate) fn find_by_symbol(
    conn: &mut SqliteConnection,
    owner_id: &str,
    ticker: &str,
) -> Result<Option<Holding>> {
    let holding_db = holdings::table
        .filter(holdings::user_id.eq(owner_id))
        .filter(holdings::symbol.eq(ticker))
        .first::<HoldingDB>(conn)
        .optional()
        .map_err(StorageError::from)?;
    Ok(holding_db.map(Holding::from))
}

#[async_trait]
impl HoldingRepositoryTrait for HoldingRepository {
    fn load_holdings(&self, owner_id: &str) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let holdings_db = holdings::table
            .filter(holdings::user_id.eq(owner_id))
            .order(holdings::symbol.asc())
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(holdings_db.into_iter().map(Holding::from).collect())
    }

    fn get_holding(&self, owner_id: &str, holding_id: &str) -> Result<Holding> {
        let mut conn = get_connection(&self.pool)?;
        let holding_db = holdings::table
            .filter(holdings::user_id.eq(owner_id))
            .filter(holdings::id.eq(holding_id))
            .first::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Holding::from(holding_db))
    }

    fn find_holding_by_symbol(&self, owner_id: &str, ticker: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        find_by_symbol(&mut conn, owner_id, ticker)
    }

    async fn upsert_position(&self, owner_id: String, new_holding: NewHolding) -> Result<Holding> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Holding> {
                let now = Utc::now().naive_utc();
                match find_by_symbol(conn, &owner_id, &new_holding.symbol)? {
                    Some(mut existing) => {
                        let figures = ledger::absorb_position(
                            &existing.figures(),
                            new_holding.units,
                            new_holding.avg_buy_price,
                        )?;
                        existing.set_figures(&figures);
                        existing.last_price = Some(new_holding.avg_buy_price);
                        existing.last_price_at = Some(now);
                        existing.updated_at = now;
                        let holding_db = HoldingDB::from(&existing);
                        let result_db = diesel::update(holdings::table.find(&existing.id))
                            .set(&holding_db)
                            .returning(HoldingDB::as_returning())
                            .get_result(conn)
                            .map_err(StorageError::from)?;
                        Ok(Holding::from(result_db))
                    }
                    None => {
                        let figures =
                            ledger::open_position(new_holding.units, new_holding.avg_buy_price)?;
                        let new_holding_db = NewHoldingDB {
                            id: Uuid::new_v4().to_string(),
                            user_id: owner_id,
                            asset_type: new_holding.asset_type,
                            symbol: new_holding.symbol,
                            units: figures.units.to_string(),
                            avg_buy_price: figures.avg_buy_price.to_string(),
                            cost_basis: figures.cost_basis.to_string(),
                            current_value: figures.current_value.to_string(),
                            last_price: Some(new_holding.avg_buy_price.to_string()),
                            last_price_at: Some(now),
                        };
                        let result_db = diesel::insert_into(holdings::table)
                            .values(&new_holding_db)
                            .returning(HoldingDB::as_returning())
                            .get_result(conn)
                            .map_err(StorageError::from)?;
                        Ok(Holding::from(result_db))
                    }
                }
            })
            .await
    }

    async fn update_holding(&self, holding: Holding) -> Result<Holding> {
        let mut holding = holding;
        holding.updated_at = Utc::now().naive_utc();
        let holding_db = HoldingDB::from(&holding);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Holding> {
                let result_db = diesel::update(holdings::table.find(holding_db.id.clone()))
                    .set(&holding_db)
                    .returning(HoldingDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Holding::from(result_db))
            })
            .await
    }

    async fn delete_holding(&self, owner_id: String, holding_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    holdings::table
                        .filter(holdings::user_id.eq(owner_id))
                        .filter(holdings::id.eq(holding_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
