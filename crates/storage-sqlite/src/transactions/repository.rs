use wealthtrack_core::portfolio::reconciler::{
    reconcile, ReconcileAction, ReconcileOutcome, RecordedTransaction,
};
use wealthtrack_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};
use wealthtrack_core::Result;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::holdings::{find_by_symbol, HoldingDB, NewHoldingDB};
use crate::schema::{holdings, transactions};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn load_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let transactions_db = transactions::table
            .filter(transactions::user_id.eq(owner_id))
            .order(transactions::executed_at.desc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(transactions_db.into_iter().map(Transaction::from).collect())
    }

    fn get_transaction(&self, owner_id: &str, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let transaction_db = transactions::table
            .filter(transactions::user_id.eq(owner_id))
            .filter(transactions::id.eq(transaction_id))
            .first::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Transaction::from(transaction_db))
    }

    /// Inserts the transaction row and its holding effect in one immediate
    /// transaction on the writer connection. The reconciliation plan comes
    /// from the core reconciler; a ledger or validation error rolls
    /// everything back.
    async fn record_reconciled(
        &self,
        owner_id: String,
        new_transaction: NewTransaction,
    ) -> Result<RecordedTransaction> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<RecordedTransaction> {
                    let now = Utc::now().naive_utc();
                    let existing = find_by_symbol(conn, &owner_id, &new_transaction.symbol)?;
                    let action = reconcile(existing.as_ref(), &new_transaction, now)?;

                    let outcome = match action {
                        ReconcileAction::Create(seed) => {
                            let new_holding_db = NewHoldingDB::from_seed(
                                Uuid::new_v4().to_string(),
                                owner_id.clone(),
                                &seed,
                            );
                            let holding_db = diesel::insert_into(holdings::table)
                                .values(&new_holding_db)
                                .returning(HoldingDB::as_returning())
                                .get_result::<HoldingDB>(conn)
                                .map_err(StorageError::from)?;
                            ReconcileOutcome::Created {
                                holding: holding_db.into(),
                            }
                        }
                        ReconcileAction::Update(updated) => {
                            let holding_db = HoldingDB::from(&updated);
                            let holding_db = diesel::update(holdings::table.find(&updated.id))
                                .set(&holding_db)
                                .returning(HoldingDB::as_returning())
                                .get_result::<HoldingDB>(conn)
                                .map_err(StorageError::from)?;
                            ReconcileOutcome::Updated {
                                holding: holding_db.into(),
                            }
                        }
                        ReconcileAction::Close { holding_id } => {
                            diesel::delete(holdings::table.find(&holding_id))
                                .execute(conn)
                                .map_err(StorageError::from)?;
                            ReconcileOutcome::Closed {
                                symbol: new_transaction.symbol.clone(),
                            }
                        }
                        ReconcileAction::Skip { transaction_type } => {
                            ReconcileOutcome::Skipped { transaction_type }
                        }
                    };

                    let executed_at = new_transaction.executed_at.unwrap_or(now);
                    let new_transaction_db = NewTransactionDB::from_domain(
                        Uuid::new_v4().to_string(),
                        owner_id,
                        &new_transaction,
                        executed_at,
                    );
                    let transaction_db = diesel::insert_into(transactions::table)
                        .values(&new_transaction_db)
                        .returning(TransactionDB::as_returning())
                        .get_result::<TransactionDB>(conn)
                        .map_err(StorageError::from)?;

                    Ok(RecordedTransaction {
                        transaction: transaction_db.into(),
                        outcome,
                    })
                },
            )
            .await
    }

    async fn update_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let transaction_db = TransactionDB::from(&transaction);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let result_db =
                    diesel::update(transactions::table.find(transaction_db.id.clone()))
                        .set(&transaction_db)
                        .returning(TransactionDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                Ok(Transaction::from(result_db))
            })
            .await
    }

    async fn delete_transaction(&self, owner_id: String, transaction_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    transactions::table
                        .filter(transactions::user_id.eq(owner_id))
                        .filter(transactions::id.eq(transaction_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
