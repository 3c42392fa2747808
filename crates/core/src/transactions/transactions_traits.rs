use crate::errors::Result;
use crate::portfolio::reconciler::RecordedTransaction;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use async_trait::async_trait;

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Most recent first.
    fn load_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;
    /// Inserts the transaction row and applies its reconciliation plan to
    /// the holdings table in ONE write transaction. A ledger/validation
    /// failure aborts the whole job: nothing is persisted.
    async fn record_reconciled(
        &self,
        user_id: String,
        new_transaction: NewTransaction,
    ) -> Result<RecordedTransaction>;
    async fn update_transaction(&self, transaction: Transaction) -> Result<Transaction>;
    async fn delete_transaction(&self, user_id: String, transaction_id: String) -> Result<usize>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;
    async fn record_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<RecordedTransaction>;
    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        patch: TransactionUpdate,
    ) -> Result<Transaction>;
    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize>;
}
