use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::holdings::HoldingRepositoryTrait;
use crate::portfolio::reconciler::{reconcile, ReconcileOutcome, RecordedTransaction};
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};

/// Service for recording and managing transactions.
///
/// Recording triggers holding reconciliation; edits and deletes do not
/// touch holdings.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
}

impl TransactionService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            holding_repository,
        }
    }

    fn validate(new_transaction: &NewTransaction) -> Result<()> {
        if new_transaction.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if new_transaction.quantity <= Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("quantity must be positive".to_string()).into(),
            );
        }
        if new_transaction.price < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("price must not be negative".to_string()).into(),
            );
        }
        if new_transaction.fees.is_some_and(|fees| fees < Decimal::ZERO) {
            return Err(
                ValidationError::InvalidInput("fees must not be negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.transaction_repository.load_transactions(user_id)
    }

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repository
            .get_transaction(user_id, transaction_id)
    }

    async fn record_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<RecordedTransaction> {
        Self::validate(&new_transaction)?;

        // Pre-flight the reconciliation plan against the current holding so
        // ledger failures surface with their typed error. The repository
        // re-plans inside the write transaction, which remains the
        // authoritative, race-free check.
        let existing = self
            .holding_repository
            .find_holding_by_symbol(user_id, &new_transaction.symbol)?;
        reconcile(
            existing.as_ref(),
            &new_transaction,
            Utc::now().naive_utc(),
        )?;

        debug!(
            "Recording {} {} x {} for user {}",
            new_transaction.transaction_type,
            new_transaction.quantity,
            new_transaction.symbol,
            user_id
        );
        let recorded = self
            .transaction_repository
            .record_reconciled(user_id.to_string(), new_transaction)
            .await?;
        if let ReconcileOutcome::Skipped { transaction_type } = &recorded.outcome {
            warn!(
                "Transaction {} recorded with unrecognized type '{}'; holdings untouched",
                recorded.transaction.id, transaction_type
            );
        }
        Ok(recorded)
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        patch: TransactionUpdate,
    ) -> Result<Transaction> {
        let mut transaction = self
            .transaction_repository
            .get_transaction(user_id, transaction_id)?;
        patch.apply_to(&mut transaction);
        self.transaction_repository
            .update_transaction(transaction)
            .await
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize> {
        self.transaction_repository
            .delete_transaction(user_id.to_string(), transaction_id.to_string())
            .await
    }
}
