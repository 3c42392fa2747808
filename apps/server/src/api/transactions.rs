use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use wealthtrack_core::transactions::{NewTransaction, Transaction, TransactionUpdate};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn list_transactions(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.transaction_service.get_transactions(&user_id)?;
    Ok(Json(transactions))
}

/// Records the event and reconciles the matching holding atomically.
async fn record_transaction(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
    Json(new_transaction): Json<NewTransaction>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let recorded = state
        .transaction_service
        .record_transaction(&user_id, new_transaction)
        .await?;
    Ok((StatusCode::CREATED, Json(recorded.transaction)))
}

async fn get_transaction(
    AuthUser(user_id): AuthUser,
    Path(transaction_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .transaction_service
        .get_transaction(&user_id, &transaction_id)?;
    Ok(Json(transaction))
}

/// Edits the record only; holdings are never reconciled retroactively.
async fn update_transaction(
    AuthUser(user_id): AuthUser,
    Path(transaction_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<TransactionUpdate>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .transaction_service
        .update_transaction(&user_id, &transaction_id, patch)
        .await?;
    Ok(Json(transaction))
}

async fn delete_transaction(
    AuthUser(user_id): AuthUser,
    Path(transaction_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let deleted = state
        .transaction_service
        .delete_transaction(&user_id, &transaction_id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Transaction not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(record_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}
