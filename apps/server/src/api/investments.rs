use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use wealthtrack_core::holdings::{Holding, HoldingUpdate, NewHolding};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn list_investments(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Holding>>> {
    let holdings = state.holdings_service.get_holdings(&user_id)?;
    Ok(Json(holdings))
}

async fn create_investment(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
    Json(new_holding): Json<NewHolding>,
) -> ApiResult<(StatusCode, Json<Holding>)> {
    let holding = state
        .holdings_service
        .create_holding(&user_id, new_holding)
        .await?;
    Ok((StatusCode::CREATED, Json(holding)))
}

async fn get_investment(
    AuthUser(user_id): AuthUser,
    Path(holding_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Holding>> {
    let holding = state.holdings_service.get_holding(&user_id, &holding_id)?;
    Ok(Json(holding))
}

/// Manual correction path: writes fields verbatim, no reconciliation.
async fn update_investment(
    AuthUser(user_id): AuthUser,
    Path(holding_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<HoldingUpdate>,
) -> ApiResult<Json<Holding>> {
    let holding = state
        .holdings_service
        .update_holding(&user_id, &holding_id, patch)
        .await?;
    Ok(Json(holding))
}

async fn delete_investment(
    AuthUser(user_id): AuthUser,
    Path(holding_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let deleted = state
        .holdings_service
        .delete_holding(&user_id, &holding_id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Investment not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(list_investments).post(create_investment))
        .route(
            "/investments/{id}",
            get(get_investment)
                .put(update_investment)
                .delete(delete_investment),
        )
}
