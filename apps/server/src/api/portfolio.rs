use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use wealthtrack_core::portfolio::{AllocationBreakdown, PortfolioSummary};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_summary(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.portfolio_service.get_summary(&user_id)?;
    Ok(Json(summary))
}

async fn get_allocation(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AllocationBreakdown>> {
    let allocation = state.portfolio_service.get_allocation(&user_id)?;
    Ok(Json(allocation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/summary", get(get_summary))
        .route("/portfolio/allocation", get(get_allocation))
}
