use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use wealthtrack_core::portfolio::DashboardSummary;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_dashboard_summary(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state.portfolio_service.get_dashboard(&user_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard/summary", get(get_dashboard_summary))
}
