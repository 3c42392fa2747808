use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use wealthtrack_core::users::{User, UserUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_profile(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&user_id)?;
    Ok(Json(user))
}

async fn update_profile(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<UserUpdate>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.update_profile(&user_id, patch).await?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profile/me", get(get_profile).patch(update_profile))
}
