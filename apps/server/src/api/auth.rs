use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use wealthtrack_core::users::{NewUser, User};

use crate::auth::{TokenPair, TOKEN_TYPE_REFRESH};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    risk_profile: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest {
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForgotPasswordRequest {
    #[allow(dead_code)]
    email: String,
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let password_hash = state.auth.hash_password(&request.password)?;
    let user = state
        .user_service
        .register(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
            risk_profile: request.risk_profile,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<TokenPair>> {
    let user = state
        .user_service
        .get_user_by_email(&request.email)?
        .filter(|user| state.auth.verify_password(&request.password, &user.password_hash))
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;
    Ok(Json(state.auth.issue_tokens(&user.id)?))
}

async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RefreshRequest>,
) -> ApiResult<Json<TokenPair>> {
    let user_id = state
        .auth
        .verify_token(&request.refresh_token, TOKEN_TYPE_REFRESH)
        .ok_or_else(|| ApiError::unauthorized("Invalid or expired refresh token"))?;
    // The account may have been deleted since the token was issued.
    let user = state.user_service.get_user(&user_id).map_err(|_| {
        ApiError::unauthorized("User no longer exists")
    })?;
    Ok(Json(state.auth.issue_tokens(&user.id)?))
}

async fn forgot_password(Json(_request): Json<ForgotPasswordRequest>) -> Json<Value> {
    // No mail delivery; keep the response indistinguishable for unknown emails.
    Json(json!({ "message": "If the email exists, a reset link has been sent." }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/forgot-password", post(forgot_password))
}
