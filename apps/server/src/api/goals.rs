use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use wealthtrack_core::goals::{Goal, GoalUpdate, NewGoal};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn list_goals(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals(&user_id)?;
    Ok(Json(goals))
}

async fn create_goal(
    AuthUser(user_id): AuthUser,
    State(state): State<Arc<AppState>>,
    Json(new_goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = state.goal_service.create_goal(&user_id, new_goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn get_goal(
    AuthUser(user_id): AuthUser,
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.get_goal(&user_id, &goal_id)?;
    Ok(Json(goal))
}

async fn update_goal(
    AuthUser(user_id): AuthUser,
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let goal = state
        .goal_service
        .update_goal(&user_id, &goal_id, patch)
        .await?;
    Ok(Json(goal))
}

async fn delete_goal(
    AuthUser(user_id): AuthUser,
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let deleted = state.goal_service.delete_goal(&user_id, &goal_id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Goal not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
}
