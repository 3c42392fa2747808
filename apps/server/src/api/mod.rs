//! API routers, one module per resource.

mod auth;
mod dashboard;
mod goals;
mod health;
mod investments;
mod portfolio;
mod profile;
mod transactions;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::main_lib::AppState;

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = config.cors_origins.trim();
    let allow_origin = if origins == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok()),
        )
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(profile::router())
        .merge(goals::router())
        .merge(investments::router())
        .merge(transactions::router())
        .merge(portfolio::router())
        .merge(dashboard::router());

    Router::new()
        .nest("/api/v1", api)
        .merge(health::router())
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
