use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::AuthManager;
use crate::config::Config;
use wealthtrack_core::{
    goals::{GoalService, GoalServiceTrait},
    holdings::{HoldingsService, HoldingsServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use wealthtrack_storage_sqlite::{
    db, goals::GoalRepository, holdings::HoldingRepository, transactions::TransactionRepository,
    users::UserRepository,
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub holdings_service: Arc<dyn HoldingsServiceTrait + Send + Sync>,
    pub transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("WT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service = Arc::new(UserService::new(user_repository));

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repository.clone()));

    let holding_repository = Arc::new(HoldingRepository::new(pool.clone(), writer.clone()));
    let holdings_service = Arc::new(HoldingsService::new(holding_repository.clone()));

    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let transaction_service = Arc::new(TransactionService::new(
        transaction_repository,
        holding_repository.clone(),
    ));

    let portfolio_service = Arc::new(PortfolioService::new(holding_repository, goal_repository));

    let auth = Arc::new(AuthManager::new(config));

    Ok(Arc::new(AppState {
        user_service,
        goal_service,
        holdings_service,
        transaction_service,
        portfolio_service,
        auth,
        db_path,
    }))
}
