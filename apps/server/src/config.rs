//! Server configuration.
//!
//! Built once at startup from the environment and passed by reference;
//! there is no process-wide cached settings object.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// Secret used to sign access and refresh tokens.
    pub secret_key: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,
    /// Comma-separated list of allowed CORS origins, or "*".
    pub cors_origins: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: env_or("WT_LISTEN_ADDR", "127.0.0.1:8080"),
            db_path: env_or("WT_DB_PATH", "wealthtrack.db"),
            secret_key: env_or("WT_SECRET_KEY", "dev-secret-key-change-in-production"),
            access_token_minutes: env_parse_or("WT_ACCESS_TOKEN_MINUTES", 30),
            refresh_token_days: env_parse_or("WT_REFRESH_TOKEN_DAYS", 7),
            cors_origins: env_or("WT_CORS_ORIGINS", "http://localhost:5173"),
        }
    }
}
