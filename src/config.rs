// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Topics per level unless overridden via LEVEL_SIZE.
/// Navigation crosses level boundaries at this position.
pub const DEFAULT_LEVEL_SIZE: i64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub level_size: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let level_size = env::var("LEVEL_SIZE")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|n| *n >= 1)
            .unwrap_or(DEFAULT_LEVEL_SIZE);

        Self {
            database_url,
            rust_log,
            level_size,
        }
    }
}
