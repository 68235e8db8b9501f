use std::sync::Arc;

use axum::Router;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    routes::app,
    state::AppState,
};

/// App state over a private in-memory SQLite database with the schema synced.
pub async fn test_state() -> Arc<AppState> {
    let cfg = AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_idle: 1,
        },
        ..AppConfig::default()
    };
    let db = connection::connect(&cfg.database)
        .await
        .expect("connect in-memory sqlite");
    AppState::new(cfg, db)
}

pub async fn test_app() -> Router {
    app(test_state().await)
}
