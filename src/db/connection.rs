use std::time::Duration;

use anyhow::{Result, bail};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

const CONNECT_TIMEOUT_SECS: u64 = 5;
const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbBackendKind {
    Postgres,
    Sqlite,
}

impl DbBackendKind {
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.trim().to_ascii_lowercase();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Strips the password from a connection URL so it can be logged.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.split_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}

pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let Some(backend) = DbBackendKind::from_url(&cfg.url) else {
        bail!("unsupported database url: {}", redact_url(&cfg.url));
    };

    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .sqlx_logging(false);

    info!(
        backend = backend.as_str(),
        url = %redact_url(&cfg.url),
        "connecting to database"
    );
    let db = Database::connect(options).await?;

    if backend == DbBackendKind::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
    }

    sync_schema(&db).await?;
    Ok(db)
}

pub async fn sync_schema(db: &DatabaseConnection) -> Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("smartwake::db::entities::*")
        .sync(db)
        .await?;
    Ok(())
}
