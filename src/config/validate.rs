use anyhow::{Result, bail};

use crate::{db::connection::DbBackendKind, routes::alert::alert_header_name};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    let application_name = &cfg.general.application_name;
    if application_name.trim().is_empty() {
        errors.push("general.application_name must not be empty".to_string());
    } else if alert_header_name(application_name, "alert").is_err() {
        errors.push(format!(
            "general.application_name ({application_name:?}) must be usable in an HTTP header name"
        ));
    }

    let database = &cfg.database;
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    } else if DbBackendKind::from_url(&database.url).is_none() {
        errors.push("database.url must start with postgres://, postgresql:// or sqlite:".to_string());
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
