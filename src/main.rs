use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;

use smartwake::{
    config::AppConfig, db::connection, logging::init_tracing, routes::app, state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging);

    let db = connection::connect(&cfg.database).await?;

    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid host/port: {}", cfg.bind_addr()))?;

    let state = AppState::new(cfg, db);
    let app = app(state);

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            signal::ctrl_c().await.ok();
            tracing::info!("shutdown signal received");
        })
        .await?;
    Ok(())
}
