//! Games Store - Reservation Service
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌─────────────┐    ┌──────────┐
//! │  Config  │───▶│ Gateway  │───▶│ Reservation │───▶│  Store   │
//! │  (YAML)  │    │  (axum)  │    │  Endpoint   │    │ (PG/mem) │
//! └──────────┘    └──────────┘    └─────────────┘    └──────────┘
//! ```
//!
//! Usage: `games_store [--env dev] [--port 8080]`

use std::sync::Arc;

use anyhow::Context;
use games_store::config::AppConfig;
use games_store::db::Database;
use games_store::gateway;
use games_store::reservation::{MemoryReservationStore, PgReservationStore, ReservationStore};
use games_store::AppState;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn ReservationStore>> {
    match &config.database.postgres_url {
        Some(url) => {
            let db = Database::connect(url, config.database.max_connections)
                .await
                .context("Failed to connect to PostgreSQL")?;
            db.init_schema()
                .await
                .context("Failed to initialize reservation schema")?;
            Ok(Arc::new(PgReservationStore::new(Arc::new(db))))
        }
        None => {
            tracing::warn!("No postgres_url configured, reservations are kept in memory");
            Ok(Arc::new(MemoryReservationStore::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = games_store::logging::init_logging(&app_config);

    tracing::info!(
        git = env!("GIT_HASH"),
        "Starting Games Store reservation service in {} mode",
        env
    );

    let store = open_store(&app_config).await?;
    tracing::info!("Reservation store: {}", store.name());

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    let state = Arc::new(AppState::new(store));

    gateway::run_server(&app_config.gateway.host, port, state)
        .await
        .inspect_err(|e| tracing::error!(error.cause_chain = ?e, "Gateway stopped with error"))
}
