//! Entry point: load config, wire dependencies, and run the server.

use std::sync::Arc;

use eventhub::auth::TokenService;
use eventhub::config::{Config, StorageBackend};
use eventhub::db::{self, MemoryStore, PgStore};
use eventhub::{create_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let tokens = TokenService::new(config.jwt_secret.as_bytes());

    let state = match config.storage {
        StorageBackend::Postgres => {
            let pool = db::create_pool(&config.database_url).await?;
            db::run_migrations(&pool).await?;
            AppState::from_store(Arc::new(PgStore::new(pool)), tokens)?
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            AppState::from_store(Arc::new(MemoryStore::new()), tokens)?
        }
    };

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, storage = ?config.storage, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
