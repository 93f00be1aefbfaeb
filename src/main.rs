use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use filedepot::auth::SessionManager;
use filedepot::file::BlobStore;
use filedepot::web::{create_router, AppState};
use filedepot::{Config, Database};

#[tokio::main]
async fn main() -> filedepot::Result<()> {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = filedepot::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        filedepot::logging::init_console_only(&config.logging.level);
    }

    info!("filedepot - personal file-storage service");

    let db = Database::open(&config.database.path).await?;
    let blobs = BlobStore::new(&config.storage.root);
    let sessions = Arc::new(SessionManager::with_ttl(Duration::from_secs(
        config.session.ttl_secs,
    )));

    let state = Arc::new(AppState::new(db, blobs, sessions));
    let router = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .await
        .map_err(filedepot::DepotError::Io)?;

    Ok(())
}
