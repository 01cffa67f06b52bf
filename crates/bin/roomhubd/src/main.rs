//! # roomhubd — roomhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use roomhub_adapter_http_axum::state::AppState;
use roomhub_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteAmenityRepository, SqliteCategoryRepository,
    SqliteOwnerRepository, SqliteRoomRepository,
};
use roomhub_app::services::amenity_service::AmenityService;
use roomhub_app::services::category_service::CategoryService;
use roomhub_app::services::owner_service::OwnerService;
use roomhub_app::services::room_service::RoomService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let category_service = CategoryService::new(SqliteCategoryRepository::new(pool.clone()));
    let room_service = RoomService::new(
        SqliteRoomRepository::new(pool.clone()),
        SqliteOwnerRepository::new(pool.clone()),
        SqliteAmenityRepository::new(pool.clone()),
    );
    let amenity_service = AmenityService::new(SqliteAmenityRepository::new(pool.clone()));
    let owner_service = OwnerService::new(SqliteOwnerRepository::new(pool));

    // HTTP
    let state = AppState::new(
        category_service,
        room_service,
        amenity_service,
        owner_service,
    );
    let app = roomhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "roomhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("roomhubd stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
