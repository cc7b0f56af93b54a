//! Application Startup
//!
//! Explicit wiring of repository, service and router, and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{ShipService, ShipServiceImpl};
use crate::config::{Settings, StorageBackend};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryShipRepository, PgShipRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ships: Arc<dyn ShipService>,
}

impl AppState {
    pub fn new(ships: Arc<dyn ShipService>) -> Self {
        Self { ships }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryShipRepository::new());
        Self::new(Arc::new(ShipServiceImpl::new(repo)))
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = build_state(&settings).await?;

        // Build router with middleware
        let router = routes::create_router(state, &settings.api.base_path).layer(
            ServiceBuilder::new()
                .layer(logging::create_trace_layer())
                .layer(cors::create_cors_layer(&settings.cors)),
        );

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr())
            .await
            .with_context(|| format!("Failed to bind {}", settings.server_addr()))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn build_state(settings: &Settings) -> Result<AppState> {
    match settings.storage.backend {
        StorageBackend::Postgres => {
            let url = settings
                .database
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;

            let pool = database::create_pool(&settings.database, url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!("Database connection pool created");

            if settings.database.run_migrations {
                database::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            let repo = Arc::new(PgShipRepository::new(pool));
            Ok(AppState::new(Arc::new(ShipServiceImpl::new(repo))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory ship storage; data is lost on restart");
            Ok(AppState::in_memory())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
