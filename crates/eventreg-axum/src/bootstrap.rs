//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where infrastructure is wired together for
//! the web adapter: the database pool, the repositories and the service.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use eventreg_core::EventRegistrationService;
use eventreg_db::{CoreFactory, setup_database};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins only.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Use a specific database file.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set CORS to allow specific origins. An empty list keeps `AllowAll`.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

/// Application context for the Axum adapter.
///
/// Holds the injected service; handlers reach it through `AppState`.
pub struct AxumContext {
    /// The event registration service.
    pub service: Arc<EventRegistrationService>,
}

impl AxumContext {
    /// Wrap an already-built service.
    pub fn new(service: EventRegistrationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Bootstrap the Axum context: open the database and build the service.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "eventreg.paths",
        database_path = %config.database_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::new(CoreFactory::build_service(pool)))
}

/// Start the Axum server and serve until interrupted.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(cors = ?config.cors, "eventreg listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("eventreg stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
