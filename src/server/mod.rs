// HTTP server - exposes the log endpoints and the analysis pipeline

mod handlers;

pub use handlers::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::logs::LogStore;

/// Uploads are capped well below anything the inference endpoint could
/// digest anyway; matches the documented 15 MB request limit.
const MAX_BODY_BYTES: usize = 15 * 1024 * 1024;

/// Shared application state: configuration, the outbound Gemini client and
/// the log directory reader. Immutable after construction; handlers share
/// it through an `Arc`.
pub struct AppServer {
    config: Config,
    gemini: GeminiClient,
    log_store: LogStore,
}

impl AppServer {
    pub fn new(config: Config) -> Result<Self> {
        let gemini = GeminiClient::new(&config)?;
        let log_store = LogStore::new(config.log_dir.clone());

        Ok(Self {
            config,
            gemini,
            log_store,
        })
    }

    pub fn gemini(&self) -> &GeminiClient {
        &self.gemini
    }

    pub fn log_store(&self) -> &LogStore {
        &self.log_store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start the HTTP server.
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.config.bind_address))?;

        self.log_store
            .bootstrap()
            .context("Failed to create log directory")?;

        let app_state = Arc::new(self);

        let app = create_router(app_state)
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        tracing::info!("TraceToFix backend running on {addr}");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
