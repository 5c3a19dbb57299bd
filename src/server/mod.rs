//! HTTP API for driving the crawl engine from a polling client
//!
//! # Endpoints
//!
//! - `POST /start` - form `text`, `num_letters`; starts a new session
//! - `GET /fetch_suggestions` - query `text`, `num_letters`; advances one combination
//! - `POST /pause`, `POST /resume`, `POST /cancel` - session control
//! - `GET /status` - current snapshot
//! - `GET /download` - CSV export of the accumulated results

mod handlers;

pub use handlers::{ApiError, CrawlParams};

use crate::config::ExportConfig;
use crate::crawler::CrawlEngine;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<CrawlEngine>,
    pub export: Arc<ExportConfig>,
}

impl AppState {
    pub fn new(engine: Arc<CrawlEngine>, export: ExportConfig) -> Self {
        Self {
            engine,
            export: Arc::new(export),
        }
    }
}

/// Builds the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/start", post(handlers::start))
        .route("/fetch_suggestions", get(handlers::fetch_suggestions))
        .route("/pause", post(handlers::pause))
        .route("/resume", post(handlers::resume))
        .route("/cancel", post(handlers::cancel))
        .route("/status", get(handlers::status))
        .route("/download", get(handlers::download))
        .with_state(state)
}

/// Serves the API on an already bound listener until the future is dropped
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router(state)).await
}
