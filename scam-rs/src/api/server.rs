//! API Server - HTTP server for the analysis API

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::Analyzer;
use crate::api::handlers::{self, AppState};
use crate::config::ServerConfig;
use crate::error::{Result, ScamError};

pub struct ApiServer {
    state: Arc<AppState>,
    cors: CorsLayer,
    addr: String,
}

impl ApiServer {
    /// Create a new API server around a loaded analyzer
    pub fn new(analyzer: Analyzer, config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            state: Arc::new(AppState { analyzer }),
            cors: cors_layer(&config.cors_allowed_origins)?,
            addr: config.listen_addr.clone(),
        })
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/health", get(handlers::health))
            .route("/analyze", post(handlers::analyze))
            .route("/api/analyze", post(handlers::analyze))
            .route("/api/predict", post(handlers::predict))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(self.cors.clone())
    }

    /// Serve until ctrl-c
    pub async fn run(self) -> Result<()> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;

        info!("API server listening on http://{}", self.addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("API server stopped");
        Ok(())
    }
}

/// CORS for the configured origins; an empty list allows any origin
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| {
                    ScamError::Config(format!("Invalid CORS origin '{}': {}", origin, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
