//! Gateway service module.
//!
//! This module provides the transaction gateway echo service: the HTTP
//! endpoint the client half of this crate talks to, with the routing,
//! request handling, and response formatting for GET, POST, and
//! OPTIONS on the base path.

pub mod handlers;
pub mod response;
pub mod state;


use crate::config::Config;
use crate::error::{Result, TxGateError};
use axum::{routing::get, Router};
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the gateway router with all three methods on the base path.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::fetch)
                .post(handlers::submit)
                .options(handlers::preflight),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the gateway service.
pub async fn serve(config: &Config) -> Result<()> {
    let state = Arc::new(AppState::new());
    let router = create_router(state);

    let addr = SocketAddr::new(
        config
            .server
            .bind
            .parse()
            .map_err(|e| TxGateError::config(format!("Invalid bind address: {}", e)))?,
        config.server.port,
    );

    info!("Starting gateway on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
