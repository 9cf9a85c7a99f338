//! HTTP front end of the channel thumbnails proxy.
//!
//! `GET /thumbnails` validates the query, calls the YouTube search API through
//! `UpstreamClient`, and answers with the mapped payload. `OPTIONS
//! /thumbnails` is answered as a CORS preflight without touching upstream.

use std::{future::Future, sync::Arc};

use anyhow::Context;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use thumbnails_core::YouTubeSearchClient;
use tokio::{net::TcpListener, signal};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod routes;
pub mod upstream;

use config::Config;
use routes::{preflight_handler, thumbnails_handler};
use upstream::UpstreamClient;

/// Shared, immutable per-process state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<YouTubeSearchClient>,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(config.upstream_timeout)
            .context("failed to build upstream HTTP client")?;
        Ok(Self {
            search: Arc::new(YouTubeSearchClient::new(
                &config.upstream_base_url,
                &config.api_key,
            )),
            upstream,
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/thumbnails",
            get(thumbnails_handler).options(preflight_handler),
        )
        .route_layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .route_layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .route_layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    serve(listener, state, shutdown_signal()).await
}

pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
