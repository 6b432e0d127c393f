#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Request handlers for the form and results pages.
pub mod handlers;
/// HTML rendering.
pub mod pages;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

/// Builds the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/results", post(handlers::results))
        .fallback(handlers::not_found)
}

/// Binds `addr` and serves the application until Ctrl-C is received.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    let local = listener
        .local_addr()
        .context("Could not read the bound address")?;
    tracing::info!("Listening on http://{local}");

    serve_on(listener, async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutting down");
    })
    .await
}

/// Serves the application on an already bound `listener` until `shutdown`
/// completes.
pub async fn serve_on(
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server failed")
}
