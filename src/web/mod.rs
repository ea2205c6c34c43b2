//! HTTP surface: one route, method-dispatched.
//!
//! `GET` lists IDs, `POST` runs an envelope, `DELETE` removes by raw ID,
//! anything else gets the fixed unknown-command line. Diagnostics travel in
//! the body, not the status code, so every response is a plain-text 200.

use std::net::SocketAddr;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::routing::any;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::dispatch::Dispatcher;

pub fn router(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/", any(handle))
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

async fn handle(State(dispatcher): State<Dispatcher>, method: Method, body: Bytes) -> String {
    match method {
        Method::GET => dispatcher.list().await,
        Method::POST => dispatcher.dispatch(&body).await,
        Method::DELETE => dispatcher.delete_raw(&body).await,
        _ => "Unknown command".to_string(),
    }
}

pub async fn serve(addr: SocketAddr, dispatcher: Dispatcher) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router(dispatcher)).await
}
