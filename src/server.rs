//! HTTP surface for pipeline submission.
//!
//! One real route: `POST /pipelines/parse` takes the editor's node/edge
//! snapshot and answers with counts plus the DAG verdict. CORS is wide open
//! because the editor frontend runs on its own origin during development.

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::types::{ParseReport, Pipeline};

/// Failure starting or running the server. Kept distinct from any report
/// payload so a transport fault can never read as "0 nodes, not a DAG".
#[derive(Debug, Error)]
pub enum ServeError {
  #[error("failed to bind {addr}: {source}")]
  Bind {
    addr: SocketAddr,
    #[source]
    source: std::io::Error,
  },
  #[error("server failed: {0}")]
  Serve(#[source] std::io::Error),
}

/// Builds the router. Separate from `serve` so tests can drive it without a
/// socket.
pub fn app() -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);
  Router::new()
    .route("/", get(root))
    .route("/pipelines/parse", post(parse_pipeline))
    .layer(TraceLayer::new_for_http())
    .layer(cors)
}

/// Binds `addr` and serves until ctrl-c.
pub async fn serve(addr: SocketAddr) -> Result<(), ServeError> {
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|source| ServeError::Bind { addr, source })?;
  info!(%addr, "pipeline parse endpoint listening");
  axum::serve(listener, app())
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(ServeError::Serve)
}

async fn root() -> Json<Value> {
  Json(json!({ "message": "nodeflow pipeline API" }))
}

async fn parse_pipeline(Json(pipeline): Json<Pipeline>) -> Json<ParseReport> {
  let report = pipeline.report();
  info!(
    num_nodes = report.num_nodes,
    num_edges = report.num_edges,
    is_dag = report.is_dag,
    "parsed pipeline"
  );
  Json(report)
}

async fn shutdown_signal() {
  let _ = tokio::signal::ctrl_c().await;
}
