//! Axum-based HTTP transport for the accumulator.
//!
//! `run()` binds the listener and drives the axum event loop; the caller's
//! [`CancellationToken`] is wired to axum's graceful shutdown. Route layout:
//!
//! ```text
//! POST   /adicao          — add operand to the total
//! POST   /subtracao       — subtract operand from the total
//! POST   /multiplicacao   — multiply the total by the operand
//! POST   /divisao         — divide the total by the operand
//! any    /raizquadrada    — square root of the operand (total untouched)
//! DELETE /delete          — zero the total
//! GET    /seetotal        — current total as a raw JSON number
//! GET    /homepage        — plain-text usage description
//! ```

mod api;

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, delete, get, post},
};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::accumulator::Accumulator;
use crate::error::AppError;

/// Axum router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone — the accumulator is reference-counted. The mutex
/// serialises concurrent read-modify-write sequences on the shared total;
/// requests still run in parallel up to the lock.
#[derive(Clone, Default)]
pub struct ApiState {
    pub(crate) accumulator: Arc<Mutex<Accumulator>>,
}

impl ApiState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/homepage", get(api::homepage))
        .route("/adicao", post(api::adicao))
        .route("/subtracao", post(api::subtracao))
        .route("/multiplicacao", post(api::multiplicacao))
        .route("/divisao", post(api::divisao))
        .route("/raizquadrada", any(api::raizquadrada))
        .route("/delete", delete(api::delete_total))
        .route("/seetotal", get(api::seetotal))
        .with_state(state)
}

/// Bind `bind_addr` and serve until `shutdown` is cancelled.
pub async fn run(bind_addr: &str, shutdown: CancellationToken) -> Result<(), AppError> {
    let router = build_router(ApiState::new());

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "calculadora listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("server error: {e}")))?;

    info!("calculadora shut down");
    Ok(())
}
