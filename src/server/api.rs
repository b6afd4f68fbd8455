//! Axum handlers for the calculator routes.
//!
//! Each handler receives [`ApiState`] via [`axum::extract::State`] and
//! returns an axum [`Response`]. Request bodies are decoded by hand with
//! `serde_json` so that every malformed body maps to a 400 carrying the
//! parser's own error text, regardless of verb or content type.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ApiState;
use crate::accumulator::OpError;

// ── Wire shapes ───────────────────────────────────────────────────────────────

/// Single-operand request body shared by every arithmetic route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(super) struct Numero {
    pub numero: i64,
}

#[derive(Serialize)]
struct OperationResponse {
    #[serde(rename = "Num")]
    num: Numero,
    /// Running total truncated toward zero for display; the stored value
    /// keeps full f64 precision.
    #[serde(rename = "Total")]
    total: i64,
}

#[derive(Serialize)]
struct RootResponse {
    #[serde(rename = "Num")]
    num: Numero,
    #[serde(rename = "Raiz")]
    raiz: f64,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_operand(body: &Bytes) -> Result<Numero, Response> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("malformed operand body: {e}");
        (StatusCode::BAD_REQUEST, e.to_string()).into_response()
    })
}

fn total_response(num: Numero, total: f64) -> Response {
    (
        StatusCode::OK,
        Json(OperationResponse {
            num,
            total: total as i64,
        }),
    )
        .into_response()
}

fn rejected(num: Numero, e: OpError) -> Response {
    warn!(operand = num.numero, "operand rejected: {e}");
    (StatusCode::BAD_REQUEST, e.to_string()).into_response()
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// POST /adicao
pub(super) async fn adicao(State(state): State<ApiState>, body: Bytes) -> Response {
    let num = match parse_operand(&body) {
        Ok(num) => num,
        Err(resp) => return resp,
    };
    let total = state.accumulator.lock().await.add(num.numero);
    debug!(operand = num.numero, total, "adicao applied");
    total_response(num, total)
}

/// POST /subtracao
pub(super) async fn subtracao(State(state): State<ApiState>, body: Bytes) -> Response {
    let num = match parse_operand(&body) {
        Ok(num) => num,
        Err(resp) => return resp,
    };
    let total = state.accumulator.lock().await.subtract(num.numero);
    debug!(operand = num.numero, total, "subtracao applied");
    total_response(num, total)
}

/// POST /multiplicacao
pub(super) async fn multiplicacao(State(state): State<ApiState>, body: Bytes) -> Response {
    let num = match parse_operand(&body) {
        Ok(num) => num,
        Err(resp) => return resp,
    };
    let total = state.accumulator.lock().await.multiply(num.numero);
    debug!(operand = num.numero, total, "multiplicacao applied");
    total_response(num, total)
}

/// POST /divisao — a zero operand is rejected with a 400, but only after it
/// has been recorded in the history.
pub(super) async fn divisao(State(state): State<ApiState>, body: Bytes) -> Response {
    let num = match parse_operand(&body) {
        Ok(num) => num,
        Err(resp) => return resp,
    };
    match state.accumulator.lock().await.divide(num.numero) {
        Ok(total) => {
            debug!(operand = num.numero, total, "divisao applied");
            total_response(num, total)
        }
        Err(e) => rejected(num, e),
    }
}

/// /raizquadrada — verb-agnostic. Returns the untruncated root of the
/// operand; the running total is not involved.
pub(super) async fn raizquadrada(State(state): State<ApiState>, body: Bytes) -> Response {
    let num = match parse_operand(&body) {
        Ok(num) => num,
        Err(resp) => return resp,
    };
    match state.accumulator.lock().await.square_root(num.numero) {
        Ok(raiz) => {
            debug!(operand = num.numero, raiz, "raizquadrada applied");
            (StatusCode::OK, Json(RootResponse { num, raiz })).into_response()
        }
        Err(e) => rejected(num, e),
    }
}

/// DELETE /delete — zeroes the total, leaves the history in place.
pub(super) async fn delete_total(State(state): State<ApiState>) -> Response {
    state.accumulator.lock().await.reset();
    debug!("total reset");
    StatusCode::NO_CONTENT.into_response()
}

/// GET /seetotal — current total as a raw JSON number.
pub(super) async fn seetotal(State(state): State<ApiState>) -> Response {
    let total = state.accumulator.lock().await.peek();
    match serde_json::to_string(&total) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            warn!("total encode failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// GET /homepage — plain-text usage description.
pub(super) async fn homepage() -> &'static str {
    "Calculadora API.\n\
     POST /adicao, /subtracao, /multiplicacao, /divisao with {\"numero\": <int>}\n\
     /raizquadrada returns the square root of the submitted value\n\
     GET /seetotal shows the running total\n\
     DELETE /delete clears the total\n"
}
