use axum::{Json, extract::State};
use tracing::debug;

use super::error::GatewayError;
use super::payload::{PredictRequest, PredictResponse};
use super::state::HandlerState;

/// `POST /predict` — run the engine for one (possibly compound) query.
///
/// The engine is synchronous and CPU-bound, so the call runs on the
/// blocking pool rather than stalling the async executor.
pub async fn predict_handler(
    State(state): State<HandlerState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, GatewayError> {
    let query = match request.query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(GatewayError::MissingQuery),
    };

    let top_k = request.top_k.unwrap_or(state.default_top_k);

    debug!(query_len = query.len(), top_k, "Predict request received");

    let engine = state.engine.clone();
    let response = tokio::task::spawn_blocking(move || engine.predict(&query, top_k))
        .await
        .map_err(|e| GatewayError::TaskFailed(e.to_string()))?;

    Ok(Json(PredictResponse::ok(response)))
}
