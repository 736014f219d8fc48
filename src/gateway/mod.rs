//! HTTP gateway (Axum) over the prediction engine.
//!
//! A thin request/response wrapper: all decision logic lives in
//! [`crate::engine`]. Responses use the `{status, data}` / `{status:
//! false, error}` envelope consumed by the procurement dashboard.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

pub use error::GatewayError;
pub use state::HandlerState;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/predict", post(handler::predict_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
