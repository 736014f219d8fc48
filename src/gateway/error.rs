use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("query required")]
    MissingQuery,

    #[error("prediction task failed: {0}")]
    TaskFailed(String),
}

#[derive(serde::Serialize)]
struct ErrorEnvelope {
    status: bool,
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::MissingQuery => StatusCode::BAD_REQUEST,
            GatewayError::TaskFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorEnvelope {
            status: false,
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
