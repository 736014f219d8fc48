use serde::{Deserialize, Serialize};

use crate::scoring::MultiQueryResponse;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub status: bool,
    pub data: MultiQueryResponse,
}

impl PredictResponse {
    pub fn ok(data: MultiQueryResponse) -> Self {
        Self { status: true, data }
    }
}
