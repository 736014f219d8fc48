use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::catalog::{Catalog, CatalogItem, EmbeddingMatrix};
use crate::category::CategoryDetector;
use crate::encoder::{QueryEncoder, StubEncoder};
use crate::engine::{Engine, ScorerRegistry};

use super::create_router_with_state;
use super::state::HandlerState;

const DIM: usize = 8;

fn test_state() -> HandlerState {
    let items = vec![
        CatalogItem {
            index: 0,
            product_code: "MS-1024".to_string(),
            title: "dengue ns1 elisa kit".to_string(),
            item_type: "Elisa".to_string(),
            category: "Elisa".to_string(),
            specification: String::new(),
            merged_text: "dengue ns1 elisa kit".to_string(),
        },
        CatalogItem {
            index: 1,
            product_code: String::new(),
            title: "5 part hematology analyser".to_string(),
            item_type: "Analyser".to_string(),
            category: "Analyser".to_string(),
            specification: String::new(),
            merged_text: "5 part hematology analyser".to_string(),
        },
    ];

    let encoder = StubEncoder::new(DIM);
    let rows = items
        .iter()
        .map(|it| encoder.encode(&[it.merged_text.clone()]).unwrap().remove(0))
        .collect();

    let engine = Engine::new(
        Catalog::from_items(items),
        EmbeddingMatrix::from_rows(rows),
        Arc::new(encoder),
        CategoryDetector::default(),
        ScorerRegistry::new(),
    )
    .expect("engine builds");

    HandlerState::new(Arc::new(engine), 5)
}

fn predict_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("valid json")
}

#[tokio::test]
async fn health_returns_ok() {
    let app = create_router_with_state(test_state());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn predict_wraps_engine_response() {
    let app = create_router_with_state(test_state());
    let response = app
        .oneshot(predict_request(serde_json::json!({
            "query": "dengue ns1 elisa kit, hematology analyser",
            "top_k": 2
        })))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert_eq!(json["status"], true);
    assert_eq!(json["data"]["is_multi_query"], true);
    assert_eq!(json["data"]["query_count"], 2);
    assert_eq!(json["data"]["results"][0]["query_number"], 1);
    assert!(json["data"]["results"][0]["top_matches"].as_array().unwrap().len() <= 2);
}

#[tokio::test]
async fn predict_without_query_is_bad_request() {
    let app = create_router_with_state(test_state());
    let response = app
        .oneshot(predict_request(serde_json::json!({ "top_k": 3 })))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["error"], "query required");
}

#[tokio::test]
async fn predict_defaults_top_k() {
    let app = create_router_with_state(test_state());
    let response = app
        .oneshot(predict_request(serde_json::json!({
            "query": "dengue elisa kits"
        })))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    // only two catalog items exist, so the default top-5 returns both
    assert_eq!(
        json["data"]["results"][0]["top_matches"].as_array().unwrap().len(),
        2
    );
}
