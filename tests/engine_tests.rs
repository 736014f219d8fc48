//! Full-pipeline tests: segmentation, routing, scoring, and aggregation
//! against the stub-encoded lab catalog.

mod common;

use common::fixtures::lab_engine;
use tendrel::constants::{MODEL_TAG_ERROR, MODEL_TAG_FUSION};

#[test]
fn exact_catalog_wording_is_relevant() {
    let engine = lab_engine();
    let item = engine.catalog().get(0).expect("fixture item").clone();

    let response = engine.predict(&item.merged_text, 5);

    assert_eq!(response.query_count, 1);
    assert!(!response.is_multi_query);

    let result = &response.results[0];
    assert_eq!(result.model_used, MODEL_TAG_FUSION);
    assert_eq!(result.best_match.index, Some(0));
    assert_eq!(result.best_match.product_code, "MP-100");
    assert!(result.relevant, "exact wording should pass the density rule");
    assert!(result.relevancy_score > 0.8);
}

#[test]
fn boilerplate_prefix_and_commas_split_into_sub_queries() {
    let engine = lab_engine();

    let response = engine.predict(
        "supply of - elisa microplate washer, 5 part hematology analyser",
        5,
    );

    assert!(response.is_multi_query);
    assert_eq!(response.query_count, 2);
    assert_eq!(
        response.individual_queries,
        vec![
            "elisa microplate washer".to_string(),
            "5 part hematology analyser".to_string(),
        ]
    );

    // query_number is 1-based and follows segmentation order
    for (i, result) in response.results.iter().enumerate() {
        assert_eq!(result.query_number, i + 1);
    }
}

#[test]
fn category_routing_reaches_results() {
    let engine = lab_engine();

    let response = engine.predict("5 part hematology analyser", 5);
    let result = &response.results[0];

    assert_eq!(result.detected_category.as_deref(), Some("Analyser"));
    assert_eq!(result.best_match.index, Some(2));
}

#[test]
fn top_matches_are_ranked_and_truncated() {
    let engine = lab_engine();

    let response = engine.predict("elisa microplate washer", 3);
    let result = &response.results[0];

    assert!(result.top_matches.len() <= 3);
    assert!(!result.top_matches.is_empty());

    for pair in result.top_matches.windows(2) {
        assert!(
            pair[0].raw_score >= pair[1].raw_score,
            "top matches must be sorted by raw score, descending"
        );
    }
    assert_eq!(result.best_match, result.top_matches[0]);
}

#[test]
fn unrelated_text_is_not_relevant() {
    let engine = lab_engine();

    let response = engine.predict("quarterly payroll reconciliation meeting", 5);
    let result = &response.results[0];

    // still ranked (totality), just below both density thresholds
    assert!(!result.top_matches.is_empty());
    assert!(!result.relevant);
    assert_eq!(response.summary.relevant_matches, 0);
    assert_eq!(response.summary.success_rate, 0.0);
}

#[test]
fn summary_aggregates_sub_query_results() {
    let engine = lab_engine();
    let washer = engine.catalog().get(1).expect("fixture item").clone();

    let query = format!("{}, quarterly payroll reconciliation meeting", washer.merged_text);
    let response = engine.predict(&query, 5);

    assert_eq!(response.query_count, 2);
    assert_eq!(response.summary.total_queries, 2);
    assert_eq!(
        response.summary.relevant_matches + response.summary.irrelevant_matches,
        2
    );

    let mean: f32 = response
        .results
        .iter()
        .map(|r| r.relevancy_score)
        .sum::<f32>()
        / response.results.len() as f32;
    assert!((response.summary.average_relevancy - mean).abs() < 1e-6);

    let expected_rate =
        response.summary.relevant_matches as f32 / response.summary.total_queries as f32;
    assert!((response.summary.success_rate - expected_rate).abs() < 1e-6);
}

#[test]
fn no_result_carries_error_on_healthy_engine() {
    let engine = lab_engine();

    let response = engine.predict("micropipette, elisa washer", 5);
    for result in &response.results {
        assert!(result.error.is_none());
        assert_ne!(result.model_used, MODEL_TAG_ERROR);
    }
}

#[test]
fn predict_batch_scores_each_query_independently() {
    let engine = lab_engine();

    let queries = vec![
        "elisa microplate washer".to_string(),
        "meriscreen hiv rapid test".to_string(),
    ];
    let responses = engine.predict_batch(&queries, 5);

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].original_query, queries[0]);
    assert_eq!(responses[1].original_query, queries[1]);
    assert_eq!(responses[1].results[0].best_match.index, Some(3));
}
