//! Canonicalization of untrusted scorer output.
//!
//! Specialized scorers return arbitrary JSON shapes; these adapters map them
//! onto [`CandidateMatch`]/[`QueryResult`] with explicit defaults (missing
//! numerics -> 0.0, missing strings -> "", missing matches -> empty), so a
//! partially-filled match can never leak into a response.

use serde_json::Value;

use crate::scoring::{CandidateMatch, QueryResult};

use super::scorers::RawScorerResult;

/// Builds a fully-populated match from an arbitrary JSON object.
pub fn sanitize_match(raw: Option<&Value>) -> CandidateMatch {
    let Some(Value::Object(map)) = raw else {
        return CandidateMatch::empty();
    };

    let relevancy = first_f32(map, &["relevancy", "relevancy_score", "relevancy_local"]);

    CandidateMatch {
        index: map
            .get("index")
            .and_then(Value::as_u64)
            .map(|v| v as usize),
        product_code: string_field(map, &["product_code"]),
        title: string_field(map, &["title"]),
        item_type: string_field(map, &["type"]),
        category: string_field(map, &["category"]),
        specification: string_field(map, &["specification", "spec", "specification_text"]),
        emb_score: first_f32(map, &["emb_score", "emb"]),
        token_score: first_f32(map, &["token_score", "token"]),
        title_overlap: first_f32(map, &["title_overlap", "title_tok"]),
        raw_score: first_f32(map, &["raw_score"]),
        relevancy,
    }
}

/// Canonicalizes a whole specialized-scorer result into a [`QueryResult`].
pub fn sanitize_scorer_result(
    query: &str,
    category: &str,
    raw: RawScorerResult,
    model_used: &str,
) -> QueryResult {
    let best_match = sanitize_match(raw.best_match.as_ref());

    let top_matches: Vec<CandidateMatch> = raw
        .top_matches
        .unwrap_or_default()
        .iter()
        .map(|m| sanitize_match(Some(m)))
        .collect();

    let relevancy_score = raw
        .relevancy_score
        .or(raw.relevancy)
        .map(|v| v as f32)
        .filter(|v| *v != 0.0)
        .unwrap_or(best_match.relevancy);

    QueryResult {
        query: query.to_string(),
        detected_category: Some(category.to_string()),
        relevancy_score,
        relevant: raw.relevant.unwrap_or(false),
        best_match,
        top_matches,
        model_used: model_used.to_string(),
        query_number: 0,
        error: None,
    }
}

fn string_field(map: &serde_json::Map<String, Value>, keys: &[&str]) -> String {
    for key in keys {
        match map.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    String::new()
}

fn first_f32(map: &serde_json::Map<String, Value>, keys: &[&str]) -> f32 {
    for key in keys {
        if let Some(v) = map.get(*key).and_then(Value::as_f64) {
            if v != 0.0 {
                return v as f32;
            }
        }
    }
    0.0
}
