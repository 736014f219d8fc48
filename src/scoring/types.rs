use serde::Serialize;

/// Per-(query, item) scoring record. Every field is always populated;
/// absent source data defaults rather than leaving holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateMatch {
    /// Catalog index of the matched item, `None` for the empty match.
    pub index: Option<usize>,
    pub product_code: String,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub category: String,
    pub specification: String,
    pub emb_score: f32,
    pub token_score: f32,
    pub title_overlap: f32,
    pub raw_score: f32,
    /// Calibrated score, always in `[0, 1]`.
    pub relevancy: f32,
}

impl CandidateMatch {
    /// Fully-defaulted match, used when the catalog is empty or a
    /// collaborator returned nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Outcome for one sub-query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub query: String,
    pub detected_category: Option<String>,
    pub relevancy_score: f32,
    pub relevant: bool,
    pub best_match: CandidateMatch,
    /// Sorted by `raw_score` descending, ties by ascending catalog index;
    /// at most `top_k` entries.
    pub top_matches: Vec<CandidateMatch>,
    /// Tag for the path that produced this result (generic fusion, a
    /// specialized scorer's name, or `"error"`).
    pub model_used: String,
    /// 1-based position within the segmented input.
    pub query_number: usize,
    /// Present only when this sub-query's encoding failed; siblings are
    /// unaffected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate statistics over all sub-queries of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_queries: usize,
    pub relevant_matches: usize,
    pub irrelevant_matches: usize,
    pub average_relevancy: f32,
    pub success_rate: f32,
}

/// Response for one (possibly compound) input string.
#[derive(Debug, Clone, Serialize)]
pub struct MultiQueryResponse {
    pub is_multi_query: bool,
    pub original_query: String,
    pub query_count: usize,
    pub individual_queries: Vec<String>,
    pub results: Vec<QueryResult>,
    pub summary: Summary,
}
