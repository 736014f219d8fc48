//! Per-sub-query routing: specialized scorer vs. generic fusion.

use tracing::{debug, warn};

use crate::constants::{MODEL_TAG_ERROR, MODEL_TAG_FUSION};
use crate::encoder::EncoderError;
use crate::scoring::{CandidateMatch, QueryResult, decider};
use crate::text::normalize;

use super::{Engine, sanitize};

impl Engine {
    /// Routes one sub-query. A registered specialized scorer for the
    /// detected category is tried first; on failure we log and fall through
    /// to the generic path rather than propagating.
    pub(super) fn route(&self, query: &str, category: Option<&str>, top_k: usize) -> QueryResult {
        if let Some(cat) = category {
            if let Some(scorer) = self.scorers.get(cat) {
                debug!(category = %cat, scorer = %scorer.name(), "Routing to specialized scorer");
                match scorer.predict(query, top_k) {
                    Ok(raw) => {
                        return sanitize::sanitize_scorer_result(query, cat, raw, scorer.name());
                    }
                    Err(e) => {
                        warn!(
                            category = %cat,
                            scorer = %scorer.name(),
                            error = %e,
                            "Specialized scorer failed, falling back to generic path"
                        );
                    }
                }
            }
        }

        self.score_generic(query, category, top_k)
    }

    /// Generic path: encode the query, fuse signals over the whole catalog,
    /// rank, and apply the density rule.
    fn score_generic(&self, query: &str, category: Option<&str>, top_k: usize) -> QueryResult {
        let query = normalize(query);

        let q_emb = match self.encode_query(&query) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Query encoding failed; sub-query marked as error");
                return encoder_failure_result(&query, category, e);
            }
        };

        let top_matches = self
            .fusion
            .rank(&self.catalog, &self.matrix, &query, &q_emb, category, top_k);

        let best_match = top_matches.first().cloned().unwrap_or_else(CandidateMatch::empty);
        let relevant = decider::is_relevant(&top_matches);

        QueryResult {
            query,
            detected_category: category.map(str::to_string),
            relevancy_score: best_match.relevancy,
            relevant,
            best_match,
            top_matches,
            model_used: MODEL_TAG_FUSION.to_string(),
            query_number: 0,
            error: None,
        }
    }

    fn encode_query(&self, query: &str) -> Result<Vec<f32>, EncoderError> {
        let texts = [query.to_string()];
        let mut vectors = self.encoder.encode(&texts)?;

        let v = vectors.pop().ok_or(EncoderError::CountMismatch {
            expected: 1,
            got: 0,
        })?;

        if v.len() != self.matrix.dim() {
            return Err(EncoderError::DimensionMismatch {
                expected: self.matrix.dim(),
                got: v.len(),
            });
        }

        Ok(v)
    }
}

/// Error result for a sub-query whose encoding failed: never silently
/// scored with a zero vector, never fatal to siblings.
fn encoder_failure_result(query: &str, category: Option<&str>, e: EncoderError) -> QueryResult {
    QueryResult {
        query: query.to_string(),
        detected_category: category.map(str::to_string),
        relevancy_score: 0.0,
        relevant: false,
        best_match: CandidateMatch::empty(),
        top_matches: Vec::new(),
        model_used: MODEL_TAG_ERROR.to_string(),
        query_number: 0,
        error: Some(e.to_string()),
    }
}
