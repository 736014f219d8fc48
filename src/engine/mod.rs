//! The orchestrator: segmentation, category routing, aggregation.
//!
//! [`Engine`] is the explicit immutable context object the whole system
//! revolves around: catalog, embedding matrix, encoder, category rules and
//! specialized scorers are wired in once at startup, after which
//! [`Engine::predict`] is a pure computation with no shared mutable state.
//! Failure isolation is per sub-query: an encoder or specialized-scorer
//! failure never aborts sibling sub-queries.

pub mod error;
mod router;
pub mod sanitize;
pub mod scorers;


pub use error::EngineError;
pub use scorers::{RawScorerResult, ScorerError, ScorerRegistry, SpecializedScorer};

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{Catalog, EmbeddingMatrix};
use crate::category::CategoryDetector;
use crate::encoder::QueryEncoder;
use crate::scoring::{MultiQueryResponse, QueryResult, ScoreFusionEngine, Summary};
use crate::segment;

/// Immutable prediction context. Construct once at startup, share freely.
pub struct Engine {
    catalog: Catalog,
    matrix: EmbeddingMatrix,
    encoder: Arc<dyn QueryEncoder>,
    detector: CategoryDetector,
    scorers: ScorerRegistry,
    fusion: ScoreFusionEngine,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("catalog_items", &self.catalog.len())
            .field("matrix", &self.matrix)
            .field("scorers", &self.scorers)
            .finish()
    }
}

impl Engine {
    /// Wires the context together, checking that catalog and matrix agree.
    pub fn new(
        catalog: Catalog,
        matrix: EmbeddingMatrix,
        encoder: Arc<dyn QueryEncoder>,
        detector: CategoryDetector,
        scorers: ScorerRegistry,
    ) -> Result<Self, EngineError> {
        if matrix.rows() != catalog.len() {
            return Err(EngineError::CatalogMatrixMismatch {
                items: catalog.len(),
                rows: matrix.rows(),
            });
        }

        info!(
            items = catalog.len(),
            dim = matrix.dim(),
            rules = detector.rules().len(),
            "Engine ready"
        );

        Ok(Self {
            catalog,
            matrix,
            encoder,
            detector,
            scorers,
            fusion: ScoreFusionEngine::default(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Processes one (possibly compound) input string.
    ///
    /// The input is segmented into sub-queries; each sub-query gets a
    /// detected category and is routed to a specialized scorer or the
    /// generic fusion path, and the per-query results are aggregated into
    /// one [`MultiQueryResponse`].
    pub fn predict(&self, query: &str, top_k: usize) -> MultiQueryResponse {
        let subqueries = segment::split(query);
        let is_multi = subqueries.len() > 1;

        debug!(
            sub_queries = subqueries.len(),
            multi = is_multi,
            "Processing request"
        );

        let results: Vec<QueryResult> = subqueries
            .iter()
            .enumerate()
            .map(|(i, sub)| {
                let category = self.detector.detect(sub, Some(&self.catalog));
                let mut result = self.route(sub, category.as_deref(), top_k);
                result.query_number = i + 1;
                result
            })
            .collect();

        let summary = summarize(&results);

        MultiQueryResponse {
            is_multi_query: is_multi,
            original_query: query.to_string(),
            query_count: subqueries.len(),
            individual_queries: subqueries,
            results,
            summary,
        }
    }

    /// Batch mode: one response per input string.
    pub fn predict_batch(&self, queries: &[String], top_k: usize) -> Vec<MultiQueryResponse> {
        queries.iter().map(|q| self.predict(q, top_k)).collect()
    }
}

fn summarize(results: &[QueryResult]) -> Summary {
    let total = results.len();
    let relevant = results.iter().filter(|r| r.relevant).count();

    let (average_relevancy, success_rate) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            results.iter().map(|r| r.relevancy_score).sum::<f32>() / total as f32,
            relevant as f32 / total as f32,
        )
    };

    Summary {
        total_queries: total,
        relevant_matches: relevant,
        irrelevant_matches: total - relevant,
        average_relevancy,
        success_rate,
    }
}
