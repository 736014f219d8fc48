//! Category-specialized scorer collaborators.
//!
//! Specialized scorers are black boxes behind a narrow contract: given a
//! query and a top-K they return a loosely-shaped result that the router
//! sanitizes into canonical types. They are registered per category name
//! and consulted before the generic fusion path.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("specialized scorer failed: {reason}")]
    Failed { reason: String },
}

/// Untrusted result shape returned by a specialized scorer.
///
/// Field aliases and types are deliberately loose; every value passes
/// through the sanitize step before reaching a response.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawScorerResult {
    #[serde(default)]
    pub relevancy_score: Option<f64>,
    #[serde(default)]
    pub relevancy: Option<f64>,
    #[serde(default)]
    pub relevant: Option<bool>,
    #[serde(default)]
    pub best_match: Option<Value>,
    #[serde(default)]
    pub top_matches: Option<Vec<Value>>,
}

/// Capability interface for a category-specialized scorer.
pub trait SpecializedScorer: Send + Sync {
    /// Stable tag used as `model_used` in results produced by this scorer.
    fn name(&self) -> &str;

    fn predict(&self, query: &str, top_k: usize) -> Result<RawScorerResult, ScorerError>;
}

/// Specialized scorers keyed by lowercase category name.
#[derive(Clone, Default)]
pub struct ScorerRegistry {
    scorers: HashMap<String, Arc<dyn SpecializedScorer>>,
}

impl std::fmt::Debug for ScorerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScorerRegistry")
            .field("categories", &self.scorers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ScorerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a scorer for `category` (matched case-insensitively).
    pub fn register(&mut self, category: impl Into<String>, scorer: Arc<dyn SpecializedScorer>) {
        self.scorers.insert(category.into().to_lowercase(), scorer);
    }

    pub fn get(&self, category: &str) -> Option<&Arc<dyn SpecializedScorer>> {
        self.scorers.get(&category.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.scorers.is_empty()
    }
}
