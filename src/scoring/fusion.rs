use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::{Catalog, CatalogItem, EmbeddingMatrix};
use crate::constants::{CATEGORY_BOOST, EMB_WEIGHT, SKU_BONUS, TITLE_WEIGHT, TOKEN_WEIGHT};
use crate::text::token_overlap;

use super::types::CandidateMatch;

/// Fusion weights and bonuses. [`Default`] mirrors the calibrated
/// production values in [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionWeights {
    pub embedding: f32,
    pub token: f32,
    pub title: f32,
    pub category_boost: f32,
    pub sku_bonus: f32,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            embedding: EMB_WEIGHT,
            token: TOKEN_WEIGHT,
            title: TITLE_WEIGHT,
            category_boost: CATEGORY_BOOST,
            sku_bonus: SKU_BONUS,
        }
    }
}

/// Scores one query against the whole catalog and returns a ranked top-K.
#[derive(Debug, Clone, Default)]
pub struct ScoreFusionEngine {
    weights: FusionWeights,
}

impl ScoreFusionEngine {
    pub fn new(weights: FusionWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &FusionWeights {
        &self.weights
    }

    /// Computes a [`CandidateMatch`] per catalog item and returns the top
    /// `top_k`, sorted by `raw_score` descending with ties broken by
    /// ascending catalog index.
    ///
    /// `q_emb` must be L2-normalized and match the matrix dimension; items
    /// beyond the matrix row count score zero on the embedding signal.
    pub fn rank(
        &self,
        catalog: &Catalog,
        matrix: &EmbeddingMatrix,
        query: &str,
        q_emb: &[f32],
        category: Option<&str>,
        top_k: usize,
    ) -> Vec<CandidateMatch> {
        let query_lc = query.to_lowercase();
        let category_lc = category.map(str::to_lowercase);

        let mut matches: Vec<CandidateMatch> = catalog
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let emb_score = if i < matrix.rows() {
                    matrix.dot(i, q_emb)
                } else {
                    0.0
                };
                self.score_item(item, query, &query_lc, category_lc.as_deref(), emb_score)
            })
            .collect();

        matches.sort_by(|a, b| {
            b.raw_score
                .partial_cmp(&a.raw_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.index.cmp(&b.index))
        });
        matches.truncate(top_k);

        debug!(
            query_len = query.len(),
            candidates = catalog.len(),
            returned = matches.len(),
            top_raw = matches.first().map(|m| m.raw_score).unwrap_or(0.0),
            "Fusion pass complete"
        );

        matches
    }

    fn score_item(
        &self,
        item: &CatalogItem,
        query: &str,
        query_lc: &str,
        category_lc: Option<&str>,
        emb_score: f32,
    ) -> CandidateMatch {
        let token_score = token_overlap(query, &item.merged_text);
        let title_score = token_overlap(query, &item.title);

        let mut raw = self.weights.embedding * emb_score
            + self.weights.token * token_score
            + self.weights.title * title_score;

        if let Some(cat) = category_lc {
            if item.category.to_lowercase().contains(cat)
                || item.item_type.to_lowercase().contains(cat)
            {
                raw += self.weights.category_boost;
            }
        }

        let code_lc = item.product_code.to_lowercase();
        if !code_lc.is_empty() && contains_whole_word(query_lc, &code_lc) {
            raw += self.weights.sku_bonus;
        }

        CandidateMatch {
            index: Some(item.index),
            product_code: item.product_code.clone(),
            title: item.title.clone(),
            item_type: item.item_type.clone(),
            category: item.category.clone(),
            specification: item.specification.clone(),
            emb_score,
            token_score,
            title_overlap: title_score,
            raw_score: raw,
            relevancy: sigmoid(raw),
        }
    }
}

/// Logistic calibration of the fused score into `[0, 1]`.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Whole-word substring test: `needle` must occur in `haystack` with no
/// word character (alphanumeric or underscore) adjacent on either side.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let abs = start + pos;
        let end = abs + needle.len();

        let before_ok = haystack[..abs]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let after_ok = haystack[end..].chars().next().is_none_or(|c| !is_word_char(c));

        if before_ok && after_ok {
            return true;
        }

        match haystack[abs..].chars().next() {
            Some(c) => start = abs + c.len_utf8(),
            None => break,
        }
    }

    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
