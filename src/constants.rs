//! Cross-cutting, shared constants.
//!
//! The fusion weights are tunables calibrated against real tender text and
//! the production catalog; change them together with the density thresholds,
//! not in isolation.

/// Weight of the embedding cosine similarity in the fused score.
pub const EMB_WEIGHT: f32 = 1.0;

/// Weight of the token overlap against an item's merged text.
pub const TOKEN_WEIGHT: f32 = 0.35;

/// Weight of the token overlap against an item's title alone.
pub const TITLE_WEIGHT: f32 = 0.5;

/// Additive bonus when the detected category matches an item's category/type.
pub const CATEGORY_BOOST: f32 = 0.25;

/// Additive bonus when an item's product code appears as a whole word in the query.
pub const SKU_BONUS: f32 = 0.5;

/// Default number of ranked matches returned per sub-query.
pub const DEFAULT_TOP_K: usize = 5;

/// A single calibrated match at or above this relevancy is accepted on its own.
pub const DOMINANT_RELEVANCY: f32 = 0.80;

/// Matches at or above this relevancy count toward the clustered acceptance rule.
pub const CLUSTER_RELEVANCY: f32 = 0.60;

/// Minimum number of clustered matches required for acceptance.
pub const CLUSTER_MIN_MATCHES: usize = 2;

/// Tokens must be strictly longer than this to qualify for overlap scoring.
pub const MIN_TOKEN_LEN: usize = 2;

/// `model_used` tag for the generic catalog fusion path.
pub const MODEL_TAG_FUSION: &str = "global_catalog";

/// `model_used` tag for a sub-query whose encoding failed.
pub const MODEL_TAG_ERROR: &str = "error";
