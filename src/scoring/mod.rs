//! Multi-signal score fusion and the relevance verdict.
//!
//! For one sub-query the [`ScoreFusionEngine`] scans the whole catalog and
//! fuses three signals per item (embedding cosine, merged-text token
//! overlap, title token overlap) plus two additive bonuses (category match,
//! exact SKU in the query), calibrates the sum through a sigmoid, and ranks.
//! [`decider::is_relevant`] then applies the density rule to the top-K.

pub mod decider;
pub mod fusion;
pub mod types;


pub use decider::is_relevant;
pub use fusion::{FusionWeights, ScoreFusionEngine};
pub use types::{CandidateMatch, MultiQueryResponse, QueryResult, Summary};
