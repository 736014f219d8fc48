//! Density-based acceptance.
//!
//! Two regimes in the catalog call for two acceptance shapes: capital
//! equipment (one analyser, one strong hit) and consumables/reagents (many
//! near-duplicate SKUs, several moderate hits).

use crate::constants::{CLUSTER_MIN_MATCHES, CLUSTER_RELEVANCY, DOMINANT_RELEVANCY};

use super::types::CandidateMatch;

/// Binary relevance verdict over a ranked top-K.
///
/// - empty -> `false`
/// - `top[0].relevancy >= 0.80` -> `true` (single dominant match)
/// - at least 2 entries with `relevancy >= 0.60` -> `true` (clustered)
/// - otherwise `false`
pub fn is_relevant(top_matches: &[CandidateMatch]) -> bool {
    let Some(best) = top_matches.first() else {
        return false;
    };

    if best.relevancy >= DOMINANT_RELEVANCY {
        return true;
    }

    let strong = top_matches
        .iter()
        .filter(|m| m.relevancy >= CLUSTER_RELEVANCY)
        .count();

    strong >= CLUSTER_MIN_MATCHES
}
