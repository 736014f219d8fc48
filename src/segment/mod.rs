//! Compound-requirement segmentation.
//!
//! Tender text routinely bundles several independent products into one
//! free-text field ("supply of - 5 part analyser, laparoscope, microscope -
//! district hospital"). [`split`] turns one such string into an ordered list
//! of standalone product queries; the result is never empty.

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use regex::Regex;

use crate::text::normalize;

/// Fragments shorter than this (before punctuation cleanup) are noise.
const MIN_RAW_FRAGMENT_LEN: usize = 3;

/// Fragments shorter than this after cleanup are dropped.
const MIN_CLEAN_FRAGMENT_LEN: usize = 5;

static BOILERPLATE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:supply\s+of|requirement\s+of|procurement\s+of|purchase\s+of|quotation\s+for)\s*[-:]*\s*",
    )
    .expect("prefix regex is valid")
});

static DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;|\n]|\d+[.)]\s*").expect("delimiter regex is valid"));

static EDGE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-:\u{2022}\s]+|[-:\u{2022}\s]+$").expect("edge regex is valid"));

static LOCATION_EQUIPMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*[-\u{2013}]\s*[a-z\s]+equipments?\s*$").expect("location regex is valid")
});

static LOCATION_HOSPITAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*[-\u{2013}]\s*[a-z\s]+hospital\s*$").expect("location regex is valid")
});

/// Splits one input string into an ordered list of independent product
/// queries.
///
/// Steps: normalize, strip one leading boilerplate prefix ("supply of",
/// "requirement of", ...), split on commas/semicolons/pipes/newlines and
/// numbered-list markers, then clean each fragment (length gates, edge
/// punctuation, trailing "- <location> equipments/hospital" suffixes).
///
/// If nothing survives cleanup, the normalized trimmed input is returned as
/// a single-element list, so the result is never empty.
pub fn split(query: &str) -> Vec<String> {
    let normalized = normalize(query);
    let stripped = BOILERPLATE_PREFIX_RE.replace(&normalized, "");

    let mut queries = Vec::new();

    for part in DELIMITER_RE.split(&stripped) {
        let part = part.trim();
        if part.chars().count() < MIN_RAW_FRAGMENT_LEN {
            continue;
        }

        let part = EDGE_PUNCT_RE.replace_all(part, "");
        if part.chars().count() < MIN_CLEAN_FRAGMENT_LEN {
            continue;
        }

        let part = LOCATION_EQUIPMENT_RE.replace(&part, "");
        let part = LOCATION_HOSPITAL_RE.replace(&part, "");

        let part = part.trim();
        if !part.is_empty() {
            queries.push(part.to_string());
        }
    }

    if queries.is_empty() {
        return vec![stripped.trim().to_string()];
    }

    queries
}
