//! Text canonicalization.
//!
//! Everything downstream (segmentation, category detection, scoring) assumes
//! input has passed through [`normalize`]. Both functions are pure and
//! `normalize` is idempotent.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::constants::MIN_TOKEN_LEN;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+").expect("token regex is valid"));

/// Canonicalizes a string: NFKD decomposition, zero-width/bidi/format
/// characters and NBSP replaced with spaces, newlines collapsed to spaces,
/// whitespace trimmed.
pub fn normalize(s: &str) -> String {
    let decomposed: String = s
        .nfkd()
        .map(|c| match c {
            '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{00A0}' => ' ',
            '\n' | '\r' => ' ',
            _ => c,
        })
        .collect();

    decomposed.trim().to_string()
}

/// Lowercases and extracts alphanumeric runs, keeping only tokens longer
/// than [`MIN_TOKEN_LEN`] characters.
pub fn tokenize(s: &str) -> Vec<String> {
    let lowered = normalize(s).to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|t| t.len() > MIN_TOKEN_LEN)
        .collect()
}

/// Deduplicated token set of `s`.
pub fn token_set(s: &str) -> HashSet<String> {
    tokenize(s).into_iter().collect()
}

/// Fraction of `query` tokens present in `target`'s token set.
///
/// Returns 0.0 when the query has no qualifying tokens; always in `[0, 1]`.
pub fn token_overlap(query: &str, target: &str) -> f32 {
    let q = token_set(query);
    if q.is_empty() {
        return 0.0;
    }
    let t = token_set(target);
    let shared = q.iter().filter(|tok| t.contains(*tok)).count();
    shared as f32 / q.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "  Supply of\u{200B} Pipettes\n",
            "plain text",
            "CRP\u{00A0}reagent\r\nkit",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalize_strips_control_characters() {
        assert_eq!(normalize("abc\u{200B}def"), "abc def");
        assert_eq!(normalize("left\u{202A}right"), "left right");
        assert_eq!(normalize("a\nb\rc"), "a b c");
    }

    #[test]
    fn tokenize_keeps_long_alphanumeric_runs() {
        assert_eq!(
            tokenize("5-Part Hematology Analyser, HB!"),
            vec!["part", "hematology", "analyser"]
        );
        // "5" and "hb" are too short to qualify
        assert!(tokenize("a hb 5").is_empty());
    }

    #[test]
    fn tokenize_is_stable_after_normalize() {
        let s = "  Dengue NS1\u{00A0}Elisa kit\n";
        assert_eq!(tokenize(&normalize(s)), tokenize(s));
    }

    #[test]
    fn overlap_of_query_with_itself_is_one() {
        assert_eq!(token_overlap("hematology analyser", "hematology analyser"), 1.0);
    }

    #[test]
    fn overlap_is_bounded() {
        let pairs = [
            ("analyser reagent kit", "reagent"),
            ("", "anything"),
            ("xy", "xy"), // no qualifying tokens
            ("pipette", "totally unrelated"),
        ];
        for (q, t) in pairs {
            let o = token_overlap(q, t);
            assert!((0.0..=1.0).contains(&o), "overlap {o} out of range");
        }
    }

    #[test]
    fn overlap_counts_query_side_fraction() {
        // one of two query tokens present in the target
        let o = token_overlap("dengue elisa", "elisa washer");
        assert!((o - 0.5).abs() < f32::EPSILON);
    }
}
