//! Category inference for a single product query.
//!
//! Two stages: an ordered keyword rule table (longest keyword wins, ties by
//! declaration order), then catalog token-overlap voting when no keyword
//! matches. Returns `None` when neither stage produces evidence.

mod rules;


use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::text::{normalize, token_set};

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("failed to read rules file {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rules file {path}: {source}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One keyword -> category rule. Keywords are matched as lowercase
/// substrings of the normalized query.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub category: String,
}

/// An ordered rule list. Order is part of the contract: equal-length
/// keyword ties resolve to the earliest declared rule.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    /// The built-in table shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_rules(
            rules::BUILTIN_RULES
                .iter()
                .map(|(keyword, category)| CategoryRule {
                    keyword: (*keyword).to_string(),
                    category: (*category).to_string(),
                })
                .collect(),
        )
    }

    /// Wraps explicit rules, lowercasing keywords for matching.
    pub fn from_rules(mut rules: Vec<CategoryRule>) -> Self {
        for rule in &mut rules {
            rule.keyword = rule.keyword.to_lowercase();
        }
        Self { rules }
    }

    /// Loads a versioned rules file: a JSON array of
    /// `{"keyword": ..., "category": ...}` objects, in priority order.
    pub fn from_json_file(path: &Path) -> Result<Self, CategoryError> {
        let file = File::open(path).map_err(|source| CategoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules: Vec<CategoryRule> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                CategoryError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        info!(path = %path.display(), rules = rules.len(), "Category rules loaded");

        Ok(Self::from_rules(rules))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Best keyword hit for an already-lowercased query: longest keyword,
    /// earliest declaration on ties.
    fn best_match(&self, query_lc: &str) -> Option<&CategoryRule> {
        let mut best: Option<&CategoryRule> = None;
        for rule in &self.rules {
            if !query_lc.contains(&rule.keyword) {
                continue;
            }
            match best {
                Some(b) if rule.keyword.len() <= b.keyword.len() => {}
                _ => best = Some(rule),
            }
        }
        best
    }
}

/// Infers a category label for one query.
#[derive(Debug, Clone)]
pub struct CategoryDetector {
    rules: RuleSet,
}

impl CategoryDetector {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the detected category, or `None` when there is no evidence.
    ///
    /// Keyword rules are consulted first; when none match and a catalog is
    /// supplied, the item with the highest query-token overlap votes with
    /// its category (or type), first maximum wins, overlap must be > 0.
    pub fn detect(&self, query: &str, catalog: Option<&Catalog>) -> Option<String> {
        let query_lc = normalize(query).to_lowercase();

        if let Some(rule) = self.rules.best_match(&query_lc) {
            debug!(keyword = %rule.keyword, category = %rule.category, "Keyword rule hit");
            return Some(rule.category.clone());
        }

        let catalog = catalog?;
        let q_tokens = token_set(query);
        if q_tokens.is_empty() {
            return None;
        }

        let mut best: Option<&crate::catalog::CatalogItem> = None;
        let mut best_score = 0usize;

        for item in catalog.iter() {
            let combined = format!(
                "{} {} {} {}",
                item.title, item.category, item.item_type, item.merged_text
            );
            let item_tokens = token_set(&combined);
            let score = q_tokens.iter().filter(|t| item_tokens.contains(*t)).count();
            if score > best_score {
                best_score = score;
                best = Some(item);
            }
        }

        best.map(|item| {
            let category = if item.category.is_empty() {
                item.item_type.clone()
            } else {
                item.category.clone()
            };
            debug!(overlap = best_score, category = %category, "Catalog vote hit");
            category
        })
    }
}

impl Default for CategoryDetector {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}
