//! The fixed product catalog and its precomputed embedding matrix.
//!
//! Both are loaded once at process start and never mutated afterwards; every
//! scoring pass is a read-only linear scan, so no locking is needed.

pub mod error;
pub mod loader;
pub mod matrix;


pub use error::CatalogError;
pub use matrix::EmbeddingMatrix;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

/// One immutable catalog record.
///
/// `index` is unique within a loaded catalog and is the deterministic
/// tie-break key for ranking.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CatalogItem {
    pub index: usize,
    pub product_code: String,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub category: String,
    pub specification: String,
    pub merged_text: String,
}

/// The loaded product catalog (ordered, read-only).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Wraps already-built items (fixtures and tests).
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Loads the catalog from a JSON index file.
    ///
    /// Records are defaulted field-by-field per the load contract (alias
    /// resolution, product-code priority, merged-text fallback); a malformed
    /// record is never fatal, only an unreadable or non-array file is.
    pub fn load_json(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: Vec<loader::RawRecord> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                CatalogError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        let items: Vec<CatalogItem> = raw
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_item(position))
            .collect();

        info!(path = %path.display(), items = items.len(), "Catalog loaded");

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&CatalogItem> {
        self.items.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}
