//! Raw index records and the defaulting rules that canonicalize them.
//!
//! The index file comes from an upstream scraping pipeline whose field names
//! drifted over time, so every string field is resolved through a known
//! alias list and missing values default rather than fail.

use serde::Deserialize;
use serde_json::Value;

use crate::text::normalize;

use super::CatalogItem;

/// Product-code values that are slab/pricing placeholders, not codes.
const PLACEHOLDER_CODES: &[&str] = &["regular", "no slab"];

/// One record as it appears in the JSON index, aliases and all.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(default)]
    index: Option<Value>,

    // Product-code aliases, in resolution priority order.
    #[serde(default)]
    product_code: Option<Value>,
    #[serde(default, rename = "product code")]
    product_code_spaced: Option<Value>,
    #[serde(default)]
    productcode: Option<Value>,
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    product: Option<Value>,

    #[serde(default, alias = "Title")]
    title: Option<String>,
    #[serde(default, alias = "Type")]
    r#type: Option<String>,
    #[serde(default, alias = "Category")]
    category: Option<String>,
    #[serde(default, alias = "spec", alias = "specification_text")]
    specification: Option<String>,
    #[serde(default, alias = "mergedText")]
    merged_text: Option<String>,
}

impl RawRecord {
    /// Canonicalizes the record; `position` is the fallback index when the
    /// record carries none.
    pub(crate) fn into_item(self, position: usize) -> CatalogItem {
        let index = self
            .index
            .as_ref()
            .and_then(coerce_index)
            .unwrap_or(position);

        let product_code = resolve_product_code(&[
            &self.product_code,
            &self.product_code_spaced,
            &self.productcode,
            &self.code,
            &self.product,
        ]);

        let title = normalize(self.title.as_deref().unwrap_or(""));
        let category = normalize(self.category.as_deref().unwrap_or(""));
        let item_type = match self.r#type.as_deref() {
            Some(t) if !t.is_empty() => normalize(t),
            _ => category.clone(),
        };

        let mut specification = normalize(self.specification.as_deref().unwrap_or(""));
        pad_slab_specification(&mut specification);

        let merged_text = match self.merged_text.as_deref() {
            Some(m) if !m.is_empty() => normalize(m),
            _ if !title.is_empty() => title.clone(),
            _ => specification.clone(),
        };

        CatalogItem {
            index,
            product_code,
            title,
            item_type,
            category,
            specification,
            merged_text,
        }
    }
}

/// Resolves a product code from candidate fields (priority order): first
/// value containing both a letter and a digit, else first value that is not
/// a slab/pricing placeholder, else empty.
fn resolve_product_code(fields: &[&Option<Value>]) -> String {
    let candidates: Vec<String> = fields
        .iter()
        .filter_map(|f| f.as_ref())
        .filter_map(value_to_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    for c in &candidates {
        if c.chars().any(|ch| ch.is_ascii_alphabetic()) && c.chars().any(|ch| ch.is_ascii_digit()) {
            return c.clone();
        }
    }

    for c in &candidates {
        let low = c.to_lowercase();
        if PLACEHOLDER_CODES.contains(&low.as_str()) || low.starts_with("slab") {
            continue;
        }
        return c.clone();
    }

    String::new()
}

/// Slab-priced specifications must always carry both price markers so the
/// merged text tokenizes consistently across records.
fn pad_slab_specification(spec: &mut String) {
    if !spec.contains("SLABS") {
        return;
    }
    if !spec.contains("kit_price") {
        spec.push_str(" kit_price: -");
    }
    if !spec.contains("test_price") {
        spec.push_str(" test_price: -");
    }
}

fn coerce_index(v: &Value) -> Option<usize> {
    match v {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
