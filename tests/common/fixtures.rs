//! Shared fixtures: a small laboratory-supply catalog scored by the
//! deterministic stub encoder. A 64-dimension stub keeps cross-item cosine
//! noise small enough that overlap signals dominate the rankings.

use std::sync::Arc;

use tendrel::catalog::{Catalog, CatalogItem, EmbeddingMatrix};
use tendrel::category::CategoryDetector;
use tendrel::encoder::{QueryEncoder, StubEncoder};
use tendrel::engine::{Engine, ScorerRegistry};

pub const DIM: usize = 64;

fn item(
    index: usize,
    code: &str,
    title: &str,
    item_type: &str,
    category: &str,
    spec: &str,
) -> CatalogItem {
    CatalogItem {
        index,
        product_code: code.to_string(),
        title: title.to_string(),
        item_type: item_type.to_string(),
        category: category.to_string(),
        specification: spec.to_string(),
        merged_text: format!("{title} {spec}"),
    }
}

pub fn lab_catalog() -> Catalog {
    Catalog::from_items(vec![
        item(
            0,
            "MP-100",
            "Micropipette variable volume 10-100ul",
            "Pipettes",
            "Pipettes",
            "Single channel autoclavable micropipette with tip ejector",
        ),
        item(
            1,
            "EL-210",
            "Elisa microplate washer",
            "Elisa Equipment",
            "Elisa",
            "8 channel washer for 96 well microplates",
        ),
        item(
            2,
            "HA-550",
            "5 part hematology analyser",
            "Analyser",
            "Analyser",
            "Fully automated 5 part differential cell counter",
        ),
        item(
            3,
            "MS-HIV",
            "Meriscreen HIV rapid test",
            "Rapid Test",
            "Meriscreen",
            "Card test for HIV 1 and 2 antibodies",
        ),
        item(
            4,
            "TB-900",
            "Turbidimetry protein analyser",
            "Turbidimetry",
            "Turbidimetry",
            "Specific protein analysis by turbidimetric method",
        ),
    ])
}

/// Embedding rows derived from each item's merged text, so stub-encoded
/// queries that repeat an item's wording get a high cosine score.
pub fn matrix_for(catalog: &Catalog) -> EmbeddingMatrix {
    let encoder = StubEncoder::new(DIM);
    let texts: Vec<String> = catalog
        .iter()
        .map(|item| item.merged_text.clone())
        .collect();
    let rows = encoder.encode(&texts).expect("stub encoding is infallible");
    EmbeddingMatrix::from_rows(rows)
}

pub fn lab_engine() -> Engine {
    let catalog = lab_catalog();
    let matrix = matrix_for(&catalog);
    Engine::new(
        catalog,
        matrix,
        Arc::new(StubEncoder::new(DIM)),
        CategoryDetector::default(),
        ScorerRegistry::default(),
    )
    .expect("fixture catalog and matrix agree")
}
