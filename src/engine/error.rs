use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("catalog has {items} items but the embedding matrix has {rows} rows")]
    CatalogMatrixMismatch { items: usize, rows: usize },
}
