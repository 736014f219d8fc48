use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog index {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid npy file {path}: {reason}")]
    InvalidNpy { path: PathBuf, reason: String },

    #[error("unsupported npy dtype {dtype:?} in {path} (expected little-endian f32)")]
    UnsupportedDtype { path: PathBuf, dtype: String },
}
