use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncoderError {
    #[error("encoder request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("encoder returned a malformed response: {reason}")]
    BadResponse { reason: String },

    #[error("encoder returned {got} vectors for {expected} texts")]
    CountMismatch { expected: usize, got: usize },

    #[error("embedding dimension mismatch: encoder produced {got}, matrix expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}
