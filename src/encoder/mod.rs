//! Query encoding collaborator.
//!
//! The engine treats text embedding as an opaque external call: anything
//! implementing [`QueryEncoder`] can supply vectors, as long as they are
//! L2-normalized and match the catalog matrix dimension. Ships with
//! [`RemoteEncoder`] (HTTP sidecar) and [`StubEncoder`] (deterministic
//! hash-derived vectors for tests and encoder-less deployments).

mod error;

pub use error::EncoderError;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Turns texts into embedding vectors, one per input, in order.
///
/// Implementations must be stateless or internally synchronized; the engine
/// issues one blocking call per sub-query and callers are free to pipeline
/// calls across threads.
pub trait QueryEncoder: Send + Sync {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EncoderError>;
}

#[derive(Serialize)]
struct EncodeRequest<'a> {
    texts: &'a [String],
}

#[derive(Deserialize)]
struct EncodeResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Encoder backed by an HTTP sidecar: `POST {url}` with `{"texts": [...]}`
/// returning `{"embeddings": [[...], ...]}`.
pub struct RemoteEncoder {
    client: reqwest::blocking::Client,
    url: String,
}

impl std::fmt::Debug for RemoteEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteEncoder").field("url", &self.url).finish()
    }
}

impl RemoteEncoder {
    /// Creates an encoder for the given endpoint URL.
    ///
    /// Must be constructed outside an async runtime (the blocking client
    /// panics otherwise); the server binary builds it inside
    /// `spawn_blocking`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }
}

impl QueryEncoder for RemoteEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EncoderError> {
        let response: EncodeResponse = self
            .client
            .post(&self.url)
            .json(&EncodeRequest { texts })
            .send()?
            .error_for_status()?
            .json()
            .map_err(|e| EncoderError::BadResponse {
                reason: e.to_string(),
            })?;

        if response.embeddings.len() != texts.len() {
            return Err(EncoderError::CountMismatch {
                expected: texts.len(),
                got: response.embeddings.len(),
            });
        }

        debug!(texts = texts.len(), url = %self.url, "Encoded via remote encoder");

        Ok(response.embeddings)
    }
}

/// Deterministic stand-in encoder: hash-derived unit vectors.
///
/// Identical texts always produce identical vectors, so rankings are stable,
/// but there is no semantic signal. Useful for tests and for deployments
/// where only token/title overlap should drive scoring.
#[derive(Debug, Clone)]
pub struct StubEncoder {
    dim: usize,
}

impl StubEncoder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        // FNV-1a over the bytes seeds a splitmix64 stream per dimension.
        let mut seed: u64 = 0xcbf2_9ce4_8422_2325;
        for b in text.as_bytes() {
            seed ^= u64::from(*b);
            seed = seed.wrapping_mul(0x0000_0100_0000_01b3);
        }

        let mut v: Vec<f32> = (0..self.dim)
            .map(|_| {
                seed = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
                let mut z = seed;
                z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
                z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
                z ^= z >> 31;
                // map to (-1, 1)
                (z as f64 / u64::MAX as f64 * 2.0 - 1.0) as f32
            })
            .collect();

        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        v
    }
}

impl QueryEncoder for StubEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EncoderError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_is_deterministic() {
        let encoder = StubEncoder::new(16);
        let a = encoder.encode(&["hematology analyser".to_string()]).unwrap();
        let b = encoder.encode(&["hematology analyser".to_string()]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn stub_vectors_are_unit_length() {
        let encoder = StubEncoder::new(32);
        let v = &encoder.encode(&["pipette".to_string()]).unwrap()[0];
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn stub_distinguishes_texts() {
        let encoder = StubEncoder::new(32);
        let out = encoder
            .encode(&["suture".to_string(), "microscope".to_string()])
            .unwrap();
        assert_ne!(out[0], out[1]);
    }
}
