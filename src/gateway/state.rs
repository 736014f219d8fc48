use std::sync::Arc;

use crate::engine::Engine;

/// Shared handler state: the immutable engine plus request defaults.
#[derive(Clone)]
pub struct HandlerState {
    pub engine: Arc<Engine>,
    pub default_top_k: usize,
}

impl HandlerState {
    pub fn new(engine: Arc<Engine>, default_top_k: usize) -> Self {
        Self {
            engine,
            default_top_k,
        }
    }
}
