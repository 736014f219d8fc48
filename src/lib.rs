//! Tendrel library crate (used by the CLI/server binary and integration
//! tests).
//!
//! Scores free-text procurement requirements against a product catalog.
//! An input query is split into sub-queries, each sub-query is routed to a
//! category, scored against the catalog, and summarized into a single
//! response.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Process configuration
//! - [`Catalog`], [`CatalogItem`], [`EmbeddingMatrix`] - Catalog data
//! - [`Engine`] - Query scoring pipeline
//!
//! ## Scoring
//! - [`ScoreFusionEngine`], [`FusionWeights`] - Multi-signal score fusion
//! - [`CandidateMatch`], [`QueryResult`], [`MultiQueryResponse`] - Results
//!
//! ## Routing
//! - [`CategoryDetector`], [`RuleSet`] - Keyword-based category routing
//! - [`SpecializedScorer`], [`ScorerRegistry`] - Per-category scorer plugins
//!
//! ## Encoding
//! - [`QueryEncoder`] - Embedding backend trait
//! - [`RemoteEncoder`], [`StubEncoder`] - HTTP and deterministic backends

pub mod catalog;
pub mod category;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod engine;
pub mod gateway;
pub mod report;
pub mod scoring;
pub mod segment;
pub mod text;

pub use catalog::{Catalog, CatalogError, CatalogItem, EmbeddingMatrix};
pub use category::{CategoryDetector, CategoryError, CategoryRule, RuleSet};
pub use config::{Config, ConfigError};
pub use encoder::{EncoderError, QueryEncoder, RemoteEncoder, StubEncoder};
pub use engine::{
    Engine, EngineError, RawScorerResult, ScorerError, ScorerRegistry, SpecializedScorer,
};
pub use gateway::{HandlerState, create_router_with_state};
pub use scoring::{
    CandidateMatch, FusionWeights, MultiQueryResponse, QueryResult, ScoreFusionEngine, Summary,
};
