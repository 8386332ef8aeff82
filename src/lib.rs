//! AMP Validator Bridge
//!
//! Marshalling and reporting around an external AMP validation engine.
//!
//! This library provides:
//! - Plain, string-keyed validation records built from the engine's wire bytes
//! - Message rendering and inline annotation replayed through the engine
//! - Diagnostic reporting of validation outcomes
//! - URL helpers for cache detection and format hints
//! - A context that loads the engine exactly once

pub mod classify;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod report;
pub mod validation;

// Re-exports for the public API
pub use classify::{is_known_cache_url, select_format_from_url, CACHE_DOMAIN};
pub use config::Config;
pub use engine::{Engine, EngineLoader, EngineState, ValidatorContext};
pub use error::{Result, ValidatorError};
pub use fetch::{FetchResponse, Fetcher, HttpFetcher};
pub use report::{Channel, DiagnosticSink, LogSink, RecordingSink};
pub use validation::{to_wire_record, ValidationError, ValidationResult};
