//! Validation Engine
//!
//! The engine itself is external. This module defines the seams it is reached
//! through and the context that owns its single, lazily loaded instance.

pub mod context;

use std::future::Future;

use anyhow::Result;

pub use context::{EngineState, ValidatorContext};

/// Passed as `max_errors` to ask the engine for every finding
pub const UNLIMITED_ERRORS: i32 = -1;

/// Binary call interface of a loaded validation engine.
///
/// Results and errors cross this boundary only as encoded wire records.
pub trait Engine: Send + Sync {
    /// Validate `document` as `format`, returning an encoded `ValidationResult`
    fn validate(&self, document: &str, format: &str, max_errors: i32) -> Result<Vec<u8>>;

    /// Render the message for one encoded `ValidationError`
    fn render_error_message(&self, error_bytes: &[u8]) -> Result<String>;

    /// Annotate `document` with the findings of an encoded `ValidationResult`
    fn render_inline_result(
        &self,
        result_bytes: &[u8],
        filename: &str,
        document: &str,
    ) -> Result<String>;
}

/// Produces the engine, typically by loading a compiled module
pub trait EngineLoader: Send + Sync {
    type Engine: Engine;

    fn load(&self) -> impl Future<Output = Result<Self::Engine>> + Send;
}
