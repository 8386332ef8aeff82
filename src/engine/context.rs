//! Validator Context
//!
//! Owns the engine handle and its lifecycle: `Uninitialized` until the first
//! load completes, `Ready` afterwards. Every operation that touches the engine
//! goes through here.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, OnceCell};

use super::EngineLoader;
use crate::config::Config;
use crate::error::{BoxError, Result, SharedError, ValidatorError};
use crate::report::{self, DiagnosticSink};
use crate::validation::{self, ValidationError, ValidationResult};

/// Lifecycle state of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Ready,
}

/// Engine handle plus the configuration used to call it.
///
/// The engine is loaded at most once. Callers that race on `init()` before
/// the load finishes all await the same in-flight load, and share its error
/// if it fails.
pub struct ValidatorContext<L: EngineLoader> {
    loader: L,
    engine: OnceCell<L::Engine>,
    /// Held for the duration of a load attempt; keeps the last failure
    load_attempt: Mutex<Option<SharedError>>,
    failed_loads: AtomicU64,
    config: Config,
}

impl<L: EngineLoader> ValidatorContext<L> {
    pub fn new(loader: L) -> Self {
        Self::with_config(loader, Config::default())
    }

    pub fn with_config(loader: L, config: Config) -> Self {
        Self {
            loader,
            engine: OnceCell::new(),
            load_attempt: Mutex::new(None),
            failed_loads: AtomicU64::new(0),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        if self.engine.initialized() {
            EngineState::Ready
        } else {
            EngineState::Uninitialized
        }
    }

    /// Load the engine if it is not loaded yet.
    ///
    /// A failed load leaves the context uninitialized. Callers that were
    /// already waiting on that load get its error; a call made after the
    /// failure tries again.
    pub async fn init(&self) -> Result<&L::Engine> {
        if let Some(engine) = self.engine.get() {
            return Ok(engine);
        }

        let failed_before = self.failed_loads.load(Ordering::Acquire);
        let mut last_failure = self.load_attempt.lock().await;

        if let Some(engine) = self.engine.get() {
            return Ok(engine);
        }
        // The attempt we queued behind has failed
        if self.failed_loads.load(Ordering::Acquire) != failed_before {
            if let Some(source) = last_failure.as_ref() {
                return Err(ValidatorError::EngineLoad(source.clone()));
            }
        }

        log::debug!("Loading validation engine");
        match self.loader.load().await {
            Ok(engine) => {
                log::debug!("Validation engine ready");
                *last_failure = None;
                Ok(self.engine.get_or_init(|| async move { engine }).await)
            }
            Err(e) => {
                log::warn!("Validation engine failed to load: {:#}", e);
                let source: SharedError = BoxError::from(e).into();
                *last_failure = Some(source.clone());
                self.failed_loads.fetch_add(1, Ordering::AcqRel);
                Err(ValidatorError::EngineLoad(source))
            }
        }
    }

    /// The loaded engine, or `EngineUninitialized`
    pub fn engine(&self) -> Result<&L::Engine> {
        self.engine.get().ok_or(ValidatorError::EngineUninitialized)
    }

    /// Validate `text`, loading the engine first if needed.
    ///
    /// Without a hint the configured default format is used.
    pub async fn validate_document_text(
        &self,
        text: &str,
        format_hint: Option<&str>,
    ) -> Result<ValidationResult> {
        self.init().await?;
        self.validate_loaded(text, format_hint)
    }

    /// Validate `text` with an engine that must already be loaded
    pub fn validate_loaded(&self, text: &str, format_hint: Option<&str>) -> Result<ValidationResult> {
        let engine = self.engine()?;
        let format = format_hint.unwrap_or(self.config.default_format.as_str());
        validation::validate(engine, text, format, self.config.max_errors)
    }

    pub fn render_message(&self, error: &ValidationError) -> Result<String> {
        report::render_message(self.engine()?, error)
    }

    pub fn render_inline_annotated_document(
        &self,
        result: &ValidationResult,
        filename: &str,
        text: &str,
    ) -> Result<String> {
        report::render_inline_annotated_document(self.engine()?, result, filename, text)
    }

    /// Write `result` to `sink` as diagnostic lines attributed to `source_label`
    pub fn report<S: DiagnosticSink + ?Sized>(
        &self,
        result: &ValidationResult,
        source_label: &str,
        sink: &mut S,
    ) -> Result<()> {
        report::report(self.engine()?, result, source_label, sink)
    }
}

impl<L: EngineLoader> std::fmt::Debug for ValidatorContext<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorContext")
            .field("state", &self.state())
            .field("config", &self.config)
            .finish()
    }
}
