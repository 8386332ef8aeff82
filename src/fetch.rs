//! Document Fetching
//!
//! Fetching is a seam: anything implementing [`Fetcher`] can supply the
//! document for URL validation. [`HttpFetcher`] does it over HTTP.

use std::future::Future;

use anyhow::Context;

use crate::classify::{is_known_cache_url, select_format_from_url};
use crate::engine::{EngineLoader, ValidatorContext};
use crate::error::{Result, ValidatorError};
use crate::report::DiagnosticSink;
use crate::validation::ValidationResult;

/// Status and body of a fetched document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// Retrieves a document by URL
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = anyhow::Result<FetchResponse>> + Send;
}

/// `reqwest`-backed fetcher
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<FetchResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        Ok(FetchResponse { status, body })
    }
}

impl<L: EngineLoader> ValidatorContext<L> {
    /// Fetch `url`, validate the body and report the outcome to `sink`.
    ///
    /// The fetch and the engine load run concurrently and both run to
    /// completion; both must succeed.
    /// Cache URLs are rejected before anything is fetched, and any status
    /// other than 200 is a failure. The format comes from the URL fragment.
    pub async fn validate_url_and_report<F, S>(
        &self,
        fetcher: &F,
        url: &str,
        sink: &mut S,
    ) -> Result<ValidationResult>
    where
        F: Fetcher,
        S: DiagnosticSink + ?Sized,
    {
        if is_known_cache_url(url) {
            return Err(ValidatorError::KnownCacheUrl(url.to_string()));
        }

        let fetch = async {
            fetcher.fetch(url).await.map_err(|e| ValidatorError::Fetch {
                url: url.to_string(),
                source: e.into(),
            })
        };
        // The load is not cancelled by a failed fetch; it finishes either way.
        let (fetched, loaded) = tokio::join!(fetch, self.init());
        let response = fetched?;
        loaded?;

        if response.status != 200 {
            return Err(ValidatorError::FetchStatus {
                url: url.to_string(),
                status: response.status,
            });
        }

        let format = select_format_from_url(url);
        log::debug!("Fetched {} ({} bytes), validating as {}", url, response.body.len(), format);

        let result = self.validate_loaded(&response.body, Some(format.as_str()))?;
        self.report(&result, url, sink)?;
        Ok(result)
    }
}
