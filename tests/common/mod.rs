//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use amp_validator_bridge::codec::wire::{WireValidationError, WireValidationResult};
use amp_validator_bridge::codec::CODE;
use amp_validator_bridge::{Engine, EngineLoader, FetchResponse, Fetcher, ValidationResult};
use prost::Message;

/// Engine that answers every validation with canned bytes and renders
/// messages from the error payload it is given
#[derive(Debug, Default)]
pub struct FakeEngine {
    reply: Vec<u8>,
    pub calls: Mutex<Vec<(String, String, i32)>>,
}

impl FakeEngine {
    pub fn replying(reply: Vec<u8>) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl Engine for FakeEngine {
    fn validate(&self, document: &str, format: &str, max_errors: i32) -> anyhow::Result<Vec<u8>> {
        self.calls
            .lock()
            .unwrap()
            .push((document.to_string(), format.to_string(), max_errors));
        Ok(self.reply.clone())
    }

    fn render_error_message(&self, error_bytes: &[u8]) -> anyhow::Result<String> {
        Ok(message_for(&WireValidationError::decode(error_bytes)?))
    }

    fn render_inline_result(
        &self,
        result_bytes: &[u8],
        filename: &str,
        document: &str,
    ) -> anyhow::Result<String> {
        let result = WireValidationResult::decode(result_bytes)?;
        let mut out = format!("{filename}\n");
        for (i, line) in document.lines().enumerate() {
            out.push_str(line);
            out.push('\n');
            for error in &result.errors {
                if error.line.unwrap_or(1) as usize == i + 1 {
                    out.push_str(&format!(">> ^~~ {}\n", message_for(error)));
                }
            }
        }
        Ok(out)
    }
}

/// What `FakeEngine` renders for an error
pub fn message_for(error: &WireValidationError) -> String {
    let code = CODE.name_of(error.code.unwrap_or(0)).unwrap_or("?");
    format!("{} [{}]", code, error.params.join(", "))
}

/// Loader that counts its loads and takes a while to finish
#[derive(Debug, Clone)]
pub struct CountingLoader {
    pub loads: Arc<AtomicUsize>,
    reply: Vec<u8>,
    delay: Duration,
    fail: bool,
}

impl CountingLoader {
    pub fn new(reply: Vec<u8>) -> Self {
        Self {
            loads: Arc::new(AtomicUsize::new(0)),
            reply,
            delay: Duration::from_millis(20),
            fail: false,
        }
    }

    /// Loader whose every load fails after the usual delay
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl EngineLoader for CountingLoader {
    type Engine = FakeEngine;

    async fn load(&self) -> anyhow::Result<FakeEngine> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail {
            anyhow::bail!("validator module missing");
        }
        Ok(FakeEngine::replying(self.reply.clone()))
    }
}

/// Fetcher serving one canned response and counting requests
#[derive(Debug, Default)]
pub struct FakeFetcher {
    pub status: u16,
    pub body: String,
    pub requests: AtomicUsize,
    fail: bool,
}

impl FakeFetcher {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Fetcher whose requests fail before any response arrives
    pub fn unreachable() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Fetcher for FakeFetcher {
    async fn fetch(&self, _url: &str) -> anyhow::Result<FetchResponse> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(FetchResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub fn wire_error(
    severity: &str,
    code: i32,
    line: Option<i32>,
    col: Option<i32>,
    spec_url: Option<&str>,
) -> WireValidationError {
    let severity = match severity {
        "ERROR" => 1,
        "WARNING" => 4,
        other => panic!("unexpected severity {other}"),
    };
    WireValidationError {
        code: Some(code),
        line,
        col,
        spec_url: spec_url.map(str::to_string),
        severity: Some(severity),
        params: vec!["amp-img".to_string()],
        data_amp_report_test_value: None,
    }
}

pub fn wire_result(status: i32, errors: Vec<WireValidationError>) -> Vec<u8> {
    WireValidationResult {
        status: Some(status),
        errors,
        ..Default::default()
    }
    .encode_to_vec()
}

pub fn plain_result(status: i32, errors: Vec<WireValidationError>) -> ValidationResult {
    ValidationResult::from_wire_bytes(wire_result(status, errors)).expect("decode result")
}
