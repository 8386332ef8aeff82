//! Plain Validation Records
//!
//! String-keyed views of the engine's wire records. Each record keeps the wire
//! bytes it was built from so rendering can be replayed through the engine
//! later without validating again.

use serde::Serialize;

/// A single finding reported by the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    severity: String,
    code: String,
    params: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    col: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spec_url: Option<String>,
    #[serde(skip)]
    wire_payload: Vec<u8>,
}

impl ValidationError {
    pub(crate) fn new(
        severity: String,
        code: String,
        params: Vec<String>,
        line: Option<i32>,
        col: Option<i32>,
        spec_url: Option<String>,
        wire_payload: Vec<u8>,
    ) -> Self {
        Self {
            severity,
            code,
            params,
            line,
            col,
            spec_url,
            wire_payload,
        }
    }

    /// Severity name, e.g. `ERROR` or `WARNING`
    pub fn severity(&self) -> &str {
        &self.severity
    }

    /// Code name, e.g. `MANDATORY_TAG_MISSING`
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn line(&self) -> Option<i32> {
        self.line
    }

    pub fn col(&self) -> Option<i32> {
        self.col
    }

    pub fn spec_url(&self) -> Option<&str> {
        self.spec_url.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.severity == "ERROR"
    }

    /// This error alone, encoded as a wire `ValidationError`
    pub fn wire_payload(&self) -> &[u8] {
        &self.wire_payload
    }
}

/// The outcome of validating one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    status: String,
    errors: Vec<ValidationError>,
    #[serde(skip)]
    wire_payload: Vec<u8>,
}

impl ValidationResult {
    pub(crate) fn new(status: String, errors: Vec<ValidationError>, wire_payload: Vec<u8>) -> Self {
        Self {
            status,
            errors,
            wire_payload,
        }
    }

    /// Status name: `PASS`, `FAIL`, or anything else the engine reported
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Findings in the order the engine reported them
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn is_pass(&self) -> bool {
        self.status == "PASS"
    }

    pub fn is_fail(&self) -> bool {
        self.status == "FAIL"
    }

    /// The full result exactly as the engine encoded it
    pub fn wire_payload(&self) -> &[u8] {
        &self.wire_payload
    }

    /// JSON rendering of the plain fields; wire payloads are left out
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
