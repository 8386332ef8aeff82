//! Result Marshalling
//!
//! Converts between the engine's wire records and the plain records in
//! [`super::result`]. The mapping is spelled out field by field in both
//! directions; a field added to the wire schema has to be handled here before
//! the crate compiles again.

use prost::Message;

use super::result::{ValidationError, ValidationResult};
use crate::codec::enums::{EnumTable, CODE, NOT_FOUND, SEVERITY, STATUS};
use crate::codec::wire::{WireValidationError, WireValidationResult};
use crate::engine::Engine;
use crate::error::{Result, ValidatorError};

/// Format used when the caller gives none
pub const DEFAULT_FORMAT: &str = "AMP";

/// Wire default for an absent `ValidationError.severity` (`ERROR`)
const DEFAULT_SEVERITY: i32 = 1;

/// Run the engine over `document` and marshal its answer.
///
/// The format hint is upper-cased before it reaches the engine.
pub fn validate<E: Engine + ?Sized>(
    engine: &E,
    document: &str,
    format_hint: &str,
    max_errors: i32,
) -> Result<ValidationResult> {
    let format = format_hint.to_uppercase();
    log::debug!(
        "Validating {} bytes as {} (max_errors={})",
        document.len(),
        format,
        max_errors
    );

    let bytes = engine
        .validate(document, &format, max_errors)
        .map_err(|e| ValidatorError::engine("validate", e))?;

    ValidationResult::from_wire_bytes(bytes)
}

impl ValidationResult {
    /// Decode an encoded `ValidationResult` into a plain record.
    ///
    /// The bytes become the result's wire payload unchanged.
    pub fn from_wire_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        let wire = WireValidationResult::decode(bytes.as_slice())?;

        let status = name_or_not_found(&STATUS, "status", wire.status.unwrap_or(0));
        let errors = wire.errors.iter().map(plain_error).collect();

        Ok(ValidationResult::new(status, errors, bytes))
    }
}

/// Build the plain record for one wire error.
///
/// The error is re-encoded on its own so its payload does not depend on the
/// containing result.
fn plain_error(wire: &WireValidationError) -> ValidationError {
    let WireValidationError {
        code,
        line,
        col,
        spec_url,
        severity,
        params,
        data_amp_report_test_value: _,
    } = wire;

    ValidationError::new(
        name_or_not_found(&SEVERITY, "severity", severity.unwrap_or(DEFAULT_SEVERITY)),
        name_or_not_found(&CODE, "code", code.unwrap_or(0)),
        params.clone(),
        *line,
        *col,
        spec_url.clone(),
        wire.encode_to_vec(),
    )
}

fn name_or_not_found(table: &EnumTable, kind: &str, number: i32) -> String {
    match table.name_of(number) {
        Some(name) => name.to_string(),
        None => {
            log::warn!(
                "Engine reported unknown {} number {}; its schema may not match this crate",
                kind,
                number
            );
            NOT_FOUND.to_string()
        }
    }
}

/// Map a plain error back to numeric codes.
///
/// Needs no engine. Names missing from the tables (including `NOT_FOUND`)
/// become absent fields.
pub fn to_wire_record(error: &ValidationError) -> WireValidationError {
    WireValidationError {
        code: CODE.number_of(error.code()),
        line: error.line(),
        col: error.col(),
        spec_url: error.spec_url().map(str::to_string),
        severity: SEVERITY.number_of(error.severity()),
        params: error.params().to_vec(),
        data_amp_report_test_value: None,
    }
}
