//! Message Rendering
//!
//! The engine owns the rule metadata behind each message, so rendering always
//! replays the original wire bytes rather than the plain fields.

use crate::engine::Engine;
use crate::error::{Result, ValidatorError};
use crate::validation::{ValidationError, ValidationResult};

/// Human-readable message for one finding
pub fn render_message<E: Engine + ?Sized>(engine: &E, error: &ValidationError) -> Result<String> {
    engine
        .render_error_message(error.wire_payload())
        .map_err(|e| ValidatorError::engine("render_error_message", e))
}

/// Copy of `document` with the engine's inline markers for every finding
pub fn render_inline_annotated_document<E: Engine + ?Sized>(
    engine: &E,
    result: &ValidationResult,
    filename: &str,
    document: &str,
) -> Result<String> {
    engine
        .render_inline_result(result.wire_payload(), filename, document)
        .map_err(|e| ValidatorError::engine("render_inline_result", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::wire::{WireValidationError, WireValidationResult};
    use prost::Message;

    /// Renders straight from the decoded wire bytes it is handed
    struct EchoEngine;

    impl Engine for EchoEngine {
        fn validate(&self, _: &str, _: &str, _: i32) -> anyhow::Result<Vec<u8>> {
            anyhow::bail!("not used")
        }

        fn render_error_message(&self, error_bytes: &[u8]) -> anyhow::Result<String> {
            let error = WireValidationError::decode(error_bytes)?;
            Ok(format!("code {} with {}", error.code.unwrap_or_default(), error.params.join(",")))
        }

        fn render_inline_result(
            &self,
            result_bytes: &[u8],
            filename: &str,
            document: &str,
        ) -> anyhow::Result<String> {
            let result = WireValidationResult::decode(result_bytes)?;
            Ok(format!(
                "{filename}\n{document}\n>> {} finding(s)",
                result.errors.len()
            ))
        }
    }

    fn sample_result() -> ValidationResult {
        let wire = WireValidationResult {
            status: Some(2),
            errors: vec![WireValidationError {
                code: Some(2),
                severity: Some(1),
                params: vec!["script".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        ValidationResult::from_wire_bytes(wire.encode_to_vec()).unwrap()
    }

    #[test]
    fn test_render_message_uses_error_payload() {
        let result = sample_result();
        let message = render_message(&EchoEngine, &result.errors()[0]).unwrap();
        assert_eq!(message, "code 2 with script");
    }

    #[test]
    fn test_render_inline_uses_result_payload() {
        let result = sample_result();
        let annotated =
            render_inline_annotated_document(&EchoEngine, &result, "index.html", "<html>").unwrap();
        assert_eq!(annotated, "index.html\n<html>\n>> 1 finding(s)");
    }

    #[test]
    fn test_engine_failure_is_wrapped() {
        struct BrokenEngine;

        impl Engine for BrokenEngine {
            fn validate(&self, _: &str, _: &str, _: i32) -> anyhow::Result<Vec<u8>> {
                anyhow::bail!("not used")
            }

            fn render_error_message(&self, _: &[u8]) -> anyhow::Result<String> {
                anyhow::bail!("out of memory")
            }

            fn render_inline_result(&self, _: &[u8], _: &str, _: &str) -> anyhow::Result<String> {
                anyhow::bail!("out of memory")
            }
        }

        let result = sample_result();
        let err = render_message(&BrokenEngine, &result.errors()[0]).unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::Engine {
                operation: "render_error_message",
                ..
            }
        ));
    }
}
