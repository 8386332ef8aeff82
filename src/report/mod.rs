//! Reporting
//!
//! Presentation of validation results: engine-rendered messages, inline
//! annotated documents and diagnostic log lines.

pub mod logger;
pub mod messages;

pub use logger::{error_line, report, Channel, DiagnosticSink, LogSink, RecordingSink};
pub use messages::{render_inline_annotated_document, render_message};
