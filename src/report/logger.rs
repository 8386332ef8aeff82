//! Result Logging
//!
//! Turns a validation result into line-oriented diagnostics on three channels.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::messages::render_message;
use crate::classify::strip_fragment;
use crate::engine::Engine;
use crate::error::Result;
use crate::validation::{ValidationError, ValidationResult};

/// Success line, including the publishing checklist reminder
pub const SUCCESS_LINE: &str = "AMP validation successful. Review our 'publishing checklist' to \
     ensure successful AMP document distribution. See https://go.amp.dev/publishing-checklist";

pub const UNKNOWN_STATUS_LINE: &str = "AMP validation had unknown results. This indicates a \
     validator bug. Please report at https://github.com/ampproject/amphtml/issues .";

pub const ERRORS_HEADER: &str = "AMP validation had errors:";

pub const WARNINGS_HEADER: &str = "AMP validation had warnings:";

/// Web validator address; the encoded source URL is appended
pub const DIAGNOSTIC_TOOL_URL: &str = "https://validator.amp.dev/#url=";

/// Diagnostic channel a line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Info,
    Warning,
    Error,
}

/// Destination for report lines
pub trait DiagnosticSink {
    fn emit(&mut self, channel: Channel, line: &str);

    fn info(&mut self, line: &str) {
        self.emit(Channel::Info, line);
    }

    fn warn(&mut self, line: &str) {
        self.emit(Channel::Warning, line);
    }

    fn error(&mut self, line: &str) {
        self.emit(Channel::Error, line);
    }
}

/// Writes report lines through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, channel: Channel, line: &str) {
        match channel {
            Channel::Info => log::info!("{}", line),
            Channel::Warning => log::warn!("{}", line),
            Channel::Error => log::error!("{}", line),
        }
    }
}

/// Keeps report lines in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    lines: Vec<(Channel, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line in emission order
    pub fn lines(&self) -> &[(Channel, String)] {
        &self.lines
    }

    /// Lines written to one channel, in emission order
    pub fn on(&self, channel: Channel) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, channel: Channel, line: &str) {
        self.lines.push((channel, line.to_string()));
    }
}

/// Write `result` to `sink`, attributing findings to `source`.
///
/// Every message is rendered before anything is written, so a rendering
/// failure leaves the sink untouched.
pub fn report<E, S>(engine: &E, result: &ValidationResult, source: &str, sink: &mut S) -> Result<()>
where
    E: Engine + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let lines = result
        .errors()
        .iter()
        .map(|error| -> Result<(bool, String)> {
            let message = render_message(engine, error)?;
            Ok((error.is_error(), error_line(source, error, &message)))
        })
        .collect::<Result<Vec<_>>>()?;

    match result.status() {
        "PASS" => {
            sink.info(SUCCESS_LINE);
            if lines.is_empty() {
                return Ok(());
            }
        }
        "FAIL" => {}
        // An unknown status is reported, then handled like FAIL below.
        _ => sink.error(UNKNOWN_STATUS_LINE),
    }

    if result.is_fail() {
        sink.error(ERRORS_HEADER);
    } else {
        sink.info(WARNINGS_HEADER);
    }

    for (is_error, line) in &lines {
        if *is_error {
            sink.error(line);
        } else {
            sink.warn(line);
        }
    }

    if !lines.is_empty() {
        sink.info(&see_also_line(source));
    }

    Ok(())
}

/// `<source>:<line>:<col> <message>`, plus ` (see <spec url>)` when known.
///
/// Missing positions default to line 1, column 0.
pub fn error_line(source: &str, error: &ValidationError, message: &str) -> String {
    let mut line = format!(
        "{}:{}:{} {}",
        strip_fragment(source),
        error.line().unwrap_or(1),
        error.col().unwrap_or(0),
        message
    );
    if let Some(spec_url) = error.spec_url() {
        line.push_str(&format!(" (see {})", spec_url));
    }
    line
}

/// Characters left as-is when a URL is embedded as one query component
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn see_also_line(source: &str) -> String {
    let encoded = utf8_percent_encode(strip_fragment(source), URI_COMPONENT);
    format!("See also {}{}", DIAGNOSTIC_TOOL_URL, encoded)
}
