//! Report Output - Encodings of a Decision
//!
//! One TriggerReport, three textual forms. The JSON arrays embedded in the
//! key-value and shell forms are the same strings carried in the JSON record.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;
use thiserror::Error;

use crate::resolver::WorkflowDecision;
use crate::targets::{Platform, ValidationFormat};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Output encoding selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON record
    Json,
    /// `key=value` lines for a GitHub Actions step output
    Github,
    /// `NAME='value'` shell assignments
    Shell,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Github
    }
}

/// Everything the CLI reports about one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerReport {
    pub should_run: bool,
    pub platforms: Vec<Platform>,
    pub platforms_json: String,
    pub validation_formats: Vec<ValidationFormat>,
    pub validation_formats_json: String,
    /// Event name as received, before normalization
    pub event_name: String,
    pub commit_message: String,
    pub trigger_reason: String,
}

impl TriggerReport {
    pub fn new(
        event_name: &str,
        commit_message: &str,
        decision: &WorkflowDecision,
    ) -> Result<Self, ReportError> {
        Ok(Self {
            should_run: decision.should_run(),
            platforms: decision.platforms().to_vec(),
            platforms_json: spaced_json(decision.platforms())?,
            validation_formats: decision.validation_formats().to_vec(),
            validation_formats_json: spaced_json(decision.validation_formats())?,
            event_name: event_name.to_string(),
            commit_message: commit_message.to_string(),
            trigger_reason: decision.trigger_reason().to_string(),
        })
    }

    /// 0 when the pipeline should run, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.should_run { 0 } else { 1 }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Github => Ok(self.render_github()),
            OutputFormat::Shell => Ok(self.render_shell()),
        }
    }

    fn render_github(&self) -> String {
        [
            format!("should-run={}", self.should_run),
            format!("platforms={}", self.platforms_json),
            format!("validation-formats={}", self.validation_formats_json),
            format!("trigger-reason={}", self.trigger_reason),
        ]
        .join("\n")
    }

    fn render_shell(&self) -> String {
        [
            format!("SHOULD_RUN={}", self.should_run),
            format!("PLATFORMS={}", shell_quote(&self.platforms_json)),
            format!("VALIDATION_FORMATS={}", shell_quote(&self.validation_formats_json)),
            format!("TRIGGER_REASON={}", shell_quote(&self.trigger_reason)),
        ]
        .join("\n")
    }
}

/// Single-line JSON with `", "` and `": "` separators, the layout workflow
/// steps already compare against (`["linux", "windows"]`).
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn spaced_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Single-quote for POSIX sh. Embedded quotes become `'\''`.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
