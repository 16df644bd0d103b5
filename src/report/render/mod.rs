//! Output renderers.
//!
//! A renderer is a format-specific accumulator bound to one package and
//! one sink. It receives the package's categorized messages through
//! [`Render::add_error`], [`Render::add_failure`] and
//! [`Render::add_skipped`], then serializes everything with
//! [`Render::write`], which consumes the renderer so it can only happen
//! once.

pub mod json;
pub mod text;
pub mod xml;

use std::str::FromStr;

use crate::error::{CmlintError, Result};
use crate::report::message::Message;

pub use json::JsonRenderer;
pub use text::TextRenderer;
pub use xml::XmlRenderer;

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Human-readable text with long-form explanations.
    Explained,
    /// JUnit-style XML for CI ingestion.
    Xml,
    /// Machine-readable JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CmlintError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "explained" => Ok(OutputFormat::Explained),
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            other => Err(CmlintError::UnknownFormat { name: other.into() }),
        }
    }
}

/// Sink-agnostic rendering contract shared by all format variants.
pub trait Render {
    /// Accumulate a message from the errors bucket.
    fn add_error(&mut self, msg: &Message);

    /// Accumulate a message from the failures bucket.
    fn add_failure(&mut self, msg: &Message);

    /// Accumulate a message from the skipped bucket.
    fn add_skipped(&mut self, msg: &Message);

    /// Serialize the accumulated report to the sink. Consumes the
    /// renderer, so a report can be written at most once.
    fn write(self: Box<Self>) -> Result<()>;
}

/// Per-renderer running counts.
///
/// Each renderer instance keeps its own counts rather than sharing them,
/// so every output stays self-consistent on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Messages in the errors bucket.
    pub errors: usize,
    /// Messages in the failures bucket.
    pub failures: usize,
    /// Messages in the skipped bucket.
    pub skipped: usize,
}

impl Counts {
    /// Errors plus failures; skipped entries are not issues.
    pub fn total_issues(&self) -> usize {
        self.errors + self.failures
    }

    /// 1 when the package has no issues, else 0.
    pub fn successes(&self) -> usize {
        usize::from(self.total_issues() == 0)
    }

    /// The `tests` attribute of the structured formats: every bucket entry
    /// plus the synthetic success entry when there are no issues.
    pub fn tests(&self) -> usize {
        self.total_issues() + self.skipped + self.successes()
    }
}

/// The record name used by the structured formats:
/// `<package>:<file>(<line>)`, `<package>:<file>`, or just `<package>`.
pub fn case_name(package: &str, msg: &Message) -> String {
    match (msg.file(), msg.line()) {
        (Some(file), Some(line)) => format!("{}:{}({})", package, file.display(), line),
        (Some(file), None) => format!("{}:{}", package, file.display()),
        (None, _) => package.to_string(),
    }
}
