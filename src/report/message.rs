//! Diagnostic messages.
//!
//! This module provides the [`Message`] type for representing one finding
//! in a checked package, with optional source location tracking. Messages
//! are immutable once constructed; the reporting pipeline classifies them
//! into buckets but never mutates them.

use std::path::{Path, PathBuf};

use super::severity::Severity;

/// A source location inside a package.
///
/// A line number can only exist together with a file path, so the pair
/// lives in one struct rather than two independent options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// File path, relative to the package root.
    pub file: PathBuf,
    /// Line number (1-indexed), if known.
    pub line: Option<usize>,
}

impl Location {
    /// A location naming a file without a specific line.
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }

    /// A location naming a file and line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }
}

/// A diagnostic message produced by a check.
#[derive(Debug, Clone)]
pub struct Message {
    /// Name of the package this message belongs to.
    pub package: String,
    /// Severity as assigned by the producing check.
    pub level: Severity,
    /// Stable identifier for this class of finding, used for ignore and
    /// override matching.
    pub id: String,
    /// Human-readable description.
    pub text: String,
    /// Optional source location.
    pub location: Option<Location>,
    /// Optional long-form explanation shown by the explained renderer.
    pub explanation: Option<String>,
}

impl Message {
    /// Create a new message without a location.
    pub fn new(
        package: impl Into<String>,
        level: Severity,
        id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            level,
            id: id.into(),
            text: text.into(),
            location: None,
            explanation: None,
        }
    }

    /// Attach a source location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach a long-form explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// The file path of this message, if it has one.
    pub fn file(&self) -> Option<&Path> {
        self.location.as_ref().map(|l| l.file.as_path())
    }

    /// The line number of this message, if it has one.
    pub fn line(&self) -> Option<usize> {
        self.location.as_ref().and_then(|l| l.line)
    }

    /// Sort key giving a stable presentation order within one package:
    /// located messages ordered by file and line, unlocated ones first.
    pub fn order_key(&self) -> (Option<(&Path, usize)>, &str) {
        (
            self.location
                .as_ref()
                .map(|l| (l.file.as_path(), l.line.unwrap_or(0))),
            self.id.as_str(),
        )
    }
}
