//! Severity levels for diagnostic messages.
//!
//! Levels are ordered by actionability: an error demands a fix, a warning
//! should be looked at, a notice is informational. `Error` is the greatest
//! value so that threshold comparisons read naturally.

use crate::error::{CmlintError, Result};

/// Severity level of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational notice, does not affect the exit status.
    Notice,
    /// Warning that should be addressed.
    Warning,
    /// Error that fails the check.
    Error,
}

impl Severity {
    /// All levels, most actionable first.
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Notice];

    /// Human-readable label used in text and structured output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
        }
    }

    /// Map a `-W` command line level (0-2) to the corresponding threshold.
    ///
    /// `-W0` shows errors only, `-W1` adds warnings, `-W2` adds notices.
    pub fn from_cli_level(level: i64) -> Result<Self> {
        match level {
            0 => Ok(Severity::Error),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Notice),
            other => Err(CmlintError::InvalidSeverityLevel { level: other }),
        }
    }

    /// The `-W` level that would make this severity visible.
    pub fn cli_level(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Notice => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
