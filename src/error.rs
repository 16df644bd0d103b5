//! Error types for cmlint operations.
//!
//! This module defines [`CmlintError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CmlintError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CmlintError::Other`) for unexpected errors
//! - Configuration errors abort before any package is checked; I/O errors
//!   during rendering propagate to the caller and are never retried

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cmlint operations.
#[derive(Debug, Error)]
pub enum CmlintError {
    /// A path given on the command line is not a checkable package.
    #[error("Not a package (no CMakeLists.txt): {path}")]
    PackageNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration selected an output format this tool does not provide.
    #[error("Unknown output format: {name}")]
    UnknownFormat { name: String },

    /// Configuration selected a color mode this tool does not provide.
    #[error("Unknown color mode: {name} (expected never, always, or auto)")]
    UnknownColor { name: String },

    /// Configuration selected a severity level outside the valid range.
    #[error("Invalid severity level: {level} (expected 0-2)")]
    InvalidSeverityLevel { level: i64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, CmlintError>;
