//! cmlint - CMake package linter with CI-friendly reporting.
//!
//! cmlint checks CMake packages (directories with a `CMakeLists.txt`) and
//! reports its findings as human-readable text, explained text, JUnit-style
//! XML for CI ingestion, or JSON, with one shared severity-filtering pass
//! upstream of all output formats.
//!
//! # Modules
//!
//! - [`checks`] - The pluggable check system producing diagnostics
//! - [`cli`] - Command-line interface and argument parsing
//! - [`cmake`] - Package model and listfile parsing
//! - [`config`] - Configuration file loading and merging
//! - [`error`] - Error types and result aliases
//! - [`report`] - Severity policy, aggregation, and the output renderers
//!
//! # Example
//!
//! ```
//! use cmlint::report::{Message, Severity, SeverityPolicy, Tally, Verdict};
//!
//! let policy = SeverityPolicy::new(Severity::Warning).strict(true);
//! let mut tally = Tally::new();
//! let msg = Message::new("demo", Severity::Warning, "duplicate_project", "text");
//!
//! // Strict mode promotes the exit status, not the display level.
//! match policy.classify(&msg, &mut tally) {
//!     Verdict::Deliver { level, counts_as_error, .. } => {
//!         assert_eq!(level, Severity::Warning);
//!         assert!(counts_as_error);
//!     }
//!     Verdict::Suppress(_) => unreachable!(),
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod cmake;
pub mod config;
pub mod error;
pub mod report;

pub use error::{CmlintError, Result};
