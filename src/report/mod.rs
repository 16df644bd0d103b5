//! Diagnostic aggregation and multi-format reporting.
//!
//! This module is the reporting pipeline for one checked package:
//!
//! - **Messages** - Immutable findings produced by checks ([`Message`])
//! - **Policy** - Severity filtering, overrides, ignore handling, and
//!   strict-mode promotion, applied once upstream of all renderers
//!   ([`SeverityPolicy`])
//! - **Unit reports** - Per-package bucket aggregation ([`UnitReport`])
//! - **Renderers** - Text, explained text, JUnit XML, and JSON output
//!   ([`Render`] and its implementations)
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use cmlint::report::{
//!     Message, Severity, SeverityPolicy, Tally, TextRenderer, UnitReport, Verdict,
//! };
//!
//! let policy = SeverityPolicy::new(Severity::Warning);
//! let mut tally = Tally::new();
//! let mut report = UnitReport::new("demo", Duration::from_millis(2));
//!
//! let msg = Message::new("demo", Severity::Error, "missing_project", "no project() call");
//! if let Verdict::Deliver { level, .. } = policy.classify(&msg, &mut tally) {
//!     report.categorize(msg, level);
//! }
//!
//! let mut out = Vec::new();
//! report
//!     .finalize(vec![Box::new(TextRenderer::new(
//!         "demo",
//!         Duration::from_millis(2),
//!         false,
//!         &mut out,
//!     ))])
//!     .unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Found 1 error(s)"));
//! ```

pub mod color;
pub mod message;
pub mod policy;
pub mod render;
pub mod severity;
pub mod unit;

pub use color::{stdout_is_interactive, ColorChoice, Styles};
pub use message::{Location, Message};
pub use policy::{SeverityPolicy, SuppressReason, Tally, Verdict};
pub use render::{
    Counts, JsonRenderer, OutputFormat, Render, TextRenderer, XmlRenderer,
};
pub use severity::Severity;
pub use unit::UnitReport;
