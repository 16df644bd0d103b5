//! JSON renderer.
//!
//! Same logical content as the XML renderer (suite metadata, counts,
//! per-case records, captured output) serialized as nested JSON. Never
//! colorized, regardless of the color policy.

use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use crate::error::Result;
use crate::report::message::Message;

use super::{case_name, Counts, Render};

/// Renders check results as a JSON document.
pub struct JsonRenderer<W: Write> {
    package: String,
    elapsed: Duration,
    system_out: Option<String>,
    system_err: Option<String>,
    counts: Counts,
    cases: Vec<JsonCase>,
    sink: W,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    time: f64,
    tests: usize,
    errors: usize,
    failures: usize,
    skipped: usize,
    success: usize,
    cases: &'a [JsonCase],
    #[serde(skip_serializing_if = "Option::is_none")]
    system_out: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_err: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonCase {
    name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<W: Write> JsonRenderer<W> {
    /// Create a JSON renderer for one package.
    pub fn new(package: impl Into<String>, elapsed: Duration, sink: W) -> Self {
        Self {
            package: package.into(),
            elapsed,
            system_out: None,
            system_err: None,
            counts: Counts::default(),
            cases: Vec::new(),
            sink,
        }
    }

    /// Embed captured process output in the report.
    pub fn with_captured_output(
        mut self,
        system_out: Option<String>,
        system_err: Option<String>,
    ) -> Self {
        self.system_out = system_out;
        self.system_err = system_err;
        self
    }

    fn add_case(&mut self, msg: &Message, kind: &'static str) {
        self.cases.push(JsonCase {
            name: case_name(&self.package, msg),
            kind: Some(kind),
            id: Some(msg.id.clone()),
            message: Some(msg.text.clone()),
        });
    }
}

impl<W: Write> Render for JsonRenderer<W> {
    fn add_error(&mut self, msg: &Message) {
        self.add_case(msg, "error");
        self.counts.errors += 1;
    }

    fn add_failure(&mut self, msg: &Message) {
        self.add_case(msg, "failure");
        self.counts.failures += 1;
    }

    fn add_skipped(&mut self, msg: &Message) {
        self.add_case(msg, "skipped");
        self.counts.skipped += 1;
    }

    fn write(mut self: Box<Self>) -> Result<()> {
        if self.counts.total_issues() == 0 {
            self.cases.push(JsonCase {
                name: self.package.clone(),
                kind: None,
                id: None,
                message: None,
            });
        }

        // Match the XML renderer's 4-decimal time precision.
        let time = (self.elapsed.as_secs_f64() * 10_000.0).round() / 10_000.0;
        let report = JsonReport {
            name: &self.package,
            time,
            tests: self.counts.tests(),
            errors: self.counts.errors,
            failures: self.counts.failures,
            skipped: self.counts.skipped,
            success: self.counts.successes(),
            cases: &self.cases,
            system_out: self.system_out.as_deref(),
            system_err: self.system_err.as_deref(),
        };

        serde_json::to_writer_pretty(&mut self.sink, &report).map_err(std::io::Error::other)?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }
}
