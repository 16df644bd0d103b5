//! JUnit-style XML renderer.
//!
//! Produces one `<testsuite>` per package for CI test-result ingestion.
//! Field names, attribute semantics, numeric formatting, and the
//! at-least-one-testcase rule are an external contract consumed by CI
//! systems; changes here break downstream parsers.

use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::report::message::Message;

use super::{case_name, Counts, Render};

/// Renders check results as a JUnit-style test suite.
pub struct XmlRenderer<W: Write> {
    package: String,
    elapsed: Duration,
    system_out: Option<String>,
    system_err: Option<String>,
    counts: Counts,
    cases: Vec<Case>,
    sink: W,
}

struct Case {
    name: String,
    // None for the synthetic success entry of an issue-free suite.
    issue: Option<Issue>,
}

struct Issue {
    kind: &'static str,
    id: String,
    text: String,
}

impl<W: Write> XmlRenderer<W> {
    /// Create an XML renderer for one package.
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

    /// Embed captured process output as `system-out` / `system-err` blocks.
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
        self.cases.push(Case {
            name: case_name(&self.package, msg),
            issue: Some(Issue {
                kind,
                id: msg.id.clone(),
                text: msg.text.clone(),
            }),
        });
    }

    fn render(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!(
            "<testsuite name=\"{}\" time=\"{:.4}\" tests=\"{}\" errors=\"{}\" \
             failures=\"{}\" skipped=\"{}\" success=\"{}\">\n",
            escape_xml(&self.package),
            self.elapsed.as_secs_f64(),
            self.counts.tests(),
            self.counts.errors,
            self.counts.failures,
            self.counts.skipped,
            self.counts.successes(),
        ));

        for case in &self.cases {
            match &case.issue {
                Some(issue) => {
                    xml.push_str(&format!(
                        "  <testcase name=\"{}\">\n",
                        escape_xml(&case.name)
                    ));
                    xml.push_str(&format!("    <{}", issue.kind));
                    if !issue.id.is_empty() {
                        xml.push_str(&format!(" type=\"{}\"", escape_xml(&issue.id)));
                    }
                    if !issue.text.is_empty() {
                        xml.push_str(&format!(" message=\"{}\"", escape_xml(&issue.text)));
                    }
                    xml.push_str("/>\n");
                    xml.push_str("  </testcase>\n");
                }
                None => {
                    xml.push_str(&format!(
                        "  <testcase name=\"{}\"/>\n",
                        escape_xml(&case.name)
                    ));
                }
            }
        }

        if let Some(out) = &self.system_out {
            xml.push_str(&format!("  <system-out>{}</system-out>\n", cdata(out)));
        }
        if let Some(err) = &self.system_err {
            xml.push_str(&format!("  <system-err>{}</system-err>\n", cdata(err)));
        }

        xml.push_str("</testsuite>\n");
        xml
    }
}

impl<W: Write> Render for XmlRenderer<W> {
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
        // Downstream consumers expect at least one testcase per suite.
        if self.counts.total_issues() == 0 {
            self.cases.push(Case {
                name: self.package.clone(),
                issue: None,
            });
        }
        let xml = self.render();
        self.sink.write_all(xml.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn cdata(s: &str) -> String {
    // A literal "]]>" inside character data must be split across sections.
    format!("<![CDATA[{}]]>", s.replace("]]>", "]]]]><![CDATA[>"))
}
