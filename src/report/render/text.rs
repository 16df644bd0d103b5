//! Human-readable text renderer.
//!
//! One line per message, colorized severity label, and a per-package
//! summary line. The explained variant appends long-form explanations
//! under entries that carry one; it never changes counts or ordering.

use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::report::color::Styles;
use crate::report::message::Message;
use crate::report::severity::Severity;

use super::{Counts, Render};

/// Renders check results as human-oriented text.
pub struct TextRenderer<W: Write> {
    package: String,
    elapsed: Duration,
    styles: Styles,
    explain: bool,
    counts: Counts,
    // Per-bucket buffers so the written order is always errors, failures,
    // skipped, independent of call interleaving.
    errors_buf: String,
    failures_buf: String,
    skipped_buf: String,
    sink: W,
}

impl<W: Write> TextRenderer<W> {
    /// Create a text renderer for one package.
    ///
    /// `use_color` is the already-resolved color decision for `sink`.
    pub fn new(package: impl Into<String>, elapsed: Duration, use_color: bool, sink: W) -> Self {
        Self {
            package: package.into(),
            elapsed,
            styles: Styles::for_color(use_color),
            explain: false,
            counts: Counts::default(),
            errors_buf: String::new(),
            failures_buf: String::new(),
            skipped_buf: String::new(),
            sink,
        }
    }

    /// Also print long-form explanations under each entry that has one.
    pub fn with_explanations(mut self) -> Self {
        self.explain = true;
        self
    }

    fn format_msg(&self, msg: &Message, level: Severity) -> String {
        let label = self.styles.for_level(level).apply_to(level.label());
        let mut line = match (msg.file(), msg.line()) {
            (Some(file), Some(line)) => {
                format!(
                    "{}: {}({}): {}: {}\n",
                    self.package,
                    file.display(),
                    line,
                    label,
                    msg.text
                )
            }
            (Some(file), None) => {
                format!(
                    "{}: {}: {}: {}\n",
                    self.package,
                    file.display(),
                    label,
                    msg.text
                )
            }
            (None, _) => format!("{}: {}: {}\n", self.package, label, msg.text),
        };
        if self.explain {
            if let Some(explanation) = &msg.explanation {
                for expl_line in explanation.lines() {
                    line.push_str("    ");
                    line.push_str(expl_line);
                    line.push('\n');
                }
            }
        }
        line
    }

    fn summary(&self) -> String {
        let header = format!(
            "Checked '{}' in {:.2} seconds.",
            self.package,
            self.elapsed.as_secs_f64()
        );
        if self.counts.successes() == 1 {
            if self.counts.skipped > 0 {
                format!("{} Found {} skipped test(s)\n", header, self.counts.skipped)
            } else {
                format!("{} Found no issues\n", header)
            }
        } else {
            format!(
                "{} Found {} error(s), {} failure(s), {} skipped test(s)\n",
                header, self.counts.errors, self.counts.failures, self.counts.skipped
            )
        }
    }
}

impl<W: Write> Render for TextRenderer<W> {
    fn add_error(&mut self, msg: &Message) {
        let line = self.format_msg(msg, Severity::Error);
        self.errors_buf.push_str(&line);
        self.counts.errors += 1;
    }

    fn add_failure(&mut self, msg: &Message) {
        let line = self.format_msg(msg, Severity::Warning);
        self.failures_buf.push_str(&line);
        self.counts.failures += 1;
    }

    fn add_skipped(&mut self, msg: &Message) {
        let line = self.format_msg(msg, Severity::Notice);
        self.skipped_buf.push_str(&line);
        self.counts.skipped += 1;
    }

    fn write(mut self: Box<Self>) -> Result<()> {
        self.sink.write_all(self.errors_buf.as_bytes())?;
        self.sink.write_all(self.failures_buf.as_bytes())?;
        self.sink.write_all(self.skipped_buf.as_bytes())?;
        self.sink.write_all(self.summary().as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::message::Location;

    fn render(explain: bool, add: impl FnOnce(&mut TextRenderer<&mut Vec<u8>>)) -> String {
        let mut out = Vec::new();
        let mut renderer =
            TextRenderer::new("pkg", Duration::from_millis(1500), false, &mut out);
        if explain {
            renderer = renderer.with_explanations();
        }
        add(&mut renderer);
        Box::new(renderer).write().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn formats_message_with_file_and_line() {
        let output = render(false, |r| {
            r.add_error(
                &Message::new("pkg", Severity::Error, "missing_project", "no project() call")
                    .with_location(Location::line("CMakeLists.txt", 10)),
            );
        });

        assert!(output.contains("pkg: CMakeLists.txt(10): error: no project() call"));
    }

    #[test]
    fn formats_message_without_location() {
        let output = render(false, |r| {
            r.add_skipped(&Message::new("pkg", Severity::Notice, "n", "informational"));
        });

        assert!(output.contains("pkg: notice: informational"));
    }

    #[test]
    fn label_follows_bucket_not_message_level() {
        // A message routed to the failures bucket renders as a warning even
        // if the producing check stamped another level on it.
        let output = render(false, |r| {
            r.add_failure(&Message::new("pkg", Severity::Notice, "n", "text"));
        });

        assert!(output.contains("pkg: warning: text"));
    }

    #[test]
    fn buckets_write_in_fixed_order() {
        let output = render(false, |r| {
            r.add_skipped(&Message::new("pkg", Severity::Notice, "n", "third"));
            r.add_error(&Message::new("pkg", Severity::Error, "e", "first"));
            r.add_failure(&Message::new("pkg", Severity::Warning, "w", "second"));
        });

        let first = output.find("first").unwrap();
        let second = output.find("second").unwrap();
        let third = output.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn summary_no_issues() {
        let output = render(false, |_| {});
        assert!(output.contains("Checked 'pkg' in 1.50 seconds. Found no issues"));
    }

    #[test]
    fn summary_skipped_only() {
        let output = render(false, |r| {
            r.add_skipped(&Message::new("pkg", Severity::Notice, "n", "t"));
        });
        assert!(output.contains("Found 1 skipped test(s)"));
        assert!(!output.contains("error(s)"));
    }

    #[test]
    fn summary_with_issues() {
        let output = render(false, |r| {
            r.add_error(&Message::new("pkg", Severity::Error, "e", "t"));
            r.add_skipped(&Message::new("pkg", Severity::Notice, "n", "t"));
        });
        assert!(output.contains("Found 1 error(s), 0 failure(s), 1 skipped test(s)"));
    }

    #[test]
    fn explanation_printed_only_when_enabled() {
        let msg = Message::new("pkg", Severity::Error, "e", "short text")
            .with_explanation("The long story.\nSecond line.");

        let plain = render(false, |r| r.add_error(&msg));
        assert!(!plain.contains("The long story."));

        let explained = render(true, |r| r.add_error(&msg));
        assert!(explained.contains("    The long story.\n"));
        assert!(explained.contains("    Second line.\n"));
    }

    #[test]
    fn explanations_do_not_change_counts() {
        let msg = Message::new("pkg", Severity::Error, "e", "t").with_explanation("why");
        let explained = render(true, |r| r.add_error(&msg));
        assert!(explained.contains("Found 1 error(s)"));
    }

    #[test]
    fn no_ansi_codes_when_color_off() {
        let output = render(false, |r| {
            r.add_error(&Message::new("pkg", Severity::Error, "e", "t"));
        });
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn ansi_codes_only_around_label_when_color_on() {
        let mut out = Vec::new();
        let mut renderer = TextRenderer::new("pkg", Duration::ZERO, true, &mut out);
        renderer.add_error(&Message::new("pkg", Severity::Error, "e", "plain text"));
        Box::new(renderer).write().unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains('\u{1b}'));
        // The message text itself stays unstyled.
        assert!(output.contains(": plain text"));
    }
}
