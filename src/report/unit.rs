//! Per-package report aggregation.
//!
//! A [`UnitReport`] collects the delivered messages for one checked
//! package into three ordered buckets and replays them into every
//! attached renderer at finalization. Renderers all see the same
//! sequence in the same order: errors, then failures, then skipped,
//! each bucket in insertion order. `finalize` consumes the report, so
//! the Open to Finalized transition happens exactly once.

use std::time::Duration;

use crate::error::Result;

use super::message::Message;
use super::render::{Counts, Render};
use super::severity::Severity;

/// Aggregation state for one checked package.
#[derive(Debug)]
pub struct UnitReport {
    name: String,
    elapsed: Duration,
    system_out: Option<String>,
    system_err: Option<String>,
    errors: Vec<Message>,
    failures: Vec<Message>,
    skipped: Vec<Message>,
}

impl UnitReport {
    /// Create an empty report for a package.
    pub fn new(name: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            elapsed,
            system_out: None,
            system_err: None,
            errors: Vec::new(),
            failures: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Attach captured process output for the structured renderers.
    pub fn with_captured_output(
        mut self,
        system_out: Option<String>,
        system_err: Option<String>,
    ) -> Self {
        self.system_out = system_out;
        self.system_err = system_err;
        self
    }

    /// The package display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elapsed checking time for this package.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Captured standard output, if any.
    pub fn system_out(&self) -> Option<&str> {
        self.system_out.as_deref()
    }

    /// Captured standard error, if any.
    pub fn system_err(&self) -> Option<&str> {
        self.system_err.as_deref()
    }

    /// Route a delivered message into exactly one bucket based on its
    /// effective level: Error to errors, Warning to failures, Notice to
    /// skipped.
    pub fn categorize(&mut self, msg: Message, level: Severity) {
        match level {
            Severity::Error => self.errors.push(msg),
            Severity::Warning => self.failures.push(msg),
            Severity::Notice => self.skipped.push(msg),
        }
    }

    /// Bucket sizes so far.
    pub fn counts(&self) -> Counts {
        Counts {
            errors: self.errors.len(),
            failures: self.failures.len(),
            skipped: self.skipped.len(),
        }
    }

    /// Replay all buckets into every renderer, then write each renderer.
    ///
    /// The replay order (errors, failures, skipped) is part of the output
    /// contract and identical for every renderer. A sink failure aborts
    /// the remaining renderers and propagates; nothing is retried.
    pub fn finalize(self, renderers: Vec<Box<dyn Render + '_>>) -> Result<()> {
        for mut renderer in renderers {
            for msg in &self.errors {
                renderer.add_error(msg);
            }
            for msg in &self.failures {
                renderer.add_failure(msg);
            }
            for msg in &self.skipped {
                renderer.add_skipped(msg);
            }
            renderer.write()?;
        }
        Ok(())
    }
}
