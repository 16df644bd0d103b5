//! Severity policy and cross-package tallies.
//!
//! Every raw message passes through [`SeverityPolicy::classify`] exactly
//! once, before any renderer sees it. The policy applies per-id level
//! overrides, the ignore list, the severity threshold, and strict mode,
//! so all renderers observe the same filtered view. The [`Tally`] is the
//! only state that outlives a single package: it is an explicit
//! accumulator passed through the check loop, not a global.

use std::collections::{HashMap, HashSet};

use super::message::Message;
use super::severity::Severity;

/// Outcome of classifying one raw message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The message is delivered to renderers.
    Deliver {
        /// Effective level after per-id overrides; determines the display
        /// bucket and label.
        level: Severity,
        /// Whether this message counts toward the error tally that drives
        /// the process exit code. Independent of `level`: strict mode sets
        /// this without touching the display level.
        counts_as_error: bool,
        /// Whether the message was on the ignore list and is only shown
        /// because `show_ignored` is set.
        previously_ignored: bool,
    },
    /// The message is withheld from all renderers.
    Suppress(SuppressReason),
}

/// Why a message was suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The diagnostic id is on the ignore list.
    Ignored,
    /// The effective level is below the configured threshold.
    BelowThreshold(Severity),
}

/// Classifies raw messages according to the active configuration.
#[derive(Debug, Clone)]
pub struct SeverityPolicy {
    threshold: Severity,
    strict: bool,
    overrides: HashMap<String, Severity>,
    ignore: HashSet<String>,
    show_ignored: bool,
}

impl SeverityPolicy {
    /// Create a policy with the given threshold.
    pub fn new(threshold: Severity) -> Self {
        Self {
            threshold,
            strict: false,
            overrides: HashMap::new(),
            ignore: HashSet::new(),
            show_ignored: false,
        }
    }

    /// Promote every delivered message to error-equivalent for exit-status
    /// purposes. Display levels are unaffected.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Force a specific level for a diagnostic id. Takes precedence over
    /// the threshold.
    pub fn override_level(mut self, id: impl Into<String>, level: Severity) -> Self {
        self.overrides.insert(id.into(), level);
        self
    }

    /// Suppress a diagnostic id entirely (unless `show_ignored` is set).
    pub fn ignore(mut self, id: impl Into<String>) -> Self {
        self.ignore.insert(id.into());
        self
    }

    /// Deliver ignored messages anyway, flagged as previously ignored.
    pub fn show_ignored(mut self, show: bool) -> Self {
        self.show_ignored = show;
        self
    }

    /// The configured threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Classify one raw message, recording suppression in `tally`.
    ///
    /// Checks run in fixed precedence: per-id level override, then the
    /// ignore list, then the threshold, then strict promotion.
    pub fn classify(&self, msg: &Message, tally: &mut Tally) -> Verdict {
        let level = self.overrides.get(&msg.id).copied().unwrap_or(msg.level);

        let previously_ignored = self.ignore.contains(&msg.id);
        if previously_ignored && !self.show_ignored {
            tally.ignored += 1;
            return Verdict::Suppress(SuppressReason::Ignored);
        }

        if level < self.threshold {
            tally.record_suppressed(level);
            return Verdict::Suppress(SuppressReason::BelowThreshold(level));
        }

        let counts_as_error = self.strict || level == Severity::Error;
        tally.record_delivered(counts_as_error);
        Verdict::Deliver {
            level,
            counts_as_error,
            previously_ignored,
        }
    }
}

/// Cross-package accumulator for the final summary and exit code.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    /// Packages checked.
    pub packages: usize,
    /// Messages delivered to renderers.
    pub problems: usize,
    /// Delivered messages counting toward the exit code.
    pub errors: usize,
    /// Messages suppressed because their id was ignored.
    pub ignored: usize,
    suppressed_errors: usize,
    suppressed_warnings: usize,
    suppressed_notices: usize,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one checked package.
    pub fn record_package(&mut self) {
        self.packages += 1;
    }

    fn record_delivered(&mut self, counts_as_error: bool) {
        self.problems += 1;
        if counts_as_error {
            self.errors += 1;
        }
    }

    fn record_suppressed(&mut self, level: Severity) {
        match level {
            Severity::Error => self.suppressed_errors += 1,
            Severity::Warning => self.suppressed_warnings += 1,
            Severity::Notice => self.suppressed_notices += 1,
        }
    }

    /// Messages of `level` withheld by the threshold, for the
    /// "will show N additional ..." hints.
    pub fn suppressed(&self, level: Severity) -> usize {
        match level {
            Severity::Error => self.suppressed_errors,
            Severity::Warning => self.suppressed_warnings,
            Severity::Notice => self.suppressed_notices,
        }
    }

    /// The process exit code: 0 unless any delivered message counted as an
    /// error.
    pub fn exit_code(&self) -> i32 {
        if self.errors > 0 {
            1
        } else {
            0
        }
    }
}
