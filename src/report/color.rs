//! Color policy and severity styling.
//!
//! The color decision is made once per output stream, upstream of the
//! renderers: machine-readable sinks never see ANSI codes, and the text
//! renderer receives an already-resolved on/off flag.

use std::str::FromStr;

use console::Style;

use crate::error::CmlintError;

use super::severity::Severity;

/// Requested color mode for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Never emit ANSI codes.
    Never,
    /// Always emit ANSI codes, even when piped.
    Always,
    /// Color only when the target stream is an interactive terminal.
    #[default]
    Auto,
}

impl ColorChoice {
    /// Resolve the requested mode against the interactivity of the target
    /// stream into an effective on/off decision.
    pub fn resolve(self, stream_is_interactive: bool) -> bool {
        match self {
            ColorChoice::Never => false,
            ColorChoice::Always => true,
            ColorChoice::Auto => stream_is_interactive,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = CmlintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" => Ok(ColorChoice::Never),
            "always" => Ok(ColorChoice::Always),
            "auto" => Ok(ColorChoice::Auto),
            other => Err(CmlintError::UnknownColor { name: other.into() }),
        }
    }
}

/// Whether stdout is an interactive terminal that wants color.
///
/// Honors the `NO_COLOR` convention (<https://no-color.org/>).
pub fn stdout_is_interactive() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}

/// Styles applied to severity labels in text output.
#[derive(Debug, Clone)]
pub struct Styles {
    error: Style,
    warning: Style,
    notice: Style,
}

impl Styles {
    /// Create the colored style set.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold().force_styling(true),
            warning: Style::new().color256(208).force_styling(true),
            notice: Style::new().cyan().force_styling(true),
        }
    }

    /// Create a style set without colors (for non-TTY or `never`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            warning: Style::new(),
            notice: Style::new(),
        }
    }

    /// Select the colored or plain set from a resolved color decision.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// The style for a severity label.
    pub fn for_level(&self, level: Severity) -> &Style {
        match level {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Notice => &self.notice,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_is_off_everywhere() {
        assert!(!ColorChoice::Never.resolve(true));
        assert!(!ColorChoice::Never.resolve(false));
    }

    #[test]
    fn always_is_on_everywhere() {
        assert!(ColorChoice::Always.resolve(true));
        assert!(ColorChoice::Always.resolve(false));
    }

    #[test]
    fn auto_follows_interactivity() {
        assert!(ColorChoice::Auto.resolve(true));
        assert!(!ColorChoice::Auto.resolve(false));
    }

    #[test]
    fn default_is_auto() {
        assert_eq!(ColorChoice::default(), ColorChoice::Auto);
    }

    #[test]
    fn parses_known_modes() {
        assert_eq!("never".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert_eq!(
            "always".parse::<ColorChoice>().unwrap(),
            ColorChoice::Always
        );
        assert_eq!("auto".parse::<ColorChoice>().unwrap(), ColorChoice::Auto);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "sometimes".parse::<ColorChoice>().unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn plain_styles_add_no_codes() {
        let styles = Styles::plain();
        let label = styles
            .for_level(Severity::Error)
            .apply_to("error")
            .to_string();
        assert_eq!(label, "error");
    }

    #[test]
    fn colored_styles_add_codes() {
        let styles = Styles::new();
        let label = styles
            .for_level(Severity::Error)
            .apply_to("error")
            .to_string();
        assert!(label.contains("\u{1b}["));
    }

    #[test]
    fn for_color_selects_set() {
        let on = Styles::for_color(true)
            .for_level(Severity::Notice)
            .apply_to("notice")
            .to_string();
        let off = Styles::for_color(false)
            .for_level(Severity::Notice)
            .apply_to("notice")
            .to_string();
        assert_ne!(on, off);
        assert_eq!(off, "notice");
    }
}
