//! Configuration file discovery and loading.
//!
//! Options that can also be given on the command line may be persisted in
//! a YAML configuration file. Files are merged in priority order (later
//! overrides earlier): user global config, project config, then an
//! explicit `--config` file. Command line flags override everything;
//! that final resolution happens in the check command.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CmlintError, Result};

/// Project-level config file name, looked up at the project root.
pub const PROJECT_CONFIG: &str = ".cmlint.yml";

/// Raw option values as they appear in a configuration file.
///
/// Everything is optional; unset values fall through to the next layer
/// or to built-in defaults. String-typed fields (`color`, `format`) are
/// validated when the merged configuration is resolved, before any
/// package is checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Severity threshold, 0-2 (like `-W`).
    pub severity_level: Option<i64>,
    /// Count every reported message toward the exit status.
    pub strict: Option<bool>,
    /// Suppress the final cross-package summary.
    pub quiet: Option<bool>,
    /// Color mode: never, always, or auto.
    pub color: Option<String>,
    /// Output format: text, explained, xml, or json.
    pub format: Option<String>,
    /// Where to write the JUnit XML report.
    pub output_file: Option<PathBuf>,
    /// Show messages even if they are ignored.
    pub show_ignored: Option<bool>,
    /// Diagnostic ids to ignore.
    pub ignore: Vec<String>,
    /// Diagnostic ids to treat as errors.
    pub error: Vec<String>,
    /// Diagnostic ids to treat as warnings.
    pub warning: Vec<String>,
    /// Diagnostic ids to treat as notices.
    pub notice: Vec<String>,
}

impl FileConfig {
    /// Overlay `other` on top of `self`: scalar options from `other` win
    /// when set, id lists accumulate.
    pub fn merge(mut self, other: FileConfig) -> Self {
        self.severity_level = other.severity_level.or(self.severity_level);
        self.strict = other.strict.or(self.strict);
        self.quiet = other.quiet.or(self.quiet);
        self.color = other.color.or(self.color);
        self.format = other.format.or(self.format);
        self.output_file = other.output_file.or(self.output_file);
        self.show_ignored = other.show_ignored.or(self.show_ignored);
        self.ignore.extend(other.ignore);
        self.error.extend(other.error);
        self.warning.extend(other.warning);
        self.notice.extend(other.notice);
        self
    }
}

/// Paths to configuration files in priority order (later overrides
/// earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: `~/.config/cmlint/config.yml`
    pub user_global: Option<PathBuf>,
    /// Project config: `<root>/.cmlint.yml`
    pub project: Option<PathBuf>,
    /// Explicit `--config` file; must exist.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(project_root),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("cmlint").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// All config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load one configuration file.
pub fn load_file(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path).map_err(|e| CmlintError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_yaml::from_str(&raw).map_err(|e| CmlintError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all discovered configuration files.
pub fn load_merged(project_root: &Path, explicit: Option<&Path>) -> Result<FileConfig> {
    let paths = ConfigPaths::discover(project_root, explicit);
    let mut merged = FileConfig::default();
    for path in paths.all() {
        tracing::debug!("loading config from {}", path.display());
        merged = merged.merge(load_file(path)?);
    }
    Ok(merged)
}
