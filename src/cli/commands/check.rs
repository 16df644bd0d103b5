//! Check command implementation.
//!
//! The `cmlint check` command loads packages, runs the check registry,
//! filters findings through the severity policy, and fans the per-package
//! report out to the configured renderers.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::checks::CheckRegistry;
use crate::cli::args::{CheckArgs, Cli};
use crate::cmake::Package;
use crate::config::{self, FileConfig};
use crate::error::{CmlintError, Result};
use crate::report::{
    stdout_is_interactive, ColorChoice, JsonRenderer, OutputFormat, Render, Severity,
    SeverityPolicy, Tally, TextRenderer, UnitReport, Verdict, XmlRenderer,
};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    quiet: bool,
    config_file: Option<PathBuf>,
}

/// Fully resolved settings: config files overlaid with command line flags.
struct Resolved {
    threshold: Severity,
    strict: bool,
    quiet: bool,
    color: ColorChoice,
    format: OutputFormat,
    output_file: Option<PathBuf>,
    show_ignored: bool,
    ignore: Vec<String>,
    overrides: Vec<(String, Severity)>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs, cli: &Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            quiet: cli.quiet,
            config_file: cli.config.clone(),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve configuration file values against command line flags.
    ///
    /// Invalid values (unknown format or color mode, out-of-range
    /// severity level) fail here, before any package is checked.
    fn resolve(&self, file: FileConfig) -> Result<Resolved> {
        let threshold = Severity::from_cli_level(
            self.args
                .severity_level
                .or(file.severity_level)
                .unwrap_or(1),
        )?;
        let color = match self.args.color {
            Some(color) => color,
            None => match &file.color {
                Some(raw) => raw.parse()?,
                None => ColorChoice::default(),
            },
        };
        let format = match self.args.format {
            Some(format) => format,
            None => match &file.format {
                Some(raw) => raw.parse()?,
                None => OutputFormat::default(),
            },
        };

        let mut ignore = file.ignore;
        ignore.extend(self.args.ignore.iter().cloned());

        // Command line overrides are appended last so they win over the
        // config file for the same id.
        let mut overrides = Vec::new();
        for (ids, level) in [
            (&file.error, Severity::Error),
            (&file.warning, Severity::Warning),
            (&file.notice, Severity::Notice),
            (&self.args.error, Severity::Error),
            (&self.args.warning, Severity::Warning),
            (&self.args.notice, Severity::Notice),
        ] {
            overrides.extend(ids.iter().map(|id| (id.clone(), level)));
        }

        Ok(Resolved {
            threshold,
            strict: self.args.strict || file.strict.unwrap_or(false),
            quiet: self.quiet || file.quiet.unwrap_or(false),
            color,
            format,
            output_file: self.args.output_file.clone().or(file.output_file),
            show_ignored: self.args.show_ignored || file.show_ignored.unwrap_or(false),
            ignore,
            overrides,
        })
    }

    fn build_policy(resolved: &Resolved) -> SeverityPolicy {
        let mut policy = SeverityPolicy::new(resolved.threshold)
            .strict(resolved.strict)
            .show_ignored(resolved.show_ignored);
        for id in &resolved.ignore {
            policy = policy.ignore(id.clone());
        }
        for (id, level) in &resolved.overrides {
            policy = policy.override_level(id.clone(), *level);
        }
        policy
    }

    fn print_summary(tally: &Tally) {
        eprintln!(
            "cmlint: checked {} packages and found {} problems",
            tally.packages, tally.problems
        );
        for level in Severity::ALL {
            let extra = tally.suppressed(level);
            if extra > 0 {
                eprintln!(
                    "cmlint: option -W{} will show {} additional {}s",
                    level.cli_level(),
                    extra,
                    level.label()
                );
            }
        }
        if tally.ignored > 0 {
            eprintln!(
                "cmlint: {} messages have been ignored. Use --show-ignored to see them",
                tally.ignored
            );
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let file_config = config::load_merged(&self.project_root, self.config_file.as_deref())?;
        let resolved = self.resolve(file_config)?;
        let policy = Self::build_policy(&resolved);
        let registry = CheckRegistry::with_builtins();

        let use_color = resolved.color.resolve(stdout_is_interactive());

        // The XML report file is opened once, before any rendering; the
        // renderers only get scoped write access per package.
        let mut junit_file = match &resolved.output_file {
            Some(path) => Some(File::create(path)?),
            None => None,
        };

        let paths = if self.args.paths.is_empty() {
            vec![self.project_root.clone()]
        } else {
            self.args.paths.clone()
        };

        let mut tally = Tally::new();
        for path in &paths {
            let pkg = match Package::load(path) {
                Ok(pkg) => pkg,
                Err(CmlintError::PackageNotFound { path }) => {
                    eprintln!(
                        "cmlint: not a package (no CMakeLists.txt): {}",
                        path.display()
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            tracing::debug!("checking package '{}' at {}", pkg.name, path.display());

            let start = Instant::now();
            let messages = registry.run_all(&pkg);
            let elapsed = start.elapsed();
            tracing::debug!("{} raw findings for '{}'", messages.len(), pkg.name);

            tally.record_package();
            let mut report = UnitReport::new(&pkg.name, elapsed);
            for msg in messages {
                if let Verdict::Deliver { level, .. } = policy.classify(&msg, &mut tally) {
                    report.categorize(msg, level);
                }
            }

            let mut renderers: Vec<Box<dyn Render + '_>> = Vec::new();
            let stdout_renderer: Box<dyn Render + '_> = match resolved.format {
                OutputFormat::Text => Box::new(TextRenderer::new(
                    report.name(),
                    report.elapsed(),
                    use_color,
                    io::stdout(),
                )),
                OutputFormat::Explained => Box::new(
                    TextRenderer::new(report.name(), report.elapsed(), use_color, io::stdout())
                        .with_explanations(),
                ),
                OutputFormat::Xml => Box::new(
                    XmlRenderer::new(report.name(), report.elapsed(), io::stdout())
                        .with_captured_output(
                            report.system_out().map(str::to_owned),
                            report.system_err().map(str::to_owned),
                        ),
                ),
                OutputFormat::Json => Box::new(
                    JsonRenderer::new(report.name(), report.elapsed(), io::stdout())
                        .with_captured_output(
                            report.system_out().map(str::to_owned),
                            report.system_err().map(str::to_owned),
                        ),
                ),
            };
            renderers.push(stdout_renderer);
            if let Some(file) = junit_file.as_mut() {
                renderers.push(Box::new(
                    XmlRenderer::new(report.name(), report.elapsed(), file).with_captured_output(
                        report.system_out().map(str::to_owned),
                        report.system_err().map(str::to_owned),
                    ),
                ));
            }

            report.finalize(renderers)?;
        }

        if tally.packages == 0 {
            eprintln!("cmlint: no packages to check");
            return Ok(CommandResult::failure(1));
        }

        if !resolved.quiet {
            Self::print_summary(&tally);
        }

        if tally.exit_code() == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
