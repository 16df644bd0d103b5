//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::{ColorChoice, OutputFormat};

/// cmlint - CMake package linter with CI-friendly reporting.
#[derive(Debug, Parser)]
#[command(name = "cmlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Read configuration from FILE in addition to the discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress the final cross-package summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check packages (default if no command specified)
    Check(CheckArgs),

    /// List available checks
    Rules(RulesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Paths to packages to check (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Set severity threshold (0=errors, 1=+warnings, 2=+notices)
    #[arg(short = 'W', long, value_name = "LEVEL")]
    pub severity_level: Option<i64>,

    /// Count everything reported toward the exit status
    #[arg(long)]
    pub strict: bool,

    /// Ignore diagnostic message ID (can be used multiple times)
    #[arg(long, value_name = "ID")]
    pub ignore: Vec<String>,

    /// Treat diagnostic message ID as error (can be used multiple times)
    #[arg(long, value_name = "ID")]
    pub error: Vec<String>,

    /// Treat diagnostic message ID as warning (can be used multiple times)
    #[arg(long, value_name = "ID")]
    pub warning: Vec<String>,

    /// Treat diagnostic message ID as notice (can be used multiple times)
    #[arg(long, value_name = "ID")]
    pub notice: Vec<String>,

    /// Show messages even if they have been ignored explicitly
    #[arg(long)]
    pub show_ignored: bool,

    /// Output format for check results
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Also write a JUnit XML report to FILE
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Colorize text output
    #[arg(long, value_enum, value_name = "MODE")]
    pub color: Option<ColorChoice>,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
