//! Rules command implementation.
//!
//! The `cmlint rules` command lists the available checks with their
//! identifiers and severities, so users know what to pass to `--ignore`
//! and the override flags.

use serde::Serialize;

use crate::checks::CheckRegistry;
use crate::cli::args::RulesArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    args: RulesArgs,
}

#[derive(Serialize)]
struct RuleInfo<'a> {
    id: &'a str,
    severity: &'a str,
    description: &'a str,
    explanation: &'a str,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(args: RulesArgs) -> Self {
        Self { args }
    }
}

impl Command for RulesCommand {
    fn execute(&self) -> Result<CommandResult> {
        let registry = CheckRegistry::with_builtins();

        if self.args.json {
            let rules: Vec<_> = registry
                .iter()
                .map(|check| RuleInfo {
                    id: check.id(),
                    severity: check.severity().label(),
                    description: check.description(),
                    explanation: check.explanation(),
                })
                .collect();
            let rendered = serde_json::to_string_pretty(&rules)
                .map_err(std::io::Error::other)?;
            println!("{}", rendered);
        } else {
            for check in registry.iter() {
                println!(
                    "{:<28} [{}] {}",
                    check.id(),
                    check.severity().label(),
                    check.description()
                );
            }
        }

        Ok(CommandResult::success())
    }
}
