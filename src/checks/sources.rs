//! Checks on target source lists.

use std::path::Path;

use crate::cmake::{CmakeCommand, Package, CMAKE_LISTS};
use crate::report::{Location, Message, Severity};

use super::Check;

/// Target modifier keywords that may appear between the target name and
/// its sources.
const TARGET_KEYWORDS: [&str; 9] = [
    "STATIC",
    "SHARED",
    "MODULE",
    "OBJECT",
    "INTERFACE",
    "ALIAS",
    "IMPORTED",
    "EXCLUDE_FROM_ALL",
    "WIN32",
];

/// Extensions treated as source or header files worth existence checks.
const SOURCE_EXTENSIONS: [&str; 8] = ["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "hxx"];

/// Flags `add_executable` / `add_library` sources that do not exist on
/// disk.
pub struct MissingSourceFileCheck;

impl MissingSourceFileCheck {
    fn check_target(&self, pkg: &Package, cmd: &CmakeCommand) -> Vec<Message> {
        cmd.args
            .iter()
            .skip(1)
            .filter(|arg| !TARGET_KEYWORDS.contains(&arg.as_str()))
            // Paths built from variables or generator expressions cannot
            // be resolved statically.
            .filter(|arg| !arg.contains("${") && !arg.contains("$<"))
            .filter(|arg| {
                Path::new(arg)
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            })
            .filter(|arg| !pkg.path.join(arg).is_file())
            .map(|arg| {
                Message::new(
                    &pkg.name,
                    self.severity(),
                    self.id(),
                    format!("source file '{}' does not exist", arg),
                )
                .with_location(Location::line(CMAKE_LISTS, cmd.line))
                .with_explanation(self.explanation())
            })
            .collect()
    }
}

impl Check for MissingSourceFileCheck {
    fn id(&self) -> &'static str {
        "missing_source_file"
    }

    fn description(&self) -> &'static str {
        "Target lists a source file that does not exist"
    }

    fn explanation(&self) -> &'static str {
        "The listfile names a source file that is not present in the \
         package. Configuration will fail on a clean checkout even if the \
         file happens to exist in some build trees."
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, pkg: &Package) -> Vec<Message> {
        let mut messages = Vec::new();
        for name in ["add_executable", "add_library"] {
            for cmd in pkg.find_commands(name) {
                messages.extend(self.check_target(pkg, cmd));
            }
        }
        messages
    }
}
