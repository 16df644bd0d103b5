//! Checks on `cmake_minimum_required` and `project` invocations.

use regex::Regex;

use crate::cmake::{Package, CMAKE_LISTS};
use crate::report::{Location, Message, Severity};

use super::Check;

/// Flags listfiles that never call `cmake_minimum_required`.
pub struct MissingMinimumRequiredCheck;

impl Check for MissingMinimumRequiredCheck {
    fn id(&self) -> &'static str {
        "missing_minimum_required"
    }

    fn description(&self) -> &'static str {
        "Listfile does not call cmake_minimum_required()"
    }

    fn explanation(&self) -> &'static str {
        "Without cmake_minimum_required() at the top of the listfile, CMake \
         falls back to compatibility behavior of very old releases and the \
         build becomes dependent on whichever CMake version happens to be \
         installed. State the oldest version you actually support."
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, pkg: &Package) -> Vec<Message> {
        if pkg.find_command("cmake_minimum_required").is_some() {
            return vec![];
        }
        vec![Message::new(
            &pkg.name,
            self.severity(),
            self.id(),
            "missing cmake_minimum_required()",
        )
        .with_location(Location::file(CMAKE_LISTS))
        .with_explanation(self.explanation())]
    }
}

/// Flags listfiles that never call `project`.
pub struct MissingProjectCheck;

impl Check for MissingProjectCheck {
    fn id(&self) -> &'static str {
        "missing_project"
    }

    fn description(&self) -> &'static str {
        "Listfile does not call project()"
    }

    fn explanation(&self) -> &'static str {
        "Every top-level listfile must declare a project. Without project() \
         the languages are never enabled and most targets will fail to \
         configure in surprising ways."
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, pkg: &Package) -> Vec<Message> {
        if pkg.find_command("project").is_some() {
            return vec![];
        }
        vec![Message::new(
            &pkg.name,
            self.severity(),
            self.id(),
            "missing project()",
        )
        .with_location(Location::file(CMAKE_LISTS))
        .with_explanation(self.explanation())]
    }
}

/// Flags repeated `project` calls in one listfile.
pub struct DuplicateProjectCheck;

impl Check for DuplicateProjectCheck {
    fn id(&self) -> &'static str {
        "duplicate_project"
    }

    fn description(&self) -> &'static str {
        "Listfile calls project() more than once"
    }

    fn explanation(&self) -> &'static str {
        "A second project() call resets project-scoped variables and \
         usually means a subdirectory listfile was pasted into the top \
         level. Keep one project() per package."
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, pkg: &Package) -> Vec<Message> {
        pkg.find_commands("project")
            .skip(1)
            .map(|cmd| {
                Message::new(
                    &pkg.name,
                    self.severity(),
                    self.id(),
                    format!("duplicate project() call, first declared as '{}'", pkg.name),
                )
                .with_location(Location::line(CMAKE_LISTS, cmd.line))
                .with_explanation(self.explanation())
            })
            .collect()
    }
}

/// Flags packages whose project name differs from the directory name.
pub struct ProjectNameMismatchCheck;

impl Check for ProjectNameMismatchCheck {
    fn id(&self) -> &'static str {
        "project_name_mismatch"
    }

    fn description(&self) -> &'static str {
        "Project name differs from the package directory name"
    }

    fn explanation(&self) -> &'static str {
        "Tools that locate packages by directory name will not find this \
         package under its project name. The mismatch is legal but tends \
         to confuse both humans and package indexes."
    }

    fn severity(&self) -> Severity {
        Severity::Notice
    }

    fn check(&self, pkg: &Package) -> Vec<Message> {
        let Some(cmd) = pkg.find_command("project") else {
            return vec![];
        };
        let Some(project_name) = cmd.args.first() else {
            return vec![];
        };
        let dir_name = pkg
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if dir_name.is_empty() || *project_name == dir_name {
            return vec![];
        }
        vec![Message::new(
            &pkg.name,
            self.severity(),
            self.id(),
            format!(
                "project name '{}' differs from directory name '{}'",
                project_name, dir_name
            ),
        )
        .with_location(Location::line(CMAKE_LISTS, cmd.line))
        .with_explanation(self.explanation())]
    }
}

/// Flags `project(... VERSION x)` arguments that are not dotted decimals.
pub struct InvalidProjectVersionCheck;

impl Check for InvalidProjectVersionCheck {
    fn id(&self) -> &'static str {
        "invalid_project_version"
    }

    fn description(&self) -> &'static str {
        "project() VERSION is not of the form major[.minor[.patch[.tweak]]]"
    }

    fn explanation(&self) -> &'static str {
        "CMake only accepts up to four non-negative integer components in a \
         project VERSION. Anything else aborts configuration on current \
         CMake releases."
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, pkg: &Package) -> Vec<Message> {
        let Some(cmd) = pkg.find_command("project") else {
            return vec![];
        };
        let Some(pos) = cmd.args.iter().position(|a| a == "VERSION") else {
            return vec![];
        };
        let Some(version) = cmd.args.get(pos + 1) else {
            return vec![];
        };
        // Deliberately not validating versions built from variables.
        if version.contains("${") {
            return vec![];
        }
        let Ok(pattern) = Regex::new(r"^[0-9]+(\.[0-9]+){0,3}$") else {
            return vec![];
        };
        if pattern.is_match(version) {
            return vec![];
        }
        vec![Message::new(
            &pkg.name,
            self.severity(),
            self.id(),
            format!("invalid project version '{}'", version),
        )
        .with_location(Location::line(CMAKE_LISTS, cmd.line))
        .with_explanation(self.explanation())]
    }
}
