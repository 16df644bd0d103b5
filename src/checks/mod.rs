//! Package checks.
//!
//! This module provides the pluggable check system that produces
//! diagnostic messages for the reporting pipeline:
//!
//! - **Checks** - Individual validations ([`Check`] trait)
//! - **Registry** - Collection of all available checks ([`CheckRegistry`])
//!
//! Checks produce [`Message`]s; they never decide suppression or
//! severity overrides, that is the job of the severity policy.

pub mod project;
pub mod sources;

use crate::cmake::Package;
use crate::report::{Message, Severity};

pub use project::{
    DuplicateProjectCheck, InvalidProjectVersionCheck, MissingMinimumRequiredCheck,
    MissingProjectCheck, ProjectNameMismatchCheck,
};
pub use sources::MissingSourceFileCheck;

/// A single validation applied to a loaded package.
pub trait Check: Send + Sync {
    /// Stable diagnostic identifier, used for ignore and override
    /// matching.
    fn id(&self) -> &'static str;

    /// One-line description of what this check looks for.
    fn description(&self) -> &'static str;

    /// Long-form explanation attached to produced messages, shown by the
    /// explained renderer.
    fn explanation(&self) -> &'static str;

    /// Severity assigned to produced messages.
    fn severity(&self) -> Severity;

    /// Check the package and return any findings.
    fn check(&self, pkg: &Package) -> Vec<Message>;
}

/// Registry of all available checks.
///
/// Registration order is preserved so check output is deterministic from
/// run to run.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with all built-in checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MissingMinimumRequiredCheck));
        registry.register(Box::new(MissingProjectCheck));
        registry.register(Box::new(DuplicateProjectCheck));
        registry.register(Box::new(ProjectNameMismatchCheck));
        registry.register(Box::new(InvalidProjectVersionCheck));
        registry.register(Box::new(MissingSourceFileCheck));
        registry
    }

    /// Register a check.
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Get a check by id.
    pub fn get(&self, id: &str) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over all checks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check against a package and return the findings in a
    /// stable presentation order (by file, line, then id).
    pub fn run_all(&self, pkg: &Package) -> Vec<Message> {
        let mut messages = Vec::new();
        for check in self.iter() {
            messages.extend(check.check(pkg));
        }
        messages.sort_by(|a, b| a.order_key().cmp(&b.order_key()));
        messages
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmake::CMAKE_LISTS;
    use std::fs;
    use tempfile::TempDir;

    struct MockCheck {
        id: &'static str,
    }

    impl Check for MockCheck {
        fn id(&self) -> &'static str {
            self.id
        }
        fn description(&self) -> &'static str {
            "a mock check for testing"
        }
        fn explanation(&self) -> &'static str {
            "longer mock story"
        }
        fn severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, _pkg: &Package) -> Vec<Message> {
            vec![]
        }
    }

    fn load_package(listfile: &str) -> (TempDir, Package) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CMAKE_LISTS), listfile).unwrap();
        let pkg = Package::load(temp.path()).unwrap();
        (temp, pkg)
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(MockCheck { id: "mock" }));

        assert!(!registry.is_empty());
        assert!(registry.get("mock").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn registry_preserves_registration_order() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(MockCheck { id: "first" }));
        registry.register(Box::new(MockCheck { id: "second" }));

        let ids: Vec<_> = registry.iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn registry_with_builtins_has_checks() {
        let registry = CheckRegistry::with_builtins();
        assert!(registry.len() >= 6);
        assert!(registry.get("missing_minimum_required").is_some());
        assert!(registry.get("missing_project").is_some());
        assert!(registry.get("duplicate_project").is_some());
        assert!(registry.get("project_name_mismatch").is_some());
        assert!(registry.get("invalid_project_version").is_some());
        assert!(registry.get("missing_source_file").is_some());
    }

    #[test]
    fn run_all_on_clean_package_is_quiet() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("demo");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join(CMAKE_LISTS),
            "cmake_minimum_required(VERSION 3.10)\nproject(demo VERSION 1.2.3)\n",
        )
        .unwrap();
        let pkg = Package::load(&dir).unwrap();

        let registry = CheckRegistry::with_builtins();
        assert!(registry.run_all(&pkg).is_empty());
    }

    #[test]
    fn run_all_sorts_by_location() {
        let (_temp, pkg) = load_package(
            "project(other_name VERSION bogus)\nproject(second)\n",
        );

        let registry = CheckRegistry::with_builtins();
        let messages = registry.run_all(&pkg);

        assert!(messages.len() >= 2);
        let lines: Vec<_> = messages.iter().map(|m| m.line()).collect();
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
    }
}
