//! CMake package model.
//!
//! A package is a directory containing a `CMakeLists.txt`. Loading a
//! package parses the listfile into command invocations for the checks.

pub mod parser;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CmlintError, Result};

pub use parser::{parse, CmakeCommand};

/// File name of the listfile that marks a package root.
pub const CMAKE_LISTS: &str = "CMakeLists.txt";

/// A loaded CMake package.
#[derive(Debug, Clone)]
pub struct Package {
    /// Display name: the `project()` name if present, else the directory
    /// name.
    pub name: String,
    /// Package root directory.
    pub path: PathBuf,
    /// Parsed command invocations from the listfile.
    pub commands: Vec<CmakeCommand>,
}

impl Package {
    /// Load the package rooted at `dir`.
    ///
    /// Fails with [`CmlintError::PackageNotFound`] if the directory has no
    /// `CMakeLists.txt`.
    pub fn load(dir: &Path) -> Result<Self> {
        let listfile = dir.join(CMAKE_LISTS);
        if !listfile.is_file() {
            return Err(CmlintError::PackageNotFound {
                path: dir.to_path_buf(),
            });
        }
        let source = fs::read_to_string(&listfile)?;
        let commands = parse(&source);
        let name = commands
            .iter()
            .find(|c| c.name == "project")
            .and_then(|c| c.args.first().cloned())
            .or_else(|| {
                dir.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "unknown".to_string());

        Ok(Self {
            name,
            path: dir.to_path_buf(),
            commands,
        })
    }

    /// First invocation of `name`, if any.
    pub fn find_command(&self, name: &str) -> Option<&CmakeCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// All invocations of `name`, in source order.
    pub fn find_commands<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CmakeCommand> {
        self.commands.iter().filter(move |c| c.name == name)
    }
}
