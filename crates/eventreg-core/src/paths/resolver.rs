//! All resolved paths in one struct, for `eventreg paths` and tests.

use std::fmt;
use std::path::PathBuf;

use super::{PathError, data_root, database_path};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            database_path: database_path()?,
        })
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        write!(f, "database_path = {}", self.database_path.display())
    }
}
