//! Path utilities for eventreg data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - `EVENTREG_DATA_DIR` overrides the platform default everywhere

mod database;
mod error;
mod platform;
mod resolver;

pub use database::{DATABASE_FILE_NAME, database_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
pub use resolver::ResolvedPaths;

#[cfg(test)]
pub(crate) mod test_utils {
    use std::sync::Mutex;

    /// Serializes tests that mutate `EVENTREG_DATA_DIR`.
    pub static ENV_LOCK: Mutex<()> = Mutex::new(());
}
