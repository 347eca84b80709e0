//! Database path resolution.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// File name of the `SQLite` database inside the data root.
pub const DATABASE_FILE_NAME: &str = "eventreg.db";

/// Get the path to the eventreg database file.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::ENV_LOCK;

    #[test]
    fn test_database_path_ends_with_db_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let path = database_path().unwrap();
        assert!(path.to_string_lossy().ends_with(DATABASE_FILE_NAME));
    }
}
