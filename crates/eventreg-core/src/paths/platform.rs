//! Platform-specific data root resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "EVENTREG_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `EVENTREG_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/eventreg`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("eventreg"),
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::ENV_LOCK;

    #[test]
    #[allow(unsafe_code)]
    fn env_override_wins_and_is_created() {
        let _guard = ENV_LOCK.lock().unwrap();
        let base = env::temp_dir().join(format!("eventreg_root_{}", std::process::id()));
        let target = base.join("nested");

        // SAFETY: ENV_LOCK serializes every test touching this variable.
        unsafe { env::set_var(DATA_DIR_ENV, &target) };
        let resolved = data_root();
        unsafe { env::remove_var(DATA_DIR_ENV) };

        let resolved = resolved.unwrap();
        assert_eq!(resolved, target);
        assert!(resolved.is_dir());
        let _ = fs::remove_dir_all(base);
    }
}
