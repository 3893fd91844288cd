//! `.env` loading.

use std::path::{Path, PathBuf};

/// Loads environment variables from `.env`.
///
/// Tries the current directory first, then the executable's directory.
/// Returns the file that was loaded, if any. Variables already set in the
/// environment are never overridden.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        return Some(path);
    }
    let exe_path = std::env::current_exe().ok()?;
    let env_path = exe_path.parent()?.join(".env");
    load_env_file(&env_path).then_some(env_path)
}

/// Loads `path` if it exists. An unreadable file is reported and skipped.
pub fn load_env_file(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    match dotenvy::from_path(path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Ignoring unreadable {}: {}", path.display(), e);
            false
        }
    }
}
