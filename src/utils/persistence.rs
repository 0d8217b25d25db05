//! Generic JSON persistence helpers for ~/.rogue_clone/ save files.

use crate::core::constants::DATA_DIR_NAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can arise while reading or writing save files.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Wrapper around IO errors (directory creation, reads, writes).
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Wrapper around JSON serialization errors.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Get the ~/.rogue_clone/ directory path, creating it if needed.
pub fn data_dir() -> Result<PathBuf, PersistError> {
    let home_dir = dirs::home_dir().ok_or(PersistError::NoHomeDir)?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.rogue_clone/.
pub fn save_path(filename: &str) -> Result<PathBuf, PersistError> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if it is missing or invalid.
pub fn load_json_or_default_at<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read save file");
            return T::default();
        }
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "save file is corrupt, using defaults");
            T::default()
        }
    }
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json_at<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let val: Vec<String> = load_json_or_default_at(&dir.path().join("missing.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("corrupt.json");
        fs::write(&path, "{ not json").expect("write");
        let val: Vec<String> = load_json_or_default_at(&path);
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("data.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json_at(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default_at(&path);
        assert_eq!(loaded, data);
    }
}
