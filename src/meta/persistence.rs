//! Saving and loading meta-progression.

use super::types::MetaProgress;
use crate::core::constants::META_SAVE_FILE;
use crate::utils::persistence::{
    load_json_or_default_at, save_json_at, save_path, PersistError,
};
use std::path::{Path, PathBuf};

/// ~/.rogue_clone/meta.json
pub fn meta_save_path() -> Result<PathBuf, PersistError> {
    save_path(META_SAVE_FILE)
}

/// Loads meta-progression, falling back to a fresh start. Never fails.
pub fn load_meta() -> MetaProgress {
    match meta_save_path() {
        Ok(path) => load_meta_from(&path),
        Err(e) => {
            tracing::warn!(error = %e, "meta save location unavailable, starting fresh");
            MetaProgress::default()
        }
    }
}

pub fn load_meta_from(path: &Path) -> MetaProgress {
    let meta: MetaProgress = load_json_or_default_at(path);
    tracing::debug!(souls = meta.souls, upgrades = meta.upgrades.len(), "meta loaded");
    meta
}

pub fn save_meta(meta: &MetaProgress) -> Result<(), PersistError> {
    save_meta_to(&meta_save_path()?, meta)
}

pub fn save_meta_to(path: &Path, meta: &MetaProgress) -> Result<(), PersistError> {
    save_json_at(path, meta)?;
    tracing::info!(souls = meta.souls, path = %path.display(), "meta saved");
    Ok(())
}
