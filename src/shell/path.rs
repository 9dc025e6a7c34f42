//! Executable search path handling.
//!
//! The installed runtime's `bin` directory is appended to `PATH` so that
//! processes spawned afterwards resolve `java` from it. Appending (not
//! prepending) keeps a runtime already on the user's PATH first.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};

/// Build a search path from `current` with `entry` appended.
///
/// Entries are joined with the platform delimiter. If `entry` is already
/// present the path is returned unchanged.
pub fn path_with_entry(current: Option<&OsStr>, entry: &Path) -> Result<OsString> {
    let mut entries: Vec<PathBuf> = current
        .map(|p| std::env::split_paths(p).collect())
        .unwrap_or_default();

    if !entries.iter().any(|e| e == entry) {
        entries.push(entry.to_path_buf());
    }

    std::env::join_paths(entries).map_err(|e| {
        BootstrapError::Other(anyhow::anyhow!(
            "Cannot add {} to PATH: {}",
            entry.display(),
            e
        ))
    })
}

/// Append `entry` to this process's `PATH`.
///
/// Returns `true` if `PATH` changed. Must be called before other threads
/// read the environment.
pub fn append_search_path(entry: &Path) -> Result<bool> {
    let current = std::env::var_os("PATH");
    let updated = path_with_entry(current.as_deref(), entry)?;

    if current.as_deref() == Some(updated.as_os_str()) {
        return Ok(false);
    }

    tracing::debug!("Appending {} to PATH", entry.display());
    std::env::set_var("PATH", &updated);
    Ok(true)
}
