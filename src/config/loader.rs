//! Manifest discovery and loading.
//!
//! This module finds the runtime manifest, parses it (JSON, or YAML when
//! the file extension says so) and resolves the install directory.

use crate::config::schema::Manifest;
use crate::config::validator::validate;
use crate::error::{BootstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file names probed during discovery, in priority order.
pub const MANIFEST_NAMES: &[&str] = &["dependency.json", "dependency.yml", "dependency.yaml"];

/// Name of the install directory created next to the executable.
pub const DEFAULT_INSTALL_DIR_NAME: &str = "jre";

/// Find a manifest in `start`, then next to the running executable.
pub fn find_manifest(start: &Path) -> Option<PathBuf> {
    let mut roots = vec![start.to_path_buf()];
    if let Some(exe_dir) = executable_dir() {
        roots.push(exe_dir);
    }

    roots.iter().find_map(|root| {
        MANIFEST_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
    })
}

/// Load, parse and validate a manifest file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the content is invalid.
/// Returns `ConfigValidationError` if values are unusable.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BootstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BootstrapError::Io(e)
        }
    })?;

    let manifest = parse_manifest(&content, path)?;
    validate(&manifest)?;
    tracing::debug!("Loaded manifest from {}", path.display());
    Ok(manifest)
}

/// Parse manifest content. The format is chosen by `source_path`'s extension.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    let is_yaml = matches!(
        source_path.extension().and_then(|e| e.to_str()),
        Some("yml" | "yaml")
    );

    let parsed = if is_yaml {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| BootstrapError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    })
}

/// Resolve the directory the runtime is installed into.
///
/// Priority: explicit override, then `install.dir` (relative to the
/// manifest's directory), then `jre/` next to the executable.
pub fn resolve_install_dir(
    manifest: &Manifest,
    manifest_path: &Path,
    override_dir: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    if let Some(dir) = &manifest.install.dir {
        if dir.is_absolute() {
            return Ok(dir.clone());
        }
        let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        return Ok(base.join(dir));
    }

    executable_dir()
        .map(|d| d.join(DEFAULT_INSTALL_DIR_NAME))
        .ok_or_else(|| {
            BootstrapError::Other(anyhow::anyhow!(
                "Cannot determine executable directory; set install.dir in the manifest"
            ))
        })
}

fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}
