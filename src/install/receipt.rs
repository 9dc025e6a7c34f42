//! Install receipt written next to the extracted runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};

/// Receipt file name inside the install directory.
pub const RECEIPT_FILE: &str = ".install.json";

/// What was installed, from where, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallReceipt {
    pub product_version: String,
    pub build_number: String,
    pub platform: String,
    pub arch: String,
    pub url: String,
    /// SHA-256 of the compressed archive as downloaded.
    pub sha256: String,
    pub size_bytes: u64,
    pub installed_at: DateTime<Utc>,
}

impl InstallReceipt {
    /// Receipt location for an install directory.
    pub fn path_in(install_dir: &Path) -> PathBuf {
        install_dir.join(RECEIPT_FILE)
    }

    /// Write the receipt into `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BootstrapError::Other(anyhow::anyhow!("Cannot encode receipt: {}", e)))?;
        fs::write(Self::path_in(dir), json)?;
        Ok(())
    }

    /// Load the receipt from an install directory.
    ///
    /// Returns `Ok(None)` if there is none. An unreadable receipt is an
    /// error.
    pub fn load(install_dir: &Path) -> Result<Option<Self>> {
        let path = Self::path_in(install_dir);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| BootstrapError::ConfigParseError {
                path,
                message: e.to_string(),
            })
    }
}
