//! Runtime download and installation.
//!
//! The archive streams from an [`ArchiveSource`] through a progress bar
//! and a SHA-256 hasher into gzip/tar extraction. Everything lands in a
//! staging directory next to the install directory. Only a complete,
//! verified extraction replaces the install directory, so a failed
//! download never leaves a half-written runtime behind.

pub mod extract;
pub mod receipt;
pub mod request;
pub mod source;

pub use extract::{strip_top_level, unpack_stripped, HashingReader};
pub use receipt::{InstallReceipt, RECEIPT_FILE};
pub use request::{archive_name, DownloadRequest, CONNECT_TIMEOUT, LICENSE_COOKIE};
pub use source::{ArchiveSource, ArchiveStream, HttpSource};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::Manifest;
use crate::error::{BootstrapError, Result};
use crate::platform::PlatformDescriptor;
use crate::ui::UserInterface;

/// Downloads and unpacks one pinned runtime into an install directory.
#[derive(Debug, Clone)]
pub struct Installer {
    request: DownloadRequest,
    install_dir: PathBuf,
    expected_sha256: Option<String>,
    product_version: String,
    build_number: String,
    platform: PlatformDescriptor,
}

impl Installer {
    /// Prepare an install of the manifest's runtime for `platform`.
    pub fn new(manifest: &Manifest, platform: &PlatformDescriptor, install_dir: &Path) -> Self {
        Self {
            request: DownloadRequest::resolve(manifest, platform),
            install_dir: install_dir.to_path_buf(),
            expected_sha256: manifest.jre.sha256.clone(),
            product_version: manifest.jre.product_version.clone(),
            build_number: manifest.jre.build_number.clone(),
            platform: platform.clone(),
        }
    }

    /// The resolved download request.
    pub fn request(&self) -> &DownloadRequest {
        &self.request
    }

    /// Where the runtime ends up.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Download, verify and unpack the runtime.
    ///
    /// On success the install directory holds the runtime (top-level
    /// archive directory stripped) plus an [`InstallReceipt`]. On failure
    /// the previous install directory, if any, is left as it was.
    ///
    /// # Errors
    ///
    /// `Transport` when the download cannot be opened or breaks off,
    /// `Extraction` for a corrupt or unsafe archive, `ChecksumMismatch`
    /// when a configured digest does not match.
    pub fn install(
        &self,
        source: &dyn ArchiveSource,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallReceipt> {
        let parent = parent_dir(&self.install_dir);
        fs::create_dir_all(&parent)?;

        let staging = tempfile::Builder::new()
            .prefix(".jre-staging-")
            .tempdir_in(&parent)?;
        tracing::debug!("Staging into {}", staging.path().display());

        tracing::info!("Downloading {}", self.request.url);
        let stream = source.open(&self.request)?;

        let bar = ui.download_bar(stream.content_length);
        let mut reader = HashingReader::new(bar.wrap_read(stream.reader));

        let unpacked = unpack_stripped(&mut reader, staging.path());
        if let Some(message) = reader.upstream_error() {
            bar.abandon();
            return Err(BootstrapError::transport(&self.request.url, message));
        }
        if let Err(e) = unpacked {
            bar.abandon();
            return Err(e);
        }
        bar.finish_and_clear();

        let size_bytes = reader.bytes_read();
        let sha256 = reader.finish();
        tracing::debug!("Downloaded {} bytes, sha256 {}", size_bytes, sha256);

        if let Some(expected) = &self.expected_sha256 {
            if !expected.eq_ignore_ascii_case(&sha256) {
                return Err(BootstrapError::ChecksumMismatch {
                    expected: expected.to_lowercase(),
                    actual: sha256,
                });
            }
        }

        let receipt = InstallReceipt {
            product_version: self.product_version.clone(),
            build_number: self.build_number.clone(),
            platform: self.platform.os.url_token().to_string(),
            arch: self.platform.arch.clone(),
            url: self.request.url.clone(),
            sha256,
            size_bytes,
            installed_at: Utc::now(),
        };
        receipt.write_to(staging.path())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(staging.path(), fs::Permissions::from_mode(0o755))?;
        }

        promote(staging.keep(), &self.install_dir)?;
        tracing::info!(
            "Installed Java {} into {}",
            self.product_version,
            self.install_dir.display()
        );
        Ok(receipt)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Move `staged` to `install_dir`, replacing any previous install.
///
/// Both live in the same parent directory, so each step is a rename.
fn promote(staged: PathBuf, install_dir: &Path) -> Result<()> {
    let backup = if install_dir.exists() {
        let name = install_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "jre".to_string());
        let backup = parent_dir(install_dir).join(format!(".{}.old-{}", name, std::process::id()));
        if backup.exists() {
            fs::remove_dir_all(&backup)?;
        }
        if let Err(e) = fs::rename(install_dir, &backup) {
            let _ = fs::remove_dir_all(&staged);
            return Err(e.into());
        }
        Some(backup)
    } else {
        None
    };

    if let Err(e) = fs::rename(&staged, install_dir) {
        let _ = fs::remove_dir_all(&staged);
        if let Some(backup) = &backup {
            let _ = fs::rename(backup, install_dir);
        }
        return Err(e.into());
    }

    if let Some(backup) = backup {
        if let Err(e) = fs::remove_dir_all(&backup) {
            tracing::warn!("Could not remove old install {}: {}", backup.display(), e);
        }
    }
    Ok(())
}
