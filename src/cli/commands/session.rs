//! Manifest loading shared by the commands.

use std::path::{Path, PathBuf};

use crate::bootstrap::system_java;
use crate::cli::args::Cli;
use crate::config::{find_manifest, load_manifest, resolve_install_dir, Manifest, MANIFEST_NAMES};
use crate::error::{BootstrapError, Result};
use crate::platform::PlatformDescriptor;
use crate::probe::JavaCommand;

/// Global flags that shape how the manifest is found and applied.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit manifest path.
    pub config: Option<PathBuf>,
    /// Install directory override.
    pub install_dir: Option<PathBuf>,
    /// Version-check program override.
    pub java: Option<String>,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            install_dir: cli.install_dir.clone(),
            java: cli.java.clone(),
        }
    }
}

/// A loaded manifest resolved for this host.
#[derive(Debug, Clone)]
pub struct Session {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    pub platform: PlatformDescriptor,
    pub install_dir: PathBuf,
    java: Option<String>,
}

impl Session {
    /// Find and load the manifest, detect the platform, resolve the
    /// install directory.
    pub fn load(options: &GlobalOptions, cwd: &Path) -> Result<Self> {
        let manifest_path = match &options.config {
            Some(path) => path.clone(),
            None => find_manifest(cwd).ok_or_else(|| BootstrapError::ConfigNotFound {
                path: cwd.join(MANIFEST_NAMES[0]),
            })?,
        };
        tracing::debug!("Using manifest {}", manifest_path.display());

        let manifest = load_manifest(&manifest_path)?;
        let platform = PlatformDescriptor::detect()?;
        let install_dir =
            resolve_install_dir(&manifest, &manifest_path, options.install_dir.as_deref())?;

        Ok(Self {
            manifest_path,
            manifest,
            platform,
            install_dir,
            java: options.java.clone(),
        })
    }

    /// Directory holding the installed runtime's executables.
    pub fn bin_dir(&self) -> PathBuf {
        self.platform.bin_dir(&self.install_dir)
    }

    /// The version command, honoring `--java`.
    pub fn java_command(&self) -> Result<JavaCommand> {
        system_java(&self.manifest, &self.bin_dir(), self.java.as_deref())
    }
}
