//! Host platform and architecture resolution.
//!
//! Maps the host OS to the distribution's platform token and the
//! location of the runtime's `bin` directory inside the archive, and
//! normalizes architecture names to the tokens used in archive names.

use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};

/// Operating systems with a distribution archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsName {
    MacOs,
    Windows,
    Linux,
}

impl OsName {
    /// Resolve from a `std::env::consts::OS` value.
    ///
    /// Anything other than macOS, Windows and Linux is an
    /// `UnsupportedPlatform` error.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(OsName::MacOs),
            "windows" => Ok(OsName::Windows),
            "linux" => Ok(OsName::Linux),
            other => Err(BootstrapError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Detect the current operating system.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Platform token used in archive file names.
    pub fn url_token(&self) -> &'static str {
        match self {
            OsName::MacOs => "macosx",
            OsName::Windows => "windows",
            OsName::Linux => "linux",
        }
    }

    /// Location of the executables relative to the install directory.
    pub fn bin_subpath(&self) -> &'static str {
        match self {
            OsName::MacOs => "Contents/Home/bin",
            OsName::Windows | OsName::Linux => "bin",
        }
    }
}

/// Resolved host platform: OS plus normalized architecture token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// Host operating system.
    pub os: OsName,
    /// Normalized architecture token (`x64`, `i586`, ...).
    pub arch: String,
}

impl PlatformDescriptor {
    /// Build a descriptor, normalizing the architecture token.
    pub fn new(os: OsName, arch: &str) -> Self {
        Self {
            os,
            arch: normalize_arch(arch),
        }
    }

    /// Detect the host platform.
    pub fn detect() -> Result<Self> {
        let os = OsName::current()?;
        let descriptor = Self::new(os, host_arch_token(std::env::consts::ARCH));
        tracing::debug!(
            "Detected platform {}-{}",
            descriptor.os.url_token(),
            descriptor.arch
        );
        Ok(descriptor)
    }

    /// Directory holding the runtime's executables under `install_dir`.
    pub fn bin_dir(&self, install_dir: &Path) -> PathBuf {
        self.os
            .bin_subpath()
            .split('/')
            .fold(install_dir.to_path_buf(), |dir, part| dir.join(part))
    }
}

/// Map a Rust target architecture to the conventional token
/// (`x86_64` is `x64`, `aarch64` is `arm64`); others pass through.
pub fn host_arch_token(rust_arch: &str) -> &str {
    match rust_arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        other => other,
    }
}

/// Normalize an architecture token for archive names.
///
/// `x64` stays `x64`, the 32-bit names `x86` and `ia32` become `i586`,
/// anything else passes through unchanged.
pub fn normalize_arch(arch: &str) -> String {
    match arch {
        "x86" | "ia32" => "i586".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_operating_systems() {
        assert_eq!(OsName::from_os("macos").unwrap(), OsName::MacOs);
        assert_eq!(OsName::from_os("windows").unwrap(), OsName::Windows);
        assert_eq!(OsName::from_os("linux").unwrap(), OsName::Linux);
    }

    #[test]
    fn url_tokens_and_bin_subpaths() {
        assert_eq!(OsName::MacOs.url_token(), "macosx");
        assert_eq!(OsName::MacOs.bin_subpath(), "Contents/Home/bin");
        assert_eq!(OsName::Windows.url_token(), "windows");
        assert_eq!(OsName::Windows.bin_subpath(), "bin");
        assert_eq!(OsName::Linux.url_token(), "linux");
        assert_eq!(OsName::Linux.bin_subpath(), "bin");
    }

    #[test]
    fn unknown_os_is_explicit_error() {
        let err = OsName::from_os("freebsd").unwrap_err();
        match err {
            BootstrapError::UnsupportedPlatform { os } => assert_eq!(os, "freebsd"),
            other => panic!("expected UnsupportedPlatform, got {:?}", other),
        }
    }

    #[test]
    fn arch_normalization() {
        assert_eq!(normalize_arch("x64"), "x64");
        assert_eq!(normalize_arch("x86"), "i586");
        assert_eq!(normalize_arch("ia32"), "i586");
        assert_eq!(normalize_arch("aarch64"), "aarch64");
        assert_eq!(normalize_arch("sparcv9"), "sparcv9");
    }

    #[test]
    fn host_arch_tokens() {
        assert_eq!(host_arch_token("x86_64"), "x64");
        assert_eq!(host_arch_token("x86"), "x86");
        assert_eq!(normalize_arch(host_arch_token("x86")), "i586");
        assert_eq!(host_arch_token("aarch64"), "arm64");
        assert_eq!(host_arch_token("riscv64"), "riscv64");
    }

    #[test]
    fn bin_dir_on_macos_is_nested() {
        let platform = PlatformDescriptor::new(OsName::MacOs, "x64");
        let dir = platform.bin_dir(Path::new("/opt/jre"));
        assert_eq!(
            dir,
            Path::new("/opt/jre")
                .join("Contents")
                .join("Home")
                .join("bin")
        );
    }

    #[test]
    fn bin_dir_on_linux() {
        let platform = PlatformDescriptor::new(OsName::Linux, "ia32");
        assert_eq!(platform.arch, "i586");
        assert_eq!(
            platform.bin_dir(Path::new("/opt/jre")),
            Path::new("/opt/jre").join("bin")
        );
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn detect_succeeds_on_supported_hosts() {
        assert!(PlatformDescriptor::detect().is_ok());
    }
}
