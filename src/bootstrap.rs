//! Probe-then-install orchestration.
//!
//! [`Bootstrapper::check`] runs the version probe and, when the runtime is
//! missing or too old, installs the pinned one. Afterwards the install's
//! `bin` directory is appended to this process's `PATH` so children find
//! `java`. [`check_jre`] wires up the real command, HTTP source and a
//! silent UI for library callers.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::{load_manifest, resolve_install_dir, Manifest};
use crate::error::{BootstrapError, Result};
use crate::install::{ArchiveSource, HttpSource, InstallReceipt, Installer};
use crate::platform::PlatformDescriptor;
use crate::probe::{InstallReason, JavaCommand, ProbeOutcome, RuntimeVersion, VersionCommand, VersionProbe};
use crate::shell::{append_search_path, path_with_entry};
use crate::ui::{format_duration, NonInteractiveUI, OutputMode, UserInterface};

/// How a check ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The runtime already met the minimum version.
    Satisfied { version: String },
    /// The pinned runtime was installed.
    Installed {
        reason: InstallReason,
        install_dir: PathBuf,
    },
}

/// Sequences the probe and the installer for one manifest.
pub struct Bootstrapper<'a> {
    manifest: Manifest,
    platform: PlatformDescriptor,
    install_dir: PathBuf,
    minimum: RuntimeVersion,
    command: &'a dyn VersionCommand,
    source: &'a dyn ArchiveSource,
    update_path: bool,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper.
    ///
    /// Fails with `ConfigValidationError` if the manifest's minimum
    /// version has no numeric part.
    pub fn new(
        manifest: Manifest,
        platform: PlatformDescriptor,
        install_dir: PathBuf,
        command: &'a dyn VersionCommand,
        source: &'a dyn ArchiveSource,
    ) -> Result<Self> {
        let minimum = RuntimeVersion::parse(&manifest.jre.minimum_version).ok_or_else(|| {
            BootstrapError::ConfigValidationError {
                message: format!(
                    "'JRE.version' must start with a number, got '{}'",
                    manifest.jre.minimum_version
                ),
            }
        })?;

        Ok(Self {
            manifest,
            platform,
            install_dir,
            minimum,
            command,
            source,
            update_path: true,
        })
    }

    /// Leave the process `PATH` alone.
    pub fn without_path_update(mut self) -> Self {
        self.update_path = false;
        self
    }

    /// The runtime's install directory.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Directory holding the installed runtime's executables.
    pub fn bin_dir(&self) -> PathBuf {
        self.platform.bin_dir(&self.install_dir)
    }

    /// Probe the runtime. Never fails.
    pub fn probe(&self) -> ProbeOutcome {
        VersionProbe::new(self.command, self.minimum.clone()).probe()
    }

    /// Install the pinned runtime regardless of what is present.
    pub fn install(&self, ui: &mut dyn UserInterface) -> Result<InstallReceipt> {
        let installer = Installer::new(&self.manifest, &self.platform, &self.install_dir);
        let started = Instant::now();

        let receipt = installer.install(self.source, ui)?;
        tracing::debug!("Install took {}", format_duration(started.elapsed()));

        self.expose_bin_dir()?;
        Ok(receipt)
    }

    /// Probe, and install if the runtime is missing or too old.
    ///
    /// The probe never fails; install errors propagate unchanged.
    pub fn check(&self, ui: &mut dyn UserInterface) -> Result<CheckOutcome> {
        match self.probe() {
            ProbeOutcome::Satisfied { version } => {
                tracing::info!("Java {} satisfies minimum {}", version, self.minimum);
                self.expose_bin_dir()?;
                Ok(CheckOutcome::Satisfied { version })
            }
            ProbeOutcome::NeedsInstall(reason) => {
                tracing::info!("Installing Java {}: {}", self.manifest.jre.product_version, reason);
                self.install(ui)?;
                Ok(CheckOutcome::Installed {
                    reason,
                    install_dir: self.install_dir.clone(),
                })
            }
        }
    }

    /// The bin directory to put on `PATH`, if an install is present.
    pub fn exposable_bin_dir(&self) -> Option<PathBuf> {
        let bin = self.bin_dir();
        bin.is_dir().then_some(bin)
    }

    fn expose_bin_dir(&self) -> Result<bool> {
        if !self.update_path {
            return Ok(false);
        }
        match self.exposable_bin_dir() {
            Some(bin) => append_search_path(&bin),
            None => Ok(false),
        }
    }
}

/// Build the system `java -version` command for an install.
///
/// The command resolves the program through the inherited `PATH` with
/// the install's `bin` directory appended, so a runtime installed by an
/// earlier run is found without touching this process's environment.
pub fn system_java(manifest: &Manifest, bin_dir: &Path, program: Option<&str>) -> Result<JavaCommand> {
    let program = program.unwrap_or(&manifest.install.java);
    let timeout = Duration::from_secs(manifest.install.probe_timeout_secs);
    let search_path = path_with_entry(std::env::var_os("PATH").as_deref(), bin_dir)?;
    Ok(JavaCommand::new(program, timeout).with_search_path(search_path))
}

/// Make sure the runtime described by the manifest at `manifest_path` is
/// available, installing it if needed.
///
/// Uses the host platform, the manifest's install settings and a real
/// HTTP download. Nothing is printed; progress is logged through
/// `tracing`.
///
/// # Errors
///
/// Manifest errors, `UnsupportedPlatform`, and any install failure.
pub fn check_jre(manifest_path: &Path) -> Result<CheckOutcome> {
    let manifest = load_manifest(manifest_path)?;
    let platform = PlatformDescriptor::detect()?;
    let install_dir = resolve_install_dir(&manifest, manifest_path, None)?;

    let command = system_java(&manifest, &platform.bin_dir(&install_dir), None)?;
    let source = HttpSource::new();
    let mut ui = NonInteractiveUI::new(OutputMode::Silent);

    Bootstrapper::new(manifest, platform, install_dir, &command, &source)?.check(&mut ui)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InstallSettings, RuntimeRequirement};
    use crate::install::extract::fixtures::runtime_archive;
    use crate::install::fake::FakeSource;
    use crate::platform::OsName;
    use crate::probe::fake::FakeCommand;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn manifest(minimum: &str) -> Manifest {
        Manifest {
            jre: RuntimeRequirement {
                minimum_version: minimum.into(),
                product_version: "8u131".into(),
                build_number: "11".into(),
                distribution_hash: "d54c1d3a095b4ff2b6607d096fa80163".into(),
                sha256: None,
            },
            install: InstallSettings::default(),
        }
    }

    fn linux() -> PlatformDescriptor {
        PlatformDescriptor::new(OsName::Linux, "x64")
    }

    fn bootstrapper<'a>(
        temp: &TempDir,
        minimum: &str,
        command: &'a FakeCommand,
        source: &'a FakeSource,
    ) -> Bootstrapper<'a> {
        Bootstrapper::new(
            manifest(minimum),
            linux(),
            temp.path().join("jre"),
            command,
            source,
        )
        .unwrap()
        .without_path_update()
    }

    #[test]
    fn newer_runtime_skips_install() {
        let temp = TempDir::new().unwrap();
        let command = FakeCommand::printing("openjdk version \"11.0.2\" 2019-01-15\n");
        let source = FakeSource::serving(runtime_archive());

        let outcome = bootstrapper(&temp, "1.8", &command, &source)
            .check(&mut MockUI::new())
            .unwrap();

        assert_eq!(
            outcome,
            CheckOutcome::Satisfied {
                version: "11.0.2".into()
            }
        );
        assert_eq!(source.opens.get(), 0);
    }

    #[test]
    fn exact_minimum_skips_install() {
        let temp = TempDir::new().unwrap();
        let command = FakeCommand::printing("java version \"1.8\"\n");
        let source = FakeSource::serving(runtime_archive());

        let outcome = bootstrapper(&temp, "1.8", &command, &source)
            .check(&mut MockUI::new())
            .unwrap();

        assert!(matches!(outcome, CheckOutcome::Satisfied { .. }));
        assert_eq!(source.opens.get(), 0);
        assert!(!temp.path().join("jre").exists());
    }

    #[test]
    fn older_runtime_installs_once() {
        let temp = TempDir::new().unwrap();
        let command = FakeCommand::printing("java version \"1.7.0_80\"\n");
        let source = FakeSource::serving(runtime_archive());

        let outcome = bootstrapper(&temp, "1.8", &command, &source)
            .check(&mut MockUI::new())
            .unwrap();

        assert_eq!(source.opens.get(), 1);
        assert_eq!(
            outcome,
            CheckOutcome::Installed {
                reason: InstallReason::VersionTooLow {
                    found: "1.7.0_80".into(),
                    required: "1.8".into(),
                },
                install_dir: temp.path().join("jre"),
            }
        );
    }

    #[test]
    fn missing_runtime_installs_from_source() {
        let temp = TempDir::new().unwrap();
        let command = FakeCommand::missing();
        let source = FakeSource::serving(runtime_archive());

        let b = bootstrapper(&temp, "1.8", &command, &source);
        let outcome = b.check(&mut MockUI::new()).unwrap();

        assert!(matches!(
            outcome,
            CheckOutcome::Installed {
                reason: InstallReason::NotFound,
                ..
            }
        ));
        assert!(temp.path().join("jre/bin/java").is_file());
        assert_eq!(b.exposable_bin_dir(), Some(temp.path().join("jre/bin")));
    }

    #[test]
    fn broken_download_fails_check() {
        let temp = TempDir::new().unwrap();
        let command = FakeCommand::missing();
        let archive = runtime_archive();
        let source = FakeSource::failing_after(archive.clone(), archive.len() / 3);

        let b = bootstrapper(&temp, "1.8", &command, &source);
        let err = b.check(&mut MockUI::new()).unwrap_err();

        assert!(matches!(err, BootstrapError::Transport { .. }));
        assert!(!temp.path().join("jre").exists());
        assert_eq!(b.exposable_bin_dir(), None);
    }

    #[test]
    fn forced_install_ignores_probe() {
        let temp = TempDir::new().unwrap();
        let command = FakeCommand::printing("java version \"17\"\n");
        let source = FakeSource::serving(runtime_archive());

        let receipt = bootstrapper(&temp, "1.8", &command, &source)
            .install(&mut MockUI::new())
            .unwrap();

        assert_eq!(receipt.product_version, "8u131");
        assert_eq!(command.calls.get(), 0);
        assert_eq!(source.opens.get(), 1);
    }

    #[test]
    fn bin_dir_follows_platform_layout() {
        let temp = TempDir::new().unwrap();
        let command = FakeCommand::missing();
        let source = FakeSource::serving(Vec::new());
        let b = Bootstrapper::new(
            manifest("1.8"),
            PlatformDescriptor::new(OsName::MacOs, "x64"),
            temp.path().join("jre"),
            &command,
            &source,
        )
        .unwrap();

        assert_eq!(b.bin_dir(), temp.path().join("jre/Contents/Home/bin"));
        fs::create_dir_all(b.bin_dir()).unwrap();
        assert_eq!(b.exposable_bin_dir(), Some(b.bin_dir()));
    }

    #[test]
    fn unparseable_minimum_is_rejected() {
        let command = FakeCommand::missing();
        let source = FakeSource::serving(Vec::new());
        let result = Bootstrapper::new(
            manifest("latest"),
            linux(),
            PathBuf::from("jre"),
            &command,
            &source,
        );
        assert!(matches!(
            result,
            Err(BootstrapError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn system_java_uses_manifest_program_and_timeout() {
        let mut m = manifest("1.8");
        m.install.java = "java8".into();
        m.install.probe_timeout_secs = 3;

        let command = system_java(&m, Path::new("/opt/jre/bin"), None).unwrap();
        assert_eq!(command.describe(), "java8 -version");
        assert_eq!(command.timeout(), Duration::from_secs(3));

        let command = system_java(&m, Path::new("/opt/jre/bin"), Some("/usr/bin/java")).unwrap();
        assert_eq!(command.describe(), "/usr/bin/java -version");
    }
}
