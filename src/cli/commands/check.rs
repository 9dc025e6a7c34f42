//! The default command: probe the runtime and install it if needed.

use std::path::{Path, PathBuf};

use crate::bootstrap::{Bootstrapper, CheckOutcome};
use crate::error::Result;
use crate::install::{ArchiveSource, HttpSource};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session::{GlobalOptions, Session};

/// The check command implementation.
pub struct CheckCommand {
    cwd: PathBuf,
    options: GlobalOptions,
    update_path: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(cwd: &Path, options: GlobalOptions) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            options,
            update_path: true,
        }
    }

    /// Leave the process `PATH` alone.
    pub fn without_path_update(mut self) -> Self {
        self.update_path = false;
        self
    }

    /// Run the check against a specific archive source.
    pub fn run(&self, source: &dyn ArchiveSource, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = Session::load(&self.options, &self.cwd)?;
        let command = session.java_command()?;
        let minimum = session.manifest.jre.minimum_version.clone();
        let product_version = session.manifest.jre.product_version.clone();

        let mut bootstrapper = Bootstrapper::new(
            session.manifest,
            session.platform,
            session.install_dir,
            &command,
            source,
        )?;
        if !self.update_path {
            bootstrapper = bootstrapper.without_path_update();
        }

        match bootstrapper.check(ui)? {
            CheckOutcome::Satisfied { version } => {
                ui.success(&format!("Java {} satisfies {}", version, minimum));
            }
            CheckOutcome::Installed {
                reason,
                install_dir,
            } => {
                ui.message(&format!("Installed because {}", reason));
                ui.success(&format!(
                    "Installed Java {} into {}",
                    product_version,
                    install_dir.display()
                ));
            }
        }

        Ok(CommandResult::success())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(&HttpSource::new(), ui)
    }
}

#[cfg(test)]
mod tests {
    use super::super::session::testing::write_manifest;
    use super::*;
    use crate::error::BootstrapError;
    use crate::install::extract::fixtures::runtime_archive;
    use crate::install::fake::FakeSource;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn installs_when_java_is_missing() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "http://mirror.local/jdk");
        let source = FakeSource::serving(runtime_archive());
        let mut ui = MockUI::new();

        let result = CheckCommand::new(temp.path(), GlobalOptions::default())
            .without_path_update()
            .run(&source, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(source.opens.get(), 1);
        assert!(temp.path().join("jre/bin/java").is_file());
        assert!(ui.has_message("no Java runtime found"));
        assert!(ui.has_success("Installed Java 8u131"));
    }

    #[cfg(unix)]
    #[test]
    fn installed_runtime_satisfies_next_check() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "http://mirror.local/jdk");
        let source = FakeSource::serving(runtime_archive());

        CheckCommand::new(temp.path(), GlobalOptions::default())
            .without_path_update()
            .run(&source, &mut MockUI::new())
            .unwrap();

        let options = GlobalOptions {
            java: Some(temp.path().join("jre/bin/java").to_string_lossy().into_owned()),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let result = CheckCommand::new(temp.path(), options)
            .without_path_update()
            .run(&source, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(source.opens.get(), 1);
        assert!(ui.has_success("Java 1.8.0_131 satisfies 1.8"));
    }

    #[test]
    fn install_failure_propagates() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "http://mirror.local/jdk");
        let source = FakeSource::not_found();

        let err = CheckCommand::new(temp.path(), GlobalOptions::default())
            .without_path_update()
            .run(&source, &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, BootstrapError::Transport { .. }));
        assert!(!temp.path().join("jre").exists());
    }
}
