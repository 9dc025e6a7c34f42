//! The `jre-bootstrap install` command: install the pinned runtime
//! without probing first.

use std::path::{Path, PathBuf};

use crate::bootstrap::Bootstrapper;
use crate::error::Result;
use crate::install::{ArchiveSource, HttpSource};
use crate::ui::{format_bytes, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::session::{GlobalOptions, Session};

/// The install command implementation.
pub struct InstallCommand {
    cwd: PathBuf,
    options: GlobalOptions,
    update_path: bool,
}

impl InstallCommand {
    /// Create a new install command.
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

    /// Install from a specific archive source.
    pub fn run(&self, source: &dyn ArchiveSource, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = Session::load(&self.options, &self.cwd)?;
        let command = session.java_command()?;

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

        let receipt = bootstrapper.install(ui)?;
        ui.success(&format!(
            "Installed Java {} ({}) into {}",
            receipt.product_version,
            format_bytes(receipt.size_bytes),
            bootstrapper.install_dir().display()
        ));
        Ok(CommandResult::success())
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(&HttpSource::new(), ui)
    }
}

#[cfg(test)]
mod tests {
    use super::super::session::testing::write_manifest;
    use super::*;
    use crate::install::extract::fixtures::runtime_archive;
    use crate::install::fake::FakeSource;
    use crate::install::InstallReceipt;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn installs_even_when_already_present() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "http://mirror.local/jdk");
        let source = FakeSource::serving(runtime_archive());

        for _ in 0..2 {
            let mut ui = MockUI::new();
            let result = InstallCommand::new(temp.path(), GlobalOptions::default())
                .without_path_update()
                .run(&source, &mut ui)
                .unwrap();
            assert!(result.success);
            assert!(ui.has_success("Installed Java 8u131"));
        }

        assert_eq!(source.opens.get(), 2);
        let receipt = InstallReceipt::load(&temp.path().join("jre")).unwrap().unwrap();
        assert_eq!(receipt.build_number, "11");
    }
}
