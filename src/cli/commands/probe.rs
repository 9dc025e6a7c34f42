//! The `jre-bootstrap probe` command: report without installing.

use std::path::{Path, PathBuf};

use crate::bootstrap::Bootstrapper;
use crate::error::Result;
use crate::install::HttpSource;
use crate::probe::ProbeOutcome;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session::{GlobalOptions, Session};

/// The probe command implementation.
pub struct ProbeCommand {
    cwd: PathBuf,
    options: GlobalOptions,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(cwd: &Path, options: GlobalOptions) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            options,
        }
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = Session::load(&self.options, &self.cwd)?;
        let command = session.java_command()?;
        let minimum = session.manifest.jre.minimum_version.clone();
        // Never opened; the probe does not download.
        let source = HttpSource::new();

        let bootstrapper = Bootstrapper::new(
            session.manifest,
            session.platform,
            session.install_dir,
            &command,
            &source,
        )?;

        let spinner_msg = format!("Checking Java (minimum {})", minimum);
        let mut spinner = ui.start_spinner(&spinner_msg);
        match bootstrapper.probe() {
            ProbeOutcome::Satisfied { version } => {
                spinner.finish_clear();
                ui.success(&format!("Java {} satisfies {}", version, minimum));
                Ok(CommandResult::success())
            }
            ProbeOutcome::NeedsInstall(reason) => {
                spinner.finish_clear();
                ui.warning(&format!("Java needs to be installed: {}", reason));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
