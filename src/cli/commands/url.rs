//! The `jre-bootstrap url` command: print the resolved download URL.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::install::DownloadRequest;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session::{GlobalOptions, Session};

/// The url command implementation.
pub struct UrlCommand {
    cwd: PathBuf,
    options: GlobalOptions,
}

impl UrlCommand {
    /// Create a new url command.
    pub fn new(cwd: &Path, options: GlobalOptions) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            options,
        }
    }

    /// Resolve the request without printing it.
    pub fn resolve(&self) -> Result<DownloadRequest> {
        let session = Session::load(&self.options, &self.cwd)?;
        Ok(DownloadRequest::resolve(&session.manifest, &session.platform))
    }
}

impl Command for UrlCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Plain stdout regardless of output mode, for use in scripts.
        println!("{}", self.resolve()?.url);
        Ok(CommandResult::success())
    }
}
