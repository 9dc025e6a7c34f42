//! The `jre-bootstrap status` command.
//!
//! Shows where the runtime goes and what, if anything, is installed
//! there. Reads the install receipt; never runs `java` or downloads.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::error::{BootstrapError, Result};
use crate::install::{DownloadRequest, InstallReceipt};
use crate::ui::{format_bytes, format_relative_time, Theme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::session::{GlobalOptions, Session};

const FIELD_WIDTH: usize = 12;

/// The status command implementation.
pub struct StatusCommand {
    cwd: PathBuf,
    options: GlobalOptions,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(cwd: &Path, options: GlobalOptions, args: StatusArgs) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            options,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = Session::load(&self.options, &self.cwd)?;
        let receipt = InstallReceipt::load(&session.install_dir)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&receipt).map_err(|e| {
                BootstrapError::Other(anyhow::anyhow!("Cannot encode receipt: {}", e))
            })?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        let theme = Theme::plain();
        let field = |key: &str, value: &str| theme.format_field(key, value, FIELD_WIDTH);
        let jre = &session.manifest.jre;

        ui.show_header("jre-bootstrap status");
        ui.message(&field("Manifest", &session.manifest_path.display().to_string()));
        ui.message(&field("Minimum", &jre.minimum_version));
        ui.message(&field(
            "Pinned",
            &format!("{} (build {})", jre.product_version, jre.build_number),
        ));
        ui.message(&field(
            "Platform",
            &format!("{}-{}", session.platform.os.url_token(), session.platform.arch),
        ));
        ui.message(&field(
            "Download",
            &DownloadRequest::resolve(&session.manifest, &session.platform).url,
        ));
        ui.message(&field("Install dir", &session.install_dir.display().to_string()));

        let bin_dir = session.bin_dir();
        match receipt {
            Some(receipt) => {
                ui.message(&field(
                    "Installed",
                    &format!(
                        "{} ({})",
                        receipt.product_version,
                        format_relative_time(receipt.installed_at)
                    ),
                ));
                ui.message(&field("Size", &format_bytes(receipt.size_bytes)));
                ui.message(&field("SHA-256", &receipt.sha256));
                if bin_dir.is_dir() {
                    ui.success(&format!("Runtime present at {}", bin_dir.display()));
                } else {
                    ui.warning(&format!(
                        "Receipt found but {} is missing; run 'jre-bootstrap install'",
                        bin_dir.display()
                    ));
                }
            }
            None if bin_dir.is_dir() => {
                ui.message(&field("Installed", "unknown (no receipt)"));
                ui.success(&format!("Runtime present at {}", bin_dir.display()));
            }
            None => {
                ui.message(&field("Installed", "nothing"));
            }
        }

        Ok(CommandResult::success())
    }
}
