//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// jre-bootstrap - make sure a compatible Java runtime is available.
#[derive(Debug, Parser)]
#[command(name = "jre-bootstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the runtime manifest (default: dependency.json in the
    /// current directory, then next to the executable)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to install the runtime into (overrides the manifest)
    #[arg(long, global = true, value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Program used for the version check (overrides the manifest)
    #[arg(long, global = true, env = "JRE_BOOTSTRAP_JAVA", value_name = "PROGRAM")]
    pub java: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the Java runtime and install it if needed (default)
    Check,

    /// Check the Java runtime without installing (exit code 1 if inadequate)
    Probe,

    /// Download and install the pinned runtime unconditionally
    Install,

    /// Print the download URL for this platform
    Url,

    /// Show the install directory and what is installed there
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output the install receipt as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
