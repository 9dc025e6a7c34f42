//! Probe result types.
//!
//! A probe either finds an adequate runtime or explains why one has to
//! be installed. The reason is kept so logs and CLI output can tell
//! "not installed" apart from "installed but unusable".

use std::fmt;
use std::time::Duration;

/// Why the runtime has to be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallReason {
    /// The version command could not be started.
    NotFound,

    /// The command ran but printed no recognizable version.
    ParseFailure {
        /// Trimmed command output, for diagnostics.
        output: String,
    },

    /// A runtime was found but it is older than required.
    VersionTooLow {
        /// Version the runtime reported.
        found: String,
        /// Minimum version from the manifest.
        required: String,
    },

    /// The command did not exit in time and was killed.
    Unresponsive {
        /// The timeout that was exceeded.
        timeout: Duration,
    },
}

impl InstallReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            InstallReason::NotFound => "not_found",
            InstallReason::ParseFailure { .. } => "parse_failure",
            InstallReason::VersionTooLow { .. } => "version_too_low",
            InstallReason::Unresponsive { .. } => "unresponsive",
        }
    }
}

impl fmt::Display for InstallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallReason::NotFound => write!(f, "no Java runtime found"),
            InstallReason::ParseFailure { output } if output.is_empty() => {
                write!(f, "Java runtime printed no version")
            }
            InstallReason::ParseFailure { output } => {
                write!(f, "could not read Java version from: {}", output)
            }
            InstallReason::VersionTooLow { found, required } => {
                write!(f, "Java {} is older than required {}", found, required)
            }
            InstallReason::Unresponsive { timeout } => {
                write!(f, "Java version check did not finish within {:?}", timeout)
            }
        }
    }
}

/// The result of probing the installed runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// An adequate runtime is available.
    Satisfied {
        /// Version the runtime reported.
        version: String,
    },

    /// The runtime has to be installed.
    NeedsInstall(InstallReason),
}

impl ProbeOutcome {
    /// Whether the runtime is adequate.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, ProbeOutcome::Satisfied { .. })
    }

    /// The install reason, if any.
    pub fn install_reason(&self) -> Option<&InstallReason> {
        match self {
            ProbeOutcome::NeedsInstall(reason) => Some(reason),
            ProbeOutcome::Satisfied { .. } => None,
        }
    }
}
