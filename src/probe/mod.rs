//! Java runtime detection.
//!
//! Runs `java -version`, pulls the first quoted token out of its output
//! and compares it against the manifest's minimum version. Probing never
//! fails: every problem becomes an [`InstallReason`].
//!
//! # Example
//!
//! ```no_run
//! use jre_bootstrap::probe::{JavaCommand, RuntimeVersion, VersionProbe};
//! use std::time::Duration;
//!
//! let command = JavaCommand::new("java", Duration::from_secs(10));
//! let minimum = RuntimeVersion::parse("1.8").unwrap();
//! let outcome = VersionProbe::new(&command, minimum).probe();
//! println!("{:?}", outcome);
//! ```

pub mod status;
pub mod version;

pub use status::{InstallReason, ProbeOutcome};
pub use version::{extract_version_token, RuntimeVersion};

use std::ffi::OsString;
use std::time::Duration;

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// Longest command output kept in a `ParseFailure` reason.
const MAX_REPORTED_OUTPUT: usize = 200;

/// Something that reports the installed runtime's version.
pub trait VersionCommand {
    /// Run the command. `Err` means it could not be started.
    fn run(&self) -> Result<CommandResult>;

    /// Timeout the command runs under, reported on `Unresponsive`.
    fn timeout(&self) -> Duration;

    /// Human-readable command line, for logs.
    fn describe(&self) -> String;
}

/// `<program> -version` run as a child process.
#[derive(Debug, Clone)]
pub struct JavaCommand {
    program: String,
    search_path: Option<OsString>,
    timeout: Duration,
}

impl JavaCommand {
    /// Create a command for `program` killed after `timeout`.
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            search_path: None,
            timeout,
        }
    }

    /// Resolve the program (and run it) with this `PATH`.
    pub fn with_search_path(mut self, path: OsString) -> Self {
        self.search_path = Some(path);
        self
    }
}

impl VersionCommand for JavaCommand {
    fn run(&self) -> Result<CommandResult> {
        let mut options = CommandOptions {
            timeout: Some(self.timeout),
            ..Default::default()
        };
        if let Some(path) = &self.search_path {
            options.env.insert("PATH".to_string(), path.clone());
        }
        execute(&self.program, &["-version"], &options)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn describe(&self) -> String {
        format!("{} -version", self.program)
    }
}

/// Decides whether the installed runtime meets a minimum version.
pub struct VersionProbe<'a> {
    command: &'a dyn VersionCommand,
    minimum: RuntimeVersion,
}

impl<'a> VersionProbe<'a> {
    /// Create a probe running `command` against `minimum`.
    pub fn new(command: &'a dyn VersionCommand, minimum: RuntimeVersion) -> Self {
        Self { command, minimum }
    }

    /// Probe the runtime.
    pub fn probe(&self) -> ProbeOutcome {
        tracing::debug!("Probing runtime with '{}'", self.command.describe());

        let outcome = match self.command.run() {
            Ok(result) if result.timed_out => ProbeOutcome::NeedsInstall(InstallReason::Unresponsive {
                timeout: self.command.timeout(),
            }),
            Ok(result) => evaluate_output(&result, &self.minimum),
            Err(e) => {
                tracing::debug!("Version command could not start: {}", e);
                ProbeOutcome::NeedsInstall(InstallReason::NotFound)
            }
        };

        match &outcome {
            ProbeOutcome::Satisfied { version } => {
                tracing::debug!("Runtime {} satisfies {}", version, self.minimum)
            }
            ProbeOutcome::NeedsInstall(reason) => {
                tracing::debug!("Runtime needs install: {}", reason)
            }
        }
        outcome
    }
}

/// Judge a finished version command against `minimum`.
///
/// The token is taken from stderr first (where `java -version` writes)
/// and stdout second. A non-zero exit is fine as long as a version was
/// printed.
pub fn evaluate_output(result: &CommandResult, minimum: &RuntimeVersion) -> ProbeOutcome {
    let token = extract_version_token(&result.stderr)
        .or_else(|| extract_version_token(&result.stdout));

    let Some(found) = token.and_then(RuntimeVersion::parse) else {
        return ProbeOutcome::NeedsInstall(InstallReason::ParseFailure {
            output: summarize_output(result),
        });
    };

    if found >= *minimum {
        ProbeOutcome::Satisfied {
            version: found.to_string(),
        }
    } else {
        ProbeOutcome::NeedsInstall(InstallReason::VersionTooLow {
            found: found.to_string(),
            required: minimum.to_string(),
        })
    }
}

fn summarize_output(result: &CommandResult) -> String {
    let combined = format!("{}\n{}", result.stderr.trim(), result.stdout.trim());
    let combined = combined.trim();
    if combined.chars().count() <= MAX_REPORTED_OUTPUT {
        return combined.to_string();
    }
    let mut cut: String = combined.chars().take(MAX_REPORTED_OUTPUT).collect();
    cut.push_str("...");
    cut
}


#[cfg(test)]
mod tests {
    use super::fake::{result, FakeCommand};
    use super::*;

    fn min(v: &str) -> RuntimeVersion {
        RuntimeVersion::parse(v).unwrap()
    }

    #[test]
    fn java8_satisfies_1_8() {
        let cmd = FakeCommand::printing("java version \"1.8.0_131\"\nJava(TM) SE Runtime Environment\n");
        let outcome = VersionProbe::new(&cmd, min("1.8")).probe();
        assert_eq!(
            outcome,
            ProbeOutcome::Satisfied {
                version: "1.8.0_131".into()
            }
        );
    }

    #[test]
    fn java11_satisfies_1_8() {
        let cmd = FakeCommand::printing("openjdk version \"11.0.2\" 2019-01-15\n");
        assert!(VersionProbe::new(&cmd, min("1.8")).probe().is_satisfied());
    }

    #[test]
    fn exact_minimum_is_satisfied() {
        let cmd = FakeCommand::printing("java version \"1.8\"\n");
        assert!(VersionProbe::new(&cmd, min("1.8")).probe().is_satisfied());
    }

    #[test]
    fn older_runtime_needs_install() {
        let cmd = FakeCommand::printing("java version \"1.7.0_80\"\n");
        let outcome = VersionProbe::new(&cmd, min("1.8")).probe();
        assert_eq!(
            outcome,
            ProbeOutcome::NeedsInstall(InstallReason::VersionTooLow {
                found: "1.7.0_80".into(),
                required: "1.8".into(),
            })
        );
    }

    #[test]
    fn missing_program_is_not_found() {
        let cmd = FakeCommand::missing();
        let outcome = VersionProbe::new(&cmd, min("1.8")).probe();
        assert_eq!(outcome, ProbeOutcome::NeedsInstall(InstallReason::NotFound));
        assert_eq!(cmd.calls.get(), 1);
    }

    #[test]
    fn unparseable_output_is_parse_failure() {
        let cmd = FakeCommand::with_result(result("Error: could not create the VM", "", Some(1), false));
        let outcome = VersionProbe::new(&cmd, min("1.8")).probe();
        match outcome {
            ProbeOutcome::NeedsInstall(InstallReason::ParseFailure { output }) => {
                assert!(output.contains("could not create the VM"));
            }
            other => panic!("expected ParseFailure, got {:?}", other),
        }
    }

    #[test]
    fn timeout_is_unresponsive() {
        let cmd = FakeCommand::with_result(result("", "", None, true));
        let outcome = VersionProbe::new(&cmd, min("1.8")).probe();
        assert_eq!(
            outcome,
            ProbeOutcome::NeedsInstall(InstallReason::Unresponsive {
                timeout: Duration::from_secs(10)
            })
        );
    }

    #[test]
    fn stdout_is_fallback() {
        let r = result("", "java version \"17.0.1\"", Some(0), false);
        assert!(evaluate_output(&r, &min("1.8")).is_satisfied());
    }

    #[test]
    fn stderr_wins_over_stdout() {
        let r = result("java version \"1.7.0\"", "java version \"17\"", Some(0), false);
        assert!(!evaluate_output(&r, &min("1.8")).is_satisfied());
    }

    #[test]
    fn non_zero_exit_with_version_still_counts() {
        let r = result("java version \"1.8.0_202\"", "", Some(1), false);
        assert!(evaluate_output(&r, &min("1.8")).is_satisfied());
    }

    #[test]
    fn quoted_non_version_is_parse_failure() {
        let r = result("unknown option \"-version\"", "", Some(2), false);
        assert!(matches!(
            evaluate_output(&r, &min("1.8")),
            ProbeOutcome::NeedsInstall(InstallReason::ParseFailure { .. })
        ));
    }

    #[test]
    fn long_output_is_truncated() {
        let noise = "x".repeat(1000);
        let r = result(&noise, "", Some(1), false);
        match evaluate_output(&r, &min("1.8")) {
            ProbeOutcome::NeedsInstall(InstallReason::ParseFailure { output }) => {
                assert!(output.len() <= MAX_REPORTED_OUTPUT + 3);
                assert!(output.ends_with("..."));
            }
            other => panic!("expected ParseFailure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn java_command_reports_missing_program() {
        let cmd = JavaCommand::new("definitely-not-java-1234", Duration::from_secs(5));
        let outcome = VersionProbe::new(&cmd, min("1.8")).probe();
        assert_eq!(outcome, ProbeOutcome::NeedsInstall(InstallReason::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn java_command_uses_search_path() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("fakejava");
        std::fs::write(
            &script,
            "#!/bin/sh\necho 'java version \"1.8.0_131\"' >&2\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let path = crate::shell::path_with_entry(std::env::var_os("PATH").as_deref(), temp.path())
            .unwrap();
        let cmd = JavaCommand::new("fakejava", Duration::from_secs(5)).with_search_path(path);
        assert!(VersionProbe::new(&cmd, min("1.8")).probe().is_satisfied());
    }
}
