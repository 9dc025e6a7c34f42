//! jre-bootstrap - make sure a compatible Java runtime is available.
//!
//! Probes the system `java`, and when it is missing, unresponsive or older
//! than the manifest's minimum, downloads the pinned JRE archive for the
//! host platform and unpacks it into a local install directory.
//!
//! # Modules
//!
//! - [`bootstrap`] - Probe-then-install orchestration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runtime manifest loading and validation
//! - [`error`] - Error types and result aliases
//! - [`install`] - Download, verification and extraction
//! - [`platform`] - Host OS and architecture detection
//! - [`probe`] - Version probing and comparison
//! - [`shell`] - Process execution and `PATH` handling
//! - [`ui`] - Spinners, progress bars and terminal output
//!
//! # Example
//!
//! ```
//! use jre_bootstrap::probe::RuntimeVersion;
//!
//! let found = RuntimeVersion::parse("1.8.0_131").unwrap();
//! let minimum = RuntimeVersion::parse("1.8").unwrap();
//! assert!(found >= minimum);
//! ```
//!
//! For end-to-end installs, see [`check_jre`] and the integration tests.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod platform;
pub mod probe;
pub mod shell;
pub mod ui;

pub use bootstrap::{check_jre, Bootstrapper, CheckOutcome};
pub use error::{BootstrapError, Result};
