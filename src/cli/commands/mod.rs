//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`]. Those that need the
//! manifest load it through [`Session`], which applies the global
//! `--config`, `--install-dir` and `--java` overrides in one place.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod probe;
pub mod session;
pub mod status;
pub mod url;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use session::{GlobalOptions, Session};
