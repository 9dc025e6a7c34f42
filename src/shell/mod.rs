//! External program execution and environment detection.

pub mod command;
pub mod path;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult};
pub use path::{append_search_path, path_with_entry};
pub use platform::is_ci;
