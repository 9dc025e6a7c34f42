//! Runtime manifest loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use jre_bootstrap::config::load_manifest;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("dependency.json");
//! fs::write(
//!     &path,
//!     r#"{"JRE": {"version": "1.8", "product_version": "8u131",
//!         "build_number": "11", "hash": "d54c1d3a095b4ff2b6607d096fa80163"}}"#,
//! )
//! .unwrap();
//!
//! let manifest = load_manifest(&path).unwrap();
//! assert_eq!(manifest.jre.minimum_version, "1.8");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    find_manifest, load_manifest, parse_manifest, resolve_install_dir, DEFAULT_INSTALL_DIR_NAME,
    MANIFEST_NAMES,
};
pub use schema::{
    InstallSettings, Manifest, RuntimeRequirement, DEFAULT_ARCHIVE_PREFIX, DEFAULT_BASE_URL,
    DEFAULT_JAVA, DEFAULT_PROBE_TIMEOUT_SECS,
};
pub use validator::validate;
