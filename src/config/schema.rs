//! Runtime manifest schema.
//!
//! The manifest keeps the legacy `dependency.json` layout: a top-level
//! `JRE` object with `version`, `product_version`, `build_number` and
//! `hash`. Install behaviour lives in an optional `install` object.
//!
//! ```json
//! {
//!   "JRE": {
//!     "version": "1.8",
//!     "product_version": "8u131",
//!     "build_number": "11",
//!     "hash": "d54c1d3a095b4ff2b6607d096fa80163"
//!   }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Default distribution host and product path.
pub const DEFAULT_BASE_URL: &str = "https://download.oracle.com/otn-pub/java/jdk";

/// Default archive file name prefix (`jre-<version>-<platform>-<arch>.tar.gz`).
pub const DEFAULT_ARCHIVE_PREFIX: &str = "jre";

/// Default version-reporting program.
pub const DEFAULT_JAVA: &str = "java";

/// Default probe timeout in seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Root of a runtime manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// The pinned runtime.
    #[serde(rename = "JRE")]
    pub jre: RuntimeRequirement,

    /// How and where to install it.
    #[serde(default)]
    pub install: InstallSettings,
}

/// The runtime this process needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeRequirement {
    /// Lowest acceptable version reported by `java -version`.
    #[serde(rename = "version", alias = "minimum_version")]
    pub minimum_version: String,

    /// Product version used in the archive name (e.g. `8u131`).
    #[serde(deserialize_with = "string_or_number")]
    pub product_version: String,

    /// Build number used in the download path (`<version>-b<build>`).
    #[serde(deserialize_with = "string_or_number")]
    pub build_number: String,

    /// Distribution hash path segment of the download URL.
    #[serde(rename = "hash")]
    pub distribution_hash: String,

    /// Expected SHA-256 of the compressed archive, hex encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Install behaviour. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallSettings {
    /// Distribution host and product path, without trailing slash.
    pub base_url: String,

    /// Archive file name prefix.
    pub archive_prefix: String,

    /// Install directory. Relative paths resolve against the manifest's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Version-reporting program.
    pub java: String,

    /// Send the legacy license-acceptance cookie.
    pub license_cookie: bool,

    /// Skip TLS certificate validation (legacy distribution hosts only).
    pub insecure_tls: bool,

    /// Overall download timeout. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// How long the version command may run before it is killed.
    pub probe_timeout_secs: u64,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            archive_prefix: DEFAULT_ARCHIVE_PREFIX.to_string(),
            dir: None,
            java: DEFAULT_JAVA.to_string(),
            license_cookie: true,
            insecure_tls: false,
            timeout_secs: None,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}

/// Accept `"11"` as well as `11` for numeric-looking fields.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
