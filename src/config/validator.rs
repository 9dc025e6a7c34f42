//! Manifest validation.
//!
//! Catches values that would otherwise surface later as a malformed URL
//! or a confusing download failure.

use crate::config::schema::Manifest;
use crate::error::{BootstrapError, Result};
use crate::probe::RuntimeVersion;

/// Validate a parsed manifest.
///
/// Returns the first problem found as `ConfigValidationError`.
pub fn validate(manifest: &Manifest) -> Result<()> {
    let jre = &manifest.jre;

    for (field, value) in [
        ("JRE.version", &jre.minimum_version),
        ("JRE.product_version", &jre.product_version),
        ("JRE.build_number", &jre.build_number),
        ("JRE.hash", &jre.distribution_hash),
        ("install.archive_prefix", &manifest.install.archive_prefix),
        ("install.java", &manifest.install.java),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(format!("'{}' must not be empty", field)));
        }
    }

    if RuntimeVersion::parse(&jre.minimum_version).is_none() {
        return Err(invalid(format!(
            "'JRE.version' must start with a number, got '{}'",
            jre.minimum_version
        )));
    }

    for (field, value) in [
        ("JRE.product_version", &jre.product_version),
        ("JRE.build_number", &jre.build_number),
        ("JRE.hash", &jre.distribution_hash),
        ("install.archive_prefix", &manifest.install.archive_prefix),
    ] {
        if value.contains('/') || value.contains('\\') {
            return Err(invalid(format!(
                "'{}' is a URL path segment and must not contain slashes",
                field
            )));
        }
    }

    if let Some(digest) = &jre.sha256 {
        if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(format!(
                "'JRE.sha256' must be 64 hex characters, got '{}'",
                digest
            )));
        }
    }

    let base_url = &manifest.install.base_url;
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        return Err(invalid(format!(
            "'install.base_url' must be an http(s) URL, got '{}'",
            base_url
        )));
    }

    if manifest.install.probe_timeout_secs == 0 {
        return Err(invalid("'install.probe_timeout_secs' must be positive"));
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> BootstrapError {
    BootstrapError::ConfigValidationError {
        message: message.into(),
    }
}
