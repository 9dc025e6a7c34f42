//! Error types for jre-bootstrap operations.
//!
//! This module defines [`BootstrapError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are never errors: they become an
//!   [`InstallReason`](crate::probe::InstallReason) and trigger an install
//! - Download and extraction failures propagate to the caller unchanged
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jre-bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Runtime manifest not found at expected location.
    #[error("Manifest not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the runtime manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Manifest parsed but holds unusable values.
    #[error("Invalid manifest: {message}")]
    ConfigValidationError { message: String },

    /// Host operating system has no distribution archive.
    #[error("Unsupported operating system: {os}")]
    UnsupportedPlatform { os: String },

    /// Connection, TLS or HTTP-level failure while downloading.
    #[error("Download of {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Corrupt archive, unsafe entry or filesystem failure while unpacking.
    #[error("Failed to extract archive: {message}")]
    Extraction { message: String },

    /// Downloaded archive does not match the configured digest.
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootstrapError {
    /// Create an `Extraction` error from any displayable error.
    pub fn extraction(err: impl std::fmt::Display) -> Self {
        Self::Extraction {
            message: err.to_string(),
        }
    }

    /// Create a `Transport` error for a URL.
    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for jre-bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
