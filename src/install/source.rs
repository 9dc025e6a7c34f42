//! Archive transport.
//!
//! An [`ArchiveSource`] turns a [`DownloadRequest`] into a byte stream.
//! The installer only ever sees `Read`, so tests can serve archives from
//! memory and the HTTP body is never buffered whole.

use std::io::Read;

use reqwest::blocking::Client;
use reqwest::header::{COOKIE, USER_AGENT};

use crate::error::{BootstrapError, Result};
use crate::install::request::{DownloadRequest, CONNECT_TIMEOUT};

/// Opened archive stream.
pub struct ArchiveStream {
    /// Compressed archive bytes.
    pub reader: Box<dyn Read + Send>,
    /// Advertised size, when known.
    pub content_length: Option<u64>,
}

/// Where archives come from.
pub trait ArchiveSource {
    /// Open the archive described by `request`.
    ///
    /// Errors opening the stream (connect, TLS, non-2xx status) are
    /// `Transport` errors. Errors while reading surface from the reader.
    fn open(&self, request: &DownloadRequest) -> Result<ArchiveStream>;
}

/// Streaming HTTP(S) GET over a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    user_agent: String,
}

impl HttpSource {
    /// Create a source identifying itself with this crate's name and version.
    pub fn new() -> Self {
        Self {
            user_agent: format!("jre-bootstrap/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    fn client(&self, request: &DownloadRequest) -> Result<Client> {
        if request.insecure_tls {
            tracing::warn!("TLS certificate validation is disabled for {}", request.url);
        }

        // One download per process; no idle connections are kept.
        Client::builder()
            .pool_max_idle_per_host(0)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request.timeout)
            .danger_accept_invalid_certs(request.insecure_tls)
            .build()
            .map_err(|e| BootstrapError::transport(&request.url, e))
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveSource for HttpSource {
    fn open(&self, request: &DownloadRequest) -> Result<ArchiveStream> {
        let client = self.client(request)?;

        let mut builder = client
            .get(&request.url)
            .header(USER_AGENT, &self.user_agent);
        if let Some(cookie) = &request.cookie {
            builder = builder.header(COOKIE, cookie);
        }

        tracing::debug!("GET {}", request.url);
        let response = builder
            .send()
            .map_err(|e| BootstrapError::transport(&request.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BootstrapError::transport(
                &request.url,
                format!("HTTP {}", status),
            ));
        }

        let content_length = response.content_length();
        tracing::debug!(
            "Download started ({})",
            content_length.map_or_else(|| "size unknown".to_string(), |n| format!("{} bytes", n))
        );

        Ok(ArchiveStream {
            reader: Box::new(response),
            content_length,
        })
    }
}
