//! Download request resolution.

use std::time::Duration;

use crate::config::Manifest;
use crate::platform::PlatformDescriptor;

/// Cookie accepted by the legacy distribution host in place of a click-through license.
pub const LICENSE_COOKIE: &str =
    "gpw_e24=http://www.oracle.com/; oraclelicense=accept-securebackup-cookie";

/// Connect timeout applied to every download.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to fetch one runtime archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Archive URL.
    pub url: String,
    /// `Cookie` header value, if any.
    pub cookie: Option<String>,
    /// Skip TLS certificate validation.
    pub insecure_tls: bool,
    /// Overall transfer timeout.
    pub timeout: Option<Duration>,
}

impl DownloadRequest {
    /// Resolve the request for `platform` from the manifest.
    ///
    /// URL layout:
    /// `{base}/{product_version}-b{build}/{hash}/{prefix}-{product_version}-{platform}-{arch}.tar.gz`
    pub fn resolve(manifest: &Manifest, platform: &PlatformDescriptor) -> Self {
        let jre = &manifest.jre;
        let install = &manifest.install;

        let url = format!(
            "{}/{}-b{}/{}/{}",
            install.base_url.trim_end_matches('/'),
            jre.product_version,
            jre.build_number,
            jre.distribution_hash,
            archive_name(&install.archive_prefix, &jre.product_version, platform),
        );

        Self {
            url,
            cookie: install.license_cookie.then(|| LICENSE_COOKIE.to_string()),
            insecure_tls: install.insecure_tls,
            timeout: install.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// `{prefix}-{product_version}-{platform}-{arch}.tar.gz`
pub fn archive_name(prefix: &str, product_version: &str, platform: &PlatformDescriptor) -> String {
    format!(
        "{}-{}-{}-{}.tar.gz",
        prefix,
        product_version,
        platform.os.url_token(),
        platform.arch
    )
}
