//! Streaming `.tar.gz` extraction.
//!
//! Distribution archives wrap everything in one top-level directory
//! (`jre1.8.0_131/bin/java`). That component is dropped on the way out so
//! the install directory holds `bin/java` directly.

use std::fs;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use sha2::{Digest, Sha256};

use crate::error::{BootstrapError, Result};

/// Drop the first component of an archive path.
///
/// A name without a separator has nothing to strip and is kept, unless
/// it is the top-level directory entry itself (`is_dir`), which yields
/// `None`. Leading `./` is ignored.
pub fn strip_top_level(path: &Path, is_dir: bool) -> Option<PathBuf> {
    let components: Vec<Component> = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    match components.as_slice() {
        [] => None,
        [_] if is_dir => None,
        [single] => Some(PathBuf::from(single.as_os_str())),
        [_, rest @ ..] => Some(rest.iter().collect()),
    }
}

/// Whether a rewritten entry path stays inside the destination.
fn is_contained(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::Normal(_)))
}

/// Reader that hashes everything passing through it.
///
/// Also remembers the first error from the wrapped reader, so a failed
/// download can be told apart from a corrupt archive once the decoder
/// has wrapped the error.
pub struct HashingReader<R> {
    inner: R,
    hasher: Sha256,
    bytes: u64,
    upstream_error: Option<String>,
}

impl<R: Read> HashingReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            bytes: 0,
            upstream_error: None,
        }
    }

    /// First error the wrapped reader returned, if any.
    pub fn upstream_error(&self) -> Option<&str> {
        self.upstream_error.as_deref()
    }

    /// Bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes
    }

    /// Hex-encoded SHA-256 of everything read.
    pub fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

impl<R: Read> Read for HashingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf) {
            Ok(n) => {
                self.hasher.update(&buf[..n]);
                self.bytes += n as u64;
                Ok(n)
            }
            Err(e) => {
                if e.kind() != io::ErrorKind::Interrupted && self.upstream_error.is_none() {
                    self.upstream_error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }
}

/// Unpack a gzip-compressed tar stream into `dest`, stripping the
/// top-level directory.
///
/// `dest` must exist. Entries that would land outside `dest` are
/// rejected. The input is read to its end, so a wrapping
/// [`HashingReader`] sees every byte. Returns the number of entries
/// written.
pub fn unpack_stripped<R: Read>(reader: &mut R, dest: &Path) -> Result<usize> {
    let root = dest.canonicalize()?;
    let mut archive = tar::Archive::new(GzDecoder::new(&mut *reader));
    archive.set_preserve_mtime(true);

    let mut written = 0;
    for entry in archive.entries().map_err(BootstrapError::extraction)? {
        let mut entry = entry.map_err(BootstrapError::extraction)?;
        let original = entry.path().map_err(BootstrapError::extraction)?.into_owned();

        let is_dir = entry.header().entry_type().is_dir() || entry.path_bytes().ends_with(b"/");
        let Some(relative) = strip_top_level(&original, is_dir) else {
            continue;
        };
        if !is_contained(&relative) {
            return Err(BootstrapError::extraction(format!(
                "unsafe entry path '{}'",
                original.display()
            )));
        }

        let target = root.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
            // A symlink earlier in the archive must not redirect writes.
            if !parent.canonicalize()?.starts_with(&root) {
                return Err(BootstrapError::extraction(format!(
                    "entry '{}' escapes the install directory",
                    original.display()
                )));
            }
        }

        if entry.header().entry_type().is_hard_link() {
            let link = entry
                .link_name()
                .map_err(BootstrapError::extraction)?
                .ok_or_else(|| {
                    BootstrapError::extraction(format!(
                        "hard link '{}' has no target",
                        original.display()
                    ))
                })?;
            let unsafe_link = || {
                BootstrapError::extraction(format!(
                    "unsafe hard link target '{}'",
                    link.display()
                ))
            };
            let link_target = strip_top_level(&link, false)
                .filter(|p| is_contained(p))
                .ok_or_else(unsafe_link)?;
            // Resolve symlinks unpacked earlier before linking.
            let source = root
                .join(link_target)
                .canonicalize()
                .map_err(BootstrapError::extraction)?;
            if !source.starts_with(&root) {
                return Err(unsafe_link());
            }
            fs::hard_link(source, &target)?;
        } else {
            entry.unpack(&target).map_err(|e| {
                BootstrapError::extraction(format!("{}: {}", relative.display(), e))
            })?;
        }
        written += 1;
    }

    // tar stops at the end-of-archive marker; finish the gzip member
    // (which checks its CRC) and consume any trailing bytes.
    let mut decoder = archive.into_inner();
    io::copy(&mut decoder, &mut io::sink()).map_err(BootstrapError::extraction)?;
    drop(decoder);
    io::copy(reader, &mut io::sink()).map_err(BootstrapError::extraction)?;

    tracing::debug!("Unpacked {} entries into {}", written, dest.display());
    Ok(written)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    /// Build a `.tar.gz` holding `files` (path, contents) as executable regular files.
    pub fn tar_gz(files: &[(&str, &str)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (path, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o755);
            header.set_entry_type(tar::EntryType::Regular);
            header.set_cksum();
            builder.append_data(&mut header, path, data.as_bytes()).unwrap();
        }

        builder.into_inner().unwrap().finish().unwrap()
    }

    /// A runtime archive with a working-looking `bin/java`.
    pub fn runtime_archive() -> Vec<u8> {
        tar_gz(&[
            (
                "jre1.8.0_131/bin/java",
                "#!/bin/sh\necho 'java version \"1.8.0_131\"' >&2\n",
            ),
            ("jre1.8.0_131/lib/rt.jar", "classes"),
            ("jre1.8.0_131/release", "JAVA_VERSION=\"1.8.0_131\"\n"),
        ])
    }
}
