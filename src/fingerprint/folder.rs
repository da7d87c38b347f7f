//! Folder fingerprint.
//!
//! Hashes the folder's base name together with its change and modification
//! times, so renaming or recreating the folder yields a different value.
//! Copies that preserve timestamps (`cp -p`, `rsync -t`) keep the mtime,
//! which makes this a deterrent rather than a guarantee.

use std::fs::Metadata;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{digest, format_epoch};

/// Filesystem timestamps that feed the fingerprint, in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FolderTimes {
    /// Inode change time on Unix, creation time elsewhere.
    pub changed: f64,
    pub modified: f64,
}

impl FolderTimes {
    /// Stat `path` and extract its timestamps.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        Ok(Self {
            changed: changed_secs(&meta)?,
            modified: epoch_secs(meta.modified()?),
        })
    }
}

/// Fingerprint `folder`, falling back to its name alone if it cannot be
/// stat'ed.
pub fn folder_hash(folder: &Path) -> String {
    let name = folder_name(folder);
    let times = match FolderTimes::read(folder) {
        Ok(times) => Some(times),
        Err(e) => {
            tracing::debug!(
                "cannot read timestamps of {}: {e}; fingerprinting name only",
                folder.display()
            );
            None
        }
    };
    fingerprint(&name, times.as_ref())
}

/// Hash a folder name and, when available, its timestamps.
pub fn fingerprint(name: &str, times: Option<&FolderTimes>) -> String {
    match times {
        Some(t) => digest(&[name, &format_epoch(t.changed), &format_epoch(t.modified)]),
        None => digest(&[name]),
    }
}

/// Last path component, or an empty string for roots like `/`.
pub fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(unix)]
fn changed_secs(meta: &Metadata) -> io::Result<f64> {
    use std::os::unix::fs::MetadataExt;
    Ok(meta.ctime() as f64 + meta.ctime_nsec() as f64 * 1e-9)
}

#[cfg(not(unix))]
fn changed_secs(meta: &Metadata) -> io::Result<f64> {
    meta.created().map(epoch_secs)
}

fn epoch_secs(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}
