//! Content hashes that tie a proof to a folder and to a single run.
//!
//! Both hashes are SHA-256 over `|`-joined text parts, hex encoded.

pub mod folder;
pub mod token;

use sha2::{Digest, Sha256};

use crate::constants::FIELD_DELIMITER;

pub use folder::{FolderTimes, folder_hash};
pub use token::unique_token;

/// Hash `parts` joined by the field delimiter.
pub fn digest(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update(FIELD_DELIMITER.as_bytes());
        }
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Render epoch seconds the way the fingerprint has always recorded them:
/// shortest round-trip decimal, with a trailing `.0` for whole seconds.
pub fn format_epoch(secs: f64) -> String {
    if secs.is_finite() && secs.fract() == 0.0 {
        format!("{secs:.1}")
    } else {
        format!("{secs}")
    }
}
