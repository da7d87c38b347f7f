//! Per-run nonce.

use uuid::Uuid;

use super::{digest, format_epoch};
use crate::system;

/// Fresh token bound to this machine and this instant.
///
/// Hashes a random v4 UUID, the hostname, and the current time with
/// microsecond resolution. Not reproducible.
pub fn unique_token() -> String {
    let now = chrono::Utc::now().timestamp_micros() as f64 / 1e6;
    token_from(&Uuid::new_v4(), &system::hostname(), now)
}

/// Deterministic core of [`unique_token`].
pub fn token_from(id: &Uuid, hostname: &str, epoch_secs: f64) -> String {
    digest(&[&id.to_string(), hostname, &format_epoch(epoch_secs)])
}
