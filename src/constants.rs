//! App-wide constants.
//!
//! Centralises the tool name, file names, endpoints, and environment
//! variable names so a rename only requires changing this file.

use std::time::Duration;

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "execproof";

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Name of the proof file written into the target directory.
pub const PROOF_FILENAME: &str = "project_proof.json";

/// Local config filename (e.g. `.execproof.toml` in the target directory).
pub const CONFIG_FILENAME: &str = ".execproof.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "execproof";

/// Placeholder recorded for any lookup that could not be completed.
pub const UNKNOWN: &str = "Unknown";

/// Public IP echo service queried for the external address.
pub const IP_ECHO_URL: &str = "https://api.ipify.org?format=json";

/// Upper bound on the public IP request.
pub const IP_ECHO_TIMEOUT: Duration = Duration::from_secs(5);

/// Address the UDP probe "connects" to so the OS picks an outbound interface.
/// No datagram is ever sent to it.
pub const LOCAL_PROBE_ADDR: &str = "8.8.8.8:80";

/// Delimiter between the parts hashed into fingerprints and tokens.
pub const FIELD_DELIMITER: &str = "|";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_IP_ECHO_URL: &str = "EXECPROOF_IP_ECHO_URL";
pub const ENV_TIMEOUT: &str = "EXECPROOF_TIMEOUT";
pub const ENV_PROBE_ADDR: &str = "EXECPROOF_PROBE_ADDR";
pub const ENV_OUTPUT: &str = "EXECPROOF_OUTPUT";
pub const ENV_OFFLINE: &str = "EXECPROOF_OFFLINE";
