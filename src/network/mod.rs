//! Best-effort network address lookups.
//!
//! Both lookups return a [`Lookup`](crate::models::Lookup); their failures
//! are logged at debug level and never reach the caller.

pub mod local;
pub mod public;

use thiserror::Error;

pub use local::local_ip;
pub use public::{IpEchoClient, OfflineSource, PublicIpSource, public_ip};

/// Why a lookup produced no address.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response has no `{0}` field")]
    MissingField(&'static str),

    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),

    #[error("network lookups are disabled")]
    Disabled,
}
