//! Shared types used across all modules.
//!
//! This module defines the proof record and the values it is built from.
//! Collectors in other modules produce these types; the proof writer only
//! serializes them.

pub mod lookup;
pub mod record;

pub use lookup::Lookup;
pub use record::{ProofRecord, RECORD_KEYS, SystemInfo};
