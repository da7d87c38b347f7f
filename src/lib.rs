//! execproof — proof-of-execution generator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod fingerprint;
pub mod models;
pub mod network;
pub mod proof;
pub mod system;
