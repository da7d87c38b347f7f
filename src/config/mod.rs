//! Configuration loading and layering.
//!
//! Handles `.execproof.toml` loading, environment variable resolution,
//! and the defaults the CLI flags are merged over.

pub mod loader;

pub use loader::{Config, ConfigError, NetworkConfig, OutputConfig};
