//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. File passed with `--config`
//! 4. `.execproof.toml` in the target directory
//! 5. `~/.config/execproof/config.toml` (global defaults)
//! 6. Built-in defaults
//!
//! Each file is read as a partial layer: a key it sets overrides every lower
//! layer, a key it omits leaves them alone.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub network: NetworkConfig,
}

/// Where the proof lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name of the proof, relative to the target directory.
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: constants::PROOF_FILENAME.to_string(),
        }
    }
}

/// Network lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// IP echo endpoint returning `{"ip": "..."}`.
    pub ip_echo_url: String,
    /// Timeout for the public IP request, in seconds.
    pub timeout_secs: u64,
    /// `host:port` the UDP probe connects to.
    pub probe_addr: String,
    /// Skip the public IP request entirely.
    pub offline: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ip_echo_url: constants::IP_ECHO_URL.to_string(),
            timeout_secs: constants::IP_ECHO_TIMEOUT.as_secs(),
            probe_addr: constants::LOCAL_PROBE_ADDR.to_string(),
            offline: false,
        }
    }
}

impl NetworkConfig {
    /// The public IP timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// One config file as written: absent keys stay `None` so they do not
/// override lower layers.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigLayer {
    output: OutputLayer,
    network: NetworkLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OutputLayer {
    filename: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NetworkLayer {
    ip_echo_url: Option<String>,
    timeout_secs: Option<u64>,
    probe_addr: Option<String>,
    offline: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `target_dir` is searched for a local `.execproof.toml`; `explicit`
    /// is a file named on the command line and must exist.
    pub fn load(
        target_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.apply_layer(Self::load_layer(&global_path)?);
            }
        }

        if let Some(dir) = target_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.apply_layer(Self::load_layer(&local_path)?);
            }
        }

        if let Some(path) = explicit {
            config.apply_layer(Self::load_layer(path)?);
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a complete config from a specific file, defaults filling gaps.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_layer(Self::load_layer(path)?);
        Ok(config)
    }

    /// Read only the keys a file actually sets.
    fn load_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Apply every key present in `layer`, whatever its value.
    fn apply_layer(&mut self, layer: ConfigLayer) {
        if let Some(filename) = layer.output.filename {
            self.output.filename = filename;
        }
        if let Some(url) = layer.network.ip_echo_url {
            self.network.ip_echo_url = url;
        }
        match layer.network.timeout_secs {
            Some(0) => tracing::warn!("ignoring network.timeout_secs = 0 in config file"),
            Some(secs) => self.network.timeout_secs = secs,
            None => {}
        }
        if let Some(addr) = layer.network.probe_addr {
            self.network.probe_addr = addr;
        }
        if let Some(offline) = layer.network.offline {
            self.network.offline = offline;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(constants::ENV_IP_ECHO_URL) {
            self.network.ip_echo_url = val;
        }
        if let Some(val) = env.get(constants::ENV_TIMEOUT) {
            match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.network.timeout_secs = secs,
                _ => tracing::warn!("ignoring invalid {} value: {val}", constants::ENV_TIMEOUT),
            }
        }
        if let Some(val) = env.get(constants::ENV_PROBE_ADDR) {
            self.network.probe_addr = val;
        }
        if let Some(val) = env.get(constants::ENV_OUTPUT) {
            self.output.filename = val;
        }
        match env.flag(constants::ENV_OFFLINE) {
            Some(Ok(offline)) => self.network.offline = offline,
            Some(Err(val)) => {
                tracing::warn!("ignoring invalid {} value: {val}", constants::ENV_OFFLINE);
            }
            None => {}
        }
    }
}
