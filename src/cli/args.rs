//! Clap argument types and how they override the loaded config.

use clap::Parser;
use std::path::PathBuf;

use execproof::config::Config;

/// Record proof that this program ran here, now, on this machine.
#[derive(Parser, Debug)]
#[command(
    name = "execproof",
    version = execproof::constants::VERSION,
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands. Without one, a proof is generated.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print version and build information.
    Version,
}

/// Arguments for proof generation.
#[derive(clap::Args, Debug, Default)]
pub struct GenerateArgs {
    /// Folder to prove (default: the directory containing this executable).
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Proof file name inside the folder.
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Additional TOML config file, applied over the global and folder configs.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the public IP lookup and record "Unknown".
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// IP echo endpoint returning `{"ip": "..."}`.
    #[arg(long)]
    pub ip_echo_url: Option<String>,

    /// Public IP lookup timeout in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Also print the written JSON to stdout.
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Log progress to stderr (-v debug, -vv everything).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GenerateArgs {
    /// Apply flags that were given on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref output) = self.output {
            config.output.filename = output.clone();
        }
        if let Some(ref url) = self.ip_echo_url {
            config.network.ip_echo_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.network.timeout_secs = secs;
        }
        if self.offline {
            config.network.offline = true;
        }
    }
}
