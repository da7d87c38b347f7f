//! execproof — proof-of-execution generator.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use execproof::config::Config;
use execproof::constants;
use execproof::env::Env;
use execproof::network::{IpEchoClient, OfflineSource, PublicIpSource};
use execproof::proof::{self, ProofOptions};
use execproof::system;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, GenerateArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.generate.verbose);

    match cli.command {
        Some(Command::Version) => run_version(),
        None => run_generate(cli.generate).await,
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!("{} {}", constants::APP_NAME.bold(), constants::VERSION.green().bold());
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Collect the proof record and write it into the target folder.
async fn run_generate(args: GenerateArgs) -> Result<()> {
    let dir = match args.dir {
        Some(ref dir) => dir.clone(),
        None => system::executable_dir().context("failed to locate the executable's directory")?,
    };

    let mut config = Config::load(Some(&dir), args.config.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    args.apply(&mut config);
    tracing::debug!(?config, "resolved configuration");

    let source: Box<dyn PublicIpSource> = if config.network.offline {
        Box::new(OfflineSource)
    } else {
        Box::new(IpEchoClient::from_config(&config.network))
    };

    let options = ProofOptions {
        dir,
        filename: config.output.filename.clone(),
        probe_addr: config.network.probe_addr.clone(),
    };
    let written = proof::generate(&options, source.as_ref())
        .await
        .context("failed to generate proof")?;

    cli::print_confirmation(&written).context("failed to write to stdout")?;

    if args.print {
        let rendered = proof::render(&written.record)?;
        println!("{}", String::from_utf8_lossy(&rendered));
    }

    Ok(())
}
