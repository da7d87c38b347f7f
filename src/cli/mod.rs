//! CLI command definitions, logging setup, and user-facing output.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use std::io::Write;

use tracing_subscriber::EnvFilter;

use execproof::proof::WrittenProof;

/// Install the stderr log subscriber.
///
/// `-v` flags win over `RUST_LOG`; with neither, only warnings are shown.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("execproof=debug"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The two lines printed after a successful run.
pub fn confirmation_lines(written: &WrittenProof) -> [String; 2] {
    use colored::Colorize;

    let filename = written
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| written.path.display().to_string());
    [
        format!("Proof file '{}' was created successfully.", filename.bold()),
        format!("Executable: {}", written.record.executable),
    ]
}

/// Print the confirmation lines to stdout.
pub fn print_confirmation(written: &WrittenProof) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for line in confirmation_lines(written) {
        writeln!(handle, "{line}")?;
    }
    handle.flush()
}
