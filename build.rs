/// Expose the compilation target triple as an environment variable at build time.
///
/// `constants::TARGET` reads it back with `env!("TARGET")` so the proof
/// record and the `version` subcommand can name the platform the binary
/// was built for.
fn main() {
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=TARGET={target}");
}
