use clap::Parser;

/// Print the cube of three
///
/// Takes no arguments; the output is always the same single line.
#[derive(Parser, Debug)]
#[command(name = "intpow")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging (written to stderr)")]
pub struct Cli {}
