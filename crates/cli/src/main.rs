use std::io;

use anyhow::Result;
use clap::Parser;

use intpow::Cli;
use intpow::commands::run_command;

fn main() -> Result<()> {
    // Logs go to stderr so stdout only ever carries the result
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    let stdout = io::stdout();
    run_command(&mut stdout.lock())
}
