use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

/// Base whose cube the program prints
pub const DEFAULT_BASE: i64 = 3;

/// Write `cube(DEFAULT_BASE)` and a newline to `out`.
pub fn run_command<W: Write>(out: &mut W) -> Result<()> {
    let value = intpow_core::cube(DEFAULT_BASE);
    debug!("cube({}) = {}", DEFAULT_BASE, value);

    writeln!(out, "{value}").context("Failed to write result to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
