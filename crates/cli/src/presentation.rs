// crates/cli/src/presentation.rs
use crate::config::Config;
use ccwc_engine::stats::RunResult;
use std::io::{self, Write};

/// Prefix for diagnostics on standard error.
pub const PROGRAM: &str = "ccwc";

/// Print per-source errors to stderr, then the report to stdout.
///
/// # Errors
///
/// Returns the first write error on either stream.
pub fn print_results(result: &RunResult, config: &Config) -> io::Result<()> {
    write_errors(&mut io::stderr().lock(), result)?;

    let mut out = io::stdout().lock();
    write_report(&mut out, result, config)?;
    out.flush()
}

/// One `ccwc: <name>: <reason>` line per failed source, in source order.
///
/// # Errors
///
/// Propagates write errors from `w`.
pub fn write_errors<W: Write>(w: &mut W, result: &RunResult) -> io::Result<()> {
    for err in result.errors() {
        writeln!(w, "{PROGRAM}: {err}")?;
    }
    Ok(())
}

/// # Errors
///
/// Propagates write errors from `w`.
pub fn write_report<W: Write>(w: &mut W, result: &RunResult, config: &Config) -> io::Result<()> {
    let text = result.render(&config.selection, config.totals);
    w.write_all(text.as_bytes())
}
