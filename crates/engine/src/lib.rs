// crates/engine/src/lib.rs
pub mod config;
pub mod decoder;
pub mod dispatch;
pub mod error;
pub mod processor;
pub mod source;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::source::{FsOpener, Opener};
use crate::stats::RunResult;

/// Run the counting engine over the configured sources.
///
/// Returns a `RunResult` holding one entry per source, in the order the
/// sources were given. Sources that could not be opened or read keep their
/// error (and any partial counts) on their entry.
///
/// # Errors
///
/// Returns an error only for critical failures (e.g., worker pool creation).
pub fn run(config: &Config) -> Result<RunResult> {
    run_with(config, &FsOpener)
}

/// Same as [`run`], reading sources through `opener`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<O>(config: &Config, opener: &O) -> Result<RunResult>
where
    O: Opener + ?Sized,
{
    let results = dispatch::dispatch(&config.sources, opener, config.count)?;
    Ok(RunResult { results })
}
