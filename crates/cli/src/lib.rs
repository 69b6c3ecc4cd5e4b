// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count the sources named by `args` and print the report.
///
/// Sources that fail to open or read are reported on stderr and do not make
/// the run fail.
///
/// # Errors
///
/// Returns an error if the engine cannot start or the report cannot be written.
pub fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    log::debug!(
        "sources={} totals={} posix={}",
        config.sources.len(),
        config.totals,
        config.count.posix_whitespace
    );

    let result = ccwc_engine::run(&config)?;
    presentation::print_results(&result, &config)?;
    Ok(())
}
