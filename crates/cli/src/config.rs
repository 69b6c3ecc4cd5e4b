// crates/cli/src/config.rs
use crate::args::Args;
use ccwc_core::{CountConfig, Selection};
pub use ccwc_engine::config::{Config, ConfigBuilder};
use ccwc_engine::error::EngineError;
use ccwc_engine::source::Source;

/// Environment variable that restricts word separators to strict Unicode whitespace.
pub const POSIXLY_CORRECT: &str = "POSIXLY_CORRECT";

/// Whether `POSIXLY_CORRECT` is set (to any value).
#[must_use]
pub fn posix_whitespace_from_env() -> bool {
    std::env::var_os(POSIXLY_CORRECT).is_some()
}

impl From<&Args> for Selection {
    fn from(args: &Args) -> Self {
        Self {
            lines: args.lines,
            words: args.words,
            chars: args.chars,
            bytes: args.bytes,
            max_line_width: args.max_line_length,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        config_from_args(args, posix_whitespace_from_env())
    }
}

/// Build the engine configuration without consulting the environment.
///
/// # Errors
///
/// Returns `EngineError::Config` if the builder rejects the values.
pub fn config_from_args(args: Args, posix_whitespace: bool) -> Result<Config, EngineError> {
    let selection = Selection::from(&args);
    let sources: Vec<Source> = args.files.into_iter().map(Source::from_operand).collect();

    let config = ConfigBuilder::default()
        .sources(sources)
        .selection(selection)
        .totals(args.total)
        .count(CountConfig { posix_whitespace })
        .build()?;
    Ok(config)
}
