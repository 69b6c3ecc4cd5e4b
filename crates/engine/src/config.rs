use crate::source::Source;
use ccwc_core::{CountConfig, Selection, TotalsMode};
use derive_builder::Builder;

/// Everything a run needs. Built once, then only read.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Sources in the order given; empty means standard input.
    #[builder(default)]
    pub sources: Vec<Source>,
    #[builder(default)]
    pub selection: Selection,
    #[builder(default)]
    pub totals: TotalsMode,
    #[builder(default)]
    pub count: CountConfig,
}

impl From<ConfigBuilderError> for crate::error::EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}
