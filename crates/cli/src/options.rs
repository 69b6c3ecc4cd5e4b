use ccwc_core::TotalsMode;
use clap::ValueEnum;

/// `--total=WHEN`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TotalsArg {
    /// only when more than one file is counted
    #[default]
    Auto,
    /// always print the total line
    Always,
    /// print only the total line
    Only,
    /// never print the total line
    Never,
}

impl From<TotalsArg> for TotalsMode {
    fn from(value: TotalsArg) -> Self {
        match value {
            TotalsArg::Auto => Self::Auto,
            TotalsArg::Always => Self::Always,
            TotalsArg::Only => Self::Only,
            TotalsArg::Never => Self::Never,
        }
    }
}
