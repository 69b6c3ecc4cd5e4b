use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::TotalsArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ccwc",
    version = crate::VERSION,
    about = "Print newline, word, and byte counts for each FILE, and a total line if\nmore than one FILE is specified.  A word is a nonempty sequence of non white\nspace delimited by white space characters or by start or end of input.",
    after_help = "With no FILE, or when FILE is -, read standard input.\n\nThe options below may be used to select which counts are printed, always in\nthe following order: newline, word, character, byte, maximum line length.",
    disable_help_flag = true,
    disable_version_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// print the byte counts
    #[arg(short = 'c', long)]
    pub bytes: bool,

    /// print the character counts
    #[arg(short = 'm', long)]
    pub chars: bool,

    /// print the newline counts
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// print the maximum display width
    #[arg(short = 'L', long = "max-line-length")]
    pub max_line_length: bool,

    /// print the word counts
    #[arg(short = 'w', long)]
    pub words: bool,

    /// when to print a line with total counts
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = TotalsArg::Auto)]
    pub total: TotalsArg,

    /// display this help and exit
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// output version information and exit
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Files to count
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
