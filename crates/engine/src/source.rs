use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Operand that names standard input.
pub const STDIN_OPERAND: &str = "-";

/// One logical input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// Standard input read because no operand was given. Printed without a name.
    ImplicitStdin,
    /// Standard input requested with `-`.
    Stdin,
    Path(PathBuf),
}

impl Source {
    pub fn from_operand(operand: impl Into<PathBuf>) -> Self {
        let path = operand.into();
        if path.as_os_str() == STDIN_OPERAND {
            Self::Stdin
        } else {
            Self::Path(path)
        }
    }

    /// Name printed after the counts.
    #[must_use]
    pub fn label(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::ImplicitStdin => None,
            Self::Stdin => Some(Cow::Borrowed(STDIN_OPERAND)),
            Self::Path(path) => Some(path.to_string_lossy()),
        }
    }

    /// Name used in diagnostics.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        match self {
            Self::ImplicitStdin | Self::Stdin => Cow::Borrowed("standard input"),
            Self::Path(path) => path.to_string_lossy(),
        }
    }

    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::ImplicitStdin | Self::Stdin)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::from_operand(path)
    }
}

/// Opens the byte stream behind a [`Source`].
///
/// Implementations are shared by every worker, hence `Sync`.
pub trait Opener: Sync {
    /// # Errors
    ///
    /// Returns the I/O error that prevented the source from being opened.
    fn open(&self, source: &Source) -> io::Result<Box<dyn Read + Send>>;
}

/// Opens files on disk and the process's standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl Opener for FsOpener {
    fn open(&self, source: &Source) -> io::Result<Box<dyn Read + Send>> {
        match source {
            Source::ImplicitStdin | Source::Stdin => Ok(Box::new(io::stdin())),
            Source::Path(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}
