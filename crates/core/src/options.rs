use core::fmt;

/// One reportable statistic, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Lines,
    Words,
    Chars,
    Bytes,
    MaxLineWidth,
}

impl Field {
    /// Column order used when statistics are requested explicitly.
    pub const ALL: [Self; 5] = [
        Self::Lines,
        Self::Words,
        Self::Chars,
        Self::Bytes,
        Self::MaxLineWidth,
    ];

    /// Columns printed when nothing was requested.
    pub const DEFAULT: [Self; 3] = [Self::Lines, Self::Words, Self::Bytes];
}

/// Which statistics the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Selection {
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
    pub bytes: bool,
    pub max_line_width: bool,
}

impl Selection {
    /// No statistic was requested explicitly.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        !(self.lines || self.words || self.chars || self.bytes || self.max_line_width)
    }

    #[must_use]
    pub const fn contains(&self, field: Field) -> bool {
        match field {
            Field::Lines => self.lines,
            Field::Words => self.words,
            Field::Chars => self.chars,
            Field::Bytes => self.bytes,
            Field::MaxLineWidth => self.max_line_width,
        }
    }

    /// Columns to print, in canonical order regardless of flag order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        let explicit = !self.is_default();
        Field::ALL.into_iter().filter(move |&field| {
            if explicit {
                self.contains(field)
            } else {
                Field::DEFAULT.contains(&field)
            }
        })
    }
}

/// When the summary row is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TotalsMode {
    /// Only when more than one source was counted.
    #[default]
    Auto,
    Always,
    /// Print the summary row alone.
    Only,
    Never,
}

impl TotalsMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Only => "only",
            Self::Never => "never",
        }
    }

    /// Whether the columnar multi-source layout is used for `sources` results.
    #[must_use]
    pub const fn uses_table(self, sources: usize) -> bool {
        sources > 1 || matches!(self, Self::Always | Self::Only)
    }
}

impl fmt::Display for TotalsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
