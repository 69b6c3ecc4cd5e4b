/// Settings that change how code points are classified while counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountConfig {
    /// Only strict Unicode whitespace separates words (`POSIXLY_CORRECT`).
    ///
    /// When unset, the non-breaking separators (U+00A0, U+2007, U+202F, U+2060)
    /// also end a word.
    pub posix_whitespace: bool,
}

impl CountConfig {
    #[must_use]
    pub const fn posix() -> Self {
        Self {
            posix_whitespace: true,
        }
    }

    /// Returns `true` if `ch` ends a word under this configuration.
    #[inline]
    #[must_use]
    pub fn is_word_separator(self, ch: char) -> bool {
        is_unicode_space(ch) || (!self.posix_whitespace && is_nonbreaking_space(ch))
    }
}

/// Unicode `White_Space`, minus the separators that forbid a line break.
#[inline]
#[must_use]
pub fn is_unicode_space(ch: char) -> bool {
    ch.is_whitespace() && !is_nonbreaking_space(ch)
}

/// NO-BREAK SPACE, FIGURE SPACE, NARROW NO-BREAK SPACE and WORD JOINER.
#[inline]
#[must_use]
pub const fn is_nonbreaking_space(ch: char) -> bool {
    matches!(ch, '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{2060}')
}
