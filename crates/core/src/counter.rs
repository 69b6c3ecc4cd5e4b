use crate::config::CountConfig;
use crate::decode::{CodePoint, Decoder};
use crate::stats::Counts;

/// Incremental counting state for a single source.
///
/// Feed code points with [`Tally::push`] (or [`Extend`]) and call
/// [`Tally::finish`] once the source is exhausted.
#[derive(Debug, Clone)]
pub struct Tally {
    config: CountConfig,
    counts: Counts,
    /// The previous code point separated words. A source starts on a boundary.
    after_separator: bool,
    line_width: u64,
}

impl Tally {
    #[must_use]
    pub const fn new(config: CountConfig) -> Self {
        Self {
            config,
            counts: Counts::new(),
            after_separator: true,
            line_width: 0,
        }
    }

    pub fn push(&mut self, cp: CodePoint) {
        self.counts.bytes += cp.encoded_len() as u64;
        self.line_width += 1;

        let separator = match cp {
            CodePoint::Scalar(ch) => {
                self.counts.chars += 1;
                if ch == '\n' {
                    self.counts.lines += 1;
                    self.end_line();
                }
                self.config.is_word_separator(ch)
            }
            CodePoint::Invalid(_) => false,
        };

        if !separator && self.after_separator {
            self.counts.words += 1;
        }
        self.after_separator = separator;
    }

    /// Counts accumulated so far, without the still-open line's width.
    #[must_use]
    pub const fn counts(&self) -> Counts {
        self.counts
    }

    /// Closes the source. An unterminated last line still contributes its
    /// width but is not counted as a line.
    #[must_use]
    pub fn finish(mut self) -> Counts {
        self.end_line();
        self.counts
    }

    fn end_line(&mut self) {
        self.counts.max_line_width = self.counts.max_line_width.max(self.line_width);
        self.line_width = 0;
    }
}

impl Extend<CodePoint> for Tally {
    fn extend<I: IntoIterator<Item = CodePoint>>(&mut self, iter: I) {
        for cp in iter {
            self.push(cp);
        }
    }
}

/// Count a complete in-memory buffer.
#[must_use]
pub fn count_bytes(input: &[u8], config: CountConfig) -> Counts {
    let mut tally = Tally::new(config);
    tally.extend(Decoder::new(input));
    tally.finish()
}

#[must_use]
pub fn count_str(input: &str, config: CountConfig) -> Counts {
    let mut tally = Tally::new(config);
    tally.extend(input.chars().map(CodePoint::Scalar));
    tally.finish()
}
