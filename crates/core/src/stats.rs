use core::iter::Sum;
use core::ops::{Add, AddAssign};

use crate::options::Field;

/// Pure counting result for one source, independent of where the bytes came from.
///
/// `bytes >= chars` holds for every value produced by [`crate::Tally`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counts {
    /// Number of line feeds.
    pub lines: u64,
    /// Number of maximal runs of non-separator code points.
    pub words: u64,
    /// Number of successfully decoded code points.
    pub chars: u64,
    /// Number of bytes, including undecodable ones.
    pub bytes: u64,
    /// Longest line, in code points.
    pub max_line_width: u64,
}

impl Counts {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: 0,
            words: 0,
            chars: 0,
            bytes: 0,
            max_line_width: 0,
        }
    }

    #[must_use]
    pub const fn get(&self, field: Field) -> u64 {
        match field {
            Field::Lines => self.lines,
            Field::Words => self.words,
            Field::Chars => self.chars,
            Field::Bytes => self.bytes,
            Field::MaxLineWidth => self.max_line_width,
        }
    }

    /// Folds `other` into `self`: every statistic is summed except the
    /// maximum line width, which keeps the larger value.
    pub fn merge(&mut self, other: &Self) {
        self.lines += other.lines;
        self.words += other.words;
        self.chars += other.chars;
        self.bytes += other.bytes;
        self.max_line_width = self.max_line_width.max(other.max_line_width);
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.merge(&rhs);
        self
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a Counts> for Counts {
    fn sum<I: Iterator<Item = &'a Counts>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut acc, c| {
            acc.merge(c);
            acc
        })
    }
}
