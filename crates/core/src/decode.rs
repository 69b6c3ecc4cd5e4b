//! UTF-8 decoding into code points.
//!
//! Invalid input is never replaced by U+FFFD: it surfaces as
//! [`CodePoint::Invalid`] carrying the raw length so that byte counts stay
//! exact while character counts skip it.

/// Longest UTF-8 sequence.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// One decoded unit of a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePoint {
    /// A valid Unicode scalar value.
    Scalar(char),
    /// An undecodable sequence of `1..=3` bytes.
    Invalid(u8),
}

impl CodePoint {
    /// Number of bytes this unit occupied in the input.
    #[inline]
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Scalar(ch) => ch.len_utf8(),
            Self::Invalid(len) => len as usize,
        }
    }
}

/// Decodes the first code point of `bytes`.
///
/// Returns `None` if `bytes` is empty, or if it starts with a sequence that is
/// still incomplete and more input may follow (`at_eof == false`). At EOF an
/// incomplete sequence is reported as [`CodePoint::Invalid`].
#[must_use]
pub fn next_code_point(bytes: &[u8], at_eof: bool) -> Option<CodePoint> {
    let first = *bytes.first()?;
    if first.is_ascii() {
        return Some(CodePoint::Scalar(char::from(first)));
    }

    let window = &bytes[..bytes.len().min(MAX_SEQUENCE_LEN)];
    let valid = match core::str::from_utf8(window) {
        Ok(s) => s,
        Err(err) if err.valid_up_to() > 0 => core::str::from_utf8(&window[..err.valid_up_to()]).ok()?,
        Err(err) => {
            return match err.error_len() {
                #[allow(clippy::cast_possible_truncation)]
                Some(len) => Some(CodePoint::Invalid(len as u8)),
                #[allow(clippy::cast_possible_truncation)]
                None if at_eof => Some(CodePoint::Invalid(window.len() as u8)),
                None => None,
            };
        }
    };
    valid.chars().next().map(CodePoint::Scalar)
}

/// Iterator over the code points of a complete in-memory buffer.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    rest: &'a [u8],
}

impl<'a> Decoder<'a> {
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self { rest: input }
    }
}

impl Iterator for Decoder<'_> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let cp = next_code_point(self.rest, true)?;
        self.rest = &self.rest[cp.encoded_len()..];
        Some(cp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn decode(input: &[u8]) -> Vec<CodePoint> {
        Decoder::new(input).collect()
    }

    #[test]
    fn decodes_multibyte_scalars() {
        let cps = decode("aé€😀".as_bytes());
        assert_eq!(
            cps,
            [
                CodePoint::Scalar('a'),
                CodePoint::Scalar('é'),
                CodePoint::Scalar('€'),
                CodePoint::Scalar('😀'),
            ]
        );
        let lens: Vec<_> = cps.iter().map(|cp| cp.encoded_len()).collect();
        assert_eq!(lens, [1, 2, 3, 4]);
    }

    #[test]
    fn invalid_bytes_become_markers() {
        assert_eq!(
            decode(b"a\xFFb"),
            [CodePoint::Scalar('a'), CodePoint::Invalid(1), CodePoint::Scalar('b')]
        );
        // lone continuation byte
        assert_eq!(decode(b"\x80"), [CodePoint::Invalid(1)]);
    }

    #[test]
    fn truncated_sequence_waits_for_more_input() {
        assert_eq!(next_code_point(b"\xE2\x82", false), None);
        assert_eq!(next_code_point(b"\xE2\x82", true), Some(CodePoint::Invalid(2)));
        assert_eq!(next_code_point(b"\xE2\x82\xAC", false), Some(CodePoint::Scalar('€')));
    }

    #[test]
    fn broken_sequence_reports_maximal_prefix() {
        // E2 82 followed by ASCII: the two-byte prefix is one invalid unit.
        assert_eq!(
            decode(b"\xE2\x82x"),
            [CodePoint::Invalid(2), CodePoint::Scalar('x')]
        );
    }

    #[test]
    fn broken_prefix_is_one_column_wide() {
        // one column for the whole E2 82 prefix, then 'x' and the line feed
        let counts = crate::count_bytes(b"\xE2\x82x\n", crate::CountConfig::default());
        assert_eq!(counts.max_line_width, 3);
        assert_eq!(counts.chars, 2);
        assert_eq!(counts.bytes, 4);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(next_code_point(b"", true), None);
        assert!(decode(b"").is_empty());
    }
}
