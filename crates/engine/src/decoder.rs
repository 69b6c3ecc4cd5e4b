use ccwc_core::CodePoint;
use ccwc_core::decode::{MAX_SEQUENCE_LEN, next_code_point};
use std::io::{self, ErrorKind, Read};

/// Default read buffer.
pub const DEFAULT_BUF_SIZE: usize = 64 * 1024;

/// Streams code points out of a reader.
///
/// At least [`MAX_SEQUENCE_LEN`] bytes are kept in view before decoding, so a
/// sequence split across two reads still decodes as one scalar. The first
/// read error is yielded once, after the bytes already buffered, and ends
/// the stream.
pub struct CodePoints<R> {
    reader: R,
    buf: Box<[u8]>,
    pos: usize,
    end: usize,
    eof: bool,
    error: Option<io::Error>,
}

impl<R: Read> CodePoints<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_BUF_SIZE, reader)
    }

    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader,
            buf: vec![0; capacity.max(MAX_SEQUENCE_LEN)].into_boxed_slice(),
            pos: 0,
            end: 0,
            eof: false,
            error: None,
        }
    }

    /// Compacts the buffer and performs one read.
    fn fill(&mut self) -> io::Result<()> {
        if self.pos > 0 {
            self.buf.copy_within(self.pos..self.end, 0);
            self.end -= self.pos;
            self.pos = 0;
        }
        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Iterator for CodePoints<R> {
    type Item = io::Result<CodePoint>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if !self.eof && self.end - self.pos < MAX_SEQUENCE_LEN {
                if let Err(e) = self.fill() {
                    self.error = Some(e);
                    self.eof = true;
                }
            }
            match next_code_point(&self.buf[self.pos..self.end], self.eof) {
                Some(cp) => {
                    self.pos += cp.encoded_len();
                    return Some(Ok(cp));
                }
                None if self.eof => return self.error.take().map(Err),
                // incomplete sequence, fewer than MAX_SEQUENCE_LEN bytes left
                None => {}
            }
        }
    }
}
