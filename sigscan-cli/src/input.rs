//! ## sigscan-cli::input
//! **Stdin parsing for the `{length, text, K, {length, pattern}*K}` format**
//!
//! Out of scope for the core per spec.md §1 ("input file parsing ...
//! appear only as the minimal interfaces the core consumes"); this is the
//! external collaborator that builds that interface.

use sigscan_core::types::PatternSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed input: expected an ASCII decimal integer at offset {0}")]
    ExpectedInteger(usize),

    #[error("malformed input: expected a whitespace byte at offset {0}")]
    ExpectedWhitespace(usize),

    #[error("malformed input: expected {0} more bytes of text/pattern data but input ended")]
    UnexpectedEof(usize),
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn read_uint(&mut self) -> Result<usize, InputError> {
        let start = self.pos;
        let mut value: usize = 0;
        let mut saw_digit = false;

        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_digit() {
                value = value * 10 + (b - b'0') as usize;
                self.pos += 1;
                saw_digit = true;
            } else {
                break;
            }
        }

        if !saw_digit {
            return Err(InputError::ExpectedInteger(start));
        }
        Ok(value)
    }

    fn skip_one_whitespace(&mut self) -> Result<(), InputError> {
        match self.bytes.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(InputError::ExpectedWhitespace(self.pos)),
        }
    }

    fn read_exact(&mut self, len: usize) -> Result<&'a [u8], InputError> {
        let end = self.pos + len;
        if end > self.bytes.len() {
            return Err(InputError::UnexpectedEof(end - self.bytes.len()));
        }
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

/// Parses the full input stream into the text `T` and the pattern set `P`.
pub fn parse(input: &[u8]) -> Result<(Vec<u8>, PatternSet), InputError> {
    let mut cursor = Cursor::new(input);

    let text_len = cursor.read_uint()?;
    cursor.skip_one_whitespace()?;
    let text = cursor.read_exact(text_len)?.to_vec();
    cursor.skip_one_whitespace()?;

    let num_patterns = cursor.read_uint()?;
    cursor.skip_one_whitespace()?;

    let mut patterns = Vec::with_capacity(num_patterns);
    for _ in 0..num_patterns {
        let pattern_len = cursor.read_uint()?;
        cursor.skip_one_whitespace()?;
        let pattern = cursor.read_exact(pattern_len)?.to_vec();
        cursor.skip_one_whitespace()?;
        patterns.push(pattern);
    }

    Ok((text, PatternSet::new(patterns)))
}
