use std::io::{self, Read};

use super::errors::Error;

/// The raw payload of a chunk with no specific decoder.
///
/// Vendor chunks are frequently binary even when they look like text, so
/// rendering is best-effort: printable ASCII and whitespace pass through,
/// everything else becomes a `.`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericChunk {
    pub payload: Vec<u8>,
}

/// Read exactly `length` bytes from `inner`, a short read is an
/// `UnexpectedEof`.
///
/// The buffer grows with the bytes actually read, so a declared length
/// far beyond the end of the stream costs no more than the stream holds.
pub(crate) fn read_bytes<R: Read>(inner: &mut R, length: u64) -> io::Result<Vec<u8>> {
    let mut buf = vec![];
    inner.by_ref().take(length).read_to_end(&mut buf)?;
    if (buf.len() as u64) < length {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
    }
    Ok(buf)
}

impl GenericChunk {
    /// Read the whole of `length` bytes from `inner`.
    ///
    /// A short read is an `UnexpectedEof`.
    pub fn read<R: Read>(inner: &mut R, length: u64) -> Result<Self, Error> {
        Ok(Self {
            payload: read_bytes(inner, length)?,
        })
    }

    /// Render at most `limit` bytes of the payload as ASCII.
    pub fn render(&self, limit: Option<usize>) -> String {
        let shown = match limit {
            Some(n) => &self.payload[..n.min(self.payload.len())],
            None => &self.payload[..],
        };

        shown
            .iter()
            .map(|b| match *b {
                b'\n' | b'\r' | b'\t' => *b as char,
                b if b.is_ascii_graphic() || b == b' ' => b as char,
                _ => '.',
            })
            .collect()
    }

    /// `true` when the payload is nothing but NUL bytes, as in `JUNK` and
    /// `PAD ` filler.
    pub fn is_blank(&self) -> bool {
        self.payload.iter().all(|b| *b == 0)
    }
}
