use std::cmp::min;

use std::io::SeekFrom::{Current, End, Start};
use std::io::{Error, ErrorKind, Read, Seek, SeekFrom};

/// A bounded view of one chunk's payload.
///
/// Reads are confined to `start..start + length`; reading past the end of
/// the view is an `UnexpectedEof`. The view never moves the underlying
/// stream past the payload, the [`Parser`](crate::parser::Parser) does the
/// final advance to the next chunk header.
#[derive(Debug)]
pub struct RawChunkReader<'a, R: Read + Seek> {
    reader: &'a mut R,
    start: u64,
    length: u64,
    position: u64,
}

impl<'a, R: Read + Seek> RawChunkReader<'a, R> {
    pub fn new(reader: &'a mut R, start: u64, length: u64) -> Self {
        Self {
            reader,
            start,
            length,
            position: 0,
        }
    }

    pub fn length(&self) -> u64 {
        self.length
    }
}

impl<R: Read + Seek> Read for RawChunkReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        if self.position >= self.length || buf.is_empty() {
            Ok(0)
        } else {
            self.reader.seek(Start(self.start + self.position))?;
            let to_read = min(self.length - self.position, buf.len() as u64);
            let read = self.reader.by_ref().take(to_read).read(buf)?;
            self.position += read as u64;
            Ok(read)
        }
    }
}

impl<R: Read + Seek> Seek for RawChunkReader<'_, R> {
    fn seek(&mut self, seek: SeekFrom) -> Result<u64, Error> {
        let new_position = match seek {
            Start(s) => s as i64,
            Current(s) => s + self.position as i64,
            End(s) => s + self.length as i64,
        };

        if new_position < 0 {
            Err(Error::new(
                ErrorKind::InvalidInput,
                "Attempted seek before beginning of chunk",
            ))
        } else {
            self.position = new_position as u64;
            Ok(self.position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_bounded_read() {
        let mut cursor = Cursor::new(b"xxHELLOyy".to_vec());
        let mut view = RawChunkReader::new(&mut cursor, 2, 5);
        let mut buf = vec![];
        view.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"HELLO");
        assert_eq!(view.read(&mut [0u8; 4]).unwrap(), 0);
    }

    #[test]
    fn test_read_exact_past_view_is_eof() {
        let mut cursor = Cursor::new(b"xxHELLOyy".to_vec());
        let mut view = RawChunkReader::new(&mut cursor, 2, 5);
        let mut buf = [0u8; 6];
        let err = view.read_exact(&mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_view_past_end_of_stream() {
        let mut cursor = Cursor::new(b"xxHE".to_vec());
        let mut view = RawChunkReader::new(&mut cursor, 2, 5);
        let mut buf = [0u8; 5];
        let err = view.read_exact(&mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_seek() {
        let mut cursor = Cursor::new(b"xxHELLOyy".to_vec());
        let mut view = RawChunkReader::new(&mut cursor, 2, 5);
        assert_eq!(view.seek(End(-2)).unwrap(), 3);
        let mut buf = [0u8; 2];
        view.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"LO");
        assert!(view.seek(Current(-10)).is_err());
    }
}
