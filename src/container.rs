use std::io::{Cursor, Read};

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

use super::errors::Error;
use super::fourcc::{FourCC, ReadFourCC, RIFF_SIG, WAVE_SIG};

/// Length of the `RIFF` header preceding the first chunk.
pub const CONTAINER_HEADER_LENGTH: u64 = 12;

/// The outer `RIFF` envelope of a WAVE file.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerHeader {
    /// Group signature, always `RIFF`
    pub signature: FourCC,

    /// Length field of the envelope, by rule the file length minus 8.
    ///
    /// This is informational only, chunks are walked until the end of the
    /// stream regardless of this value.
    pub declared_size: u32,

    /// Form signature, always `WAVE`
    pub form: FourCC,
}

impl ContainerHeader {
    /// File length implied by the length field.
    pub fn declared_file_length(&self) -> u64 {
        self.declared_size as u64 + 8
    }

    /// Implied file length in whole kibibytes.
    pub fn declared_kib(&self) -> u64 {
        self.declared_file_length() / 1024
    }
}

/// Read and validate the 12-byte `RIFF`/`WAVE` header.
///
/// `inner` must be at the start of the stream; on success it is left at the
/// first chunk header. A stream too short to hold the header is rejected
/// as `Error::InvalidContainer`, missing bytes read as NUL.
pub fn read_container_header<R: Read>(inner: &mut R) -> Result<ContainerHeader, Error> {
    let mut buf = vec![];
    inner
        .by_ref()
        .take(CONTAINER_HEADER_LENGTH)
        .read_to_end(&mut buf)?;
    let complete = buf.len() as u64 == CONTAINER_HEADER_LENGTH;
    buf.resize(CONTAINER_HEADER_LENGTH as usize, 0);

    let mut cursor = Cursor::new(buf);
    let signature = cursor.read_fourcc()?;
    let declared_size = cursor.read_u32::<LittleEndian>()?;
    let form = cursor.read_fourcc()?;

    match (signature, form) {
        (RIFF_SIG, WAVE_SIG) if complete => Ok(ContainerHeader {
            signature,
            declared_size,
            form,
        }),
        _ => Err(Error::InvalidContainer { signature, form }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(group: &[u8; 4], size: u32, form: &[u8; 4]) -> Cursor<Vec<u8>> {
        let mut v = group.to_vec();
        v.extend_from_slice(&size.to_le_bytes());
        v.extend_from_slice(form);
        Cursor::new(v)
    }

    #[test]
    fn test_accepts_riff_wave() {
        let mut c = header(b"RIFF", 36, b"WAVE");
        let h = read_container_header(&mut c).unwrap();
        assert_eq!(h.declared_size, 36);
        assert_eq!(h.declared_file_length(), 44);
        assert_eq!(c.position(), CONTAINER_HEADER_LENGTH);
    }

    #[test]
    fn test_rejects_rifx() {
        let mut c = header(b"RIFX", 36, b"WAVE");
        match read_container_header(&mut c) {
            Err(Error::InvalidContainer { signature, .. }) => {
                assert_eq!(signature, FourCC::make(b"RIFX"))
            }
            other => panic!("RIFX was not rejected: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_other_forms() {
        let mut c = header(b"RIFF", 36, b"AVI ");
        assert!(matches!(
            read_container_header(&mut c),
            Err(Error::InvalidContainer { .. })
        ));

        let mut c = header(b"FORM", 36, b"AIFF");
        assert!(matches!(
            read_container_header(&mut c),
            Err(Error::InvalidContainer { .. })
        ));
    }

    #[test]
    fn test_short_header() {
        let mut c = Cursor::new(b"RIFF\x24\x00".to_vec());
        match read_container_header(&mut c) {
            Err(Error::InvalidContainer { signature, form }) => {
                assert_eq!(signature, RIFF_SIG);
                assert_eq!(form, FourCC::make(b"\0\0\0\0"));
            }
            other => panic!("Unexpected result {:?}", other),
        }

        // a truncated header that would otherwise be valid
        let mut c = Cursor::new(b"RIFF\x24\x00\x00\x00WAV".to_vec());
        assert!(matches!(
            read_container_header(&mut c),
            Err(Error::InvalidContainer { .. })
        ));

        for bytes in [&b""[..], &b"GARBAGE"[..]].iter() {
            let mut c = Cursor::new(bytes.to_vec());
            assert!(matches!(
                read_container_header(&mut c),
                Err(Error::InvalidContainer { .. })
            ));
        }
    }
}
