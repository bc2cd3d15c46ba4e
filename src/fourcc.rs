use std::fmt::{Debug, Display};
use std::io;

/// A Four-character Code
///
/// For identifying chunks, structured contiguous slices or segments
/// within a WAV file.
#[derive(Eq, PartialEq, Hash, Copy, Clone)]
pub struct FourCC([u8; 4]);

impl FourCC {
    pub const fn make(s: &[u8; 4]) -> Self {
        Self(*s)
    }

    /// The raw bytes of the code.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        FourCC(bytes)
    }
}

impl From<FourCC> for [u8; 4] {
    fn from(fourcc: FourCC) -> Self {
        fourcc.0
    }
}

impl From<&FourCC> for String {
    fn from(f: &FourCC) -> Self {
        // Codes read from a damaged file may be binary, keep them printable.
        f.0.iter()
            .map(|b| if b.is_ascii_graphic() || *b == b' ' { *b as char } else { '?' })
            .collect()
    }
}

impl From<FourCC> for String {
    fn from(f: FourCC) -> Self {
        (&f).into()
    }
}

impl Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.into();
        f.write_str(&s)
    }
}

impl Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let s: String = self.into();
        write!(f, "FourCC({})", s)
    }
}

pub trait ReadFourCC: io::Read {
    fn read_fourcc(&mut self) -> Result<FourCC, io::Error>;
}

impl<T> ReadFourCC for T
where
    T: io::Read,
{
    fn read_fourcc(&mut self) -> Result<FourCC, io::Error> {
        let mut buf: [u8; 4] = [0; 4];
        self.read_exact(&mut buf)?;
        Ok(FourCC::from(buf))
    }
}

pub const RIFF_SIG: FourCC = FourCC::make(b"RIFF");
pub const WAVE_SIG: FourCC = FourCC::make(b"WAVE");

pub const DATA_SIG: FourCC = FourCC::make(b"data");
pub const FMT__SIG: FourCC = FourCC::make(b"fmt ");

pub const BEXT_SIG: FourCC = FourCC::make(b"bext");
pub const FACT_SIG: FourCC = FourCC::make(b"fact");
pub const IXML_SIG: FourCC = FourCC::make(b"iXML");
pub const AXML_SIG: FourCC = FourCC::make(b"axml");

pub const JUNK_SIG: FourCC = FourCC::make(b"JUNK");
pub const PAD__SIG: FourCC = FourCC::make(b"PAD ");
pub const FLLR_SIG: FourCC = FourCC::make(b"FLLR");
pub const LIST_SIG: FourCC = FourCC::make(b"LIST");
pub const CUE__SIG: FourCC = FourCC::make(b"cue ");

// Pro Tools
pub const MINF_SIG: FourCC = FourCC::make(b"minf");
pub const ELM1_SIG: FourCC = FourCC::make(b"elm1");
pub const REGN_SIG: FourCC = FourCC::make(b"regn");
pub const UMID_SIG: FourCC = FourCC::make(b"umid");
pub const DGDA_SIG: FourCC = FourCC::make(b"DGDA");

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_to_string() {
        let a = FourCC::make(b"a1b2");
        let s: String = a.into();
        assert_eq!(s, "a1b2");
        assert_eq!(format!("{}", FMT__SIG), "fmt ");
    }

    #[test]
    fn test_binary_code_is_printable() {
        let a = FourCC::from([0x00, b'a', 0xff, b'z']);
        assert_eq!(format!("{}", a), "?a?z");
    }

    #[test]
    fn test_read_fourcc_short() {
        let mut cursor = Cursor::new(b"RI".to_vec());
        let err = cursor.read_fourcc().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
