const BASIC_PCM: u16 = 0x0001;
const BASIC_ADPCM: u16 = 0x0002;
const BASIC_FLOAT: u16 = 0x0003;
const BASIC_ALAW: u16 = 0x0006;
const BASIC_MULAW: u16 = 0x0007;
const BASIC_MPEG: u16 = 0x0050;
const BASIC_MPEG_LAYER3: u16 = 0x0055;
const BASIC_EXTENDED: u16 = 0xFFFE;

/* RFC 2361 lists the registered WAVE format tags. Only integer PCM is
   decoded by this crate; the others are named so the report can say what
   it skipped. */

/// Sample format named by a `fmt ` chunk's format tag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CommonFormat {
    /// Integer linear PCM
    IntegerPCM,

    /// Microsoft ADPCM
    Adpcm,

    /// IEEE Floating-point Linear PCM
    IeeeFloatPCM,

    /// ITU G.711 A-law
    ALaw,

    /// ITU G.711 µ-law
    MuLaw,

    /// MPEG
    Mpeg,

    /// MPEG Layer III
    MpegLayer3,

    /// `WAVE_FORMAT_EXTENSIBLE`, the codec is identified by a GUID in the
    /// extension bytes.
    Extensible,

    /// An unknown format identified by a basic format tag.
    UnknownBasic(u16),
}

impl CommonFormat {
    /// Resolve a format tag to a `CommonFormat`.
    pub fn make(basic: u16) -> Self {
        match basic {
            BASIC_PCM => Self::IntegerPCM,
            BASIC_ADPCM => Self::Adpcm,
            BASIC_FLOAT => Self::IeeeFloatPCM,
            BASIC_ALAW => Self::ALaw,
            BASIC_MULAW => Self::MuLaw,
            BASIC_MPEG => Self::Mpeg,
            BASIC_MPEG_LAYER3 => Self::MpegLayer3,
            BASIC_EXTENDED => Self::Extensible,
            x => Self::UnknownBasic(x),
        }
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IntegerPCM => "PCM",
            Self::Adpcm => "ADPCM",
            Self::IeeeFloatPCM => "IEEE float",
            Self::ALaw => "A-law",
            Self::MuLaw => "mu-law",
            Self::Mpeg => "MPEG",
            Self::MpegLayer3 => "MPEG Layer III",
            Self::Extensible => "extensible",
            Self::UnknownBasic(_) => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make() {
        assert_eq!(CommonFormat::make(1), CommonFormat::IntegerPCM);
        assert_eq!(CommonFormat::make(0xFFFE), CommonFormat::Extensible);
        assert_eq!(CommonFormat::make(0x1234), CommonFormat::UnknownBasic(0x1234));
        assert_eq!(CommonFormat::make(3).name(), "IEEE float");
        assert_eq!(CommonFormat::make(0x1234).name(), "unknown");
    }
}
