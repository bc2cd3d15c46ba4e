use super::text;

/// Length of the fixed portion of the `bext` record, everything before
/// the coding history.
pub const BEXT_FIXED_LENGTH: u64 = 602;

///  Broadcast-WAV metadata record.
///
///  The `bext` record contains information about the original recording of the
///  Wave file, including a longish (256 ASCII chars) description field,
///  originator identification fields, creation calendar date and time, a
///  sample-accurate recording time field, and a SMPTE UMID.
///
///  Text fields are stored as they are padded in the file, trimmed of
///  trailing NUL and space characters. A field holding only padding is
///  `None`. Numeric fields are reported exactly as stored, loudness values
///  are still multiplied by 100.
///
/// ## Resources
/// - [EBU Tech 3285](https://tech.ebu.ch/docs/tech/tech3285.pdf).
/// - [EBU Tech R098](https://tech.ebu.ch/docs/r/r098.pdf) (1999) "Format for the &lt;CodingHistory&gt; field in Broadcast Wave Format files, BWF"
#[derive(Debug, Clone, PartialEq)]
pub struct Bext {
    /// 256 ASCII character field with free text.
    pub description: Option<String>,

    /// Originating application.
    pub originator: Option<String>,

    /// Application-specific UID.
    pub originator_reference: Option<String>,

    /// Creation date in format `YYYY-MM-DD`.
    pub origination_date: Option<String>,

    /// Creation time in format `HH:MM:SS`.
    pub origination_time: Option<String>,

    /// Low word of the time reference.
    pub time_reference_low: u32,

    /// High word of the time reference.
    pub time_reference_high: u32,

    /// Bext chunk version.
    ///
    /// Version 1 contains a UMID, version 2 contains a UMID and
    /// loudness metadata.
    pub version: u16,

    /// SMPTE 330M UMID, raw.
    pub umid: [u8; 64],

    /// Integrated loudness, LUFS × 100.
    pub loudness_value: u16,

    /// Loudness range, LU × 100.
    pub loudness_range: u16,

    /// Maximum true peak level, dBTP × 100.
    pub max_true_peak_level: u16,

    /// Maximum momentary loudness, LUFS × 100.
    pub max_momentary_loudness: u16,

    /// Maximum short-term loudness, LUFS × 100.
    pub max_short_term_loudness: u16,

    /// 180 reserved bytes, normally all zero.
    pub reserved: Option<String>,

    /// Coding History, raw and untrimmed.
    ///
    /// Empty when the chunk is exactly the fixed length.
    pub coding_history: Vec<u8>,
}

impl Bext {
    /// Time of the start of this wave file, expressed as the number of
    /// samples since local midnight.
    pub fn time_reference(&self) -> u64 {
        (self.time_reference_high as u64) << 32 | self.time_reference_low as u64
    }

    /// The UMID as a 64 character printable string.
    pub fn umid_string(&self) -> String {
        text::printable(&self.umid)
    }

    /// The coding history decoded as ASCII text.
    pub fn coding_history_text(&self) -> String {
        text::decode_ascii(&self.coding_history)
    }
}
