use std::io::Read;

use super::errors::Error as ParserError;
use super::generic::read_bytes;
use super::text;

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

use super::bext::{Bext, BEXT_FIXED_LENGTH};
use super::fmt::{WaveFmt, WAVE_FMT_LENGTH};

/// Decoders for the fixed records of the `fmt ` and `bext` chunks.
///
/// Each method expects the reader to be positioned at the start of the
/// chunk payload and is passed the declared payload length. Lengths shorter
/// than the fixed record must be rejected by the caller.
pub trait ReadBWaveChunks: Read {
    fn read_wave_fmt(&mut self, length: u64) -> Result<WaveFmt, ParserError>;
    fn read_bext_string_field(&mut self, length: usize) -> Result<Option<String>, ParserError>;
    fn read_bext(&mut self, length: u64) -> Result<Bext, ParserError>;
}

impl<T> ReadBWaveChunks for T
where
    T: Read,
{
    fn read_wave_fmt(&mut self, length: u64) -> Result<WaveFmt, ParserError> {
        Ok(WaveFmt {
            tag: self.read_u16::<LittleEndian>()?,
            channel_count: self.read_u16::<LittleEndian>()?,
            sample_rate: self.read_u32::<LittleEndian>()?,
            bytes_per_second: self.read_u32::<LittleEndian>()?,
            block_alignment: self.read_u16::<LittleEndian>()?,
            bits_per_sample: self.read_u16::<LittleEndian>()?,
            // cbSize and extensions are left for the parser to skip
            extension_length: length.saturating_sub(WAVE_FMT_LENGTH),
        })
    }

    fn read_bext_string_field(&mut self, length: usize) -> Result<Option<String>, ParserError> {
        let mut buffer: Vec<u8> = vec![0; length];
        self.read_exact(&mut buffer)?;
        Ok(text::sanitize(&buffer))
    }

    fn read_bext(&mut self, length: u64) -> Result<Bext, ParserError> {
        Ok(Bext {
            description: self.read_bext_string_field(256)?,
            originator: self.read_bext_string_field(32)?,
            originator_reference: self.read_bext_string_field(32)?,
            origination_date: self.read_bext_string_field(10)?,
            origination_time: self.read_bext_string_field(8)?,
            time_reference_low: self.read_u32::<LittleEndian>()?,
            time_reference_high: self.read_u32::<LittleEndian>()?,
            version: self.read_u16::<LittleEndian>()?,
            umid: {
                let mut buf = [0u8; 64];
                self.read_exact(&mut buf)?;
                buf
            },
            loudness_value: self.read_u16::<LittleEndian>()?,
            loudness_range: self.read_u16::<LittleEndian>()?,
            max_true_peak_level: self.read_u16::<LittleEndian>()?,
            max_momentary_loudness: self.read_u16::<LittleEndian>()?,
            max_short_term_loudness: self.read_u16::<LittleEndian>()?,
            reserved: self.read_bext_string_field(180)?,
            coding_history: read_bytes(self, length.saturating_sub(BEXT_FIXED_LENGTH))?,
        })
    }
}
