use super::common_format::CommonFormat;

/// Length of the fixed `WAVEFORMAT` record with `wBitsPerSample`.
pub const WAVE_FMT_LENGTH: u64 = 16;

/**
 * WAV file data format record.
 *
 * The `fmt` record contains essential information describing the binary
 * structure of the data segment of the WAVE file, such as sample
 * rate, sample binary format, channel count, etc.
 *
 */
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveFmt {
    /// A tag identifying the codec in use.
    ///
    /// Only 0x0001, integer PCM, is supported.
    pub tag: u16,

    /// Count of audio channels in each frame
    pub channel_count: u16,

    /// Sample rate of the audio data
    pub sample_rate: u32,

    /// Count of bytes per second
    ///
    /// By rule, this is `block_alignment * sample_rate`
    pub bytes_per_second: u32,

    /// Count of bytes per audio frame
    ///
    /// By rule, this is `channel_count * bits_per_sample / 8`
    pub block_alignment: u16,

    /// Count of bits stored in the file per sample
    pub bits_per_sample: u16,

    /// Count of bytes following the fixed record that were skipped
    /// without interpretation (`cbSize` and codec extensions).
    pub extension_length: u64,
}

impl WaveFmt {
    pub fn common_format(&self) -> CommonFormat {
        CommonFormat::make(self.tag)
    }

    /// `true` for integer PCM.
    pub fn is_supported(&self) -> bool {
        self.common_format() == CommonFormat::IntegerPCM
    }

    /// Count of whole frames in a `data` payload of `data_length` bytes.
    ///
    /// `None` if the block alignment is zero.
    pub fn frame_count(&self, data_length: u64) -> Option<u64> {
        match self.block_alignment {
            0 => None,
            n => Some(data_length / n as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count() {
        let fmt = WaveFmt {
            tag: 1,
            channel_count: 2,
            sample_rate: 44100,
            bytes_per_second: 176400,
            block_alignment: 4,
            bits_per_sample: 16,
            extension_length: 0,
        };
        assert!(fmt.is_supported());
        assert_eq!(fmt.frame_count(176400), Some(44100));
        assert_eq!(WaveFmt { block_alignment: 0, ..fmt }.frame_count(10), None);
        assert!(!WaveFmt { tag: 3, ..fmt }.is_supported());
    }
}
