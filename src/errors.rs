use super::fourcc::FourCC;
use std::io;
use thiserror::Error;

/// Exit code for a clean walk through end-of-stream.
pub const EXIT_OK: i32 = 0;

/// Exit code when the file cannot be opened or read.
pub const EXIT_IO: i32 = 1;

/// Exit code when the file is not a RIFF/WAVE container.
pub const EXIT_INVALID_CONTAINER: i32 = 2;

/// Errors returned by methods in this crate.
///
/// Only `Io` and `InvalidContainer` abort an inspection. The other
/// variants are collected in the [`Report`](crate::Report) as warnings or
/// as the reason the chunk walk stopped early.
#[derive(Debug, Error)]
pub enum Error {
    /// An `io::Error` occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not begin with a `RIFF` header of form `WAVE`
    #[error("only RIFF-WAVE files are supported (found {signature}/{form})")]
    InvalidContainer { signature: FourCC, form: FourCC },

    /// The stream ended inside a chunk header
    #[error("chunk header at offset {at} is truncated")]
    TruncatedHeader { at: u64 },

    /// A chunk's declared length runs past the end of the stream
    #[error("chunk {signature} at offset {start} declares {declared} bytes but only {available} remain")]
    TruncatedChunk {
        signature: FourCC,
        start: u64,
        declared: u64,
        available: u64,
    },

    /// The format chunk describes something other than integer PCM
    #[error("unsupported format tag {tag:#06x}, only PCM (0x0001) is supported")]
    UnsupportedFormat { tag: u16 },

    /// A recognized chunk is too short to hold its fixed record
    #[error("chunk {signature} is {actual} bytes, shorter than its {expected} byte record")]
    MalformedChunk {
        signature: FourCC,
        expected: u64,
        actual: u64,
    },
}

impl Error {
    /// Fatal errors abort the inspection, everything else is reported.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Io(_) | Error::InvalidContainer { .. })
    }

    /// Stable process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(_) => EXIT_IO,
            Error::InvalidContainer { .. } => EXIT_INVALID_CONTAINER,
            _ => EXIT_OK,
        }
    }
}
