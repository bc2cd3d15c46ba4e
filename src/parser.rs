use std::io;
use std::io::SeekFrom::{End, Start};
use std::io::{Read, Seek};

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

use tracing::{debug, warn};

use super::container::{read_container_header, ContainerHeader, CONTAINER_HEADER_LENGTH};
use super::errors::Error;
use super::fourcc::{FourCC, ReadFourCC};
use super::raw_chunk_reader::RawChunkReader;

// Chunk layout per the RIFF spec, Multimedia Programming Interface and Data
// Specifications 1.0, IBM/Microsoft 1991, chapter 2.

/// Length of a chunk header, signature plus length field.
pub const CHUNK_HEADER_LENGTH: u64 = 8;

/// The header of one chunk in the stream.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChunkHeader {
    pub signature: FourCC,

    /// Declared payload length, not counting the pad byte.
    pub length: u32,

    /// Stream offset of the first payload byte.
    pub start: u64,
}

impl ChunkHeader {
    /// Count of pad bytes following the payload, 1 if `length` is odd.
    pub fn pad(&self) -> u64 {
        self.length as u64 % 2
    }

    /// Stream offset just past the payload and its pad byte, where the
    /// next chunk header begins.
    pub fn end(&self) -> u64 {
        self.start + self.length as u64 + self.pad()
    }
}

#[derive(Debug)]
pub enum Event {
    StartParse,
    ReadHeader { header: ContainerHeader },
    SkippedPadding { at: u64, count: u64 },
    BeginChunk { header: ChunkHeader },
    /// The walk stopped early on a truncated header or payload. Chunks
    /// before this event are complete.
    Truncated { condition: Error },
    Failed { error: Error },
    FinishParse,
}

#[derive(Debug)]
enum State {
    New,
    ReadyForHeader,
    ReadyForChunk { at: u64 },
    Truncated { header: ChunkHeader },
    Error,
    Complete,
}

/// Walks the chunks of a RIFF/WAVE stream.
///
/// `Parser` is an iterator of [`Event`]s. After a `BeginChunk` event the
/// caller may read the chunk through [`Parser::payload`]; on the next call
/// to `next()` the parser moves to the following header, skipping whatever
/// the caller left unread and the pad byte of an odd-length chunk.
pub struct Parser<R: Read + Seek> {
    stream: R,
    stream_length: u64,
    state: State,
}

impl<R: Read + Seek> Parser<R> {
    // wraps a stream
    pub fn make(stream: R) -> Result<Self, Error> {
        let mut the_stream = stream;
        let stream_length = the_stream.seek(End(0))?;
        the_stream.seek(Start(0))?;
        Ok(Parser {
            stream: the_stream,
            stream_length,
            state: State::New,
        })
    }

    /// Total length of the underlying stream.
    pub fn stream_length(&self) -> u64 {
        self.stream_length
    }

    /// Count of payload bytes of `header` actually present in the stream.
    pub fn available(&self, header: &ChunkHeader) -> u64 {
        self.stream_length
            .saturating_sub(header.start)
            .min(header.length as u64)
    }

    /// A bounded reader over the payload of `header`.
    ///
    /// The view ends at the declared length or at the end of the stream,
    /// whichever comes first, so reading a truncated payload reports an
    /// `UnexpectedEof`.
    pub fn payload(&mut self, header: &ChunkHeader) -> RawChunkReader<'_, R> {
        let available = self.available(header);
        RawChunkReader::new(&mut self.stream, header.start, available)
    }

    /// Only the chunk headers, stopping at the first truncation or failure.
    pub fn into_chunk_iterator(self) -> impl Iterator<Item = Result<ChunkHeader, Error>> {
        self.filter_map(|event| match event {
            Event::BeginChunk { header } => Some(Ok(header)),
            Event::Truncated { condition } => Some(Err(condition)),
            Event::Failed { error } => Some(Err(error)),
            _ => None,
        })
    }

    pub fn into_chunk_list(self) -> Result<Vec<ChunkHeader>, Error> {
        let mut error = Ok(());

        let chunks = self
            .into_chunk_iterator()
            .scan(&mut error, |err, res| match res {
                Ok(ok) => Some(ok),
                Err(e) => {
                    **err = Err(e);
                    None
                }
            })
            .collect();

        error?;

        Ok(chunks)
    }
}

impl<R: Read + Seek> Iterator for Parser<R> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        let (event, next_state) = self.advance();
        self.state = next_state;
        event
    }
}

impl<R: Read + Seek> Parser<R> {
    fn parse_header(&mut self) -> Result<(Event, State), Error> {
        self.stream.seek(Start(0))?;
        let header = read_container_header(&mut self.stream)?;

        if header.declared_file_length() != self.stream_length {
            debug!(
                declared = header.declared_file_length(),
                actual = self.stream_length,
                "RIFF length field does not match stream length"
            );
        }

        Ok((
            Event::ReadHeader { header },
            State::ReadyForChunk {
                at: CONTAINER_HEADER_LENGTH,
            },
        ))
    }

    /// Skip stray NUL bytes some writers leave between chunks.
    ///
    /// Returns the offset of the first non-zero byte, or `None` if the
    /// stream ends first.
    fn skip_padding(&mut self, at: u64) -> Result<Option<u64>, io::Error> {
        self.stream.seek(Start(at))?;
        let mut offset = at;
        while offset < self.stream_length {
            if self.stream.read_u8()? != 0 {
                return Ok(Some(offset));
            }
            offset += 1;
        }
        Ok(None)
    }

    fn read_chunk_header(&mut self) -> Result<(FourCC, u32), io::Error> {
        let signature = self.stream.read_fourcc()?;
        let length = self.stream.read_u32::<LittleEndian>()?;
        Ok((signature, length))
    }

    fn enter_chunk(&mut self, at: u64) -> Result<(Event, State), Error> {
        if at >= self.stream_length {
            return Ok((Event::FinishParse, State::Complete));
        }

        let header_at = match self.skip_padding(at)? {
            Some(header_at) => header_at,
            None => {
                debug!(at, count = self.stream_length - at, "trailing NUL padding");
                return Ok((Event::FinishParse, State::Complete));
            }
        };

        if header_at > at {
            return Ok((
                Event::SkippedPadding {
                    at,
                    count: header_at - at,
                },
                State::ReadyForChunk { at: header_at },
            ));
        }

        self.stream.seek(Start(header_at))?;
        let (signature, length) = match self.read_chunk_header() {
            Ok(ok) => ok,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                let condition = Error::TruncatedHeader { at: header_at };
                warn!("{}", condition);
                return Ok((Event::Truncated { condition }, State::Complete));
            }
            Err(e) => return Err(e.into()),
        };

        let header = ChunkHeader {
            signature,
            length,
            start: header_at + CHUNK_HEADER_LENGTH,
        };

        debug!(
            signature = %header.signature,
            length = header.length,
            start = header.start,
            "chunk"
        );

        let state = if header.start + header.length as u64 > self.stream_length {
            State::Truncated { header }
        } else {
            State::ReadyForChunk { at: header.end() }
        };

        Ok((Event::BeginChunk { header }, state))
    }

    fn truncated_chunk(&self, header: ChunkHeader) -> (Event, State) {
        let condition = Error::TruncatedChunk {
            signature: header.signature,
            start: header.start,
            declared: header.length as u64,
            available: self.available(&header),
        };
        warn!("{}", condition);
        (Event::Truncated { condition }, State::Complete)
    }

    fn handle_state(&mut self) -> Result<(Option<Event>, State), Error> {
        match self.state {
            State::New => Ok((Some(Event::StartParse), State::ReadyForHeader)),
            State::ReadyForHeader => {
                let (event, state) = self.parse_header()?;
                Ok((Some(event), state))
            }
            State::ReadyForChunk { at } => {
                let (event, state) = self.enter_chunk(at)?;
                Ok((Some(event), state))
            }
            State::Truncated { header } => {
                let (event, state) = self.truncated_chunk(header);
                Ok((Some(event), state))
            }
            State::Error => Ok((Some(Event::FinishParse), State::Complete)),
            State::Complete => Ok((None, State::Complete)),
        }
    }

    fn advance(&mut self) -> (Option<Event>, State) {
        match self.handle_state() {
            Ok((event, state)) => (event, state),
            Err(error) => (Some(Event::Failed { error }), State::Error),
        }
    }
}
