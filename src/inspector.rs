use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use tracing::{debug, info};

use super::errors::Error;
use super::parser::{Event, Parser};
use super::registry::DecoderRegistry;
use super::report::{ChunkReport, Report, Termination};

/// Walks a RIFF/WAVE stream and reports every chunk in it.
///
/// ```no_run
/// use wavinfo::WaveInspector;
///
/// let mut inspector = WaveInspector::open("tests/media/minimal.wav").unwrap();
/// let report = inspector.inspect().unwrap();
///
/// let format = report.format().unwrap();
/// assert_eq!(format.channel_count, 2);
/// assert_eq!(format.sample_rate, 44100);
/// ```
#[derive(Debug)]
pub struct WaveInspector<R: Read + Seek> {
    inner: R,
    registry: DecoderRegistry,
}

impl WaveInspector<BufReader<File>> {
    /// Open a file for inspection with buffered IO.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let f = File::open(path)?;
        Ok(Self::new(BufReader::new(f)))
    }
}

impl<R: Read + Seek> WaveInspector<R> {
    /// Wrap a stream positioned anywhere, inspection always starts at
    /// offset zero.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            registry: DecoderRegistry::default(),
        }
    }

    /// Replace the decoder registry.
    pub fn with_registry(mut self, registry: DecoderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Walk the stream and decode every chunk.
    ///
    /// I/O failures and a missing `RIFF`/`WAVE` header are returned as
    /// `Err`. A truncated chunk ends the walk early and is recorded in
    /// [`Report::termination`], every chunk before it is still reported.
    pub fn inspect(&mut self) -> Result<Report, Error> {
        let mut parser = Parser::make(&mut self.inner)?;
        let stream_length = parser.stream_length();

        let mut container = None;
        let mut chunks = vec![];
        let mut warnings = vec![];
        let mut termination = Termination::EndOfStream;

        while let Some(event) = parser.next() {
            match event {
                Event::StartParse => (),
                Event::ReadHeader { header } => {
                    info!(
                        declared_size = header.declared_size,
                        stream_length, "RIFF/WAVE container"
                    );
                    container = Some(header);
                }
                Event::SkippedPadding { at, count } => {
                    debug!(at, count, "skipped NUL padding between chunks");
                }
                Event::BeginChunk { header } => {
                    let registration = self.registry.lookup(header.signature);
                    let decoded = {
                        let mut payload = parser.payload(&header);
                        self.registry.decode(&header, &mut payload)
                    };

                    let body = match decoded {
                        Ok(decoded) => {
                            warnings.extend(decoded.warning);
                            Some(decoded.body)
                        }
                        // the parser reports the truncation as its next event
                        Err(Error::TruncatedChunk { .. }) => None,
                        Err(e) => return Err(e),
                    };

                    chunks.push(ChunkReport {
                        header,
                        description: registration.description,
                        body,
                    });
                }
                Event::Truncated { condition } => termination = Termination::Truncated(condition),
                Event::Failed { error } => return Err(error),
                Event::FinishParse => break,
            }
        }

        let container = container.ok_or_else(|| {
            Error::from(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stream ended before the RIFF header",
            ))
        })?;

        Ok(Report {
            container,
            stream_length,
            chunks,
            warnings,
            termination,
        })
    }
}
