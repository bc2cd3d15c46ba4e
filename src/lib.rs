/*!
# wavinfo

Inspect the chunk structure and metadata of RIFF/WAVE and Broadcast-WAV
files, without decoding any audio.

```no_run
use wavinfo::WaveInspector;

let mut inspector = WaveInspector::open("tests/media/bext_history.wav").unwrap();
let report = inspector.inspect().unwrap();

for chunk in report.chunks.iter() {
    println!("{} {}", chunk.header.signature, chunk.header.length);
}

if let Some(bext) = report.broadcast_extension() {
    println!("{:?}", bext.originator);
}
```

A stream is read in three steps:

1. The 12-byte `RIFF`/`WAVE` envelope is validated. Anything else, including
   big-endian `RIFX` files, is rejected.
2. Chunks are walked until the end of the stream. Stray NUL bytes between
   chunks are skipped and odd-length chunks are followed by one pad byte.
   A header or payload running past the end of the stream ends the walk
   early without failing it.
3. Each chunk is decoded by signature: `fmt ` and `bext` records are
   decoded into [`WaveFmt`] and [`Bext`], `data` is skipped, and every
   other chunk is kept raw as a [`GenericChunk`].

Only integer PCM (format tag 1) is supported; other formats are reported
as a warning and the walk continues.

## Resources

### Implementation of Wave files
- [Peter Kabal, McGill University](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/WAVE.html)
- [Multimedia Programming Interface and Data Specifications 1.0](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/Docs/riffmci.pdf)
  (August 1991), IBM Corporation and Microsoft Corporation

### Implementation of Broadcast Wave Files
- [EBU Tech 3285][ebu3285] (May 2011), "Specification of the Broadcast Wave Format (BWF)"
- [EBU Tech R098](https://tech.ebu.ch/docs/r/r098.pdf) (1999) "Format for the &lt;CodingHistory&gt; field in Broadcast Wave Format files, BWF"

[ebu3285]: https://tech.ebu.ch/docs/tech/tech3285.pdf
*/

extern crate byteorder;
extern crate encoding;

mod common_format;
mod errors;
mod fourcc;
mod text;

mod container;
mod parser;
mod raw_chunk_reader;

mod bext;
mod chunks;
mod fmt;
mod generic;
mod list_form;
mod registry;

mod config;
mod inspector;
mod report;

pub use bext::{Bext, BEXT_FIXED_LENGTH};
pub use common_format::CommonFormat;
pub use config::{init, Config};
pub use container::{read_container_header, ContainerHeader};
pub use errors::{Error, EXIT_INVALID_CONTAINER, EXIT_IO, EXIT_OK};
pub use fmt::{WaveFmt, WAVE_FMT_LENGTH};
pub use fourcc::FourCC;
pub use generic::GenericChunk;
pub use inspector::WaveInspector;
pub use list_form::{ListForm, ListFormItem};
pub use parser::{ChunkHeader, Event, Parser};
pub use raw_chunk_reader::RawChunkReader;
pub use registry::{ChunkBody, Decoded, DecoderRegistry, Registration, Strategy};
pub use report::{ChunkReport, Report, ReportDisplay, Termination, DEFAULT_PREVIEW_LIMIT, NO_CONTENT};
pub use text::{sanitize, trim_padding};
