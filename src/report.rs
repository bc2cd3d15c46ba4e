use std::fmt::{self, Display, Formatter};

use super::bext::Bext;
use super::container::ContainerHeader;
use super::errors::{Error, EXIT_OK};
use super::fmt::WaveFmt;
use super::parser::ChunkHeader;
use super::registry::ChunkBody;

/// Placeholder shown for a text field that holds only padding.
pub const NO_CONTENT: &str = "<none>";

/// Default count of payload bytes shown for generic chunks.
pub const DEFAULT_PREVIEW_LIMIT: usize = 256;

/// One chunk as found in the stream.
#[derive(Debug)]
pub struct ChunkReport {
    pub header: ChunkHeader,

    /// Registry description of the signature.
    pub description: &'static str,

    /// The decoded payload, `None` if the payload was truncated.
    pub body: Option<ChunkBody>,
}

/// Why the chunk walk stopped.
#[derive(Debug)]
pub enum Termination {
    /// Every chunk was read through to the end of the stream.
    EndOfStream,

    /// A header or payload ran past the end of the stream.
    Truncated(Error),
}

/// Structure and metadata of one RIFF/WAVE stream.
#[derive(Debug)]
pub struct Report {
    pub container: ContainerHeader,

    /// Actual length of the inspected stream.
    pub stream_length: u64,

    /// Chunks in stream order.
    pub chunks: Vec<ChunkReport>,

    /// Non-fatal problems, like unsupported formats.
    pub warnings: Vec<Error>,

    pub termination: Termination,
}

impl Report {
    /// The first format record in the stream.
    pub fn format(&self) -> Option<&WaveFmt> {
        self.chunks.iter().find_map(|c| match &c.body {
            Some(ChunkBody::Format(f)) => Some(f),
            _ => None,
        })
    }

    /// The first Broadcast-WAV record in the stream.
    pub fn broadcast_extension(&self) -> Option<&Bext> {
        self.chunks.iter().find_map(|c| match &c.body {
            Some(ChunkBody::BroadcastExtension(b)) => Some(b),
            _ => None,
        })
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.termination, Termination::Truncated(_))
    }

    /// Process exit code. Truncation is not an error.
    pub fn exit_code(&self) -> i32 {
        EXIT_OK
    }

    /// A `Display` of this report, rendering at most `preview_limit` bytes
    /// of each generic chunk.
    pub fn display(&self, preview_limit: Option<usize>) -> ReportDisplay<'_> {
        ReportDisplay {
            report: self,
            preview_limit,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.display(Some(DEFAULT_PREVIEW_LIMIT)).fmt(f)
    }
}

pub struct ReportDisplay<'a> {
    report: &'a Report,
    preview_limit: Option<usize>,
}

fn text_field(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NO_CONTENT)
}

impl ReportDisplay<'_> {
    fn write_format(f: &mut Formatter<'_>, format: &WaveFmt) -> fmt::Result {
        writeln!(
            f,
            "    Format Tag:          {} ({})",
            format.tag,
            format.common_format().name()
        )?;
        writeln!(f, "    Audio channels:      {}", format.channel_count)?;
        writeln!(f, "    Samplerate:          {}", format.sample_rate)?;
        writeln!(f, "    Average Bytes / sec: {}", format.bytes_per_second)?;
        writeln!(f, "    Block align:         {}", format.block_alignment)?;
        writeln!(f, "    Bits per sample:     {}", format.bits_per_sample)?;
        if format.extension_length > 0 {
            writeln!(f, "    Extension bytes:     {} (skipped)", format.extension_length)?;
        }
        Ok(())
    }

    fn write_bext(f: &mut Formatter<'_>, bext: &Bext) -> fmt::Result {
        writeln!(f, "    Description:         {}", text_field(&bext.description))?;
        writeln!(f, "    Originator:          {}", text_field(&bext.originator))?;
        writeln!(f, "    Originator Ref.:     {}", text_field(&bext.originator_reference))?;
        writeln!(f, "    Origination Date:    {}", text_field(&bext.origination_date))?;
        writeln!(f, "    Origination Time:    {}", text_field(&bext.origination_time))?;
        writeln!(f, "    Time Ref. (low):     {}", bext.time_reference_low)?;
        writeln!(f, "    Time Ref. (high):    {}", bext.time_reference_high)?;
        writeln!(f, "    Version:             {}", bext.version)?;
        writeln!(f, "    UMID:                {}", bext.umid_string())?;
        writeln!(f, "    Loudness Value:      {}", bext.loudness_value)?;
        writeln!(f, "    Loudness Range:      {}", bext.loudness_range)?;
        writeln!(f, "    Max True Peak:       {}", bext.max_true_peak_level)?;
        writeln!(f, "    Max Momentary:       {}", bext.max_momentary_loudness)?;
        writeln!(f, "    Max Short Term:      {}", bext.max_short_term_loudness)?;
        writeln!(f, "    Reserved:            {}", text_field(&bext.reserved))?;
        writeln!(f, "    Coding History:      {} bytes", bext.coding_history.len())?;
        if !bext.coding_history.is_empty() {
            writeln!(f, "{}", bext.coding_history_text())?;
        }
        Ok(())
    }
}

impl Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let container = &report.container;

        writeln!(f, "Chunk ID:   {}", container.signature)?;
        writeln!(f, "File Size:  {} kb", container.declared_kib())?;
        writeln!(f, "Riff Type:  {}", container.form)?;

        for chunk in report.chunks.iter() {
            let header = &chunk.header;
            writeln!(f)?;
            writeln!(
                f,
                "[{}] {} bytes at offset {} ({})",
                header.signature, header.length, header.start, chunk.description
            )?;

            match &chunk.body {
                Some(ChunkBody::Format(format)) => Self::write_format(f, format)?,
                Some(ChunkBody::BroadcastExtension(bext)) => Self::write_bext(f, bext)?,
                Some(ChunkBody::AudioData) => {
                    if let Some(frames) = report
                        .format()
                        .and_then(|fmt| fmt.frame_count(header.length as u64))
                    {
                        writeln!(f, "    Frames:              {}", frames)?;
                    }
                }
                Some(ChunkBody::List(list)) => {
                    writeln!(f, "    Form:                {}", list.form)?;
                    for item in list.items.iter() {
                        match item.text() {
                            Some(text) => writeln!(f, "    {}: {}", item.signature, text)?,
                            None => writeln!(f, "    {}: {} bytes", item.signature, item.contents.len())?,
                        }
                    }
                }
                Some(ChunkBody::Generic(generic)) => {
                    if generic.is_blank() {
                        writeln!(f, "    <{} NUL bytes>", generic.payload.len())?;
                    } else {
                        writeln!(f, "{}", generic.render(self.preview_limit))?;
                    }
                }
                None => writeln!(f, "    <truncated>")?,
            }
        }

        if !report.warnings.is_empty() {
            writeln!(f)?;
            for warning in report.warnings.iter() {
                writeln!(f, "warning: {}", warning)?;
            }
        }

        if let Termination::Truncated(condition) = &report.termination {
            writeln!(f)?;
            writeln!(f, "stopped early: {}", condition)?;
        }

        Ok(())
    }
}
