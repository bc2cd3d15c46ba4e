use std::collections::HashMap;
use std::io::{ErrorKind, Read, Seek};

use tracing::{debug, warn};

use super::bext::{Bext, BEXT_FIXED_LENGTH};
use super::chunks::ReadBWaveChunks;
use super::errors::Error;
use super::fmt::{WaveFmt, WAVE_FMT_LENGTH};
use super::fourcc::*;
use super::generic::GenericChunk;
use super::list_form::{collect_list_form, ListForm};
use super::parser::ChunkHeader;
use super::raw_chunk_reader::RawChunkReader;

/// How the payload of a chunk is decoded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Strategy {
    /// `fmt ` record
    Format,
    /// `bext` record
    BroadcastExtension,
    /// Audio samples, the payload is not read
    AudioData,
    /// `LIST` form with sub-chunks
    List,
    /// Raw payload, rendered as ASCII
    Generic,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Registration {
    pub strategy: Strategy,
    pub description: &'static str,
}

const UNKNOWN: Registration = Registration {
    strategy: Strategy::Generic,
    description: "unknown chunk",
};

/// A decoded chunk payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkBody {
    Format(WaveFmt),
    BroadcastExtension(Bext),
    AudioData,
    List(ListForm),
    Generic(GenericChunk),
}

/// The result of decoding one chunk.
#[derive(Debug)]
pub struct Decoded {
    pub body: ChunkBody,

    /// Non-fatal problem found while decoding, the body is still usable.
    pub warning: Option<Error>,
}

/// Maps chunk signatures to decoding strategies.
///
/// Signatures that were never registered decode with
/// [`Strategy::Generic`].
#[derive(Debug, Clone)]
pub struct DecoderRegistry {
    entries: HashMap<FourCC, Registration>,
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        let mut r = Self::new();
        r.register(FMT__SIG, Strategy::Format, "format");
        r.register(BEXT_SIG, Strategy::BroadcastExtension, "broadcast audio extension");
        r.register(DATA_SIG, Strategy::AudioData, "audio data");

        r.register(FACT_SIG, Strategy::Generic, "fact");
        r.register(LIST_SIG, Strategy::List, "list");
        r.register(CUE__SIG, Strategy::Generic, "cue points");
        r.register(IXML_SIG, Strategy::Generic, "iXML production metadata");
        r.register(AXML_SIG, Strategy::Generic, "XML metadata");
        r.register(JUNK_SIG, Strategy::Generic, "filler");
        r.register(PAD__SIG, Strategy::Generic, "filler");
        r.register(FLLR_SIG, Strategy::Generic, "filler");

        r.register(MINF_SIG, Strategy::Generic, "Pro Tools media info");
        r.register(ELM1_SIG, Strategy::Generic, "Pro Tools edit list");
        r.register(REGN_SIG, Strategy::Generic, "Pro Tools region");
        r.register(UMID_SIG, Strategy::Generic, "Pro Tools UMID");
        r.register(DGDA_SIG, Strategy::Generic, "Pro Tools DigiData");
        r
    }
}

impl DecoderRegistry {
    /// An empty registry, every chunk decodes generically.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, signature: FourCC, strategy: Strategy, description: &'static str) {
        self.entries.insert(
            signature,
            Registration {
                strategy,
                description,
            },
        );
    }

    pub fn lookup(&self, signature: FourCC) -> Registration {
        self.entries.get(&signature).copied().unwrap_or(UNKNOWN)
    }

    /// Decode the payload of `header` from its bounded view.
    ///
    /// A payload that ends before its declared length is reported as
    /// `Error::TruncatedChunk`.
    pub fn decode<R: Read + Seek>(
        &self,
        header: &ChunkHeader,
        payload: &mut RawChunkReader<'_, R>,
    ) -> Result<Decoded, Error> {
        let available = payload.length();
        self.decode_strategy(header, payload)
            .map_err(|error| match error {
                Error::Io(ref e) if e.kind() == ErrorKind::UnexpectedEof => {
                    Error::TruncatedChunk {
                        signature: header.signature,
                        start: header.start,
                        declared: header.length as u64,
                        available,
                    }
                }
                other => other,
            })
    }

    fn decode_strategy<R: Read>(&self, header: &ChunkHeader, payload: &mut R) -> Result<Decoded, Error> {
        let length = header.length as u64;
        let strategy = self.lookup(header.signature).strategy;

        let minimum = match strategy {
            Strategy::Format => WAVE_FMT_LENGTH,
            Strategy::BroadcastExtension => BEXT_FIXED_LENGTH,
            _ => 0,
        };

        if length < minimum {
            let warning = Error::MalformedChunk {
                signature: header.signature,
                expected: minimum,
                actual: length,
            };
            warn!("{}", warning);
            return Ok(Decoded {
                body: ChunkBody::Generic(GenericChunk::read(payload, length)?),
                warning: Some(warning),
            });
        }

        match strategy {
            Strategy::Format => {
                let format = payload.read_wave_fmt(length)?;
                let warning = if format.is_supported() {
                    None
                } else {
                    let w = Error::UnsupportedFormat { tag: format.tag };
                    warn!("{}", w);
                    Some(w)
                };
                Ok(Decoded {
                    body: ChunkBody::Format(format),
                    warning,
                })
            }
            Strategy::BroadcastExtension => Ok(Decoded {
                body: ChunkBody::BroadcastExtension(payload.read_bext(length)?),
                warning: None,
            }),
            Strategy::AudioData => Ok(Decoded {
                body: ChunkBody::AudioData,
                warning: None,
            }),
            Strategy::List => {
                let generic = GenericChunk::read(payload, length)?;
                let body = match collect_list_form(&generic.payload) {
                    Ok(list) => ChunkBody::List(list),
                    Err(e) => {
                        debug!(signature = %header.signature, "unreadable list form: {}", e);
                        ChunkBody::Generic(generic)
                    }
                };
                Ok(Decoded {
                    body,
                    warning: None,
                })
            }
            Strategy::Generic => Ok(Decoded {
                body: ChunkBody::Generic(GenericChunk::read(payload, length)?),
                warning: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header(sig: &[u8; 4], length: u32) -> ChunkHeader {
        ChunkHeader {
            signature: FourCC::make(sig),
            length,
            start: 0,
        }
    }

    fn fmt_payload(tag: u16) -> Vec<u8> {
        let mut v = vec![];
        v.extend_from_slice(&tag.to_le_bytes());
        v.extend_from_slice(&1u16.to_le_bytes());
        v.extend_from_slice(&48000u32.to_le_bytes());
        v.extend_from_slice(&192000u32.to_le_bytes());
        v.extend_from_slice(&4u16.to_le_bytes());
        v.extend_from_slice(&32u16.to_le_bytes());
        v
    }

    fn decode(sig: &[u8; 4], declared: u32, bytes: Vec<u8>) -> Result<Decoded, Error> {
        let available = bytes.len() as u64;
        let mut c = Cursor::new(bytes);
        let mut view = RawChunkReader::new(&mut c, 0, available.min(declared as u64));
        DecoderRegistry::default().decode(&header(sig, declared), &mut view)
    }

    #[test]
    fn test_lookup() {
        let r = DecoderRegistry::default();
        assert_eq!(r.lookup(FMT__SIG).strategy, Strategy::Format);
        assert_eq!(r.lookup(BEXT_SIG).strategy, Strategy::BroadcastExtension);
        assert_eq!(r.lookup(MINF_SIG).strategy, Strategy::Generic);
        assert_eq!(r.lookup(MINF_SIG).description, "Pro Tools media info");
        assert_eq!(r.lookup(FourCC::make(b"zzzz")), UNKNOWN);
        assert_eq!(DecoderRegistry::new().lookup(FMT__SIG), UNKNOWN);
    }

    #[test]
    fn test_unsupported_format_warns() {
        let d = decode(b"fmt ", 16, fmt_payload(3)).unwrap();
        match (d.body, d.warning) {
            (ChunkBody::Format(f), Some(Error::UnsupportedFormat { tag })) => {
                assert_eq!(f.sample_rate, 48000);
                assert_eq!(tag, 3);
            }
            other => panic!("Unexpected {:?}", other),
        }
    }

    #[test]
    fn test_short_format_is_generic() {
        let d = decode(b"fmt ", 6, vec![1u8; 6]).unwrap();
        assert!(matches!(d.body, ChunkBody::Generic(_)));
        assert!(matches!(
            d.warning,
            Some(Error::MalformedChunk {
                expected: 16,
                actual: 6,
                ..
            })
        ));
    }

    #[test]
    fn test_list_form() {
        let d = decode(b"LIST", 18, b"INFOISFT\x06\x00\x00\x00Lavf\x00\x00".to_vec()).unwrap();
        match d.body {
            ChunkBody::List(list) => {
                assert_eq!(list.form, FourCC::make(b"INFO"));
                assert_eq!(list.items[0].text().as_deref(), Some("Lavf"));
            }
            other => panic!("Unexpected {:?}", other),
        }

        let d = decode(b"LIST", 6, b"INFOIS".to_vec()).unwrap();
        assert!(matches!(d.body, ChunkBody::Generic(_)));
    }

    #[test]
    fn test_data_is_not_read() {
        let d = decode(b"data", 4, vec![]).unwrap();
        assert_eq!(d.body, ChunkBody::AudioData);
    }

    #[test]
    fn test_truncated_payload() {
        match decode(b"iXML", 10, b"<xml".to_vec()) {
            Err(Error::TruncatedChunk {
                declared,
                available,
                ..
            }) => {
                assert_eq!(declared, 10);
                assert_eq!(available, 4);
            }
            other => panic!("Unexpected {:?}", other),
        }

        let mut bytes = fmt_payload(1);
        bytes.truncate(9);
        assert!(matches!(
            decode(b"fmt ", 16, bytes),
            Err(Error::TruncatedChunk { .. })
        ));
    }

    #[test]
    fn test_truncated_bext_history() {
        let mut bytes = vec![0u8; BEXT_FIXED_LENGTH as usize];
        bytes.extend_from_slice(b"A=PCM");
        match decode(b"bext", 0xFFFF_FFF0, bytes) {
            Err(Error::TruncatedChunk {
                declared,
                available,
                ..
            }) => {
                assert_eq!(declared, 0xFFFF_FFF0);
                assert_eq!(available, 607);
            }
            other => panic!("Unexpected {:?}", other),
        }
    }
}
