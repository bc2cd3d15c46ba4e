//! Fixed-width text fields.
//!
//! Broadcast-WAV stores its strings in fixed-width ASCII fields that are
//! padded out with NUL or space characters. A field may contain nothing but
//! padding, which is reported as `None` so "absent" is distinguishable from
//! a field holding an empty-looking value.

use encoding::all::ASCII;
use encoding::{DecoderTrap, Encoding};

fn is_padding(b: u8) -> bool {
    b == 0 || b == b' '
}

/// Drop trailing NUL/space padding from `field`.
///
/// Internal NULs and spaces are kept. Returns `None` if every byte of the
/// field is padding (including the zero-length field).
pub fn trim_padding(field: &[u8]) -> Option<&[u8]> {
    field
        .iter()
        .rposition(|b| !is_padding(*b))
        .map(|last| &field[..=last])
}

/// Decode a padded ASCII field into an owned string.
///
/// Bytes outside of ASCII are replaced rather than failing the decode.
pub fn sanitize(field: &[u8]) -> Option<String> {
    trim_padding(field).map(decode_ascii)
}

/// Decode raw ASCII text as-is, without trimming.
pub fn decode_ascii(bytes: &[u8]) -> String {
    ASCII
        .decode(bytes, DecoderTrap::Replace)
        .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned())
}

/// Render binary bytes as a printable string of the same length.
///
/// Used for identifier data like the UMID which is not padded text; every
/// non-printable byte becomes a `.`.
pub fn printable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| if b.is_ascii_graphic() || *b == b' ' { *b as char } else { '.' })
        .collect()
}
