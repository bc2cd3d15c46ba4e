use super::fourcc::{FourCC, ReadFourCC};
use super::generic::read_bytes;
use super::text;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Error};

#[derive(Debug, Clone, PartialEq)]
pub struct ListFormItem {
    pub signature: FourCC,
    pub contents: Vec<u8>,
}

impl ListFormItem {
    /// Contents as text, trimmed of NUL padding. `INFO` values are
    /// NUL-terminated strings.
    pub fn text(&self) -> Option<String> {
        text::sanitize(&self.contents)
    }
}

/// A `LIST` chunk: a form signature followed by sub-chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct ListForm {
    pub form: FourCC,
    pub items: Vec<ListFormItem>,
}

/// A helper that will accept a LIST chunk as a [u8]
/// and give you back each segment
///
/// Sub-chunks follow the same word alignment as top-level chunks, though
/// a missing pad byte after the final item is tolerated.
pub fn collect_list_form(list_contents: &[u8]) -> Result<ListForm, Error> {
    let mut cursor = Cursor::new(list_contents);
    let form = cursor.read_fourcc()?;

    let mut items: Vec<ListFormItem> = vec![];

    while (cursor.position() as usize) < list_contents.len() {
        let this_sig = cursor.read_fourcc()?;
        let this_size = cursor.read_u32::<LittleEndian>()?;
        let contents = read_bytes(&mut cursor, this_size as u64)?;

        items.push(ListFormItem {
            signature: this_sig,
            contents,
        });

        if this_size % 2 == 1 && (cursor.position() as usize) < list_contents.len() {
            cursor.read_u8()?;
        }
    }

    Ok(ListForm { form, items })
}
