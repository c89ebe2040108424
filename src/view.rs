//!
//! Renders a decoded element tree as indented text.
//!
//! Each element is written on its own line in depth-first order, for example:
//!
//! ```text
//! --| ID: 0x1a45dfa3(EBML) of level 0, size: 16 @0, data:[5, 16)
//! --|--| ID: 0x4282(DocType) of level 1, size: 11 @5, data:[8, 16) == "matroska"
//! ```
//!

use ebml_tree_specification::ElementMetadata;

use super::element::{Element, Elements};
use super::errors::decode::DecodeError;
use super::reader::EbmlReader;
use super::source::ByteSource;

///
/// Decodes the reader's document and renders it with [`render`].
///
pub fn view<S, M>(reader: &EbmlReader<S>, metadata: &M) -> Result<String, DecodeError>
    where S: ByteSource, M: ElementMetadata + ?Sized
{
    let elements = reader.elements()?;
    render(reader, &elements, metadata)
}

///
/// Renders `elements` one line per element.
///
/// Names come from `metadata`; unknown ids render with an empty name.  The data of elements flagged as text by `metadata` is read from `reader` and appended (invalid UTF-8 is replaced rather than rejected).
///
/// # Errors
///
/// Fails only if reading the data of a text element fails.
///
pub fn render<S, M>(reader: &EbmlReader<S>, elements: &Elements, metadata: &M) -> Result<String, DecodeError>
    where S: ByteSource, M: ElementMetadata + ?Sized
{
    let mut lines = Vec::new();
    elements.walk(|element| {
        lines.push(render_line(reader, element, metadata)?);
        Ok::<_, DecodeError>(())
    })?;
    Ok(lines.join("\n"))
}

fn render_line<S, M>(reader: &EbmlReader<S>, element: &Element, metadata: &M) -> Result<String, DecodeError>
    where S: ByteSource, M: ElementMetadata + ?Sized
{
    let data = element.data_range();
    let mut line = format!(
        "{} ID: 0x{:x}({}) of level {}, size: {} @{}, data:[{}, {})",
        "--|".repeat(element.level() as usize + 1),
        element.id(),
        metadata.name(element.id()).unwrap_or_default(),
        element.level(),
        element.total_size(),
        element.at(),
        data.start(),
        data.end(),
    );

    if metadata.is_text(element.id()) {
        let bytes = reader.read_data(element)?;
        line.push_str(&format!(" == \"{}\"", String::from_utf8_lossy(&bytes)));
    }

    Ok(line)
}
