use tracing::{debug, trace};

use super::config::{ContainerSet, DecoderConfig, DEFAULT_MAX_DEPTH};
use super::element::{Element, Elements};
use super::errors::decode::DecodeError;
use super::range::ByteRange;
use super::source::ByteSource;
use super::tools;

// Element ids are limited to 4 bytes (the EBMLMaxIDLength default).
const MAX_ID_LENGTH: u64 = 4;

///
/// Decodes the element tree in `[0, total_length)` of `source`, descending into the ids in `containers`.
///
/// # Errors
///
/// Any malformed vint, short read, or element that overruns its parent aborts the whole decode - no partial tree is returned.
///
/// Containers may nest at most [`DEFAULT_MAX_DEPTH`] levels.  A deeper document, e.g. one with recursive SimpleTag or ChapterAtom containers, fails with [`DecodeError::DepthLimitExceeded`] even though it is well formed.  Use [`decode_with_config`] to raise the limit.
///
/// ## Example
///
/// ```
/// use ebml_tree::{decode, ContainerSet};
///
/// // EBML header containing DocType "webm"
/// let data: Vec<u8> = vec![0x1a, 0x45, 0xdf, 0xa3, 0x87, 0x42, 0x82, 0x84, b'w', b'e', b'b', b'm'];
/// let elements = decode(&data, data.len() as u64, &ContainerSet::matroska_default()).unwrap();
///
/// assert_eq!(1, elements.len());
/// assert_eq!(0x1a45dfa3, elements[0].id());
/// assert_eq!(0x4282, elements[0].children()[0].id());
/// assert_eq!(4, elements[0].children()[0].data_range().size());
/// ```
///
pub fn decode<S>(source: &S, total_length: u64, containers: &ContainerSet) -> Result<Elements, DecodeError>
    where S: ByteSource + ?Sized
{
    decode_range(source, ByteRange::with_length(total_length), containers, DEFAULT_MAX_DEPTH)
}

///
/// Same as [`decode`], with all settings taken from a [`DecoderConfig`].
///
pub fn decode_with_config<S>(source: &S, total_length: u64, config: &DecoderConfig) -> Result<Elements, DecodeError>
    where S: ByteSource + ?Sized
{
    decode_range(source, ByteRange::with_length(total_length), config.containers(), config.max_depth())
}

fn decode_range<S>(source: &S, range: ByteRange, containers: &ContainerSet, max_depth: u32) -> Result<Elements, DecodeError>
    where S: ByteSource + ?Sized
{
    debug!(start = range.start(), end = range.end(), containers = containers.len(), "decoding element tree");

    // Make sure the declared extent is actually readable so that leaf data
    // ranges can't point past the end of the source.
    if !range.is_empty() {
        let last = range.end() - 1;
        source.read_at(last, &mut [0u8; 1]).map_err(|e| DecodeError::from_read(last, 1, e))?;
    }

    let builder = TreeBuilder { source, containers, max_depth };
    let elements = builder.build(range, 0)?;

    debug!(roots = elements.len(), "decoded element tree");
    Ok(Elements::new(elements))
}

///
/// Decodes the sibling elements that exactly tile `range`, recursing into container ids.
///
/// Elements are assigned `level`, their descendants `level + 1` and so on.  The depth limit of [`DEFAULT_MAX_DEPTH`] applies to the absolute level, so a container found at `level >= DEFAULT_MAX_DEPTH` fails immediately.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedOrMisaligned`] if an element's declared size runs past the end of `range`, and [`DecodeError::DepthLimitExceeded`] if a container sits at or below the depth limit.
///
pub fn build_elements<S>(source: &S, range: ByteRange, level: u32, containers: &ContainerSet) -> Result<Vec<Element>, DecodeError>
    where S: ByteSource + ?Sized
{
    TreeBuilder { source, containers, max_depth: DEFAULT_MAX_DEPTH }.build(range, level)
}

///
/// Decodes the header of a single element starting at `offset`.
///
/// The returned element has level `0` and no children.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidVarint`] if the id or size field has no length marker or the id is longer than 4 bytes, and [`DecodeError::UnexpectedEndOfData`] if the source ends within the header.
///
pub fn read_element<S>(source: &S, offset: u64) -> Result<Element, DecodeError>
    where S: ByteSource + ?Sized
{
    let (id_length, id) = read_vint_at(source, offset, false)?;
    if id_length > MAX_ID_LENGTH {
        return Err(DecodeError::InvalidVarint { offset });
    }

    let (size_length, size) = read_vint_at(source, offset + id_length, true)?;
    let header_length = id_length + size_length;

    Ok(Element {
        id: id as u32,
        at: offset,
        header_length,
        total_size: size + header_length,
        level: 0,
        children: Vec::new(),
    })
}

fn read_vint_at<S>(source: &S, offset: u64, masked: bool) -> Result<(u64, u64), DecodeError>
    where S: ByteSource + ?Sized
{
    let mut buffer = [0u8; 8];

    source.read_at(offset, &mut buffer[..1]).map_err(|e| DecodeError::from_read(offset, 1, e))?;
    let length = tools::vint_length(buffer[0]).map_err(|_| DecodeError::InvalidVarint { offset })?;

    let buffer = &mut buffer[..length];
    source.read_at(offset, buffer).map_err(|e| DecodeError::from_read(offset, length as u64, e))?;
    let value = tools::decode_vint(buffer, masked).map_err(|_| DecodeError::InvalidVarint { offset })?;

    Ok((length as u64, value))
}

struct TreeBuilder<'a, S: ?Sized> {
    source: &'a S,
    containers: &'a ContainerSet,
    max_depth: u32,
}

impl<'a, S> TreeBuilder<'a, S>
    where S: ByteSource + ?Sized
{
    fn build(&self, range: ByteRange, level: u32) -> Result<Vec<Element>, DecodeError> {
        let mut elements = Vec::new();
        let mut cursor = range.start();

        while cursor < range.end() {
            let mut element = read_element(self.source, cursor)?;
            element.level = level;

            let end = cursor.saturating_add(element.total_size);
            if end > range.end() {
                return Err(DecodeError::TruncatedOrMisaligned {
                    offset: cursor,
                    id: element.id,
                    end,
                    bound: range.end(),
                });
            }

            trace!(id = element.id, at = cursor, total_size = element.total_size, depth = level, "read element");

            if self.containers.contains(element.id) {
                if level >= self.max_depth {
                    return Err(DecodeError::DepthLimitExceeded { offset: cursor, depth: self.max_depth });
                }
                element.children = self.build(element.data_range(), level + 1)?;
            }

            elements.push(element);
            cursor = end;
        }

        Ok(elements)
    }
}
