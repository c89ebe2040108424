use std::io;
use std::path::Path;

use tracing::debug;

use super::config::DecoderConfig;
use super::element::{Element, Elements};
use super::errors::decode::DecodeError;
use super::source::{ByteSource, FileSource};
use super::tree_builder;

///
/// Bundles a [`ByteSource`], its length, and a [`DecoderConfig`] so that a document can be decoded and its element data read back.
///
/// The reader holds no decode state: every call to [`EbmlReader::elements`] performs a fresh, full scan and returns a tree owned by the caller.
///
/// ## Example
///
/// ```no_run
/// use ebml_tree::EbmlReader;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let reader = EbmlReader::open("my_file.mkv")?;
/// let elements = reader.elements()?;
/// for element in elements.depth_first() {
///     println!("0x{:x} @{}", element.id(), element.at());
/// }
/// # Ok(())
/// # }
/// ```
///
#[derive(Debug)]
pub struct EbmlReader<S: ByteSource> {
    source: S,
    len: u64,
    config: DecoderConfig,
}

impl EbmlReader<FileSource> {
    ///
    /// Opens a file for decoding with the default configuration.
    ///
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let source = FileSource::open(path)?;
        let len = source.len();
        Ok(EbmlReader::new(source, len))
    }
}

impl EbmlReader<Vec<u8>> {
    pub fn from_vec(data: Vec<u8>) -> Self {
        let len = data.len() as u64;
        EbmlReader::new(data, len)
    }
}

impl<S: ByteSource> EbmlReader<S> {
    ///
    /// Returns a new reader over the first `len` bytes of `source`, using [`DecoderConfig::default`].
    ///
    pub fn new(source: S, len: u64) -> Self {
        EbmlReader { source, len, config: DecoderConfig::default() }
    }

    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    ///
    /// Decodes the element tree of the whole source.
    ///
    pub fn elements(&self) -> Result<Elements, DecodeError> {
        tree_builder::decode_with_config(&self.source, self.len, &self.config)
    }

    ///
    /// Reads the data bytes of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::DataTooLarge`] if the element's data is larger than the configured [`DecoderConfig::max_read_len`], so that a corrupt size can't trigger a huge allocation.
    ///
    pub fn read_data(&self, element: &Element) -> Result<Vec<u8>, DecodeError> {
        let range = element.data_range();
        let size = range.size();
        if size > self.config.max_read_len() {
            return Err(DecodeError::DataTooLarge { offset: range.start(), size, max: self.config.max_read_len() });
        }
        debug!(id = element.id(), offset = range.start(), size, "reading element data");

        self.source.read_bytes(range.start(), size as usize)
            .map_err(|e| DecodeError::from_read(range.start(), size, e))
    }
}
