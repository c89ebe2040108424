//! This crate provides the element metadata used to present trees decoded by the ebml-tree crate.
//!
//! The decoding engine itself never consults this metadata - it only needs to know which ids are containers.  Names and "text" flags are purely for presentation.
//!

///
/// Contains an empty metadata feed for use with examples or very basic testing.
///
pub mod empty_spec;

///
/// Contains the metadata feed for the commonly encountered Matroska elements.
///
pub mod matroska;

///
/// Well known element ids.
///
/// Ids are stored "unmasked", i.e. including their vint length marker, which is how they are usually written in the Matroska documentation.  See <https://www.matroska.org/technical/elements.html> for the full list.
///
pub mod ids {
    pub const EBML: u32 = 0x1A45DFA3;
    pub const DOC_TYPE: u32 = 0x4282;
    pub const VOID: u32 = 0xEC;

    pub const SEGMENT: u32 = 0x18538067;

    // top level children of a segment
    pub const SEEK_HEAD: u32 = 0x114D9B74;
    pub const INFO: u32 = 0x1549A966;
    pub const TRACKS: u32 = 0x1654AE6B;
    pub const CLUSTER: u32 = 0x1F43B675;
    pub const CUES: u32 = 0x1C53BB6B;
    pub const TAGS: u32 = 0x1254C367;
    pub const CHAPTERS: u32 = 0x1043A770;
    pub const ATTACHMENTS: u32 = 0x1941A469;

    pub const TIMESTAMP_SCALE: u32 = 0x2AD7B1;
    pub const MUXING_APP: u32 = 0x4D80;
    pub const WRITING_APP: u32 = 0x5741;
    pub const TRACK_ENTRY: u32 = 0xAE;
    pub const TAG: u32 = 0x7373;

    pub const TRACK_NUMBER: u32 = 0xD7;
    pub const TRACK_UID: u32 = 0x73C5;
    pub const TRACK_TYPE: u32 = 0x83;
}

///
/// This trait should be implemented to describe elements for presentation.
///
/// Implementations are plain lookup tables - they hold no state that changes over their lifetime and can be shared freely between threads.
///
pub trait ElementMetadata {
    ///
    /// Gets the human readable name of an element id.
    ///
    /// This function *must* return [`None`] if the id is not known to the implementation.
    ///
    fn name(&self, id: u32) -> Option<&'static str>;

    ///
    /// Returns whether the data of an element should be displayed as text.
    ///
    fn is_text(&self, id: u32) -> bool;
}

impl<T: ElementMetadata + ?Sized> ElementMetadata for &T {
    fn name(&self, id: u32) -> Option<&'static str> {
        (**self).name(id)
    }

    fn is_text(&self, id: u32) -> bool {
        (**self).is_text(id)
    }
}
