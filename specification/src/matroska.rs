use super::ids::*;
use super::ElementMetadata;

///
/// Names and text flags for a subset of the Matroska specification.
///
/// Only the elements listed in [`crate::ids`] are covered.  Any other id is reported as unknown, which is not an error - the decoder handles unnamed elements the same as named ones.
///
/// ## Example
///
/// ```
/// use ebml_tree_specification::{ElementMetadata, ids};
/// use ebml_tree_specification::matroska::MatroskaMetadata;
///
/// assert_eq!(Some("DocType"), MatroskaMetadata.name(ids::DOC_TYPE));
/// assert!(MatroskaMetadata.is_text(ids::DOC_TYPE));
/// assert_eq!(None, MatroskaMetadata.name(0xBF));
/// ```
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatroskaMetadata;

impl ElementMetadata for MatroskaMetadata {
    fn name(&self, id: u32) -> Option<&'static str> {
        let name = match id {
            EBML => "EBML",
            DOC_TYPE => "DocType",
            VOID => "Void",
            SEGMENT => "Segment",
            SEEK_HEAD => "SeekHead",
            INFO => "Info",
            TRACKS => "Tracks",
            CLUSTER => "Cluster",
            CUES => "Cues",
            TAGS => "Tags",
            CHAPTERS => "Chapters",
            ATTACHMENTS => "Attachments",
            TIMESTAMP_SCALE => "TimestampScale",
            MUXING_APP => "MuxingApp",
            WRITING_APP => "WritingApp",
            TRACK_ENTRY => "TrackEntry",
            TAG => "Tag",
            TRACK_NUMBER => "TrackNumber",
            TRACK_UID => "TrackUID",
            TRACK_TYPE => "TrackType",
            _ => return None,
        };
        Some(name)
    }

    fn is_text(&self, id: u32) -> bool {
        matches!(id, DOC_TYPE | MUXING_APP | WRITING_APP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_known_ids() {
        assert_eq!(Some("Segment"), MatroskaMetadata.name(SEGMENT));
        assert_eq!(Some("TrackUID"), MatroskaMetadata.name(TRACK_UID));
        assert_eq!(Some("TimestampScale"), MatroskaMetadata.name(TIMESTAMP_SCALE));
    }

    #[test]
    fn unknown_ids_have_no_name() {
        assert_eq!(None, MatroskaMetadata.name(0x4287));
        assert!(!MatroskaMetadata.is_text(0x4287));
    }

    #[test]
    fn only_string_elements_are_text() {
        assert!(MatroskaMetadata.is_text(MUXING_APP));
        assert!(MatroskaMetadata.is_text(WRITING_APP));
        assert!(!MatroskaMetadata.is_text(TRACK_TYPE));
        assert!(!MatroskaMetadata.is_text(SEGMENT));
    }
}
