//! This crate decodes [EBML][EBML] documents into a tree of elements.  Its primary goal is to locate every element quickly and exactly, without interpreting any payload.
//!
//! [EBML][EBML] stands for Extensible Binary Meta-Language and is somewhat of a
//! binary version of XML. It's used for container formats like [WebM][webm] or
//! [MKV][mkv].
//!
//! # Containers
//! The decoder does not need a full specification.  It only needs to know which element ids are "containers" - elements whose data is itself a run of child elements.  These are supplied per decode as a [`ContainerSet`]; [`ContainerSet::matroska_default`] covers the common Matroska metadata containers.  Every other element, including ids no specification knows about, is decoded as an opaque leaf.
//!
//! Element names and text flags are presentation concerns and live in the `ebml-tree-specification` crate, used only by the [`view`] module.
//!
//! # Known Limitations
//! This library was not built to work with an "Unknown Data Size" as defined in [RFC8794][rfc8794]. Such sizes decode to a very large number, which usually fails the bounds check of the enclosing element.  It will only work on complete datasets.
//!
//! Nesting is bounded: containers deeper than [`DEFAULT_MAX_DEPTH`] levels fail with [`error::DecodeError::DepthLimitExceeded`], even in an otherwise valid document with recursive containers such as SimpleTag or ChapterAtom.  The bound is checked against the absolute level, including the starting level given to [`build_elements`].  [`DecoderConfig::with_max_depth`] raises it.
//!
//! SeekHead and Cues are never used to skip ahead - every decode is a full scan of the container elements.
//!
//! [EBML]: http://ebml.sourceforge.net/
//! [webm]: https://www.webmproject.org/
//! [mkv]: http://www.matroska.org/technical/specs/index.html
//! [rfc8794]: https://datatracker.ietf.org/doc/rfc8794/
//!

mod config;
mod element;
mod errors;
mod range;
mod reader;
mod source;
mod tree_builder;
pub mod tools;
pub mod view;

pub use self::config::{ContainerSet, DecoderConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_READ_LEN};
pub use self::element::{DepthFirst, Element, Elements};
pub use self::range::ByteRange;
pub use self::reader::EbmlReader;
pub use self::source::{ByteSource, FileSource};
pub use self::tree_builder::{build_elements, decode, decode_with_config, read_element};

pub mod error {
    pub use super::errors::decode::DecodeError;
    pub use super::errors::tool::ToolError;
}

pub mod specs {
    //!
    //! Re-exports of the element metadata types used by the [`view`](crate::view) module.
    //!
    pub use ebml_tree_specification::{ids, ElementMetadata};
    pub use ebml_tree_specification::matroska::MatroskaMetadata;
    pub use ebml_tree_specification::empty_spec::EmptySpec;
}
