use std::collections::HashSet;

use ebml_tree_specification::ids;

/// Default maximum nesting depth before decoding gives up.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Default upper bound for a single [`crate::EbmlReader::read_data`] call (64 MiB).
pub const DEFAULT_MAX_READ_LEN: u64 = 64 * 1024 * 1024;

///
/// The set of element ids whose data is decoded as a sequence of child elements.
///
/// Any id not in the set is treated as an opaque leaf, whether or not it is known to any specification.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerSet {
    ids: HashSet<u32>,
}

impl ContainerSet {
    ///
    /// Returns a set that descends into nothing - every root element is a leaf.
    ///
    pub fn empty() -> Self {
        ContainerSet::default()
    }

    ///
    /// Returns the standard Matroska containers: EBML header, Segment, Info, Tracks, Tags, TrackEntry and Tag.
    ///
    /// Clusters, Cues, SeekHead and the other level 1 masters are not included, so their contents are skipped as opaque data.  Add them with [`ContainerSet::insert`] if they are needed.
    ///
    pub fn matroska_default() -> Self {
        ContainerSet::from_ids(&[
            ids::EBML,
            ids::SEGMENT,
            ids::INFO,
            ids::TRACKS,
            ids::TAGS,
            ids::TRACK_ENTRY,
            ids::TAG,
        ])
    }

    pub fn from_ids(ids: &[u32]) -> Self {
        ContainerSet { ids: ids.iter().copied().collect() }
    }

    pub fn insert(&mut self, id: u32) -> bool {
        self.ids.insert(id)
    }

    pub fn with(mut self, id: u32) -> Self {
        self.ids.insert(id);
        self
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<u32> for ContainerSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        ContainerSet { ids: iter.into_iter().collect() }
    }
}

///
/// Settings for a decode pass.
///
/// The configuration is immutable input to a decode - the decoder keeps no state between calls, so one configuration can be shared by any number of concurrent decodes.
///
/// ## Example
///
/// ```
/// use ebml_tree::{ContainerSet, DecoderConfig};
/// use ebml_tree::specs::ids;
///
/// let config = DecoderConfig::default()
///     .with_containers(ContainerSet::matroska_default().with(ids::CLUSTER))
///     .with_max_depth(8);
/// assert!(config.containers().contains(ids::CLUSTER));
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    containers: ContainerSet,
    max_depth: u32,
    max_read_len: u64,
}

impl DecoderConfig {
    pub fn new(containers: ContainerSet) -> Self {
        DecoderConfig {
            containers,
            max_depth: DEFAULT_MAX_DEPTH,
            max_read_len: DEFAULT_MAX_READ_LEN,
        }
    }

    pub fn with_containers(mut self, containers: ContainerSet) -> Self {
        self.containers = containers;
        self
    }

    ///
    /// Sets how many container levels may be nested below the roots.  Elements at a deeper level fail the decode with [`crate::error::DecodeError::DepthLimitExceeded`].
    ///
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    ///
    /// Sets the largest element data, in bytes, that [`crate::EbmlReader::read_data`] will load into memory.
    ///
    pub fn with_max_read_len(mut self, max_read_len: u64) -> Self {
        self.max_read_len = max_read_len;
        self
    }

    pub fn containers(&self) -> &ContainerSet {
        &self.containers
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn max_read_len(&self) -> u64 {
        self.max_read_len
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig::new(ContainerSet::matroska_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_containers() {
        let set = ContainerSet::matroska_default();
        assert_eq!(7, set.len());
        assert!(set.contains(ids::EBML));
        assert!(set.contains(ids::TRACK_ENTRY));
        assert!(!set.contains(ids::CLUSTER));
        assert!(!set.contains(ids::DOC_TYPE));
    }

    #[test]
    fn default_config() {
        let config = DecoderConfig::default();
        assert_eq!(ContainerSet::matroska_default(), *config.containers());
        assert_eq!(DEFAULT_MAX_DEPTH, config.max_depth());
        assert_eq!(DEFAULT_MAX_READ_LEN, config.max_read_len());
    }

    #[test]
    fn collect_into_set() {
        let set: ContainerSet = [0x81u32, 0x4103, 0x81].into_iter().collect();
        assert_eq!(2, set.len());
        assert!(set.contains(0x4103));
    }
}
