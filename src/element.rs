//!
//! Contains the types that make up a decoded element tree.
//!

use std::ops::Deref;
use std::slice;

use crate::range::ByteRange;

///
/// A single decoded EBML element.
///
/// ```text
/// [ID...Size...Data)
/// |            |
/// at           at + header_length
/// [--      total_size      -->)
/// ```
///
/// Elements are located, not interpreted: the data of an element is never read while decoding.  Use [`crate::EbmlReader::read_data`] to fetch it.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub(crate) id: u32,
    pub(crate) at: u64,
    pub(crate) header_length: u64,
    pub(crate) total_size: u64,
    pub(crate) level: u32,
    pub(crate) children: Vec<Element>,
}

impl Element {
    /// The unmasked element id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Absolute offset of the first byte of the id.
    pub fn at(&self) -> u64 {
        self.at
    }

    /// Number of bytes taken by the id and size fields.
    pub fn header_length(&self) -> u64 {
        self.header_length
    }

    /// Length of the element including its header.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Nesting depth, `0` for root elements.
    pub fn level(&self) -> u32 {
        self.level
    }

    ///
    /// Child elements in document order.
    ///
    /// Always empty for ids that were not decoded as containers.
    ///
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn end(&self) -> u64 {
        self.at + self.total_size
    }

    ///
    /// Returns the range of the element's data, `[at + header_length, at + total_size)`.
    ///
    pub fn data_range(&self) -> ByteRange {
        ByteRange { start: self.at + self.header_length, end: self.end() }
    }

    pub fn data_size(&self) -> u64 {
        self.total_size - self.header_length
    }

    ///
    /// Returns a depth-first, pre-order iterator over this element and all of its descendants.
    ///
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(slice::from_ref(self))
    }
}

///
/// The ordered root elements produced by a decode.
///
/// Dereferences to a slice of the root elements.  Use [`Elements::depth_first`] to visit the whole tree.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Elements(Vec<Element>);

impl Elements {
    pub fn new(elements: Vec<Element>) -> Self {
        Elements(elements)
    }

    pub fn into_vec(self) -> Vec<Element> {
        self.0
    }

    ///
    /// Returns a depth-first, pre-order iterator over every element in the tree.
    ///
    /// Parents are visited before their children and siblings in document order.  The iterator is lazy, so consumption may stop at any point.
    ///
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(&self.0)
    }

    ///
    /// Calls `visit` on each element in depth-first, pre-order.
    ///
    /// The first error returned by `visit` stops the walk and is returned unchanged.
    ///
    /// ## Example
    ///
    /// ```
    /// # use ebml_tree::Elements;
    /// let elements = Elements::default();
    /// let mut seen = 0;
    /// let result: Result<(), &str> = elements.walk(|_| { seen += 1; Ok(()) });
    /// assert!(result.is_ok());
    /// assert_eq!(0, seen);
    /// ```
    ///
    pub fn walk<E, F>(&self, visit: F) -> Result<(), E>
        where F: FnMut(&Element) -> Result<(), E>
    {
        self.depth_first().try_for_each(visit)
    }

    ///
    /// Returns the first element in depth-first order with the given id.
    ///
    pub fn find(&self, id: u32) -> Option<&Element> {
        self.depth_first().find(|e| e.id == id)
    }
}

impl Deref for Elements {
    type Target = [Element];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Element>> for Elements {
    fn from(elements: Vec<Element>) -> Self {
        Elements(elements)
    }
}

impl IntoIterator for Elements {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

///
/// Depth-first, pre-order iterator over borrowed elements.
///
/// Created by [`Element::depth_first`] and [`Elements::depth_first`].
///
pub struct DepthFirst<'a> {
    stack: Vec<slice::Iter<'a, Element>>,
}

impl<'a> DepthFirst<'a> {
    fn new(roots: &'a [Element]) -> Self {
        DepthFirst { stack: vec![roots.iter()] }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(element) => {
                    if !element.children.is_empty() {
                        self.stack.push(element.children.iter());
                    }
                    return Some(element);
                },
                None => {
                    self.stack.pop();
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: u32, at: u64, level: u32) -> Element {
        Element { id, at, header_length: 2, total_size: 4, level, children: vec![] }
    }

    fn tree() -> Elements {
        let inner = Element {
            id: 0xAE,
            at: 5,
            header_length: 2,
            total_size: 6,
            level: 1,
            children: vec![leaf(0xD7, 7, 2)],
        };
        let root = Element {
            id: 0x1654AE6B,
            at: 0,
            header_length: 5,
            total_size: 15,
            level: 0,
            children: vec![inner, leaf(0xEC, 11, 1)],
        };
        Elements::new(vec![root, leaf(0xBF, 15, 0)])
    }

    #[test]
    fn data_range_follows_header() {
        let element = leaf(0x83, 10, 0);
        let range = element.data_range();
        assert_eq!(12, range.start());
        assert_eq!(14, range.end());
        assert_eq!(2, element.data_size());
    }

    #[test]
    fn depth_first_is_pre_order() {
        let ids: Vec<u32> = tree().depth_first().map(|e| e.id()).collect();
        assert_eq!(vec![0x1654AE6B, 0xAE, 0xD7, 0xEC, 0xBF], ids);
    }

    #[test]
    fn depth_first_from_single_element() {
        let elements = tree();
        let ids: Vec<u32> = elements[0].children()[0].depth_first().map(|e| e.id()).collect();
        assert_eq!(vec![0xAE, 0xD7], ids);
    }

    #[test]
    fn walk_stops_on_first_error() {
        let mut visited = vec![];
        let result = tree().walk(|e| {
            visited.push(e.id());
            if e.id() == 0xD7 { Err(e.at()) } else { Ok(()) }
        });
        assert_eq!(Err(7), result);
        assert_eq!(vec![0x1654AE6B, 0xAE, 0xD7], visited);
    }

    #[test]
    fn find_returns_first_match() {
        let elements = tree();
        assert_eq!(Some(11), elements.find(0xEC).map(|e| e.at()));
        assert!(elements.find(0x4282).is_none());
    }
}
