use super::ElementMetadata;

///
/// An empty metadata feed for use with examples or testing.
///
/// Every id is unnamed and no element is rendered as text.
///
/// # NOT SUITABLE FOR PRODUCTION
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptySpec;

impl ElementMetadata for EmptySpec {
    fn name(&self, _id: u32) -> Option<&'static str> {
        None
    }

    fn is_text(&self, _id: u32) -> bool {
        false
    }
}
