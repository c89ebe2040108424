use crate::errors::decode::DecodeError;

///
/// A half-open range of absolute byte offsets, `[start, end)`.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByteRange {
    pub(crate) start: u64,
    pub(crate) end: u64,
}

impl ByteRange {
    ///
    /// Returns a new range covering `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRange`] if `end < start`.
    ///
    pub fn new(start: u64, end: u64) -> Result<Self, DecodeError> {
        if end < start {
            return Err(DecodeError::InvalidRange { start, end });
        }
        Ok(ByteRange { start, end })
    }

    ///
    /// Returns the range `[0, length)`.
    ///
    pub fn with_length(length: u64) -> Self {
        ByteRange { start: 0, end: length }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn size(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: u64) -> bool {
        self.start <= offset && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_end_minus_start() {
        let range = ByteRange::new(5, 12).unwrap();
        assert_eq!(7, range.size());
        assert!(range.contains(5));
        assert!(!range.contains(12));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(ByteRange::new(10, 9), Err(DecodeError::InvalidRange { start: 10, end: 9 })));
    }

    #[test]
    fn empty_range() {
        let range = ByteRange::new(4, 4).unwrap();
        assert!(range.is_empty());
        assert_eq!(0, range.size());
    }
}
