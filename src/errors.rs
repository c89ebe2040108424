pub mod tool {
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum ToolError {
        #[error("Vint lead byte has no length marker bit set.")]
        InvalidVarint,

        #[error("Vint must be between 1 and 8 bytes long, got {0}.")]
        InvalidArgument(usize),

        #[error("Value too large to be written as a vint: {0}")]
        WriteVintOverflow(u64),

        #[error("Not a valid element id: 0x{0:x}")]
        InvalidId(u32),
    }
}

pub mod decode {
    use std::io;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum DecodeError {
        #[error("Invalid vint at offset {offset}.")]
        InvalidVarint {
            offset: u64,
        },

        #[error("Element 0x{id:x} at offset {offset} ends at {end}, past its enclosing bound {bound}.")]
        TruncatedOrMisaligned {
            offset: u64,
            id: u32,
            end: u64,
            bound: u64,
        },

        #[error("Needed {length} bytes at offset {offset}, but the source ended.")]
        UnexpectedEndOfData {
            offset: u64,
            length: u64,
        },

        #[error("Error reading from source at offset {offset}.")]
        Io {
            offset: u64,
            #[source]
            source: io::Error,
        },

        #[error("Element at offset {offset} is nested deeper than the allowed {depth} levels.")]
        DepthLimitExceeded {
            offset: u64,
            depth: u32,
        },

        #[error("Invalid byte range [{start}, {end}).")]
        InvalidRange {
            start: u64,
            end: u64,
        },

        #[error("Element data at offset {offset} is {size} bytes, more than the allowed {max}.")]
        DataTooLarge {
            offset: u64,
            size: u64,
            max: u64,
        },
    }

    impl DecodeError {
        ///
        /// Returns the absolute offset in the source at which the error was detected.
        ///
        pub fn offset(&self) -> u64 {
            match self {
                DecodeError::InvalidVarint { offset } |
                DecodeError::TruncatedOrMisaligned { offset, .. } |
                DecodeError::UnexpectedEndOfData { offset, .. } |
                DecodeError::Io { offset, .. } |
                DecodeError::DepthLimitExceeded { offset, .. } |
                DecodeError::DataTooLarge { offset, .. } => *offset,
                DecodeError::InvalidRange { start, .. } => *start,
            }
        }

        pub(crate) fn from_read(offset: u64, length: u64, source: io::Error) -> Self {
            if source.kind() == io::ErrorKind::UnexpectedEof {
                DecodeError::UnexpectedEndOfData { offset, length }
            } else {
                DecodeError::Io { offset, source }
            }
        }
    }
}
