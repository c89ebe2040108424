
pub mod corrupt_data_tests {
    use std::io;

    use ebml_tree::error::DecodeError;
    use ebml_tree::{decode, decode_with_config, read_element, ByteSource, ContainerSet, DecoderConfig};

    use super::test_data::*;

    fn decode_default(data: &[u8]) -> Result<ebml_tree::Elements, DecodeError> {
        decode(data, data.len() as u64, &ContainerSet::matroska_default())
    }

    struct FailingSource;

    impl ByteSource for FailingSource {
        fn read_at(&self, _offset: u64, _buf: &mut [u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "device unavailable"))
        }
    }

    #[test]
    pub fn error_on_last_element_past_end() {
        let mut data = ebml_header();
        // declares 2 bytes of data, only 1 present
        data.extend_from_slice(&[0xbf, 0x82, 0xaa]);

        let result = decode_default(&data);
        assert!(matches!(result, Err(DecodeError::TruncatedOrMisaligned { offset: 16, id: UNKNOWN, end: 20, bound: 19 })), "{:?}", result);
    }

    #[test]
    pub fn error_on_oversized_child() {
        let mut data = ebml_header();
        // grow DocType without resizing the EBML header
        data[7] = 0x89;
        data.push(b'!');

        let result = decode_default(&data);
        assert!(matches!(result, Err(DecodeError::TruncatedOrMisaligned { offset: 5, id: DOC_TYPE, end: 17, bound: 16 })), "{:?}", result);
    }

    #[test]
    pub fn error_on_undersized_parent_deep_in_tree() {
        let mut data = document();
        let segment_size_position = ebml_header().len() + 4;
        data[segment_size_position] -= 1;

        // the segment now ends one byte early, so its last child no longer fits
        let result = decode_default(&data);
        assert!(matches!(result, Err(DecodeError::TruncatedOrMisaligned { id: CLUSTER, .. })), "{:?}", result);
    }

    #[test]
    pub fn error_on_zero_id_lead_byte() {
        let data = [0x00u8, 0x81, 0x00];
        let result = decode_default(&data);
        assert!(matches!(result, Err(DecodeError::InvalidVarint { offset: 0 })), "{:?}", result);
    }

    #[test]
    pub fn error_on_zero_size_lead_byte() {
        let data = [ebml_header(), vec![0xbf, 0x00, 0x01]].concat();
        let result = decode_default(&data);
        assert!(matches!(result, Err(DecodeError::InvalidVarint { offset: 17 })), "{:?}", result);
    }

    #[test]
    pub fn error_on_id_longer_than_four_bytes() {
        let data = [0x08u8, 0x00, 0x00, 0x00, 0x01, 0x80];
        let result = decode_default(&data);
        assert!(matches!(result, Err(DecodeError::InvalidVarint { offset: 0 })), "{:?}", result);
    }

    #[test]
    pub fn error_on_truncated_id() {
        let data = [0x1au8, 0x45];
        let result = decode_default(&data);
        assert!(matches!(result, Err(DecodeError::UnexpectedEndOfData { offset: 0, length: 4 })), "{:?}", result);
    }

    #[test]
    pub fn error_on_missing_size() {
        let data = [0xbfu8];
        let result = read_element(&data[..], 0);
        assert!(matches!(result, Err(DecodeError::UnexpectedEndOfData { offset: 1, length: 1 })), "{:?}", result);
    }

    #[test]
    pub fn error_on_length_past_source() {
        let data = ebml_header();
        let result = decode(&data, data.len() as u64 + 1, &ContainerSet::matroska_default());
        assert!(matches!(result, Err(DecodeError::UnexpectedEndOfData { offset: 16, length: 1 })), "{:?}", result);
    }

    #[test]
    pub fn error_on_excessive_nesting() {
        const NESTED: u32 = 0x81;
        let data = master(NESTED, &[master(NESTED, &[master(NESTED, &[element(NESTED, &[])])])]);
        let containers = ContainerSet::from_ids(&[NESTED]);

        let config = DecoderConfig::new(containers.clone()).with_max_depth(2);
        let result = decode_with_config(&data, data.len() as u64, &config);
        assert!(matches!(result, Err(DecodeError::DepthLimitExceeded { offset: 4, depth: 2 })), "{:?}", result);

        let elements = decode(&data, data.len() as u64, &containers).unwrap();
        assert_eq!(4, elements.depth_first().count());
        assert_eq!(Some(3), elements.depth_first().map(|e| e.level()).max());
    }

    #[test]
    pub fn unknown_size_is_not_special_cased() {
        // 0xff is the one byte "unknown size" marker
        let data = [0x18u8, 0x53, 0x80, 0x67, 0xff, 0xbf, 0x80];
        let result = decode_default(&data);
        assert!(matches!(result, Err(DecodeError::TruncatedOrMisaligned { offset: 0, end: 132, .. })), "{:?}", result);
    }

    #[test]
    pub fn errors_report_offsets() {
        let mut data = ebml_header();
        data.extend_from_slice(&[0xbf, 0x82, 0xaa]);
        let err = decode_default(&data).unwrap_err();
        assert_eq!(16, err.offset());
        assert!(err.to_string().contains("offset 16"));
    }

    #[test]
    pub fn error_on_source_failure() {
        let result = decode(&FailingSource, 10, &ContainerSet::matroska_default());
        assert!(matches!(result, Err(DecodeError::Io { offset: 9, .. })), "{:?}", result);

        let err = result.unwrap_err();
        assert_eq!(9, err.offset());
        let source = std::error::Error::source(&err).expect("Io error should carry its cause");
        assert_eq!("device unavailable", source.to_string());
    }

    #[test]
    pub fn error_on_source_failure_mid_element() {
        let result = read_element(&FailingSource, 42);
        assert!(matches!(result, Err(DecodeError::Io { offset: 42, .. })), "{:?}", result);
    }
}
