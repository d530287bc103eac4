use super::constants::*;

/// Determines if the given data likely represents a DDS texture.
/// This is done by checking the 'MAGIC' header, 'DDS ' at offset 0 and minimum size.
/// For full header validation, use [`parse_dds`].
///
/// [`parse_dds`]: crate::dds::parse_dds::parse_dds
#[inline(always)]
pub fn likely_dds(data: &[u8]) -> bool {
    data.len() >= DDS_HEADER_SIZE
        && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == DDS_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use core::iter::repeat_n;

    #[test]
    fn likely_dds_matches_valid_header_and_sufficient_length() {
        let valid_data = [0x44, 0x44, 0x53, 0x20]
            .into_iter()
            .chain(repeat_n(0, 124))
            .collect::<Vec<u8>>();
        assert!(likely_dds(&valid_data));
    }

    #[test]
    fn likely_dds_rejects_valid_header_but_insufficient_length() {
        let short_valid_header = [0x44, 0x44, 0x53, 0x20]
            .into_iter()
            .chain(repeat_n(0, 123))
            .collect::<Vec<u8>>();
        assert!(!likely_dds(&short_valid_header));
    }

    #[rstest]
    #[case::zeroed(vec![0; 128])]
    #[case::container(b"DXT5RLE2".iter().copied().chain(repeat_n(0, 120)).collect())]
    #[case::empty(Vec::new())]
    fn likely_dds_rejects_other_data(#[case] data: Vec<u8>) {
        assert!(!likely_dds(&data));
    }
}
