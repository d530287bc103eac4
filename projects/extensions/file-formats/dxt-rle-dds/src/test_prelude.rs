//! Common test imports and utilities for DDS tests
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::dds::write_dds::write_dds_header;
pub use crate::dds::DdsFormat;

/// Reads a little endian `u32` at `offset`.
pub fn get(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Writes a little endian `u32` at `offset`.
pub fn put(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// A valid 4x4 single-mip DXT5 header, modified by `edit`.
pub fn header_with(edit: impl FnOnce(&mut Vec<u8>)) -> Vec<u8> {
    let mut header = write_dds_header(DdsFormat::Dxt5, 4, 4, 1).to_vec();
    edit(&mut header);
    header
}
