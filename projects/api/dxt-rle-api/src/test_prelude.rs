//! Common test imports and DDS builders.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use dxt_rle_codec::mip::mask_mip_dimensions;
pub use dxt_rle_dds::{write_dds_header, DdsFormat};

/// A DXT5 DDS file with the given payload.
pub fn dxt5_dds(width: u16, height: u16, mips: u32, payload: &[u8]) -> Vec<u8> {
    let mut dds = write_dds_header(DdsFormat::Dxt5, width, height, mips).to_vec();
    dds.extend_from_slice(payload);
    dds
}

/// A 32-bit BGRA mask DDS whose texel `i` of level `level` is the gray
/// `fill(level, i)`.
pub fn bgra_mask_dds(
    width: u16,
    height: u16,
    mips: u32,
    fill: impl Fn(usize, usize) -> u8,
) -> Vec<u8> {
    let mut dds = write_dds_header(DdsFormat::Bgra8888, width, height, mips).to_vec();
    for level in 0..mips as usize {
        let (w, h) = mask_mip_dimensions(width as usize, height as usize, level);
        for i in 0..w * h {
            let g = fill(level, i);
            dds.extend_from_slice(&[g, g, g, 0xFF]);
        }
    }
    dds
}

/// 8x8 DXT5 chain with 3 mips: 4 partially transparent blocks, then one
/// opaque block, then one transparent block.
///
/// The uniform blocks already carry canonical alpha, so only the colour of
/// the transparent block (bytes 88..96 of the payload) changes on a round trip.
pub fn mixed_chain_8x8() -> Vec<u8> {
    let mut chain = Vec::with_capacity(96);
    for seed in 1..=4u8 {
        chain.extend_from_slice(&[0x80, 0x10, seed, seed ^ 0x55, 0xA5, 0x3C, seed, 0x11]);
        chain.extend_from_slice(&[seed, 0x22, 0x33, seed ^ 0xF0, 0x44, 0x55, 0x66, seed]);
    }
    chain.extend_from_slice(&[0x00, 0x05, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    chain.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 1, 2, 3, 4]);
    chain.extend_from_slice(&[0x00, 0x05, 0, 0, 0, 0, 0, 0]);
    chain.extend_from_slice(&[9; 8]);
    chain
}
