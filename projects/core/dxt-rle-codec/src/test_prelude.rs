//! Common test imports and block builders.
//!
//! Saves the repeated imports and hand-assembled DXT5 blocks that the
//! per-module tests would otherwise spell out each time.

// External crates commonly used in tests
pub use rstest::rstest;

// Alloc types commonly used in tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

pub use crate::layout::{OPAQUE_ALPHA, TRANSPARENT_ALPHA, TRANSPARENT_BLACK, TRANSPARENT_WHITE};
pub use crate::{ContainerVariant, PixelFormat, TextureDescriptor};

/// Joins an alpha sub-block and a colour sub-block into a DXT5 block.
pub fn dxt5_block(alpha: [u8; 8], colour: [u8; 8]) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..8].copy_from_slice(&alpha);
    block[8..].copy_from_slice(&colour);
    block
}

/// A block whose alpha is neither all zero nor all 0xFF.
///
/// Endpoints (0x80, 0x10) keep every palette entry strictly between the
/// extremes, so any index bits classify as Mixed.
pub fn mixed_block(seed: u8) -> [u8; 16] {
    let s = seed;
    dxt5_block(
        [0x80, 0x10, s, s ^ 0x55, s.wrapping_add(1), 0xA5, s.rotate_left(3), 0x3C],
        [s, 0x11, s ^ 0xF0, 0x22, 0x33, s.wrapping_mul(7), 0x44, 0x55],
    )
}

/// A fully opaque block with the given colour sub-block.
pub fn opaque_block(colour: [u8; 8]) -> [u8; 16] {
    dxt5_block([0xFF, 0xFF, 0, 0, 0, 0, 0, 0], colour)
}

/// A fully transparent block with the given colour sub-block.
pub fn transparent_block(colour: [u8; 8]) -> [u8; 16] {
    dxt5_block([0x00, 0x00, 0, 0, 0, 0, 0, 0], colour)
}

/// Concatenates blocks into a plain mip chain.
pub fn chain(blocks: &[[u8; 16]]) -> Vec<u8> {
    blocks.iter().flatten().copied().collect()
}

/// 8x8 DXT5 with 3 mips: 4 Mixed blocks, 1 opaque block, 1 transparent block.
pub fn three_mip_dxt5() -> (TextureDescriptor, Vec<u8>) {
    let descriptor = TextureDescriptor::new(PixelFormat::Dxt5, 8, 8, 3);
    let plain = chain(&[
        mixed_block(1),
        mixed_block(2),
        mixed_block(3),
        mixed_block(4),
        opaque_block([0xDE, 0xAD, 0xBE, 0xEF, 1, 2, 3, 4]),
        transparent_block([9; 8]),
    ]);
    (descriptor, plain)
}
