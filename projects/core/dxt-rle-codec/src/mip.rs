//! Mip chain geometry.
//!
//! Texture levels never shrink below one 4x4 block (`max(4, base >> k)`),
//! mask levels shrink down to a single texel (`max(1, base >> k)`). Both
//! round up to the same number of blocks at every level.

use crate::format::PixelFormat;

/// Size of one block (DXT5 block or 4x4 tile of 8-bit texels) in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Width and height of a block in texels.
pub const BLOCK_DIMENSION: usize = 4;

/// Maximum number of mips a container can describe.
pub const MAX_MIP_COUNT: u16 = 16;

/// Dimensions of texture mip `level`, clamped to one block.
#[inline]
pub fn texture_mip_dimensions(width: usize, height: usize, level: usize) -> (usize, usize) {
    (
        (width >> level).max(BLOCK_DIMENSION),
        (height >> level).max(BLOCK_DIMENSION),
    )
}

/// Dimensions of mask mip `level`, clamped to one texel.
#[inline]
pub fn mask_mip_dimensions(width: usize, height: usize, level: usize) -> (usize, usize) {
    ((width >> level).max(1), (height >> level).max(1))
}

/// Number of blocks (columns, rows) covering a `width` x `height` plane.
#[inline]
pub fn block_grid(width: usize, height: usize) -> (usize, usize) {
    (
        width.div_ceil(BLOCK_DIMENSION).max(1),
        height.div_ceil(BLOCK_DIMENSION).max(1),
    )
}

/// Number of blocks covering a `width` x `height` plane.
#[inline]
pub fn blocks_for(width: usize, height: usize) -> usize {
    let (columns, rows) = block_grid(width, height);
    columns * rows
}

/// Size in bytes of texture mip `level` in its plain (uncontainered) form.
pub fn plain_mip_size(format: PixelFormat, width: usize, height: usize, level: usize) -> usize {
    let (w, h) = texture_mip_dimensions(width, height, level);
    match format {
        PixelFormat::Dxt5 => blocks_for(w, h) * BLOCK_SIZE,
        PixelFormat::Luminance8 => w * h,
    }
}

/// Size in bytes of the first `mip_count` plain texture mips.
pub fn plain_chain_size(format: PixelFormat, width: usize, height: usize, mip_count: usize) -> usize {
    (0..mip_count)
        .map(|level| plain_mip_size(format, width, height, level))
        .sum()
}
