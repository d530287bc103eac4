//! Single-channel mask planes.
//!
//! A mask is an 8-bit grayscale image, one plane per mip. Explicit-mask
//! containers store it in 16 byte tiles alongside the DXT5 fields; Skip and
//! Full blocks stand for all-zero and all-0xFF tiles.

use crate::error::{CodecError, CodecResult};
use crate::mip::mask_mip_dimensions;
use crate::tile::tile_plane;
use alloc::vec::Vec;

/// Filter used when building lower mask mips from a single base level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DownsampleFilter {
    /// Rounded average of each 2x2 neighbourhood.
    #[default]
    Box,
    /// Top-left texel of each 2x2 neighbourhood.
    Nearest,
}

/// One mip level of a grayscale mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPlane {
    width: usize,
    height: usize,
    texels: Vec<u8>,
}

/// Converts one pixel to gray by averaging its first three channels.
///
/// The channel order does not matter, so this serves RGBA and BGRA alike.
#[inline(always)]
pub fn gray(c0: u8, c1: u8, c2: u8) -> u8 {
    ((c0 as u16 + c1 as u16 + c2 as u16) / 3) as u8
}

impl MaskPlane {
    /// Wraps `width * height` grayscale texels.
    ///
    /// # Errors
    ///
    /// [`CodecError::Truncated`] if `texels` is shorter than `width * height`.
    /// Extra texels are dropped.
    pub fn new(width: usize, height: usize, mut texels: Vec<u8>) -> CodecResult<Self> {
        let required = width * height;
        if texels.len() < required {
            return Err(CodecError::Truncated {
                what: "mask plane",
                required,
                actual: texels.len(),
            });
        }
        texels.truncate(required);
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Builds a plane from 4 byte per pixel data (RGBA or BGRA).
    ///
    /// # Errors
    ///
    /// [`CodecError::Truncated`] if `pixels` is shorter than `width * height * 4`.
    pub fn from_pixels(width: usize, height: usize, pixels: &[u8]) -> CodecResult<Self> {
        let required = width * height * 4;
        let Some(pixels) = pixels.get(..required) else {
            return Err(CodecError::Truncated {
                what: "mask pixels",
                required,
                actual: pixels.len(),
            });
        };

        let texels = pixels
            .chunks_exact(4)
            .map(|px| gray(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Width in texels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in texels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Texels in scanline order.
    #[inline]
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    /// Consumes the plane, returning its texels.
    pub fn into_texels(self) -> Vec<u8> {
        self.texels
    }

    /// Halves each dimension (never below 1) using `filter`.
    pub fn downsample(&self, filter: DownsampleFilter) -> MaskPlane {
        let width = (self.width / 2).max(1);
        let height = (self.height / 2).max(1);
        let last_x = self.width.saturating_sub(1);
        let last_y = self.height.saturating_sub(1);
        let at = |x: usize, y: usize| {
            let index = y.min(last_y) * self.width + x.min(last_x);
            self.texels.get(index).copied().unwrap_or(0)
        };

        let mut texels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let (sx, sy) = (x * 2, y * 2);
                let value = match filter {
                    DownsampleFilter::Nearest => at(sx, sy),
                    DownsampleFilter::Box => {
                        let sum = at(sx, sy) as u16
                            + at(sx + 1, sy) as u16
                            + at(sx, sy + 1) as u16
                            + at(sx + 1, sy + 1) as u16;
                        ((sum + 2) / 4) as u8
                    }
                };
                texels.push(value);
            }
        }

        MaskPlane {
            width,
            height,
            texels,
        }
    }

    /// Appends the plane's 4x4 tiles to `out`, zero padding partial tiles.
    pub fn to_blocks(&self, out: &mut Vec<u8>) {
        tile_plane(&self.texels, self.width, self.height, out);
    }

    /// Expands each texel into an opaque gray pixel `(g, g, g, 255)`.
    ///
    /// The result is valid as both RGBA and BGRA.
    pub fn to_opaque_pixels(&self) -> Vec<u8> {
        self.texels
            .iter()
            .flat_map(|&g| [g, g, g, 0xFF])
            .collect()
    }
}

/// Builds `mip_count` mask levels from `base`, each `max(1, previous / 2)`
/// in size.
///
/// Level dimensions match [`mask_mip_dimensions`] of the base.
pub fn build_mask_chain(base: MaskPlane, mip_count: usize, filter: DownsampleFilter) -> Vec<MaskPlane> {
    let mut chain: Vec<MaskPlane> = Vec::with_capacity(mip_count);
    if mip_count == 0 {
        return chain;
    }

    let (width, height) = (base.width, base.height);
    chain.push(base);
    for level in 1..mip_count {
        let next = chain[level - 1].downsample(filter);
        debug_assert_eq!(
            (next.width, next.height),
            mask_mip_dimensions(width, height, level)
        );
        chain.push(next);
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0, 0, 0, 0)]
    #[case(255, 255, 255, 255)]
    #[case(255, 0, 0, 85)]
    #[case(10, 20, 31, 20)]
    fn gray_is_truncated_mean(#[case] c0: u8, #[case] c1: u8, #[case] c2: u8, #[case] expected: u8) {
        assert_eq!(gray(c0, c1, c2), expected);
    }

    #[test]
    fn from_pixels_ignores_fourth_channel() {
        let pixels = [30, 60, 90, 0, 30, 60, 90, 255];
        let plane = MaskPlane::from_pixels(2, 1, &pixels).unwrap();
        assert_eq!(plane.texels(), &[60, 60]);
    }

    #[test]
    fn from_pixels_rejects_short_input() {
        assert_eq!(
            MaskPlane::from_pixels(2, 2, &[0; 15]),
            Err(CodecError::Truncated {
                what: "mask pixels",
                required: 16,
                actual: 15
            })
        );
    }

    #[rstest]
    #[case(DownsampleFilter::Box, vec![3, 200])]
    #[case(DownsampleFilter::Nearest, vec![0, 255])]
    fn downsample_filters(#[case] filter: DownsampleFilter, #[case] expected: Vec<u8>) {
        #[rustfmt::skip]
        let plane = MaskPlane::new(4, 2, vec![
            0, 2, 255, 255,
            4, 5, 145, 145,
        ]).unwrap();

        let half = plane.downsample(filter);
        assert_eq!((half.width(), half.height()), (2, 1));
        assert_eq!(half.texels(), expected.as_slice());
    }

    #[test]
    fn downsample_odd_edge_repeats_last_texel() {
        let plane = MaskPlane::new(3, 1, vec![100, 100, 50]).unwrap();
        let half = plane.downsample(DownsampleFilter::Box);
        assert_eq!((half.width(), half.height()), (1, 1));
        assert_eq!(half.texels(), &[100]);

        let single = MaskPlane::new(1, 1, vec![77]).unwrap();
        assert_eq!(single.downsample(DownsampleFilter::Box), single);
    }

    #[test]
    fn chain_levels_follow_mask_mip_dimensions() {
        let base = MaskPlane::new(8, 4, vec![0xFF; 32]).unwrap();
        let chain = build_mask_chain(base, 5, DownsampleFilter::Box);

        let dims: Vec<(usize, usize)> = chain.iter().map(|p| (p.width(), p.height())).collect();
        assert_eq!(dims, vec![(8, 4), (4, 2), (2, 1), (1, 1), (1, 1)]);
        assert!(chain.iter().all(|p| p.texels().iter().all(|&t| t == 0xFF)));
    }

    #[test]
    fn opaque_pixels_replicate_gray() {
        let plane = MaskPlane::new(2, 1, vec![0x10, 0xF0]).unwrap();
        assert_eq!(
            plane.to_opaque_pixels(),
            vec![0x10, 0x10, 0x10, 0xFF, 0xF0, 0xF0, 0xF0, 0xFF]
        );
    }
}
