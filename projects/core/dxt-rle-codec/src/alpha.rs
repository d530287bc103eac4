//! BC3/BC4 interpolated alpha sub-block decoding.
//!
//! ```text
//! byte 0      byte 1      bytes 2..8
//! [ alpha0 ] [ alpha1 ] [ 16 x 3-bit palette indices, little endian, texel 0 in the low bits ]
//! ```
//!
//! If `alpha0 > alpha1` the palette holds 6 interpolated values, otherwise it
//! holds 4 interpolated values followed by 0 and 255.

/// A decoded 8-byte alpha sub-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBlock {
    palette: [u8; 8],
    indices: u64,
}

/// Builds the 8-entry palette for a pair of alpha endpoints.
#[inline]
#[allow(clippy::identity_op)]
pub const fn alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
    let a0 = alpha0 as u16;
    let a1 = alpha1 as u16;
    if alpha0 > alpha1 {
        [
            alpha0,
            alpha1,
            ((6 * a0 + 1 * a1 + 3) / 7) as u8,
            ((5 * a0 + 2 * a1 + 3) / 7) as u8,
            ((4 * a0 + 3 * a1 + 3) / 7) as u8,
            ((3 * a0 + 4 * a1 + 3) / 7) as u8,
            ((2 * a0 + 5 * a1 + 3) / 7) as u8,
            ((1 * a0 + 6 * a1 + 3) / 7) as u8,
        ]
    } else {
        [
            alpha0,
            alpha1,
            ((4 * a0 + 1 * a1 + 2) / 5) as u8,
            ((3 * a0 + 2 * a1 + 2) / 5) as u8,
            ((2 * a0 + 3 * a1 + 2) / 5) as u8,
            ((1 * a0 + 4 * a1 + 2) / 5) as u8,
            0x00,
            0xFF,
        ]
    }
}

impl AlphaBlock {
    /// Decodes the palette and index bits of an alpha sub-block.
    #[inline]
    pub fn from_bytes(bytes: &[u8; 8]) -> Self {
        // Bytes 7 down to 2 form a 48-bit little endian integer.
        let indices = bytes[2..]
            .iter()
            .rev()
            .fold(0u64, |bits, &byte| (bits << 8) | byte as u64);

        Self {
            palette: alpha_palette(bytes[0], bytes[1]),
            indices,
        }
    }

    /// Decodes the alpha sub-block at the start of a 16-byte DXT5 block.
    #[inline]
    pub fn from_dxt5_block(block: &[u8; 16]) -> Self {
        let mut alpha = [0u8; 8];
        alpha.copy_from_slice(&block[..8]);
        Self::from_bytes(&alpha)
    }

    /// The 8 palette entries.
    #[inline]
    pub fn palette(&self) -> &[u8; 8] {
        &self.palette
    }

    /// The palette index of a texel, `0..16` in row-major order.
    #[inline]
    pub fn index(&self, texel: usize) -> u8 {
        ((self.indices >> (texel * 3)) & 0b111) as u8
    }

    /// The alpha value of a texel, `0..16` in row-major order.
    #[inline]
    pub fn value(&self, texel: usize) -> u8 {
        self.palette[self.index(texel) as usize]
    }

    /// All 16 alpha values in row-major order.
    pub fn values(&self) -> [u8; 16] {
        let mut values = [0u8; 16];
        for (texel, value) in values.iter_mut().enumerate() {
            *value = self.value(texel);
        }
        values
    }

    /// Returns true if `predicate` holds for every texel.
    #[inline]
    pub fn all(&self, predicate: impl Fn(u8) -> bool) -> bool {
        (0..16).all(|texel| predicate(self.value(texel)))
    }

    /// Returns true if `predicate` holds for at least one texel.
    #[inline]
    pub fn any(&self, predicate: impl Fn(u8) -> bool) -> bool {
        (0..16).any(|texel| predicate(self.value(texel)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn seven_step_palette_is_monotonic() {
        let palette = alpha_palette(200, 100);
        assert_eq!(palette, [200, 100, 186, 171, 157, 143, 129, 114]);

        // Interpolated entries descend from alpha0 towards alpha1.
        let interpolated = [palette[0], palette[2], palette[3], palette[4], palette[5], palette[6], palette[7], palette[1]];
        assert!(interpolated.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn five_step_palette_has_fixed_extremes() {
        let palette = alpha_palette(100, 200);
        assert_eq!(palette[6], 0x00);
        assert_eq!(palette[7], 0xFF);
        assert_eq!(palette, [100, 200, 120, 140, 160, 180, 0, 255]);
    }

    #[test]
    fn equal_endpoints_use_five_step_palette() {
        let palette = alpha_palette(77, 77);
        assert_eq!(palette, [77, 77, 77, 77, 77, 77, 0, 255]);
    }

    #[test]
    fn indices_are_read_least_significant_first() {
        // Texel n selects palette entry n % 8.
        let mut bits = 0u64;
        for texel in 0..16u64 {
            bits |= (texel % 8) << (texel * 3);
        }
        let mut bytes = [200u8, 100, 0, 0, 0, 0, 0, 0];
        bytes[2..].copy_from_slice(&bits.to_le_bytes()[..6]);

        let block = AlphaBlock::from_bytes(&bytes);
        for texel in 0..16 {
            assert_eq!(block.index(texel), (texel % 8) as u8);
        }
        let palette = alpha_palette(200, 100);
        assert_eq!(block.value(9), palette[1]);
        assert_eq!(block.value(15), palette[7]);
    }

    #[rstest]
    #[case([0x00, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], true, false)]
    #[case([0x00, 0x05, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], false, true)]
    #[case([0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], false, true)]
    #[case([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], true, false)]
    #[case([0x80, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], false, false)]
    fn predicates(#[case] bytes: [u8; 8], #[case] all_zero: bool, #[case] all_opaque: bool) {
        let block = AlphaBlock::from_bytes(&bytes);
        assert_eq!(!block.any(|a| a != 0), all_zero);
        assert_eq!(block.all(|a| a == 0xFF), all_opaque);
    }

    #[test]
    fn values_match_per_texel_lookup() {
        let block = AlphaBlock::from_bytes(&[41, 1, 253, 178, 0, 0, 0, 0]);
        let values = block.values();
        for (texel, value) in values.iter().enumerate() {
            assert_eq!(*value, block.value(texel));
        }
    }
}
