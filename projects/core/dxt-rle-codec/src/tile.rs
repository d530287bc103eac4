//! Conversion between scanline-major 8-bit planes and 4x4 tiles.
//!
//! ```text
//! plane (6x5):          tiles:
//! a a a a b b           [a a a a | a a a a | a a a a | a a a a]  tile (0,0)
//! a a a a b b           [b b 0 0 | b b 0 0 | b b 0 0 | b b 0 0]  tile (1,0)
//! ...                   ...
//! ```
//!
//! Tiles are stored row-major, each as four 4-byte rows. Texels outside the
//! plane are padded with zero when tiling and dropped when untiling.

use crate::mip::{block_grid, BLOCK_DIMENSION, BLOCK_SIZE};
use alloc::vec::Vec;

/// Appends the 4x4 tiles of `plane` to `out`.
///
/// `plane` holds `width * height` texels in scanline order; a shorter plane
/// is treated as zero padded.
pub fn tile_plane(plane: &[u8], width: usize, height: usize, out: &mut Vec<u8>) {
    let (columns, rows) = block_grid(width, height);
    out.reserve(columns * rows * BLOCK_SIZE);

    for row in 0..rows {
        for column in 0..columns {
            let mut tile = [0u8; BLOCK_SIZE];
            for y in 0..BLOCK_DIMENSION {
                let py = row * BLOCK_DIMENSION + y;
                if py >= height {
                    break;
                }
                let px = column * BLOCK_DIMENSION;
                let take = BLOCK_DIMENSION.min(width.saturating_sub(px));
                let start = py * width + px;
                if let Some(src) = plane.get(start..start + take) {
                    tile[y * BLOCK_DIMENSION..y * BLOCK_DIMENSION + take].copy_from_slice(src);
                }
            }
            out.extend_from_slice(&tile);
        }
    }
}

/// Appends the `width * height` texels described by `tiles` to `out` in
/// scanline order.
///
/// Missing tiles read as zero.
pub fn untile_plane(tiles: &[u8], width: usize, height: usize, out: &mut Vec<u8>) {
    let (columns, _) = block_grid(width, height);
    out.reserve(width * height);

    for py in 0..height {
        let row = py / BLOCK_DIMENSION;
        let y = py % BLOCK_DIMENSION;
        for px in 0..width {
            let tile = row * columns + px / BLOCK_DIMENSION;
            let offset = tile * BLOCK_SIZE + y * BLOCK_DIMENSION + px % BLOCK_DIMENSION;
            out.push(tiles.get(offset).copied().unwrap_or(0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn ramp(width: usize, height: usize) -> Vec<u8> {
        (0..width * height).map(|x| (x % 251) as u8 + 1).collect()
    }

    #[test]
    fn single_tile_keeps_scanline_order() {
        let plane = ramp(4, 4);
        let mut tiles = Vec::new();
        tile_plane(&plane, 4, 4, &mut tiles);
        assert_eq!(tiles, plane);
    }

    #[test]
    fn tiles_are_row_major() {
        let plane = ramp(8, 4);
        let mut tiles = Vec::new();
        tile_plane(&plane, 8, 4, &mut tiles);

        assert_eq!(&tiles[0..4], &plane[0..4]);
        assert_eq!(&tiles[4..8], &plane[8..12]);
        assert_eq!(&tiles[16..20], &plane[4..8]);
        assert_eq!(&tiles[28..32], &plane[28..32]);
    }

    #[test]
    fn partial_tiles_are_zero_padded() {
        let plane = [0xAAu8; 2 * 3];
        let mut tiles = Vec::new();
        tile_plane(&plane, 2, 3, &mut tiles);

        assert_eq!(tiles.len(), BLOCK_SIZE);
        assert_eq!(
            tiles,
            vec![
                0xAA, 0xAA, 0, 0, //
                0xAA, 0xAA, 0, 0, //
                0xAA, 0xAA, 0, 0, //
                0, 0, 0, 0,
            ]
        );
    }

    #[rstest]
    #[case(4, 4)]
    #[case(6, 5)]
    #[case(1, 1)]
    #[case(13, 8)]
    fn untile_crops_back_to_plane(#[case] width: usize, #[case] height: usize) {
        let plane = ramp(width, height);
        let mut tiles = Vec::new();
        tile_plane(&plane, width, height, &mut tiles);

        let mut restored = Vec::new();
        untile_plane(&tiles, width, height, &mut restored);
        assert_eq!(restored, plane);
    }
}
