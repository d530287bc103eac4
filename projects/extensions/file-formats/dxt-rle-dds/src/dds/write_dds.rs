use super::{constants::*, DdsFormat};
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Builds a legacy DDS header for a plain texture or mask.
///
/// - DXT5 headers carry `DDSD_LINEARSIZE` with the size of mip 0.
/// - L8 and BGRA8888 headers carry `DDSD_PITCH` with the row size of mip 0.
/// - `DDSD_MIPMAPCOUNT` and the complex/mipmap caps are set when `mip_count > 1`.
pub fn write_dds_header(
    format: DdsFormat,
    width: u16,
    height: u16,
    mip_count: u32,
) -> [u8; DDS_HEADER_SIZE] {
    let mut header = [0u8; DDS_HEADER_SIZE];
    let (width, height) = (width as u32, height as u32);
    let has_mips = mip_count > 1;

    let mut flags = DDSD_REQUIRED;
    let pitch_or_linear_size = match format.bytes_per_pixel() {
        None => {
            flags |= DDSD_LINEARSIZE;
            width.div_ceil(4).max(1) * height.div_ceil(4).max(1) * 16
        }
        Some(bytes_per_pixel) => {
            flags |= DDSD_PITCH;
            width * bytes_per_pixel
        }
    };
    if has_mips {
        flags |= DDSD_MIPMAPCOUNT;
    }

    // (pixel flags, fourcc, bit count, [r, g, b, a] masks)
    let (pixel_flags, fourcc, bit_count, masks) = match format {
        DdsFormat::Dxt5 => (
            DDPF_FOURCC,
            FOURCC_DXT5,
            32,
            [
                BGRA8888_RED_MASK,
                BGRA8888_GREEN_MASK,
                BGRA8888_BLUE_MASK,
                BGRA8888_ALPHA_MASK,
            ],
        ),
        DdsFormat::Luminance8 => (DDPF_LUMINANCE, 0, 8, [L8_MASK, L8_MASK, L8_MASK, 0]),
        DdsFormat::Bgra8888 => (
            DDPF_RGB | DDPF_ALPHAPIXELS,
            0,
            32,
            [
                BGRA8888_RED_MASK,
                BGRA8888_GREEN_MASK,
                BGRA8888_BLUE_MASK,
                BGRA8888_ALPHA_MASK,
            ],
        ),
    };

    let caps = if has_mips {
        DDSCAPS_COMPLEX | DDSCAPS_MIPMAP | DDSCAPS_TEXTURE
    } else {
        DDSCAPS_TEXTURE
    };

    // SAFETY: The header is DDS_HEADER_SIZE (128) bytes; the last write ends at 0x70.
    let mut writer = unsafe { LittleEndianWriter::new(header.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDS_MAGIC, 0);
        writer.write_u32_at(DDS_DW_SIZE, DDS_SIZE_OFFSET as isize);
        writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);
        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);
        writer.write_u32_at(pitch_or_linear_size, DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize);
        writer.write_u32_at(1, DDS_DEPTH_OFFSET as isize);
        writer.write_u32_at(mip_count, DDS_MIPMAP_COUNT_OFFSET as isize);

        writer.write_u32_at(DDS_PIXELFORMAT_SIZE, DDS_PIXELFORMAT_OFFSET as isize);
        writer.write_u32_at(pixel_flags, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(fourcc, FOURCC_OFFSET as isize);
        writer.write_u32_at(bit_count, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
        writer.write_u32_at(masks[0], DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[1], DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[2], DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[3], DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);

        writer.write_u32_at(caps, DDS_CAPS_OFFSET as isize);
    }

    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(DdsFormat::Dxt5, 256, 256, 9, 0x000A_1007, 256 * 256, 0x0040_1008)]
    #[case(DdsFormat::Dxt5, 2, 2, 1, 0x0008_1007, 16, 0x1000)]
    #[case(DdsFormat::Luminance8, 64, 32, 1, 0x0000_100F, 64, 0x1000)]
    #[case(DdsFormat::Bgra8888, 64, 32, 7, 0x0002_100F, 256, 0x0040_1008)]
    fn header_fields(
        #[case] format: DdsFormat,
        #[case] width: u16,
        #[case] height: u16,
        #[case] mips: u32,
        #[case] flags: u32,
        #[case] pitch: u32,
        #[case] caps: u32,
    ) {
        let header = write_dds_header(format, width, height, mips);
        assert_eq!(&header[..4], b"DDS ");
        assert_eq!(get(&header, 0x04), 124);
        assert_eq!(get(&header, 0x08), flags);
        assert_eq!(get(&header, 0x0C), height as u32);
        assert_eq!(get(&header, 0x10), width as u32);
        assert_eq!(get(&header, 0x14), pitch);
        assert_eq!(get(&header, 0x18), 1);
        assert_eq!(get(&header, 0x1C), mips);
        assert_eq!(&header[0x20..0x4C], &[0u8; 44]);
        assert_eq!(get(&header, 0x4C), 32);
        assert_eq!(get(&header, 0x6C), caps);
        assert_eq!(&header[0x70..], &[0u8; 16]);
    }

    #[test]
    fn mask_pixel_format_is_bgra() {
        let header = write_dds_header(DdsFormat::Bgra8888, 4, 4, 1);
        assert_eq!(get(&header, 0x50), 0x41);
        assert_eq!(get(&header, 0x54), 0);
        assert_eq!(get(&header, 0x58), 32);
        assert_eq!(
            [get(&header, 0x5C), get(&header, 0x60), get(&header, 0x64), get(&header, 0x68)],
            [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000]
        );
    }

    #[test]
    fn luminance_pixel_format() {
        let header = write_dds_header(DdsFormat::Luminance8, 4, 4, 1);
        assert_eq!(get(&header, 0x50), 0x20000);
        assert_eq!(get(&header, 0x58), 8);
        assert_eq!(
            [get(&header, 0x5C), get(&header, 0x60), get(&header, 0x64), get(&header, 0x68)],
            [0xFF, 0xFF, 0xFF, 0]
        );
    }

    #[test]
    fn dxt5_pixel_format() {
        let header = write_dds_header(DdsFormat::Dxt5, 4, 4, 1);
        assert_eq!(get(&header, 0x50), 0x4);
        assert_eq!(&header[0x54..0x58], b"DXT5");
    }
}
