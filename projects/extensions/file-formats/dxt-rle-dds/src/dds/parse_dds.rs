use super::{constants::*, likely_dds};
use crate::error::{DdsError, DdsResult};
use endian_writer::{EndianReader, LittleEndianReader};

/// A plain pixel format the container codec can consume or produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DdsFormat {
    /// a.k.a. BC3
    Dxt5 = 0,
    /// 8-bit luminance.
    Luminance8 = 1,
    /// 32-bit BGRA, used for masks.
    Bgra8888 = 2,
}

impl DdsFormat {
    /// Bytes per pixel of uncompressed formats, [`None`] for block compressed ones.
    #[inline]
    pub const fn bytes_per_pixel(self) -> Option<u32> {
        match self {
            DdsFormat::Dxt5 => None,
            DdsFormat::Luminance8 => Some(1),
            DdsFormat::Bgra8888 => Some(4),
        }
    }
}

/// The information of a validated DDS header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    /// Pixel format of the payload.
    pub format: DdsFormat,
    /// Width of mip 0.
    pub width: u16,
    /// Height of mip 0.
    pub height: u16,
    /// Effective mip count: `max(1, dwMipMapCount)` when `DDSD_MIPMAPCOUNT` is set, else 1.
    pub mip_count: u32,
    /// Offset of the first payload byte.
    pub data_offset: usize,
}

impl DdsInfo {
    /// The payload bytes following the header.
    #[inline]
    pub fn payload<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        data.get(self.data_offset..).unwrap_or(&[])
    }
}

/// Validates a DDS header and determines its plain format.
///
/// Checks run in this order: length and magic, `dwSize`, required flags,
/// dimensions, depth, mip count, pixel format size, pixel format flags and
/// fourcc. Only then is the format identified.
///
/// # Errors
///
/// A [`DdsError`] naming the first check that failed.
pub fn parse_dds(data: &[u8]) -> DdsResult<DdsInfo> {
    if data.len() < DDS_HEADER_SIZE {
        return Err(DdsError::TooShort {
            required: DDS_HEADER_SIZE,
            actual: data.len(),
        });
    }
    if !likely_dds(data) {
        return Err(DdsError::InvalidMagic(u32::from_le_bytes([
            data[0], data[1], data[2], data[3],
        ])));
    }

    // SAFETY: We checked data.len() >= DDS_HEADER_SIZE (128); every offset read below is < 0x7C.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };

    let size = unsafe { reader.read_u32_at(DDS_SIZE_OFFSET as isize) };
    if size != DDS_DW_SIZE {
        return Err(DdsError::InvalidHeaderSize(size));
    }

    let flags = unsafe { reader.read_u32_at(DDS_FLAGS_OFFSET as isize) };
    if flags & DDSD_REQUIRED != DDSD_REQUIRED {
        return Err(DdsError::MissingFlags {
            flags,
            required: DDSD_REQUIRED,
        });
    }

    let height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) };
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) };
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(DdsError::DimensionsTooLarge { width, height });
    }

    let depth = unsafe { reader.read_u32_at(DDS_DEPTH_OFFSET as isize) };
    if depth > 1 {
        return Err(DdsError::InvalidDepth(depth));
    }

    let raw_mipmap_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) };
    if raw_mipmap_count > MAX_MIP_COUNT {
        return Err(DdsError::TooManyMips {
            max: MAX_MIP_COUNT,
            actual: raw_mipmap_count,
        });
    }

    let pf_size = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_OFFSET as isize) };
    if pf_size != DDS_PIXELFORMAT_SIZE {
        return Err(DdsError::InvalidPixelFormatSize(pf_size));
    }

    let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };
    if !matches!(
        pixel_flags,
        DDPF_FOURCC | DDPF_RGB | RGBA_FLAGS | DDPF_LUMINANCE
    ) {
        return Err(DdsError::InvalidPixelFormatFlags(pixel_flags));
    }

    let fourcc = unsafe { reader.read_u32_at(FOURCC_OFFSET as isize) };
    if !matches!(
        fourcc,
        0 | FOURCC_DXT1
            | FOURCC_DXT3
            | FOURCC_DXT5
            | FOURCC_DST1
            | FOURCC_DST3
            | FOURCC_DST5
            | FOURCC_ATI1
            | FOURCC_ATI2
    ) {
        return Err(DdsError::InvalidFourCc(fourcc));
    }

    let bit_count = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize) };
    let masks = [
        unsafe { reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize) },
        unsafe { reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize) },
        unsafe { reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize) },
        unsafe { reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize) },
    ];
    let format = match pixel_flags {
        DDPF_FOURCC if fourcc == FOURCC_DXT5 => Some(DdsFormat::Dxt5),
        DDPF_LUMINANCE if bit_count == 8 => Some(DdsFormat::Luminance8),
        DDPF_RGB | RGBA_FLAGS
            if bit_count == 32
                && masks
                    == [
                        BGRA8888_RED_MASK,
                        BGRA8888_GREEN_MASK,
                        BGRA8888_BLUE_MASK,
                        BGRA8888_ALPHA_MASK,
                    ] =>
        {
            Some(DdsFormat::Bgra8888)
        }
        _ => None,
    };
    let Some(format) = format else {
        return Err(DdsError::UnsupportedPixelFormat {
            flags: pixel_flags,
            fourcc,
            bit_count,
        });
    };

    let mip_count = if flags & DDSD_MIPMAPCOUNT != 0 {
        raw_mipmap_count.max(1)
    } else {
        1
    };

    Ok(DdsInfo {
        format,
        width: width as u16,
        height: height as u16,
        mip_count,
        data_offset: DDS_HEADER_SIZE,
    })
}

const RGBA_FLAGS: u32 = DDPF_RGB | DDPF_ALPHAPIXELS;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(DdsFormat::Dxt5, 256, 128, 9)]
    #[case(DdsFormat::Luminance8, 64, 64, 1)]
    #[case(DdsFormat::Bgra8888, 17, 3, 2)]
    fn parses_written_headers(
        #[case] format: DdsFormat,
        #[case] width: u16,
        #[case] height: u16,
        #[case] mips: u32,
    ) {
        let header = write_dds_header(format, width, height, mips);
        let info = parse_dds(&header).unwrap();
        assert_eq!(
            info,
            DdsInfo {
                format,
                width,
                height,
                mip_count: mips,
                data_offset: 128,
            }
        );
        assert!(info.payload(&header).is_empty());
    }

    #[rstest]
    #[case::short(header_with(|h| h.truncate(127)), DdsError::TooShort { required: 128, actual: 127 })]
    #[case::magic(header_with(|h| h[0] = b'X'), DdsError::InvalidMagic(u32::from_le_bytes(*b"XDS ")))]
    #[case::size(header_with(|h| put(h, 0x04, 120)), DdsError::InvalidHeaderSize(120))]
    #[case::flags(header_with(|h| put(h, 0x08, 0x7)), DdsError::MissingFlags { flags: 0x7, required: 0x1007 })]
    #[case::width(header_with(|h| put(h, 0x10, 65536)), DdsError::DimensionsTooLarge { width: 65536, height: 4 })]
    #[case::depth(header_with(|h| put(h, 0x18, 2)), DdsError::InvalidDepth(2))]
    #[case::mips(header_with(|h| put(h, 0x1C, 17)), DdsError::TooManyMips { max: 16, actual: 17 })]
    #[case::pf_size(header_with(|h| put(h, 0x4C, 24)), DdsError::InvalidPixelFormatSize(24))]
    #[case::pf_flags(header_with(|h| put(h, 0x50, 0x2)), DdsError::InvalidPixelFormatFlags(0x2))]
    #[case::fourcc(header_with(|h| h[0x54..0x58].copy_from_slice(b"DX10")), DdsError::InvalidFourCc(u32::from_le_bytes(*b"DX10")))]
    fn rejects_malformed_headers(#[case] data: Vec<u8>, #[case] expected: DdsError) {
        assert_eq!(parse_dds(&data), Err(expected));
    }

    #[test]
    fn recognised_but_unsupported_fourcc() {
        let data = header_with(|h| h[0x54..0x58].copy_from_slice(b"DXT1"));
        assert_eq!(
            parse_dds(&data),
            Err(DdsError::UnsupportedPixelFormat {
                flags: 0x4,
                fourcc: u32::from_le_bytes(*b"DXT1"),
                bit_count: 32,
            })
        );
    }

    #[test]
    fn rgba_byte_order_is_unsupported() {
        let mut data = write_dds_header(DdsFormat::Bgra8888, 4, 4, 1).to_vec();
        put(&mut data, 0x5C, 0x000000FF);
        put(&mut data, 0x64, 0x00FF0000);
        assert!(matches!(
            parse_dds(&data),
            Err(DdsError::UnsupportedPixelFormat { bit_count: 32, .. })
        ));
    }

    #[rstest]
    #[case(0, false, 1)]
    #[case(0, true, 1)]
    #[case(5, false, 1)]
    #[case(5, true, 5)]
    fn effective_mip_count(#[case] raw: u32, #[case] flagged: bool, #[case] expected: u32) {
        let data = header_with(|h| {
            put(h, 0x1C, raw);
            let flags = u32::from_le_bytes([h[8], h[9], h[10], h[11]]) & !0x20000;
            put(h, 0x08, if flagged { flags | 0x20000 } else { flags });
        });
        assert_eq!(parse_dds(&data).unwrap().mip_count, expected);
    }

    #[test]
    fn rgb_without_alpha_flag_is_accepted() {
        let data = {
            let mut h = write_dds_header(DdsFormat::Bgra8888, 4, 4, 1).to_vec();
            put(&mut h, 0x50, 0x40);
            h
        };
        assert_eq!(parse_dds(&data).unwrap().format, DdsFormat::Bgra8888);
    }
}
