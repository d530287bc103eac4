//! The fixed 16 byte container header.

use crate::error::{CodecError, CodecResult};
use crate::format::{layout_for, ContainerVariant, PixelFormat};
use crate::layout::ChannelLayout;
use crate::mip::MAX_MIP_COUNT;
use alloc::vec::Vec;

/// Size of the container header in bytes.
pub const HEADER_SIZE: usize = 16;

/// The fixed header at the start of every container.
///
/// ```text
/// 0   u32  format tag
/// 4   u32  variant tag
/// 8   u16  width
/// 10  u16  height
/// 12  u16  mip count
/// 14  u16  reserved, 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Pixel format of the wrapped texture.
    pub format: PixelFormat,
    /// Container variant.
    pub variant: ContainerVariant,
    /// Width of mip 0 in texels.
    pub width: u16,
    /// Height of mip 0 in texels.
    pub height: u16,
    /// Number of mips described by the table.
    pub mip_count: u16,
}

#[inline(always)]
fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline(always)]
pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl ContainerHeader {
    /// Parses and validates the header at the start of `bytes`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Truncated`] if fewer than [`HEADER_SIZE`] bytes are available
    /// - [`CodecError::UnsupportedFormat`] / [`CodecError::UnsupportedVariant`] for unknown tags
    /// - [`CodecError::ReservedNotZero`] if the reserved field is set
    /// - [`CodecError::TooManyMips`] if more than [`MAX_MIP_COUNT`] mips are declared
    pub fn read(bytes: &[u8]) -> CodecResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(CodecError::Truncated {
                what: "container header",
                required: HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let format = PixelFormat::from_tag(read_u32(bytes, 0))?;
        let variant = ContainerVariant::from_tag(read_u32(bytes, 4))?;
        let reserved = read_u16(bytes, 14);
        if reserved != 0 {
            return Err(CodecError::ReservedNotZero(reserved));
        }

        let mip_count = read_u16(bytes, 12);
        if mip_count > MAX_MIP_COUNT {
            return Err(CodecError::TooManyMips {
                max: MAX_MIP_COUNT,
                actual: mip_count as u32,
            });
        }

        Ok(Self {
            format,
            variant,
            width: read_u16(bytes, 8),
            height: read_u16(bytes, 10),
            mip_count,
        })
    }

    /// Appends the 16 byte header to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.format.tag().to_le_bytes());
        out.extend_from_slice(&self.variant.tag().to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.mip_count.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
    }

    /// The channel layout the container's streams follow.
    #[inline]
    pub fn layout(&self) -> &'static ChannelLayout {
        layout_for(self.format, self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn header_bytes(mips: u16, reserved: u16) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"DXT5RLES");
        bytes.extend_from_slice(&64u16.to_le_bytes());
        bytes.extend_from_slice(&32u16.to_le_bytes());
        bytes.extend_from_slice(&mips.to_le_bytes());
        bytes.extend_from_slice(&reserved.to_le_bytes());
        bytes
    }

    #[test]
    fn reads_what_it_writes() {
        let header = ContainerHeader::read(&header_bytes(7, 0)).unwrap();
        assert_eq!(
            header,
            ContainerHeader {
                format: PixelFormat::Dxt5,
                variant: ContainerVariant::Rles,
                width: 64,
                height: 32,
                mip_count: 7,
            }
        );

        let mut written = Vec::new();
        header.write(&mut written);
        assert_eq!(written, header_bytes(7, 0));
    }

    #[rstest]
    #[case(header_bytes(1, 1), CodecError::ReservedNotZero(1))]
    #[case(header_bytes(17, 0), CodecError::TooManyMips { max: 16, actual: 17 })]
    #[case(header_bytes(1, 0)[..15].to_vec(), CodecError::Truncated { what: "container header", required: 16, actual: 15 })]
    fn rejects_malformed_headers(#[case] bytes: Vec<u8>, #[case] expected: CodecError) {
        assert_eq!(ContainerHeader::read(&bytes), Err(expected));
    }

    #[test]
    fn rejects_unknown_variant() {
        let mut bytes = header_bytes(1, 0);
        bytes[4..8].copy_from_slice(b"RLE3");
        assert_eq!(
            ContainerHeader::read(&bytes),
            Err(CodecError::UnsupportedVariant(u32::from_le_bytes(*b"RLE3")))
        );
    }
}
