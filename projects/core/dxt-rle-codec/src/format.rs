//! Tags stored in the first 8 bytes of a container.
//!
//! | Offset | Field   | Values                                   |
//! |--------|---------|------------------------------------------|
//! | 0      | format  | `'DXT5'` (0x35545844), `'L8  '` (0x2020384C) |
//! | 4      | variant | `'RLE2'` (0x32454C52), `'RLES'` (0x53454C52) |

use crate::error::{CodecError, CodecResult};
use crate::layout::{ChannelLayout, LayoutKind};
use derive_enum_all_values::AllValues;

/// Pixel layout of the plain texture wrapped by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum PixelFormat {
    /// BC3 blocks: 8 byte alpha sub-block followed by an 8 byte colour sub-block.
    Dxt5 = 0x3554_5844,
    /// 8-bit luminance, one byte per texel.
    Luminance8 = 0x2020_384C,
}

impl PixelFormat {
    /// The little-endian tag stored in the container header.
    #[inline]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Parses a format tag.
    pub fn from_tag(tag: u32) -> CodecResult<Self> {
        match tag {
            0x3554_5844 => Ok(Self::Dxt5),
            0x2020_384C => Ok(Self::Luminance8),
            other => Err(CodecError::UnsupportedFormat(other)),
        }
    }
}

/// Container variant, selecting which streams are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum ContainerVariant {
    /// Four streams; opacity is derived from the texture's own alpha.
    Rle2 = 0x3245_4C52,
    /// Five streams; adds an explicit 16 byte per block mask.
    Rles = 0x5345_4C52,
}

impl ContainerVariant {
    /// The little-endian tag stored in the container header.
    #[inline]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Parses a variant tag.
    pub fn from_tag(tag: u32) -> CodecResult<Self> {
        match tag {
            0x3245_4C52 => Ok(Self::Rle2),
            0x5345_4C52 => Ok(Self::Rles),
            other => Err(CodecError::UnsupportedVariant(other)),
        }
    }
}

/// Selects the channel layout used for a format/variant pair.
///
/// L8 textures always use the single-channel layout; the variant tag is
/// carried but has no effect on their layout.
pub fn layout_for(format: PixelFormat, variant: ContainerVariant) -> &'static ChannelLayout {
    let kind = match (format, variant) {
        (PixelFormat::Luminance8, _) => LayoutKind::SingleChannel,
        (PixelFormat::Dxt5, ContainerVariant::Rle2) => LayoutKind::FourChannelAlphaDerived,
        (PixelFormat::Dxt5, ContainerVariant::Rles) => LayoutKind::FourChannelExplicitMask,
    };
    ChannelLayout::for_kind(kind)
}
