//! Error types for DDS parsing.

use thiserror::Error;

/// Result type for DDS operations
pub type DdsResult<T> = Result<T, DdsError>;

/// Errors raised while validating a DDS header.
///
/// Every variant except [`DdsError::UnsupportedPixelFormat`] describes a
/// malformed header.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DdsError {
    /// The input is shorter than the header or the payload it declares.
    #[error("DDS data too short: required {required} bytes, got {actual} bytes")]
    TooShort { required: usize, actual: usize },

    /// The file does not start with `"DDS "`.
    #[error("Invalid DDS magic {0:#010X}")]
    InvalidMagic(u32),

    /// `dwSize` is not 124.
    #[error("Invalid DDS header size: expected 124, read {0}")]
    InvalidHeaderSize(u32),

    /// One of CAPS, HEIGHT, WIDTH or PIXELFORMAT is missing from the header flags.
    #[error("DDS header flags {flags:#010X} are missing required bits {required:#010X}")]
    MissingFlags { flags: u32, required: u32 },

    /// Width or height exceeds 65535.
    #[error("DDS dimensions {width}x{height} exceed the maximum of 65535")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// Volume textures are not supported.
    #[error("DDS depth must be 0 or 1, read {0}")]
    InvalidDepth(u32),

    /// More mips than a container can describe.
    #[error("DDS mip count {actual} exceeds the maximum of {max}")]
    TooManyMips { max: u32, actual: u32 },

    /// `DDS_PIXELFORMAT::dwSize` is not 32.
    #[error("Invalid DDS pixel format size: expected 32, read {0}")]
    InvalidPixelFormatSize(u32),

    /// The pixel format flags are not FOURCC, RGB, RGBA or LUMINANCE.
    #[error("Invalid DDS pixel format flags {0:#010X}")]
    InvalidPixelFormatFlags(u32),

    /// The fourcc is not a recognised block compression code.
    #[error("Invalid DDS fourcc {0:#010X}")]
    InvalidFourCc(u32),

    /// A valid header describing a pixel format other than DXT5, L8 or BGRA8888.
    #[error("Unsupported DDS pixel format: flags {flags:#010X}, fourcc {fourcc:#010X}, {bit_count} bits per pixel")]
    UnsupportedPixelFormat {
        flags: u32,
        fourcc: u32,
        bit_count: u32,
    },
}
