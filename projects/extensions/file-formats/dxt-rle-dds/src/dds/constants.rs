//! DDS format constants and definitions

/// Magic header for DDS files
pub const DDS_MAGIC: u32 = 0x44445320_u32.to_be();

/// Size of the legacy DDS header, magic included.
pub const DDS_HEADER_SIZE: usize = 0x80;

/// Value of `dwSize`: the header size without the magic.
pub(crate) const DDS_DW_SIZE: u32 = 124;

/// Value of `DDS_PIXELFORMAT::dwSize`.
pub(crate) const DDS_PIXELFORMAT_SIZE: u32 = 32;

/// Largest width or height the container can represent.
pub(crate) const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Largest mip count the container can represent.
pub const MAX_MIP_COUNT: u32 = 16;

// DDS header field offsets
pub(crate) const DDS_SIZE_OFFSET: usize = 0x04;
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_PITCH_OR_LINEAR_SIZE_OFFSET: usize = 0x14;
pub(crate) const DDS_DEPTH_OFFSET: usize = 0x18;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub(crate) const FOURCC_OFFSET: usize = 0x54;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;
pub(crate) const DDS_CAPS_OFFSET: usize = 0x6C;

// DDS header flags
pub(crate) const DDSD_CAPS: u32 = 0x1;
pub(crate) const DDSD_HEIGHT: u32 = 0x2;
pub(crate) const DDSD_WIDTH: u32 = 0x4;
pub(crate) const DDSD_PITCH: u32 = 0x8;
pub(crate) const DDSD_PIXELFORMAT: u32 = 0x1000;
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_LINEARSIZE: u32 = 0x80000;

/// Flags every accepted header must carry.
pub(crate) const DDSD_REQUIRED: u32 = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_RGB: u32 = 0x40;
pub(crate) const DDPF_LUMINANCE: u32 = 0x20000;

// DDS caps
pub(crate) const DDSCAPS_COMPLEX: u32 = 0x8;
pub(crate) const DDSCAPS_TEXTURE: u32 = 0x1000;
pub(crate) const DDSCAPS_MIPMAP: u32 = 0x400000;

pub(crate) const FOURCC_DXT1: u32 = 0x31545844_u32.to_le(); // 'DXT1'
pub(crate) const FOURCC_DXT3: u32 = 0x33545844_u32.to_le(); // 'DXT3'
pub(crate) const FOURCC_DXT5: u32 = 0x35545844_u32.to_le(); // 'DXT5'
pub(crate) const FOURCC_DST1: u32 = 0x31545344_u32.to_le(); // 'DST1'
pub(crate) const FOURCC_DST3: u32 = 0x33545344_u32.to_le(); // 'DST3'
pub(crate) const FOURCC_DST5: u32 = 0x35545344_u32.to_le(); // 'DST5'
pub(crate) const FOURCC_ATI1: u32 = 0x31495441_u32.to_le(); // 'ATI1'
pub(crate) const FOURCC_ATI2: u32 = 0x32495441_u32.to_le(); // 'ATI2'

// B8G8R8A8_UNORM: R=byte2, G=byte1, B=byte0, A=byte3 (0xAARRGGBB)
pub(crate) const BGRA8888_RED_MASK: u32 = 0x00FF0000;
pub(crate) const BGRA8888_GREEN_MASK: u32 = 0x0000FF00;
pub(crate) const BGRA8888_BLUE_MASK: u32 = 0x000000FF;
pub(crate) const BGRA8888_ALPHA_MASK: u32 = 0xFF000000;

// L8: every colour mask selects the single byte.
pub(crate) const L8_MASK: u32 = 0x000000FF;
