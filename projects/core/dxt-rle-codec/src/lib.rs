#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Interpolated alpha sub-block decoding.
pub mod alpha;

/// Per-block Skip/Full/Mixed classification.
pub mod classify;

/// The 16-bit run-length command stream.
pub mod command;

/// Container header, mip descriptor table and stream bookkeeping.
pub mod container;

/// Encode and decode engines driven by a [`ChannelLayout`].
pub mod engine;

mod error;

/// Pixel format and container variant tags.
pub mod format;

/// Channel layout descriptors for each container variant.
pub mod layout;

/// Single-channel mask planes.
pub mod mask;

/// Mip level dimensions and sizes.
pub mod mip;

/// Conversion between scanline planes and 4x4 tiles.
pub mod tile;

pub use alpha::AlphaBlock;
pub use classify::BlockClass;
pub use command::{RunCommand, MAX_RUN_LENGTH};
pub use container::{ContainerHeader, StreamOffsets};
pub use engine::{
    decode, decode_mask, encode, encode_with_mask, inspect, ContainerInfo, DecodedTexture,
    MipSummary, TextureDescriptor,
};
pub use error::{CodecError, CodecResult};
pub use format::{ContainerVariant, PixelFormat};
pub use layout::{Channel, ChannelLayout, LayoutKind};
pub use mask::{DownsampleFilter, MaskPlane};

#[cfg(test)]
pub mod test_prelude;
