//! Error types for the run-length container codec.

use crate::{format::ContainerVariant, layout::Channel};
use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a container.
///
/// Every error is fatal for the operation that produced it; no partial
/// output is ever returned alongside one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input ended before a structure could be read in full.
    #[error("Input truncated while reading {what}: required {required} bytes, got {actual} bytes")]
    Truncated {
        what: &'static str,
        required: usize,
        actual: usize,
    },

    /// The reserved field of the container header was not zero.
    #[error("Reserved container header field must be 0, read {0:#06X}")]
    ReservedNotZero(u16),

    /// The mip count exceeds what the container can describe.
    #[error("Mip count {actual} exceeds the maximum of {max}")]
    TooManyMips { max: u16, actual: u32 },

    /// Texture dimensions do not fit into the 16-bit header fields.
    #[error("Texture dimensions {width}x{height} exceed the maximum of 65535")]
    DimensionsOutOfRange { width: u32, height: u32 },

    /// The format tag is not one of the recognised pixel formats.
    #[error("Unsupported format tag {0:#010X}")]
    UnsupportedFormat(u32),

    /// The variant tag is not one of the recognised container variants.
    #[error("Unsupported container variant tag {0:#010X}")]
    UnsupportedVariant(u32),

    /// An explicit mask was supplied for a texture that is not DXT5.
    #[error("Explicit masks require a DXT5 texture")]
    MaskRequiresDxt5,

    /// The container carries no explicit mask channel.
    #[error("{0:?} container has no mask channel")]
    NoMaskChannel(ContainerVariant),

    /// A command used the reserved opcode 3.
    #[error("Invalid opcode {opcode} in command {command:#06X} of mip {mip}")]
    InvalidOpcode { mip: usize, command: u16, opcode: u8 },

    /// The command segment of a mip is not a whole number of 16-bit commands.
    #[error("Command segment of mip {mip} has odd length {length}")]
    OddCommandSegment { mip: usize, length: usize },

    /// A descriptor offset points past the end of the container.
    #[error("Mip {mip} {channel} offset {offset} is out of bounds (container length {length})")]
    OffsetOutOfBounds {
        mip: usize,
        channel: Channel,
        offset: usize,
        length: usize,
    },

    /// After decoding a mip, a stream cursor did not land on the next descriptor.
    #[error("Stream consistency violation in mip {mip}: {channel} cursor ended at {actual}, next descriptor expects {expected}")]
    StreamConsistency {
        mip: usize,
        channel: Channel,
        expected: usize,
        actual: usize,
    },

    /// A read ran past the end of a stream segment.
    #[error("Stream overrun in mip {mip}: reading {required} bytes of {channel} at {cursor} passes the segment end {end}")]
    StreamOverrun {
        mip: usize,
        channel: Channel,
        cursor: usize,
        required: usize,
        end: usize,
    },

    /// The command stream of a mip describes a different number of blocks than the mip holds.
    #[error("Mip {mip} commands describe {actual} blocks, expected {expected}")]
    BlockCountMismatch {
        mip: usize,
        expected: usize,
        actual: usize,
    },

    /// The mask and the texture differ in size.
    #[error("Mask dimensions {mask_width}x{mask_height} do not match texture dimensions {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        mask_width: usize,
        mask_height: usize,
    },

    /// Fewer mask levels were supplied than the texture has mips.
    #[error("Mask has {actual} levels, texture has {expected} mips")]
    MaskMipCountMismatch { expected: usize, actual: usize },

    /// The encoded container would not be addressable with 32-bit offsets.
    #[error("Encoded container of {0} bytes exceeds the 32-bit offset range")]
    ContainerTooLarge(usize),
}
