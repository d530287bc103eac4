//! Container inspection without materialising the texture.

use super::walk_mip;
use crate::container::{ContainerHeader, ContainerView, StreamOffsets};
use crate::error::CodecResult;
use crate::layout::{ChannelLayout, MAX_CHANNELS};
use crate::mip::{blocks_for, texture_mip_dimensions};
use alloc::vec::Vec;

/// Layout and run statistics of one mip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipSummary {
    /// Texture dimensions of the mip.
    pub dimensions: (usize, usize),
    /// Absolute stream offsets recorded for the mip.
    pub descriptor: StreamOffsets,
    /// Bytes of the command segment.
    pub command_bytes: usize,
    /// Bytes of each channel segment, in layout order.
    pub channel_bytes: [usize; MAX_CHANNELS],
    /// Number of commands.
    pub commands: usize,
    /// Blocks covered by Skip runs.
    pub skip_blocks: usize,
    /// Blocks covered by Mixed runs.
    pub mixed_blocks: usize,
    /// Blocks covered by Full runs.
    pub full_blocks: usize,
}

/// Everything [`inspect`] learns about a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    /// The container header.
    pub header: ContainerHeader,
    /// Total size of the container in bytes.
    pub size: usize,
    /// One summary per mip.
    pub mips: Vec<MipSummary>,
}

impl ContainerInfo {
    /// The channel layout of the container.
    #[inline]
    pub fn layout(&self) -> &'static ChannelLayout {
        self.header.layout()
    }
}

/// Validates a container fully and reports its layout and per-mip run
/// statistics.
///
/// # Errors
///
/// The same errors [`decode`](super::decode) reports for the container.
pub fn inspect(encoded: &[u8]) -> CodecResult<ContainerInfo> {
    let view = ContainerView::parse(encoded)?;
    let header = view.header;
    let (width, height) = (header.width as usize, header.height as usize);

    let mut mips = Vec::with_capacity(view.mip_count());
    for mip in 0..view.mip_count() {
        let dimensions = texture_mip_dimensions(width, height, mip);
        let stats = walk_mip(&view, mip, blocks_for(dimensions.0, dimensions.1), |_, _| {})?;

        let start = *view.descriptor(mip);
        let end = view.descriptor(mip + 1);
        mips.push(MipSummary {
            dimensions,
            descriptor: start,
            command_bytes: end.command - start.command,
            channel_bytes: core::array::from_fn(|index| {
                end.channels[index].saturating_sub(start.channels[index])
            }),
            commands: stats.commands,
            skip_blocks: stats.skip,
            mixed_blocks: stats.mixed,
            full_blocks: stats.full,
        });
    }

    Ok(ContainerInfo {
        header,
        size: encoded.len(),
        mips,
    })
}
