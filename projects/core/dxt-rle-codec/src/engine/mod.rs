//! The generic run-length engine.
//!
//! One engine serves every container variant; the [`ChannelLayout`] of the
//! container decides which streams a block reads or writes for each opcode.
//!
//! [`ChannelLayout`]: crate::layout::ChannelLayout

mod decode;
mod encode;
mod inspect;

pub use decode::{decode, decode_mask, DecodedTexture};
pub use encode::{encode, encode_with_mask, TextureDescriptor};
pub use inspect::{inspect, ContainerInfo, MipSummary};

use crate::classify::BlockClass;
use crate::command::CommandReader;
use crate::container::ContainerView;
use crate::error::{CodecError, CodecResult};
use crate::layout::MAX_CHANNELS;
use likely_stable::unlikely;

/// Per-mip tallies gathered while walking a command stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct MipStats {
    pub commands: usize,
    pub skip: usize,
    pub mixed: usize,
    pub full: usize,
}

impl MipStats {
    #[inline]
    pub fn blocks(&self) -> usize {
        self.skip + self.mixed + self.full
    }

    #[inline]
    fn count(&mut self, class: BlockClass, blocks: usize) {
        match class {
            BlockClass::Skip => self.skip += blocks,
            BlockClass::Mixed => self.mixed += blocks,
            BlockClass::Full => self.full += blocks,
        }
    }
}

/// Replays the commands of `mip`, handing each block's class and channel
/// fields to `on_block`.
///
/// `fields[n]` holds the bytes read from channel `n` for that block and is
/// empty for channels the opcode does not consume.
///
/// # Errors
///
/// - Command segment errors from [`ContainerView::command_segment`]
/// - [`CodecError::InvalidOpcode`] for opcode 3
/// - [`CodecError::BlockCountMismatch`] if the runs cover more or fewer than `expected_blocks`
/// - [`CodecError::StreamOverrun`] / [`CodecError::StreamConsistency`] from the cursors
pub(crate) fn walk_mip<F>(
    view: &ContainerView<'_>,
    mip: usize,
    expected_blocks: usize,
    mut on_block: F,
) -> CodecResult<MipStats>
where
    F: FnMut(BlockClass, &[&[u8]; MAX_CHANNELS]),
{
    let data = view.data();
    let layout = view.layout;
    let segment = view.command_segment(mip)?;
    let mut cursors = view.cursors(mip);
    let mut stats = MipStats::default();

    for command in CommandReader::new(segment) {
        let command = command.map_err(|raw| CodecError::InvalidOpcode {
            mip,
            command: raw,
            opcode: (raw & 0b11) as u8,
        })?;

        stats.commands += 1;
        let run = command.count as usize;
        if unlikely(stats.blocks() + run > expected_blocks) {
            return Err(CodecError::BlockCountMismatch {
                mip,
                expected: expected_blocks,
                actual: stats.blocks() + run,
            });
        }
        stats.count(command.class, run);

        let plan = layout.plan(command.class);
        for _ in 0..run {
            let mut fields: [&[u8]; MAX_CHANNELS] = [&[]; MAX_CHANNELS];
            for (index, spec) in layout.channels.iter().enumerate() {
                if plan.consumes(index) {
                    fields[index] = &data[cursors.take(index, spec.size)?];
                }
            }
            on_block(command.class, &fields);
        }
    }

    if stats.blocks() != expected_blocks {
        return Err(CodecError::BlockCountMismatch {
            mip,
            expected: expected_blocks,
            actual: stats.blocks(),
        });
    }
    cursors.finish()?;

    tracing::trace!(
        mip,
        commands = stats.commands,
        skip = stats.skip,
        mixed = stats.mixed,
        full = stats.full,
        "walked mip"
    );
    Ok(stats)
}
