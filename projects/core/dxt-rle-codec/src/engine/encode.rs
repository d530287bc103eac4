//! Plain texture to container encoding.

use crate::classify::{classify_alpha, classify_uniform, BlockClass};
use crate::command::encode_runs;
use crate::container::{ContainerHeader, StreamOffsets, HEADER_SIZE};
use crate::error::{CodecError, CodecResult};
use crate::format::{layout_for, ContainerVariant, PixelFormat};
use crate::layout::{ChannelLayout, FieldSource, MAX_CHANNELS};
use crate::mask::MaskPlane;
use crate::mip::{
    blocks_for, mask_mip_dimensions, plain_chain_size, plain_mip_size, texture_mip_dimensions,
    BLOCK_SIZE, MAX_MIP_COUNT,
};
use crate::tile::tile_plane;
use alloc::vec::Vec;

/// Shape of the plain texture handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDescriptor {
    /// Pixel format of the plain data.
    pub format: PixelFormat,
    /// Width of mip 0 in texels.
    pub width: u16,
    /// Height of mip 0 in texels.
    pub height: u16,
    /// Number of mips in the plain data.
    pub mip_count: u16,
}

impl TextureDescriptor {
    /// Creates a new texture descriptor.
    pub fn new(format: PixelFormat, width: u16, height: u16, mip_count: u16) -> Self {
        Self {
            format,
            width,
            height,
            mip_count,
        }
    }

    /// Dimensions of texture mip `level`.
    #[inline]
    pub fn mip_dimensions(&self, level: usize) -> (usize, usize) {
        texture_mip_dimensions(self.width as usize, self.height as usize, level)
    }

    /// Total size in bytes of the plain mip chain.
    #[inline]
    pub fn plain_size(&self) -> usize {
        plain_chain_size(
            self.format,
            self.width as usize,
            self.height as usize,
            self.mip_count as usize,
        )
    }
}

/// Where the bytes of the mask stream come from.
#[derive(Clone, Copy)]
enum MaskInput<'a> {
    /// Layout has no mask stream.
    Absent,
    /// Every Mixed block marked fully opaque.
    Opaque,
    /// Caller supplied planes, one per mip.
    Explicit(&'a [MaskPlane]),
}

/// Encodes a plain mip chain into a container of the given variant.
///
/// DXT5 blocks are classified by their own alpha. With [`ContainerVariant::Rles`]
/// the mask stream of Mixed blocks is filled with `0xFF`. L8 textures use the
/// single-channel layout and are always tagged [`ContainerVariant::Rle2`].
///
/// # Errors
///
/// - [`CodecError::TooManyMips`] if the descriptor has more than 16 mips
/// - [`CodecError::Truncated`] if `plain` is shorter than the mip chain
/// - [`CodecError::ContainerTooLarge`] if offsets would not fit in 32 bits
pub fn encode(
    descriptor: &TextureDescriptor,
    plain: &[u8],
    variant: ContainerVariant,
) -> CodecResult<Vec<u8>> {
    let variant = match descriptor.format {
        PixelFormat::Dxt5 => variant,
        PixelFormat::Luminance8 => ContainerVariant::Rle2,
    };
    let layout = layout_for(descriptor.format, variant);
    let mask = match layout.mask_channel() {
        Some(_) => MaskInput::Opaque,
        None => MaskInput::Absent,
    };
    encode_chain(descriptor, plain, variant, layout, mask)
}

/// Encodes a DXT5 mip chain into an RLES container driven by an explicit mask.
///
/// `masks[k]` must be the mask for mip `k`, sized `max(1, base >> k)`. Extra
/// levels are ignored.
///
/// # Errors
///
/// - [`CodecError::DimensionMismatch`] if a mask level has the wrong size; checked first
/// - [`CodecError::MaskMipCountMismatch`] if fewer mask levels than texture mips are given
/// - [`CodecError::MaskRequiresDxt5`] if the texture is not DXT5
/// - Any error [`encode`] would raise
pub fn encode_with_mask(
    descriptor: &TextureDescriptor,
    plain: &[u8],
    masks: &[MaskPlane],
) -> CodecResult<Vec<u8>> {
    validate_masks(descriptor, masks)?;
    if descriptor.format != PixelFormat::Dxt5 {
        return Err(CodecError::MaskRequiresDxt5);
    }

    let variant = ContainerVariant::Rles;
    let layout = layout_for(descriptor.format, variant);
    encode_chain(descriptor, plain, variant, layout, MaskInput::Explicit(masks))
}

fn validate_masks(descriptor: &TextureDescriptor, masks: &[MaskPlane]) -> CodecResult<()> {
    let (width, height) = (descriptor.width as usize, descriptor.height as usize);
    let mismatch = |mask: &MaskPlane| CodecError::DimensionMismatch {
        width,
        height,
        mask_width: mask.width(),
        mask_height: mask.height(),
    };

    if let Some(base) = masks.first() {
        if (base.width(), base.height()) != (width, height) {
            return Err(mismatch(base));
        }
    }

    let mip_count = descriptor.mip_count as usize;
    if masks.len() < mip_count {
        return Err(CodecError::MaskMipCountMismatch {
            expected: mip_count,
            actual: masks.len(),
        });
    }

    for (level, mask) in masks.iter().enumerate().take(mip_count) {
        let expected = mask_mip_dimensions(width, height, level);
        let (tw, th) = descriptor.mip_dimensions(level);
        if (mask.width(), mask.height()) != expected
            || blocks_for(mask.width(), mask.height()) != blocks_for(tw, th)
        {
            return Err(CodecError::DimensionMismatch {
                width: expected.0,
                height: expected.1,
                mask_width: mask.width(),
                mask_height: mask.height(),
            });
        }
    }
    Ok(())
}

fn encode_chain(
    descriptor: &TextureDescriptor,
    plain: &[u8],
    variant: ContainerVariant,
    layout: &'static ChannelLayout,
    mask: MaskInput<'_>,
) -> CodecResult<Vec<u8>> {
    if descriptor.mip_count > MAX_MIP_COUNT {
        return Err(CodecError::TooManyMips {
            max: MAX_MIP_COUNT,
            actual: descriptor.mip_count as u32,
        });
    }

    let required = descriptor.plain_size();
    if plain.len() < required {
        return Err(CodecError::Truncated {
            what: "plain mip chain",
            required,
            actual: plain.len(),
        });
    }

    tracing::debug!(
        format = ?descriptor.format,
        ?variant,
        layout = ?layout.kind,
        width = descriptor.width,
        height = descriptor.height,
        mips = descriptor.mip_count,
        "encoding container"
    );

    let (width, height) = (descriptor.width as usize, descriptor.height as usize);
    let mut commands = Vec::new();
    let mut channels: [Vec<u8>; MAX_CHANNELS] = Default::default();
    let mut relative = Vec::with_capacity(descriptor.mip_count as usize);

    let mut tiles = Vec::new();
    let mut mask_blocks = Vec::new();
    let mut classes = Vec::new();
    let mut mip_start = 0;
    for mip in 0..descriptor.mip_count as usize {
        let (w, h) = descriptor.mip_dimensions(mip);
        let mip_size = plain_mip_size(descriptor.format, width, height, mip);
        let mip_bytes = &plain[mip_start..mip_start + mip_size];
        mip_start += mip_size;

        let blocks: &[u8] = match descriptor.format {
            PixelFormat::Dxt5 => mip_bytes,
            PixelFormat::Luminance8 => {
                tiles.clear();
                tile_plane(mip_bytes, w, h, &mut tiles);
                &tiles
            }
        };

        let explicit_mask: Option<&[u8]> = match mask {
            MaskInput::Explicit(planes) => {
                mask_blocks.clear();
                planes[mip].to_blocks(&mut mask_blocks);
                Some(&mask_blocks)
            }
            _ => None,
        };

        if let Some(mask) = explicit_mask {
            if mask.len() != blocks.len() {
                return Err(CodecError::BlockCountMismatch {
                    mip,
                    expected: blocks.len() / BLOCK_SIZE,
                    actual: mask.len() / BLOCK_SIZE,
                });
            }
        }

        relative.push(StreamOffsets {
            command: commands.len(),
            channels: core::array::from_fn(|index| channels[index].len()),
        });

        classes.clear();
        for index in 0..blocks.len() / BLOCK_SIZE {
            let block = block_at(blocks, index);
            let mask_block = explicit_mask.map(|mask| block_at(mask, index));
            let class = match (descriptor.format, &mask_block) {
                (PixelFormat::Luminance8, _) => classify_uniform(&block),
                (PixelFormat::Dxt5, Some(mask)) => classify_uniform(mask),
                (PixelFormat::Dxt5, None) => classify_alpha(&block),
            };
            classes.push(class);

            let plan = layout.plan(class);
            for (channel, spec) in layout.channels.iter().enumerate() {
                if !plan.consumes(channel) {
                    continue;
                }
                let out = &mut channels[channel];
                match (spec.source, &mask_block) {
                    (FieldSource::Block(offset), _) => {
                        out.extend_from_slice(&block[offset..offset + spec.size])
                    }
                    (FieldSource::Mask, Some(mask)) => out.extend_from_slice(mask),
                    (FieldSource::Mask, None) => out.extend_from_slice(&[0xFF; BLOCK_SIZE]),
                }
            }
        }

        let written = encode_runs(&classes, &mut commands);
        tracing::trace!(mip, blocks = classes.len(), commands = written, "encoded mip");
    }

    assemble(descriptor, variant, layout, &commands, &channels, &relative)
}

/// Copies block `index` out of a buffer of whole blocks.
#[inline(always)]
fn block_at(blocks: &[u8], index: usize) -> [u8; BLOCK_SIZE] {
    let start = index * BLOCK_SIZE;
    core::array::from_fn(|offset| blocks[start + offset])
}

/// Writes the header, the biased descriptor table and all streams.
fn assemble(
    descriptor: &TextureDescriptor,
    variant: ContainerVariant,
    layout: &ChannelLayout,
    commands: &[u8],
    channels: &[Vec<u8>; MAX_CHANNELS],
    relative: &[StreamOffsets],
) -> CodecResult<Vec<u8>> {
    let channel_count = layout.channels.len();
    let data_start = HEADER_SIZE + relative.len() * layout.descriptor_size();

    let mut channel_bases = [0usize; MAX_CHANNELS];
    let mut cursor = data_start + commands.len();
    for (base, stream) in channel_bases.iter_mut().zip(channels).take(channel_count) {
        *base = cursor;
        cursor += stream.len();
    }
    let total = cursor;
    if total > u32::MAX as usize {
        return Err(CodecError::ContainerTooLarge(total));
    }

    let mut out = Vec::with_capacity(total);
    ContainerHeader {
        format: descriptor.format,
        variant,
        width: descriptor.width,
        height: descriptor.height,
        mip_count: descriptor.mip_count,
    }
    .write(&mut out);
    for offsets in relative {
        offsets
            .biased(data_start, &channel_bases)
            .write(channel_count, &mut out);
    }
    out.extend_from_slice(commands);
    for stream in &channels[..channel_count] {
        out.extend_from_slice(stream);
    }

    tracing::debug!(
        bytes = out.len(),
        commands = commands.len() / 2,
        "assembled container"
    );
    Ok(out)
}
