//! Channel layout descriptors.
//!
//! A layout lists the payload streams of a container in blob order and, for
//! each opcode, which of those streams a block consumes plus the constant
//! block used for bytes no stream provides.
//!
//! ```text
//! DXT5 block:  [ alpha endpoints (2) | alpha indices (6) | colour endpoints (4) | colour indices (4) ]
//!                 0..2                  2..8                8..12                  12..16
//! ```
//!
//! | Layout                  | Skip | Mixed                  | Full                   |
//! |-------------------------|------|------------------------|------------------------|
//! | FourChannelAlphaDerived | -    | all four block fields  | colour fields          |
//! | FourChannelExplicitMask | -    | all four + 16 mask     | all four block fields  |
//! | SingleChannel           | -    | 16 luminance bytes     | -                      |

use crate::classify::BlockClass;
use crate::mip::BLOCK_SIZE;
use core::fmt;

/// Maximum number of payload streams in any layout.
pub const MAX_CHANNELS: usize = 5;

/// Alpha sub-block that decodes to 16 fully transparent texels.
pub const TRANSPARENT_ALPHA: [u8; 8] = [0x00, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Alpha sub-block that decodes to 16 fully opaque texels.
pub const OPAQUE_ALPHA: [u8; 8] = [0x00, 0x05, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

/// Colour sub-block emitted for transparent blocks of RLE2 containers.
pub const TRANSPARENT_WHITE: [u8; 8] = [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Colour sub-block emitted for transparent blocks of RLES containers.
pub const TRANSPARENT_BLACK: [u8; 8] = [0x00; 8];

/// One semantic byte stream of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The run-length command stream.
    Commands,
    /// The two alpha endpoint bytes of a DXT5 block.
    AlphaEndpoints,
    /// The six 3-bit-index bytes of a DXT5 alpha sub-block.
    AlphaIndices,
    /// The two RGB565 endpoints of a DXT5 colour sub-block.
    ColourEndpoints,
    /// The 2-bit indices of a DXT5 colour sub-block.
    ColourIndices,
    /// Explicit 8-bit mask, 16 texels per block.
    Mask,
    /// A 4x4 tile of L8 texels.
    Luminance,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Commands => "command stream",
            Channel::AlphaEndpoints => "alpha endpoint stream",
            Channel::AlphaIndices => "alpha index stream",
            Channel::ColourEndpoints => "colour endpoint stream",
            Channel::ColourIndices => "colour index stream",
            Channel::Mask => "mask stream",
            Channel::Luminance => "luminance stream",
        };
        f.write_str(name)
    }
}

/// Where the bytes of a channel come from when encoding a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// A byte range of the texture block, starting at the given offset.
    Block(usize),
    /// The 16 byte mask block belonging to the same block position.
    Mask,
}

/// A payload stream and the bytes each block contributes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSpec {
    /// The semantic stream.
    pub channel: Channel,
    /// Bytes contributed per block.
    pub size: usize,
    /// Source of those bytes.
    pub source: FieldSource,
}

impl ChannelSpec {
    const fn block(channel: Channel, offset: usize, size: usize) -> Self {
        Self {
            channel,
            size,
            source: FieldSource::Block(offset),
        }
    }
}

/// What one opcode does for each block of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodePlan {
    /// Block emitted on decode before consumed fields are written into it.
    pub template: [u8; BLOCK_SIZE],
    /// Bit `n` is set when the channel at index `n` is consumed.
    pub consumes: u8,
}

impl OpcodePlan {
    /// Returns true if the channel at `index` is read (decode) or written (encode).
    #[inline(always)]
    pub const fn consumes(&self, index: usize) -> bool {
        self.consumes & (1 << index) != 0
    }
}

/// The three layouts the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// L8 tiles in a single stream.
    SingleChannel,
    /// DXT5 split into four streams, classified by block alpha (RLE2).
    FourChannelAlphaDerived,
    /// DXT5 split into four streams plus an explicit mask stream (RLES).
    FourChannelExplicitMask,
}

/// Describes the payload streams of a container and how each opcode uses them.
#[derive(Debug, PartialEq, Eq)]
pub struct ChannelLayout {
    /// Which layout this is.
    pub kind: LayoutKind,
    /// Payload streams, in descriptor and blob order.
    pub channels: &'static [ChannelSpec],
    skip: OpcodePlan,
    mixed: OpcodePlan,
    full: OpcodePlan,
}

const fn join(alpha: [u8; 8], colour: [u8; 8]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    let mut x = 0;
    while x < 8 {
        block[x] = alpha[x];
        block[x + 8] = colour[x];
        x += 1;
    }
    block
}

const DXT5_CHANNELS: [ChannelSpec; 4] = [
    ChannelSpec::block(Channel::ColourEndpoints, 8, 4),
    ChannelSpec::block(Channel::ColourIndices, 12, 4),
    ChannelSpec::block(Channel::AlphaEndpoints, 0, 2),
    ChannelSpec::block(Channel::AlphaIndices, 2, 6),
];

const DXT5_MASK_CHANNELS: [ChannelSpec; 5] = [
    DXT5_CHANNELS[0],
    DXT5_CHANNELS[1],
    DXT5_CHANNELS[2],
    DXT5_CHANNELS[3],
    ChannelSpec {
        channel: Channel::Mask,
        size: BLOCK_SIZE,
        source: FieldSource::Mask,
    },
];

const LUMINANCE_CHANNELS: [ChannelSpec; 1] =
    [ChannelSpec::block(Channel::Luminance, 0, BLOCK_SIZE)];

const COLOUR_FIELDS: u8 = 0b0011;
const BLOCK_FIELDS: u8 = 0b1111;
const MASK_FIELD: u8 = 0b1_0000;

static ALPHA_DERIVED: ChannelLayout = ChannelLayout {
    kind: LayoutKind::FourChannelAlphaDerived,
    channels: &DXT5_CHANNELS,
    skip: OpcodePlan {
        template: join(TRANSPARENT_ALPHA, TRANSPARENT_WHITE),
        consumes: 0,
    },
    mixed: OpcodePlan {
        template: [0; BLOCK_SIZE],
        consumes: BLOCK_FIELDS,
    },
    full: OpcodePlan {
        template: join(OPAQUE_ALPHA, [0; 8]),
        consumes: COLOUR_FIELDS,
    },
};

static EXPLICIT_MASK: ChannelLayout = ChannelLayout {
    kind: LayoutKind::FourChannelExplicitMask,
    channels: &DXT5_MASK_CHANNELS,
    skip: OpcodePlan {
        template: join(TRANSPARENT_ALPHA, TRANSPARENT_BLACK),
        consumes: 0,
    },
    mixed: OpcodePlan {
        template: [0; BLOCK_SIZE],
        consumes: BLOCK_FIELDS | MASK_FIELD,
    },
    // Full stores all four fields, alpha included; RLES has no canonical
    // opaque block.
    full: OpcodePlan {
        template: [0; BLOCK_SIZE],
        consumes: BLOCK_FIELDS,
    },
};

static SINGLE_CHANNEL: ChannelLayout = ChannelLayout {
    kind: LayoutKind::SingleChannel,
    channels: &LUMINANCE_CHANNELS,
    skip: OpcodePlan {
        template: [0x00; BLOCK_SIZE],
        consumes: 0,
    },
    mixed: OpcodePlan {
        template: [0x00; BLOCK_SIZE],
        consumes: 0b1,
    },
    full: OpcodePlan {
        template: [0xFF; BLOCK_SIZE],
        consumes: 0,
    },
};

impl ChannelLayout {
    /// Returns the static descriptor for a layout kind.
    pub fn for_kind(kind: LayoutKind) -> &'static ChannelLayout {
        match kind {
            LayoutKind::SingleChannel => &SINGLE_CHANNEL,
            LayoutKind::FourChannelAlphaDerived => &ALPHA_DERIVED,
            LayoutKind::FourChannelExplicitMask => &EXPLICIT_MASK,
        }
    }

    /// The plan for blocks of the given class.
    #[inline(always)]
    pub fn plan(&self, class: BlockClass) -> &OpcodePlan {
        match class {
            BlockClass::Skip => &self.skip,
            BlockClass::Mixed => &self.mixed,
            BlockClass::Full => &self.full,
        }
    }

    /// Index of the explicit mask stream, if this layout has one.
    pub fn mask_channel(&self) -> Option<usize> {
        self.channels
            .iter()
            .position(|spec| spec.source == FieldSource::Mask)
    }

    /// Size in bytes of one mip descriptor: the command offset plus one per stream.
    #[inline]
    pub fn descriptor_size(&self) -> usize {
        (self.channels.len() + 1) * 4
    }

    /// Rebuilds a block from the fields read for it.
    ///
    /// `fields[n]` holds the bytes read from channel `n`; it is only inspected
    /// when the plan for `class` consumes that channel.
    pub fn assemble(&self, class: BlockClass, fields: &[&[u8]; MAX_CHANNELS]) -> [u8; BLOCK_SIZE] {
        let plan = self.plan(class);
        let mut block = plan.template;
        for (index, spec) in self.channels.iter().enumerate() {
            if let FieldSource::Block(offset) = spec.source {
                if plan.consumes(index) {
                    block[offset..offset + spec.size].copy_from_slice(fields[index]);
                }
            }
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(LayoutKind::SingleChannel, 8)]
    #[case(LayoutKind::FourChannelAlphaDerived, 20)]
    #[case(LayoutKind::FourChannelExplicitMask, 24)]
    fn descriptor_sizes(#[case] kind: LayoutKind, #[case] expected: usize) {
        assert_eq!(ChannelLayout::for_kind(kind).descriptor_size(), expected);
    }

    #[rstest]
    #[case(LayoutKind::SingleChannel)]
    #[case(LayoutKind::FourChannelAlphaDerived)]
    #[case(LayoutKind::FourChannelExplicitMask)]
    fn block_fields_cover_whole_block(#[case] kind: LayoutKind) {
        let layout = ChannelLayout::for_kind(kind);
        let mut covered = [0u8; BLOCK_SIZE];
        for spec in layout.channels {
            if let FieldSource::Block(offset) = spec.source {
                for byte in &mut covered[offset..offset + spec.size] {
                    *byte += 1;
                }
            }
        }
        assert_eq!(covered, [1u8; BLOCK_SIZE]);
    }

    #[test]
    fn dxt5_streams_are_in_blob_order() {
        let channels: Vec<Channel> = ChannelLayout::for_kind(LayoutKind::FourChannelExplicitMask)
            .channels
            .iter()
            .map(|spec| spec.channel)
            .collect();
        assert_eq!(
            channels,
            vec![
                Channel::ColourEndpoints,
                Channel::ColourIndices,
                Channel::AlphaEndpoints,
                Channel::AlphaIndices,
                Channel::Mask,
            ]
        );
    }

    #[test]
    fn assemble_full_alpha_derived_uses_opaque_alpha() {
        let layout = ChannelLayout::for_kind(LayoutKind::FourChannelAlphaDerived);
        let endpoints = [1u8, 2, 3, 4];
        let indices = [5u8, 6, 7, 8];
        let fields: [&[u8]; MAX_CHANNELS] = [&endpoints, &indices, &[], &[], &[]];

        let block = layout.assemble(BlockClass::Full, &fields);
        assert_eq!(&block[..8], &OPAQUE_ALPHA);
        assert_eq!(&block[8..], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn mask_channel_only_in_explicit_layout() {
        assert_eq!(
            ChannelLayout::for_kind(LayoutKind::FourChannelExplicitMask).mask_channel(),
            Some(4)
        );
        assert_eq!(
            ChannelLayout::for_kind(LayoutKind::FourChannelAlphaDerived).mask_channel(),
            None
        );
        assert_eq!(
            ChannelLayout::for_kind(LayoutKind::SingleChannel).mask_channel(),
            None
        );
    }
}
