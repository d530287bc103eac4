//! Container layout: header, mip descriptor table and stream segments.
//!
//! ```text
//! [ header (16) ]
//! [ descriptor mip 0 ] ... [ descriptor mip n-1 ]   (descriptor_size bytes each)
//! [ command stream ]
//! [ channel stream 0 ] ... [ channel stream k ]     (layout blob order)
//! ```
//!
//! A descriptor holds the absolute offset at which each stream's segment for
//! that mip starts. The segment ends where the next mip's segment starts. The
//! last mip ends at a synthetic descriptor: every stream ends where the next
//! stream starts (taken from mip 0), the last one at the end of the blob.

mod cursors;
mod header;

pub use cursors::ChannelCursors;
pub use header::{ContainerHeader, HEADER_SIZE};

use crate::error::{CodecError, CodecResult};
use crate::layout::{Channel, ChannelLayout, MAX_CHANNELS};
use alloc::vec::Vec;
use header::read_u32;

/// Start offsets of one mip's segment in every stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamOffsets {
    /// Offset of the command segment.
    pub command: usize,
    /// Offset of each channel segment, in layout order. Unused entries are 0.
    pub channels: [usize; MAX_CHANNELS],
}

impl StreamOffsets {
    /// Appends this descriptor to `out` as `1 + channel_count` little endian `u32`s.
    pub fn write(&self, channel_count: usize, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.command as u32).to_le_bytes());
        for &offset in &self.channels[..channel_count] {
            out.extend_from_slice(&(offset as u32).to_le_bytes());
        }
    }

    /// Returns a copy with every used offset moved by the matching base.
    pub fn biased(&self, command_base: usize, channel_bases: &[usize; MAX_CHANNELS]) -> Self {
        let mut channels = self.channels;
        for (offset, base) in channels.iter_mut().zip(channel_bases) {
            *offset += base;
        }
        Self {
            command: self.command + command_base,
            channels,
        }
    }
}

/// A parsed, bounds-checked view over an encoded container.
#[derive(Debug)]
pub struct ContainerView<'a> {
    /// The validated header.
    pub header: ContainerHeader,
    /// Layout of the container's streams.
    pub layout: &'static ChannelLayout,
    data: &'a [u8],
    descriptors: Vec<StreamOffsets>,
}

impl<'a> ContainerView<'a> {
    /// Parses the header and descriptor table of `data`.
    ///
    /// Every offset is checked to lie within `data`; stream contents are not
    /// inspected.
    ///
    /// # Errors
    ///
    /// - Header errors from [`ContainerHeader::read`]
    /// - [`CodecError::Truncated`] if the descriptor table does not fit
    /// - [`CodecError::OffsetOutOfBounds`] if an offset points past the end
    pub fn parse(data: &'a [u8]) -> CodecResult<Self> {
        let header = ContainerHeader::read(data)?;
        let layout = header.layout();
        let mip_count = header.mip_count as usize;
        let descriptor_size = layout.descriptor_size();
        let channel_count = layout.channels.len();

        let table_end = HEADER_SIZE + mip_count * descriptor_size;
        if data.len() < table_end {
            return Err(CodecError::Truncated {
                what: "mip descriptor table",
                required: table_end,
                actual: data.len(),
            });
        }

        let check = |mip: usize, channel: Channel, offset: u32| -> CodecResult<usize> {
            let offset = offset as usize;
            if offset > data.len() {
                return Err(CodecError::OffsetOutOfBounds {
                    mip,
                    channel,
                    offset,
                    length: data.len(),
                });
            }
            Ok(offset)
        };

        let mut descriptors = Vec::with_capacity(mip_count + 1);
        for mip in 0..mip_count {
            let base = HEADER_SIZE + mip * descriptor_size;
            let mut descriptor = StreamOffsets {
                command: check(mip, Channel::Commands, read_u32(data, base))?,
                ..StreamOffsets::default()
            };
            for (index, spec) in layout.channels.iter().enumerate() {
                let raw = read_u32(data, base + 4 + index * 4);
                descriptor.channels[index] = check(mip, spec.channel, raw)?;
            }
            descriptors.push(descriptor);
        }

        if let Some(first) = descriptors.first() {
            let mut end = StreamOffsets {
                command: first.channels[0],
                ..StreamOffsets::default()
            };
            for index in 0..channel_count {
                end.channels[index] = if index + 1 < channel_count {
                    first.channels[index + 1]
                } else {
                    data.len()
                };
            }
            descriptors.push(end);
        }

        Ok(Self {
            header,
            layout,
            data,
            descriptors,
        })
    }

    /// The whole encoded container.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Number of mips.
    #[inline]
    pub fn mip_count(&self) -> usize {
        self.header.mip_count as usize
    }

    /// Descriptor of `mip`, or the synthetic end descriptor for `mip == mip_count`.
    #[inline]
    pub fn descriptor(&self, mip: usize) -> &StreamOffsets {
        &self.descriptors[mip]
    }

    /// The command segment of `mip`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::StreamConsistency`] if the segment ends before it starts
    /// - [`CodecError::OddCommandSegment`] if it is not a whole number of commands
    pub fn command_segment(&self, mip: usize) -> CodecResult<&'a [u8]> {
        let start = self.descriptors[mip].command;
        let end = self.descriptors[mip + 1].command;
        if end < start {
            return Err(CodecError::StreamConsistency {
                mip,
                channel: Channel::Commands,
                expected: end,
                actual: start,
            });
        }
        if (end - start) % 2 != 0 {
            return Err(CodecError::OddCommandSegment {
                mip,
                length: end - start,
            });
        }
        Ok(&self.data[start..end])
    }

    /// Fresh cursors over the channel segments of `mip`.
    pub fn cursors(&self, mip: usize) -> ChannelCursors {
        ChannelCursors::new(
            mip,
            self.layout.channels,
            &self.descriptors[mip],
            &self.descriptors[mip + 1],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    /// L8 container with two mips: 1 Skip command each, no luminance bytes.
    fn two_skip_mips() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"L8  RLE2");
        data.extend_from_slice(&4u16.to_le_bytes());
        data.extend_from_slice(&4u16.to_le_bytes());
        data.extend_from_slice(&2u16.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        // commands start at 32, luminance at 36
        for (command, luminance) in [(32u32, 36u32), (34, 36)] {
            data.extend_from_slice(&command.to_le_bytes());
            data.extend_from_slice(&luminance.to_le_bytes());
        }
        data.extend_from_slice(&[0x04, 0x00, 0x04, 0x00]);
        data
    }

    #[test]
    fn end_descriptor_is_derived_from_first_mip() {
        let data = two_skip_mips();
        let view = ContainerView::parse(&data).unwrap();
        assert_eq!(view.mip_count(), 2);
        assert_eq!(
            view.descriptor(2),
            &StreamOffsets {
                command: 36,
                channels: [36, 0, 0, 0, 0],
            }
        );
        assert_eq!(view.command_segment(0).unwrap(), &[0x04, 0x00]);
        assert_eq!(view.command_segment(1).unwrap(), &[0x04, 0x00]);
    }

    #[test]
    fn truncated_table_is_rejected() {
        let data = two_skip_mips();
        assert_eq!(
            ContainerView::parse(&data[..20]).unwrap_err(),
            CodecError::Truncated {
                what: "mip descriptor table",
                required: 32,
                actual: 20,
            }
        );
    }

    #[test]
    fn offsets_past_end_are_rejected() {
        let mut data = two_skip_mips();
        data[28..32].copy_from_slice(&100u32.to_le_bytes());
        assert_eq!(
            ContainerView::parse(&data).unwrap_err(),
            CodecError::OffsetOutOfBounds {
                mip: 1,
                channel: Channel::Luminance,
                offset: 100,
                length: 36,
            }
        );
    }

    #[test]
    fn odd_command_segment_is_rejected() {
        let mut data = two_skip_mips();
        data[24..28].copy_from_slice(&33u32.to_le_bytes());
        let view = ContainerView::parse(&data).unwrap();
        assert_eq!(
            view.command_segment(0),
            Err(CodecError::OddCommandSegment { mip: 0, length: 1 })
        );
    }

    #[test]
    fn header_only_container_has_no_descriptors() {
        let mut data = Vec::new();
        ContainerHeader {
            format: crate::PixelFormat::Dxt5,
            variant: crate::ContainerVariant::Rle2,
            width: 4,
            height: 4,
            mip_count: 0,
        }
        .write(&mut data);
        let view = ContainerView::parse(&data).unwrap();
        assert_eq!(view.mip_count(), 0);
    }

    #[test]
    fn biased_offsets_shift_every_stream() {
        let relative = StreamOffsets {
            command: 2,
            channels: [4, 8, 0, 0, 0],
        };
        let biased = relative.biased(40, &[100, 200, 0, 0, 0]);
        assert_eq!(biased.command, 42);
        assert_eq!(biased.channels, [104, 208, 0, 0, 0]);

        let mut out = Vec::new();
        biased.write(2, &mut out);
        assert_eq!(out.len(), 12);
        assert_eq!(read_u32(&out, 8), 208);
    }
}
