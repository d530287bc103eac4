//! Per-mip stream cursors.

use super::StreamOffsets;
use crate::error::{CodecError, CodecResult};
use crate::layout::{ChannelSpec, MAX_CHANNELS};
use core::ops::Range;
use likely_stable::unlikely;

/// Read positions into every channel stream while one mip is decoded.
///
/// Each cursor starts at the mip's descriptor and may advance up to the
/// next mip's descriptor. [`ChannelCursors::finish`] checks that every
/// cursor landed exactly there.
#[derive(Debug)]
pub struct ChannelCursors {
    mip: usize,
    channels: &'static [ChannelSpec],
    positions: [usize; MAX_CHANNELS],
    limits: [usize; MAX_CHANNELS],
}

impl ChannelCursors {
    /// Creates cursors for `mip`, bounded by the descriptor that follows it.
    pub fn new(
        mip: usize,
        channels: &'static [ChannelSpec],
        start: &StreamOffsets,
        end: &StreamOffsets,
    ) -> Self {
        Self {
            mip,
            channels,
            positions: start.channels,
            limits: end.channels,
        }
    }

    /// Current position of the cursor of channel `index`.
    #[inline]
    pub fn position(&self, index: usize) -> usize {
        self.positions[index]
    }

    /// Claims the next `length` bytes of channel `index`.
    ///
    /// # Errors
    ///
    /// [`CodecError::StreamOverrun`] if the read would pass the segment end.
    #[inline]
    pub fn take(&mut self, index: usize, length: usize) -> CodecResult<Range<usize>> {
        let cursor = self.positions[index];
        let end = self.limits[index];
        let next = cursor + length;
        if unlikely(next > end) {
            return Err(CodecError::StreamOverrun {
                mip: self.mip,
                channel: self.channels[index].channel,
                cursor,
                required: length,
                end,
            });
        }

        self.positions[index] = next;
        Ok(cursor..next)
    }

    /// Checks that every cursor ended on the next descriptor's offset.
    ///
    /// # Errors
    ///
    /// [`CodecError::StreamConsistency`] naming the first channel that ran short.
    pub fn finish(self) -> CodecResult<()> {
        for (index, spec) in self.channels.iter().enumerate() {
            if self.positions[index] != self.limits[index] {
                return Err(CodecError::StreamConsistency {
                    mip: self.mip,
                    channel: spec.channel,
                    expected: self.limits[index],
                    actual: self.positions[index],
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Channel, ChannelLayout, LayoutKind};

    fn cursors(start: usize, end: usize) -> ChannelCursors {
        let layout = ChannelLayout::for_kind(LayoutKind::SingleChannel);
        ChannelCursors::new(
            2,
            layout.channels,
            &StreamOffsets {
                command: 0,
                channels: [start, 0, 0, 0, 0],
            },
            &StreamOffsets {
                command: 0,
                channels: [end, 0, 0, 0, 0],
            },
        )
    }

    #[test]
    fn take_advances_until_limit() {
        let mut cursors = cursors(100, 132);
        assert_eq!(cursors.take(0, 16), Ok(100..116));
        assert_eq!(cursors.take(0, 16), Ok(116..132));
        assert_eq!(
            cursors.take(0, 16),
            Err(CodecError::StreamOverrun {
                mip: 2,
                channel: Channel::Luminance,
                cursor: 132,
                required: 16,
                end: 132,
            })
        );
        assert_eq!(cursors.finish(), Ok(()));
    }

    #[test]
    fn finish_reports_short_stream() {
        let mut cursors = cursors(100, 132);
        cursors.take(0, 16).unwrap();
        assert_eq!(
            cursors.finish(),
            Err(CodecError::StreamConsistency {
                mip: 2,
                channel: Channel::Luminance,
                expected: 132,
                actual: 116,
            })
        );
    }

    #[test]
    fn backwards_segment_is_inconsistent() {
        let cursors = cursors(132, 100);
        assert!(matches!(
            cursors.finish(),
            Err(CodecError::StreamConsistency { expected: 100, actual: 132, .. })
        ));
    }
}
