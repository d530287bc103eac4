//! Run-length command stream.
//!
//! Each command is a little endian `u16`:
//!
//! ```text
//! bits 0..2   opcode (0 = Skip, 1 = Mixed, 2 = Full, 3 = invalid)
//! bits 2..16  run length in blocks
//! ```
//!
//! Runs longer than [`MAX_RUN_LENGTH`] are written as several commands with
//! the same opcode.

use crate::classify::BlockClass;
use alloc::vec::Vec;

/// Largest run a single command can describe.
pub const MAX_RUN_LENGTH: u16 = 0x3FFF;

/// A single run of equally classified blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunCommand {
    /// Class shared by every block of the run.
    pub class: BlockClass,
    /// Number of blocks, at most [`MAX_RUN_LENGTH`].
    pub count: u16,
}

impl RunCommand {
    /// Packs the command into its 16-bit wire form.
    #[inline(always)]
    pub const fn pack(self) -> u16 {
        (self.count << 2) | self.class.opcode() as u16
    }

    /// Unpacks a 16-bit command.
    ///
    /// # Returns
    ///
    /// The command, or the reserved opcode (3) as the error value.
    #[inline(always)]
    pub const fn unpack(raw: u16) -> Result<Self, u8> {
        let opcode = (raw & 0b11) as u8;
        match BlockClass::from_opcode(opcode) {
            Some(class) => Ok(Self {
                class,
                count: raw >> 2,
            }),
            None => Err(opcode),
        }
    }
}

/// Groups `classes` into maximal runs capped at [`MAX_RUN_LENGTH`] and
/// appends one command per run to `out`.
///
/// # Returns
///
/// The number of commands written.
pub fn encode_runs(classes: &[BlockClass], out: &mut Vec<u8>) -> usize {
    let mut written = 0;
    let mut rest = classes;
    while let Some(&class) = rest.first() {
        let run = rest
            .iter()
            .take(MAX_RUN_LENGTH as usize)
            .take_while(|&&x| x == class)
            .count();

        let command = RunCommand {
            class,
            count: run as u16,
        };
        out.extend_from_slice(&command.pack().to_le_bytes());
        written += 1;
        rest = &rest[run..];
    }
    written
}

/// Iterates over the commands of a command segment.
///
/// A trailing odd byte is not yielded; callers validate segment length first.
pub struct CommandReader<'a> {
    bytes: core::slice::ChunksExact<'a, u8>,
}

impl<'a> CommandReader<'a> {
    /// Creates a reader over a command segment.
    pub fn new(segment: &'a [u8]) -> Self {
        Self {
            bytes: segment.chunks_exact(2),
        }
    }
}

impl Iterator for CommandReader<'_> {
    /// The command, or the raw `u16` when it carries the reserved opcode.
    type Item = Result<RunCommand, u16>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.bytes.next()?;
        let raw = u16::from_le_bytes([pair[0], pair[1]]);
        Some(RunCommand::unpack(raw).map_err(|_| raw))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}
