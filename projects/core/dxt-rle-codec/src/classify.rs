//! Block classification.
//!
//! Every block of a mip is assigned one of three classes, which double as the
//! command opcodes:
//!
//! - [`BlockClass::Skip`]: uniform minimum, stored without payload.
//! - [`BlockClass::Full`]: uniform maximum, stored with the fields the layout keeps for it.
//! - [`BlockClass::Mixed`]: anything else, stored with the full payload.
//!
//! Tests run in that order, so a block that passes the Skip test is never
//! considered for Full.

use crate::alpha::AlphaBlock;
use crate::mip::BLOCK_SIZE;

/// Classification of a single block; the discriminant is the command opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockClass {
    /// Uniform zero. Opcode 0.
    Skip = 0,
    /// Neither uniform extreme. Opcode 1.
    Mixed = 1,
    /// Uniform maximum. Opcode 2.
    Full = 2,
}

impl BlockClass {
    /// The 2-bit opcode written to the command stream.
    #[inline(always)]
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Parses a 2-bit opcode; opcode 3 is reserved and yields [`None`].
    #[inline(always)]
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            0 => Some(Self::Skip),
            1 => Some(Self::Mixed),
            2 => Some(Self::Full),
            _ => None,
        }
    }
}

/// Classifies a block of single-channel bytes (L8 tile or mask block).
///
/// All `0x00` is [`BlockClass::Skip`], all `0xFF` is [`BlockClass::Full`].
#[inline]
pub fn classify_uniform(block: &[u8; BLOCK_SIZE]) -> BlockClass {
    if block.iter().all(|&x| x == 0x00) {
        BlockClass::Skip
    } else if block.iter().all(|&x| x == 0xFF) {
        BlockClass::Full
    } else {
        BlockClass::Mixed
    }
}

/// Classifies a DXT5 block by the 16 alpha values it decodes to.
///
/// No non-zero alpha is [`BlockClass::Skip`], every alpha at `0xFF` is [`BlockClass::Full`].
#[inline]
pub fn classify_alpha(block: &[u8; BLOCK_SIZE]) -> BlockClass {
    let alpha = AlphaBlock::from_dxt5_block(block);
    if !alpha.any(|a| a != 0) {
        BlockClass::Skip
    } else if alpha.all(|a| a == 0xFF) {
        BlockClass::Full
    } else {
        BlockClass::Mixed
    }
}
