#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// DDS header parsing and writing.
pub mod dds;

mod error;

pub use dds::*;
pub use error::{DdsError, DdsResult};

#[cfg(test)]
pub mod test_prelude;
