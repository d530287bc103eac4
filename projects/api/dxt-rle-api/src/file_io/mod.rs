//! File I/O operations for containers, DDS files and mask images.
//!
//! Inputs are memory mapped using `lightweight-mmap`. Each output is only
//! created once the in-memory operation succeeded, preallocated at its final
//! size and then filled.

mod error;
pub use error::*;

#[cfg(feature = "lightweight-mmap")]
mod lightweight_mmap_impl;

// Public API lives in there.
// If adding alternative implementation, you need to swap it out.
#[cfg(feature = "lightweight-mmap")]
pub use lightweight_mmap_impl::*;

#[cfg(not(feature = "lightweight-mmap"))]
compile_error!("The 'lightweight-mmap' feature must be enabled for file I/O operations.");
