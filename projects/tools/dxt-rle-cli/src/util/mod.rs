mod core;
mod throughput;

pub use core::*;
pub use throughput::*;
