/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a DDS file.
pub mod likely_dds;

/// Validate a DDS header and locate its payload.
pub mod parse_dds;

/// Build DDS headers for decoded textures and masks.
pub mod write_dds;

pub use likely_dds::*;
pub use parse_dds::*;
pub use write_dds::*;
