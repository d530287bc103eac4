#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod api;
pub mod error;
pub mod mask;
pub mod settings;

#[cfg(feature = "file-io")]
pub mod file_io;

// Re-export key types
pub use error::{ApiError, ApiResult};
pub use mask::MaskSource;
pub use settings::{EncodeSettings, EncodeSettingsBuilder};

// Re-export file operation types when file-io feature is enabled
#[cfg(feature = "file-io")]
pub use file_io::{FileOperationError, FileOperationResult};

// Re-export convenience functions
pub use api::{
    decode, decode_mask_dds, encode, encode_with_mask, encode_with_mask_and_settings,
    encode_with_settings, inspect,
};
#[cfg(feature = "image")]
pub use api::decode_mask_image;

// Types callers need without depending on the lower crates directly.
pub use dxt_rle_codec::{ContainerInfo, ContainerVariant, DownsampleFilter, MipSummary};

#[cfg(test)]
pub mod test_prelude;
