//! Error types for DDS level container operations.

use dxt_rle_codec::CodecError;
use dxt_rle_dds::{DdsError, DdsFormat};
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while converting between DDS files and containers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The container codec rejected the input.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The DDS header is malformed.
    #[error(transparent)]
    Dds(#[from] DdsError),

    /// The texture DDS is neither DXT5 nor L8.
    #[error("Unsupported texture pixel format {0:?}, expected DXT5 or L8")]
    UnsupportedTextureFormat(DdsFormat),

    /// The mask DDS is not 32-bit BGRA.
    #[error("Unsupported mask pixel format {0:?}, expected 32-bit BGRA")]
    UnsupportedMaskFormat(DdsFormat),

    /// The container holds no mips, which a DDS file cannot express.
    #[error("Container has no mips to export")]
    EmptyMipChain,
}
