//! Errors raised by the file functions.

use crate::error::ApiError;
use lightweight_mmap::handles::HandleOpenError;
use lightweight_mmap::mmap::MmapError;
use thiserror::Error;

/// Result type for file operations
pub type FileOperationResult<T> = Result<T, FileOperationError>;

/// Failure of a file function.
///
/// Outputs are only created after the in-memory operation succeeded, so an
/// [`FileOperationError::Api`] or [`FileOperationError::Image`] never leaves a file behind.
#[derive(Debug, Error)]
pub enum FileOperationError {
    /// The input could not be opened or the output could not be created
    #[error("Failed to open file: {0}")]
    Open(#[from] HandleOpenError),

    /// An opened file could not be memory mapped
    #[error("Failed to map file: {0}")]
    Map(#[from] MmapError),

    /// The container, texture or mask was rejected
    #[error("Codec operation failed: {0}")]
    Api(#[from] ApiError),

    /// A PNG mask could not be read or written
    #[cfg(feature = "image")]
    #[error("Image operation failed: {0}")]
    Image(#[from] image::ImageError),
}
