//! File I/O implementation using lightweight-mmap.

use crate::file_io::FileOperationResult;
use crate::mask::MaskSource;
use crate::settings::{EncodeSettings, EncodeSettingsBuilder};
use crate::{api, ContainerInfo, ContainerVariant};
#[cfg(feature = "image")]
use alloc::vec::Vec;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Decode a container file into a DDS file.
///
/// # Arguments
///
/// * `input_path` - Path to the container
/// * `output_path` - Path to the DDS file (will be created). The output directory must exist.
pub fn decode_file(input_path: &Path, output_path: &Path) -> FileOperationResult<()> {
    let output = with_mapped_file(input_path, |input| Ok(api::decode(input)?))?;
    write_slice_to_file(&output, output_path)
}

/// Encode a DXT5 or L8 DDS file into a container file.
///
/// # Arguments
///
/// * `input_path` - Path to the DDS file
/// * `output_path` - Path to the container (will be created). The output directory must exist.
/// * `variant` - Container variant to produce
pub fn encode_file(
    input_path: &Path,
    output_path: &Path,
    variant: ContainerVariant,
) -> FileOperationResult<()> {
    let settings = EncodeSettingsBuilder::new().variant(variant).build();
    encode_file_with_settings(input_path, output_path, &settings)
}

/// [`encode_file`] driven by [`EncodeSettings`].
pub fn encode_file_with_settings(
    input_path: &Path,
    output_path: &Path,
    settings: &EncodeSettings,
) -> FileOperationResult<()> {
    let output = with_mapped_file(input_path, |input| {
        Ok(api::encode_with_settings(input, settings)?)
    })?;
    write_slice_to_file(&output, output_path)
}

/// Encode a DXT5 DDS file and a mask into an `RLES` container file.
///
/// A mask path ending in `.png` is read as an image (with the `image` feature);
/// anything else is read as a 32-bit BGRA DDS.
///
/// # Arguments
///
/// * `input_path` - Path to the DXT5 DDS file
/// * `mask_path` - Path to the mask image or DDS
/// * `output_path` - Path to the container (will be created). The output directory must exist.
/// * `settings` - Encode settings; only the downsample filter applies
pub fn encode_file_with_mask(
    input_path: &Path,
    mask_path: &Path,
    output_path: &Path,
    settings: &EncodeSettings,
) -> FileOperationResult<()> {
    #[cfg(feature = "image")]
    if is_png(mask_path) {
        let mask = image::open(mask_path)?.to_rgba8();
        let output = with_mapped_file(input_path, |input| {
            Ok(api::encode_with_mask_and_settings(
                input,
                MaskSource::Image(&mask),
                settings,
            )?)
        })?;
        return write_slice_to_file(&output, output_path);
    }

    let output = with_mapped_file(mask_path, |mask| {
        with_mapped_file(input_path, |input| {
            Ok(api::encode_with_mask_and_settings(
                input,
                MaskSource::Dds(mask),
                settings,
            )?)
        })
    })?;
    write_slice_to_file(&output, output_path)
}

/// Export the mask of an `RLES` container file.
///
/// An output path ending in `.png` receives mip 0 as a PNG image (with the
/// `image` feature); anything else receives the full mask chain as a 32-bit
/// BGRA DDS.
pub fn extract_mask_file(input_path: &Path, output_path: &Path) -> FileOperationResult<()> {
    #[cfg(feature = "image")]
    if is_png(output_path) {
        let image = with_mapped_file(input_path, |input| Ok(api::decode_mask_image(input)?))?;
        let mut png = Vec::new();
        image.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)?;
        return write_slice_to_file(&png, output_path);
    }

    let output = with_mapped_file(input_path, |input| Ok(api::decode_mask_dds(input)?))?;
    write_slice_to_file(&output, output_path)
}

/// Describe the layout of a container file.
pub fn inspect_file(input_path: &Path) -> FileOperationResult<ContainerInfo> {
    with_mapped_file(input_path, |input| Ok(api::inspect(input)?))
}

/// Write a slice to a new file, preallocated to the slice length.
///
/// # Arguments
///
/// * `data` - Bytes to write
/// * `output_path` - Path to the output file (will be created). The output directory must exist.
pub fn write_slice_to_file(data: &[u8], output_path: &Path) -> FileOperationResult<()> {
    let output_handle = ReadWriteFileHandle::create_preallocated(output_path, data.len() as i64)?;
    if data.is_empty() {
        return Ok(());
    }

    let mut output_mapping = ReadWriteMmap::new(&output_handle, 0, data.len())?;
    output_mapping.as_mut_slice().copy_from_slice(data);
    tracing::debug!(path = %output_path.display(), size = data.len(), "wrote output");
    Ok(())
}

/// Memory maps `path` read-only and hands its contents to `operation`.
fn with_mapped_file<T>(
    path: &Path,
    operation: impl FnOnce(&[u8]) -> FileOperationResult<T>,
) -> FileOperationResult<T> {
    let input_handle = ReadOnlyFileHandle::open(path)?;
    let input_size = input_handle.size()? as usize;
    if input_size == 0 {
        return operation(&[]);
    }

    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
    tracing::debug!(path = %path.display(), size = input_size, "mapped input");
    operation(input_mapping.as_slice())
}

#[cfg(feature = "image")]
fn is_png(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("png"))
}
