//! Conversions between DDS files and containers.

use crate::error::{ApiError, ApiResult};
use crate::mask::MaskSource;
use crate::settings::{EncodeSettings, EncodeSettingsBuilder};
use alloc::vec::Vec;
use dxt_rle_codec::{
    ContainerHeader, ContainerInfo, ContainerVariant, PixelFormat, TextureDescriptor,
};
use dxt_rle_dds::{parse_dds, write_dds_header, DdsFormat};
#[cfg(feature = "image")]
use image::RgbaImage;

/// Decodes a container into a DDS file (header followed by the plain mip chain).
///
/// Skip and Full blocks come back as their canonical constants; Mixed blocks
/// are reproduced exactly.
///
/// # Errors
///
/// - [`ApiError::EmptyMipChain`] if the container holds no mips
/// - Any [`dxt_rle_codec::CodecError`] raised while decoding the container
pub fn decode(container: &[u8]) -> ApiResult<Vec<u8>> {
    let decoded = dxt_rle_codec::decode(container)?;
    let header = decoded.header;
    if header.mip_count == 0 {
        return Err(ApiError::EmptyMipChain);
    }
    let dds_header = write_dds_header(
        dds_format(header.format),
        header.width,
        header.height,
        header.mip_count as u32,
    );

    let mut output = Vec::with_capacity(dds_header.len() + decoded.data.len());
    output.extend_from_slice(&dds_header);
    output.extend_from_slice(&decoded.data);

    tracing::debug!(
        format = ?header.format,
        variant = ?header.variant,
        width = header.width,
        height = header.height,
        mips = header.mip_count,
        size = output.len(),
        "decoded container"
    );
    Ok(output)
}

/// Encodes a DXT5 or L8 DDS file into a container of the given variant.
///
/// Blocks are classified by their own alpha. An `RLES` container built this
/// way marks every Mixed block fully opaque in its mask. L8 textures are
/// always stored as `RLE2`.
///
/// # Errors
///
/// - [`ApiError::Dds`] if the DDS header is malformed
/// - [`ApiError::UnsupportedTextureFormat`] if the DDS is neither DXT5 nor L8
/// - [`dxt_rle_codec::CodecError::Truncated`] if the payload is shorter than the mip chain
pub fn encode(dds: &[u8], variant: ContainerVariant) -> ApiResult<Vec<u8>> {
    encode_with_settings(dds, &EncodeSettingsBuilder::new().variant(variant).build())
}

/// [`encode`] driven by [`EncodeSettings`].
pub fn encode_with_settings(dds: &[u8], settings: &EncodeSettings) -> ApiResult<Vec<u8>> {
    let (descriptor, plain) = read_texture(dds)?;
    let encoded = dxt_rle_codec::encode(&descriptor, plain, settings.variant)?;

    tracing::debug!(
        format = ?descriptor.format,
        variant = ?settings.variant,
        mips = descriptor.mip_count,
        input = dds.len(),
        output = encoded.len(),
        "encoded texture"
    );
    Ok(encoded)
}

/// Encodes a DXT5 DDS file into an `RLES` container whose mask comes from `mask`.
///
/// # Errors
///
/// - [`dxt_rle_codec::CodecError::DimensionMismatch`] if the mask size differs from the texture; checked before encoding
/// - [`ApiError::UnsupportedMaskFormat`] if a DDS mask is not 32-bit BGRA
/// - [`dxt_rle_codec::CodecError::MaskRequiresDxt5`] if the texture is L8
/// - Any error [`encode`] would raise
pub fn encode_with_mask(dds: &[u8], mask: MaskSource<'_>) -> ApiResult<Vec<u8>> {
    encode_with_mask_and_settings(dds, mask, &EncodeSettings::default())
}

/// [`encode_with_mask`] driven by [`EncodeSettings`].
///
/// Only [`EncodeSettings::filter`] applies; the variant is always `RLES`.
pub fn encode_with_mask_and_settings(
    dds: &[u8],
    mask: MaskSource<'_>,
    settings: &EncodeSettings,
) -> ApiResult<Vec<u8>> {
    let (descriptor, plain) = read_texture(dds)?;
    let masks = mask.mask_chain(&descriptor, settings.filter)?;
    let encoded = dxt_rle_codec::encode_with_mask(&descriptor, plain, &masks)?;

    tracing::debug!(
        width = descriptor.width,
        height = descriptor.height,
        mips = descriptor.mip_count,
        filter = ?settings.filter,
        output = encoded.len(),
        "encoded texture with explicit mask"
    );
    Ok(encoded)
}

/// Exports the mask of an `RLES` container as a 32-bit BGRA DDS mip chain.
///
/// Every texel `g` becomes the opaque pixel `(g, g, g, 255)`.
///
/// # Errors
///
/// - [`dxt_rle_codec::CodecError::NoMaskChannel`] for `RLE2` and L8 containers
/// - [`ApiError::EmptyMipChain`] if the container holds no mips
/// - Any [`dxt_rle_codec::CodecError`] raised while decoding the mask
pub fn decode_mask_dds(container: &[u8]) -> ApiResult<Vec<u8>> {
    let header = ContainerHeader::read(container)?;
    let planes = dxt_rle_codec::decode_mask(container)?;
    if planes.is_empty() {
        return Err(ApiError::EmptyMipChain);
    }
    let dds_header = write_dds_header(
        DdsFormat::Bgra8888,
        header.width,
        header.height,
        planes.len() as u32,
    );

    let payload_size: usize = planes.iter().map(|p| p.texels().len() * 4).sum();
    let mut output = Vec::with_capacity(dds_header.len() + payload_size);
    output.extend_from_slice(&dds_header);
    for plane in &planes {
        output.extend_from_slice(&plane.to_opaque_pixels());
    }

    tracing::debug!(
        width = header.width,
        height = header.height,
        mips = planes.len(),
        size = output.len(),
        "exported mask"
    );
    Ok(output)
}

/// Exports mip 0 of the mask of an `RLES` container as an RGBA image.
///
/// # Errors
///
/// - [`ApiError::EmptyMipChain`] if the container holds no mips
/// - Any error [`decode_mask_dds`] would raise
#[cfg(feature = "image")]
pub fn decode_mask_image(container: &[u8]) -> ApiResult<RgbaImage> {
    let planes = dxt_rle_codec::decode_mask(container)?;
    let Some(plane) = planes.first() else {
        return Err(ApiError::EmptyMipChain);
    };

    let width = plane.width();
    let texels = plane.texels();
    let image = RgbaImage::from_fn(width as u32, plane.height() as u32, |x, y| {
        let g = texels[y as usize * width + x as usize];
        image::Rgba([g, g, g, 255])
    });

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "exported mask image"
    );
    Ok(image)
}

/// Describes the layout of a container without decoding its blocks.
///
/// # Errors
///
/// Any [`dxt_rle_codec::CodecError`] raised while walking the command streams.
pub fn inspect(container: &[u8]) -> ApiResult<ContainerInfo> {
    let info = dxt_rle_codec::inspect(container)?;
    tracing::debug!(
        format = ?info.header.format,
        variant = ?info.header.variant,
        mips = info.mips.len(),
        size = info.size,
        "inspected container"
    );
    Ok(info)
}

/// Parses a texture DDS into a codec descriptor and its plain mip chain.
fn read_texture(dds: &[u8]) -> ApiResult<(TextureDescriptor, &[u8])> {
    let info = parse_dds(dds)?;
    let format = match info.format {
        DdsFormat::Dxt5 => PixelFormat::Dxt5,
        DdsFormat::Luminance8 => PixelFormat::Luminance8,
        other => return Err(ApiError::UnsupportedTextureFormat(other)),
    };

    let descriptor = TextureDescriptor::new(format, info.width, info.height, info.mip_count as u16);
    Ok((descriptor, info.payload(dds)))
}

#[inline]
fn dds_format(format: PixelFormat) -> DdsFormat {
    match format {
        PixelFormat::Dxt5 => DdsFormat::Dxt5,
        PixelFormat::Luminance8 => DdsFormat::Luminance8,
    }
}
