//! Mask inputs for `RLES` encoding.

use crate::error::{ApiError, ApiResult};
use alloc::vec::Vec;
use dxt_rle_codec::mask::build_mask_chain;
use dxt_rle_codec::mip::mask_mip_dimensions;
use dxt_rle_codec::{CodecError, DownsampleFilter, MaskPlane, TextureDescriptor};
use dxt_rle_dds::{parse_dds, DdsFormat};
#[cfg(feature = "image")]
use image::RgbaImage;

/// Where the explicit mask of an `RLES` container comes from.
///
/// Both sources reduce each pixel to gray as `(c0 + c1 + c2) / 3`, so an
/// image and a DDS holding the same content produce the same container.
#[derive(Debug, Clone, Copy)]
pub enum MaskSource<'a> {
    /// A single RGBA image the size of the texture. Lower mips are derived
    /// with the configured [`DownsampleFilter`].
    #[cfg(feature = "image")]
    Image(&'a RgbaImage),
    /// A 32-bit BGRA DDS carrying at least as many mips as the texture.
    Dds(&'a [u8]),
}

impl MaskSource<'_> {
    /// Produces one mask level per texture mip.
    ///
    /// # Errors
    ///
    /// - [`CodecError::DimensionMismatch`] if the mask size differs from the texture; checked first
    /// - [`ApiError::UnsupportedMaskFormat`] if a DDS mask is not 32-bit BGRA
    /// - [`CodecError::MaskMipCountMismatch`] if a DDS mask has fewer mips than the texture
    /// - [`CodecError::Truncated`] if a DDS mask payload is short
    pub(crate) fn mask_chain(
        &self,
        descriptor: &TextureDescriptor,
        filter: DownsampleFilter,
    ) -> ApiResult<Vec<MaskPlane>> {
        match *self {
            #[cfg(feature = "image")]
            MaskSource::Image(image) => {
                let (width, height) = (image.width() as usize, image.height() as usize);
                check_dimensions(descriptor, width, height)?;
                let base = MaskPlane::from_pixels(width, height, image.as_raw())?;
                Ok(build_mask_chain(
                    base,
                    descriptor.mip_count as usize,
                    filter,
                ))
            }
            MaskSource::Dds(data) => dds_mask_chain(descriptor, data),
        }
    }
}

fn dds_mask_chain(descriptor: &TextureDescriptor, data: &[u8]) -> ApiResult<Vec<MaskPlane>> {
    let info = parse_dds(data)?;
    let (width, height) = (info.width as usize, info.height as usize);
    check_dimensions(descriptor, width, height)?;
    if info.format != DdsFormat::Bgra8888 {
        return Err(ApiError::UnsupportedMaskFormat(info.format));
    }

    let mip_count = descriptor.mip_count as usize;
    if (info.mip_count as usize) < mip_count {
        return Err(CodecError::MaskMipCountMismatch {
            expected: mip_count,
            actual: info.mip_count as usize,
        }
        .into());
    }

    let mut payload = info.payload(data);
    let mut chain = Vec::with_capacity(mip_count);
    for level in 0..mip_count {
        let (level_width, level_height) = mask_mip_dimensions(width, height, level);
        let plane = MaskPlane::from_pixels(level_width, level_height, payload)?;
        payload = payload
            .get(level_width * level_height * 4..)
            .unwrap_or_default();
        chain.push(plane);
    }
    Ok(chain)
}

fn check_dimensions(
    descriptor: &TextureDescriptor,
    mask_width: usize,
    mask_height: usize,
) -> ApiResult<()> {
    let (width, height) = (descriptor.width as usize, descriptor.height as usize);
    if (mask_width, mask_height) != (width, height) {
        return Err(CodecError::DimensionMismatch {
            width,
            height,
            mask_width,
            mask_height,
        }
        .into());
    }
    Ok(())
}
