//! Container to plain texture and mask decoding.

use super::walk_mip;
use super::TextureDescriptor;
use crate::classify::BlockClass;
use crate::container::{ContainerHeader, ContainerView};
use crate::error::{CodecError, CodecResult};
use crate::format::PixelFormat;
use crate::mask::MaskPlane;
use crate::mip::{blocks_for, mask_mip_dimensions, texture_mip_dimensions, BLOCK_SIZE};
use crate::tile::untile_plane;
use alloc::vec::Vec;

/// A plain mip chain recovered from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTexture {
    /// Header of the source container.
    pub header: ContainerHeader,
    /// All mips back to back: DXT5 blocks, or L8 texels in scanline order.
    pub data: Vec<u8>,
}

impl DecodedTexture {
    /// Describes the decoded data for re-encoding.
    pub fn descriptor(&self) -> TextureDescriptor {
        TextureDescriptor::new(
            self.header.format,
            self.header.width,
            self.header.height,
            self.header.mip_count,
        )
    }
}

/// Decodes a container into its plain mip chain.
///
/// Mixed blocks come back exactly as encoded; Skip and Full blocks come back
/// as the layout's canonical blocks.
///
/// # Errors
///
/// Any [`CodecError`] raised while parsing the container or replaying a mip.
/// Nothing is returned for a partially decoded container.
pub fn decode(encoded: &[u8]) -> CodecResult<DecodedTexture> {
    let view = ContainerView::parse(encoded)?;
    let header = view.header;
    let layout = view.layout;
    let (width, height) = (header.width as usize, header.height as usize);
    tracing::debug!(
        format = ?header.format,
        variant = ?header.variant,
        width,
        height,
        mips = header.mip_count,
        "decoding container"
    );

    // Sized by the blocks the streams hold, never by the header dimensions.
    let mut data = Vec::new();
    let mut tiles = Vec::new();
    for mip in 0..view.mip_count() {
        let (w, h) = texture_mip_dimensions(width, height, mip);
        let blocks = blocks_for(w, h);

        match header.format {
            PixelFormat::Dxt5 => {
                walk_mip(&view, mip, blocks, |class, fields| {
                    data.extend_from_slice(&layout.assemble(class, fields));
                })?;
            }
            PixelFormat::Luminance8 => {
                tiles.clear();
                walk_mip(&view, mip, blocks, |class, fields| {
                    tiles.extend_from_slice(&layout.assemble(class, fields));
                })?;
                untile_plane(&tiles, w, h, &mut data);
            }
        }
    }

    Ok(DecodedTexture { header, data })
}

/// Decodes the explicit mask channel of a container, one plane per mip.
///
/// Skip blocks yield `0x00` texels, Full blocks `0xFF`, Mixed blocks the
/// stored mask bytes. Planes use the mask mip dimensions, `max(1, base >> k)`.
///
/// # Errors
///
/// - [`CodecError::NoMaskChannel`] if the layout has no mask stream
/// - Any error [`decode`] would raise for the same container
pub fn decode_mask(encoded: &[u8]) -> CodecResult<Vec<MaskPlane>> {
    let view = ContainerView::parse(encoded)?;
    let header = view.header;
    let Some(mask_index) = view.layout.mask_channel() else {
        return Err(CodecError::NoMaskChannel(header.variant));
    };

    let (width, height) = (header.width as usize, header.height as usize);
    let mut planes = Vec::with_capacity(view.mip_count());
    let mut tiles = Vec::new();
    for mip in 0..view.mip_count() {
        let (tw, th) = texture_mip_dimensions(width, height, mip);
        tiles.clear();
        walk_mip(&view, mip, blocks_for(tw, th), |class, fields| match class {
            BlockClass::Skip => tiles.extend_from_slice(&[0x00; BLOCK_SIZE]),
            BlockClass::Full => tiles.extend_from_slice(&[0xFF; BLOCK_SIZE]),
            BlockClass::Mixed => tiles.extend_from_slice(fields[mask_index]),
        })?;

        let (w, h) = mask_mip_dimensions(width, height, mip);
        let mut texels = Vec::with_capacity(w * h);
        untile_plane(&tiles, w, h, &mut texels);
        planes.push(MaskPlane::new(w, h, texels)?);
    }

    tracing::debug!(mips = planes.len(), width, height, "decoded mask");
    Ok(planes)
}
