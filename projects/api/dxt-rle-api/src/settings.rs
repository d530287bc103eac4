//! Builder for encode configuration.

use dxt_rle_codec::{ContainerVariant, DownsampleFilter};

/// Settings applied when encoding a DDS file into a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    /// Variant of the produced container. Ignored for L8 textures, which are
    /// always `RLE2`, and for explicit masks, which are always `RLES`.
    pub variant: ContainerVariant,
    /// Filter used to derive lower mask mips from a single mask image.
    pub filter: DownsampleFilter,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        EncodeSettingsBuilder::new().build()
    }
}

/// Builds [`EncodeSettings`].
///
/// ```
/// use dxt_rle_api::{ContainerVariant, DownsampleFilter, EncodeSettingsBuilder};
///
/// let settings = EncodeSettingsBuilder::new()
///     .variant(ContainerVariant::Rles)
///     .filter(DownsampleFilter::Nearest)
///     .build();
/// assert_eq!(settings.variant, ContainerVariant::Rles);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeSettingsBuilder {
    variant: Option<ContainerVariant>,
    filter: Option<DownsampleFilter>,
}

impl EncodeSettingsBuilder {
    /// Create a new builder with every setting at its default.
    pub fn new() -> Self {
        Self {
            variant: None,
            filter: None,
        }
    }

    /// Set the container variant. Defaults to [`ContainerVariant::Rle2`].
    pub fn variant(mut self, variant: ContainerVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the mask downsample filter. Defaults to [`DownsampleFilter::Box`].
    pub fn filter(mut self, filter: DownsampleFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Build the settings.
    pub fn build(self) -> EncodeSettings {
        EncodeSettings {
            variant: self.variant.unwrap_or(ContainerVariant::Rle2),
            filter: self.filter.unwrap_or_default(),
        }
    }
}
