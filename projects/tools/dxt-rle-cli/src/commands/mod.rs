use crate::error::CliError;
use dxt_rle_api::{ContainerVariant, DownsampleFilter};
use std::str::FromStr;

pub mod decode;
pub mod encode;
pub mod encode_mask;
pub mod extract_mask;
pub mod info;

/// Container variant selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantArg {
    /// Four streams, opacity derived from the texture alpha.
    Rle2,
    /// Five streams, with a mask derived from the texture alpha.
    Rles,
}

impl FromStr for VariantArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rle2" => Ok(Self::Rle2),
            "rles" => Ok(Self::Rles),
            _ => Err(format!(
                "Unknown variant: {s}. Valid options: rle2, rles"
            )),
        }
    }
}

impl From<VariantArg> for ContainerVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Rle2 => ContainerVariant::Rle2,
            VariantArg::Rles => ContainerVariant::Rles,
        }
    }
}

/// Mask downsample filter selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterArg {
    /// Rounded 2x2 average.
    Box,
    /// Top-left texel of each 2x2 neighbourhood.
    Nearest,
}

impl FromStr for FilterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "box" => Ok(Self::Box),
            "nearest" => Ok(Self::Nearest),
            _ => Err(format!("Unknown filter: {s}. Valid options: box, nearest")),
        }
    }
}

impl From<FilterArg> for DownsampleFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::Box => DownsampleFilter::Box,
            FilterArg::Nearest => DownsampleFilter::Nearest,
        }
    }
}

/// Turns a failure count into the command's result.
pub fn check_failures(failures: usize) -> Result<(), CliError> {
    match failures {
        0 => Ok(()),
        n => Err(CliError::Failed(n)),
    }
}
