//! Conversion modes and the single `convert` entry point.

use serde::{Deserialize, Serialize};

use super::{black_white, gray_half, gray_quarter, grayscale, InvalidInputError};
use crate::decode::PixelGrid;

/// The fixed set of conversions offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    Grayscale,
    BlackWhite,
    GrayHalf,
    GrayQuarter,
}

impl ConversionMode {
    /// All modes in button order.
    pub const ALL: [ConversionMode; 4] = [
        ConversionMode::Grayscale,
        ConversionMode::BlackWhite,
        ConversionMode::GrayHalf,
        ConversionMode::GrayQuarter,
    ];

    /// Mode for a button index (0-3).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Stable identifier, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            ConversionMode::Grayscale => "grayscale",
            ConversionMode::BlackWhite => "black_white",
            ConversionMode::GrayHalf => "gray_half",
            ConversionMode::GrayQuarter => "gray_quarter",
        }
    }

    /// Human-readable name for buttons and headings.
    pub fn label(self) -> &'static str {
        match self {
            ConversionMode::Grayscale => "Grayscale",
            ConversionMode::BlackWhite => "Black and White",
            ConversionMode::GrayHalf => "Gray 1/2",
            ConversionMode::GrayQuarter => "Gray 1/4",
        }
    }

    /// Integer downsample factor applied after grayscale.
    pub fn divisor(self) -> u32 {
        match self {
            ConversionMode::Grayscale | ConversionMode::BlackWhite => 1,
            ConversionMode::GrayHalf => 2,
            ConversionMode::GrayQuarter => 4,
        }
    }

    /// Output dimensions for an input of the given size.
    pub fn output_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        super::scaled_dimensions(width, height, self.divisor())
    }
}

/// Run one conversion on a decoded grid.
///
/// The input is never modified; each call allocates a fresh output grid, so
/// repeated calls with the same grid and mode return identical results.
pub fn convert(grid: &PixelGrid, mode: ConversionMode) -> Result<PixelGrid, InvalidInputError> {
    let output = match mode {
        ConversionMode::Grayscale => grayscale(grid)?,
        ConversionMode::BlackWhite => black_white(grid)?,
        ConversionMode::GrayHalf => gray_half(grid)?,
        ConversionMode::GrayQuarter => gray_quarter(grid)?,
    };

    tracing::debug!(
        mode = mode.id(),
        in_width = grid.width,
        in_height = grid.height,
        out_width = output.width,
        out_height = output.height,
        "converted"
    );

    Ok(output)
}
