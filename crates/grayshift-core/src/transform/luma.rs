//! BGR to gray conversion using ITU-R BT.601 luma weights.
//!
//! Weights are held in 14-bit fixed point so every platform produces the
//! same bytes for the same input.

use super::{validate, InvalidInputError};
use crate::decode::{ChannelLayout, PixelGrid};

/// Fixed-point precision of the luma weights.
pub const LUMA_SHIFT: u32 = 14;

/// BT.601 weight for blue (0.114).
pub const LUMA_B: u32 = 1868;

/// BT.601 weight for green (0.587).
pub const LUMA_G: u32 = 9617;

/// BT.601 weight for red (0.299).
pub const LUMA_R: u32 = 4899;

/// Luma of one BGR pixel, rounded half up.
#[inline]
pub fn luma_bgr(b: u8, g: u8, r: u8) -> u8 {
    let weighted = LUMA_B * u32::from(b) + LUMA_G * u32::from(g) + LUMA_R * u32::from(r);
    ((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

/// Convert a BGR grid to a single-channel grid of the same size.
///
/// # Errors
///
/// Returns `InvalidInputError::NotColor` for a gray input. Converting a
/// gray grid again is treated as a caller bug rather than a no-op.
pub fn grayscale(grid: &PixelGrid) -> Result<PixelGrid, InvalidInputError> {
    validate(grid)?;
    if grid.layout != ChannelLayout::Bgr {
        return Err(InvalidInputError::NotColor);
    }

    let pixels = grid
        .pixels
        .chunks_exact(3)
        .map(|px| luma_bgr(px[0], px[1], px[2]))
        .collect();

    Ok(PixelGrid::gray(grid.width, grid.height, pixels))
}
