//! Fixed global threshold.

use super::{grayscale, InvalidInputError};
use crate::config::BW_THRESHOLD;
use crate::decode::PixelGrid;

/// Map one gray sample to pure black or white.
#[inline]
pub fn binarize(value: u8) -> u8 {
    if value > BW_THRESHOLD {
        255
    } else {
        0
    }
}

/// Grayscale, then threshold at [`BW_THRESHOLD`].
///
/// The output contains only the values 0 and 255.
pub fn black_white(grid: &PixelGrid) -> Result<PixelGrid, InvalidInputError> {
    let mut gray = grayscale(grid)?;
    for v in gray.pixels.iter_mut() {
        *v = binarize(*v);
    }
    Ok(gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ChannelLayout;
    use crate::fixtures::gradient_grid;

    #[test]
    fn test_binarize_boundary() {
        assert_eq!(binarize(0), 0);
        assert_eq!(binarize(127), 0);
        assert_eq!(binarize(128), 255);
        assert_eq!(binarize(255), 255);
    }

    #[test]
    fn test_black_white_matches_grayscale() {
        let grid = gradient_grid(40, 30);
        let gray = grayscale(&grid).unwrap();
        let bw = black_white(&grid).unwrap();

        assert_eq!(bw.layout, ChannelLayout::Gray);
        assert_eq!((bw.width, bw.height), (40, 30));
        for (g, b) in gray.pixels.iter().zip(&bw.pixels) {
            assert_eq!(*b, if *g > 127 { 255 } else { 0 });
        }
    }

    #[test]
    fn test_black_white_mid_gray() {
        // 127 stays black, 128 turns white
        let grid = PixelGrid::bgr(2, 1, vec![127, 127, 127, 128, 128, 128]);
        let bw = black_white(&grid).unwrap();
        assert_eq!(bw.pixels, vec![0, 255]);
    }
}
