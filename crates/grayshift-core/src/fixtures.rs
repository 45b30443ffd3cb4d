//! Test image builders shared by the unit tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::decode::PixelGrid;

/// Horizontal red ramp, vertical green ramp, constant blue.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            128,
        ])
    })
}

/// BGR grid with the same content as [`gradient_rgb`].
pub fn gradient_grid(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_rgb_image(gradient_rgb(width, height))
}

/// Encode an RGB image into the given container.
pub fn encode_fixture(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let dynamic = match format {
        // The GIF encoder wants RGBA input
        ImageFormat::Gif => DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(img.clone()).to_rgba8()),
        _ => DynamicImage::ImageRgb8(img.clone()),
    };

    let mut buffer = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut buffer, format)
        .expect("fixture encoding should succeed");
    buffer.into_inner()
}
