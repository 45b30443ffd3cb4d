//! Upload decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};

use super::{DecodeError, DecodeLimits, Orientation, PixelGrid, UploadFormat};

/// Decode an uploaded image into a BGR pixel grid.
///
/// The container is identified from its magic bytes and must be JPEG, PNG or
/// GIF. EXIF orientation is applied when present, alpha is discarded and
/// gray or palette sources are expanded to three channels. For animated GIFs
/// only the first frame is decoded.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for an empty buffer.
/// Returns `DecodeError::TooLarge` if the buffer or the decoded dimensions
/// exceed `limits`.
/// Returns `DecodeError::UnsupportedFormat` if the container is not supported.
/// Returns `DecodeError::Corrupted` if the image data is malformed.
pub fn decode(bytes: &[u8], limits: &DecodeLimits) -> Result<PixelGrid, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    if bytes.len() > limits.max_bytes {
        return Err(DecodeError::TooLarge(format!(
            "{} bytes exceeds limit of {} bytes",
            bytes.len(),
            limits.max_bytes
        )));
    }

    let format = UploadFormat::sniff(bytes).ok_or(DecodeError::UnsupportedFormat)?;
    let orientation = extract_orientation(bytes);

    let mut reader = ImageReader::with_format(Cursor::new(bytes), format.to_image_format());
    reader.limits(limits.to_image_limits());
    let img = reader.decode().map_err(map_image_error)?;

    let grid = PixelGrid::from_rgb_image(apply_orientation(img, orientation).into_rgb8());

    tracing::debug!(
        ?format,
        ?orientation,
        width = grid.width,
        height = grid.height,
        "decoded upload"
    );

    Ok(grid)
}

/// Decode an upload after checking its declared file name.
///
/// Files whose extension is not `jpg`, `jpeg`, `png` or `gif` are rejected
/// before any decoding work is done. The declared extension only gates the
/// upload; the actual container is still sniffed from the bytes.
pub fn decode_upload(
    bytes: &[u8],
    file_name: &str,
    limits: &DecodeLimits,
) -> Result<PixelGrid, DecodeError> {
    let declared = UploadFormat::from_file_name(file_name)?;
    tracing::trace!(?declared, file_name, size = bytes.len(), "accepted upload");
    decode(bytes, limits)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Limits(e) => DecodeError::TooLarge(e.to_string()),
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        other => DecodeError::Corrupted(other.to_string()),
    }
}

/// Extract EXIF orientation from the container.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
