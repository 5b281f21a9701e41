// THUMBFORGE Upload Validation
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use crate::error::{Result, ThumbError};
use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

/// Uploads above 5 MiB are rejected before decoding.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Check size and sniff the format from the magic bytes. Only JPEG and PNG pass.
pub fn validate(bytes: &[u8]) -> Result<ImageFormat> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ThumbError::TooLarge {
            size: bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }
    if bytes.is_empty() {
        return Err(ThumbError::InvalidImage("empty upload".to_string()));
    }

    match image::guess_format(bytes) {
        Ok(fmt @ (ImageFormat::Png | ImageFormat::Jpeg)) => Ok(fmt),
        Ok(other) => Err(ThumbError::UnsupportedFormat(format!("{:?}", other))),
        Err(_) => Err(ThumbError::UnsupportedFormat("unknown".to_string())),
    }
}

/// Validate then decode an uploaded photo.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    let format = validate(bytes)?;
    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ThumbError::InvalidImage(e.to_string()))?;

    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(ThumbError::InvalidImage(format!("zero-sized image {}x{}", w, h)));
    }
    debug!("[UPLOAD] Decoded {:?} {}x{} ({} bytes)", format, w, h, bytes.len());
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, RgbImage};
    use std::io::Cursor;

    fn encoded(format: ImageOutputFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, image::Rgb([10, 20, 30])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_png_and_jpeg_accepted() {
        let png = decode(&encoded(ImageOutputFormat::Png)).unwrap();
        assert_eq!(png.dimensions(), (4, 3));
        let jpeg = encoded(ImageOutputFormat::Jpeg(90));
        assert_eq!(validate(&jpeg).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_rejections() {
        let bmp = encoded(ImageOutputFormat::Bmp);
        assert!(matches!(validate(&bmp), Err(ThumbError::UnsupportedFormat(_))));
        assert!(matches!(validate(b"hello world"), Err(ThumbError::UnsupportedFormat(_))));
        assert!(matches!(validate(&[]), Err(ThumbError::InvalidImage(_))));

        let huge = vec![0u8; MAX_UPLOAD_BYTES + 1];
        assert!(matches!(validate(&huge), Err(ThumbError::TooLarge { .. })));
    }

    #[test]
    fn test_truncated_png_is_invalid() {
        let mut png = encoded(ImageOutputFormat::Png);
        png.truncate(20);
        assert!(matches!(decode(&png), Err(ThumbError::InvalidImage(_))));
    }
}
