// THUMBFORGE Engine Module
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Image Enhancement Engine: cover-fit placement followed by a fixed chain of
// pixel passes over a 1280x720 RGBA frame.

pub mod blur;
pub mod color;
pub mod pipeline;
pub mod placement;
pub mod settings;
pub mod sharpen;
pub mod vignette;

pub use pipeline::enhance;
pub use placement::Placement;
pub use settings::EnhancementSettings;

use crate::error::{Result, ThumbError};
use image::{ImageOutputFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// YouTube thumbnail width.
pub const CANVAS_WIDTH: u32 = 1280;
/// YouTube thumbnail height.
pub const CANVAS_HEIGHT: u32 = 720;

/// A single RGBA8 frame flowing through the enhancement passes.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailFrame {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Raw pixel data (RGBA u8, row-major)
    pub data: Vec<u8>,
}

impl ThumbnailFrame {
    /// Create a fully transparent frame with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let data = vec![0u8; (width as usize) * (height as usize) * 4];
        Self { width, height, data }
    }

    /// Create a cleared canvas-sized frame
    pub fn canvas() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn from_rgba(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            ThumbError::InvalidImage(format!(
                "buffer of {} bytes does not match {}x{}",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Encode as PNG (lossless) for download/export.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let img = self.to_rgba_image()?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageOutputFormat::Png)?;
        Ok(out.into_inner())
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        let bytes = self.to_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_dimensions() {
        let frame = ThumbnailFrame::canvas();
        assert_eq!(frame.width, 1280);
        assert_eq!(frame.height, 720);
        assert_eq!(frame.data.len(), 1280 * 720 * 4);
        assert_eq!(frame.stride(), 1280 * 4);
    }

    #[test]
    fn test_png_export_decodes_back() {
        let mut frame = ThumbnailFrame::new(4, 3);
        frame.put_pixel(1, 2, [10, 20, 30, 255]);
        let png = frame.to_png().unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(1, 2).0, [10, 20, 30, 255]);
    }
}
