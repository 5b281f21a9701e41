// THUMBFORGE Cover-Fit Placement
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use super::{ThumbnailFrame, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::error::{Result, ThumbError};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView};

/// Destination rectangle of the source image on the canvas, in canvas pixels.
/// Offsets are zero or negative: the source always covers the whole canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Cover-fit a `src_w` x `src_h` image onto the 1280x720 canvas.
    pub fn cover(src_w: u32, src_h: u32) -> Result<Self> {
        if src_w == 0 || src_h == 0 {
            return Err(ThumbError::InvalidImage(format!(
                "source has zero dimension ({}x{})",
                src_w, src_h
            )));
        }

        let canvas_w = CANVAS_WIDTH as f64;
        let canvas_h = CANVAS_HEIGHT as f64;
        let img_aspect = src_w as f64 / src_h as f64;
        let canvas_aspect = canvas_w / canvas_h;

        let placement = if img_aspect > canvas_aspect {
            let width = canvas_h * img_aspect;
            Self {
                x: (canvas_w - width) / 2.0,
                y: 0.0,
                width,
                height: canvas_h,
            }
        } else {
            let height = canvas_w / img_aspect;
            Self {
                x: 0.0,
                y: (canvas_h - height) / 2.0,
                width: canvas_w,
                height,
            }
        };
        Ok(placement)
    }

    /// Canvas pixels per source pixel.
    pub fn scale(&self, src_w: u32) -> f64 {
        self.width / src_w as f64
    }

    /// The region of the source that lands on the canvas, as `(x, y, w, h)` in
    /// source pixels, rounded and clamped to the source bounds.
    pub fn visible_source_rect(&self, src_w: u32, src_h: u32) -> (u32, u32, u32, u32) {
        let scale = self.scale(src_w);
        let vis_w = (CANVAS_WIDTH as f64 / scale).round().clamp(1.0, src_w as f64) as u32;
        let vis_h = (CANVAS_HEIGHT as f64 / scale).round().clamp(1.0, src_h as f64) as u32;
        let sx = (-self.x / scale).round().max(0.0) as u32;
        let sy = (-self.y / scale).round().max(0.0) as u32;
        (sx.min(src_w - vis_w), sy.min(src_h - vis_h), vis_w, vis_h)
    }
}

/// Draw `source` onto a cleared 1280x720 canvas using cover-fit placement.
///
/// Only the visible source region is resampled. A region that already
/// measures 1280x720 is copied without resampling.
pub fn place(source: &DynamicImage) -> Result<ThumbnailFrame> {
    let (src_w, src_h) = source.dimensions();
    let placement = Placement::cover(src_w, src_h)?;
    let (sx, sy, w, h) = placement.visible_source_rect(src_w, src_h);

    tracing::debug!(
        "[ENHANCE] cover-fit {}x{} -> rect ({:.1}, {:.1}, {:.1}x{:.1}), source crop {}x{}+{}+{}",
        src_w,
        src_h,
        placement.x,
        placement.y,
        placement.width,
        placement.height,
        w,
        h,
        sx,
        sy
    );

    let visible = source.crop_imm(sx, sy, w, h).to_rgba8();
    let canvas = if (w, h) == (CANVAS_WIDTH, CANVAS_HEIGHT) {
        visible
    } else {
        imageops::resize(&visible, CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle)
    };

    Ok(ThumbnailFrame::from_rgba(canvas))
}
