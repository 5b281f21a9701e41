// THUMBFORGE Blur Pass
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use super::ThumbnailFrame;
use crate::error::Result;
use image::imageops;

/// Upper bound of the blur slider.
pub const MAX_BLUR_SIGMA: f32 = 20.0;

/// Gaussian blur with standard deviation `sigma` pixels, the same unit as a
/// CSS `blur()` filter. Non-positive sigma is a no-op.
pub fn apply_blur(frame: &mut ThumbnailFrame, sigma: f32) -> Result<()> {
    if !(sigma > 0.0) {
        return Ok(());
    }

    let sigma = sigma.min(MAX_BLUR_SIGMA);
    let blurred = imageops::blur(&frame.to_rgba_image()?, sigma);
    frame.data = blurred.into_raw();
    Ok(())
}
