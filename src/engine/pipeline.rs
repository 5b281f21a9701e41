// THUMBFORGE Enhancement Pipeline
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// enhance(source, settings) -> 1280x720 frame
//
//   1. cover-fit placement
//   2. brightness / contrast / saturation
//   3. blur
//   4. vignette overlay
//   5. sharpen
//
// Passes run strictly in sequence on one owned frame.

use super::{blur, color, placement, sharpen, vignette, EnhancementSettings, ThumbnailFrame};
use crate::error::Result;
use image::DynamicImage;
use std::time::Instant;
use tracing::debug;

/// Render `source` into a new 1280x720 thumbnail frame.
///
/// Fails with `InvalidImage` only when the source has a zero dimension.
pub fn enhance(source: &DynamicImage, settings: &EnhancementSettings) -> Result<ThumbnailFrame> {
    let started = Instant::now();
    let mut frame = placement::place(source)?;
    apply_passes(&mut frame, settings)?;
    debug!(
        "[ENHANCE] {}x{} rendered in {:?} ({:?})",
        frame.width,
        frame.height,
        started.elapsed(),
        settings
    );
    Ok(frame)
}

/// Run the filter chain on an already placed frame.
pub fn apply_passes(frame: &mut ThumbnailFrame, settings: &EnhancementSettings) -> Result<()> {
    color::apply_color(frame, settings);
    blur::apply_blur(frame, settings.blur)?;
    vignette::apply_vignette(frame, settings.vignette);
    sharpen::apply_sharpen(frame, settings.sharpen);
    Ok(())
}
