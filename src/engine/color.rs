// THUMBFORGE Colour Adjustment Pass
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Brightness, contrast and saturation composed into one per-pixel transform,
// applied in CSS filter order with a clamp after every stage.

use super::{EnhancementSettings, ThumbnailFrame};
use rayon::prelude::*;

/// Luminance coefficients of the CSS/SVG saturate matrix.
const LUMA_R: f32 = 0.213;
const LUMA_G: f32 = 0.715;
const LUMA_B: f32 = 0.072;

/// Precomputed per-render colour transform. A stage whose percentage is
/// exactly 100 is left out, like an omitted CSS filter function.
#[derive(Debug, Clone, Copy)]
pub struct ColorTransform {
    brightness: Option<f32>,
    contrast: Option<f32>,
    matrix: Option<[[f32; 3]; 3]>,
}

fn stage(percent: f32) -> Option<f32> {
    (percent != 100.0).then_some(percent / 100.0)
}

impl ColorTransform {
    pub fn from_settings(settings: &EnhancementSettings) -> Self {
        let matrix = stage(settings.saturation).map(|s| [
            [
                LUMA_R + (1.0 - LUMA_R) * s,
                LUMA_G - LUMA_G * s,
                LUMA_B - LUMA_B * s,
            ],
            [
                LUMA_R - LUMA_R * s,
                LUMA_G + (1.0 - LUMA_G) * s,
                LUMA_B - LUMA_B * s,
            ],
            [
                LUMA_R - LUMA_R * s,
                LUMA_G - LUMA_G * s,
                LUMA_B + (1.0 - LUMA_B) * s,
            ],
        ]);
        Self {
            brightness: stage(settings.brightness),
            contrast: stage(settings.contrast),
            matrix,
        }
    }

    /// Map one RGB triple; alpha is not touched by the colour pass.
    pub fn apply(&self, rgb: [u8; 3]) -> [u8; 3] {
        let mut v = rgb.map(|c| c as f32 / 255.0);

        if let Some(b) = self.brightness {
            for c in v.iter_mut() {
                *c = (*c * b).clamp(0.0, 1.0);
            }
        }
        if let Some(k) = self.contrast {
            for c in v.iter_mut() {
                *c = ((*c - 0.5) * k + 0.5).clamp(0.0, 1.0);
            }
        }
        if let Some(m) = &self.matrix {
            v = [
                m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
                m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
                m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
            ];
        }

        v.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

/// Apply brightness/contrast/saturation to the whole frame.
/// Skipped entirely when all three are 100.
pub fn apply_color(frame: &mut ThumbnailFrame, settings: &EnhancementSettings) {
    if settings.is_color_neutral() {
        return;
    }

    let transform = ColorTransform::from_settings(settings);
    frame.data.par_chunks_mut(4).for_each(|px| {
        let [r, g, b] = transform.apply([px[0], px[1], px[2]]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    });
}
