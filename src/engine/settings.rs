// THUMBFORGE Enhancement Settings
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use serde::{Deserialize, Serialize};

/// Slider values for one render. Replaced wholesale, never mutated in place.
///
/// Values are best-effort: the engine does not range-check them, the UI does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhancementSettings {
    /// Percent, 100 = unchanged (nominal 0-200)
    pub brightness: f32,
    /// Percent, 100 = unchanged (nominal 0-200)
    pub contrast: f32,
    /// Percent, 100 = unchanged (nominal 0-200)
    pub saturation: f32,
    /// Gaussian standard deviation in pixels (0-20)
    pub blur: f32,
    /// Edge darkness (0-100)
    pub vignette: f32,
    /// Unsharp-mask strength (0-100)
    pub sharpen: f32,
}

impl Default for EnhancementSettings {
    fn default() -> Self {
        Self {
            brightness: 110.0,
            contrast: 115.0,
            saturation: 120.0,
            blur: 0.0,
            vignette: 20.0,
            sharpen: 10.0,
        }
    }
}

impl EnhancementSettings {
    /// Settings under which `enhance` only performs cover-fit placement.
    pub fn neutral() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
            blur: 0.0,
            vignette: 0.0,
            sharpen: 0.0,
        }
    }

    pub fn new(
        brightness: f32,
        contrast: f32,
        saturation: f32,
        blur: f32,
        vignette: f32,
        sharpen: f32,
    ) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
            blur,
            vignette,
            sharpen,
        }
    }

    /// True when the colour pass would be an exact no-op.
    pub fn is_color_neutral(&self) -> bool {
        self.brightness == 100.0 && self.contrast == 100.0 && self.saturation == 100.0
    }
}
