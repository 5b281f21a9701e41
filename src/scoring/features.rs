// THUMBFORGE Thumbnail Feature Vector
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use crate::error::{Result, ThumbError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dominant facial expression in the thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceEmotion {
    Neutral,
    Happy,
    Surprised,
    Shocked,
    Angry,
}

impl FaceEmotion {
    pub const ALL: [FaceEmotion; 5] = [
        FaceEmotion::Neutral,
        FaceEmotion::Happy,
        FaceEmotion::Surprised,
        FaceEmotion::Shocked,
        FaceEmotion::Angry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceEmotion::Neutral => "neutral",
            FaceEmotion::Happy => "happy",
            FaceEmotion::Surprised => "surprised",
            FaceEmotion::Shocked => "shocked",
            FaceEmotion::Angry => "angry",
        }
    }
}

impl fmt::Display for FaceEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaceEmotion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        FaceEmotion::ALL
            .into_iter()
            .find(|e| e.as_str() == key)
            .ok_or_else(|| format!("Unknown emotion: {}", s))
    }
}

/// Scorer input describing one thumbnail.
///
/// On the wire the booleans and `faceEmotion` are required; the numeric
/// fields default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailFeatures {
    pub has_face: bool,
    /// Share of the thumbnail covered by the face, 0-1
    #[serde(default)]
    pub face_size: f64,
    pub face_emotion: FaceEmotion,
    pub has_text: bool,
    /// Word count of the overlay text
    #[serde(default)]
    pub text_length: u32,
    /// Readability of the overlay text, 0-1
    #[serde(default)]
    pub text_contrast: f64,
    #[serde(default)]
    pub color_vibrancy: f64,
    #[serde(default)]
    pub color_contrast: f64,
    pub rule_of_thirds: bool,
}

impl Default for ThumbnailFeatures {
    fn default() -> Self {
        Self {
            has_face: false,
            face_size: 0.0,
            face_emotion: FaceEmotion::Neutral,
            has_text: false,
            text_length: 0,
            text_contrast: 0.0,
            color_vibrancy: 0.0,
            color_contrast: 0.0,
            rule_of_thirds: false,
        }
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

impl ThumbnailFeatures {
    fn unit_fields(&self) -> [(&'static str, f64); 4] {
        [
            ("faceSize", self.face_size),
            ("textContrast", self.text_contrast),
            ("colorVibrancy", self.color_vibrancy),
            ("colorContrast", self.color_contrast),
        ]
    }

    /// Report the first float field outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.unit_fields() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ThumbError::InvalidFeatureVector { field, value });
            }
        }
        Ok(())
    }

    /// Copy with every float field clamped to [0, 1] (NaN becomes 0).
    pub fn clamped(&self) -> Self {
        Self {
            face_size: clamp_unit(self.face_size),
            text_contrast: clamp_unit(self.text_contrast),
            color_vibrancy: clamp_unit(self.color_vibrancy),
            color_contrast: clamp_unit(self.color_contrast),
            ..*self
        }
    }
}
