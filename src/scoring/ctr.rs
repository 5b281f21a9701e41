// THUMBFORGE CTR Heuristic Scorer
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Closed-form weighted sum over five sub-scores:
//
//   face 30% | text 25% | color 20% | composition 15% | emotion 10%
//
// Every sub-score carries the feedback sentence of the branch that produced it.

use super::features::{FaceEmotion, ThumbnailFeatures};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Category weights as integer percentages. Multiplying integer sub-scores by
/// integer weights keeps the weighted sum exact before the final division.
pub const FACE_WEIGHT: f64 = 30.0;
pub const TEXT_WEIGHT: f64 = 25.0;
pub const COLOR_WEIGHT: f64 = 20.0;
pub const COMPOSITION_WEIGHT: f64 = 15.0;
pub const EMOTION_WEIGHT: f64 = 10.0;

const OPTIMAL_FACE_SIZE: std::ops::RangeInclusive<f64> = 0.25..=0.40;
const OPTIMAL_WORDS: std::ops::RangeInclusive<u32> = 3..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Face Detection")]
    Face,
    #[serde(rename = "Text Overlay")]
    Text,
    #[serde(rename = "Color Contrast")]
    Color,
    #[serde(rename = "Composition")]
    Composition,
    #[serde(rename = "Emotional Impact")]
    Emotion,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Face => "Face Detection",
            Category::Text => "Text Overlay",
            Category::Color => "Color Contrast",
            Category::Composition => "Composition",
            Category::Emotion => "Emotional Impact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: Category,
    pub score: u8,
    pub feedback: String,
}

/// Coarse label shown next to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    #[serde(rename = "Excellent CTR")]
    Excellent,
    #[serde(rename = "Good CTR")]
    Good,
    #[serde(rename = "Average CTR")]
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl ScoreLabel {
    pub fn for_score(overall: u8) -> Self {
        match overall {
            80.. => ScoreLabel::Excellent,
            65..=79 => ScoreLabel::Good,
            50..=64 => ScoreLabel::Average,
            _ => ScoreLabel::NeedsImprovement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Excellent => "Excellent CTR",
            ScoreLabel::Good => "Good CTR",
            ScoreLabel::Average => "Average CTR",
            ScoreLabel::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtrScore {
    pub overall: u8,
    pub face: u8,
    pub text: u8,
    pub color: u8,
    pub composition: u8,
    pub emotion: u8,
    pub label: ScoreLabel,
    /// Always Face, Text, Color, Composition, Emotion.
    pub breakdown: Vec<BreakdownEntry>,
}

/// Unrounded sub-score plus the feedback of the branch that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub value: f64,
    pub feedback: String,
}

impl SubScore {
    fn new(value: f64, feedback: impl Into<String>) -> Self {
        Self {
            value,
            feedback: feedback.into(),
        }
    }
}

/// Round half away from zero, the single display rounding rule.
pub fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn emotion_bonus(emotion: FaceEmotion) -> f64 {
    match emotion {
        FaceEmotion::Shocked => 20.0,
        FaceEmotion::Surprised => 15.0,
        FaceEmotion::Happy => 10.0,
        FaceEmotion::Angry => 5.0,
        FaceEmotion::Neutral => 0.0,
    }
}

fn emotion_value(emotion: FaceEmotion) -> f64 {
    match emotion {
        FaceEmotion::Shocked => 100.0,
        FaceEmotion::Surprised => 90.0,
        FaceEmotion::Happy => 75.0,
        FaceEmotion::Angry => 60.0,
        FaceEmotion::Neutral => 40.0,
    }
}

pub fn face_score(f: &ThumbnailFeatures) -> SubScore {
    if !f.has_face {
        return SubScore::new(30.0, "Add a face for 35-50% CTR increase");
    }

    let (base, feedback) = if OPTIMAL_FACE_SIZE.contains(&f.face_size) {
        (100.0, "Perfect face size for maximum engagement")
    } else if f.face_size > *OPTIMAL_FACE_SIZE.end() {
        (80.0, "Face is too large - consider showing more context")
    } else {
        (60.0, "Face is too small - make it larger for better CTR")
    };

    SubScore::new((base + emotion_bonus(f.face_emotion)).min(100.0), feedback)
}

pub fn text_score(f: &ThumbnailFeatures) -> SubScore {
    if !f.has_text {
        return SubScore::new(50.0, "Add text for 23-40% CTR boost");
    }

    let (base, feedback) = if OPTIMAL_WORDS.contains(&f.text_length) {
        (100.0, "Perfect text length for mobile readability")
    } else if f.text_length > *OPTIMAL_WORDS.end() {
        (70.0, "Too much text - keep it under 5 words")
    } else {
        (80.0, "Good, but 3-5 words is optimal")
    };

    // low contrast gates even well-sized text
    SubScore::new(base * f.text_contrast, feedback)
}

pub fn color_score(f: &ThumbnailFeatures) -> SubScore {
    let value = f.color_vibrancy * 50.0 + f.color_contrast * 50.0;
    let feedback = if value >= 80.0 {
        "Excellent color contrast and vibrancy"
    } else if value >= 60.0 {
        "Good colors, but increase contrast for better visibility"
    } else {
        "Use brighter, more contrasting colors"
    };
    SubScore::new(value, feedback)
}

pub fn composition_score(f: &ThumbnailFeatures) -> SubScore {
    if f.rule_of_thirds {
        SubScore::new(100.0, "Perfect composition using rule of thirds")
    } else {
        SubScore::new(60.0, "Try positioning key elements on grid intersections")
    }
}

/// Emotion only counts when a face is present; without one it is neutral (50),
/// not penalized like the missing face itself.
pub fn emotion_score(f: &ThumbnailFeatures) -> SubScore {
    if f.has_face {
        SubScore::new(
            emotion_value(f.face_emotion),
            format!("{} expression detected", f.face_emotion),
        )
    } else {
        SubScore::new(50.0, "Add expressive face for emotional connection")
    }
}

/// Score a thumbnail. Total: out-of-range floats are clamped, never rejected.
pub fn score(features: &ThumbnailFeatures) -> CtrScore {
    if let Err(e) = features.validate() {
        warn!("[CTR] {} - clamping feature vector", e);
    }
    let f = features.clamped();

    let face = face_score(&f);
    let text = text_score(&f);
    let color = color_score(&f);
    let composition = composition_score(&f);
    let emotion = emotion_score(&f);

    let weighted = (face.value * FACE_WEIGHT
        + text.value * TEXT_WEIGHT
        + color.value * COLOR_WEIGHT
        + composition.value * COMPOSITION_WEIGHT
        + emotion.value * EMOTION_WEIGHT)
        / 100.0;
    let overall = round_score(weighted);

    let parts = [
        (Category::Face, face),
        (Category::Text, text),
        (Category::Color, color),
        (Category::Composition, composition),
        (Category::Emotion, emotion),
    ];
    let rounded: Vec<u8> = parts.iter().map(|(_, s)| round_score(s.value)).collect();
    let breakdown = parts
        .into_iter()
        .zip(rounded.iter())
        .map(|((category, sub), &score)| BreakdownEntry {
            category,
            score,
            feedback: sub.feedback,
        })
        .collect();

    CtrScore {
        overall,
        face: rounded[0],
        text: rounded[1],
        color: rounded[2],
        composition: rounded[3],
        emotion: rounded[4],
        label: ScoreLabel::for_score(overall),
        breakdown,
    }
}
