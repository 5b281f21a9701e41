// THUMBFORGE Colour Analysis
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Derives the scorer's colour features from rendered pixels and the text
// contrast from a text/shadow colour pair.

use crate::engine::ThumbnailFrame;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Measured colour features, both in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMetrics {
    /// Mean HSV saturation
    pub color_vibrancy: f64,
    /// Luminance standard deviation, scaled so a half-black/half-white frame is 1.0
    pub color_contrast: f64,
}

/// Rec. 709 relative luminance of an sRGB-encoded pixel, no linearization.
fn luma(px: &[u8]) -> f64 {
    (0.2126 * px[0] as f64 + 0.7152 * px[1] as f64 + 0.0722 * px[2] as f64) / 255.0
}

fn hsv_saturation(px: &[u8]) -> f64 {
    let max = px[0].max(px[1]).max(px[2]);
    let min = px[0].min(px[1]).min(px[2]);
    if max == 0 {
        0.0
    } else {
        (max - min) as f64 / max as f64
    }
}

/// Measure vibrancy and contrast over every pixel of `frame`.
pub fn measure_colors(frame: &ThumbnailFrame) -> ColorMetrics {
    let count = (frame.data.len() / 4) as f64;
    if count == 0.0 {
        return ColorMetrics {
            color_vibrancy: 0.0,
            color_contrast: 0.0,
        };
    }

    let (sat_sum, luma_sum, luma_sq_sum) = frame
        .data
        .par_chunks(4)
        .map(|px| {
            let l = luma(px);
            (hsv_saturation(px), l, l * l)
        })
        .reduce(|| (0.0, 0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2));

    let mean = luma_sum / count;
    let variance = (luma_sq_sum / count - mean * mean).max(0.0);

    ColorMetrics {
        color_vibrancy: (sat_sum / count).clamp(0.0, 1.0),
        color_contrast: (variance.sqrt() * 2.0).clamp(0.0, 1.0),
    }
}

/// Parse `#RRGGBB` / `RRGGBB` / `#RGB`.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// WCAG 2.x relative luminance (linearized sRGB).
pub fn relative_luminance(rgb: [u8; 3]) -> f64 {
    let lin = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * lin(rgb[0]) + 0.7152 * lin(rgb[1]) + 0.0722 * lin(rgb[2])
}

/// WCAG contrast ratio in [1, 21].
pub fn contrast_ratio(a: [u8; 3], b: [u8; 3]) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Text readability for the scorer: contrast ratio mapped linearly onto [0, 1].
/// Unparseable colours count as zero contrast.
pub fn text_contrast(text_color: &str, shadow_color: &str) -> f64 {
    match (parse_hex_color(text_color), parse_hex_color(shadow_color)) {
        (Some(a), Some(b)) => ((contrast_ratio(a, b) - 1.0) / 20.0).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> ThumbnailFrame {
        let mut frame = ThumbnailFrame::new(width, height);
        for y in 0..height {
            for x in 0..width {
                frame.put_pixel(x, y, f(x, y));
            }
        }
        frame
    }

    #[test]
    fn test_gray_frame_has_no_vibrancy_or_contrast() {
        let m = measure_colors(&filled(8, 8, |_, _| [128, 128, 128, 255]));
        assert_eq!(m.color_vibrancy, 0.0);
        assert!(m.color_contrast < 1e-9);
    }

    #[test]
    fn test_half_black_half_white_is_full_contrast() {
        let m = measure_colors(&filled(8, 8, |x, _| {
            if x < 4 {
                [0, 0, 0, 255]
            } else {
                [255, 255, 255, 255]
            }
        }));
        assert!((m.color_contrast - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pure_red_is_fully_vibrant() {
        let m = measure_colors(&filled(4, 4, |_, _| [255, 0, 0, 255]));
        assert_eq!(m.color_vibrancy, 1.0);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex_color("#FFD700"), Some([255, 215, 0]));
        assert_eq!(parse_hex_color("8b4513"), Some([139, 69, 19]));
        assert_eq!(parse_hex_color("#fff"), Some([255, 255, 255]));
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#+F+F+F"), None);
        assert_eq!(parse_hex_color("+FF"), None);
    }

    #[test]
    fn test_wcag_extremes() {
        assert!((contrast_ratio([255, 255, 255], [0, 0, 0]) - 21.0).abs() < 1e-9);
        assert!((text_contrast("#FFFFFF", "#000000") - 1.0).abs() < 1e-9);
        assert_eq!(text_contrast("#FF0000", "#FF0000"), 0.0);
        assert_eq!(text_contrast("gold", "#000000"), 0.0);
    }
}
