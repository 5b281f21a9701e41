// THUMBFORGE Vignette Overlay
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// A painted black radial gradient composited source-over, not a multiplicative filter.

use super::{ThumbnailFrame, CANVAS_HEIGHT, CANVAS_WIDTH};
use rayon::prelude::*;

/// Gradient is fully transparent inside this radius.
pub const VIGNETTE_INNER_RADIUS: f32 = 200.0;
/// Gradient reaches `vignette / 100` alpha at this radius and stays there.
pub const VIGNETTE_OUTER_RADIUS: f32 = 700.0;

const CENTER_X: f32 = CANVAS_WIDTH as f32 / 2.0;
const CENTER_Y: f32 = CANVAS_HEIGHT as f32 / 2.0;

/// Overlay alpha at distance `dist` from the centre.
pub fn overlay_alpha(dist: f32, strength: f32) -> f32 {
    let t = ((dist - VIGNETTE_INNER_RADIUS) / (VIGNETTE_OUTER_RADIUS - VIGNETTE_INNER_RADIUS))
        .clamp(0.0, 1.0);
    t * strength
}

/// Paint the vignette. `vignette` is 0-100; zero or less skips the pass.
pub fn apply_vignette(frame: &mut ThumbnailFrame, vignette: f32) {
    if !(vignette > 0.0) {
        return;
    }

    let strength = (vignette / 100.0).min(1.0);
    let width = frame.width as usize;
    let stride = frame.stride();

    frame
        .data
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            // sample at pixel centres, as canvas rasterization does
            let dy = y as f32 + 0.5 - CENTER_Y;
            for x in 0..width {
                let dx = x as f32 + 0.5 - CENTER_X;
                let a = overlay_alpha((dx * dx + dy * dy).sqrt(), strength);
                if a <= 0.0 {
                    continue;
                }
                let px = &mut row[x * 4..x * 4 + 4];
                let dst_a = px[3] as f32 / 255.0;
                let out_a = a + dst_a * (1.0 - a);
                // black source contributes nothing to colour, only coverage
                let keep = if out_a > 0.0 { dst_a * (1.0 - a) / out_a } else { 0.0 };
                for c in px.iter_mut().take(3) {
                    *c = (*c as f32 * keep).round() as u8;
                }
                px[3] = (out_a * 255.0).round() as u8;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_canvas() -> ThumbnailFrame {
        let mut frame = ThumbnailFrame::canvas();
        frame.data.fill(255);
        frame
    }

    #[test]
    fn test_alpha_ramp() {
        assert_eq!(overlay_alpha(0.0, 0.5), 0.0);
        assert_eq!(overlay_alpha(200.0, 0.5), 0.0);
        assert!((overlay_alpha(450.0, 0.5) - 0.25).abs() < 1e-6);
        assert_eq!(overlay_alpha(700.0, 0.5), 0.5);
        assert_eq!(overlay_alpha(2000.0, 0.5), 0.5);
    }

    #[test]
    fn test_center_untouched_corners_darkened() {
        let mut frame = white_canvas();
        apply_vignette(&mut frame, 40.0);

        assert_eq!(frame.pixel(640, 360), [255, 255, 255, 255]);
        // corner distance is ~734px, beyond the outer radius
        assert_eq!(frame.pixel(0, 0), [153, 153, 153, 255]);
        assert_eq!(frame.pixel(1279, 719), [153, 153, 153, 255]);
    }

    #[test]
    fn test_transparent_pixels_take_overlay_colour() {
        let mut frame = white_canvas();
        for px in frame.data.chunks_mut(4) {
            px[3] = 0;
        }
        apply_vignette(&mut frame, 40.0);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0, 102]);
        // untouched inside the inner radius
        assert_eq!(frame.pixel(640, 360), [255, 255, 255, 0]);

        let mut frame = white_canvas();
        for px in frame.data.chunks_mut(4) {
            px[3] = 128;
        }
        apply_vignette(&mut frame, 40.0);
        assert_eq!(frame.pixel(0, 0), [110, 110, 110, 179]);
    }

    #[test]
    fn test_zero_vignette_is_noop() {
        let mut frame = white_canvas();
        apply_vignette(&mut frame, 0.0);
        assert!(frame.data.iter().all(|&v| v == 255));
    }
}
