// THUMBFORGE Sharpen Pass
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// 3x3 unsharp-mask convolution:
//
//      0   -a    0
//     -a  1+4a  -a
//      0   -a    0
//
// BORDER HANDLING: copy-through. Only interior pixels (1..w-1, 1..h-1) are
// convolved; the outermost ring keeps its pre-sharpen values.
// Reads come from a scratch copy so no pass reads a pixel it already wrote.

use super::ThumbnailFrame;
use rayon::prelude::*;

/// Kernel weights for `amount` (0.0-1.0), row-major.
pub fn kernel(amount: f32) -> [f32; 9] {
    [
        0.0, -amount, 0.0, //
        -amount, 1.0 + 4.0 * amount, -amount, //
        0.0, -amount, 0.0,
    ]
}

/// Sharpen with slider value `sharpen` (0-100). Zero or less is a no-op.
pub fn apply_sharpen(frame: &mut ThumbnailFrame, sharpen: f32) {
    if !(sharpen > 0.0) {
        return;
    }
    let (w, h) = (frame.width as usize, frame.height as usize);
    if w < 3 || h < 3 {
        return;
    }

    let k = kernel(sharpen / 100.0);
    let stride = frame.stride();
    let src = frame.data.clone();

    frame
        .data
        .par_chunks_mut(stride)
        .enumerate()
        .skip(1)
        .take(h - 2)
        .for_each(|(y, row)| {
            for x in 1..w - 1 {
                for c in 0..3 {
                    let mut sum = 0.0f32;
                    for ky in 0..3 {
                        for kx in 0..3 {
                            let weight = k[ky * 3 + kx];
                            if weight == 0.0 {
                                continue;
                            }
                            let idx = (y + ky - 1) * stride + (x + kx - 1) * 4 + c;
                            sum += src[idx] as f32 * weight;
                        }
                    }
                    row[x * 4 + c] = sum.round().clamp(0.0, 255.0) as u8;
                }
                row[x * 4 + 3] = 255;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_weights_sum_to_one() {
        for amount in [0.0, 0.1, 0.5, 1.0] {
            let sum: f32 = kernel(amount).iter().sum();
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_flat_region_unchanged() {
        let mut frame = ThumbnailFrame::new(5, 5);
        frame.data.chunks_mut(4).for_each(|px| px.copy_from_slice(&[90, 120, 150, 255]));
        let before = frame.clone();
        apply_sharpen(&mut frame, 100.0);
        assert_eq!(frame, before);
    }

    #[test]
    fn test_border_copies_through_and_interior_alpha_opaque() {
        let mut frame = ThumbnailFrame::new(4, 4);
        frame.data.chunks_mut(4).for_each(|px| px.copy_from_slice(&[50, 50, 50, 10]));
        apply_sharpen(&mut frame, 30.0);

        assert_eq!(frame.pixel(0, 0), [50, 50, 50, 10]);
        assert_eq!(frame.pixel(3, 1), [50, 50, 50, 10]);
        assert_eq!(frame.pixel(1, 1), [50, 50, 50, 255]);
        assert_eq!(frame.pixel(2, 2), [50, 50, 50, 255]);
    }
}
