use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use thumbforge_core::catalog::PresetTable;
use thumbforge_core::engine::{enhance, EnhancementSettings, Placement, CANVAS_HEIGHT, CANVAS_WIDTH};
use thumbforge_core::ThumbError;

fn solid(width: u32, height: u32, px: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(px)))
}

fn sharpen_only(amount: f32) -> EnhancementSettings {
    EnhancementSettings {
        sharpen: amount,
        ..EnhancementSettings::neutral()
    }
}

#[test]
fn test_output_is_always_canvas_sized() {
    let sizes = [(1, 1), (4000, 100), (100, 4000), (1920, 1080), (640, 360), (1281, 719)];
    for (w, h) in sizes {
        let frame = enhance(&solid(w, h, [90, 140, 200, 255]), &EnhancementSettings::default()).unwrap();
        assert_eq!((frame.width, frame.height), (CANVAS_WIDTH, CANVAS_HEIGHT));
        assert_eq!(frame.data.len(), 1280 * 720 * 4);
    }

    let src = solid(800, 600, [90, 140, 200, 255]);
    for preset in PresetTable::builtin().iter() {
        let frame = enhance(&src, &preset.settings).unwrap();
        assert_eq!((frame.width, frame.height), (CANVAS_WIDTH, CANVAS_HEIGHT), "{}", preset.id);
    }
}

#[test]
fn test_zero_sized_source_is_rejected() {
    let src = DynamicImage::ImageRgba8(RgbaImage::new(0, 10));
    assert!(matches!(
        enhance(&src, &EnhancementSettings::default()),
        Err(ThumbError::InvalidImage(_))
    ));
}

#[test]
fn test_neutral_settings_are_identity_on_canvas_sized_source() {
    let src = RgbaImage::from_fn(1280, 720, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    let frame = enhance(&DynamicImage::ImageRgba8(src.clone()), &EnhancementSettings::neutral()).unwrap();
    assert_eq!(frame.data, src.into_raw());
}

#[test]
fn test_cover_fit_leaves_no_letterbox() {
    // Extreme panorama: every output pixel must come from the source.
    let frame = enhance(&solid(4000, 100, [255, 0, 0, 255]), &EnhancementSettings::neutral()).unwrap();
    assert!(frame.data.chunks(4).all(|px| px == [255, 0, 0, 255]));

    let p = Placement::cover(4000, 100).unwrap();
    assert_eq!(p.height, 720.0);
    assert!(p.x < 0.0 && p.width > 1280.0);
}

#[test]
fn test_placement_formula() {
    let landscape = Placement::cover(2000, 500).unwrap();
    assert_eq!((landscape.x, landscape.y, landscape.width, landscape.height), (-800.0, 0.0, 2880.0, 720.0));

    let portrait = Placement::cover(500, 1000).unwrap();
    assert_eq!((portrait.x, portrait.y, portrait.width, portrait.height), (0.0, -920.0, 1280.0, 2560.0));

    let exact = Placement::cover(1920, 1080).unwrap();
    assert_eq!((exact.x, exact.width), (0.0, 1280.0));
    assert!((exact.y).abs() < 1e-9 && (exact.height - 720.0).abs() < 1e-9);
}

#[test]
fn test_sharpen_step_edge() {
    let src = RgbaImage::from_fn(1280, 720, |x, _| {
        if x < 640 {
            Rgba([64, 64, 64, 255])
        } else {
            Rgba([192, 192, 192, 255])
        }
    });
    let frame = enhance(&DynamicImage::ImageRgba8(src), &sharpen_only(20.0)).unwrap();

    // 1.8*64 - 0.2*(3*64 + 192) = 38.4
    assert_eq!(frame.pixel(639, 360), [38, 38, 38, 255]);
    // 1.8*192 - 0.2*(3*192 + 64) = 217.6
    assert_eq!(frame.pixel(640, 360), [218, 218, 218, 255]);
    // away from the edge nothing changes
    assert_eq!(frame.pixel(100, 360), [64, 64, 64, 255]);
    assert_eq!(frame.pixel(1000, 360), [192, 192, 192, 255]);
    // border rows copy through
    assert_eq!(frame.pixel(639, 0), [64, 64, 64, 255]);
    assert_eq!(frame.pixel(640, 719), [192, 192, 192, 255]);
}

#[test]
fn test_more_sharpen_means_more_edge_contrast() {
    let src = DynamicImage::ImageRgba8(RgbaImage::from_fn(1280, 720, |x, _| {
        if x < 640 {
            Rgba([64, 64, 64, 255])
        } else {
            Rgba([192, 192, 192, 255])
        }
    }));

    let edge_contrast = |amount: f32| {
        let frame = enhance(&src, &sharpen_only(amount)).unwrap();
        frame.pixel(640, 360)[0] as i32 - frame.pixel(639, 360)[0] as i32
    };

    let diffs: Vec<i32> = [0.0, 10.0, 20.0, 40.0].into_iter().map(edge_contrast).collect();
    assert_eq!(diffs[0], 128);
    assert!(diffs.windows(2).all(|w| w[1] > w[0]), "{:?}", diffs);
}

#[test]
fn test_vignette_over_transparent_source() {
    let settings = EnhancementSettings {
        vignette: 40.0,
        ..EnhancementSettings::neutral()
    };

    let clear = enhance(&solid(1280, 720, [255, 255, 255, 0]), &settings).unwrap();
    assert_eq!(clear.pixel(0, 0), [0, 0, 0, 102]);

    let half = enhance(&solid(1280, 720, [255, 255, 255, 128]), &settings).unwrap();
    assert_eq!(half.pixel(0, 0), [110, 110, 110, 179]);
}

#[test]
fn test_checkerboard_survives_full_sharpen() {
    let src = RgbaImage::from_fn(1280, 720, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let raw = src.clone().into_raw();
    let frame = enhance(&DynamicImage::ImageRgba8(src), &sharpen_only(100.0)).unwrap();
    // every pixel saturates back to its own extreme
    assert_eq!(frame.data, raw);
}

#[test]
fn test_all_white_with_defaults() {
    let frame = enhance(&solid(1280, 720, [255, 255, 255, 255]), &EnhancementSettings::default()).unwrap();
    assert_eq!(frame.pixel(640, 360), [255, 255, 255, 255]);
    let corner = frame.pixel(0, 0);
    assert!(corner[0] < 255);
    assert_eq!(corner[0], corner[1]);
    assert!(frame.data.chunks(4).all(|px| px[3] == 255));
}

#[test]
fn test_vignette_darkens_corners_proportionally() {
    let white = solid(1280, 720, [255, 255, 255, 255]);
    let corner = |v: f32| {
        let settings = EnhancementSettings {
            vignette: v,
            ..EnhancementSettings::neutral()
        };
        enhance(&white, &settings).unwrap().pixel(0, 0)[0]
    };
    assert_eq!(corner(0.0), 255);
    assert_eq!(corner(40.0), 153);
    assert_eq!(corner(100.0), 0);
    assert!(corner(20.0) > corner(40.0));
}

#[test]
fn test_blur_softens_edges_only_when_enabled() {
    let src = RgbaImage::from_fn(1280, 720, |x, _| {
        if x < 640 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let src = DynamicImage::ImageRgba8(src);

    let sharp = enhance(&src, &EnhancementSettings::neutral()).unwrap();
    assert_eq!(sharp.pixel(639, 360)[0], 0);

    let settings = EnhancementSettings {
        blur: 3.0,
        ..EnhancementSettings::neutral()
    };
    let soft = enhance(&src, &settings).unwrap();
    let left = soft.pixel(639, 360)[0];
    let right = soft.pixel(640, 360)[0];
    assert!(left > 0 && left < 255);
    assert!(right > left);
}

#[test]
fn test_png_export_roundtrip() {
    let frame = enhance(&solid(300, 200, [10, 200, 30, 255]), &EnhancementSettings::default()).unwrap();
    let png = frame.to_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.dimensions(), (1280, 720));
    assert_eq!(decoded.to_rgba8().into_raw(), frame.data);
}
