use thumbforge_core::scoring::{score, Category, FaceEmotion, ScoreLabel, ThumbnailFeatures};

fn face(size: f64, emotion: FaceEmotion) -> ThumbnailFeatures {
    ThumbnailFeatures {
        has_face: true,
        face_size: size,
        face_emotion: emotion,
        ..Default::default()
    }
}

fn text(words: u32, contrast: f64) -> ThumbnailFeatures {
    ThumbnailFeatures {
        has_text: true,
        text_length: words,
        text_contrast: contrast,
        ..Default::default()
    }
}

#[test]
fn test_all_absent_scores_36() {
    let result = score(&ThumbnailFeatures::default());
    // 0.3*30 + 0.25*50 + 0.2*0 + 0.15*60 + 0.1*50 = 35.5
    assert_eq!(result.overall, 36);
    assert_eq!(result.label, ScoreLabel::NeedsImprovement);
    assert_eq!(
        (result.face, result.text, result.color, result.composition, result.emotion),
        (30, 50, 0, 60, 50)
    );
}

#[test]
fn test_face_branches() {
    let cases = [
        (face(0.30, FaceEmotion::Neutral), 100, "Perfect face size for maximum engagement"),
        (face(0.30, FaceEmotion::Shocked), 100, "Perfect face size for maximum engagement"),
        (face(0.50, FaceEmotion::Neutral), 80, "Face is too large - consider showing more context"),
        (face(0.50, FaceEmotion::Shocked), 100, "Face is too large - consider showing more context"),
        (face(0.10, FaceEmotion::Happy), 70, "Face is too small - make it larger for better CTR"),
        (face(0.10, FaceEmotion::Angry), 65, "Face is too small - make it larger for better CTR"),
        (ThumbnailFeatures::default(), 30, "Add a face for 35-50% CTR increase"),
    ];

    for (features, expected, feedback) in cases {
        let result = score(&features);
        assert_eq!(result.face, expected, "{:?}", features);
        assert_eq!(result.breakdown[0].category, Category::Face);
        assert_eq!(result.breakdown[0].score, expected);
        assert_eq!(result.breakdown[0].feedback, feedback);
    }
}

#[test]
fn test_text_branches() {
    let cases = [
        (text(4, 1.0), 100, "Perfect text length for mobile readability"),
        (text(3, 0.5), 50, "Perfect text length for mobile readability"),
        (text(6, 0.5), 35, "Too much text - keep it under 5 words"),
        (text(2, 1.0), 80, "Good, but 3-5 words is optimal"),
        (text(4, 0.0), 0, "Perfect text length for mobile readability"),
        (ThumbnailFeatures::default(), 50, "Add text for 23-40% CTR boost"),
    ];

    for (features, expected, feedback) in cases {
        let result = score(&features);
        assert_eq!(result.text, expected, "{:?}", features);
        assert_eq!(result.breakdown[1].feedback, feedback);
    }
}

#[test]
fn test_color_and_composition() {
    let f = ThumbnailFeatures {
        color_vibrancy: 1.0,
        color_contrast: 0.2,
        rule_of_thirds: true,
        ..Default::default()
    };
    let result = score(&f);
    assert_eq!(result.color, 60);
    assert_eq!(
        result.breakdown[2].feedback,
        "Good colors, but increase contrast for better visibility"
    );
    assert_eq!(result.composition, 100);
    assert_eq!(result.breakdown[3].feedback, "Perfect composition using rule of thirds");

    let dull = ThumbnailFeatures {
        color_vibrancy: 0.5,
        color_contrast: 0.5,
        ..Default::default()
    };
    let result = score(&dull);
    assert_eq!(result.color, 50);
    assert_eq!(result.breakdown[2].feedback, "Use brighter, more contrasting colors");
    assert_eq!(
        result.breakdown[3].feedback,
        "Try positioning key elements on grid intersections"
    );
}

#[test]
fn test_emotion_requires_face() {
    let expected = [
        (FaceEmotion::Shocked, 100),
        (FaceEmotion::Surprised, 90),
        (FaceEmotion::Happy, 75),
        (FaceEmotion::Angry, 60),
        (FaceEmotion::Neutral, 40),
    ];
    for (emotion, value) in expected {
        let result = score(&face(0.3, emotion));
        assert_eq!(result.emotion, value);
        assert_eq!(
            result.breakdown[4].feedback,
            format!("{} expression detected", emotion)
        );
    }

    // Emotion is ignored without a face.
    let no_face = ThumbnailFeatures {
        face_emotion: FaceEmotion::Shocked,
        ..Default::default()
    };
    let result = score(&no_face);
    assert_eq!(result.emotion, 50);
    assert_eq!(
        result.breakdown[4].feedback,
        "Add expressive face for emotional connection"
    );
}

#[test]
fn test_ideal_thumbnail_is_excellent() {
    let ideal = ThumbnailFeatures {
        has_face: true,
        face_size: 0.3,
        face_emotion: FaceEmotion::Shocked,
        has_text: true,
        text_length: 4,
        text_contrast: 1.0,
        color_vibrancy: 1.0,
        color_contrast: 1.0,
        rule_of_thirds: true,
    };
    let result = score(&ideal);
    assert_eq!(result.overall, 100);
    assert_eq!(result.label, ScoreLabel::Excellent);
}

#[test]
fn test_breakdown_order_is_fixed() {
    let categories: Vec<_> = score(&face(0.3, FaceEmotion::Happy))
        .breakdown
        .iter()
        .map(|b| b.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            Category::Face,
            Category::Text,
            Category::Color,
            Category::Composition,
            Category::Emotion
        ]
    );
}

#[test]
fn test_overall_uses_unrounded_subscores() {
    // text 80 * 0.0245 = 1.96, displayed as 2
    let result = score(&text(2, 0.0245));
    assert_eq!(result.text, 2);
    // 9 + 0.49 + 0 + 9 + 5 = 23.49; rounding the text sub-score first would give 23.5
    assert_eq!(result.overall, 23);
}

#[test]
fn test_out_of_range_floats_are_clamped() {
    let wild = ThumbnailFeatures {
        has_face: true,
        face_size: 3.0,
        face_emotion: FaceEmotion::Neutral,
        color_vibrancy: 5.0,
        color_contrast: f64::NAN,
        ..Default::default()
    };
    let result = score(&wild);
    assert_eq!(result.face, 80);
    assert_eq!(result.color, 50);
    assert!(result.overall <= 100);
}
