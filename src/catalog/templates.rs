// THUMBFORGE Professional Templates
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Static high-CTR layouts. Coordinates are fractions of the 1280x720 canvas.

use crate::error::ThumbError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Gaming,
    Education,
    Entertainment,
    Tech,
    Lifestyle,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 5] = [
        TemplateCategory::Gaming,
        TemplateCategory::Education,
        TemplateCategory::Entertainment,
        TemplateCategory::Tech,
        TemplateCategory::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Gaming => "gaming",
            TemplateCategory::Education => "education",
            TemplateCategory::Entertainment => "entertainment",
            TemplateCategory::Tech => "tech",
            TemplateCategory::Lifestyle => "lifestyle",
        }
    }
}

impl FromStr for TemplateCategory {
    type Err = ThumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        TemplateCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| ThumbError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceAnchor {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextZone {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub shadow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateLayout {
    pub face_position: FaceAnchor,
    pub text_zones: &'static [TextZone],
    pub color_scheme: ColorScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    /// Average click-through rate in percent
    #[serde(rename = "avgCTR")]
    pub avg_ctr: f32,
    pub description: &'static str,
    pub layout: TemplateLayout,
    pub preview: &'static str,
}

const fn zone(x: f32, y: f32, width: f32, height: f32, align: TextAlign) -> TextZone {
    TextZone {
        x,
        y,
        width,
        height,
        align,
    }
}

const fn scheme(
    primary: &'static str,
    secondary: &'static str,
    text: &'static str,
    shadow: &'static str,
) -> ColorScheme {
    ColorScheme {
        primary,
        secondary,
        text,
        shadow,
    }
}

pub static TEMPLATES: [ThumbnailTemplate; 10] = [
    // Gaming (red/black, intense)
    ThumbnailTemplate {
        id: "gaming-shocked",
        name: "Gaming Shock",
        category: TemplateCategory::Gaming,
        avg_ctr: 8.5,
        description: "Perfect for reaction videos and epic moments",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.7, y: 0.5, scale: 0.35 },
            text_zones: &[zone(0.05, 0.15, 0.5, 0.2, TextAlign::Left)],
            color_scheme: scheme("#FF0000", "#000000", "#FFFFFF", "#8B0000"),
        },
        preview: "/templates/gaming-shocked.jpg",
    },
    ThumbnailTemplate {
        id: "gaming-vs",
        name: "Gaming VS Battle",
        category: TemplateCategory::Gaming,
        avg_ctr: 9.2,
        description: "Comparison and versus content",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.25, y: 0.5, scale: 0.3 },
            text_zones: &[zone(0.35, 0.4, 0.3, 0.2, TextAlign::Center)],
            color_scheme: scheme("#FFD700", "#FF0000", "#FFFFFF", "#000000"),
        },
        preview: "/templates/gaming-vs.jpg",
    },
    // Education (blue/white, clean)
    ThumbnailTemplate {
        id: "edu-tutorial",
        name: "Tutorial Master",
        category: TemplateCategory::Education,
        avg_ctr: 7.8,
        description: "How-to and educational content",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.75, y: 0.6, scale: 0.25 },
            text_zones: &[zone(0.05, 0.2, 0.6, 0.25, TextAlign::Left)],
            color_scheme: scheme("#2563EB", "#FFFFFF", "#1E40AF", "#DBEAFE"),
        },
        preview: "/templates/edu-tutorial.jpg",
    },
    ThumbnailTemplate {
        id: "edu-tips",
        name: "Pro Tips",
        category: TemplateCategory::Education,
        avg_ctr: 8.1,
        description: "Tips, tricks, and life hacks",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.3, y: 0.5, scale: 0.3 },
            text_zones: &[zone(0.55, 0.3, 0.4, 0.4, TextAlign::Center)],
            color_scheme: scheme("#10B981", "#FFFFFF", "#065F46", "#D1FAE5"),
        },
        preview: "/templates/edu-tips.jpg",
    },
    // Entertainment (yellow/pink, fun)
    ThumbnailTemplate {
        id: "ent-viral",
        name: "Viral Moment",
        category: TemplateCategory::Entertainment,
        avg_ctr: 9.5,
        description: "Trending and viral content",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.5, y: 0.5, scale: 0.4 },
            text_zones: &[zone(0.1, 0.1, 0.8, 0.15, TextAlign::Center)],
            color_scheme: scheme("#FFD700", "#FF1493", "#FFFFFF", "#8B4513"),
        },
        preview: "/templates/ent-viral.jpg",
    },
    ThumbnailTemplate {
        id: "ent-reaction",
        name: "Epic Reaction",
        category: TemplateCategory::Entertainment,
        avg_ctr: 8.9,
        description: "Reaction and commentary videos",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.65, y: 0.45, scale: 0.35 },
            text_zones: &[zone(0.05, 0.6, 0.5, 0.3, TextAlign::Left)],
            color_scheme: scheme("#FF00FF", "#00FFFF", "#FFFFFF", "#000000"),
        },
        preview: "/templates/ent-reaction.jpg",
    },
    // Tech (cyan/purple, modern)
    ThumbnailTemplate {
        id: "tech-review",
        name: "Tech Review",
        category: TemplateCategory::Tech,
        avg_ctr: 7.6,
        description: "Product reviews and unboxing",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.25, y: 0.6, scale: 0.28 },
            text_zones: &[zone(0.5, 0.25, 0.45, 0.3, TextAlign::Center)],
            color_scheme: scheme("#00FFFF", "#8B00FF", "#FFFFFF", "#000033"),
        },
        preview: "/templates/tech-review.jpg",
    },
    ThumbnailTemplate {
        id: "tech-comparison",
        name: "Tech Comparison",
        category: TemplateCategory::Tech,
        avg_ctr: 8.3,
        description: "Product comparisons and benchmarks",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.5, y: 0.7, scale: 0.2 },
            text_zones: &[
                zone(0.1, 0.15, 0.35, 0.25, TextAlign::Center),
                zone(0.55, 0.15, 0.35, 0.25, TextAlign::Center),
            ],
            color_scheme: scheme("#3B82F6", "#8B5CF6", "#FFFFFF", "#1E1B4B"),
        },
        preview: "/templates/tech-comparison.jpg",
    },
    // Lifestyle (pastel, aesthetic)
    ThumbnailTemplate {
        id: "life-vlog",
        name: "Daily Vlog",
        category: TemplateCategory::Lifestyle,
        avg_ctr: 7.2,
        description: "Vlogs and daily life content",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.6, y: 0.5, scale: 0.32 },
            text_zones: &[zone(0.05, 0.25, 0.45, 0.2, TextAlign::Left)],
            color_scheme: scheme("#FFC0CB", "#FFE4E1", "#8B4789", "#FFFFFF"),
        },
        preview: "/templates/life-vlog.jpg",
    },
    ThumbnailTemplate {
        id: "life-transformation",
        name: "Transformation",
        category: TemplateCategory::Lifestyle,
        avg_ctr: 8.7,
        description: "Before/after and transformation content",
        layout: TemplateLayout {
            face_position: FaceAnchor { x: 0.3, y: 0.5, scale: 0.3 },
            text_zones: &[zone(0.5, 0.4, 0.45, 0.2, TextAlign::Center)],
            color_scheme: scheme("#10B981", "#FBBF24", "#FFFFFF", "#065F46"),
        },
        preview: "/templates/life-transformation.jpg",
    },
];

pub fn all() -> &'static [ThumbnailTemplate] {
    &TEMPLATES
}

pub fn find(id: &str) -> Option<&'static ThumbnailTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn by_category(category: TemplateCategory) -> Vec<&'static ThumbnailTemplate> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

/// Highest average CTR first; ties keep catalog order.
pub fn top(limit: usize) -> Vec<&'static ThumbnailTemplate> {
    rank(TEMPLATES.iter().collect(), limit)
}

/// Optional category filter, then optional best-`limit` cut.
pub fn listing(
    category: Option<TemplateCategory>,
    limit: Option<usize>,
) -> Vec<&'static ThumbnailTemplate> {
    match (category, limit) {
        (None, None) => all().iter().collect(),
        (None, Some(limit)) => top(limit),
        (Some(category), None) => by_category(category),
        (Some(category), Some(limit)) => rank(by_category(category), limit),
    }
}

fn rank(mut list: Vec<&'static ThumbnailTemplate>, limit: usize) -> Vec<&'static ThumbnailTemplate> {
    list.sort_by(|a, b| b.avg_ctr.total_cmp(&a.avg_ctr));
    list.truncate(limit);
    list
}
