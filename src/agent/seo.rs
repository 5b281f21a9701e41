// THUMBFORGE SEO Helpers
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Offline title/text suggestions. All randomness comes from an explicit
// seeded generator so equal seeds give equal suggestions.

use crate::analysis;
use crate::scoring::{self, ThumbnailFeatures};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::str::FromStr;

pub const POWER_WORDS: [&str; 19] = [
    "AMAZING", "INSANE", "SHOCKING", "SECRET", "VIRAL",
    "EPIC", "ULTIMATE", "BEST", "WORST", "CRAZY",
    "UNBELIEVABLE", "MIND-BLOWING", "INCREDIBLE", "EXPOSED",
    "REVEALED", "TRUTH", "HIDDEN", "BANNED", "FORBIDDEN",
];

pub const EMOTIONAL_TRIGGERS: [&str; 9] = [
    "WOW", "OMG", "NO WAY", "MUST SEE", "WATCH THIS",
    "YOU WON'T BELIEVE", "THIS IS", "FINALLY", "NEW",
];

const MAX_THUMBNAIL_TEXT_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Audience {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "EU")]
    Eu,
    Global,
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(Audience::Us),
            "eu" => Ok(Audience::Eu),
            "global" => Ok(Audience::Global),
            other => Err(format!("unknown audience '{}' (us, eu, global)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorRecommendation {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub reasoning: &'static str,
}

const US_COLORS: [ColorRecommendation; 2] = [
    ColorRecommendation {
        primary: "#FFD700",
        secondary: "#FF0000",
        reasoning: "Yellow + Red: High energy, urgency - performs best in US market",
    },
    ColorRecommendation {
        primary: "#00FFFF",
        secondary: "#FF00FF",
        reasoning: "Cyan + Magenta: Modern, eye-catching - great for tech/gaming",
    },
];

const EU_COLORS: [ColorRecommendation; 2] = [
    ColorRecommendation {
        primary: "#2563EB",
        secondary: "#FFFFFF",
        reasoning: "Blue + White: Trust, professionalism - EU preference",
    },
    ColorRecommendation {
        primary: "#10B981",
        secondary: "#F59E0B",
        reasoning: "Green + Amber: Balanced, optimistic - universal appeal",
    },
];

const GLOBAL_COLORS: [ColorRecommendation; 2] = [
    ColorRecommendation {
        primary: "#FFFFFF",
        secondary: "#000000",
        reasoning: "White + Black: Maximum contrast, works everywhere",
    },
    ColorRecommendation {
        primary: "#FFD700",
        secondary: "#8B4513",
        reasoning: "Gold + Brown: Premium feel, culturally neutral",
    },
];

pub fn color_recommendations(audience: Audience) -> &'static [ColorRecommendation] {
    match audience {
        Audience::Us => &US_COLORS,
        Audience::Eu => &EU_COLORS,
        Audience::Global => &GLOBAL_COLORS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordInsight {
    pub keyword: String,
    pub search_volume: Level,
    pub competition: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSuggestion {
    pub title: String,
    pub thumbnail_text: String,
    pub keywords: Vec<KeywordInsight>,
    pub target_audience: Audience,
    /// CTR score of a text-only thumbnail using the audience's first colour pair.
    #[serde(rename = "estimatedCTR")]
    pub estimated_ctr: u8,
}

pub struct SeoAdvisor {
    rng: StdRng,
}

impl SeoAdvisor {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Three title patterns: power word, how-to, numbered list.
    pub fn titles(&mut self, context: &str) -> Vec<String> {
        let context = context.trim();
        let power = POWER_WORDS[self.rng.gen_range(0..5)];
        let count = self.rng.gen_range(1..=10);
        vec![
            format!("{} {}", power, context),
            format!("How to {} (EASY METHOD)", context),
            format!("{} {} You NEED to Know", count, context),
        ]
    }

    /// Up to three short overlay texts derived from a title.
    pub fn thumbnail_text(&mut self, title: &str) -> Vec<String> {
        let upper = title.to_uppercase();
        let words: Vec<&str> = upper
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .collect();

        let mut suggestions = Vec::new();
        if let Some(power) = words.iter().find(|w| POWER_WORDS.contains(*w)) {
            suggestions.push(power.to_string());
        }
        suggestions.push(words.iter().take(3).copied().collect::<Vec<_>>().join(" "));
        let trigger = EMOTIONAL_TRIGGERS[self.rng.gen_range(0..EMOTIONAL_TRIGGERS.len())];
        suggestions.push(trigger.to_string());

        suggestions
            .into_iter()
            .filter(|s| !s.is_empty() && s.chars().count() <= MAX_THUMBNAIL_TEXT_CHARS)
            .take(3)
            .collect()
    }

    /// Words longer than four characters, first five, with rough demand levels.
    pub fn analyze_keywords(&mut self, title: &str) -> Vec<KeywordInsight> {
        title
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.chars().count() > 4)
            .take(5)
            .map(|keyword| KeywordInsight {
                keyword: keyword.to_string(),
                search_volume: if self.rng.gen_bool(0.5) { Level::High } else { Level::Medium },
                competition: if self.rng.gen_bool(0.5) { Level::Medium } else { Level::Low },
            })
            .collect()
    }

    pub fn suggest(&mut self, context: &str, audience: Audience) -> SeoSuggestion {
        let title = self.titles(context).swap_remove(0);
        let thumbnail_text = self
            .thumbnail_text(&title)
            .into_iter()
            .next()
            .unwrap_or_else(|| EMOTIONAL_TRIGGERS[0].to_string());
        let keywords = self.analyze_keywords(&title);

        let pair = color_recommendations(audience)[0];
        let features = ThumbnailFeatures {
            has_text: true,
            text_length: thumbnail_text.split_whitespace().count() as u32,
            text_contrast: analysis::text_contrast(pair.primary, pair.secondary),
            ..ThumbnailFeatures::default()
        };

        SeoSuggestion {
            title,
            thumbnail_text,
            keywords,
            target_audience: audience,
            estimated_ctr: scoring::score(&features).overall,
        }
    }
}
