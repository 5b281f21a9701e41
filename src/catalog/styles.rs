// THUMBFORGE Anime Styles
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimeStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Phrase spliced into the text-generation prompt.
    pub descriptor: &'static str,
}

pub static STYLES: [AnimeStyle; 4] = [
    AnimeStyle {
        id: "vibrant",
        name: "Vibrant Anime",
        description: "Bright, eye-catching colors perfect for gaming & entertainment",
        descriptor: "vibrant anime style with bright colors, sharp details, modern anime aesthetic",
    },
    AnimeStyle {
        id: "ghibli",
        name: "Studio Ghibli",
        description: "Soft, dreamy aesthetic for storytelling & lifestyle content",
        descriptor: "Studio Ghibli style with soft watercolor tones, dreamy atmosphere, hand-drawn quality",
    },
    AnimeStyle {
        id: "dark",
        name: "Dark Fantasy",
        description: "Dramatic, mysterious vibe for horror & thriller videos",
        descriptor: "dark fantasy anime with dramatic lighting, gothic elements, moody atmosphere",
    },
    AnimeStyle {
        id: "cyberpunk",
        name: "Cyberpunk",
        description: "Neon, futuristic look for tech & sci-fi channels",
        descriptor: "cyberpunk anime with neon colors, futuristic elements, high-tech aesthetic",
    },
];

pub fn all() -> &'static [AnimeStyle] {
    &STYLES
}

/// Look up a style; unknown ids resolve to `vibrant`.
pub fn resolve(id: &str) -> &'static AnimeStyle {
    STYLES.iter().find(|s| s.id == id).unwrap_or(&STYLES[0])
}

impl AnimeStyle {
    /// Instruction sent to the text-generation collaborator.
    pub fn generation_prompt(&self) -> String {
        format!(
            "Create a detailed image generation prompt for converting a photo to {}.\n\n\
             The prompt should be concise (under 100 words) and focus on:\n\
             - Artistic style and technique\n\
             - Color palette and lighting\n\
             - Level of detail and composition\n\n\
             Return ONLY the prompt text, no explanations.",
            self.descriptor
        )
    }

    /// Static prompt used when the remote collaborator is unavailable.
    pub fn fallback_prompt(&self) -> String {
        format!(
            "Transform this photo into {}, keeping the subject's pose and expression, \
             1280x720 YouTube thumbnail composition, high detail.",
            self.descriptor
        )
    }
}
