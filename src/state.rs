// THUMBFORGE Session State
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Flow configuration, the three-step wizard session and the shared server state.

use crate::agent::TextGenerator;
use crate::analysis::{self, ColorMetrics};
use crate::catalog::{styles, PresetTable, ThumbnailTemplate};
use crate::config::AppConfig;
use crate::engine::EnhancementSettings;
use crate::scoring::{FaceEmotion, ThumbnailFeatures};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Flow configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowVariant {
    /// Enhancement only.
    Enhancer,
    /// Templates, CTR panel and text overlay.
    Studio,
    /// Anime styles and text overlay.
    Anime,
}

impl FromStr for FlowVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enhancer" => Ok(FlowVariant::Enhancer),
            "studio" => Ok(FlowVariant::Studio),
            "anime" => Ok(FlowVariant::Anime),
            other => Err(format!(
                "unknown flow '{}' (enhancer, studio, anime)",
                other
            )),
        }
    }
}

impl fmt::Display for FlowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowVariant::Enhancer => "enhancer",
            FlowVariant::Studio => "studio",
            FlowVariant::Anime => "anime",
        };
        f.write_str(name)
    }
}

/// Which features a flow exposes and what it starts from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConfig {
    pub variant: FlowVariant,
    pub title: &'static str,
    pub templates: bool,
    pub ctr_panel: bool,
    pub anime_styles: bool,
    pub text_overlay: bool,
    pub max_text_chars: usize,
    pub default_text: &'static str,
    pub default_text_color: &'static str,
    pub default_shadow_color: &'static str,
    pub default_settings: EnhancementSettings,
}

impl FlowConfig {
    pub fn for_variant(variant: FlowVariant) -> Self {
        match variant {
            FlowVariant::Enhancer => Self {
                variant,
                title: "Anime Thumbnail Enhancer",
                templates: false,
                ctr_panel: false,
                anime_styles: false,
                text_overlay: false,
                max_text_chars: 0,
                default_text: "",
                default_text_color: "#FFFFFF",
                default_shadow_color: "#000000",
                default_settings: EnhancementSettings::default(),
            },
            FlowVariant::Studio => Self {
                variant,
                title: "Thumbnail Studio Pro",
                templates: true,
                ctr_panel: true,
                anime_styles: false,
                text_overlay: true,
                max_text_chars: 30,
                default_text: "AMAZING",
                default_text_color: "#FFD700",
                default_shadow_color: "#8B4513",
                default_settings: EnhancementSettings::new(105.0, 120.0, 130.0, 0.0, 0.0, 0.0),
            },
            FlowVariant::Anime => Self {
                variant,
                title: "Anime Thumbnail Maker",
                templates: false,
                ctr_panel: false,
                anime_styles: true,
                text_overlay: true,
                max_text_chars: 20,
                default_text: "AMAZING",
                default_text_color: "#FFFFFF",
                default_shadow_color: "#000000",
                default_settings: EnhancementSettings::new(100.0, 115.0, 120.0, 0.0, 0.0, 0.0),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wizard session
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Upload,
    Customize,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOverlay {
    pub text: String,
    pub color: String,
    pub shadow: String,
}

/// Caller-supplied face observations. No detection happens here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceHints {
    pub has_face: bool,
    pub face_size: f64,
    pub emotion: FaceEmotion,
}

impl Default for FaceHints {
    fn default() -> Self {
        Self {
            has_face: true,
            face_size: 0.3,
            emotion: FaceEmotion::Surprised,
        }
    }
}

/// Used when no measurement has been taken yet.
pub const ASSUMED_VIBRANCY: f64 = 0.8;
pub const ASSUMED_CONTRAST: f64 = 0.9;

#[derive(Debug, Clone)]
pub enum Event {
    ImageLoaded { width: u32, height: u32 },
    PresetSelected { id: String, settings: EnhancementSettings },
    SettingsChanged(EnhancementSettings),
    StyleSelected(String),
    TemplateSelected(&'static ThumbnailTemplate),
    TextChanged(String),
    TextColorChanged(String),
    FaceObserved(FaceHints),
    ColorsMeasured(ColorMetrics),
    CompositionChecked(bool),
    Next,
    Back,
    Reset,
    NewImage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub flow: FlowConfig,
    pub step: WizardStep,
    pub source: Option<SourceInfo>,
    pub settings: EnhancementSettings,
    pub preset: Option<String>,
    pub style: Option<&'static str>,
    pub template: Option<&'static str>,
    pub overlay: Option<TextOverlay>,
    pub face: FaceHints,
    pub rule_of_thirds: bool,
    pub colors: Option<ColorMetrics>,
}

impl Session {
    pub fn new(flow: FlowConfig) -> Self {
        let overlay = flow.text_overlay.then(|| TextOverlay {
            text: flow.default_text.to_string(),
            color: flow.default_text_color.to_string(),
            shadow: flow.default_shadow_color.to_string(),
        });
        let style = flow.anime_styles.then(|| styles::STYLES[0].id);

        Self {
            step: WizardStep::Upload,
            source: None,
            settings: flow.default_settings,
            preset: None,
            style,
            template: None,
            overlay,
            face: FaceHints::default(),
            rule_of_thirds: true,
            colors: None,
            flow,
        }
    }

    pub fn for_variant(variant: FlowVariant) -> Self {
        Self::new(FlowConfig::for_variant(variant))
    }

    /// Pure transition. Events for features the flow does not expose are ignored.
    pub fn apply(self, event: Event) -> Self {
        debug!("[SESSION] {:?} <- {:?}", self.step, event);
        match event {
            Event::ImageLoaded { width, height } => {
                if width == 0 || height == 0 {
                    return self;
                }
                Self {
                    source: Some(SourceInfo { width, height }),
                    colors: None,
                    step: if self.step == WizardStep::Upload {
                        WizardStep::Customize
                    } else {
                        self.step
                    },
                    ..self
                }
            }
            Event::PresetSelected { id, settings } => Self {
                preset: Some(id),
                settings,
                colors: None,
                ..self
            },
            Event::SettingsChanged(settings) => Self {
                preset: None,
                settings,
                colors: None,
                ..self
            },
            Event::StyleSelected(id) if self.flow.anime_styles => Self {
                style: Some(styles::resolve(&id).id),
                ..self
            },
            Event::TemplateSelected(template) if self.flow.templates => {
                let scheme = template.layout.color_scheme;
                let overlay = self.overlay.map(|o| TextOverlay {
                    color: scheme.text.to_string(),
                    shadow: scheme.shadow.to_string(),
                    ..o
                });
                Self {
                    template: Some(template.id),
                    overlay,
                    ..self
                }
            }
            Event::TextChanged(text) => {
                let max = self.flow.max_text_chars;
                let overlay = self.overlay.map(|o| TextOverlay {
                    text: text.chars().take(max).collect(),
                    ..o
                });
                Self { overlay, ..self }
            }
            Event::TextColorChanged(color) => {
                let overlay = self.overlay.map(|o| TextOverlay { color, ..o });
                Self { overlay, ..self }
            }
            Event::FaceObserved(face) => Self { face, ..self },
            Event::ColorsMeasured(metrics) => Self {
                colors: Some(metrics),
                ..self
            },
            Event::CompositionChecked(rule_of_thirds) => Self {
                rule_of_thirds,
                ..self
            },
            Event::Next => {
                let step = match self.step {
                    WizardStep::Upload if self.source.is_some() => WizardStep::Customize,
                    WizardStep::Upload => WizardStep::Upload,
                    WizardStep::Customize | WizardStep::Export => WizardStep::Export,
                };
                Self { step, ..self }
            }
            Event::Back => {
                let step = match self.step {
                    WizardStep::Export => WizardStep::Customize,
                    WizardStep::Customize | WizardStep::Upload => WizardStep::Upload,
                };
                Self { step, ..self }
            }
            Event::Reset => Self::new(self.flow),
            Event::NewImage => Self {
                step: WizardStep::Upload,
                source: None,
                colors: None,
                ..self
            },
            // Disabled in this flow.
            Event::StyleSelected(_) | Event::TemplateSelected(_) => self,
        }
    }

    /// Project the session onto the scorer's input.
    pub fn features(&self) -> ThumbnailFeatures {
        let (has_text, text_length, text_contrast) = match &self.overlay {
            Some(o) if !o.text.trim().is_empty() => (
                true,
                o.text.split_whitespace().count() as u32,
                analysis::text_contrast(&o.color, &o.shadow),
            ),
            _ => (false, 0, 0.0),
        };
        let colors = self.colors.unwrap_or(ColorMetrics {
            color_vibrancy: ASSUMED_VIBRANCY,
            color_contrast: ASSUMED_CONTRAST,
        });

        ThumbnailFeatures {
            has_face: self.face.has_face,
            face_size: self.face.face_size,
            face_emotion: self.face.emotion,
            has_text,
            text_length,
            text_contrast,
            color_vibrancy: colors.color_vibrancy,
            color_contrast: colors.color_contrast,
            rule_of_thirds: self.rule_of_thirds,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared server state
// ─────────────────────────────────────────────────────────────────────────────

pub struct ServiceState {
    pub config: AppConfig,
    pub presets: PresetTable,
    pub generator: TextGenerator,
    pub flow: FlowConfig,
}

impl ServiceState {
    pub fn new(config: AppConfig) -> Self {
        let presets = PresetTable::load(&config.presets_path);
        Self::with_presets(config, presets)
    }

    pub fn with_presets(config: AppConfig, presets: PresetTable) -> Self {
        Self {
            generator: TextGenerator::from_config(&config),
            flow: FlowConfig::for_variant(config.flow),
            presets,
            config,
        }
    }
}
