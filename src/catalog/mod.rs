// THUMBFORGE Catalogs
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Read-only reference data: enhancement presets, professional templates, anime styles.

pub mod presets;
pub mod styles;
pub mod templates;

pub use presets::{Preset, PresetTable};
pub use styles::AnimeStyle;
pub use templates::{TemplateCategory, ThumbnailTemplate};
