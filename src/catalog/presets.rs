// THUMBFORGE Enhancement Presets
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use crate::engine::EnhancementSettings;
use crate::error::{Result, ThumbError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default override file, looked up in the working directory.
pub const PRESETS_FILE: &str = "presets.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub settings: EnhancementSettings,
}

impl Preset {
    fn builtin(
        id: &str,
        name: &str,
        description: &str,
        settings: EnhancementSettings,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            settings,
        }
    }
}

/// Read-only preset lookup keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetTable {
    presets: Vec<Preset>,
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetTable {
    pub fn builtin() -> Self {
        Self {
            presets: vec![
                Preset::builtin(
                    "vibrant",
                    "Vibrant Anime",
                    "Bright, saturated colors for energetic content",
                    EnhancementSettings::new(115.0, 125.0, 140.0, 0.0, 15.0, 20.0),
                ),
                Preset::builtin(
                    "soft",
                    "Soft Ghibli",
                    "Dreamy, gentle aesthetic like Studio Ghibli",
                    EnhancementSettings::new(108.0, 95.0, 105.0, 2.0, 25.0, 0.0),
                ),
                Preset::builtin(
                    "sharp",
                    "Sharp Detail",
                    "Crisp, clear details for action scenes",
                    EnhancementSettings::new(105.0, 130.0, 110.0, 0.0, 10.0, 40.0),
                ),
                Preset::builtin(
                    "cinematic",
                    "Cinematic",
                    "Film-like quality with dramatic vignette",
                    EnhancementSettings::new(95.0, 120.0, 100.0, 0.0, 40.0, 15.0),
                ),
                Preset::builtin(
                    "ghibli",
                    "Ghibli Style",
                    "Soft focus with warm, nostalgic feel",
                    EnhancementSettings::new(112.0, 100.0, 115.0, 3.0, 30.0, 5.0),
                ),
            ],
        }
    }

    /// Load a preset table from JSON, falling back to the built-in table.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(table) => {
                info!("[PRESETS] Loaded {} presets from {:?}", table.presets.len(), path);
                table
            }
            Err(ThumbError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("[PRESETS] Using built-in presets");
                Self::builtin()
            }
            Err(e) => {
                warn!("[PRESETS] {:?} unusable ({}); using built-in presets", path, e);
                Self::builtin()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let table: PresetTable = serde_json::from_str(&content)
            .map_err(|e| ThumbError::Config(format!("preset JSON: {}", e)))?;
        if table.presets.is_empty() {
            return Err(ThumbError::Config("empty preset table".to_string()));
        }
        Ok(table)
    }

    pub fn get(&self, id: &str) -> Result<&Preset> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ThumbError::UnknownPreset(id.to_string()))
    }

    /// Resolve a preset id to its settings.
    pub fn settings(&self, id: &str) -> Result<EnhancementSettings> {
        self.get(id).map(|p| p.settings)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_values() {
        let table = PresetTable::builtin();
        assert_eq!(table.ids(), vec!["vibrant", "soft", "sharp", "cinematic", "ghibli"]);
        assert_eq!(
            table.settings("cinematic").unwrap(),
            EnhancementSettings::new(95.0, 120.0, 100.0, 0.0, 40.0, 15.0)
        );
        assert!(matches!(table.get("neon"), Err(ThumbError::UnknownPreset(_))));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let table = PresetTable::load(Path::new("__no_such_presets.json"));
        assert_eq!(table, PresetTable::builtin());
    }

    #[test]
    fn test_load_override_and_bad_json() {
        let dir = std::env::temp_dir().join("thumbforge_presets_test");
        fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.json");
        fs::write(
            &good,
            r#"{"presets":[{"id":"mono","name":"Mono","description":"Gray","settings":{"saturation":0}}]}"#,
        )
        .unwrap();
        let table = PresetTable::load(&good);
        assert_eq!(table.ids(), vec!["mono"]);
        assert_eq!(table.settings("mono").unwrap().saturation, 0.0);
        assert_eq!(table.settings("mono").unwrap().brightness, 110.0);

        let bad = dir.join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert_eq!(PresetTable::load(&bad), PresetTable::builtin());

        let _ = fs::remove_dir_all(&dir);
    }
}
