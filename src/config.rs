// THUMBFORGE Configuration
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use crate::catalog::presets::PRESETS_FILE;
use crate::state::FlowVariant;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:11434/v1";
pub const DEFAULT_MODEL: &str = "llama3:latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read from `THUMBFORGE_*` environment variables
/// (a `.env` file is loaded by the binary first).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// OpenAI-compatible endpoint root, e.g. a local Ollama.
    pub api_url: String,
    pub model: String,
    /// Bearer token. Hosted endpoints need one; local Ollama does not.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub port: u16,
    pub flow: FlowVariant,
    pub presets_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: DEFAULT_PORT,
            flow: FlowVariant::Studio,
            presets_path: PathBuf::from(PRESETS_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Malformed values keep their default
    /// and are logged.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = get("THUMBFORGE_API_URL") {
            config.api_url = url;
        }
        if let Some(model) = get("THUMBFORGE_MODEL") {
            config.model = model;
        }
        config.api_key = get("THUMBFORGE_API_KEY");

        if let Some(raw) = get("THUMBFORGE_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("[CONFIG] Ignoring THUMBFORGE_TIMEOUT_SECS={:?}", raw),
            }
        }
        if let Some(raw) = get("THUMBFORGE_PORT") {
            match raw.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => warn!("[CONFIG] Ignoring THUMBFORGE_PORT={:?}", raw),
            }
        }
        if let Some(raw) = get("THUMBFORGE_FLOW") {
            match raw.parse::<FlowVariant>() {
                Ok(flow) => config.flow = flow,
                Err(e) => warn!("[CONFIG] {}", e),
            }
        }
        if let Some(path) = get("THUMBFORGE_PRESETS") {
            config.presets_path = PathBuf::from(path);
        }

        config
    }
}
