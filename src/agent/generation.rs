// THUMBFORGE Text Generation Bridge
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE
//
// Remote text completion for anime prompts and SEO metadata. Every call is
// bounded by the configured timeout and degrades to static values on failure.

use crate::catalog::styles;
use crate::config::AppConfig;
use crate::error::{Result, ThumbError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

const SYSTEM_PROMPT: &str =
    "You are a YouTube thumbnail assistant. Respond with exactly what is asked, no commentary.";

pub const FALLBACK_TITLE: &str = "Amazing Anime Transformation";
pub const FALLBACK_THUMBNAIL_TEXT: &str = "WOW";
pub const FALLBACK_COLORS: [&str; 3] = ["#FF0000", "#FFFF00", "#00FFFF"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPrompt {
    pub style: &'static str,
    pub prompt: String,
    /// True when the static prompt was used instead of a remote completion.
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub thumbnail_text: String,
    pub colors: Vec<String>,
    #[serde(default)]
    pub fallback: bool,
}

impl SeoMetadata {
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            thumbnail_text: FALLBACK_THUMBNAIL_TEXT.to_string(),
            colors: FALLBACK_COLORS.iter().map(|c| c.to_string()).collect(),
            fallback: true,
        }
    }
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct TextGenerator {
    client: Client,
    api_url: String,
    model: String,
    api_key: Option<String>,
}

fn build_client(timeout: Duration) -> Client {
    match Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("[GEN] HTTP client setup failed ({}); retrying with timeout only", e);
            Client::builder()
                .timeout(timeout)
                .no_proxy()
                .build()
                .unwrap_or_default()
        }
    }
}

impl TextGenerator {
    pub fn new(api_url: &str, model: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            api_url: api_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.api_url,
            &config.model,
            config.api_key.clone(),
            config.timeout,
        )
    }

    /// Loopback endpoints (a local Ollama) run without a key; anything else needs one.
    fn requires_key(&self) -> bool {
        let host = reqwest::Url::parse(&self.api_url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()));
        !matches!(
            host.as_deref(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]") | Some("::1")
        )
    }

    /// One chat completion. Returns the trimmed assistant message.
    pub async fn complete(&self, request: &str) -> Result<String> {
        if self.api_key.is_none() && self.requires_key() {
            return Err(ThumbError::RemoteGeneration(
                "API key not configured".to_string(),
            ));
        }

        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": request }
            ],
            "temperature": 0.7
        });
        let endpoint = format!("{}/chat/completions", self.api_url);

        let mut req = self.client.post(&endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(ThumbError::RemoteGeneration(format!(
                "API error: {}",
                resp.status()
            )));
        }

        let body: serde_json::Value = resp.json().await?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .unwrap_or_default();
        if content.is_empty() {
            return Err(ThumbError::RemoteGeneration("empty response".to_string()));
        }
        Ok(content.to_string())
    }

    /// Image-generation prompt for an anime style. Unknown styles resolve to `vibrant`.
    pub async fn anime_prompt(&self, style_id: &str) -> GeneratedPrompt {
        let style = styles::resolve(style_id);
        info!("[GEN] Requesting {} prompt from {}", style.id, self.model);

        match self.complete(&style.generation_prompt()).await {
            Ok(prompt) => GeneratedPrompt {
                style: style.id,
                prompt,
                fallback: false,
            },
            Err(e) => {
                warn!("[GEN] {}; using static prompt for {}", e, style.id);
                GeneratedPrompt {
                    style: style.id,
                    prompt: style.fallback_prompt(),
                    fallback: true,
                }
            }
        }
    }

    /// Title, thumbnail text and colours for a video context.
    pub async fn seo_metadata(&self, context: &str) -> SeoMetadata {
        let request = seo_request(context);
        let reply = match self.complete(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("[GEN] {}; using fallback SEO metadata", e);
                return SeoMetadata::fallback();
            }
        };

        parse_seo_metadata(&reply).unwrap_or_else(|e| {
            warn!("[GEN] Unparseable SEO reply ({}); using fallback", e);
            SeoMetadata::fallback()
        })
    }
}

fn seo_request(context: &str) -> String {
    format!(
        "Generate YouTube SEO metadata for a video thumbnail with this context: \"{}\"\n\n\
         Return a JSON object with:\n\
         {{\n  \"title\": \"Catchy English title under 60 characters\",\n  \
         \"thumbnailText\": \"Short punchy text 1-4 words for thumbnail\",\n  \
         \"colors\": [\"#hex1\", \"#hex2\", \"#hex3\"] (attention-grabbing colors)\n}}\n\n\
         Return ONLY valid JSON, no markdown or explanations.",
        context
    )
}

/// Parse a model reply, tolerating ```json fences around the object.
pub fn parse_seo_metadata(reply: &str) -> Result<SeoMetadata> {
    let cleaned = reply.replace("```json", "").replace("```", "");
    let mut meta: SeoMetadata = serde_json::from_str(cleaned.trim())
        .map_err(|e| ThumbError::RemoteGeneration(format!("bad SEO JSON: {}", e)))?;
    meta.fallback = false;
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fenced_reply() {
        let reply = "```json\n{\"title\":\"Epic Build\",\"thumbnailText\":\"EPIC\",\"colors\":[\"#FFD700\"]}\n```";
        let meta = parse_seo_metadata(reply).unwrap();
        assert_eq!(meta.title, "Epic Build");
        assert_eq!(meta.thumbnail_text, "EPIC");
        assert!(!meta.fallback);
        assert!(parse_seo_metadata("sure! here you go").is_err());
    }

    #[test]
    fn test_key_requirement() {
        let t = Duration::from_secs(1);
        assert!(!TextGenerator::new("http://localhost:11434/v1", "m", None, t).requires_key());
        assert!(TextGenerator::new("https://api.example.com/v1", "m", None, t).requires_key());
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let gen = TextGenerator::new(
            "https://api.example.com/v1",
            "m",
            None,
            Duration::from_secs(1),
        );
        let prompt = gen.anime_prompt("dark").await;
        assert!(prompt.fallback);
        assert_eq!(prompt.style, "dark");
        assert_eq!(gen.seo_metadata("cats").await, SeoMetadata::fallback());
    }

    #[tokio::test]
    async fn test_connection_refused_falls_back() {
        let gen = TextGenerator::new("http://127.0.0.1:9/v1", "m", None, Duration::from_secs(2));
        assert!(matches!(
            gen.complete("hi").await,
            Err(ThumbError::RemoteGeneration(_))
        ));
        let prompt = gen.anime_prompt("nope").await;
        assert!(prompt.fallback);
        assert_eq!(prompt.style, "vibrant");
    }

    #[tokio::test]
    async fn test_stalled_endpoint_honours_timeout() {
        // accepts the connection but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((sock, _)) = listener.accept().await {
                held.push(sock);
            }
        });

        let gen = TextGenerator::new(
            &format!("http://{}/v1", addr),
            "m",
            None,
            Duration::from_millis(300),
        );
        let started = std::time::Instant::now();
        let prompt = gen.anime_prompt("ghibli").await;
        assert!(prompt.fallback);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
