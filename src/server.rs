// THUMBFORGE API Server
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, DefaultBodyLimit, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::agent::{GeneratedPrompt, SeoMetadata};
use crate::analysis::{self, ColorMetrics};
use crate::catalog::{styles, templates, AnimeStyle, Preset, TemplateCategory, ThumbnailTemplate};
use crate::engine::{self, EnhancementSettings};
use crate::error::{Result, ThumbError};
use crate::scoring::{self, CtrScore, ThumbnailFeatures};
use crate::state::{FlowConfig, ServiceState};
use crate::upload::{self, MAX_UPLOAD_BYTES};

pub type AppState = Arc<ServiceState>;

/// Static assets (template previews live under `public/templates/`).
pub const PUBLIC_DIR: &str = "public";

impl IntoResponse for ThumbError {
    fn into_response(self) -> Response {
        let status = match &self {
            ThumbError::InvalidImage(_)
            | ThumbError::UnsupportedFormat(_)
            | ThumbError::UnknownPreset(_)
            | ThumbError::UnknownCategory(_)
            | ThumbError::InvalidFeatureVector { .. } => StatusCode::BAD_REQUEST,
            ThumbError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("[SERVER] {}", self);
        } else {
            warn!("[SERVER] Rejected request: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/score", post(score_thumbnail))
        .route("/api/score", post(score_thumbnail))
        .route("/api/presets", get(list_presets))
        .route("/api/templates", get(list_templates))
        .route("/api/styles", get(list_styles))
        .route("/api/enhance", post(enhance_image))
        .route("/api/analyze", post(analyze_image))
        .route("/api/generate", post(generate_prompt))
        .route("/api/seo", post(seo_metadata))
        .route("/api/flow", get(flow_config))
        .route("/api/health", get(health))
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(port: u16, state: AppState) -> std::io::Result<()> {
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let display_addr = if addr.ip().is_unspecified() {
        format!("127.0.0.1:{}", port)
    } else {
        addr.to_string()
    };
    info!("🚀 THUMBFORGE API Server running on http://{}", display_addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

async fn score_thumbnail(
    payload: std::result::Result<Json<ThumbnailFeatures>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(features)) => {
            let result: CtrScore = scoring::score(&features);
            info!("[CTR] Scored {} ({})", result.overall, result.label.as_str());
            Json(result).into_response()
        }
        Err(rejection) => {
            warn!("[CTR] Bad feature vector: {}", rejection.body_text());
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalogs
// ─────────────────────────────────────────────────────────────────────────────

async fn list_presets(State(state): State<AppState>) -> Json<Vec<Preset>> {
    Json(state.presets.iter().cloned().collect())
}

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub category: Option<String>,
    pub top: Option<usize>,
}

async fn list_templates(
    Query(query): Query<TemplateQuery>,
) -> Result<Json<Vec<&'static ThumbnailTemplate>>> {
    let category = match &query.category {
        Some(raw) => Some(raw.parse::<TemplateCategory>()?),
        None => None,
    };
    Ok(Json(templates::listing(category, query.top)))
}

async fn list_styles() -> Json<&'static [AnimeStyle]> {
    Json(styles::all())
}

// ─────────────────────────────────────────────────────────────────────────────
// Enhancement
// ─────────────────────────────────────────────────────────────────────────────

/// `?preset=` plus per-field overrides, applied on top of the preset (or defaults).
#[derive(Debug, Default, Deserialize)]
pub struct EnhanceParams {
    pub preset: Option<String>,
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub saturation: Option<f32>,
    pub blur: Option<f32>,
    pub vignette: Option<f32>,
    pub sharpen: Option<f32>,
}

impl EnhanceParams {
    pub fn resolve(&self, state: &ServiceState) -> Result<EnhancementSettings> {
        let base = match &self.preset {
            Some(id) => state.presets.settings(id)?,
            None => EnhancementSettings::default(),
        };
        Ok(EnhancementSettings {
            brightness: self.brightness.unwrap_or(base.brightness),
            contrast: self.contrast.unwrap_or(base.contrast),
            saturation: self.saturation.unwrap_or(base.saturation),
            blur: self.blur.unwrap_or(base.blur),
            vignette: self.vignette.unwrap_or(base.vignette),
            sharpen: self.sharpen.unwrap_or(base.sharpen),
        })
    }
}

fn join_error(e: tokio::task::JoinError) -> ThumbError {
    ThumbError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
}

async fn enhance_image(
    State(state): State<AppState>,
    Query(params): Query<EnhanceParams>,
    body: Bytes,
) -> Result<Response> {
    let settings = params.resolve(&state)?;
    info!("[ENHANCE] {} bytes, preset {:?}", body.len(), params.preset);

    let png = tokio::task::spawn_blocking(move || -> Result<Vec<u8>> {
        let source = upload::decode(&body)?;
        engine::enhance(&source, &settings)?.to_png()
    })
    .await
    .map_err(join_error)??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

async fn analyze_image(body: Bytes) -> Result<Json<ColorMetrics>> {
    let metrics = tokio::task::spawn_blocking(move || -> Result<ColorMetrics> {
        let source = upload::decode(&body)?;
        let frame = engine::enhance(&source, &EnhancementSettings::default())?;
        Ok(analysis::measure_colors(&frame))
    })
    .await
    .map_err(join_error)??;

    Ok(Json(metrics))
}

// ─────────────────────────────────────────────────────────────────────────────
// Text generation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub style: Option<String>,
}

async fn generate_prompt(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<GeneratedPrompt> {
    let style = req.style.as_deref().unwrap_or(styles::STYLES[0].id);
    Json(state.generator.anime_prompt(style).await)
}

#[derive(Debug, Deserialize)]
pub struct SeoRequest {
    pub context: String,
}

async fn seo_metadata(
    State(state): State<AppState>,
    Json(req): Json<SeoRequest>,
) -> Json<SeoMetadata> {
    Json(state.generator.seo_metadata(&req.context).await)
}

/// Panels and defaults the front end should show for the configured flow.
async fn flow_config(State(state): State<AppState>) -> Json<FlowConfig> {
    Json(state.flow.clone())
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
    flow: String,
    title: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        flow: state.flow.variant.to_string(),
        title: state.flow.title,
    })
}
