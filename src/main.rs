// THUMBFORGE Main Entry Point
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

use thumbforge_core::agent::{Audience, SeoAdvisor, TextGenerator};
use thumbforge_core::analysis;
use thumbforge_core::catalog::{styles, templates, PresetTable, TemplateCategory};
use thumbforge_core::config::AppConfig;
use thumbforge_core::engine::{self, EnhancementSettings};
use thumbforge_core::scoring::{self, FaceEmotion, ThumbnailFeatures};
use thumbforge_core::server;
use thumbforge_core::state::{Event, FaceHints, FlowVariant, ServiceState, Session};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "thumbforge-core")]
#[command(about = "THUMBFORGE Thumbnail Enhancer & CTR Scorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Per-field overrides on top of a preset or the defaults.
#[derive(Args, Debug, Default)]
struct SettingsArgs {
    /// Preset id (vibrant, soft, sharp, cinematic, ghibli)
    #[arg(short, long)]
    preset: Option<String>,

    #[arg(long)]
    brightness: Option<f32>,
    #[arg(long)]
    contrast: Option<f32>,
    #[arg(long)]
    saturation: Option<f32>,
    /// Gaussian blur sigma in pixels (0-20)
    #[arg(long)]
    blur: Option<f32>,
    #[arg(long)]
    vignette: Option<f32>,
    #[arg(long)]
    sharpen: Option<f32>,
}

impl SettingsArgs {
    fn resolve(&self, presets: &PresetTable, base: EnhancementSettings) -> Result<EnhancementSettings> {
        let base = match &self.preset {
            Some(id) => presets.settings(id)?,
            None => base,
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

#[derive(Subcommand)]
enum Commands {
    /// Enhance a photo into a 1280x720 PNG thumbnail
    Enhance {
        /// Input JPEG/PNG
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG (defaults to <input>_thumb.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Print measured colour vibrancy/contrast of the result
        #[arg(long)]
        analyze: bool,
    },

    /// Estimate the CTR of a thumbnail
    Score {
        /// JSON feature vector; when absent the vector is built from the flags below
        #[arg(short, long)]
        features: Option<PathBuf>,

        /// Flow whose defaults seed the session (enhancer, studio, anime)
        #[arg(long)]
        flow: Option<FlowVariant>,

        /// Image to measure colours from, enhanced with the flow's defaults
        #[arg(long)]
        image: Option<PathBuf>,

        /// Overlay text
        #[arg(long)]
        text: Option<String>,

        /// Overlay text colour (#RRGGBB)
        #[arg(long)]
        text_color: Option<String>,

        /// Template id whose colour scheme seeds the overlay
        #[arg(long)]
        template: Option<String>,

        #[arg(long)]
        no_face: bool,

        /// Face area as a fraction of the frame
        #[arg(long, default_value_t = 0.3)]
        face_size: f64,

        #[arg(long, default_value = "surprised")]
        emotion: FaceEmotion,

        /// Key elements are off the rule-of-thirds grid
        #[arg(long)]
        off_grid: bool,
    },

    /// List enhancement presets
    Presets,

    /// List professional templates
    Templates {
        #[arg(short, long)]
        category: Option<TemplateCategory>,

        /// Only the N highest-CTR templates
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// List anime styles
    Styles,

    /// Generate an anime image prompt via the configured text model
    Prompt {
        #[arg(short, long, default_value = "vibrant")]
        style: String,
    },

    /// SEO titles, thumbnail text and colour suggestions
    Seo {
        /// What the video is about
        #[arg(short, long)]
        context: String,

        /// Target audience (us, eu, global)
        #[arg(short, long, default_value = "global")]
        audience: Audience,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Also ask the configured text model
        #[arg(long)]
        remote: bool,
    },

    /// Start the Thumbnail API Server
    Serve {
        /// Port to run the server on (defaults to THUMBFORGE_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,hyper=warn,reqwest=warn");
    }
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("🚨 [THUMBFORGE PANIC] at {}: {}", location, message);
    }));

    let config = AppConfig::from_env();
    let args = Cli::parse();

    match args.command {
        Commands::Enhance {
            input,
            output,
            settings,
            analyze,
        } => {
            let presets = PresetTable::load(&config.presets_path);
            let settings = settings.resolve(&presets, EnhancementSettings::default())?;
            let out_path = output.unwrap_or_else(|| default_output(&input));

            let source = image::open(&input).with_context(|| format!("Failed to open {:?}", input))?;
            let frame = engine::enhance(&source, &settings)?;
            frame
                .save_png(&out_path)
                .with_context(|| format!("Failed to write {:?}", out_path))?;
            println!("✅ Thumbnail saved: {:?}", out_path);

            if analyze {
                let m = analysis::measure_colors(&frame);
                println!(
                    "   Vibrancy {:.2} | Contrast {:.2}",
                    m.color_vibrancy, m.color_contrast
                );
            }
        }
        Commands::Score {
            features,
            flow,
            image: measure,
            text,
            text_color,
            template,
            no_face,
            face_size,
            emotion,
            off_grid,
        } => {
            let features = match features {
                Some(path) => read_features(&path)?,
                None => {
                    let mut session = Session::for_variant(flow.unwrap_or(config.flow));
                    if let Some(id) = template {
                        let tpl = templates::find(&id)
                            .with_context(|| format!("Unknown template '{}'", id))?;
                        session = session.apply(Event::TemplateSelected(tpl));
                    }
                    if let Some(text) = text {
                        session = session.apply(Event::TextChanged(text));
                    }
                    if let Some(color) = text_color {
                        session = session.apply(Event::TextColorChanged(color));
                    }
                    if let Some(path) = measure {
                        let source = image::open(&path)
                            .with_context(|| format!("Failed to open {:?}", path))?;
                        let frame = engine::enhance(&source, &session.settings)?;
                        session = session.apply(Event::ColorsMeasured(analysis::measure_colors(&frame)));
                    }
                    session
                        .apply(Event::FaceObserved(FaceHints {
                            has_face: !no_face,
                            face_size,
                            emotion,
                        }))
                        .apply(Event::CompositionChecked(!off_grid))
                        .features()
                }
            };

            let result = scoring::score(&features);
            println!("🎯 CTR Score: {} ({})", result.overall, result.label.as_str());
            for entry in &result.breakdown {
                println!(
                    "   {:<17} {:>3}  {}",
                    entry.category.label(),
                    entry.score,
                    entry.feedback
                );
            }
        }
        Commands::Presets => {
            let presets = PresetTable::load(&config.presets_path);
            for p in presets.iter() {
                let s = p.settings;
                println!(
                    "{:<10} {:<14} b{} c{} s{} blur{} vig{} sharp{}  {}",
                    p.id, p.name, s.brightness, s.contrast, s.saturation, s.blur, s.vignette,
                    s.sharpen, p.description
                );
            }
        }
        Commands::Templates { category, top } => {
            for t in templates::listing(category, top) {
                println!(
                    "{:<20} {:<18} {:<13} {:>4.1}%  {}",
                    t.id,
                    t.name,
                    t.category.as_str(),
                    t.avg_ctr,
                    t.description
                );
            }
        }
        Commands::Styles => {
            for s in styles::all() {
                println!("{:<10} {:<16} {}", s.id, s.name, s.description);
            }
        }
        Commands::Prompt { style } => {
            let generator = TextGenerator::from_config(&config);
            let result = generator.anime_prompt(&style).await;
            if result.fallback {
                warn!("[GEN] Text model unavailable, showing static prompt");
            }
            println!("{}", result.prompt);
        }
        Commands::Seo {
            context,
            audience,
            seed,
            remote,
        } => {
            let mut advisor = SeoAdvisor::new(seed);
            let titles = advisor.titles(&context);
            let suggestion = advisor.suggest(&context, audience);

            println!("📈 Titles:");
            for t in &titles {
                println!("   {}", t);
            }
            println!("🔤 Thumbnail text: {}", suggestion.thumbnail_text);
            println!("🎯 Estimated CTR score: {}", suggestion.estimated_ctr);
            for k in &suggestion.keywords {
                println!(
                    "   {:<16} volume {:?}, competition {:?}",
                    k.keyword, k.search_volume, k.competition
                );
            }
            println!("🎨 Colours:");
            for c in thumbforge_core::agent::seo::color_recommendations(audience) {
                println!("   {} + {}  {}", c.primary, c.secondary, c.reasoning);
            }

            if remote {
                let generator = TextGenerator::from_config(&config);
                let meta = generator.seo_metadata(&context).await;
                println!(
                    "🤖 {} | {} | {}{}",
                    meta.title,
                    meta.thumbnail_text,
                    meta.colors.join(" "),
                    if meta.fallback { " (fallback)" } else { "" }
                );
            }
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.port);
            info!("🌐 Starting THUMBFORGE API on port {} ({} flow)...", port, config.flow);
            let state = Arc::new(ServiceState::new(config));
            server::start_server(port, state)
                .await
                .context("API server stopped")?;
        }
    }

    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "thumbnail".to_string());
    input.with_file_name(format!("{}_thumb.png", stem))
}

fn read_features(path: &Path) -> Result<ThumbnailFeatures> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let features: ThumbnailFeatures =
        serde_json::from_str(&content).context("Invalid feature vector JSON")?;
    Ok(features)
}
