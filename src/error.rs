// THUMBFORGE Error Taxonomy
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

/// Errors surfaced by the thumbnail core.
#[derive(Debug)]
pub enum ThumbError {
    /// Zero-dimension or undecodable source image. Fatal to the call.
    InvalidImage(String),
    /// Upload is not a JPEG or PNG.
    UnsupportedFormat(String),
    /// Upload exceeds the size limit (bytes).
    TooLarge { size: usize, limit: usize },
    /// A float feature lies outside [0, 1]. Recoverable by clamping.
    InvalidFeatureVector { field: &'static str, value: f64 },
    UnknownPreset(String),
    UnknownCategory(String),
    /// The remote text-generation collaborator failed. Callers fall back to static values.
    RemoteGeneration(String),
    /// Unreadable or malformed configuration/catalog file.
    Config(String),
    Io(std::io::Error),
    Image(image::ImageError),
}

impl std::fmt::Display for ThumbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThumbError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            ThumbError::UnsupportedFormat(fmt) => {
                write!(f, "Unsupported format '{}': please upload a JPG or PNG file", fmt)
            }
            ThumbError::TooLarge { size, limit } => write!(
                f,
                "File size {} bytes exceeds the {} byte limit",
                size, limit
            ),
            ThumbError::InvalidFeatureVector { field, value } => {
                write!(f, "Feature '{}' out of range [0, 1]: {}", field, value)
            }
            ThumbError::UnknownPreset(id) => write!(f, "Unknown preset: {}", id),
            ThumbError::UnknownCategory(id) => write!(f, "Unknown template category: {}", id),
            ThumbError::RemoteGeneration(msg) => write!(f, "Remote generation failed: {}", msg),
            ThumbError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ThumbError::Io(err) => write!(f, "IO error: {}", err),
            ThumbError::Image(err) => write!(f, "Image processing error: {}", err),
        }
    }
}

impl std::error::Error for ThumbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThumbError::Io(err) => Some(err),
            ThumbError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ThumbError {
    fn from(err: std::io::Error) -> Self {
        ThumbError::Io(err)
    }
}

impl From<image::ImageError> for ThumbError {
    fn from(err: image::ImageError) -> Self {
        ThumbError::Image(err)
    }
}

impl From<reqwest::Error> for ThumbError {
    fn from(err: reqwest::Error) -> Self {
        ThumbError::RemoteGeneration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ThumbError>;
