// THUMBFORGE Agent Modules
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

pub mod generation;
pub mod seo;

pub use generation::{GeneratedPrompt, SeoMetadata, TextGenerator};
pub use seo::{Audience, SeoAdvisor};
