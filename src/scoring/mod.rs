// THUMBFORGE Scoring Module
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

pub mod ctr;
pub mod features;

pub use ctr::{score, BreakdownEntry, Category, CtrScore, ScoreLabel};
pub use features::{FaceEmotion, ThumbnailFeatures};
