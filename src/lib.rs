// THUMBFORGE Core Library
// Copyright (c) 2026 Xing_The_Creator | THUMBFORGE

pub mod agent;
pub mod analysis;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod server;
pub mod state;
pub mod upload;

pub use error::{Result, ThumbError};
