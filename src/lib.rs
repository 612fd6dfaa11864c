//! Agentmap library
//!
//! Core content-resolution logic (catalog, renderer, matrix, exporter) and
//! the terminal presentation shell for the Agent framework roadmap.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod content;
pub mod error;
pub mod export;
pub mod matrix;
pub mod render;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, SelectorField};
pub use config_file::SessionConfig;
pub use content::{Catalog, LanguagePack, VersionEntry};
pub use error::{AgentmapError, Result};
pub use export::{export, export_at, export_filename};
pub use matrix::{render_matrix, FeatureMatrix, Qualifier, Support};
pub use render::render;
pub use types::{Audience, Language, Version};
