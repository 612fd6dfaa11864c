//! Application state definitions
//!
//! Contains all state-related types for the presentation shell: AppState,
//! AppMode, and the selector focus model. State is plain data; everything
//! that needs the content catalog lives on `App`.

use std::path::PathBuf;

use strum::IntoEnumIterator;

use crate::types::{Audience, Language, Version};

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Roadmap screen - selectors plus the rendered document
    Roadmap,
    /// Feature matrix screen - version comparison table
    Matrix,
}

/// Which selector group has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorField {
    Language,
    Version,
    Audience,
}

impl SelectorField {
    /// Focus order: Language -> Version -> Audience, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::Language => Self::Version,
            Self::Version => Self::Audience,
            Self::Audience => Self::Language,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Language => Self::Audience,
            Self::Version => Self::Language,
            Self::Audience => Self::Version,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Selected display language
    pub language: Language,
    /// Selected product version
    pub version: Version,
    /// Selected audience
    pub audience: Audience,
    /// Selector group with keyboard focus
    pub focus: SelectorField,
    /// Rendered document (or matrix) shown in the output pane
    pub document: String,
    /// Vertical scroll offset of the output pane
    pub scroll: u16,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Path of the most recent export, if any
    pub last_export: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Roadmap,
            language: Language::default(),
            version: Version::default(),
            audience: Audience::default(),
            focus: SelectorField::Language,
            document: String::new(),
            scroll: 0,
            status_message: "Welcome to the Agent roadmap".to_string(),
            help_visible: false,
            last_export: None,
        }
    }
}

impl AppState {
    /// Cycle the focused selector forward or backward, wrapping at the ends.
    pub fn cycle_focused(&mut self, forward: bool) {
        match self.focus {
            SelectorField::Language => self.language = cycle(self.language, forward),
            SelectorField::Version => self.version = cycle(self.version, forward),
            SelectorField::Audience => self.audience = cycle(self.audience, forward),
        }
    }

    /// Move selector focus to the next/previous group.
    pub fn move_focus(&mut self, forward: bool) {
        self.focus = if forward {
            self.focus.next()
        } else {
            self.focus.previous()
        };
    }
}

fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: T, forward: bool) -> T {
    let all: Vec<T> = T::iter().collect();
    let len = all.len();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
    all[next]
}
