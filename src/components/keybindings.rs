//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The registry feeds the navigation bar and the help
//! overlay; key dispatch itself lives in the app event loop.

#![allow(dead_code)]

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    FocusNext,
    FocusPrevious,
    CycleNext,
    CyclePrevious,
    Render,
    ToggleMatrix,
    Export,
    SaveSession,
    ScrollUp,
    ScrollDown,
    Back,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// A titled section of help items (key display, description)
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        self.mode_bindings.insert(
            AppMode::Roadmap,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::FocusNext, "Tab", "Next selector"),
                Keybinding::new(KeyCode::Right, KeyAction::CycleNext, "Right", "Next value"),
                Keybinding::new(KeyCode::Left, KeyAction::CyclePrevious, "Left", "Previous value"),
                Keybinding::new(KeyCode::Enter, KeyAction::Render, "Enter", "Render"),
                Keybinding::new(KeyCode::Char('m'), KeyAction::ToggleMatrix, "M", "Matrix"),
                Keybinding::new(KeyCode::Char('e'), KeyAction::Export, "E", "Export"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::SaveSession, "S", "Save session"),
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Matrix,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::CyclePrevious, "Left", "Previous language"),
                Keybinding::new(KeyCode::Right, KeyAction::CycleNext, "Right", "Next language"),
                Keybinding::new(KeyCode::Char('e'), KeyAction::Export, "E", "Export"),
                Keybinding::new(KeyCode::Char('m'), KeyAction::Back, "M", "Back to roadmap"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to roadmap"),
            ],
        );
    }

    /// Get the bindings for a mode (mode-specific first, then globals)
    pub fn bindings_for(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = self
            .mode_bindings
            .get(mode)
            .map(|b| b.iter().collect())
            .unwrap_or_default();
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Get (display, description) pairs for the navigation bar
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<(String, String)> {
        self.bindings_for(mode)
            .into_iter()
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect()
    }

    /// Get help overlay content for a mode
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mode_items = self
            .mode_bindings
            .get(mode)
            .map(|bindings| {
                bindings
                    .iter()
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let global_items = self
            .global_bindings
            .iter()
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();

        vec![
            HelpSection {
                title: "Screen".to_string(),
                items: mode_items,
            },
            HelpSection {
                title: "Global".to_string(),
                items: global_items,
            },
        ]
    }
}
