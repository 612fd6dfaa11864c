//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - banner, title, and navigation bar rendering
//! - `panels` - roadmap and matrix screen rendering

mod header;
mod panels;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::content::Catalog;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// Main entry point for UI rendering; delegates to the screen submodules
/// based on the current mode.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        catalog: &Catalog,
        keybinding_ctx: &KeybindingContext,
    ) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match state.mode {
            AppMode::Roadmap => {
                panels::render_roadmap_screen(f, state, catalog, content_area, &self.header);
            }
            AppMode::Matrix => {
                panels::render_matrix_screen(f, state, catalog, content_area, &self.header);
            }
        }

        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        // Help overlay renders on top of everything
        if state.help_visible {
            let overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
            overlay.render(f, f.area());
        }
    }
}
