//! Application module
//!
//! Contains the main application logic, state management, and event
//! handling for the presentation shell.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, SelectorField)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState, SelectorField};

use crate::components::keybindings::KeybindingContext;
use crate::config_file::SessionConfig;
use crate::content::Catalog;
use crate::export::export;
use crate::matrix::render_matrix;
use crate::render::render;
use crate::theme::UiConstants;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default filename for the saved session
const SESSION_FILE: &str = "agentmap_session.json";

/// Main application struct
pub struct App {
    state: AppState,
    catalog: Catalog,
    session: SessionConfig,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance from a session
    pub fn new(catalog: Catalog, session: SessionConfig) -> Self {
        info!("Creating new App instance");
        let state = AppState {
            language: session.language,
            version: session.version,
            audience: session.audience,
            ..AppState::default()
        };

        let mut app = Self {
            state,
            catalog,
            session,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        };
        app.refresh_output();
        app
    }

    /// Current application state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main event loop until the user quits
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(_, _) => {
                        // Paragraph wrapping adapts on the next draw
                    }
                    _ => {}
                }
            }

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.catalog, &self.keybinding_context);
            })?;
        }

        Ok(())
    }

    /// Handle keyboard input events. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Help overlay - ? or Esc dismisses it, everything else is ignored
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return false;
        }

        if key_event.code == KeyCode::Char('?') {
            self.toggle_help();
            return false;
        }

        match key_event.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => match self.state.mode {
                AppMode::Matrix => self.set_mode(AppMode::Roadmap),
                AppMode::Roadmap => return true,
            },
            KeyCode::Tab => self.state.move_focus(true),
            KeyCode::BackTab => self.state.move_focus(false),
            KeyCode::Left => self.cycle_selection(false),
            KeyCode::Right => self.cycle_selection(true),
            KeyCode::Up => self.state.scroll = self.state.scroll.saturating_sub(1),
            KeyCode::Down => self.state.scroll = self.state.scroll.saturating_add(1),
            KeyCode::PageUp => {
                self.state.scroll = self
                    .state
                    .scroll
                    .saturating_sub(UiConstants::PAGE_SCROLL_SIZE);
            }
            KeyCode::PageDown => {
                self.state.scroll = self
                    .state
                    .scroll
                    .saturating_add(UiConstants::PAGE_SCROLL_SIZE);
            }
            KeyCode::Enter => self.refresh_output(),
            KeyCode::Char('m') => match self.state.mode {
                AppMode::Roadmap => self.set_mode(AppMode::Matrix),
                AppMode::Matrix => self.set_mode(AppMode::Roadmap),
            },
            KeyCode::Char('e') => self.export_document(),
            KeyCode::Char('s') => self.save_session(),
            _ => {}
        }

        false
    }

    fn set_mode(&mut self, mode: AppMode) {
        debug!(?mode, "switching mode");
        self.state.mode = mode;
        self.refresh_output();
    }

    /// Cycle the focused selector (roadmap) or the language (matrix)
    fn cycle_selection(&mut self, forward: bool) {
        match self.state.mode {
            AppMode::Roadmap => self.state.cycle_focused(forward),
            AppMode::Matrix => {
                // Matrix screen has a single effective selector
                let previous_focus = self.state.focus;
                self.state.focus = SelectorField::Language;
                self.state.cycle_focused(forward);
                self.state.focus = previous_focus;
            }
        }
        self.refresh_output();
    }

    /// Re-render the output pane from the current selection
    fn refresh_output(&mut self) {
        let result = match self.state.mode {
            AppMode::Roadmap => render(
                &self.catalog,
                self.state.version,
                self.state.audience,
                self.state.language,
            ),
            AppMode::Matrix => render_matrix(&self.catalog, self.state.language),
        };

        match result {
            Ok(document) => {
                self.state.document = document;
                self.state.scroll = 0;
                self.state.status_message = format!(
                    "{} · {} · {}",
                    self.state.language.display_name(),
                    self.state.version,
                    self.state.audience
                );
            }
            Err(e) => {
                warn!(error = %e, "rendering failed");
                self.state.status_message = format!("Render failed: {e}");
            }
        }
    }

    /// Export the current output pane to a timestamped Markdown file
    fn export_document(&mut self) {
        match export(&self.state.document, &self.session.export_dir) {
            Ok(path) => {
                info!(path = %path.display(), "exported document");
                self.state.status_message = "Exported".to_string();
                self.state.last_export = Some(path);
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                self.state.status_message = format!("Export failed: {e}");
            }
        }
    }

    /// Save the current selection as the session file
    fn save_session(&mut self) {
        self.session.language = self.state.language;
        self.session.version = self.state.version;
        self.session.audience = self.state.audience;

        match self.session.save_to_file(SESSION_FILE) {
            Ok(()) => {
                info!(file = SESSION_FILE, "session saved");
                self.state.status_message = format!("Session saved to {SESSION_FILE}");
            }
            Err(e) => {
                warn!(error = %e, "session save failed");
                self.state.status_message = format!("Session save failed: {e}");
            }
        }
    }
}
