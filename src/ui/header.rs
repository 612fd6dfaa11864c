//! Header and common widget rendering
//!
//! Banner, title, and navigation bar shared by the presentation screens.

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the banner art
pub struct HeaderRenderer {
    banner_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            banner_lines: Self::create_banner(),
        }
    }

    /// Render the banner
    pub fn render_banner(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let banner = Paragraph::new(self.banner_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(banner, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    fn create_banner() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                " ▄▀█ █▀▀ █▀▀ █▄░█ ▀█▀ █▀▄▀█ ▄▀█ █▀█ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                " █▀█ █▄█ ██▄ █░▀█ ░█░ █░▀░█ █▀█ █▀░ ",
                Style::default().fg(Colors::PRIMARY),
            )]),
        ]
    }
}

/// Render the navigation bar with the current mode's key hints
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let items = keybinding_ctx.get_nav_items(&state.mode);
    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, description)) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::nav_hint()));
        }
        spans.push(Span::styled(
            key.clone(),
            Style::default().fg(Colors::SECONDARY),
        ));
        spans.push(Span::styled(format!(" {description}"), Styles::nav_hint()));
    }

    let nav_bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav_bar, area);
}

/// Localized screen title for the current state
pub fn screen_title(state: &AppState) -> &'static str {
    use crate::types::Language;
    match (state.mode, state.language) {
        (AppMode::Roadmap, Language::Zh) => "🤖 极简Agent 产品路线图交互平台",
        (AppMode::Roadmap, Language::En) => "🤖 Agent Product Roadmap",
        (AppMode::Matrix, Language::Zh) => "🧩 功能矩阵",
        (AppMode::Matrix, Language::En) => "🧩 Feature Matrix",
    }
}
