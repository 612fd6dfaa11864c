//! Screen rendering for the roadmap and matrix views
//!
//! Each screen is a vertical stack: banner, title, selector bar (roadmap
//! only), output pane, status bar. The selector bar shows the three
//! enumerated inputs with the focused group highlighted.

use super::header::{self, HeaderRenderer};
use crate::app::{AppState, SelectorField};
use crate::content::Catalog;
use crate::theme::{Colors, Styles, UiConstants};
use crate::types::Language;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the roadmap screen (selectors plus document pane)
pub fn render_roadmap_screen(
    f: &mut Frame,
    state: &AppState,
    catalog: &Catalog,
    area: Rect,
    header_renderer: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(UiConstants::HEADER_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(UiConstants::SELECTOR_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
        ])
        .split(area);

    header_renderer.render_banner(f, chunks[0]);
    header_renderer.render_title(f, chunks[1], header::screen_title(state));
    render_selector_bar(f, state, catalog, chunks[2]);
    render_document_pane(f, state, chunks[3]);
    render_status_bar(f, state, chunks[4]);
}

/// Render the matrix screen (document pane holds the matrix table)
pub fn render_matrix_screen(
    f: &mut Frame,
    state: &AppState,
    _catalog: &Catalog,
    area: Rect,
    header_renderer: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(UiConstants::HEADER_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
        ])
        .split(area);

    header_renderer.render_banner(f, chunks[0]);
    header_renderer.render_title(f, chunks[1], header::screen_title(state));
    render_document_pane(f, state, chunks[2]);
    render_status_bar(f, state, chunks[3]);
}

fn selector_titles(language: Language) -> [&'static str; 3] {
    match language {
        Language::Zh => ["语言 / Language", "版本阶段", "你的角色"],
        Language::En => ["Language", "Version", "Your Role"],
    }
}

fn render_selector_bar(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let titles = selector_titles(state.language);

    // Display labels come from the active language pack; chrome falls back
    // to the canonical token if a label is somehow missing.
    let (version_label, audience_label) = match catalog.pack(state.language) {
        Ok(pack) => (
            pack.stage_label(state.version).unwrap_or("?").to_string(),
            pack.audience_label(state.audience).unwrap_or("?").to_string(),
        ),
        Err(_) => (state.version.to_string(), state.audience.to_string()),
    };

    let values = [
        state.language.display_name().to_string(),
        version_label,
        audience_label,
    ];
    let fields = [
        SelectorField::Language,
        SelectorField::Version,
        SelectorField::Audience,
    ];

    for ((value, field), (title, rect)) in values
        .iter()
        .zip(fields.iter())
        .zip(titles.iter().zip(boxes.iter()))
    {
        let focused = state.focus == *field;
        let border_style = if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        };
        let value_style = if focused {
            Style::default()
                .fg(Colors::SECONDARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Styles::text()
        };

        let text = if focused {
            format!("◂ {value} ▸")
        } else {
            value.clone()
        };

        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(value_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {title} "))
                    .border_style(border_style),
            );
        f.render_widget(widget, *rect);
    }
}

fn render_document_pane(f: &mut Frame, state: &AppState, area: Rect) {
    let title = match state.language {
        Language::Zh => " 路线图输出 ",
        Language::En => " Output ",
    };

    let widget = Paragraph::new(state.document.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));

    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let mut text = state.status_message.clone();
    if let Some(path) = &state.last_export {
        text.push_str(&format!("  ({})", path.display()));
    }

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Status "))
        .style(Styles::text_muted());
    f.render_widget(widget, area);
}
