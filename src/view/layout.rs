//! Split pane layout rendering.
//!
//! Top-level frame composition: sidebar and reader side by side, the
//! search input row while a query is typed, the status line, and the
//! overlays (results, help) on top. Everything renders from `&AppState`;
//! the returned [`ReaderMetrics`] feed the key handler's scroll clamping.

use crate::state::{AppState, SearchState};
use crate::view::constants::{SEARCH_INPUT_HEIGHT, SIDEBAR_WIDTH_PERCENT, STATUS_BAR_HEIGHT};
use crate::view::help::render_help_overlay;
use crate::view::reader_pane::{render_reader, ReaderMetrics};
use crate::view::results::render_results;
use crate::view::search_input::SearchInput;
use crate::view::sidebar::render_sidebar;
use crate::view::styles::{ColorConfig, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole frame and report the reader pane's scroll metrics.
pub fn render_layout(frame: &mut Frame, state: &AppState, colors: ColorConfig) -> ReaderMetrics {
    let palette = Palette::for_theme(state.theme, colors);
    let typing = matches!(state.search, SearchState::Typing { .. });

    let mut constraints = vec![Constraint::Min(0)];
    if typing {
        constraints.push(Constraint::Length(SEARCH_INPUT_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());
    let content_area = chunks[0];
    let status_area = chunks[chunks.len() - 1];

    let metrics = if state.sidebar_visible {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(SIDEBAR_WIDTH_PERCENT),
                Constraint::Min(0),
            ])
            .split(content_area);
        render_sidebar(frame, horizontal[0], state, &palette);
        render_reader(frame, horizontal[1], state, &palette)
    } else {
        render_reader(frame, content_area, state, &palette)
    };

    if typing {
        frame.render_widget(SearchInput::new(&state.search, &palette), chunks[1]);
    }

    render_status_bar(frame, status_area, state, &palette);

    // Overlays draw last so they sit on top of the panes.
    render_results(frame, state, &palette);
    if state.help_visible {
        render_help_overlay(frame, state.help_scroll, &palette);
    }

    metrics
}

/// Render the one-line status bar: the verse prompt when open, else a
/// transient notice, else the hint matching the current mode.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    frame.render_widget(Paragraph::new(status_line(state, palette)), area);
}

fn status_line(state: &AppState, palette: &Palette) -> Line<'static> {
    if let Some(buffer) = &state.verse_prompt {
        return Line::from(vec![
            Span::styled(format!(":{buffer}"), palette.text),
            Span::styled(" ", palette.active),
            Span::styled("  Enter aplica · Esc cancela", palette.dim),
        ]);
    }
    if let Some(notice) = &state.status {
        return Line::from(Span::styled(notice.clone(), palette.accent));
    }
    if state.share.is_active() {
        let count = state.share.count();
        return Line::from(Span::styled(
            format!(
                "Compartilhar: {count} versículo(s) · Espaço marca · y copia · x exporta · Esc cancela"
            ),
            palette.text,
        ));
    }
    match &state.search {
        SearchState::Typing { .. } => Line::from(Span::styled(
            "Enter busca · Tab muda o escopo · Esc cancela",
            palette.dim,
        )),
        SearchState::Active {
            matches,
            current_match,
            ..
        } if !matches.is_empty() => Line::from(Span::styled(
            format!(
                "Ocorrência {}/{} · n próxima · N anterior · Esc limpa",
                current_match + 1,
                matches.len()
            ),
            palette.dim,
        )),
        _ => Line::from(Span::styled(
            "Tab foco · / busca · s compartilha · t tradução · T tema · ? ajuda · q sai",
            palette.dim,
        )),
    }
}
