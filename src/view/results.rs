//! Search results overlay.
//!
//! A centered modal listing every match of the submitted search as
//! `<book> <chapter>:<verse> — <text>`, query occurrences highlighted.
//! The selected row tracks the match the reader will jump to on Enter.

use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::state::{highlight_ranges, AppState, SearchState};
use crate::view::reader_pane::styled_row;
use crate::view::styles::Palette;

/// Render the results overlay, if it is open.
pub fn render_results(frame: &mut Frame, state: &AppState, palette: &Palette) {
    if !state.results_visible {
        return;
    }
    let SearchState::Active {
        query,
        matches,
        current_match,
        ..
    } = &state.search
    else {
        return;
    };

    let area = frame.area();
    let modal_area = centered_rect(area, matches.len());
    frame.render_widget(Clear, modal_area);

    let items: Vec<ListItem> = if matches.is_empty() {
        vec![ListItem::new(Span::styled(
            "Nenhum resultado.",
            palette.dim,
        ))]
    } else {
        matches
            .iter()
            .map(|m| {
                let mut spans = vec![Span::styled(
                    format!("{} {}:{} — ", m.book, m.chapter, m.verse),
                    palette.accent,
                )];
                let highlights = highlight_ranges(&m.text, query.as_str());
                spans.extend(styled_row(
                    &m.text,
                    0..m.text.len(),
                    &highlights,
                    palette.text,
                    palette.highlight,
                ));
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let title = if matches.is_empty() {
        format!(" Resultados · {} ", query.as_str())
    } else {
        format!(" Resultados {}/{} ", current_match + 1, matches.len())
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(title, palette.accent))
                .borders(Borders::ALL)
                .border_style(palette.accent),
        )
        .highlight_style(palette.active);

    let selected = if matches.is_empty() {
        None
    } else {
        Some(*current_match)
    };
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, modal_area, &mut list_state);

    let footer_area = Rect {
        x: modal_area.x + 1,
        y: modal_area.y + modal_area.height.saturating_sub(2),
        width: modal_area.width.saturating_sub(2),
        height: 1,
    };
    let footer = Paragraph::new("↑/↓ navega · Enter abre · Esc fecha")
        .style(palette.dim)
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

/// Centered rect for the overlay: most of the width, height adapted to
/// the match count plus borders and the footer row.
fn centered_rect(area: Rect, match_count: usize) -> Rect {
    let width = (area.width * 4 / 5).max(20).min(area.width);
    let height = (match_count.min(u16::MAX as usize) as u16)
        .saturating_add(3)
        .clamp(4, area.height.saturating_sub(2).max(4))
        .min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect {
        x: area.x + x,
        y: area.y + y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, CorpusSet};
    use crate::model::{Book, Theme, Translation};
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn test_corpora() -> CorpusSet {
        let books = vec![Book {
            name: "Gênesis".to_string(),
            abbrev: None,
            chapters: vec![vec![
                "No princípio criou Deus os céus e a terra.".to_string(),
                "Disse Deus: haja luz; e houve luz.".to_string(),
            ]],
        }];
        let corpus = Corpus::new(books);
        CorpusSet::new(corpus.clone(), corpus.clone(), corpus)
    }

    fn searched_state() -> AppState {
        let mut state = AppState::new(test_corpora(), Translation::Aa, Theme::Dark);
        state.sidebar_activate();
        state.sidebar_down();
        state.sidebar_activate();
        state.start_search();
        for ch in "deus".chars() {
            state.search_input(ch);
        }
        state.submit_search();
        state
    }

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Palette::for_theme(state.theme, ColorConfig::from_env_and_args(true));
        terminal
            .draw(|frame| render_results(frame, state, &palette))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area();
        let mut lines = Vec::new();
        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn overlay_lists_matches_with_references() {
        let state = searched_state();
        assert!(state.results_visible, "submit should open the overlay");
        let text = render(&state);
        assert!(text.contains("Resultados 1/2"), "missing title: {text}");
        assert!(text.contains("Gênesis 1:1"), "missing first match: {text}");
        assert!(text.contains("Gênesis 1:2"), "missing second match: {text}");
    }

    #[test]
    fn closed_overlay_renders_nothing() {
        let mut state = searched_state();
        state.results_close();
        let text = render(&state);
        assert_eq!(text.trim(), "", "closed overlay drew content: {text}");
    }

    #[test]
    fn selection_follows_results_navigation() {
        let mut state = searched_state();
        state.results_down();
        let text = render(&state);
        assert!(text.contains("Resultados 2/2"), "title should track selection: {text}");
    }

    #[test]
    fn empty_search_shows_notice() {
        let mut state = AppState::new(test_corpora(), Translation::Aa, Theme::Dark);
        state.start_search();
        for ch in "zzz".chars() {
            state.search_input(ch);
        }
        state.submit_search();
        let text = render(&state);
        assert!(text.contains("Nenhum resultado"), "missing notice: {text}");
    }
}
