//! Sidebar: current translation, theme, and the book browser.
//!
//! The top two lines echo the active translation and theme so cycling
//! either gives immediate feedback. Below them the flattened book list
//! renders with the expanded book's chapters indented; the cursor row
//! is kept visible by the list widget.

use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::state::{AppState, FocusPane, SidebarRow};
use crate::view::styles::Palette;

/// Render the sidebar into `area`.
pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPane::Sidebar;
    let border_style = if focused { palette.accent } else { palette.dim };

    let block = Block::default()
        .title(" Livros ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let [header_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Versão: ", palette.dim),
            Span::styled(
                state.reader().translation().code().to_uppercase(),
                palette.accent,
            ),
        ]),
        Line::from(vec![
            Span::styled("Tema: ", palette.dim),
            Span::styled(state.theme.as_str(), palette.text),
        ]),
        Line::default(),
    ]);
    frame.render_widget(header, header_area);

    let corpus = state.corpus();
    let expanded = state.sidebar.expanded();
    let items: Vec<ListItem> = state
        .sidebar
        .rows(corpus)
        .into_iter()
        .map(|row| match row {
            SidebarRow::Book(index) => {
                let marker = if expanded == Some(index) { "▾ " } else { "▸ " };
                let name = corpus
                    .book_at(index)
                    .map(|book| book.name.as_str())
                    .unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled(marker, palette.dim),
                    Span::styled(name.to_string(), palette.text),
                ]))
            }
            SidebarRow::Chapter { chapter, .. } => ListItem::new(Line::from(Span::styled(
                format!("    Capítulo {chapter}"),
                palette.dim,
            ))),
        })
        .collect();

    let list = List::new(items).highlight_style(palette.active);
    let mut list_state = ListState::default().with_selected(Some(state.sidebar.cursor()));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}
