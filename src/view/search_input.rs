//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
/// Renders the query line with a block cursor while a search is being
/// typed; nothing otherwise (submitted searches live in the results
/// overlay and the status line).
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, palette: &'a Palette) -> Self {
        Self {
            search_state,
            palette,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let SearchState::Typing {
            query,
            cursor,
            scope,
        } = self.search_state
        else {
            return;
        };

        // Split query into before/cursor/after. The cursor counts
        // characters, so compare against the character count, not len().
        let before: String = query.chars().take(*cursor).collect();
        let after_chars: Vec<char> = query.chars().skip(*cursor).collect();
        let (cursor_char, after_text) = match after_chars.split_first() {
            None => (" ".to_string(), String::new()),
            Some((ch, rest)) => (ch.to_string(), rest.iter().collect()),
        };

        let spans = vec![
            Span::styled("/", self.palette.dim),
            Span::styled(before, self.palette.text),
            Span::styled(cursor_char, self.palette.active),
            Span::styled(after_text, self.palette.text),
        ];

        let title = Line::from(vec![
            Span::styled(" Busca · ", self.palette.accent),
            Span::styled(scope.label(), self.palette.accent),
            Span::styled(" ", self.palette.accent),
        ]);
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(self.palette.accent),
        );

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;
    use crate::state::SearchScope;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn palette() -> Palette {
        Palette::for_theme(Theme::Claro, ColorConfig::from_env_and_args(true))
    }

    fn draw(state: &SearchState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let palette = palette();
        terminal
            .draw(|frame| {
                frame.render_widget(SearchInput::new(state, &palette), frame.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area();
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
        }
        text
    }

    #[test]
    fn typing_state_shows_query_and_scope() {
        let state = SearchState::Typing {
            query: "luz".to_string(),
            cursor: 3,
            scope: SearchScope::Bible,
        };
        let text = draw(&state);
        assert!(text.contains("luz"), "query text missing: {text}");
        assert!(text.contains("Bíblia"), "scope label missing: {text}");
    }

    #[test]
    fn cursor_inside_multibyte_query_does_not_panic() {
        let state = SearchState::Typing {
            query: "coração".to_string(),
            cursor: 4,
            scope: SearchScope::Chapter,
        };
        let text = draw(&state);
        assert!(text.contains("coração"), "query text missing: {text}");
    }

    #[test]
    fn inactive_renders_nothing() {
        let text = draw(&SearchState::Inactive);
        assert_eq!(text.trim(), "", "inactive search drew something: {text}");
    }
}
