//! Reader pane: the current chapter as a wrapped, numbered verse list.
//!
//! Layout is computed per frame from the pane width: each verse becomes a
//! number-prefixed first row plus indented continuation rows, and a
//! verse-to-row map drives the follow scroll that keeps the active verse
//! centered. Free scrolling (PageUp/PageDown/Home/End) suspends following;
//! the next verse movement snaps back.

use std::ops::Range;

use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::{highlight_ranges, AppState, FocusPane, SearchState, ShareComposer};
use crate::view::styles::Palette;

/// Width of the verse-number gutter, mark glyph included.
const GUTTER: usize = 5;

// ===== Layout =====

/// Scroll bookkeeping the key handler needs after a frame is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderMetrics {
    /// Total display rows of the laid-out chapter.
    pub total_rows: usize,
    /// Rows the pane can show at once.
    pub viewport_rows: usize,
    /// First row shown this frame.
    pub offset: usize,
}

impl ReaderMetrics {
    /// Largest valid scroll offset.
    pub fn max_offset(self) -> usize {
        self.total_rows.saturating_sub(self.viewport_rows)
    }
}

/// A chapter flattened to display rows.
pub(crate) struct ChapterLayout {
    /// All rows of the chapter, in order.
    pub lines: Vec<Line<'static>>,
    /// First row of each verse, indexed by verse number minus one.
    pub verse_first_row: Vec<usize>,
}

/// Split `text` into greedy word-wrapped rows of at most `max_width`
/// display columns, returned as byte ranges into `text`.
///
/// A word wider than the row is hard-split at character boundaries.
/// Empty text yields one empty row so every verse occupies at least
/// one line.
pub(crate) fn wrap_ranges(text: &str, max_width: usize) -> Vec<Range<usize>> {
    if max_width == 0 {
        return vec![0..text.len()];
    }

    let mut words: Vec<(usize, usize)> = Vec::new();
    let mut start = None;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push((s, text.len()));
    }

    let mut rows: Vec<Range<usize>> = Vec::new();
    // Open row: (start, end, width so far).
    let mut row: Option<(usize, usize, usize)> = None;

    for (ws, we) in words {
        let word = &text[ws..we];
        let word_width = word.width();

        if word_width > max_width {
            if let Some((s, e, _)) = row.take() {
                rows.push(s..e);
            }
            let mut chunk_start = ws;
            let mut chunk_width = 0;
            for (ci, ch) in word.char_indices() {
                let cw = ch.width().unwrap_or(0);
                if chunk_width + cw > max_width && chunk_width > 0 {
                    rows.push(chunk_start..ws + ci);
                    chunk_start = ws + ci;
                    chunk_width = 0;
                }
                chunk_width += cw;
            }
            row = Some((chunk_start, we, chunk_width));
            continue;
        }

        row = match row {
            Some((s, _, w)) if w + 1 + word_width <= max_width => Some((s, we, w + 1 + word_width)),
            Some((s, e, _)) => {
                rows.push(s..e);
                Some((ws, we, word_width))
            }
            None => Some((ws, we, word_width)),
        };
    }
    if let Some((s, e, _)) = row {
        rows.push(s..e);
    }
    if rows.is_empty() {
        rows.push(0..0);
    }
    rows
}

/// Style one wrapped row, splitting it at the search occurrences that
/// overlap it. `highlights` must be sorted and non-overlapping, as
/// produced by [`highlight_ranges`].
pub(crate) fn styled_row(
    text: &str,
    row: Range<usize>,
    highlights: &[Range<usize>],
    base: Style,
    highlight: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut pos = row.start;
    for occurrence in highlights {
        let s = occurrence.start.max(row.start);
        let e = occurrence.end.min(row.end);
        if s >= e {
            continue;
        }
        if s > pos {
            spans.push(Span::styled(text[pos..s].to_string(), base));
        }
        spans.push(Span::styled(text[s..e].to_string(), highlight));
        pos = e;
    }
    if pos < row.end {
        spans.push(Span::styled(text[pos..row.end].to_string(), base));
    }
    if spans.is_empty() {
        spans.push(Span::styled(String::new(), base));
    }
    spans
}

/// Flatten a chapter into display rows.
pub(crate) fn layout_chapter(
    verses: &[String],
    width: usize,
    active_verse: usize,
    share: &ShareComposer,
    query: Option<&str>,
    palette: &Palette,
) -> ChapterLayout {
    let text_width = width.saturating_sub(GUTTER).max(1);
    let mut lines = Vec::new();
    let mut verse_first_row = Vec::with_capacity(verses.len());

    for (index, text) in verses.iter().enumerate() {
        let number = index + 1;
        let active = number == active_verse;
        let marked = share.is_active() && share.is_selected(number);

        let base = if active {
            palette.active
        } else if marked {
            palette.selected
        } else {
            palette.text
        };
        let gutter_style = if marked {
            palette.selected
        } else if active {
            palette.accent
        } else {
            palette.dim
        };
        let mark = if marked { '✓' } else { ' ' };

        let highlights = query.map(|q| highlight_ranges(text, q)).unwrap_or_default();

        verse_first_row.push(lines.len());
        for (row_index, row) in wrap_ranges(text, text_width).into_iter().enumerate() {
            let mut spans = if row_index == 0 {
                vec![Span::styled(format!("{mark}{number:>3} "), gutter_style)]
            } else {
                vec![Span::raw(" ".repeat(GUTTER))]
            };
            spans.extend(styled_row(text, row, &highlights, base, palette.highlight));
            lines.push(Line::from(spans));
        }
    }

    ChapterLayout {
        lines,
        verse_first_row,
    }
}

// ===== Rendering =====

/// Render the reader pane into `area`, returning the scroll metrics of
/// the frame just drawn.
pub fn render_reader(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
) -> ReaderMetrics {
    let focused = state.focus == FocusPane::Reader;
    let border_style = if focused { palette.accent } else { palette.dim };
    let reader = state.reader();
    let corpus = state.corpus();

    let Some(book) = reader.current_book(corpus) else {
        let block = Block::default()
            .title(" Bíblia Sagrada ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty_state(frame, inner, palette);
        return ReaderMetrics {
            viewport_rows: inner.height as usize,
            ..ReaderMetrics::default()
        };
    };

    let chapter = reader.chapter();
    let verse = reader.verse();
    let title = format!(" {} {}:{} ", book.name, chapter, verse);
    let block = Block::default()
        .title(Span::styled(title, palette.accent))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return ReaderMetrics::default();
    }

    let query = match &state.search {
        SearchState::Active { query, .. } => Some(query.as_str()),
        _ => None,
    };
    let verses = book.verses(chapter).unwrap_or(&[]);
    let layout = layout_chapter(
        verses,
        inner.width as usize,
        verse,
        &state.share,
        query,
        palette,
    );

    let viewport = inner.height as usize;
    let total = layout.lines.len();
    let max = total.saturating_sub(viewport);
    let offset = if state.scroll.follow {
        // Center the active verse, like the original reader did.
        let first = layout
            .verse_first_row
            .get(verse.saturating_sub(1))
            .copied()
            .unwrap_or_else(|| total.saturating_sub(1));
        first.saturating_sub(viewport / 2).min(max)
    } else {
        state.scroll.offset.min(max)
    };

    let paragraph = Paragraph::new(layout.lines).scroll((offset as u16, 0));
    frame.render_widget(paragraph, inner);

    ReaderMetrics {
        total_rows: total,
        viewport_rows: viewport,
        offset,
    }
}

/// Centered invitation shown before any book is selected.
fn render_empty_state(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("Escolha:", palette.accent)),
        Line::from(Span::styled("a versão, um tema", palette.text)),
        Line::from(Span::styled("um livro e versículo", palette.text)),
        Line::from(Span::styled("Deus o ilumine e boa leitura 🙏", palette.text)),
    ];

    let top_pad = area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        y: area.y + top_pad,
        height: area.height.saturating_sub(top_pad),
        ..area
    };
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}
