//! Sidebar browse state: a cursor over books with one expandable
//! chapter list.
//!
//! The sidebar presents the corpus as a flat list of rows: every book in
//! order, with the chapters of at most one expanded book inlined right
//! after its row. The cursor addresses rows in that flattened list, so
//! the row layout is recomputed from the corpus on every query.

use crate::corpus::Corpus;

/// One row of the flattened sidebar list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    /// A book header row.
    Book(usize),
    /// A chapter row under the expanded book.
    Chapter {
        /// Book the chapter belongs to.
        book: usize,
        /// Chapter number (1-based).
        chapter: usize,
    },
}

/// Cursor and expansion state of the book browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    cursor: usize,
    expanded: Option<usize>,
}

impl SidebarState {
    /// Collapsed sidebar with the cursor on the first book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position in the flattened row list.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The currently expanded book, if any.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// The flattened row list for `corpus`.
    pub fn rows(&self, corpus: &Corpus) -> Vec<SidebarRow> {
        let mut rows = Vec::with_capacity(corpus.book_count());
        for (index, book) in corpus.books().iter().enumerate() {
            rows.push(SidebarRow::Book(index));
            if self.expanded == Some(index) {
                for chapter in 1..=book.chapter_count() {
                    rows.push(SidebarRow::Chapter {
                        book: index,
                        chapter,
                    });
                }
            }
        }
        rows
    }

    /// The row under the cursor, if the list is non-empty.
    pub fn current_row(&self, corpus: &Corpus) -> Option<SidebarRow> {
        self.rows(corpus).get(self.cursor).copied()
    }

    /// Move the cursor up one row, saturating at the top.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row, saturating at the bottom.
    pub fn move_down(&mut self, corpus: &Corpus) {
        let last = self.rows(corpus).len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// Activate the row under the cursor.
    ///
    /// On a book row, toggles its chapter list (the cursor stays on the
    /// book). On a chapter row, returns the `(book, chapter)` choice for
    /// the caller to apply; the sidebar itself does not navigate.
    pub fn activate(&mut self, corpus: &Corpus) -> Option<(usize, usize)> {
        match self.current_row(corpus)? {
            SidebarRow::Book(index) => {
                if self.expanded == Some(index) {
                    self.expanded = None;
                } else {
                    self.expanded = Some(index);
                }
                // The flattened index of a book row equals the book index
                // once every earlier expansion is gone.
                self.cursor = index;
                None
            }
            SidebarRow::Chapter { book, chapter } => Some((book, chapter)),
        }
    }

    /// Collapse the expanded book, parking the cursor on its row.
    pub fn collapse(&mut self) {
        if let Some(book) = self.expanded.take() {
            self.cursor = book;
        }
    }

    /// Re-validate against `corpus` after the book list changed
    /// (translation switch): drop a stale expansion and clamp the cursor.
    pub fn clamp(&mut self, corpus: &Corpus) {
        if let Some(book) = self.expanded {
            if book >= corpus.book_count() {
                self.expanded = None;
            }
        }
        let last = self.rows(corpus).len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }
}

#[cfg(test)]
#[path = "sidebar_tests.rs"]
mod tests;
