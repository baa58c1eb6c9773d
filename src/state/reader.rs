//! Navigation state machine: the reader's position in the corpus.
//!
//! # State Machine
//!
//! `ReaderState` tracks the active translation and the selected
//! book/chapter/verse. It starts with no book selected (the UI shows a
//! prompt state) and is mutated exclusively through the operations here.
//! All operations are total: out-of-range requests are clamped or degrade
//! to a defined fallback, never an error.
//!
//! # Invariants
//!
//! - `chapter` and `verse` are always ≥ 1.
//! - `chapter` stays within the selected book's chapter count after every
//!   operation except [`ReaderState::set_verse`] callers racing a stale
//!   list (the traversal operations recover on the next step).
//! - `verse` may transiently exceed the chapter length: `select_chapter`
//!   deliberately leaves it untouched so a caller can position the verse
//!   itself right after (search jumps rely on this), and `set_verse`
//!   performs no upper-bounds check.

use crate::corpus::{Corpus, CorpusSet};
use crate::model::{Book, Translation};
use tracing::debug;

/// Current translation plus selected book/chapter/verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderState {
    translation: Translation,
    book: Option<usize>,
    chapter: usize,
    verse: usize,
}

impl ReaderState {
    /// Create the initial state: no book selected, chapter 1, verse 1.
    pub fn new(translation: Translation) -> Self {
        Self {
            translation,
            book: None,
            chapter: 1,
            verse: 1,
        }
    }

    // ===== Accessors =====

    /// Active translation.
    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// Zero-based index of the selected book, if any.
    pub fn book_index(&self) -> Option<usize> {
        self.book
    }

    /// Selected chapter (1-based). Meaningful only while a book is selected.
    pub fn chapter(&self) -> usize {
        self.chapter
    }

    /// Selected verse (1-based). Meaningful only while a book is selected.
    pub fn verse(&self) -> usize {
        self.verse
    }

    /// Whether a book is currently selected.
    pub fn has_selection(&self) -> bool {
        self.book.is_some()
    }

    /// The selected book within `corpus`, if any.
    pub fn current_book<'c>(&self, corpus: &'c Corpus) -> Option<&'c Book> {
        self.book.and_then(|idx| corpus.book_at(idx))
    }

    // ===== Operations =====

    /// Select a book and reset to chapter 1, verse 1.
    ///
    /// An index beyond the corpus is a no-op.
    pub fn select_book(&mut self, corpus: &Corpus, book_index: usize) {
        if corpus.book_at(book_index).is_none() {
            return;
        }
        self.book = Some(book_index);
        self.chapter = 1;
        self.verse = 1;
        debug!(book = book_index, "book selected");
    }

    /// Select a book and chapter, clamping the chapter into range.
    ///
    /// Values below 1 become 1, values above the chapter count become the
    /// last chapter. The verse is intentionally left untouched so a caller
    /// jumping here (search, for one) can set it right after without it
    /// being reset. An index beyond the corpus is a no-op.
    pub fn select_chapter(&mut self, corpus: &Corpus, book_index: usize, chapter: usize) {
        let Some(book) = corpus.book_at(book_index) else {
            return;
        };
        let max_chapter = book.chapter_count().max(1);
        self.book = Some(book_index);
        self.chapter = chapter.clamp(1, max_chapter);
        debug!(book = book_index, chapter = self.chapter, "chapter selected");
    }

    /// Set the verse directly.
    ///
    /// No upper-bounds check against the chapter is performed; callers pass
    /// verse numbers taken from rendered lists. Zero becomes 1.
    pub fn set_verse(&mut self, verse: usize) {
        self.verse = verse.max(1);
    }

    /// Step forward one verse, cascading across chapter and book
    /// boundaries and wrapping from the corpus end to its start.
    ///
    /// No-op while no book is selected.
    pub fn next_verse(&mut self, corpus: &Corpus) {
        let Some(book_index) = self.book else {
            return;
        };
        let Some(book) = corpus.book_at(book_index) else {
            return;
        };

        let last_verse = book.verse_count(self.chapter).unwrap_or(0);
        if self.verse < last_verse {
            self.verse += 1;
            return;
        }

        if self.chapter < book.chapter_count() {
            self.chapter += 1;
            self.verse = 1;
            return;
        }

        if book_index + 1 < corpus.book_count() {
            self.book = Some(book_index + 1);
            self.chapter = 1;
            self.verse = 1;
            debug!(book = book_index + 1, "advanced to next book");
            return;
        }

        if corpus.book_count() > 0 {
            self.book = Some(0);
            self.chapter = 1;
            self.verse = 1;
            debug!("wrapped to first book");
        }
    }

    /// Step backward one verse, cascading across chapter and book
    /// boundaries and wrapping from the corpus start to its end.
    ///
    /// Landing in a previous chapter or book selects its last verse (an
    /// empty chapter lands on verse 1). No-op while no book is selected.
    pub fn prev_verse(&mut self, corpus: &Corpus) {
        let Some(book_index) = self.book else {
            return;
        };
        let Some(book) = corpus.book_at(book_index) else {
            return;
        };

        if self.verse > 1 {
            self.verse -= 1;
            return;
        }

        if self.chapter > 1 {
            self.chapter -= 1;
            self.verse = book.last_verse(self.chapter);
            return;
        }

        if book_index > 0 {
            if let Some(prev_book) = corpus.book_at(book_index - 1) {
                let last_chapter = prev_book.chapter_count().max(1);
                self.book = Some(book_index - 1);
                self.chapter = last_chapter;
                self.verse = prev_book.last_verse(last_chapter);
                debug!(book = book_index - 1, "stepped back to previous book");
                return;
            }
        }

        if let Some(last_book) = corpus.books().last() {
            let last_index = corpus.book_count() - 1;
            let last_chapter = last_book.chapter_count().max(1);
            self.book = Some(last_index);
            self.chapter = last_chapter;
            self.verse = last_book.last_verse(last_chapter);
            debug!("wrapped to last book");
        }
    }

    /// Switch translation, preserving the reading position when the new
    /// corpus has a book of the same name.
    ///
    /// The chapter is kept if it exists in the new book, otherwise it
    /// falls back to 1; the verse is then kept if it exists in that
    /// chapter, otherwise it falls back to 1. A missing book (or no prior
    /// selection) resets to the empty-selection state.
    pub fn change_translation(&mut self, corpora: &CorpusSet, new_translation: Translation) {
        let book_name = self
            .current_book(corpora.get(self.translation))
            .map(|b| b.name.clone());
        self.translation = new_translation;

        let Some(name) = book_name else {
            self.reset_selection();
            return;
        };

        let corpus = corpora.get(new_translation);
        let found = corpus
            .book_index_by_name(&name)
            .and_then(|idx| corpus.book_at(idx).map(|book| (idx, book)));
        match found {
            Some((index, book)) => {
                self.book = Some(index);
                if self.chapter > book.chapter_count() {
                    self.chapter = 1;
                }
                if self.verse > book.verse_count(self.chapter).unwrap_or(0) {
                    self.verse = 1;
                }
                debug!(
                    translation = %new_translation,
                    book = index,
                    chapter = self.chapter,
                    verse = self.verse,
                    "translation switched, position preserved"
                );
            }
            None => {
                debug!(
                    translation = %new_translation,
                    book = %name,
                    "translation switched, book missing, selection reset"
                );
                self.reset_selection();
            }
        }
    }

    fn reset_selection(&mut self) {
        self.book = None;
        self.chapter = 1;
        self.verse = 1;
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
