//! Search state machine and verse search.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: No search active
//! - Typing: User is entering a query
//! - Active: Search complete with results
//!
//! Matching is diacritic- and case-insensitive: query and verse text are
//! decomposed (NFD), combining marks are stripped, and the result is
//! lowercased before substring comparison. "jesus" therefore matches both
//! "JESUS" and "Jesús".

use crate::corpus::Corpus;
use crate::model::Book;
use crate::state::ReaderState;
use std::ops::Range;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// ===== SearchScope =====

/// Portion of the corpus a search runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Only the selected chapter of the active book.
    Chapter,
    /// Every chapter of the active book.
    Book,
    /// The whole corpus.
    #[default]
    Bible,
}

impl SearchScope {
    /// The next scope in the cycle chapter → book → bible → chapter.
    pub fn next(self) -> Self {
        match self {
            SearchScope::Chapter => SearchScope::Book,
            SearchScope::Book => SearchScope::Bible,
            SearchScope::Bible => SearchScope::Chapter,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            SearchScope::Chapter => "Capítulo",
            SearchScope::Book => "Livro",
            SearchScope::Bible => "Bíblia",
        }
    }
}

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone)]
pub enum SearchState {
    /// No active search.
    Inactive,
    /// User is typing a query. `cursor` counts characters, not bytes.
    Typing {
        /// Query text as typed so far.
        query: String,
        /// Caret position in characters.
        cursor: usize,
        /// Scope the search will run over on submit.
        scope: SearchScope,
    },
    /// Search complete with results.
    Active {
        /// The submitted query.
        query: SearchQuery,
        /// Scope the search ran over.
        scope: SearchScope,
        /// Matches in corpus traversal order.
        matches: Vec<SearchMatch>,
        /// Index into `matches` of the match last navigated to.
        current_match: usize,
    },
}

impl SearchState {
    /// Whether a completed search is being browsed.
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Active { .. })
    }

    /// The match currently navigated to, if a search is active.
    pub fn current(&self) -> Option<&SearchMatch> {
        match self {
            SearchState::Active {
                matches,
                current_match,
                ..
            } => matches.get(*current_match),
            _ => None,
        }
    }
}

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The query text as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== SearchMatch =====

/// A verse that matched a search, in a read-only projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Name of the book the verse belongs to.
    pub book: String,
    /// Chapter number (1-based).
    pub chapter: usize,
    /// Verse number (1-based).
    pub verse: usize,
    /// The verse text, unmodified.
    pub text: String,
}

// ===== Normalization =====

/// Fold text for comparison: NFD decomposition, combining marks stripped,
/// lowercased.
pub fn normalize_text(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// ===== Search Execution =====

/// Run a search over `corpus` within `scope`, anchored at the reader's
/// selection for the narrow scopes.
///
/// Matching is substring containment over normalized text; a verse
/// contributes at most one match. Results come back in corpus traversal
/// order (book, chapter, verse). A scope that needs an active book yields
/// nothing while no book is selected, as does a query that normalizes to
/// the empty string.
pub fn execute_search(
    corpus: &Corpus,
    reader: &ReaderState,
    scope: SearchScope,
    query: &SearchQuery,
) -> Vec<SearchMatch> {
    let needle = normalize_text(query.as_str());
    let mut matches = Vec::new();
    if needle.is_empty() {
        return matches;
    }

    match scope {
        SearchScope::Bible => {
            for book in corpus.books() {
                search_book(book, None, &needle, &mut matches);
            }
        }
        SearchScope::Book => {
            if let Some(book) = reader.current_book(corpus) {
                search_book(book, None, &needle, &mut matches);
            }
        }
        SearchScope::Chapter => {
            if let Some(book) = reader.current_book(corpus) {
                search_book(book, Some(reader.chapter()), &needle, &mut matches);
            }
        }
    }

    debug!(
        query = query.as_str(),
        scope = scope.label(),
        count = matches.len(),
        "search executed"
    );
    matches
}

/// Scan one book, optionally restricted to a single chapter.
fn search_book(
    book: &Book,
    only_chapter: Option<usize>,
    needle: &str,
    matches: &mut Vec<SearchMatch>,
) {
    for (chapter_idx, verses) in book.chapters.iter().enumerate() {
        let chapter = chapter_idx + 1;
        if only_chapter.is_some_and(|c| c != chapter) {
            continue;
        }
        for (verse_idx, text) in verses.iter().enumerate() {
            if normalize_text(text).contains(needle) {
                matches.push(SearchMatch {
                    book: book.name.clone(),
                    chapter,
                    verse: verse_idx + 1,
                    text: text.clone(),
                });
            }
        }
    }
}

// ===== Highlighting =====

/// Byte ranges into `text` whose normalized form contains the normalized
/// query, scanned left to right without overlap (each occurrence advances
/// the scan by the full query length).
pub fn highlight_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle = normalize_text(query);
    if needle.is_empty() {
        return Vec::new();
    }

    // Fold the text the same way normalize_text does, remembering which
    // original byte offset produced each folded byte.
    let mut folded = String::new();
    let mut origin = Vec::new();
    for (offset, ch) in text.char_indices() {
        for folded_ch in std::iter::once(ch)
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
        {
            for _ in 0..folded_ch.len_utf8() {
                origin.push(offset);
            }
            folded.push(folded_ch);
        }
    }

    let mut ranges = Vec::new();
    let mut scan = 0;
    while let Some(found) = folded[scan..].find(&needle) {
        let begin = scan + found;
        let end = begin + needle.len();
        let start = origin[begin];
        let mut stop = origin.get(end).copied().unwrap_or(text.len());
        if stop <= start {
            // Occurrence ends inside a single character's folding; take the
            // whole character.
            stop = start + text[start..].chars().next().map_or(0, char::len_utf8);
        }
        ranges.push(start..stop);
        scan = end;
    }
    ranges
}

// ===== Navigation Delegation =====

/// Jump the reader to a match: select its chapter, then set the verse.
///
/// The chapter is selected first so the verse set here survives, and the
/// book is resolved by name so a match from a stale list is a no-op when
/// the book is gone.
pub fn go_to(reader: &mut ReaderState, corpus: &Corpus, target: &SearchMatch) {
    let Some(book_index) = corpus.book_index_by_name(&target.book) else {
        debug!(book = %target.book, "match book missing from corpus");
        return;
    };
    reader.select_chapter(corpus, book_index, target.chapter);
    reader.set_verse(target.verse);
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
