//! Application state and transitions.
//!
//! AppState is the root state type: the corpus set and reading position
//! plus all UI state. State transitions are synchronous methods driven by
//! the event loop; the shell renders from this state and never mutates it
//! directly.
//!
//! # State Machine
//!
//! - **Focus**: which pane receives keys (Sidebar, Reader, Search).
//! - **Search**: Inactive → Typing → Active → Inactive (see `SearchState`);
//!   the results overlay opens on submit and closes on jump or Esc while
//!   the search itself stays active for n/N match hopping.
//! - **Share**: inactive ⇄ active selection (see `ShareComposer`).
//! - **Verse prompt**: closed ⇄ open digit buffer feeding `set_verse`.

use crate::corpus::{Corpus, CorpusSet};
use crate::model::{Theme, Translation};
use crate::state::{
    go_to, search_input_handler, ReaderState, SearchMatch, SearchState, ShareComposer,
    SidebarState,
};
use tracing::info;

// ===== AppState =====

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All three corpora. The domain model; immutable after startup.
    corpora: CorpusSet,

    /// Current translation and reading position.
    reader: ReaderState,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Whether the sidebar is shown at all.
    pub sidebar_visible: bool,

    /// Book/chapter browser state.
    pub sidebar: SidebarState,

    /// Current search state (inactive, typing, or active with results).
    pub search: SearchState,

    /// Whether the search results overlay is open.
    /// Only meaningful while `search` is active.
    pub results_visible: bool,

    /// Verse selection for sharing.
    pub share: ShareComposer,

    /// Digit buffer of the verse prompt; `None` while closed.
    pub verse_prompt: Option<String>,

    /// Active color theme.
    pub theme: Theme,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Scroll offset of the help overlay text.
    pub help_scroll: u16,

    /// Reader pane scroll state.
    pub scroll: ReaderScroll,

    /// Transient status notice shown instead of the hint line until the
    /// next key press.
    pub status: Option<String>,
}

impl AppState {
    /// Create the initial state: given translation and theme, no book
    /// selected, sidebar focused so the reader can pick one.
    pub fn new(corpora: CorpusSet, translation: Translation, theme: Theme) -> Self {
        Self {
            corpora,
            reader: ReaderState::new(translation),
            focus: FocusPane::Sidebar,
            sidebar_visible: true,
            sidebar: SidebarState::new(),
            search: SearchState::Inactive,
            results_visible: false,
            share: ShareComposer::new(),
            verse_prompt: None,
            theme,
            help_visible: false,
            help_scroll: 0,
            scroll: ReaderScroll::default(),
            status: None,
        }
    }

    /// The corpus set.
    pub fn corpora(&self) -> &CorpusSet {
        &self.corpora
    }

    /// The reading position.
    pub fn reader(&self) -> &ReaderState {
        &self.reader
    }

    /// The corpus of the active translation.
    pub fn corpus(&self) -> &Corpus {
        self.corpora.get(self.reader.translation())
    }

    /// Replace the hint line with a transient notice.
    pub fn set_status(&mut self, notice: impl Into<String>) {
        self.status = Some(notice.into());
    }

    // ===== Focus =====

    /// Cycle focus between the sidebar and the reader. A transient search
    /// focus always returns to the reader.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Sidebar => FocusPane::Reader,
            FocusPane::Reader if self.sidebar_visible => FocusPane::Sidebar,
            FocusPane::Reader => FocusPane::Reader,
            FocusPane::Search => FocusPane::Reader,
        };
    }

    /// Show or hide the sidebar. Hiding it moves focus to the reader.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
        if !self.sidebar_visible && self.focus == FocusPane::Sidebar {
            self.focus = FocusPane::Reader;
        }
    }

    // ===== Sidebar =====

    /// Move the sidebar cursor up.
    pub fn sidebar_up(&mut self) {
        self.sidebar.move_up();
    }

    /// Move the sidebar cursor down.
    pub fn sidebar_down(&mut self) {
        let corpus = self.corpora.get(self.reader.translation());
        self.sidebar.move_down(corpus);
    }

    /// Activate the sidebar row under the cursor: expand/collapse a book,
    /// or select a chapter and hand focus to the reader.
    pub fn sidebar_activate(&mut self) {
        let corpus = self.corpora.get(self.reader.translation());
        if let Some((book, chapter)) = self.sidebar.activate(corpus) {
            self.reader.select_chapter(corpus, book, chapter);
            self.focus = FocusPane::Reader;
            self.scroll.follow = true;
        }
    }

    /// Collapse the expanded sidebar book.
    pub fn sidebar_collapse(&mut self) {
        self.sidebar.collapse();
    }

    // ===== Reader Navigation =====

    /// Step to the next verse.
    pub fn next_verse(&mut self) {
        let corpus = self.corpora.get(self.reader.translation());
        self.reader.next_verse(corpus);
        self.scroll.follow = true;
    }

    /// Step to the previous verse.
    pub fn prev_verse(&mut self) {
        let corpus = self.corpora.get(self.reader.translation());
        self.reader.prev_verse(corpus);
        self.scroll.follow = true;
    }

    /// Cycle the translation aa → acf → nvi, keeping the position where
    /// the new corpus allows. Search and share state belong to the old
    /// corpus and are discarded.
    pub fn cycle_translation(&mut self) {
        let next = self.reader.translation().next();
        self.reader.change_translation(&self.corpora, next);
        self.search = SearchState::Inactive;
        self.results_visible = false;
        self.share.cancel();
        let corpus = self.corpora.get(self.reader.translation());
        self.sidebar.clamp(corpus);
        self.scroll.follow = true;
        info!(translation = %next, "translation changed");
    }

    /// Cycle the theme claro → dark → homem → mulher and return the new
    /// value for the shell to persist.
    pub fn cycle_theme(&mut self) -> Theme {
        self.theme = self.theme.next();
        self.theme
    }

    // ===== Verse Prompt =====

    /// Open the numeric verse prompt. No-op without a selected book.
    pub fn open_verse_prompt(&mut self) {
        if self.reader.has_selection() {
            self.verse_prompt = Some(String::new());
        }
    }

    /// Append a digit to the verse prompt.
    pub fn verse_prompt_input(&mut self, ch: char) {
        if let Some(buffer) = &mut self.verse_prompt {
            if ch.is_ascii_digit() {
                buffer.push(ch);
            }
        }
    }

    /// Delete the last digit of the verse prompt.
    pub fn verse_prompt_backspace(&mut self) {
        if let Some(buffer) = &mut self.verse_prompt {
            buffer.pop();
        }
    }

    /// Apply the verse prompt: a parsable number feeds `set_verse`
    /// unvalidated, anything else just closes the prompt.
    pub fn submit_verse_prompt(&mut self) {
        if let Some(buffer) = self.verse_prompt.take() {
            if let Ok(verse) = buffer.parse::<usize>() {
                self.reader.set_verse(verse);
                self.scroll.follow = true;
            }
        }
    }

    /// Close the verse prompt without applying it.
    pub fn cancel_verse_prompt(&mut self) {
        self.verse_prompt = None;
    }

    // ===== Search =====

    /// Open the search input.
    pub fn start_search(&mut self) {
        self.results_visible = false;
        self.search = search_input_handler::activate_search_input(self.take_search());
        if matches!(self.search, SearchState::Typing { .. }) {
            self.focus = FocusPane::Search;
        }
    }

    /// Insert a character at the search cursor.
    pub fn search_input(&mut self, ch: char) {
        self.search = search_input_handler::handle_char_input(self.take_search(), ch);
    }

    /// Delete the character before the search cursor.
    pub fn search_backspace(&mut self) {
        self.search = search_input_handler::handle_backspace(self.take_search());
    }

    /// Move the search cursor left.
    pub fn search_cursor_left(&mut self) {
        self.search = search_input_handler::handle_cursor_left(self.take_search());
    }

    /// Move the search cursor right.
    pub fn search_cursor_right(&mut self) {
        self.search = search_input_handler::handle_cursor_right(self.take_search());
    }

    /// Cycle the search scope while typing.
    pub fn search_cycle_scope(&mut self) {
        self.search = search_input_handler::cycle_scope(self.take_search());
    }

    /// Submit the typed query. A valid query opens the results overlay;
    /// an empty one keeps the input open.
    pub fn submit_search(&mut self) {
        let state = self.take_search();
        let corpus = self.corpora.get(self.reader.translation());
        self.search = search_input_handler::submit_search(state, corpus, &self.reader);
        if self.search.is_active() {
            self.results_visible = true;
            self.focus = FocusPane::Reader;
        }
    }

    /// Abandon the search entirely (input and results).
    pub fn cancel_search(&mut self) {
        self.search = search_input_handler::cancel_search(self.take_search());
        self.results_visible = false;
        if self.focus == FocusPane::Search {
            self.focus = FocusPane::Reader;
        }
    }

    /// Move the results overlay selection down (no wrap).
    pub fn results_down(&mut self) {
        if let SearchState::Active {
            matches,
            current_match,
            ..
        } = &mut self.search
        {
            if !matches.is_empty() {
                *current_match = (*current_match + 1).min(matches.len() - 1);
            }
        }
    }

    /// Move the results overlay selection up (no wrap).
    pub fn results_up(&mut self) {
        if let SearchState::Active { current_match, .. } = &mut self.search {
            *current_match = current_match.saturating_sub(1);
        }
    }

    /// Jump to the selected match and close the overlay. The search stays
    /// active for n/N hopping.
    pub fn results_jump(&mut self) {
        let target = self.search.current().cloned();
        if let Some(target) = target {
            self.jump_to_match(&target);
        }
        self.results_visible = false;
    }

    /// Close the results overlay without jumping.
    pub fn results_close(&mut self) {
        self.results_visible = false;
    }

    /// Hop to the next match, wrapping past the end.
    pub fn next_match(&mut self) {
        let target = match &mut self.search {
            SearchState::Active {
                matches,
                current_match,
                ..
            } if !matches.is_empty() => {
                *current_match = (*current_match + 1) % matches.len();
                Some(matches[*current_match].clone())
            }
            _ => None,
        };
        if let Some(target) = target {
            self.jump_to_match(&target);
        }
    }

    /// Hop to the previous match, wrapping past the start.
    pub fn prev_match(&mut self) {
        let target = match &mut self.search {
            SearchState::Active {
                matches,
                current_match,
                ..
            } if !matches.is_empty() => {
                *current_match = if *current_match == 0 {
                    matches.len() - 1
                } else {
                    *current_match - 1
                };
                Some(matches[*current_match].clone())
            }
            _ => None,
        };
        if let Some(target) = target {
            self.jump_to_match(&target);
        }
    }

    fn jump_to_match(&mut self, target: &SearchMatch) {
        let corpus = self.corpora.get(self.reader.translation());
        go_to(&mut self.reader, corpus, target);
        self.scroll.follow = true;
    }

    fn take_search(&mut self) -> SearchState {
        std::mem::replace(&mut self.search, SearchState::Inactive)
    }

    // ===== Share =====

    /// Enter share mode with the active verse selected. No-op without a
    /// selected book.
    pub fn start_share(&mut self) {
        if self.reader.has_selection() {
            self.share.start(self.reader.verse());
        }
    }

    /// Toggle the active verse: share-mode membership when sharing,
    /// otherwise plain single-verse selection.
    pub fn toggle_verse(&mut self) {
        let verse = self.reader.verse();
        if self.share.is_active() {
            self.share.toggle(verse);
        } else {
            self.reader.set_verse(verse);
        }
    }

    /// Leave share mode, clearing the selection.
    pub fn cancel_share(&mut self) {
        self.share.cancel();
    }
}

// ===== FocusPane =====

/// Which pane has focus. Sum type - exactly one.
///
/// # State Transitions
///
/// - Sidebar ⇄ Reader via Tab.
/// - Any → Search when the search input opens; Search → Reader on
///   submit or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    /// The book/chapter browser has focus.
    Sidebar,

    /// The verse list has focus.
    Reader,

    /// The search input has focus; printable keys edit the query.
    Search,
}

// ===== ReaderScroll =====

/// Scroll state of the reader pane.
///
/// The pane follows the active verse until the reader scrolls manually
/// (PageUp/PageDown/Home/End); the next verse movement snaps back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderScroll {
    /// First visible display row.
    pub offset: usize,

    /// Whether the next render re-aligns the viewport on the active verse.
    pub follow: bool,
}

impl Default for ReaderScroll {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }
}

impl ReaderScroll {
    /// Scroll up by `amount`, saturating at the top; suspends following.
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
        self.follow = false;
    }

    /// Scroll down by `amount`, clamped to `max`; suspends following.
    pub fn scroll_down(&mut self, amount: usize, max: usize) {
        self.offset = (self.offset + amount).min(max);
        self.follow = false;
    }

    /// Jump to the top; suspends following.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.follow = false;
    }

    /// Jump to the bottom; suspends following.
    pub fn scroll_to_bottom(&mut self, max: usize) {
        self.offset = max;
        self.follow = false;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
