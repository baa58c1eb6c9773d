//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.
//!
//! The cursor counts characters, not bytes, so accented input (a given for
//! Portuguese queries) edits correctly.

use crate::corpus::Corpus;
use crate::state::{execute_search, ReaderState, SearchQuery, SearchScope, SearchState};

/// Byte offset of the `cursor`-th character, or the end of the string.
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(query.len())
}

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing {
            mut query,
            cursor,
            scope,
        } => {
            let at = byte_offset(&query, cursor);
            query.insert(at, ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
                scope,
            }
        }
        // No-op for other states
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes character before cursor if cursor > 0.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing {
            mut query,
            cursor,
            scope,
        } => {
            if cursor > 0 {
                let at = byte_offset(&query, cursor - 1);
                query.remove(at);
                SearchState::Typing {
                    query,
                    cursor: cursor - 1,
                    scope,
                }
            } else {
                // cursor == 0, can't delete
                SearchState::Typing {
                    query,
                    cursor,
                    scope,
                }
            }
        }
        // No-op for other states
        other => other,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing {
            query,
            cursor,
            scope,
        } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
            scope,
        },
        // No-op for other states
        other => other,
    }
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing {
            query,
            cursor,
            scope,
        } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
                scope,
            }
        }
        // No-op for other states
        other => other,
    }
}

/// Cycle the scope while typing: chapter → book → bible → chapter.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn cycle_scope(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing {
            query,
            cursor,
            scope,
        } => SearchState::Typing {
            query,
            cursor,
            scope: scope.next(),
        },
        // No-op for other states
        other => other,
    }
}

/// Activate search input mode.
/// Transitions from Inactive to Typing with empty query and cursor at 0;
/// from Active to a fresh Typing that keeps the previous scope.
///
/// No-op if already in Typing state.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
            scope: SearchScope::default(),
        },
        SearchState::Active { scope, .. } => SearchState::Typing {
            query: String::new(),
            cursor: 0,
            scope,
        },
        other => other,
    }
}

/// Cancel search input.
/// Transitions from Typing or Active to Inactive.
///
/// No-op if already Inactive.
pub fn cancel_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { .. } | SearchState::Active { .. } => SearchState::Inactive,
        SearchState::Inactive => SearchState::Inactive,
    }
}

/// Submit search query.
/// Transitions from Typing to Active, executing the search over `scope`.
/// An empty or whitespace-only query is a no-op: the state stays Typing.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn submit_search(state: SearchState, corpus: &Corpus, reader: &ReaderState) -> SearchState {
    match state {
        SearchState::Typing {
            query,
            cursor,
            scope,
        } => match SearchQuery::new(query.clone()) {
            Some(search_query) => {
                let matches = execute_search(corpus, reader, scope, &search_query);
                SearchState::Active {
                    query: search_query,
                    scope,
                    matches,
                    current_match: 0,
                }
            }
            None => SearchState::Typing {
                query,
                cursor,
                scope,
            },
        },
        // No-op for other states
        other => other,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
