//! Acceptance tests for the search flow: typing a query, scope cycling,
//! the results overlay, match hopping with n/N, and dismissal.
//!
//! The embedded datasets drive all expectations, so match counts are
//! asserted exactly.

use crate::state::{FocusPane, SearchState};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

// ===== Test Helpers =====

/// Expand the first book and open its first chapter.
fn open_genesis_chapter_one(harness: &mut AcceptanceTestHarness) {
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Down);
    harness.send_key(KeyCode::Enter);
}

/// The matches of the active search, or a panic with context.
fn active_matches(harness: &AcceptanceTestHarness) -> Vec<(String, usize, usize)> {
    match &harness.state().search {
        SearchState::Active { matches, .. } => matches
            .iter()
            .map(|m| (m.book.clone(), m.chapter, m.verse))
            .collect(),
        other => panic!("Expected an active search, got {other:?}"),
    }
}

// ===== Query Entry =====

#[test]
fn slash_opens_the_search_input() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));

    assert!(
        matches!(harness.state().search, SearchState::Typing { .. }),
        "Search input should be open"
    );
    assert_eq!(harness.state().focus, FocusPane::Search);

    // VERIFY: The input row renders with the default scope
    let output = harness.render_to_string();
    assert!(output.contains("Busca"), "Search input should render");
    assert!(
        output.contains("Bíblia"),
        "Default scope should be the whole Bible"
    );
}

#[test]
fn typed_characters_edit_the_query() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("luzz");
    harness.send_key(KeyCode::Backspace);

    match &harness.state().search {
        SearchState::Typing { query, cursor, .. } => {
            assert_eq!(query, "luz");
            assert_eq!(*cursor, 3);
        }
        other => panic!("Expected typing state, got {other:?}"),
    }

    // VERIFY: j edits the query instead of moving the reader
    harness.send_key(KeyCode::Char('j'));
    match &harness.state().search {
        SearchState::Typing { query, .. } => assert_eq!(query, "luzj"),
        other => panic!("Expected typing state, got {other:?}"),
    }
    assert_eq!(
        harness.state().reader().verse(),
        1,
        "Typing must not navigate"
    );
}

#[test]
fn empty_query_submission_keeps_the_input_open() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));
    harness.send_key(KeyCode::Enter);

    assert!(
        matches!(harness.state().search, SearchState::Typing { .. }),
        "An empty query should not submit"
    );
    assert!(!harness.state().results_visible);

    harness.send_key(KeyCode::Esc);
    assert!(matches!(harness.state().search, SearchState::Inactive));
}

// ===== Matching =====

#[test]
fn searching_is_diacritic_insensitive() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    // WHEN: Searching the undiacritized spelling over the whole Bible
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("principio");
    harness.send_key(KeyCode::Enter);

    // THEN: All three "princípio" verses match, in corpus order
    let matches = active_matches(&harness);
    assert_eq!(
        matches,
        vec![
            ("Gênesis".to_string(), 1, 1),
            ("João".to_string(), 1, 1),
            ("João".to_string(), 1, 2),
        ]
    );
    assert!(harness.state().results_visible);

    // VERIFY: The overlay lists references with the verse text
    let output = harness.render_to_string();
    assert!(
        output.contains("Resultados 1/3"),
        "Overlay title should count matches, got:\n{output}"
    );
    assert!(output.contains("Gênesis 1:1"), "Reference should render");
}

#[test]
fn searching_is_case_insensitive() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("JESUS");
    harness.send_key(KeyCode::Enter);

    let matches = active_matches(&harness);
    assert_eq!(matches.len(), 7, "All João verses naming Jesus should hit");
    assert_eq!(matches[0], ("João".to_string(), 2, 1));
}

#[test]
fn chapter_scope_limits_matches_to_the_open_chapter() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    // WHEN: Cycling the scope once (Bíblia → Capítulo) before submitting
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("luz");
    harness.send_key(KeyCode::Tab);

    let output = harness.render_to_string();
    assert!(
        output.contains("Capítulo"),
        "Input title should show the narrowed scope"
    );

    harness.send_key(KeyCode::Enter);

    // THEN: Only the Gênesis 1 "luz" verses match (João's stay out)
    let matches = active_matches(&harness);
    assert_eq!(
        matches,
        vec![
            ("Gênesis".to_string(), 1, 3),
            ("Gênesis".to_string(), 1, 4),
            ("Gênesis".to_string(), 1, 5),
        ]
    );
}

#[test]
fn book_scope_covers_every_chapter_of_the_open_book() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    // WHEN: Cycling the scope twice (Bíblia → Capítulo → Livro)
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("deus");
    harness.send_key(KeyCode::Tab);
    harness.send_key(KeyCode::Tab);
    harness.send_key(KeyCode::Enter);

    // THEN: Matches span both Gênesis chapters and nothing else
    let matches = active_matches(&harness);
    assert_eq!(matches.len(), 7);
    assert!(matches.iter().all(|(book, _, _)| book == "Gênesis"));
    assert!(matches.iter().any(|&(_, chapter, _)| chapter == 2));
}

#[test]
fn no_matches_shows_the_empty_notice() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("xyzzy");
    harness.send_key(KeyCode::Enter);

    assert!(active_matches(&harness).is_empty());
    assert!(harness.state().results_visible);

    let output = harness.render_to_string();
    assert!(
        output.contains("Nenhum resultado"),
        "Empty result set should render a notice, got:\n{output}"
    );
}

// ===== Results Overlay =====

#[test]
fn enter_on_a_result_jumps_and_closes_the_overlay() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("nicodemos");
    harness.send_key(KeyCode::Enter);
    assert_eq!(active_matches(&harness).len(), 3); // João 3:1, 3:4, 3:9

    // WHEN: Selecting the second match and confirming
    harness.send_key(KeyCode::Down);
    harness.send_key(KeyCode::Enter);

    // THEN: The reader jumped there and the overlay closed
    let state = harness.state();
    assert_eq!(state.reader().book_index(), Some(2), "João is book 3");
    assert_eq!(state.reader().chapter(), 3);
    assert_eq!(state.reader().verse(), 4);
    assert!(!state.results_visible);
    assert!(
        state.search.is_active(),
        "The search survives the overlay for n/N hopping"
    );
}

#[test]
fn esc_dismisses_the_overlay_then_clears_the_search() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("luz");
    harness.send_key(KeyCode::Enter);
    assert!(harness.state().results_visible);

    // First Esc: close the overlay, keep the search
    harness.send_key(KeyCode::Esc);
    assert!(!harness.state().results_visible);
    assert!(harness.state().search.is_active());

    // Second Esc: clear the search entirely
    harness.send_key(KeyCode::Esc);
    assert!(matches!(harness.state().search, SearchState::Inactive));
}

// ===== Match Hopping =====

#[test]
fn n_and_shift_n_hop_between_matches_with_wraparound() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("nicodemos");
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Esc); // Close the overlay, search stays active

    // WHEN: Hopping forward through all matches
    harness.send_key(KeyCode::Char('n'));
    assert_eq!(harness.state().reader().verse(), 4); // João 3:4

    harness.send_key(KeyCode::Char('n'));
    assert_eq!(harness.state().reader().verse(), 9); // João 3:9

    harness.send_key(KeyCode::Char('n'));
    assert_eq!(harness.state().reader().verse(), 1, "n should wrap around");

    // WHEN: Hopping backward past the start
    harness.send_key_with_mods(KeyCode::Char('N'), KeyModifiers::SHIFT);
    assert_eq!(harness.state().reader().verse(), 9, "N should wrap around");

    // VERIFY: The status line tracks the occurrence
    let output = harness.render_to_string();
    assert!(
        output.contains("Ocorrência 3/3"),
        "Status should show the occurrence counter, got:\n{output}"
    );
}

#[test]
fn active_matches_highlight_in_the_reader() {
    let mut harness = AcceptanceTestHarness::start().expect("harness should start");
    open_genesis_chapter_one(&mut harness);

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("luz");
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Enter); // Jump to the first match

    // THEN: The reader sits on Gênesis 1:3 with the search still active
    assert_eq!(harness.state().reader().verse(), 3);

    let output = harness.render_to_string();
    assert!(
        output.contains("Gênesis 1:3"),
        "Header should show the match position"
    );
    assert!(
        output.contains("Haja luz"),
        "The matched verse should be visible"
    );
}
