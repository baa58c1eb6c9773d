//! Verse selection and share text composition.
//!
//! # State Machine
//!
//! The composer is inactive (empty selection) or active (non-empty
//! selection within the current chapter). Starting share mode seeds the
//! selection with one verse; toggling the last verse out deactivates the
//! mode automatically. The export flag is independent of the selection, so
//! cancelling while an export is in flight leaves the composer consistent:
//! the selection clears, the flag clears when the export finishes.

use crate::model::{Book, Translation};
use std::collections::BTreeSet;
use tracing::debug;

/// Multi-verse selection for composing a shareable excerpt.
#[derive(Debug, Clone, Default)]
pub struct ShareComposer {
    selected: BTreeSet<usize>,
    active: bool,
    export_in_flight: bool,
}

impl ShareComposer {
    /// Inactive composer with an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether share mode is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether `verse` is part of the selection.
    pub fn is_selected(&self, verse: usize) -> bool {
        self.selected.contains(&verse)
    }

    /// Number of selected verses.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Selected verse numbers in ascending order.
    pub fn verses(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Whether an export is currently running.
    pub fn export_in_flight(&self) -> bool {
        self.export_in_flight
    }

    /// Enter share mode with `initial_verse` as the only selection.
    pub fn start(&mut self, initial_verse: usize) {
        self.selected.clear();
        self.selected.insert(initial_verse);
        self.active = true;
        debug!(verse = initial_verse, "share mode started");
    }

    /// Toggle membership of `verse` while share mode is active.
    ///
    /// Removing the last verse leaves share mode. Inactive composers
    /// ignore the call; callers route that case to plain single-verse
    /// selection instead.
    pub fn toggle(&mut self, verse: usize) {
        if !self.active {
            return;
        }
        if !self.selected.remove(&verse) {
            self.selected.insert(verse);
        }
        if self.selected.is_empty() {
            self.active = false;
            debug!("share selection emptied, leaving share mode");
        }
    }

    /// Clear the selection and leave share mode.
    ///
    /// An export already in flight keeps its flag until it finishes.
    pub fn cancel(&mut self) {
        self.selected.clear();
        self.active = false;
    }

    /// Claim the export slot. Returns false while another export runs;
    /// exports never run in parallel.
    pub fn begin_export(&mut self) -> bool {
        if self.export_in_flight {
            debug!("export already in flight, request rejected");
            return false;
        }
        self.export_in_flight = true;
        true
    }

    /// Release the export slot after a collaborator call completes.
    pub fn finish_export(&mut self) {
        self.export_in_flight = false;
    }
}

// ===== Composition =====

/// Compose the shareable text for the selection, in ascending verse order.
///
/// Each verse becomes `"<text>" (<chapter>:<verse>)`, joined by blank
/// lines. Unless `lines_only`, the book name heads the text and an
/// attribution line naming the translation closes it. Selected numbers
/// without a verse in the chapter are skipped; an empty selection yields
/// an empty string.
pub fn compose_share_text(
    composer: &ShareComposer,
    book: &Book,
    chapter: usize,
    translation: Translation,
    lines_only: bool,
) -> String {
    let lines: Vec<String> = composer
        .verses()
        .filter_map(|verse| {
            book.verse_text(chapter, verse)
                .map(|text| format!("\"{text}\" ({chapter}:{verse})"))
        })
        .collect();
    if lines.is_empty() {
        return String::new();
    }

    let body = lines.join("\n\n");
    if lines_only {
        body
    } else {
        format!(
            "{}\n\n{}\n\n— Bíblia Sagrada, {}",
            book.name,
            body,
            translation.label()
        )
    }
}

#[cfg(test)]
#[path = "share_tests.rs"]
mod tests;
