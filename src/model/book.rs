//! Book data model.
//!
//! A book is an ordered sequence of chapters; a chapter is an ordered
//! sequence of verse texts. Chapter and verse numbers are 1-based
//! everywhere outside the raw vectors (index 0 holds chapter 1 / verse 1).

use serde::Deserialize;

/// One book of a translation, as stored in the dataset files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    /// Canonical book name, unique within a translation.
    pub name: String,
    /// Conventional abbreviation ("gn", "sl", ...), if the dataset has one.
    #[serde(default)]
    pub abbrev: Option<String>,
    /// Chapters in order; each chapter is its verses in order.
    pub chapters: Vec<Vec<String>>,
}

impl Book {
    /// Number of chapters.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Verses of the given 1-based chapter, or `None` if out of range.
    pub fn verses(&self, chapter: usize) -> Option<&[String]> {
        if chapter == 0 {
            return None;
        }
        self.chapters.get(chapter - 1).map(Vec::as_slice)
    }

    /// Verse count of the given 1-based chapter, or `None` if out of range.
    pub fn verse_count(&self, chapter: usize) -> Option<usize> {
        self.verses(chapter).map(<[String]>::len)
    }

    /// Text of the given 1-based chapter/verse, or `None` if out of range.
    pub fn verse_text(&self, chapter: usize, verse: usize) -> Option<&str> {
        if verse == 0 {
            return None;
        }
        self.verses(chapter)?.get(verse - 1).map(String::as_str)
    }

    /// Last verse number of the given 1-based chapter.
    ///
    /// An empty chapter reports 1 so traversal always has a landing verse.
    pub fn last_verse(&self, chapter: usize) -> usize {
        self.verse_count(chapter).unwrap_or(0).max(1)
    }
}
