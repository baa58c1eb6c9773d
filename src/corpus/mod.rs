//! Corpus store: one immutable corpus per translation.
//!
//! The datasets are embedded in the binary, pre-converted offline from
//! their source markup. They are parsed exactly once at startup into a
//! [`CorpusSet`]; afterwards every lookup is a pure, infallible borrow.
//! A parse failure can only mean a corrupt embedded asset and surfaces
//! as a startup error, never mid-session.

use crate::model::{Book, Translation};
use thiserror::Error;

const AA_DATASET: &str = include_str!("../../assets/aa.json");
const ACF_DATASET: &str = include_str!("../../assets/acf.json");
const NVI_DATASET: &str = include_str!("../../assets/nvi.json");

/// Error raised while parsing a translation dataset at startup.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The embedded JSON for a translation failed to deserialize.
    #[error("failed to parse dataset for translation {translation}: {source}")]
    Parse {
        /// Code of the translation whose dataset failed.
        translation: String,
        /// Underlying serde error.
        source: serde_json::Error,
    },
}

// ===== Corpus =====

/// The full ordered collection of books for one translation.
///
/// Book order is canonical order and defines the traversal order for
/// cross-book navigation. No mutation is exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    /// Create a corpus from an ordered book list.
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// All books in canonical order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Book at the given zero-based index.
    pub fn book_at(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Index of the book with the given name (exact match).
    pub fn book_index_by_name(&self, name: &str) -> Option<usize> {
        self.books.iter().position(|b| b.name == name)
    }

    /// Total verse count across all books and chapters.
    pub fn total_verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters.iter())
            .map(Vec::len)
            .sum()
    }
}

// ===== CorpusSet =====

/// One parsed corpus per supported translation.
#[derive(Debug, Clone)]
pub struct CorpusSet {
    aa: Corpus,
    acf: Corpus,
    nvi: Corpus,
}

impl CorpusSet {
    /// Build a set from three already-parsed corpora (used by tests).
    pub fn new(aa: Corpus, acf: Corpus, nvi: Corpus) -> Self {
        Self { aa, acf, nvi }
    }

    /// Parse the embedded datasets into a ready-to-use set.
    pub fn load_builtin() -> Result<Self, CorpusError> {
        Ok(Self {
            aa: parse_dataset(Translation::Aa, AA_DATASET)?,
            acf: parse_dataset(Translation::Acf, ACF_DATASET)?,
            nvi: parse_dataset(Translation::Nvi, NVI_DATASET)?,
        })
    }

    /// Corpus for the given translation. Pure lookup, never fails.
    pub fn get(&self, translation: Translation) -> &Corpus {
        match translation {
            Translation::Aa => &self.aa,
            Translation::Acf => &self.acf,
            Translation::Nvi => &self.nvi,
        }
    }
}

fn parse_dataset(translation: Translation, raw: &str) -> Result<Corpus, CorpusError> {
    let books: Vec<Book> = serde_json::from_str(raw).map_err(|source| CorpusError::Parse {
        translation: translation.code().to_string(),
        source,
    })?;
    Ok(Corpus::new(books))
}
