//! Translation identifiers.
//!
//! The reader ships a fixed set of three Portuguese translations. Each one
//! is keyed by a short lowercase code (the dataset file stem) and carries a
//! human-readable label for the sidebar and share footer.

use std::fmt;
use std::str::FromStr;

/// One of the fixed set of supported translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Translation {
    /// Almeida Atualizada.
    Aa,
    /// Almeida Corrigida Fiel.
    Acf,
    /// Nova Versão Internacional.
    Nvi,
}

impl Translation {
    /// All translations, in cycling order.
    pub const ALL: [Translation; 3] = [Translation::Aa, Translation::Acf, Translation::Nvi];

    /// Short lowercase code, matching the dataset file stem.
    pub fn code(self) -> &'static str {
        match self {
            Translation::Aa => "aa",
            Translation::Acf => "acf",
            Translation::Nvi => "nvi",
        }
    }

    /// Full display label.
    pub fn label(self) -> &'static str {
        match self {
            Translation::Aa => "Almeida Atualizada",
            Translation::Acf => "Almeida Corrigida Fiel",
            Translation::Nvi => "Nova Versão Internacional",
        }
    }

    /// Next translation in cycling order, wrapping at the end.
    pub fn next(self) -> Translation {
        match self {
            Translation::Aa => Translation::Acf,
            Translation::Acf => Translation::Nvi,
            Translation::Nvi => Translation::Aa,
        }
    }
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Aa
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Translation {
    type Err = InvalidTranslation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aa" => Ok(Translation::Aa),
            "acf" => Ok(Translation::Acf),
            "nvi" => Ok(Translation::Nvi),
            other => Err(InvalidTranslation(other.to_string())),
        }
    }
}

/// Error for an unrecognized translation code.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown translation code: {0:?} (expected aa, acf or nvi)")]
pub struct InvalidTranslation(pub String);
