//! Visual themes.
//!
//! The theme is the single durable preference: cycling it persists the
//! choice to the state directory, and startup restores it (config file,
//! env and CLI still take precedence over the remembered value).

use std::fmt;
use std::str::FromStr;

/// Color theme for the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light, the default.
    Claro,
    /// Dark background.
    Dark,
    /// Blue accent.
    Homem,
    /// Pink accent.
    Mulher,
}

impl Theme {
    /// All themes, in cycling order.
    pub const ALL: [Theme; 4] = [Theme::Claro, Theme::Dark, Theme::Homem, Theme::Mulher];

    /// Stable name used in config files and the persisted preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Claro => "claro",
            Theme::Dark => "dark",
            Theme::Homem => "homem",
            Theme::Mulher => "mulher",
        }
    }

    /// Next theme in cycling order, wrapping at the end.
    pub fn next(self) -> Theme {
        match self {
            Theme::Claro => Theme::Dark,
            Theme::Dark => Theme::Homem,
            Theme::Homem => Theme::Mulher,
            Theme::Mulher => Theme::Claro,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Claro
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claro" => Ok(Theme::Claro),
            "dark" => Ok(Theme::Dark),
            "homem" => Ok(Theme::Homem),
            "mulher" => Ok(Theme::Mulher),
            other => Err(InvalidTheme(other.to_string())),
        }
    }
}

/// Error for an unrecognized theme name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown theme: {0:?} (expected claro, dark, homem or mulher)")]
pub struct InvalidTheme(pub String);
