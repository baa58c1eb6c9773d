//! Theme palettes and color configuration.
//!
//! Maps each [`Theme`] to a concrete ratatui palette. When colors are
//! disabled the palette degrades to text modifiers only, so every state
//! (active verse, share mark, search hit) stays distinguishable on a
//! monochrome terminal.

use crate::model::Theme;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Resolved styles for one theme.
///
/// Every widget draws through these; nothing else names a `Color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Ordinary verse and list text.
    pub text: Style,
    /// Secondary text: verse numbers, hints, unfocused borders.
    pub dim: Style,
    /// Theme accent: headers, focused borders, scope labels.
    pub accent: Style,
    /// The verse the reader is on.
    pub active: Style,
    /// A verse marked for sharing.
    pub selected: Style,
    /// A search occurrence inside verse text.
    pub highlight: Style,
}

impl Palette {
    /// Resolve the palette for `theme`, honoring the color switch.
    pub fn for_theme(theme: Theme, config: ColorConfig) -> Self {
        if !config.colors_enabled() {
            return Self::plain();
        }
        match theme {
            Theme::Claro => Self::claro(),
            Theme::Dark => Self::dark(),
            Theme::Homem => Self::homem(),
            Theme::Mulher => Self::mulher(),
        }
    }

    /// Modifier-only palette for monochrome output.
    fn plain() -> Self {
        Self {
            text: Style::default(),
            dim: Style::default().add_modifier(Modifier::DIM),
            accent: Style::default().add_modifier(Modifier::BOLD),
            active: Style::default().add_modifier(Modifier::REVERSED),
            selected: Style::default().add_modifier(Modifier::BOLD),
            highlight: Style::default().add_modifier(Modifier::UNDERLINED),
        }
    }

    /// Light theme with a warm orange accent.
    fn claro() -> Self {
        let accent = Color::Rgb(214, 93, 14);
        Self {
            text: Style::default(),
            dim: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(accent),
            active: Style::default().fg(accent).add_modifier(Modifier::REVERSED),
            selected: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().fg(Color::Black).bg(Color::Yellow),
        }
    }

    /// Dark theme with a cyan accent.
    fn dark() -> Self {
        Self {
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Cyan),
            active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::REVERSED),
            selected: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().fg(Color::Black).bg(Color::Yellow),
        }
    }

    /// Blue-accented variant of the dark theme.
    fn homem() -> Self {
        Self {
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Blue),
            active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::REVERSED),
            selected: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().fg(Color::Black).bg(Color::Yellow),
        }
    }

    /// Magenta-accented variant of the dark theme.
    fn mulher() -> Self {
        Self {
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::LightMagenta),
            active: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::REVERSED),
            selected: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().fg(Color::Black).bg(Color::Yellow),
        }
    }
}
