//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;
use thiserror::Error;

/// Errors for invalid `[keybindings]` entries in the config file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// Key name not recognized by the binding grammar.
    #[error("unknown key name: {0:?}")]
    UnknownKey(String),

    /// Action name not recognized.
    #[error("unknown action name: {0:?}")]
    UnknownAction(String),
}

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings, remappable through the
/// `[keybindings]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Apply `[keybindings]` overrides from the config file.
    ///
    /// Each entry maps a key name (`"j"`, `"Up"`, `"Ctrl+d"`, `"Space"`) to
    /// an action name (`"down"`, `"start-search"`). Overrides replace the
    /// default binding for that key; unknown names reject the whole config.
    pub fn apply_overrides(
        &mut self,
        overrides: &HashMap<String, String>,
    ) -> Result<(), BindingError> {
        for (key_name, action_name) in overrides {
            let key = parse_key_name(key_name)?;
            let action = parse_action_name(action_name)?;
            self.bindings.insert(key, action);
        }
        Ok(())
    }
}

/// Parse a key name from the config file grammar.
///
/// Accepts single characters (uppercase implies shift, matching how
/// crossterm reports them), `Ctrl+<char>`, and the named keys used by the
/// defaults (`Up`, `Down`, `PageUp`, `Home`, `Enter`, `Esc`, `Space`, ...).
fn parse_key_name(name: &str) -> Result<KeyEvent, BindingError> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if let Some(rest) = name.strip_prefix("Ctrl+") {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(KeyEvent::new(
                KeyCode::Char(ch.to_ascii_lowercase()),
                KeyModifiers::CONTROL,
            )),
            _ => Err(BindingError::UnknownKey(name.to_string())),
        };
    }

    let code = match name {
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "Tab" => KeyCode::Tab,
        "Enter" => KeyCode::Enter,
        "Esc" => KeyCode::Esc,
        "Space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return Err(BindingError::UnknownKey(name.to_string())),
            }
        }
    };

    let modifiers = match code {
        KeyCode::Char(ch) if ch.is_ascii_uppercase() => KeyModifiers::SHIFT,
        _ => KeyModifiers::NONE,
    };

    Ok(KeyEvent::new(code, modifiers))
}

/// Parse an action name from the config file grammar.
fn parse_action_name(name: &str) -> Result<KeyAction, BindingError> {
    let action = match name {
        "down" => KeyAction::Down,
        "up" => KeyAction::Up,
        "page-down" => KeyAction::PageDown,
        "page-up" => KeyAction::PageUp,
        "top" => KeyAction::Top,
        "bottom" => KeyAction::Bottom,
        "select" => KeyAction::Select,
        "cancel" => KeyAction::Cancel,
        "cycle-focus" => KeyAction::CycleFocus,
        "toggle-sidebar" => KeyAction::ToggleSidebar,
        "start-search" => KeyAction::StartSearch,
        "next-match" => KeyAction::NextMatch,
        "prev-match" => KeyAction::PrevMatch,
        "verse-prompt" => KeyAction::VersePrompt,
        "cycle-translation" => KeyAction::CycleTranslation,
        "cycle-theme" => KeyAction::CycleTheme,
        "start-share" => KeyAction::StartShare,
        "toggle-select" => KeyAction::ToggleSelect,
        "confirm-share" => KeyAction::ConfirmShare,
        "export-card" => KeyAction::ExportCard,
        "quit" => KeyAction::Quit,
        "help" => KeyAction::Help,
        other => return Err(BindingError::UnknownAction(other.to_string())),
    };
    Ok(action)
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Vim-style movement
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::Down,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::Up,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::Top,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::Bottom,
        );

        // Arrow key movement
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::Up,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::Down,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::Top,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::Bottom,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );

        // Selection
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Select,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Cancel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::Cancel,
        );

        // Focus switching
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::CycleFocus,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE),
            KeyAction::ToggleSidebar,
        );

        // Search
        bindings.insert(
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            KeyAction::StartSearch,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            KeyAction::NextMatch,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT),
            KeyAction::PrevMatch,
        );

        // Position
        bindings.insert(
            KeyEvent::new(KeyCode::Char(':'), KeyModifiers::NONE),
            KeyAction::VersePrompt,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE),
            KeyAction::VersePrompt,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
            KeyAction::CycleTranslation,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT),
            KeyAction::CycleTheme,
        );

        // Share
        bindings.insert(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
            KeyAction::StartShare,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::ToggleSelect,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
            KeyAction::ConfirmShare,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
            KeyAction::ExportCard,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );

        Self { bindings }
    }
}
