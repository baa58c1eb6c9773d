//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Movement
    /// Move down: next verse in the reader, cursor down in lists. Default: j/↓
    Down,
    /// Move up: previous verse in the reader, cursor up in lists. Default: k/↑
    Up,
    /// Scroll the reader down one page without moving the verse. Default: Ctrl+d/Page Down
    PageDown,
    /// Scroll the reader up one page without moving the verse. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll the reader to the top of the chapter. Default: g/Home
    Top,
    /// Scroll the reader to the bottom of the chapter. Default: G/End
    Bottom,

    // Selection
    /// Activate the focused item: expand a book, pick a chapter, jump to a match. Default: Enter
    Select,
    /// Dismiss the innermost active thing: overlay, search, share selection, expanded book. Default: Esc/h
    Cancel,

    // Focus
    /// Cycle focus between the sidebar and the reader pane. Default: Tab
    CycleFocus,
    /// Show or hide the sidebar (and focus it when shown). Default: b
    ToggleSidebar,

    // Search
    /// Open the search input. Default: /
    StartSearch,
    /// Jump to the next match of the active search. Default: n
    NextMatch,
    /// Jump to the previous match of the active search. Default: N
    PrevMatch,

    // Position
    /// Open the go-to-verse prompt. Default: :/v
    VersePrompt,
    /// Switch to the next translation, preserving position. Default: t
    CycleTranslation,
    /// Switch to the next theme and persist the choice. Default: T
    CycleTheme,

    // Share
    /// Start share mode with the active verse selected. Default: s
    StartShare,
    /// Toggle the active verse in the share selection. Default: Space
    ToggleSelect,
    /// Compose the selection and copy it to the clipboard. Default: y
    ConfirmShare,
    /// Compose the selection and write it to a card file. Default: x
    ExportCard,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
