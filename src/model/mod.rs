//! Domain model types (pure).
//!
//! All types in this module are pure data; anything fallible exposes a
//! typed error next to the type it belongs to.

pub mod book;
pub mod key_action;
pub mod theme;
pub mod translation;

// Re-export for convenience
pub use book::Book;
pub use key_action::KeyAction;
pub use theme::{InvalidTheme, Theme};
pub use translation::{InvalidTranslation, Translation};
