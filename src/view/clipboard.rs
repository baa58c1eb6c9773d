//! Clipboard integration via the OSC 52 escape sequence.
//!
//! The terminal owns the clipboard here: the sequence goes straight to
//! stdout, bypassing the ratatui buffer, and the hosting terminal stores
//! the payload. Works in iTerm2, kitty, WezTerm, Ghostty and most modern
//! emulators; terminals without OSC 52 support silently ignore it.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Build the OSC 52 sequence that places `text` on the system clipboard.
fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

/// Copy `text` to the system clipboard through the terminal.
pub fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()
}
