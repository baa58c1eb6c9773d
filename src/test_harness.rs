//! Acceptance test harness for TUI testing
//!
//! Provides a high-level API for acceptance testing reading flows by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::KeyBindings;
use crate::corpus::CorpusSet;
use crate::model::{Theme, Translation};
use crate::state::AppState;
use crate::view::{ColorConfig, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
#[allow(dead_code)]
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests. All harness apps run over the embedded
/// translation datasets with colors disabled, so rendered output can be
/// asserted on plain text.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    #[allow(dead_code)] // Stored for potential future use
    width: u16,
    #[allow(dead_code)] // Stored for potential future use
    height: u16,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Start the app over the embedded datasets with default terminal size (80x24)
    #[allow(dead_code)]
    pub fn start() -> Result<Self, TuiError> {
        Self::start_with_size(80, 24)
    }

    /// Start the app over the embedded datasets with a custom terminal size
    pub fn start_with_size(width: u16, height: u16) -> Result<Self, TuiError> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;

        let corpora = CorpusSet::load_builtin()
            .map_err(|e| TuiError::Io(std::io::Error::other(e.to_string())))?;
        let app_state = AppState::new(corpora, Translation::default(), Theme::default());
        let key_bindings = KeyBindings::default();
        let colors = ColorConfig::from_env_and_args(true);

        let app = TuiApp::new_for_test(terminal, app_state, key_bindings, colors);

        Ok(Self {
            app,
            width,
            height,
            running: true,
        })
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let key_event = KeyEvent::new(key, mods);
        let quit = self.app.handle_key_test(key_event);

        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or the app quits.
    #[allow(dead_code)]
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break; // Quit encountered
            }
        }
    }

    /// Type text (sends individual character key events)
    ///
    /// Useful for search input and the verse prompt.
    #[allow(dead_code)]
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Access app state for assertions
    #[allow(dead_code)]
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't crash/quit)
    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// Renders the app state to the TestBackend and returns the buffer
    /// contents as a string representation.
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    #[allow(dead_code)]
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }

    /// Assert that the current render matches a snapshot
    ///
    /// Renders the current state and uses insta to verify against
    /// a stored snapshot. Useful for regression testing UI output.
    #[allow(dead_code)]
    pub fn assert_snapshot(&mut self, snapshot_name: &str) {
        let output = self.render_to_string();
        insta::assert_snapshot!(snapshot_name, output);
    }
}
