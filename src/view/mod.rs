//! TUI rendering and terminal management (impure shell)

mod card;
mod clipboard;
pub mod constants;
mod help;
mod layout;
mod reader_pane;
mod results;
mod search_input;
mod sidebar;
mod styles;

pub use help::render_help_overlay;
pub use reader_pane::ReaderMetrics;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::config::{save_theme, KeyBindings, ResolvedConfig};
use crate::corpus::CorpusSet;
use crate::model::KeyAction;
use crate::state::{compose_share_text, AppState, FocusPane, SearchState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    /// Reader scroll metrics of the last drawn frame.
    metrics: ReaderMetrics,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        key_bindings: KeyBindings,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings,
            colors,
            metrics: ReaderMetrics::default(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Event-driven: redraws
    /// only after input or a resize; idle polling consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(500);

        // Initial render - ensures the screen has content immediately
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Any key press retires the transient status notice.
        self.app_state.status = None;

        // Help overlay blocks everything except closing, quitting and
        // scrolling the overlay itself.
        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        // Verse prompt captures digits while open.
        if self.app_state.verse_prompt.is_some() {
            match key.code {
                KeyCode::Char(ch) if ch.is_ascii_digit() => self.app_state.verse_prompt_input(ch),
                KeyCode::Backspace => self.app_state.verse_prompt_backspace(),
                KeyCode::Enter => self.app_state.submit_verse_prompt(),
                KeyCode::Esc => self.app_state.cancel_verse_prompt(),
                _ => {}
            }
            return false;
        }

        // Character input while typing a search query (before key
        // binding dispatch, so 'j' types a letter instead of moving).
        if let SearchState::Typing { .. } = &self.app_state.search {
            match key.code {
                KeyCode::Tab => {
                    self.app_state.search_cycle_scope();
                    return false;
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app_state.search_input(ch);
                    return false;
                }
                KeyCode::Backspace => {
                    self.app_state.search_backspace();
                    return false;
                }
                KeyCode::Left => {
                    self.app_state.search_cursor_left();
                    return false;
                }
                KeyCode::Right => {
                    self.app_state.search_cursor_right();
                    return false;
                }
                KeyCode::Enter => {
                    self.app_state.submit_search();
                    return false;
                }
                KeyCode::Esc => {
                    self.app_state.cancel_search();
                    return false;
                }
                _ => {} // Fall through to key binding dispatch
            }
        }

        // Results overlay is modal: navigation only while visible.
        if self.app_state.results_visible {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => self.app_state.results_down(),
                KeyCode::Up | KeyCode::Char('k') => self.app_state.results_up(),
                KeyCode::Enter => self.app_state.results_jump(),
                KeyCode::Esc => self.app_state.results_close(),
                _ => {}
            }
            return false;
        }

        // Look up action in key bindings
        let Some(action) = self.key_bindings.get(key) else {
            // Left is not bound; on a focused sidebar it still collapses,
            // mirroring the h binding.
            if key.code == KeyCode::Left && self.app_state.focus == FocusPane::Sidebar {
                self.app_state.sidebar_collapse();
            }
            return false;
        };

        // Dispatch action
        match action {
            KeyAction::Quit => return true,

            KeyAction::Help => {
                self.app_state.help_visible = true;
                self.app_state.help_scroll = 0;
            }

            KeyAction::Down => match self.app_state.focus {
                FocusPane::Sidebar => self.app_state.sidebar_down(),
                _ => self.app_state.next_verse(),
            },
            KeyAction::Up => match self.app_state.focus {
                FocusPane::Sidebar => self.app_state.sidebar_up(),
                _ => self.app_state.prev_verse(),
            },

            KeyAction::PageDown => {
                let page = (self.metrics.viewport_rows / 2).max(1);
                let max = self.metrics.max_offset();
                self.app_state.scroll.scroll_down(page, max);
            }
            KeyAction::PageUp => {
                let page = (self.metrics.viewport_rows / 2).max(1);
                self.app_state.scroll.scroll_up(page);
            }
            KeyAction::Top => self.app_state.scroll.scroll_to_top(),
            KeyAction::Bottom => {
                let max = self.metrics.max_offset();
                self.app_state.scroll.scroll_to_bottom(max);
            }

            KeyAction::Select => {
                if self.app_state.focus == FocusPane::Sidebar {
                    self.app_state.sidebar_activate();
                }
            }
            KeyAction::Cancel => self.cancel_current(),
            KeyAction::CycleFocus => self.app_state.cycle_focus(),
            KeyAction::ToggleSidebar => self.app_state.toggle_sidebar(),

            KeyAction::StartSearch => self.app_state.start_search(),
            KeyAction::NextMatch => self.app_state.next_match(),
            KeyAction::PrevMatch => self.app_state.prev_match(),

            KeyAction::VersePrompt => self.app_state.open_verse_prompt(),

            KeyAction::CycleTranslation => {
                self.app_state.cycle_translation();
                let translation = self.app_state.reader().translation();
                self.app_state
                    .set_status(format!("Tradução: {}", translation.label()));
            }
            KeyAction::CycleTheme => {
                let theme = self.app_state.cycle_theme();
                match save_theme(theme) {
                    Ok(()) => self
                        .app_state
                        .set_status(format!("Tema: {}", theme.as_str())),
                    Err(error) => {
                        warn!(%error, "failed to persist theme");
                        self.app_state
                            .set_status(format!("Tema: {} (não foi salvo)", theme.as_str()));
                    }
                }
            }

            KeyAction::StartShare => self.app_state.start_share(),
            KeyAction::ToggleSelect => self.app_state.toggle_verse(),
            KeyAction::ConfirmShare => self.copy_selection(),
            KeyAction::ExportCard => self.export_selection(),
        }

        false
    }

    /// Keys while the help overlay is open: close, quit, or scroll it.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            self.app_state.help_visible = false;
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help | KeyAction::Cancel => self.app_state.help_visible = false,
            KeyAction::Down => {
                self.app_state.help_scroll = self.app_state.help_scroll.saturating_add(1);
            }
            KeyAction::Up => {
                self.app_state.help_scroll = self.app_state.help_scroll.saturating_sub(1);
            }
            KeyAction::PageDown => {
                self.app_state.help_scroll = self.app_state.help_scroll.saturating_add(10);
            }
            KeyAction::PageUp => {
                self.app_state.help_scroll = self.app_state.help_scroll.saturating_sub(10);
            }
            KeyAction::Top => self.app_state.help_scroll = 0,
            _ => {}
        }
        false
    }

    /// Esc cascade: leave share mode first, then an active search, then
    /// collapse or return to the sidebar.
    fn cancel_current(&mut self) {
        if self.app_state.share.is_active() {
            self.app_state.cancel_share();
        } else if self.app_state.search.is_active() {
            self.app_state.cancel_search();
        } else if self.app_state.focus == FocusPane::Sidebar {
            self.app_state.sidebar_collapse();
        } else if self.app_state.sidebar_visible {
            self.app_state.focus = FocusPane::Sidebar;
        }
    }

    /// Compose the current selection and copy it to the clipboard.
    fn copy_selection(&mut self) {
        if !self.app_state.share.begin_export() {
            return;
        }
        let count = self.app_state.share.count();
        let notice = match self.composed_selection(false) {
            Some(text) if !text.is_empty() => match clipboard::copy_to_clipboard(&text) {
                Ok(()) => {
                    info!(verses = count, "selection copied to clipboard");
                    format!("Copiado: {count} versículo(s)")
                }
                Err(error) => {
                    warn!(%error, "clipboard copy failed");
                    "Falha ao copiar para a área de transferência".to_string()
                }
            },
            _ => "Nada selecionado".to_string(),
        };
        self.app_state.share.finish_export();
        self.app_state.set_status(notice);
    }

    /// Render the current selection into a text card file.
    fn export_selection(&mut self) {
        if !self.app_state.share.begin_export() {
            return;
        }
        let notice = match self.card_payload() {
            Some((text, reference)) if !text.is_empty() => {
                match card::export_card(&text, &reference) {
                    Ok(path) => {
                        info!(path = %path.display(), "verse card exported");
                        format!("Cartão salvo em {}", path.display())
                    }
                    Err(error) => {
                        warn!(%error, "card export failed");
                        "Falha ao salvar o cartão".to_string()
                    }
                }
            }
            _ => "Nada selecionado".to_string(),
        };
        self.app_state.share.finish_export();
        self.app_state.set_status(notice);
    }

    /// Share text for the current selection, or `None` without a book.
    fn composed_selection(&self, lines_only: bool) -> Option<String> {
        let reader = self.app_state.reader();
        let corpus = self.app_state.corpus();
        let book = reader.current_book(corpus)?;
        Some(compose_share_text(
            &self.app_state.share,
            book,
            reader.chapter(),
            reader.translation(),
            lines_only,
        ))
    }

    /// Verse lines plus the reference string the card layout wants.
    fn card_payload(&self) -> Option<(String, String)> {
        let reader = self.app_state.reader();
        let corpus = self.app_state.corpus();
        let book = reader.current_book(corpus)?;
        let text = compose_share_text(
            &self.app_state.share,
            book,
            reader.chapter(),
            reader.translation(),
            true,
        );
        let reference = format!(
            "{} {} · {}",
            book.name,
            reader.chapter(),
            reader.translation().label()
        );
        Some((text, reference))
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let colors = self.colors;
        let mut metrics = ReaderMetrics::default();
        self.terminal.draw(|frame| {
            metrics = layout::render_layout(frame, &self.app_state, colors);
        })?;
        self.metrics = metrics;
        // Keep the stored offset in sync with what was actually shown,
        // so free scrolling continues from the visible position.
        self.app_state.scroll.offset = metrics.offset;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.
//
// DO NOT use these in production code.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// This allows tests to construct TuiApp directly without going through
    /// terminal initialization. Used by acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        colors: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            colors,
            metrics: ReaderMetrics::default(),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame (test-only accessor)
    ///
    /// Calls the internal draw() method to render the current state
    /// to the TestBackend. Useful for snapshot testing.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    ///
    /// Provides access to the terminal backend for buffer inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.
// These delegate to the pub(crate) test helpers above.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    ///
    /// Delegates to new_for_test. Only available with bench-internals feature.
    pub fn new_for_bench(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        colors: ColorConfig,
    ) -> Self {
        Self::new_for_test(terminal, app_state, key_bindings, colors)
    }

    /// Handle a single keyboard event (benchmark-only accessor)
    ///
    /// Delegates to handle_key_test. Only available with bench-internals feature.
    pub fn handle_key_bench(&mut self, key: KeyEvent) -> bool {
        self.handle_key_test(key)
    }

    /// Render a single frame (benchmark-only accessor)
    ///
    /// Delegates to render_test. Only available with bench-internals feature.
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }
}

/// Build the initial state and run the TUI until the user quits.
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(
    corpora: CorpusSet,
    config: ResolvedConfig,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let app_state = AppState::new(corpora, config.translation, config.theme);
    let mut app = TuiApp::new(app_state, config.keybindings, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves the alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
