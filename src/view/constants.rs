//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the status bar in lines.
///
/// Single line at the bottom for transient notices and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines.
///
/// Used while a query is being typed. Includes border and text input area.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Width percentage of the sidebar pane.
///
/// The reader pane takes the rest.
pub const SIDEBAR_WIDTH_PERCENT: u16 = 30;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
