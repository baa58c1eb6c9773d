//! Navigation, search and selection state machines (pure).
//!
//! All state transitions are synchronous and side-effect free, testable
//! without a terminal.

pub mod app_state;
pub mod reader;
pub mod search;
pub mod search_input_handler;
pub mod share;
pub mod sidebar;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, ReaderScroll};
pub use reader::ReaderState;
pub use search::{
    execute_search, go_to, highlight_ranges, normalize_text, SearchMatch, SearchQuery,
    SearchScope, SearchState,
};
pub use share::{compose_share_text, ShareComposer};
pub use sidebar::{SidebarRow, SidebarState};
