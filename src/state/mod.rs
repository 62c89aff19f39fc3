//! UI state.
//!
//! State transitions are plain functions and methods testable without a
//! terminal. Time is passed in as `Instant` wherever it matters.

pub mod app_state;
pub mod debounce;
pub mod event_query;
pub mod notice;
pub mod page;
pub mod scroll_handler;
pub mod search;
pub mod search_input_handler;
pub mod session;
pub mod tab_handler;

// Re-export for convenience
pub use app_state::{AppState, ListPane, ListSettings, Screen};
pub use debounce::Debouncer;
pub use event_query::{EventQuery, SortOrder, UnknownSortOrder};
pub use notice::{Notice, Notices, Severity};
pub use page::{AdminSummary, Page, PageDenied, RequestTally};
pub use scroll_handler::handle_scroll_action;
pub use search::{SearchQuery, SearchState};
pub use session::{Session, SessionView};
pub use tab_handler::handle_tab_action;
