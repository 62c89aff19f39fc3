//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the screen tab header in lines (border + content).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer line (filters, notice, key hints).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the search input widget in lines.
///
/// Shown while typing and while a search is applied to the active screen.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Upper bound for the input poll timeout when nothing is scheduled.
pub const IDLE_POLL_MS: u64 = 250;
