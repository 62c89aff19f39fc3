//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the active list up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the active list down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first item. Default: g/Home
    ScrollToTop,
    /// Jump to the last item. Default: G/End
    ScrollToBottom,

    // Screens
    /// Next screen: Meal Events → Menu Items → Menu Sets. Default: Tab/]
    NextScreen,
    /// Previous screen. Default: Shift+Tab/[
    PrevScreen,
    /// Jump to a screen by number (1-3).
    SelectScreen(usize),

    // Search and filters
    /// Start typing a search query. Default: /
    StartSearch,
    /// Clear the search. Default: Esc
    CancelSearch,
    /// Cycle event sort order. Default: o
    CycleSort,
    /// Toggle hiding past events. Default: p
    TogglePastEvents,

    // Pages
    /// Move the selection down: next event in the list or on the dashboard. Default: J
    SelectNext,
    /// Move the selection up. Default: K
    SelectPrev,
    /// Open the selected event's detail page. Default: Enter
    OpenSelected,
    /// Open the dashboard of upcoming events. Default: d
    Dashboard,
    /// List more upcoming events on the dashboard. Default: m
    ShowMore,
    /// Open the signed-in user's profile. Default: u
    Profile,
    /// Open the admin overview. Default: a
    AdminDashboard,
    /// Close the open page. Default: Esc/Backspace
    ClosePage,

    // Application
    /// Re-read the snapshot file. Default: r
    Reload,
    /// Hide the current notice. Default: x
    DismissNotice,
    /// Show or hide the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
