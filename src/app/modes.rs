//! Input mode and derived render state types.
//!
//! The page reacts to keys differently depending on whether the search input
//! has focus. What it draws in the body is a separate, derived question
//! answered by [`RenderState`].

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate the grid, pages and portions.
    ///
    /// Available keybindings: arrows/hjkl (move), enter (details), / (search),
    /// n/p (page), ]/[ (portion), 1-9/0 (page in portion), r (reload), q (quit).
    Browse,

    /// Keys edit the search text.
    ///
    /// Printable characters and backspace change the query; enter, esc or tab
    /// hand focus back to the grid without clearing it.
    Search,
}

/// What the body of the page shows. Exactly one applies at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// A request is in flight.
    Loading,
    /// The last request failed; carries the user-facing message.
    Error(String),
    /// The last request succeeded; the grid and pagination are shown.
    List,
}

/// Whether the host lets the plugin make web requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebAccess {
    /// The permission prompt has not been answered yet.
    #[default]
    Pending,
    Granted,
    /// Requests would be refused by the host and never answered.
    Denied,
}
