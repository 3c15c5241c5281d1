//! View model types representing renderable UI state.
//!
//! View models are computed from [`PageState`](crate::app::PageState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready
//! strings and flags only; every decision about what to show has already been
//! made by the time one exists.

/// Width of one character card in the grid, including its gutter.
pub const CARD_WIDTH: usize = 30;

/// Height of one character card: name, tagline, spacer.
pub const CARD_HEIGHT: usize = 3;

/// Rows taken by everything that is not the body: top blank line, header,
/// border, 3-line search box, pagination bar, border, footer.
pub const CHROME_ROWS: usize = 10;

/// Number of card columns that fit in `cols` terminal columns (at least one).
///
/// # Examples
///
/// ```
/// use character_browser::ui::viewmodel::grid_columns;
///
/// assert_eq!(grid_columns(10), 1);
/// assert_eq!(grid_columns(90), 3);
/// ```
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    let columns = cols / CARD_WIDTH;
    if columns == 0 {
        1
    } else {
        columns
    }
}

/// Number of card rows that fit in `rows` terminal rows (at least one).
#[must_use]
pub const fn grid_rows(rows: usize) -> usize {
    let body = rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT;
    if body == 0 {
        1
    } else {
        body
    }
}

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub body: BodyView,
    /// Present only when the body shows the grid.
    pub pagination: Option<PaginationInfo>,
    /// Present while the detail modal is open.
    pub modal: Option<ModalInfo>,
    pub footer: FooterInfo,
}

/// The mutually exclusive body of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Loading(StatusInfo),
    Error(StatusInfo),
    Grid(GridInfo),
}

/// A centered placeholder message (loading or error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub message: String,
    pub subtitle: String,
}

/// The visible window of the character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInfo {
    /// Cards in row-major order, already windowed to the visible rows.
    pub cards: Vec<DisplayCard>,
    pub columns: usize,
    /// Shown instead of cards when the page has no results.
    pub empty_message: Option<String>,
}

/// Display information for one character card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub name: String,
    pub tagline: String,
    pub is_selected: bool,
    /// Character ranges of `name` matching the search text, `(start, end)`
    /// with exclusive end, in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Pagination bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub buttons: Vec<PageButton>,
    pub has_prev_portion: bool,
    pub has_next_portion: bool,
    /// e.g. `"Page 3 of 42"`.
    pub summary: String,
}

/// One page-number button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub is_current: bool,
}

/// Detail modal contents for the selected character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    pub title: String,
    /// Label/value rows in display order.
    pub fields: Vec<(String, String)>,
    pub hint: String,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Search input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub label: String,
    pub query: String,
    /// Whether keystrokes currently go to the input.
    pub is_focused: bool,
    /// Whether the typed text has not yet settled into a request.
    pub is_pending: bool,
}
