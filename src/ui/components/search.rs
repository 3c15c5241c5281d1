//! Search bar component renderer.
//!
//! The search box is always visible. Its border takes the accent color while
//! it has focus, and a trailing `…` marks text that has not settled yet.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box at `row`.
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ Search by name: Rick█ …  │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// Returns the next available row (`row + 3`).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let margin = if cols > SEARCH_BOX_MARGIN * 2 + 10 {
        SEARCH_BOX_MARGIN
    } else {
        0
    };
    let box_width = cols.saturating_sub(margin * 2);
    let inner_width = box_width.saturating_sub(2);

    let border_color = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(margin));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.is_focused { "█" } else { "" };
    let pending = if search.is_pending { " …" } else { "" };
    let search_text = truncate(
        &format!(" {} {}{cursor}{pending}", search.label, search.query),
        inner_width,
    );
    let padding = inner_width.saturating_sub(char_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(margin));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(margin));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
