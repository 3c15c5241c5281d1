//! Composable UI component renderers.
//!
//! Each component draws one part of the page at an explicit row and returns
//! or ignores the next free row. [`render_page`] owns the layout.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box, always visible
//! - [`grid`]: Character cards
//! - [`status`]: Loading and error placeholders
//! - [`pagination`]: Page buttons and portion arrows
//! - [`modal`]: Character detail overlay
//! - [`footer`]: Keybinding hints

mod footer;
mod grid;
mod header;
mod modal;
mod pagination;
mod search;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel, CHROME_ROWS};

use footer::render_footer;
use grid::render_grid;
use header::render_header;
use modal::render_modal;
use pagination::render_pagination;
use search::render_search_bar;
use status::render_status;

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole page.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Body: grid, loading or error]
/// [Pagination, only with the grid]
/// [Border]
/// [Footer]
/// ```
///
/// The modal, if open, is drawn over the result.
pub fn render_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    let body_rows = rows.saturating_sub(CHROME_ROWS).max(1);
    match &vm.body {
        BodyView::Loading(status) => {
            render_status(current_row, body_rows, status, &theme.colors.loading_fg, theme, cols);
        }
        BodyView::Error(status) => {
            render_status(current_row, body_rows, status, &theme.colors.error_fg, theme, cols);
        }
        BodyView::Grid(grid) => render_grid(current_row, grid, theme, cols),
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    if let Some(pagination) = &vm.pagination {
        render_pagination(pagination_row, pagination, theme, cols);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(modal, theme, rows, cols);
    }
}
