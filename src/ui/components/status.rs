//! Loading and error placeholder renderer.
//!
//! Both placeholders replace the grid and pagination entirely: a message line
//! in the state's color and a dimmed hint below it, centred in the body area.

use crate::ui::helpers::{centre_padding, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders `status` centred in the `body_rows` rows starting at `row`.
pub fn render_status(
    row: usize,
    body_rows: usize,
    status: &StatusInfo,
    color: &str,
    theme: &Theme,
    cols: usize,
) {
    let message_row = row + body_rows.saturating_sub(2) / 2;

    let message = truncate(&status.message, cols);
    let (left, right) = centre_padding(&message, cols);

    position_cursor(message_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(left));
    print!("{message}");
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());

    let subtitle = truncate(&status.subtitle, cols);
    let (left, right) = centre_padding(&subtitle, cols);

    position_cursor(message_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(left));
    print!("{subtitle}");
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());
}
