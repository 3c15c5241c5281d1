//! Detail modal renderer.
//!
//! Drawn last, on top of whatever the body shows:
//!
//! ```text
//! ┌─ #1 Rick Sanchez ───────────────────┐
//! │                                     │
//! │  Status     Alive                   │
//! │  Species    Human                   │
//! │  ...                                │
//! │                                     │
//! │                          Esc: close │
//! └─────────────────────────────────────┘
//! ```

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const MAX_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 10;

/// Renders the modal centred in a `rows` x `cols` pane.
pub fn render_modal(modal: &ModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(4).min(MAX_WIDTH);
    if width < LABEL_WIDTH + 8 {
        return;
    }
    let inner = width - 2;
    let height = modal.fields.len() + 5;

    let top = rows.saturating_sub(height) / 2 + 1;
    let left = (cols - width) / 2 + 1;

    let title = truncate(&format!(" {} ", modal.title), inner.saturating_sub(2));
    position_cursor(top, left);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("┌─");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("{}┐", "─".repeat(inner.saturating_sub(1 + char_len(&title))));
    print!("{}", Theme::reset());

    let mut row = top + 1;
    render_line(row, left, inner, "", theme);
    row += 1;

    let value_width = inner.saturating_sub(LABEL_WIDTH + 3);
    for (label, value) in &modal.fields {
        let value = if value.is_empty() { "-" } else { value.as_str() };
        let line = format!(
            "  {label:<lw$} {}",
            truncate(value, value_width),
            lw = LABEL_WIDTH
        );
        render_line(row, left, inner, &line, theme);
        row += 1;
    }

    render_line(row, left, inner, "", theme);
    row += 1;

    let hint = truncate(&modal.hint, inner.saturating_sub(1));
    let hint_line = format!("{hint:>width$}", width = inner.saturating_sub(1));
    render_line(row, left, inner, &hint_line, theme);
    row += 1;

    position_cursor(row, left);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}

fn render_line(row: usize, left: usize, inner: usize, text: &str, theme: &Theme) {
    let text = truncate(text, inner);

    position_cursor(row, left);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{text}");
    print!("{}", " ".repeat(inner.saturating_sub(char_len(&text))));
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("│");
    print!("{}", Theme::reset());
}
