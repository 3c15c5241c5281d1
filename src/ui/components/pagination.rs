//! Pagination bar renderer.
//!
//! ```text
//!        ‹  11 12 [13] 14 15 16 17 18 19 20  ›   Page 13 of 42
//! ```
//!
//! The portion arrows are dimmed when there is nothing further in that
//! direction.

use crate::ui::helpers::{centre_padding, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pagination bar centred on `row`.
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) {
    let buttons: Vec<String> = info
        .buttons
        .iter()
        .map(|b| {
            if b.is_current {
                format!("[{}]", b.number)
            } else {
                b.number.to_string()
            }
        })
        .collect();

    let plain = format!("‹  {}  ›   {}", buttons.join(" "), info.summary);
    let (left, _) = centre_padding(&plain, cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(left));

    render_arrow("‹", info.has_prev_portion, theme);
    print!("  ");

    for (i, button) in info.buttons.iter().enumerate() {
        if i > 0 {
            print!(" ");
        }
        if button.is_current {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.current_page_fg));
            print!("[{}]", button.number);
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", button.number);
        }
        print!("{}", Theme::reset());
    }

    print!("  ");
    render_arrow("›", info.has_next_portion, theme);

    print!("   ");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", info.summary);
    print!("{}", Theme::reset());

    print!("{}", " ".repeat(cols.saturating_sub(left + char_len(&plain))));
}

fn render_arrow(arrow: &str, enabled: bool, theme: &Theme) {
    if enabled {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{arrow}");
    print!("{}", Theme::reset());
}
