//! Character grid renderer.
//!
//! Cards are laid out row-major, `columns` per row, each [`CARD_WIDTH`]
//! columns wide and [`CARD_HEIGHT`] rows tall:
//!
//! ```text
//! Rick Sanchez                  Morty Smith
//! Alive - Human                 Alive - Human
//!
//! ```
//!
//! The card under the cursor is drawn in the selection colors; search
//! matches are highlighted in the name of every other card.

use crate::ui::helpers::{self, centre_padding, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayCard, GridInfo, CARD_HEIGHT, CARD_WIDTH};

/// Columns between neighbouring cards.
const GUTTER: usize = 2;

/// Renders the grid window starting at `row`.
pub fn render_grid(row: usize, grid: &GridInfo, theme: &Theme, cols: usize) {
    if let Some(message) = &grid.empty_message {
        let (left, right) = centre_padding(message, cols);
        position_cursor(row + 1, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}{message}{}", " ".repeat(left), " ".repeat(right));
        print!("{}", Theme::reset());
        return;
    }

    let columns = grid.columns.max(1);
    for (index, card) in grid.cards.iter().enumerate() {
        let card_row = row + (index / columns) * CARD_HEIGHT;
        let card_col = (index % columns) * CARD_WIDTH + 1;
        render_card(card_row, card_col, card, theme);
    }
}

fn render_card(row: usize, col: usize, card: &DisplayCard, theme: &Theme) {
    let width = CARD_WIDTH - GUTTER;

    position_cursor(row, col);
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", Theme::bold());
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, card.is_selected);
    print!("{}", " ".repeat(width.saturating_sub(char_len(&card.name))));
    print!("{}", Theme::reset());

    position_cursor(row + 1, col);
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", card.tagline);
    print!("{}", " ".repeat(width.saturating_sub(char_len(&card.tagline))));
    print!("{}", Theme::reset());
}
