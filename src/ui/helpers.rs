//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used by several components: cursor positioning, text
//! truncation and search-match highlighting. All text measurement is in
//! UTF-8 characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending in `…` when cut.
///
/// # Example
///
/// ```rust
/// use character_browser::ui::helpers::truncate;
///
/// assert_eq!(truncate("Rick Sanchez", 20), "Rick Sanchez");
/// assert_eq!(truncate("Rick Sanchez", 6), "Rick …");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Text centred in `width` columns: returns the left and right padding.
#[must_use]
pub fn centre_padding(text: &str, width: usize) -> (usize, usize) {
    let len = char_len(text).min(width);
    let left = (width - len) / 2;
    (left, width - len - left)
}

/// Splits `text` into `(segment, is_match)` runs according to `ranges`.
///
/// Ranges are `(start, end)` character indices with exclusive end. Ranges
/// that overlap earlier ones or run past the text are clipped, so a name cut
/// short by [`truncate`] can reuse the ranges computed for the full name.
#[must_use]
pub fn highlight_segments(text: &str, ranges: &[(usize, usize)]) -> Vec<(String, bool)> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.max(pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }
        if start > pos {
            segments.push((chars[pos..start].iter().collect(), false));
        }
        segments.push((chars[start..end].iter().collect(), true));
        pos = end;
    }

    if pos < chars.len() {
        segments.push((chars[pos..].iter().collect(), false));
    }
    segments
}

/// Prints `text` with search matches highlighted.
///
/// Selected cards skip match highlighting so the selection colors stay
/// uniform. After each highlight the base style is restored: `text_normal`
/// on the default background.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    for (segment, is_match) in highlight_segments(text, ranges) {
        if is_match {
            print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
            print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
            print!("{segment}");
            print!("{}", Theme::reset());
            print!("{}", Theme::fg(&theme.colors.text_normal));
        } else {
            print!("{segment}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, is_match: bool) -> (String, bool) {
        (text.to_string(), is_match)
    }

    #[test]
    fn splits_matches_from_plain_text() {
        assert_eq!(
            highlight_segments("Rick Sanchez", &[(0, 2), (5, 6)]),
            vec![seg("Ri", true), seg("ck ", false), seg("S", true), seg("anchez", false)]
        );
    }

    #[test]
    fn clips_ranges_past_the_end() {
        assert_eq!(
            highlight_segments("Rick …", &[(0, 1), (10, 12)]),
            vec![seg("R", true), seg("ick …", false)]
        );
        assert_eq!(highlight_segments("ab", &[(1, 9)]), vec![seg("a", false), seg("b", true)]);
    }

    #[test]
    fn uses_character_indices() {
        assert_eq!(
            highlight_segments("Señor", &[(2, 3)]),
            vec![seg("Se", false), seg("ñ", true), seg("or", false)]
        );
    }

    #[test]
    fn truncates_by_characters() {
        assert_eq!(truncate("ñññññ", 3), "ññ…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn centre_padding_splits_remaining_width() {
        assert_eq!(centre_padding("abcd", 10), (3, 3));
        assert_eq!(centre_padding("abc", 10), (3, 4));
        assert_eq!(centre_padding("too long for it", 4), (0, 0));
    }
}
