//! Terminal display width helpers.
//!
//! Widths come from the `unicode-width` tables (East-Asian ambiguous runes
//! count as narrow). Runes the tables give no width, or a zero width, still
//! occupy one cell once they land on the grid.

use unicode_width::UnicodeWidthChar;

/// Number of cells `rune` occupies: 1 for half-width, 2 for full-width.
pub fn rune_width(rune: char) -> usize {
    match rune.width() {
        Some(2) => 2,
        _ => 1,
    }
}

/// Total display width of `text` as it would be laid out on the grid.
pub fn text_width(text: &str) -> usize {
    text.chars().map(rune_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_half_and_full_width() {
        assert_eq!(rune_width('a'), 1);
        assert_eq!(rune_width('⇄'), 1);
        assert_eq!(rune_width('…'), 1);
        assert_eq!(rune_width('界'), 2);
        assert_eq!(rune_width('，'), 2);
    }

    #[test]
    fn control_and_zero_width_take_one_cell() {
        assert_eq!(rune_width('\u{7}'), 1);
        assert_eq!(rune_width('\u{200B}'), 1);
    }

    #[test]
    fn text_width_sums_runes() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("ab界"), 4);
        assert_eq!(text_width("你好，世界"), 10);
    }
}
