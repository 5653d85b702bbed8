//! Styled grid cells.

use serde::Deserialize;

/// Terminal colors understood by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Indexed(u8),
    Rgb { r: u8, g: u8, b: u8 },
}

/// Visual attributes applied to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverse: bool,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }
}

/// One grid position.
///
/// A continuation cell is the right half of a full-width rune that starts in
/// the cell to its left; it is never written on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub rune: char,
    pub style: CellStyle,
    pub continuation: bool,
}

impl Cell {
    pub const BLANK: char = ' ';

    pub fn new(rune: char, style: CellStyle) -> Self {
        Self {
            rune,
            style,
            continuation: false,
        }
    }

    pub(crate) fn continuation_of(style: CellStyle) -> Self {
        Self {
            rune: Self::BLANK,
            style,
            continuation: true,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(Self::BLANK, CellStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_builder_sets_fields() {
        let style = CellStyle::new().fg(Color::Red).bg(Color::Indexed(8)).bold();
        assert_eq!(style.fg, Color::Red);
        assert_eq!(style.bg, Color::Indexed(8));
        assert!(style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.rune, ' ');
        assert!(!cell.continuation);
        assert_eq!(cell.style, CellStyle::default());
    }

    #[test]
    fn colors_deserialize_from_snake_case() {
        let color: Color = serde_json::from_str("\"bright_blue\"").unwrap();
        assert_eq!(color, Color::BrightBlue);
        let rgb: Color = serde_json::from_str(r#"{"rgb":{"r":1,"g":2,"b":3}}"#).unwrap();
        assert_eq!(rgb, Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
