use crate::canvas::Canvas;
use crate::cell::{Cell, CellStyle};
use crate::error::Result;
use crate::geometry::{Area, Point, Size};

use super::Terminal;

/// Headless terminal surface that keeps the frame in memory.
///
/// Used by tests and anywhere a frame needs to be inspected instead of shown.
#[derive(Debug, Clone)]
pub struct MemoryTerminal {
    frame: Canvas,
    flushes: usize,
}

impl MemoryTerminal {
    pub fn new(size: Size) -> Result<Self> {
        Ok(Self {
            frame: Canvas::new(Area::from_size(size))?,
            flushes: 0,
        })
    }

    pub fn cell(&self, point: Point) -> Result<&Cell> {
        self.frame.cell(point)
    }

    /// Runes of row `y` as a string; continuation cells are skipped.
    pub fn row_text(&self, y: i32) -> String {
        self.frame
            .rows()
            .find(|(row, _)| *row == y)
            .map(|(_, cells)| {
                cells
                    .iter()
                    .filter(|cell| !cell.continuation)
                    .map(|cell| cell.rune)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All rows, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        (0..self.frame.size().height).map(|y| self.row_text(y)).collect()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn frame(&self) -> &Canvas {
        &self.frame
    }
}

impl Terminal for MemoryTerminal {
    fn size(&self) -> Size {
        self.frame.size()
    }

    fn set_cell(&mut self, point: Point, rune: char, style: &CellStyle) -> Result<()> {
        self.frame.overwrite_cell(point, rune, style).map(|_| ())
    }

    fn clear(&mut self) -> Result<()> {
        self.frame.clear();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        self.frame = Canvas::new(Area::from_size(size))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_skip_continuations() {
        let mut term = MemoryTerminal::new(Size::new(4, 2)).unwrap();
        term.set_cell(Point::new(0, 1), '界', &CellStyle::default())
            .unwrap();
        term.set_cell(Point::new(2, 1), 'a', &CellStyle::default())
            .unwrap();
        assert_eq!(term.lines(), vec!["    ".to_string(), "界a ".to_string()]);
    }

    #[test]
    fn clear_resets_the_frame() {
        let mut term = MemoryTerminal::new(Size::new(2, 1)).unwrap();
        term.set_cell(Point::new(0, 0), 'x', &CellStyle::default())
            .unwrap();
        term.clear().unwrap();
        term.flush().unwrap();
        assert_eq!(term.row_text(0), "  ");
        assert_eq!(term.flush_count(), 1);
    }

    #[test]
    fn writes_over_a_wide_rune_tail_replace_it() {
        let mut term = MemoryTerminal::new(Size::new(3, 1)).unwrap();
        term.set_cell(Point::new(0, 0), '界', &CellStyle::default())
            .unwrap();
        term.set_cell(Point::new(1, 0), 'b', &CellStyle::default())
            .unwrap();
        assert_eq!(term.row_text(0), " b ");
    }

    #[test]
    fn resize_replaces_the_frame() {
        let mut term = MemoryTerminal::new(Size::new(2, 1)).unwrap();
        term.resize(Size::new(3, 2)).unwrap();
        assert_eq!(term.size(), Size::new(3, 2));
        assert!(term.resize(Size::new(0, 2)).is_err());
    }
}
